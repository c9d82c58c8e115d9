#[derive(Debug, Clone)]
pub enum Message {
    // === DASHBOARD CARD MESSAGES ===
    TotalSleepTitle,
    TotalAwakeTitle,
    NightSleepTitle,
    CompletionOfRequired,
    SleepTarget(String),    // formatted target
    SleepRemaining(String), // grammatical duration
    SleepExceeded(String),  // grammatical duration
    CurrentWakefulness(String),
    PredictedBedtime(String), // bedtime or placeholder
    NapCountdownTitle,
    NightCountdownTitle,

    // === PREDICTION PLACEHOLDERS ===
    PredictionNoData,
    PredictionInsufficientData,
    PredictionFailed,
    PredictionErrorDetails(String),

    // === SUMMARY MESSAGES ===
    SummaryHeader(String), // date
    SleepIntervalsHeader,
    AwakeIntervalsHeader,
    NoIntervalsFound,
    IntervalsTotal(String),

    // === DAY RECORD MESSAGES ===
    DayRecordReadFailed(String),  // path
    DayRecordParseFailed(String), // error
    DayRecordLoaded { entries: usize, date: String },

    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigReadFailed(String),

    // === WATCH MESSAGES ===
    WatchStarted(u64), // tick interval, seconds
    WatchNotActive,
    WatchConditionLost,
    WatchShuttingDown,
    WatchCtrlCListenFailed(String),
}
