//! Display implementation for dremota messages.
//!
//! Dashboard text is Ukrainian to match the duration labels it sits next to;
//! CLI status and error text is English.

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === DASHBOARD CARD MESSAGES ===
            Message::TotalSleepTitle => "Загальний сон за день".to_string(),
            Message::TotalAwakeTitle => "Час бадьорості".to_string(),
            Message::NightSleepTitle => "Тривалість нічного сну".to_string(),
            Message::CompletionOfRequired => "Від необхідного".to_string(),
            Message::SleepTarget(target) => format!("Ціль: {}", target),
            Message::SleepRemaining(duration) => format!("Залишилось: {}", duration),
            Message::SleepExceeded(duration) => format!("Перевиконано: {}", duration),
            Message::CurrentWakefulness(duration) => format!("Тривалість бадьорості зараз: {}", duration),
            Message::PredictedBedtime(bedtime) => format!("Нічний сон о: {}", bedtime),
            Message::NapCountdownTitle => "Час до денного сну".to_string(),
            Message::NightCountdownTitle => "Час до нічного сну".to_string(),

            // === PREDICTION PLACEHOLDERS ===
            Message::PredictionNoData => "Немає даних для прогнозу".to_string(),
            Message::PredictionInsufficientData => "Недостатньо даних для прогнозу".to_string(),
            Message::PredictionFailed => "Помилка прогнозу".to_string(),
            Message::PredictionErrorDetails(error) => format!("Error calculating predicted night bedtime: {}", error),

            // === SUMMARY MESSAGES ===
            Message::SummaryHeader(date) => format!("Sleep summary for {}", date),
            Message::SleepIntervalsHeader => "Sleep intervals:".to_string(),
            Message::AwakeIntervalsHeader => "Awake intervals:".to_string(),
            Message::NoIntervalsFound => "No intervals found".to_string(),
            Message::IntervalsTotal(total) => format!("Total: {}", total),

            // === DAY RECORD MESSAGES ===
            Message::DayRecordReadFailed(path) => format!("Failed to read day record: {}", path),
            Message::DayRecordParseFailed(error) => format!("Failed to parse day record: {}", error),
            Message::DayRecordLoaded { entries, date } => format!("Loaded {} entries for {}", entries, date),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigReadFailed(error) => format!("Failed to read config, using defaults: {}", error),

            // === WATCH MESSAGES ===
            Message::WatchStarted(interval) => format!("Watching wakefulness, refreshing every {} seconds", interval),
            Message::WatchNotActive => "Nothing to watch: the day is not today or the last entry is not a wake-up".to_string(),
            Message::WatchConditionLost => "Wakefulness counter stopped".to_string(),
            Message::WatchShuttingDown => "Shutting down watcher".to_string(),
            Message::WatchCtrlCListenFailed(error) => format!("Failed to listen for Ctrl+C: {}", error),
        };
        write!(f, "{}", text)
    }
}
