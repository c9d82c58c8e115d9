#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use dremota::libs::clock::ClockTime;
    use dremota::libs::config::PredictionConfig;
    use dremota::libs::entry::TimeEntry;
    use dremota::libs::error::DashboardError;
    use dremota::libs::metrics::SleepMetrics;
    use dremota::libs::prediction::{predict_bedtime, BedtimeEstimate};

    fn clock(s: &str) -> ClockTime {
        s.parse().unwrap()
    }

    fn metrics(total_sleep: Option<&str>, total_awake: Option<&str>, night_sleep: Option<&str>) -> SleepMetrics {
        let mut metrics = SleepMetrics::new(NaiveDate::from_ymd_opt(2024, 5, 10).unwrap());
        metrics.total_sleep = total_sleep.map(str::to_string);
        metrics.total_awake = total_awake.map(str::to_string);
        metrics.night_sleep = night_sleep.map(str::to_string);
        metrics
    }

    fn entries() -> Vec<TimeEntry> {
        vec![TimeEntry::fell_asleep(clock("21:00")), TimeEntry::woke_up(clock("07:00"))]
    }

    #[test]
    fn test_predict_bedtime() {
        let bedtime = predict_bedtime(Some(clock("07:00")), Some(60), Some(600), Some(0)).unwrap();
        assert_eq!(bedtime.to_string(), "20:00");
    }

    #[test]
    fn test_predict_bedtime_wraps_past_midnight() {
        let bedtime = predict_bedtime(Some(clock("22:00")), Some(0), Some(60), Some(0)).unwrap();
        assert_eq!(bedtime.to_string(), "21:00");
    }

    #[test]
    fn test_predict_bedtime_clamps_unaccounted_time() {
        let bedtime = predict_bedtime(Some(clock("07:00")), Some(600), Some(900), Some(0)).unwrap();
        assert_eq!(bedtime.to_string(), "07:00");
    }

    #[test]
    fn test_predict_bedtime_missing_night_sleep() {
        let result = predict_bedtime(Some(clock("07:00")), Some(60), Some(600), None);
        assert_eq!(result, Err(DashboardError::MissingMetric("night sleep")));

        let result = predict_bedtime(None, None, None, None);
        assert!(matches!(result, Err(DashboardError::MissingMetric(_))));
    }

    #[test]
    fn test_estimate_from_day() {
        let metrics = metrics(Some("1год. 0хв."), Some("10год. 0хв."), Some("0год. 0хв."));
        let estimate = BedtimeEstimate::from_day(&metrics, &entries());

        assert_eq!(estimate, BedtimeEstimate::Predicted(clock("20:00")));
        assert_eq!(estimate.to_string(), "20:00");
        assert_eq!(estimate.message().to_string(), "Нічний сон о: 20:00");
    }

    #[test]
    fn test_estimate_without_wake_up() {
        let metrics = metrics(Some("1год. 0хв."), Some("10год. 0хв."), Some("0год. 0хв."));
        let entries = vec![TimeEntry::fell_asleep(clock("21:00"))];
        let estimate = BedtimeEstimate::from_day(&metrics, &entries);

        assert_eq!(estimate, BedtimeEstimate::NoData);
        assert_eq!(estimate.to_string(), "Немає даних для прогнозу");
    }

    #[test]
    fn test_estimate_with_missing_metric() {
        let estimate = BedtimeEstimate::from_day(&metrics(Some("1год. 0хв."), Some("10год. 0хв."), None), &entries());
        assert_eq!(estimate, BedtimeEstimate::InsufficientData);
        assert_eq!(estimate.to_string(), "Недостатньо даних для прогнозу");

        let blank = BedtimeEstimate::from_day(&metrics(Some(""), Some("10год. 0хв."), Some("0год. 0хв.")), &entries());
        assert_eq!(blank, BedtimeEstimate::InsufficientData);
    }

    #[test]
    fn test_estimate_prefers_missing_over_malformed() {
        let estimate = BedtimeEstimate::from_day(&metrics(Some("garbage"), None, Some("0год. 0хв.")), &entries());
        assert_eq!(estimate, BedtimeEstimate::InsufficientData);

        let estimate = BedtimeEstimate::from_day(&metrics(Some("1год. 0хв."), Some("garbage"), None), &entries());
        assert_eq!(estimate, BedtimeEstimate::InsufficientData);
    }

    #[test]
    fn test_estimate_with_blank_night_sleep() {
        let metrics = metrics(Some("1год. 0хв."), Some("10год. 0хв."), Some(""));
        assert_eq!(metrics.night_sleep_minutes().unwrap(), Some(0));

        let estimate = BedtimeEstimate::from_day(&metrics, &entries());
        assert_eq!(estimate, BedtimeEstimate::Predicted(clock("20:00")));
    }

    #[test]
    fn test_estimate_with_malformed_label() {
        let estimate = BedtimeEstimate::from_day(&metrics(Some("abc"), Some("10год. 0хв."), Some("0год. 0хв.")), &entries());
        assert_eq!(estimate, BedtimeEstimate::Failed);
        assert_eq!(estimate.to_string(), "Помилка прогнозу");
    }

    #[test]
    fn test_evening_window_gate() {
        let metrics = metrics(Some("1год. 0хв."), Some("10год. 0хв."), Some("0год. 0хв."));
        let window = PredictionConfig::default();
        let entries = entries();

        assert_eq!(BedtimeEstimate::for_evening(&metrics, &entries, true, 16, &window), None);
        assert!(BedtimeEstimate::for_evening(&metrics, &entries, true, 17, &window).is_some());
        assert!(BedtimeEstimate::for_evening(&metrics, &entries, true, 20, &window).is_some());
        assert_eq!(BedtimeEstimate::for_evening(&metrics, &entries, true, 21, &window), None);
        assert_eq!(BedtimeEstimate::for_evening(&metrics, &entries, false, 18, &window), None);
        assert_eq!(BedtimeEstimate::for_evening(&metrics, &[], true, 18, &window), None);
    }
}
