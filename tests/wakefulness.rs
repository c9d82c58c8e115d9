#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
    use dremota::libs::clock::ClockTime;
    use dremota::libs::entry::TimeEntry;
    use dremota::libs::wakefulness::{current_wakefulness, Clock, WakefulnessTicker};
    use std::sync::{Arc, Mutex};
    use std::time::Duration;

    /// A clock the test moves by hand.
    #[derive(Clone)]
    struct ManualClock(Arc<Mutex<NaiveDateTime>>);

    impl ManualClock {
        fn new(now: NaiveDateTime) -> Self {
            ManualClock(Arc::new(Mutex::new(now)))
        }

        fn set(&self, now: NaiveDateTime) {
            *self.0.lock().unwrap() = now;
        }
    }

    impl Clock for ManualClock {
        fn now(&self) -> NaiveDateTime {
            *self.0.lock().unwrap()
        }
    }

    const PERIOD: Duration = Duration::from_secs(60);

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 5, 10).unwrap()
    }

    fn at(date: NaiveDate, hour: u32, minute: u32) -> NaiveDateTime {
        NaiveDateTime::new(date, NaiveTime::from_hms_opt(hour, minute, 0).unwrap())
    }

    fn clock(s: &str) -> ClockTime {
        s.parse().unwrap()
    }

    fn awake_since_nine() -> Vec<TimeEntry> {
        vec![TimeEntry::fell_asleep(clock("21:00")), TimeEntry::woke_up(clock("09:00"))]
    }

    #[test]
    fn test_current_wakefulness() {
        let entries = vec![TimeEntry::woke_up(clock("07:00"))];
        assert_eq!(current_wakefulness(&entries, true, clock("09:15")), Some(135));

        let late = vec![TimeEntry::woke_up(clock("23:50"))];
        assert_eq!(current_wakefulness(&late, true, clock("00:10")), Some(20));
    }

    #[test]
    fn test_current_wakefulness_not_applicable() {
        let entries = vec![TimeEntry::woke_up(clock("07:00"))];
        assert_eq!(current_wakefulness(&entries, false, clock("09:15")), None);

        let asleep = vec![TimeEntry::woke_up(clock("07:00")), TimeEntry::fell_asleep(clock("09:00"))];
        assert_eq!(current_wakefulness(&asleep, true, clock("09:15")), None);

        assert_eq!(current_wakefulness(&[], true, clock("09:15")), None);
    }

    #[tokio::test]
    async fn test_ticker_not_started_when_condition_does_not_hold() {
        let manual = ManualClock::new(at(date(), 10, 0));
        let asleep = vec![TimeEntry::fell_asleep(clock("09:30"))];
        assert!(WakefulnessTicker::start(asleep, date(), manual.clone(), PERIOD).is_none());

        let yesterday = date().pred_opt().unwrap();
        assert!(WakefulnessTicker::start(awake_since_nine(), yesterday, manual, PERIOD).is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_ticker_refreshes_every_period() {
        let manual = ManualClock::new(at(date(), 10, 0));
        let ticker = WakefulnessTicker::start(awake_since_nine(), date(), manual.clone(), PERIOD).unwrap();
        assert_eq!(ticker.current().as_deref(), Some("1 година"));
        assert!(ticker.is_running());

        let mut updates = ticker.subscribe();
        manual.set(at(date(), 10, 1));
        updates.changed().await.unwrap();
        assert_eq!(updates.borrow_and_update().as_deref(), Some("1 година 1 хвилина"));

        manual.set(at(date(), 10, 2));
        updates.changed().await.unwrap();
        assert_eq!(ticker.current().as_deref(), Some("1 година 2 хвилини"));

        ticker.stop().await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_ticker_stops_when_condition_is_lost() {
        let manual = ManualClock::new(at(date(), 23, 58));
        let ticker = WakefulnessTicker::start(awake_since_nine(), date(), manual.clone(), PERIOD).unwrap();
        let mut updates = ticker.subscribe();

        manual.set(at(date().succ_opt().unwrap(), 0, 0));
        updates.changed().await.unwrap();
        assert_eq!(*updates.borrow_and_update(), None);

        // The task has ended, so its sender is gone.
        assert!(updates.changed().await.is_err());
        ticker.stop().await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_dropping_ticker_cancels_task() {
        let manual = ManualClock::new(at(date(), 10, 0));
        let ticker = WakefulnessTicker::start(awake_since_nine(), date(), manual, PERIOD).unwrap();
        let mut updates = ticker.subscribe();

        drop(ticker);
        assert!(updates.changed().await.is_err());
    }
}
