#[cfg(test)]
mod tests {
    use dremota::libs::clock::{excess_minutes, format_minutes_as_clock, interval_duration, remaining_minutes, time_to_minutes, ClockTime, MINUTES_PER_DAY};
    use dremota::libs::error::DashboardError;

    fn clock(s: &str) -> ClockTime {
        s.parse().unwrap()
    }

    #[test]
    fn test_time_to_minutes() {
        assert_eq!(time_to_minutes("00:00").unwrap(), 0);
        assert_eq!(time_to_minutes("07:30").unwrap(), 450);
        assert_eq!(time_to_minutes("23:59").unwrap(), 1439);
        assert_eq!(time_to_minutes(" 12:05 ").unwrap(), 725);
    }

    #[test]
    fn test_time_to_minutes_rejects_malformed_input() {
        for input in ["", "7", "ab:cd", "24:00", "12:60", "12:30:00", "12-30"] {
            let result = time_to_minutes(input);
            assert!(matches!(result, Err(DashboardError::Parse { .. })), "expected parse error for {:?}", input);
        }
    }

    #[test]
    fn test_clock_round_trip_wraps_modulo_day() {
        for m in 0..(MINUTES_PER_DAY * 2) {
            let formatted = format_minutes_as_clock(m);
            assert_eq!(time_to_minutes(&formatted).unwrap(), m % MINUTES_PER_DAY);
        }
        assert_eq!(format_minutes_as_clock(1440), "00:00");
        assert_eq!(format_minutes_as_clock(1200), "20:00");
    }

    #[test]
    fn test_interval_duration_midnight_wraparound() {
        assert_eq!(interval_duration(clock("23:30"), clock("00:15")), 45);
        assert_eq!(interval_duration(clock("22:00"), clock("06:00")), 480);
        assert_eq!(interval_duration(clock("13:00"), clock("13:30")), 30);
        assert_eq!(interval_duration(clock("08:00"), clock("08:00")), 0);
    }

    #[test]
    fn test_interval_duration_stays_within_a_day() {
        for start in (0..MINUTES_PER_DAY).step_by(7) {
            for end in (0..MINUTES_PER_DAY).step_by(11) {
                let duration = interval_duration(ClockTime::from_minutes(start), ClockTime::from_minutes(end));
                assert!(duration < MINUTES_PER_DAY, "{} -> {} gave {}", start, end, duration);
            }
        }
    }

    #[test]
    fn test_remaining_and_excess_are_clamped() {
        assert_eq!(remaining_minutes(500, 480), 0);
        assert_eq!(excess_minutes(500, 480), 20);
        assert_eq!(remaining_minutes(400, 480), 80);
        assert_eq!(excess_minutes(400, 480), 0);
        assert_eq!(remaining_minutes(480, 480), 0);
        assert_eq!(excess_minutes(480, 480), 0);
    }

    #[test]
    fn test_clock_time_serialization() {
        let json = serde_json::to_string(&ClockTime::from_minutes(75)).unwrap();
        assert_eq!(json, "\"01:15\"");

        let parsed: ClockTime = serde_json::from_str("\"21:45\"").unwrap();
        assert_eq!(parsed.minutes(), 1305);

        assert!(serde_json::from_str::<ClockTime>("\"25:00\"").is_err());
    }
}
