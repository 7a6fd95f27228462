//! Absolute match clock.
//!
//! The vendor reports `minute`/`second` relative to the whole match (the
//! second half starts at minute 45) and a period-relative `timestamp` whose
//! only useful part is the sub-second fraction. The clock string
//! `HH:MM:SS.mmm` is the join key for every correlation downstream.

use crate::models::RawEvent;
use std::fmt;

/// Milliseconds since kick-off.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct MatchClock(u64);

impl MatchClock {
    pub fn new(minute: u32, second: u32, millis: u32) -> Self {
        let total_secs = u64::from(minute) * 60 + u64::from(second);
        Self(total_secs * 1000 + u64::from(millis.min(999)))
    }

    pub fn of_event(ev: &RawEvent) -> Self {
        Self::new(ev.minute, ev.second, fraction_millis(ev.timestamp.as_deref()))
    }

    pub fn as_millis(self) -> u64 {
        self.0
    }

    /// Advance by a (possibly fractional) number of seconds, resolved to
    /// microseconds and truncated back to milliseconds.
    pub fn plus_seconds(self, seconds: f64) -> Self {
        if !seconds.is_finite() {
            return self;
        }
        let start_us = self.0 as i128 * 1000;
        let delta_us = (seconds * 1_000_000.0).round() as i128;
        let total_us = start_us.saturating_add(delta_us).max(0);
        Self(u64::try_from(total_us / 1000).unwrap_or(u64::MAX))
    }
}

impl fmt::Display for MatchClock {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let millis = self.0 % 1000;
        let total_secs = self.0 / 1000;
        let (hh, rem) = (total_secs / 3600, total_secs % 3600);
        let (mm, ss) = (rem / 60, rem % 60);
        write!(f, "{:02}:{:02}:{:02}.{:03}", hh, mm, ss, millis)
    }
}

/// Sub-second part of a `HH:MM:SS.fff` timestamp as milliseconds.
///
/// Only the first three fractional digits count; shorter fractions are
/// right-padded (`.5` → 500). Missing or malformed input is zero.
pub fn fraction_millis(timestamp: Option<&str>) -> u32 {
    let Some((_, frac)) = timestamp.and_then(|ts| ts.rsplit_once('.')) else {
        return 0;
    };
    let digits: String = frac.chars().take(3).collect();
    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
        return 0;
    }
    format!("{:0<3}", digits).parse().unwrap_or(0)
}

/// Canonical clock string of a raw event.
pub fn match_clock(ev: &RawEvent) -> String {
    MatchClock::of_event(ev).to_string()
}

pub fn period_name(period: u8) -> &'static str {
    match period {
        1 => "first half",
        2 => "second half",
        3 => "first half extratime",
        4 => "second half extratime",
        5 => "shootout",
        _ => "unknown",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_clock_formatting() {
        assert_eq!(MatchClock::new(0, 0, 0).to_string(), "00:00:00.000");
        assert_eq!(MatchClock::new(23, 4, 500).to_string(), "00:23:04.500");
        assert_eq!(MatchClock::new(45, 0, 0).to_string(), "00:45:00.000");
        assert_eq!(MatchClock::new(118, 59, 999).to_string(), "01:58:59.999");
    }

    #[test]
    fn test_fraction_parsing() {
        assert_eq!(fraction_millis(Some("00:12:01.250")), 250);
        assert_eq!(fraction_millis(Some("00:12:01.5")), 500);
        assert_eq!(fraction_millis(Some("00:12:01.123456")), 123);
        assert_eq!(fraction_millis(Some("00:12:01")), 0);
        assert_eq!(fraction_millis(Some("00:12:01.ab")), 0);
        assert_eq!(fraction_millis(None), 0);
    }

    #[test]
    fn test_plus_seconds() {
        let start = MatchClock::new(10, 59, 900);
        assert_eq!(start.plus_seconds(1.25).to_string(), "00:11:01.150");
        assert_eq!(start.plus_seconds(0.0), start);
        assert_eq!(start.plus_seconds(f64::NAN), start);
        assert_eq!(MatchClock::new(0, 0, 100).plus_seconds(-5.0).as_millis(), 0);

        // out-of-range durations clamp
        assert_eq!(start.plus_seconds(1e300).as_millis(), u64::MAX);
        assert_eq!(start.plus_seconds(-1e300).as_millis(), 0);
        assert_eq!(MatchClock::new(0, 0, 0).plus_seconds(f64::MAX).as_millis(), u64::MAX);
    }

    #[test]
    fn test_period_names() {
        assert_eq!(period_name(1), "first half");
        assert_eq!(period_name(4), "second half extratime");
        assert_eq!(period_name(5), "shootout");
        assert_eq!(period_name(9), "unknown");
    }

    proptest! {
        /// Lexicographic order of clock strings follows chronological order
        /// (as long as the match stays under 100 hours).
        #[test]
        fn prop_clock_string_order_is_chronological(
            a in (0u32..130, 0u32..60, 0u32..1000),
            b in (0u32..130, 0u32..60, 0u32..1000),
        ) {
            let ca = MatchClock::new(a.0, a.1, a.2);
            let cb = MatchClock::new(b.0, b.1, b.2);
            prop_assert_eq!(ca.cmp(&cb), ca.to_string().cmp(&cb.to_string()));
        }

        #[test]
        fn prop_plus_seconds_never_goes_backwards(
            minute in 0u32..130,
            second in 0u32..60,
            millis in 0u32..1000,
            secs in 0.0f64..30.0,
        ) {
            let start = MatchClock::new(minute, second, millis);
            prop_assert!(start.plus_seconds(secs) >= start);
        }
    }
}
