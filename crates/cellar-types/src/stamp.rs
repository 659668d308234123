use std::fmt;
use std::time::Duration;

use chrono::{DateTime, SecondsFormat, Utc};

use crate::error::TypeError;

/// Timestamp payload of a lock object.
///
/// A lock is an object in the store whose entire content is one RFC 3339
/// date-time. The wire form is written at second precision with a `Z`
/// suffix (`2026-08-05T12:00:00Z`): human-readable, lexically sortable,
/// and parseable by every other implementation of the same protocol.
/// Parsing accepts any RFC 3339 offset, so records written with a numeric
/// offset round-trip as well.
///
/// The record's age against the lease timeout is the entire ownership
/// model: younger than the lease means held, older means reclaimable.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct LockStamp(DateTime<Utc>);

impl LockStamp {
    /// A stamp for the current wall-clock time.
    pub fn now() -> Self {
        Self(Utc::now())
    }

    /// Wrap an explicit instant.
    pub fn at(instant: DateTime<Utc>) -> Self {
        Self(instant)
    }

    /// Parse a lock record's content.
    ///
    /// Surrounding ASCII whitespace is tolerated; anything that is not an
    /// RFC 3339 date-time fails.
    pub fn parse(content: &str) -> Result<Self, TypeError> {
        let trimmed = content.trim();
        DateTime::parse_from_rfc3339(trimmed)
            .map(|dt| Self(dt.with_timezone(&Utc)))
            .map_err(|_| TypeError::InvalidTimestamp(content.to_string()))
    }

    /// The wire form written into lock objects.
    pub fn to_wire(&self) -> String {
        self.0.to_rfc3339_opts(SecondsFormat::Secs, true)
    }

    /// Age of this stamp. A stamp in the future has zero age.
    pub fn age(&self) -> Duration {
        Utc::now()
            .signed_duration_since(self.0)
            .to_std()
            .unwrap_or(Duration::ZERO)
    }

    /// Whether the lease recorded by this stamp has run out.
    pub fn is_stale(&self, lease_timeout: Duration) -> bool {
        self.age() >= lease_timeout
    }

    /// The instant this stamp records.
    pub fn instant(&self) -> DateTime<Utc> {
        self.0
    }
}

impl fmt::Display for LockStamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_wire())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn wire_roundtrip() {
        let stamp = LockStamp::now();
        let parsed = LockStamp::parse(&stamp.to_wire()).unwrap();
        // Wire form drops sub-second precision, so compare wire forms.
        assert_eq!(parsed.to_wire(), stamp.to_wire());
    }

    #[test]
    fn wire_form_is_second_precision_utc() {
        let instant = Utc.with_ymd_and_hms(2026, 8, 5, 12, 0, 0).unwrap();
        let stamp = LockStamp::at(instant);
        assert_eq!(stamp.to_wire(), "2026-08-05T12:00:00Z");
    }

    #[test]
    fn parses_numeric_offsets() {
        let stamp = LockStamp::parse("2026-08-05T14:00:00+02:00").unwrap();
        assert_eq!(stamp.to_wire(), "2026-08-05T12:00:00Z");
    }

    #[test]
    fn parses_with_surrounding_whitespace() {
        assert!(LockStamp::parse("2026-08-05T12:00:00Z\n").is_ok());
    }

    #[test]
    fn rejects_garbage() {
        assert!(LockStamp::parse("").is_err());
        assert!(LockStamp::parse("not a timestamp").is_err());
        assert!(LockStamp::parse("2026-08-05").is_err());
        assert!(LockStamp::parse("1754392800").is_err());
    }

    #[test]
    fn fresh_stamp_is_not_stale() {
        let stamp = LockStamp::now();
        assert!(!stamp.is_stale(Duration::from_secs(120)));
    }

    #[test]
    fn old_stamp_is_stale() {
        let stamp = LockStamp::at(Utc::now() - chrono::Duration::seconds(300));
        assert!(stamp.is_stale(Duration::from_secs(120)));
        assert!(stamp.age() >= Duration::from_secs(299));
    }

    #[test]
    fn future_stamp_has_zero_age() {
        let stamp = LockStamp::at(Utc::now() + chrono::Duration::seconds(60));
        assert_eq!(stamp.age(), Duration::ZERO);
        assert!(!stamp.is_stale(Duration::from_secs(1)));
    }

    #[test]
    fn stamps_order_chronologically() {
        let older = LockStamp::at(Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap());
        let newer = LockStamp::at(Utc.with_ymd_and_hms(2026, 6, 1, 0, 0, 0).unwrap());
        assert!(older < newer);
        // Lexical order of the wire form matches chronological order.
        assert!(older.to_wire() < newer.to_wire());
    }
}
