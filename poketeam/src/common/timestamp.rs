//! Serde helpers for team timestamps.
//!
//! Timestamps are written as RFC 3339 in UTC with exactly three fractional digits, the format
//! `Date.prototype.toISOString` produces, so tokens from the browser builder re-encode unchanged.

use chrono::{
    DateTime,
    SecondsFormat,
    SubsecRound,
    Utc,
};
use serde::{
    Deserialize,
    Deserializer,
    Serializer,
};

/// The current time, truncated to the millisecond precision timestamps are stored with.
pub fn now() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(3)
}

pub fn serialize<S>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&value.to_rfc3339_opts(SecondsFormat::Millis, true))
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    DateTime::<Utc>::deserialize(deserializer)
}

#[cfg(test)]
mod timestamp_test {
    use chrono::{
        DateTime,
        Timelike,
        Utc,
    };
    use pretty_assertions::assert_eq;
    use serde::{
        Deserialize,
        Serialize,
    };

    use crate::common::timestamp;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Stamped {
        #[serde(with = "timestamp")]
        at: DateTime<Utc>,
    }

    fn round_trip(json: &str) -> String {
        let stamped: Stamped = serde_json::from_str(json).unwrap();
        serde_json::to_string(&stamped).unwrap()
    }

    #[test]
    fn keeps_zero_milliseconds() {
        assert_eq!(
            round_trip(r#"{"at":"2024-05-01T12:34:56.000Z"}"#),
            r#"{"at":"2024-05-01T12:34:56.000Z"}"#
        );
        assert_eq!(
            round_trip(r#"{"at":"2024-05-01T12:34:56.789Z"}"#),
            r#"{"at":"2024-05-01T12:34:56.789Z"}"#
        );
    }

    #[test]
    fn writes_utc_with_three_fractional_digits() {
        assert_eq!(
            round_trip(r#"{"at":"2024-05-01T21:34:56+09:00"}"#),
            r#"{"at":"2024-05-01T12:34:56.000Z"}"#
        );
    }

    #[test]
    fn now_has_millisecond_precision() {
        assert_eq!(timestamp::now().nanosecond() % 1_000_000, 0);
    }
}
