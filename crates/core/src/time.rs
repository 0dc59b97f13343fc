use chrono::{DateTime, FixedOffset, Utc};
use serde::{Deserialize, Serialize};

use crate::error::Error;

/// A converted epoch, rendered against an explicit current instant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimestampOutput {
    pub epoch_millis: i64,
    pub local_time: String,
    pub utc_time: String,
    pub relative_time: String,
}

/// Convert an epoch string to local, UTC, and relative representations.
///
/// The unit is auto-detected from the digit count: up to 11 digits is read as
/// seconds, anything longer as milliseconds. The current instant and the
/// local offset are explicit parameters so the output is reproducible.
/// Non-numeric or out-of-range input is an [`Error::InvalidTimestamp`].
pub fn convert(
    input: &str,
    now: DateTime<Utc>,
    local_offset: FixedOffset,
) -> Result<TimestampOutput, Error> {
    let trimmed = input.trim();
    let digits = trimmed.strip_prefix('-').unwrap_or(trimmed);

    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
        return Err(Error::InvalidTimestamp(format!(
            "not a numeric epoch: {trimmed}"
        )));
    }

    let value: i64 = trimmed
        .parse()
        .map_err(|_| Error::InvalidTimestamp(format!("epoch out of range: {trimmed}")))?;

    let millis = if trimmed.len() <= 11 {
        value
            .checked_mul(1000)
            .ok_or_else(|| Error::InvalidTimestamp(format!("epoch out of range: {trimmed}")))?
    } else {
        value
    };

    let date = DateTime::<Utc>::from_timestamp_millis(millis)
        .ok_or_else(|| Error::InvalidTimestamp(format!("epoch out of range: {trimmed}")))?;

    Ok(TimestampOutput {
        epoch_millis: millis,
        local_time: date
            .with_timezone(&local_offset)
            .format("%Y-%m-%d %H:%M:%S %:z")
            .to_string(),
        utc_time: date.format("%Y-%m-%d %H:%M:%S UTC").to_string(),
        relative_time: relative_to(millis.div_euclid(1000), now.timestamp()),
    })
}

/// Phrase the distance between two instants in the largest fitting unit
/// (seconds, minutes, hours, days).
fn relative_to(epoch_seconds: i64, now_seconds: i64) -> String {
    let diff = epoch_seconds - now_seconds;
    if diff == 0 {
        return "now".to_string();
    }

    let (magnitude, unit) = match diff.unsigned_abs() {
        s if s < 60 => (s, "second"),
        s if s < 3_600 => (s / 60, "minute"),
        s if s < 86_400 => (s / 3_600, "hour"),
        s => (s / 86_400, "day"),
    };
    let plural = if magnitude == 1 { "" } else { "s" };

    if diff < 0 {
        format!("{magnitude} {unit}{plural} ago")
    } else {
        format!("in {magnitude} {unit}{plural}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixed_now() -> DateTime<Utc> {
        // 2021-01-01 00:00:00 UTC
        DateTime::<Utc>::from_timestamp(1_609_459_200, 0).unwrap()
    }

    fn utc_offset() -> FixedOffset {
        FixedOffset::east_opt(0).unwrap()
    }

    #[test]
    fn test_convert_seconds_epoch() {
        let output = convert("1609459200", fixed_now(), utc_offset()).unwrap();
        assert_eq!(output.epoch_millis, 1_609_459_200_000);
        assert_eq!(output.utc_time, "2021-01-01 00:00:00 UTC");
        assert_eq!(output.local_time, "2021-01-01 00:00:00 +00:00");
        assert_eq!(output.relative_time, "now");
    }

    #[test]
    fn test_convert_milliseconds_epoch() {
        // 13 digits, read as milliseconds
        let output = convert("1609459200500", fixed_now(), utc_offset()).unwrap();
        assert_eq!(output.epoch_millis, 1_609_459_200_500);
        assert_eq!(output.utc_time, "2021-01-01 00:00:00 UTC");
    }

    #[test]
    fn test_convert_respects_local_offset() {
        let ist = FixedOffset::east_opt(5 * 3600 + 1800).unwrap();
        let output = convert("1609459200", fixed_now(), ist).unwrap();
        assert_eq!(output.local_time, "2021-01-01 05:30:00 +05:30");
        assert_eq!(output.utc_time, "2021-01-01 00:00:00 UTC");
    }

    #[test]
    fn test_convert_past_is_ago() {
        let output = convert("1609459140", fixed_now(), utc_offset()).unwrap();
        assert_eq!(output.relative_time, "1 minute ago");
    }

    #[test]
    fn test_convert_future_is_in() {
        let output = convert("1609466400", fixed_now(), utc_offset()).unwrap();
        assert_eq!(output.relative_time, "in 2 hours");
    }

    #[test]
    fn test_convert_rejects_non_numeric() {
        let err = convert("yesterday", fixed_now(), utc_offset()).unwrap_err();
        assert!(matches!(err, Error::InvalidTimestamp(_)));

        let err = convert("16094.59", fixed_now(), utc_offset()).unwrap_err();
        assert!(matches!(err, Error::InvalidTimestamp(_)));
    }

    #[test]
    fn test_convert_rejects_empty() {
        assert!(convert("", fixed_now(), utc_offset()).is_err());
        assert!(convert("-", fixed_now(), utc_offset()).is_err());
    }

    #[test]
    fn test_convert_rejects_out_of_range() {
        let err = convert(&"9".repeat(25), fixed_now(), utc_offset()).unwrap_err();
        assert!(matches!(err, Error::InvalidTimestamp(_)));
    }

    #[test]
    fn test_convert_negative_epoch() {
        // One minute before the Unix epoch
        let output = convert("-60", fixed_now(), utc_offset()).unwrap();
        assert_eq!(output.utc_time, "1969-12-31 23:59:00 UTC");
    }

    #[test]
    fn test_relative_units() {
        assert_eq!(relative_to(100, 100), "now");
        assert_eq!(relative_to(99, 100), "1 second ago");
        assert_eq!(relative_to(100, 55), "in 45 seconds");
        assert_eq!(relative_to(0, 7200), "2 hours ago");
        assert_eq!(relative_to(86_400 * 3, 0), "in 3 days");
        assert_eq!(relative_to(0, 86_400 * 400), "400 days ago");
    }
}
