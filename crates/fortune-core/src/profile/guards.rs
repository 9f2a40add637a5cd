//! Input guards shared by every public entry point.

use chrono::NaiveDate;
use tracing::warn;

use crate::errors::{FortuneError, FortuneResult};
use crate::models::MbtiType;

pub const MIN_YEAR: i32 = 1900;
pub const MAX_YEAR: i32 = 2100;
pub const MAX_HOUR: u32 = 23;
pub const MBTI_ANSWER_COUNT: usize = 8;

/// Check the supported year range, that the day exists in its month, and the hour range.
pub fn validate_date(year: i32, month: u32, day: u32, hour: Option<u32>) -> FortuneResult<NaiveDate> {
    if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
        warn!(year, "rejected year outside supported range");
        return Err(FortuneError::InvalidDate(format!(
            "year {year} is outside {MIN_YEAR}..={MAX_YEAR}"
        )));
    }
    let date = NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| {
        warn!(year, month, day, "rejected non-existent calendar date");
        FortuneError::InvalidDate(format!("{year:04}-{month:02}-{day:02} is not a calendar date"))
    })?;
    if let Some(h) = hour {
        validate_hour(h)?;
    }
    Ok(date)
}

pub fn validate_hour(hour: u32) -> FortuneResult<u32> {
    if hour > MAX_HOUR {
        warn!(hour, "rejected hour outside 0..=23");
        return Err(FortuneError::InvalidDate(format!("hour {hour} is outside 0..={MAX_HOUR}")));
    }
    Ok(hour)
}

/// Hour component of an `HH:MM` (or bare `HH`) time input; empty input means no hour.
pub fn parse_hour(raw: &str) -> FortuneResult<Option<u32>> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    let hour_part = trimmed.split(':').next().unwrap_or(trimmed);
    let hour = hour_part
        .parse::<u32>()
        .map_err(|_| FortuneError::InvalidDate(format!("unparseable time {raw:?}")))?;
    validate_hour(hour).map(Some)
}

/// Exact lookup of a declared four-letter type code.
pub fn parse_mbti_type(code: &str) -> FortuneResult<MbtiType> {
    code.parse()
}

/// Reject answer sets that are the wrong length or hold values other than 0/1.
pub fn validate_answers(answers: &[u8]) -> FortuneResult<()> {
    if answers.len() != MBTI_ANSWER_COUNT {
        warn!(len = answers.len(), "rejected MBTI answer set of wrong length");
        return Err(FortuneError::InvalidMbtiInput(format!(
            "expected {MBTI_ANSWER_COUNT} answers, got {}",
            answers.len()
        )));
    }
    if let Some((position, value)) = answers.iter().enumerate().find(|&(_, &a)| a > 1) {
        warn!(position, value, "rejected MBTI answer value");
        return Err(FortuneError::InvalidMbtiInput(format!(
            "answer {position} is {value}, expected 0 or 1"
        )));
    }
    Ok(())
}

/// Narrow wide integer answers (as a host language hands them over) to the
/// 0/1 byte form, rejecting anything else as `InvalidMbtiInput`.
pub fn narrow_answers(raw: &[i64]) -> FortuneResult<Vec<u8>> {
    let out_of_range = raw.iter().enumerate().find(|&(_, &a)| !(0..=1).contains(&a));
    if let Some((position, &value)) = out_of_range {
        warn!(position, value, "rejected MBTI answer value");
        return Err(FortuneError::InvalidMbtiInput(format!(
            "answer {position} is {value}, expected 0 or 1"
        )));
    }
    let answers: Vec<u8> = raw.iter().map(|&a| a as u8).collect();
    validate_answers(&answers)?;
    Ok(answers)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_date_accepts_leap_day() {
        assert!(validate_date(2000, 2, 29, None).is_ok());
        assert!(validate_date(2024, 2, 29, Some(0)).is_ok());
    }

    #[test]
    fn test_validate_date_rejects_non_dates() {
        assert!(matches!(
            validate_date(1900, 2, 29, None),
            Err(FortuneError::InvalidDate(_))
        ));
        assert!(validate_date(2023, 4, 31, None).is_err());
        assert!(validate_date(2023, 13, 1, None).is_err());
        assert!(validate_date(2023, 0, 1, None).is_err());
        assert!(validate_date(2023, 1, 0, None).is_err());
    }

    #[test]
    fn test_validate_date_year_bounds() {
        assert!(validate_date(1900, 1, 1, None).is_ok());
        assert!(validate_date(2100, 12, 31, None).is_ok());
        assert!(validate_date(1899, 12, 31, None).is_err());
        assert!(validate_date(2101, 1, 1, None).is_err());
    }

    #[test]
    fn test_validate_date_rejects_bad_hour() {
        assert!(validate_date(2000, 1, 1, Some(23)).is_ok());
        assert!(validate_date(2000, 1, 1, Some(24)).is_err());
    }

    #[test]
    fn test_parse_hour() {
        assert_eq!(parse_hour("").unwrap(), None);
        assert_eq!(parse_hour("  ").unwrap(), None);
        assert_eq!(parse_hour("14:30").unwrap(), Some(14));
        assert_eq!(parse_hour("07").unwrap(), Some(7));
        assert_eq!(parse_hour("00:05").unwrap(), Some(0));
        assert!(parse_hour("25:00").is_err());
        assert!(parse_hour("noon").is_err());
    }

    #[test]
    fn test_validate_answers() {
        assert!(validate_answers(&[0, 1, 0, 1, 0, 1, 0, 1]).is_ok());
        assert!(matches!(
            validate_answers(&[0; 7]),
            Err(FortuneError::InvalidMbtiInput(_))
        ));
        assert!(validate_answers(&[0; 9]).is_err());
        assert!(validate_answers(&[0, 0, 0, 2, 0, 0, 0, 0]).is_err());
        assert!(validate_answers(&[]).is_err());
    }

    #[test]
    fn test_narrow_answers() {
        assert_eq!(
            narrow_answers(&[0, 1, 0, 1, 0, 1, 0, 1]).unwrap(),
            vec![0, 1, 0, 1, 0, 1, 0, 1]
        );
        for bad in [-1, 2, 256, i64::MAX] {
            let mut raw = [0i64; 8];
            raw[3] = bad;
            assert!(
                matches!(narrow_answers(&raw), Err(FortuneError::InvalidMbtiInput(_))),
                "{bad} should be rejected"
            );
        }
        assert!(matches!(
            narrow_answers(&[0; 7]),
            Err(FortuneError::InvalidMbtiInput(_))
        ));
    }
}
