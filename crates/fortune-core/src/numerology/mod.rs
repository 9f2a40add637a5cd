//! Birth-date numerology: talent, essence and inquiry numbers.

pub mod reduction;

use tracing::debug;

use crate::errors::FortuneResult;
use crate::models::{CalendarDate, NumerologyResult};
use crate::sexagenary::pillars::{month_pillar, year_pillar};

pub use reduction::{digit_sum, essence_number, inquiry_number, talent_number};

/// Validate the date, then compute the three core numbers and the year/month pairs.
pub fn compute_numerology(year: i32, month: u32, day: u32) -> FortuneResult<NumerologyResult> {
    let date = CalendarDate::new(year, month, day, None)?;
    numerology_for(&date)
}

pub fn numerology_for(date: &CalendarDate) -> FortuneResult<NumerologyResult> {
    let (year, month, day) = (date.year(), date.month(), date.day());
    let year_pair = year_pillar(year);
    let month_pair = month_pillar(&year_pair, month)?;

    let result = NumerologyResult {
        talent_number: talent_number(day),
        essence_number: essence_number(year, month, day),
        inquiry_number: inquiry_number(month, day),
        year_pair,
        month_pair,
        birth_date: *date,
    };
    debug!(
        year,
        month,
        day,
        talent = result.talent_number,
        essence = result.essence_number,
        inquiry = result.inquiry_number,
        "computed numerology"
    );
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::FortuneError;

    #[test]
    fn test_compute_numerology_reference_date() {
        let result = compute_numerology(1990, 7, 15).unwrap();
        assert_eq!(result.talent_number, 6);
        assert_eq!(result.essence_number, 5);
        assert_eq!(result.inquiry_number, 4);
        assert_eq!(result.year_pair.name, "庚午");
        assert_eq!(result.month_pair.name, "甲申");
        assert_eq!(result.birth_date.year(), 1990);
    }

    #[test]
    fn test_compute_numerology_rejects_invalid_date() {
        assert!(matches!(
            compute_numerology(2023, 2, 30),
            Err(FortuneError::InvalidDate(_))
        ));
        assert!(compute_numerology(1850, 1, 1).is_err());
    }

    #[test]
    fn test_every_result_in_permitted_sets() {
        for year in [1900, 1955, 1999, 2000, 2048, 2100] {
            for month in 1..=12 {
                for day in 1..=28 {
                    let r = compute_numerology(year, month, day).unwrap();
                    assert!((1..=9).contains(&r.talent_number) || [11, 22].contains(&r.talent_number));
                    assert!(
                        (1..=9).contains(&r.essence_number) || [11, 22, 33].contains(&r.essence_number)
                    );
                    assert!((1..=9).contains(&r.inquiry_number) || r.inquiry_number == 11);
                }
            }
        }
    }
}
