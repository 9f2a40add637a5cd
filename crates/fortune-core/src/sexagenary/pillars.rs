//! Year, month, day and hour pillar calculators.
//!
//! All functions are pure over the read-only tables in
//! [`crate::sexagenary::tables`].

use chrono::NaiveDate;
use tracing::debug;

use crate::errors::{FortuneError, FortuneResult};
use crate::models::{CalendarDate, FourPillars, Pillar, PillarKind, StemBranchPair};
use crate::profile::guards::validate_hour;
use crate::sexagenary::tables::{
    cycle_index, ANCHOR_DATE, ANCHOR_YEAR, BRANCHES, BRANCH_COUNT, BRANCH_READINGS, HOUR_BRANCHES,
    HOUR_STEMS, MONTH_BRANCHES, MONTH_STEMS, STEMS, STEM_COUNT, STEM_READINGS,
};

/// Build the pair for the given stem and branch indices (each reduced into range).
pub fn pair_at(stem_index: usize, branch_index: usize) -> StemBranchPair {
    let stem_index = stem_index % STEM_COUNT;
    let branch_index = branch_index % BRANCH_COUNT;
    let stem = STEMS[stem_index];
    let branch = BRANCHES[branch_index];
    let stem_reading = STEM_READINGS[stem_index];
    let branch_reading = BRANCH_READINGS[branch_index];
    StemBranchPair {
        stem_index,
        branch_index,
        stem,
        branch,
        stem_reading,
        branch_reading,
        name: format!("{stem}{branch}"),
        reading: format!("{stem_reading}{branch_reading}"),
    }
}

fn pair_from_offset(offset: i64) -> StemBranchPair {
    pair_at(cycle_index(offset, STEM_COUNT), cycle_index(offset, BRANCH_COUNT))
}

pub fn year_pillar(year: i32) -> StemBranchPair {
    pair_from_offset(i64::from(year) - i64::from(ANCHOR_YEAR))
}

/// Month pair; the stem depends only on the year stem modulo 5.
pub fn month_pillar(year_pair: &StemBranchPair, month: u32) -> FortuneResult<StemBranchPair> {
    if !(1..=12).contains(&month) {
        return Err(FortuneError::InvalidDate(format!("month {month} is outside 1..=12")));
    }
    let slot = (month - 1) as usize;
    let stem_index = MONTH_STEMS[year_pair.stem_index % 5][slot];
    Ok(pair_at(stem_index, MONTH_BRANCHES[slot]))
}

/// Whole days between `date` and the anchor, in proleptic Gregorian counting.
pub fn days_from_anchor(date: NaiveDate) -> i64 {
    date.signed_duration_since(ANCHOR_DATE).num_days()
}

pub fn day_pillar(date: NaiveDate) -> StemBranchPair {
    pair_from_offset(days_from_anchor(date))
}

/// Hour pair; the stem depends only on the day stem modulo 5.
pub fn hour_pillar(day_pair: &StemBranchPair, hour: u32) -> FortuneResult<StemBranchPair> {
    let hour = validate_hour(hour)?;
    let slot = HOUR_BRANCHES[hour as usize];
    let stem_index = HOUR_STEMS[day_pair.stem_index % 5][slot];
    Ok(pair_at(stem_index, slot))
}

/// Validate the date, then compute all pillars (hour pillar only when `hour` is given).
pub fn compute_four_pillars(
    year: i32,
    month: u32,
    day: u32,
    hour: Option<u32>,
) -> FortuneResult<FourPillars> {
    let date = CalendarDate::new(year, month, day, hour)?;
    four_pillars_for(&date)
}

pub fn four_pillars_for(date: &CalendarDate) -> FortuneResult<FourPillars> {
    let year_pair = year_pillar(date.year());
    let month_pair = month_pillar(&year_pair, date.month())?;
    let day_pair = day_pillar(date.naive_date());
    let hour_pair = date
        .hour()
        .map(|h| hour_pillar(&day_pair, h))
        .transpose()?;

    debug!(
        year = %year_pair.name,
        month = %month_pair.name,
        day = %day_pair.name,
        hour = hour_pair.as_ref().map(|p| p.name.as_str()).unwrap_or("-"),
        "computed four pillars"
    );

    Ok(FourPillars {
        year: Pillar {
            kind: PillarKind::Year,
            pair: year_pair,
        },
        month: Pillar {
            kind: PillarKind::Month,
            pair: month_pair,
        },
        day: Pillar {
            kind: PillarKind::Day,
            pair: day_pair,
        },
        hour: hour_pair.map(|pair| Pillar {
            kind: PillarKind::Hour,
            pair,
        }),
    })
}
