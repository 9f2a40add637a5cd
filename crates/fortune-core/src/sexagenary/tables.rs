//! Read-only lookup tables for the stem/branch cycle.
//!
//! Derivation tables hold indices into [`STEMS`] / [`BRANCHES`] rather than
//! symbols so the traditional rules stay auditable against the index tests
//! below.

use chrono::NaiveDate;

pub const STEM_COUNT: usize = 10;
pub const BRANCH_COUNT: usize = 12;

pub const STEMS: [&str; STEM_COUNT] = ["甲", "乙", "丙", "丁", "戊", "己", "庚", "辛", "壬", "癸"];
pub const STEM_READINGS: [&str; STEM_COUNT] = [
    "きのえ",
    "きのと",
    "ひのえ",
    "ひのと",
    "つちのえ",
    "つちのと",
    "かのえ",
    "かのと",
    "みずのえ",
    "みずのと",
];

pub const BRANCHES: [&str; BRANCH_COUNT] =
    ["子", "丑", "寅", "卯", "辰", "巳", "午", "未", "申", "酉", "戌", "亥"];
pub const BRANCH_READINGS: [&str; BRANCH_COUNT] = [
    "ね", "うし", "とら", "う", "たつ", "み", "うま", "ひつじ", "さる", "とり", "いぬ", "い",
];

/// A 甲子 year.
pub const ANCHOR_YEAR: i32 = 1984;

/// Day counted as 甲子 for the day cycle.
pub const ANCHOR_DATE: NaiveDate = match NaiveDate::from_ymd_opt(1900, 1, 1) {
    Some(date) => date,
    None => panic!("1900-01-01 is a valid date"),
};

/// Branch index for calendar months 1..=12 (month 1 is 寅, month 11 is 子).
pub const MONTH_BRANCHES: [usize; 12] = [2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 0, 1];

/// Month stems per `year_stem % 5`; rows 0..5 cover 甲己, 乙庚, 丙辛, 丁壬, 戊癸 years.
pub const MONTH_STEMS: [[usize; 12]; 5] = [
    [2, 3, 4, 5, 6, 7, 8, 9, 0, 1, 2, 3],
    [4, 5, 6, 7, 8, 9, 0, 1, 2, 3, 4, 5],
    [6, 7, 8, 9, 0, 1, 2, 3, 4, 5, 6, 7],
    [8, 9, 0, 1, 2, 3, 4, 5, 6, 7, 8, 9],
    [0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 0, 1],
];

/// Two-hour slot (and branch index) for each clock hour; 23:00 opens the 子 slot.
pub const HOUR_BRANCHES: [usize; 24] = [
    0, 1, 1, 2, 2, 3, 3, 4, 4, 5, 5, 6, 6, 7, 7, 8, 8, 9, 9, 10, 10, 11, 11, 0,
];

/// Slot stems per `day_stem % 5` (five-rat-escape rule).
pub const HOUR_STEMS: [[usize; 12]; 5] = [
    [0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 0, 1],
    [2, 3, 4, 5, 6, 7, 8, 9, 0, 1, 2, 3],
    [4, 5, 6, 7, 8, 9, 0, 1, 2, 3, 4, 5],
    [6, 7, 8, 9, 0, 1, 2, 3, 4, 5, 6, 7],
    [8, 9, 0, 1, 2, 3, 4, 5, 6, 7, 8, 9],
];

/// `((x % n) + n) % n`, the non-negative representative of `x` modulo `n`.
pub fn cycle_index(x: i64, n: usize) -> usize {
    let n = n as i64;
    (((x % n) + n) % n) as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cycle_index_negative() {
        assert_eq!(cycle_index(-1, 10), 9);
        assert_eq!(cycle_index(-84, 12), 0);
        assert_eq!(cycle_index(-84, 10), 6);
        assert_eq!(cycle_index(0, 12), 0);
        assert_eq!(cycle_index(125, 12), 5);
    }

    #[test]
    fn test_month_branches_offset_from_calendar_month() {
        for (i, &branch) in MONTH_BRANCHES.iter().enumerate() {
            let month = i + 1;
            assert_eq!(branch, (month + 1) % BRANCH_COUNT);
        }
    }

    #[test]
    fn test_month_stem_rows_follow_year_stem_rule() {
        // First month stem is 丙 for 甲 years and advances by two per row.
        for (row, stems) in MONTH_STEMS.iter().enumerate() {
            for (i, &stem) in stems.iter().enumerate() {
                assert_eq!(stem, (2 + 2 * row + i) % STEM_COUNT, "row {row} month {}", i + 1);
            }
        }
    }

    #[test]
    fn test_hour_branches_pair_hours() {
        assert_eq!(HOUR_BRANCHES[23], 0);
        assert_eq!(HOUR_BRANCHES[0], 0);
        for hour in 1..=22usize {
            assert_eq!(HOUR_BRANCHES[hour], (hour + 1) / 2);
        }
    }

    #[test]
    fn test_hour_stem_rows_follow_day_stem_rule() {
        for (row, stems) in HOUR_STEMS.iter().enumerate() {
            for (slot, &stem) in stems.iter().enumerate() {
                assert_eq!(stem, (2 * row + slot) % STEM_COUNT);
            }
        }
    }

    #[test]
    fn test_anchor_date() {
        assert_eq!(ANCHOR_DATE.to_string(), "1900-01-01");
    }

    #[test]
    fn test_anchor_date_usable_in_const_context() {
        const ANCHOR: NaiveDate = ANCHOR_DATE;
        assert_eq!(ANCHOR, NaiveDate::from_ymd_opt(1900, 1, 1).unwrap());
    }
}
