//! Digit-sum reduction with master-number exemptions.
//!
//! Every core number is computed in two phases: a raw total built from the
//! date fields, then [`apply_master_number_or_reduce`]. The master check
//! looks at the raw total only. A total that reaches 11/22/33 after a
//! reduction pass keeps reducing.

/// Master numbers that stop the talent reduction.
pub const TALENT_MASTERS: &[u32] = &[11, 22];
/// Master numbers that stop the essence reduction.
pub const ESSENCE_MASTERS: &[u32] = &[11, 22, 33];
/// Master numbers that stop the inquiry reduction.
pub const INQUIRY_MASTERS: &[u32] = &[11];

/// Sum of the decimal digits of `n`.
pub fn digit_sum(mut n: u32) -> u32 {
    let mut sum = 0;
    while n > 0 {
        sum += n % 10;
        n /= 10;
    }
    sum
}

/// Month contribution: months below 10 count as-is, 10..=12 by digit sum.
fn month_component(month: u32) -> u32 {
    if month < 10 {
        month
    } else {
        digit_sum(month)
    }
}

/// Return `total` if it is one of `allowed_masters`, otherwise digit-sum it down to 1..=9.
pub fn apply_master_number_or_reduce(total: u32, allowed_masters: &[u32]) -> u32 {
    if allowed_masters.contains(&total) {
        return total;
    }
    let mut result = total;
    while result >= 10 {
        result = digit_sum(result);
    }
    result
}

pub fn talent_raw_total(day: u32) -> u32 {
    day
}

pub fn essence_raw_total(year: i32, month: u32, day: u32) -> u32 {
    digit_sum(year.unsigned_abs()) + month_component(month) + digit_sum(day)
}

pub fn inquiry_raw_total(month: u32, day: u32) -> u32 {
    month_component(month) + digit_sum(day)
}

/// 1..=9, 11 or 22.
pub fn talent_number(day: u32) -> u32 {
    apply_master_number_or_reduce(talent_raw_total(day), TALENT_MASTERS)
}

/// 1..=9, 11, 22 or 33.
pub fn essence_number(year: i32, month: u32, day: u32) -> u32 {
    apply_master_number_or_reduce(essence_raw_total(year, month, day), ESSENCE_MASTERS)
}

/// 1..=9 or 11.
pub fn inquiry_number(month: u32, day: u32) -> u32 {
    apply_master_number_or_reduce(inquiry_raw_total(month, day), INQUIRY_MASTERS)
}
