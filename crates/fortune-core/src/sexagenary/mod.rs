//! Sexagenary (stem/branch) calendar: year, month, day and hour pillars.

pub mod pillars;
pub mod tables;

pub use pillars::{
    compute_four_pillars, day_pillar, four_pillars_for, hour_pillar, month_pillar, year_pillar,
};
