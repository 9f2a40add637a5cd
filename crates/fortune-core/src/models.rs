//! Shared typed models used across the numerology, calendar and MBTI layers.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize, Serializer};

use crate::errors::{FortuneError, FortuneResult};
use crate::profile::guards::validate_date;

// ---------------------------------------------------------------------------
// 1. CalendarDate
// ---------------------------------------------------------------------------

/// A validated Gregorian birth date with an optional birth hour.
///
/// Only constructible through [`CalendarDate::new`], so holding one means the
/// year is in range, the day exists in its month, and the hour (if any) is
/// 0..=23.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CalendarDate {
    date: NaiveDate,
    hour: Option<u32>,
}

impl CalendarDate {
    pub fn new(year: i32, month: u32, day: u32, hour: Option<u32>) -> FortuneResult<Self> {
        let date = validate_date(year, month, day, hour)?;
        Ok(Self { date, hour })
    }

    pub fn year(&self) -> i32 {
        self.date.year()
    }

    pub fn month(&self) -> u32 {
        self.date.month()
    }

    pub fn day(&self) -> u32 {
        self.date.day()
    }

    pub fn hour(&self) -> Option<u32> {
        self.hour
    }

    pub fn naive_date(&self) -> NaiveDate {
        self.date
    }
}

impl Serialize for CalendarDate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let fields = if self.hour.is_some() { 4 } else { 3 };
        let mut state = serializer.serialize_struct("CalendarDate", fields)?;
        state.serialize_field("year", &self.year())?;
        state.serialize_field("month", &self.month())?;
        state.serialize_field("day", &self.day())?;
        if let Some(hour) = self.hour {
            state.serialize_field("hour", &hour)?;
        } else {
            state.skip_field("hour")?;
        }
        state.end()
    }
}

// ---------------------------------------------------------------------------
// 2. StemBranchPair / Pillar / FourPillars
// ---------------------------------------------------------------------------

/// One stem + branch combination of the sexagenary cycle.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct StemBranchPair {
    pub stem_index: usize,
    pub branch_index: usize,
    pub stem: &'static str,
    pub branch: &'static str,
    pub stem_reading: &'static str,
    pub branch_reading: &'static str,
    pub name: String,
    pub reading: String,
}

/// Which time unit a pillar describes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PillarKind {
    Year,
    Month,
    Day,
    Hour,
}

impl PillarKind {
    pub fn label(&self) -> &'static str {
        match self {
            PillarKind::Year => "年柱",
            PillarKind::Month => "月柱",
            PillarKind::Day => "日柱",
            PillarKind::Hour => "時柱",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            PillarKind::Year => "先祖・両親・幼少期の環境を表す",
            PillarKind::Month => "社会性・職業・青年期の運勢を表す",
            PillarKind::Day => "本人の本質・性格・中年期の運勢を表す",
            PillarKind::Hour => "子供・晩年期の運勢・隠れた才能を表す",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Pillar {
    pub kind: PillarKind,
    pub pair: StemBranchPair,
}

impl Serialize for Pillar {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Pillar", 4)?;
        state.serialize_field("kind", &self.kind)?;
        state.serialize_field("label", self.kind.label())?;
        state.serialize_field("description", self.kind.description())?;
        state.serialize_field("pair", &self.pair)?;
        state.end()
    }
}

/// Year, month and day pillars, plus the hour pillar when an hour was given.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct FourPillars {
    pub year: Pillar,
    pub month: Pillar,
    pub day: Pillar,
    pub hour: Option<Pillar>,
}

// ---------------------------------------------------------------------------
// 3. NumerologyResult
// ---------------------------------------------------------------------------

/// Core numbers derived from a birth date.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NumerologyResult {
    /// 1..=9, 11 or 22.
    pub talent_number: u32,
    /// 1..=9, 11, 22 or 33.
    pub essence_number: u32,
    /// 1..=9 or 11.
    pub inquiry_number: u32,
    pub year_pair: StemBranchPair,
    pub month_pair: StemBranchPair,
    pub birth_date: CalendarDate,
}

// ---------------------------------------------------------------------------
// 4. MbtiType / MbtiProfile
// ---------------------------------------------------------------------------

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum MbtiType {
    Intj,
    Intp,
    Entj,
    Entp,
    Infj,
    Infp,
    Enfj,
    Enfp,
    Istj,
    Isfj,
    Estj,
    Esfj,
    Istp,
    Isfp,
    Estp,
    Esfp,
}

impl MbtiType {
    /// All sixteen types in reference-table order.
    pub const ALL: [MbtiType; 16] = [
        MbtiType::Intj,
        MbtiType::Intp,
        MbtiType::Entj,
        MbtiType::Entp,
        MbtiType::Infj,
        MbtiType::Infp,
        MbtiType::Enfj,
        MbtiType::Enfp,
        MbtiType::Istj,
        MbtiType::Isfj,
        MbtiType::Estj,
        MbtiType::Esfj,
        MbtiType::Istp,
        MbtiType::Isfp,
        MbtiType::Estp,
        MbtiType::Esfp,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MbtiType::Intj => "INTJ",
            MbtiType::Intp => "INTP",
            MbtiType::Entj => "ENTJ",
            MbtiType::Entp => "ENTP",
            MbtiType::Infj => "INFJ",
            MbtiType::Infp => "INFP",
            MbtiType::Enfj => "ENFJ",
            MbtiType::Enfp => "ENFP",
            MbtiType::Istj => "ISTJ",
            MbtiType::Isfj => "ISFJ",
            MbtiType::Estj => "ESTJ",
            MbtiType::Esfj => "ESFJ",
            MbtiType::Istp => "ISTP",
            MbtiType::Isfp => "ISFP",
            MbtiType::Estp => "ESTP",
            MbtiType::Esfp => "ESFP",
        }
    }

    /// Build a type from the four resolved dichotomies (true = E, S, T, J side).
    pub fn from_letters(extravert: bool, sensing: bool, thinking: bool, judging: bool) -> Self {
        match (extravert, sensing, thinking, judging) {
            (false, false, true, true) => MbtiType::Intj,
            (false, false, true, false) => MbtiType::Intp,
            (true, false, true, true) => MbtiType::Entj,
            (true, false, true, false) => MbtiType::Entp,
            (false, false, false, true) => MbtiType::Infj,
            (false, false, false, false) => MbtiType::Infp,
            (true, false, false, true) => MbtiType::Enfj,
            (true, false, false, false) => MbtiType::Enfp,
            (false, true, true, true) => MbtiType::Istj,
            (false, true, false, true) => MbtiType::Isfj,
            (true, true, true, true) => MbtiType::Estj,
            (true, true, false, true) => MbtiType::Esfj,
            (false, true, true, false) => MbtiType::Istp,
            (false, true, false, false) => MbtiType::Isfp,
            (true, true, true, false) => MbtiType::Estp,
            (true, true, false, false) => MbtiType::Esfp,
        }
    }

    /// Letter at position 0..4 (E/I, S/N, T/F, J/P).
    pub fn letter(&self, position: usize) -> Option<char> {
        self.as_str().chars().nth(position)
    }

    pub fn is_extravert(&self) -> bool {
        self.letter(0) == Some('E')
    }
}

impl fmt::Display for MbtiType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MbtiType {
    type Err = FortuneError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MbtiType::ALL
            .iter()
            .copied()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| FortuneError::InvalidMbtiInput(format!("unknown MBTI type code: {s:?}")))
    }
}

/// Static reference text for one MBTI type.
#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct MbtiProfile {
    #[serde(rename = "type")]
    pub mbti_type: MbtiType,
    pub name: &'static str,
    pub description: &'static str,
    pub strengths: &'static [&'static str],
    pub weaknesses: &'static [&'static str],
    pub work_style: &'static str,
    pub communication: &'static str,
    pub stress_factors: &'static [&'static str],
    pub motivation_factors: &'static [&'static str],
    pub team_role: &'static str,
    pub management_style: &'static str,
}

// ---------------------------------------------------------------------------
// 5. Selection / request / CompleteProfile
// ---------------------------------------------------------------------------

/// How the caller supplies the MBTI type.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MbtiSelection {
    Declared(MbtiType),
    /// Eight ordered answers, 0 = option A, 1 = option B.
    Answers(Vec<u8>),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AnalysisRequest {
    pub date: CalendarDate,
    pub gender: String,
    pub selection: Option<MbtiSelection>,
}

/// Everything computed for one analysis request.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CompleteProfile {
    pub numerology: NumerologyResult,
    pub pillars: FourPillars,
    pub mbti_type: MbtiType,
    pub mbti_profile: &'static MbtiProfile,
    pub gender: String,
    pub birth_date: CalendarDate,
}
