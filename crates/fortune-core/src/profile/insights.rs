//! Derived facts the report layer draws from: trait radar scores, peak
//! activity window, compatibility table, lucky color and direction, team
//! placement and the risk matrix.

use serde::Serialize;

use crate::mbti::profiles::MBTI_PROFILES;
use crate::models::{CompleteProfile, MbtiProfile, MbtiType, NumerologyResult, StemBranchPair};

/// Upper bound of every radar axis.
pub const RADAR_MAX: u32 = 10;
/// Number of reference profiles listed in a compatibility table.
pub const COMPATIBILITY_TABLE_LEN: usize = 5;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TraitRadar {
    pub leadership: u32,
    pub creativity: u32,
    pub cooperation: u32,
    pub analysis: u32,
    pub execution: u32,
    pub communication: u32,
}

impl TraitRadar {
    pub const LABELS: [&'static str; 6] = [
        "リーダーシップ",
        "創造性",
        "協調性",
        "分析力",
        "実行力",
        "コミュニケーション",
    ];

    /// Scores in [`TraitRadar::LABELS`] order.
    pub fn values(&self) -> [u32; 6] {
        [
            self.leadership,
            self.creativity,
            self.cooperation,
            self.analysis,
            self.execution,
            self.communication,
        ]
    }
}

pub fn trait_radar(numerology: &NumerologyResult, mbti_type: MbtiType) -> TraitRadar {
    let essence = numerology.essence_number;
    let talent = numerology.talent_number;
    let score = |hit: bool, high: u32| if hit { high } else { 5 };
    TraitRadar {
        leadership: score(matches!(essence, 1 | 8), 8),
        creativity: score(matches!(talent, 3 | 9), 9),
        cooperation: score(matches!(talent, 2 | 6), 8),
        analysis: score(essence == 7, 9),
        execution: score(matches!(essence, 4 | 8), 8),
        communication: score(mbti_type.is_extravert(), 8),
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityWindow {
    Morning,
    AfternoonEvening,
}

impl ActivityWindow {
    pub fn label(&self) -> &'static str {
        match self {
            ActivityWindow::Morning => "午前中",
            ActivityWindow::AfternoonEvening => "午後から夜",
        }
    }
}

pub fn peak_activity_window(mbti_type: MbtiType) -> ActivityWindow {
    if mbti_type.is_extravert() {
        ActivityWindow::Morning
    } else {
        ActivityWindow::AfternoonEvening
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Compatibility {
    Neutral,
    Good,
    Best,
}

impl Compatibility {
    pub fn label(&self) -> &'static str {
        match self {
            Compatibility::Best => "最高",
            Compatibility::Good => "良好",
            Compatibility::Neutral => "普通",
        }
    }
}

/// Same type is best; a shared E/I or T/F letter is good.
pub fn compatibility(subject: MbtiType, other: MbtiType) -> Compatibility {
    if subject == other {
        Compatibility::Best
    } else if subject.letter(0) == other.letter(0) || subject.letter(2) == other.letter(2) {
        Compatibility::Good
    } else {
        Compatibility::Neutral
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CompatibilityEntry {
    pub mbti_type: MbtiType,
    pub name: &'static str,
    pub rating: Compatibility,
    pub tip: &'static str,
}

/// The leading reference profiles rated against `subject`.
pub fn compatibility_table(subject: MbtiType) -> Vec<CompatibilityEntry> {
    MBTI_PROFILES
        .iter()
        .take(COMPATIBILITY_TABLE_LEN)
        .map(|p| CompatibilityEntry {
            mbti_type: p.mbti_type,
            name: p.name,
            rating: compatibility(subject, p.mbti_type),
            tip: p.communication,
        })
        .collect()
}

const LUCKY_COLORS: [&str; 9] = ["赤", "オレンジ", "黄", "緑", "青", "紫", "白", "黒", "金"];

/// Color for essence numbers 1..=9; master numbers get 無彩色.
pub fn lucky_color(essence_number: u32) -> &'static str {
    match essence_number {
        1..=9 => LUCKY_COLORS[(essence_number - 1) as usize],
        _ => "無彩色",
    }
}

/// Indexed by branch, 子 first.
const LUCKY_DIRECTIONS: [&str; 12] = [
    "北", "北東", "東北東", "東", "東南東", "南東", "南", "南西", "西南西", "西", "西北西", "北西",
];

/// Direction of the year pillar's branch.
pub fn lucky_direction(year_pair: &StemBranchPair) -> &'static str {
    LUCKY_DIRECTIONS
        .get(year_pair.branch_index)
        .copied()
        .unwrap_or("中央")
}

/// Suggested team roles. Rules are checked in order: E+J, I+T, E+F, rest.
pub fn team_placement(mbti_type: MbtiType) -> [&'static str; 3] {
    let extravert = mbti_type.is_extravert();
    let thinking = mbti_type.letter(2) == Some('T');
    let judging = mbti_type.letter(3) == Some('J');
    if extravert && judging {
        ["リーダー役", "プロジェクトマネージャー", "クライアント対応"]
    } else if !extravert && thinking {
        ["技術リーダー", "分析担当", "品質管理"]
    } else if extravert && !thinking {
        ["チームマネージャー", "人事担当", "顧客サポート"]
    } else {
        ["専門家", "研究開発", "クリエイティブ"]
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub fn label(&self) -> &'static str {
        match self {
            RiskLevel::Low => "低",
            RiskLevel::Medium => "中",
            RiskLevel::High => "高",
        }
    }
}

/// Up to 2 factors is low, up to 4 medium, anything more high.
pub fn risk_level(factor_count: usize) -> RiskLevel {
    match factor_count {
        0..=2 => RiskLevel::Low,
        3..=4 => RiskLevel::Medium,
        _ => RiskLevel::High,
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct RiskMatrix {
    /// From the number of stress factors.
    pub turnover: RiskLevel,
    /// From the number of weaknesses.
    pub performance: RiskLevel,
    /// Low with more than three motivation factors, otherwise medium.
    pub motivation: RiskLevel,
}

pub fn risk_matrix(profile: &MbtiProfile) -> RiskMatrix {
    RiskMatrix {
        turnover: risk_level(profile.stress_factors.len()),
        performance: risk_level(profile.weaknesses.len()),
        motivation: if profile.motivation_factors.len() > 3 {
            RiskLevel::Low
        } else {
            RiskLevel::Medium
        },
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ProfileInsights {
    pub radar: TraitRadar,
    pub peak_activity: ActivityWindow,
    pub compatibility: Vec<CompatibilityEntry>,
    pub lucky_color: &'static str,
    pub lucky_direction: &'static str,
    pub team_placement: [&'static str; 3],
    pub risks: RiskMatrix,
}

pub fn derive_insights(profile: &CompleteProfile) -> ProfileInsights {
    ProfileInsights {
        radar: trait_radar(&profile.numerology, profile.mbti_type),
        peak_activity: peak_activity_window(profile.mbti_type),
        compatibility: compatibility_table(profile.mbti_type),
        lucky_color: lucky_color(profile.numerology.essence_number),
        lucky_direction: lucky_direction(&profile.pillars.year.pair),
        team_placement: team_placement(profile.mbti_type),
        risks: risk_matrix(profile.mbti_profile),
    }
}
