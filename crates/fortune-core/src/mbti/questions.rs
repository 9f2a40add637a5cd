//! The fixed eight-question forced-choice instrument.

use serde::Serialize;

/// One MBTI dichotomy. The A side letter wins on a strictly positive total.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum Dimension {
    #[serde(rename = "EI")]
    ExtraversionIntroversion,
    #[serde(rename = "SN")]
    SensingIntuition,
    #[serde(rename = "TF")]
    ThinkingFeeling,
    #[serde(rename = "JP")]
    JudgingPerceiving,
}

impl Dimension {
    /// Fixed letter order of a type code.
    pub const ORDER: [Dimension; 4] = [
        Dimension::ExtraversionIntroversion,
        Dimension::SensingIntuition,
        Dimension::ThinkingFeeling,
        Dimension::JudgingPerceiving,
    ];

    pub fn position(&self) -> usize {
        match self {
            Dimension::ExtraversionIntroversion => 0,
            Dimension::SensingIntuition => 1,
            Dimension::ThinkingFeeling => 2,
            Dimension::JudgingPerceiving => 3,
        }
    }

    pub fn a_side(&self) -> char {
        match self {
            Dimension::ExtraversionIntroversion => 'E',
            Dimension::SensingIntuition => 'S',
            Dimension::ThinkingFeeling => 'T',
            Dimension::JudgingPerceiving => 'J',
        }
    }

    pub fn b_side(&self) -> char {
        match self {
            Dimension::ExtraversionIntroversion => 'I',
            Dimension::SensingIntuition => 'N',
            Dimension::ThinkingFeeling => 'F',
            Dimension::JudgingPerceiving => 'P',
        }
    }
}

#[derive(Debug, Serialize)]
pub struct AnswerOption {
    pub text: &'static str,
    pub weight: i32,
}

#[derive(Debug, Serialize)]
pub struct MbtiQuestion {
    pub question: &'static str,
    pub dimension: Dimension,
    pub option_a: AnswerOption,
    pub option_b: AnswerOption,
}

impl MbtiQuestion {
    /// Weight of the chosen option (0 = A, anything else = B).
    pub fn weight_for(&self, answer: u8) -> i32 {
        if answer == 0 {
            self.option_a.weight
        } else {
            self.option_b.weight
        }
    }
}

const fn question(
    question: &'static str,
    dimension: Dimension,
    a: &'static str,
    b: &'static str,
) -> MbtiQuestion {
    MbtiQuestion {
        question,
        dimension,
        option_a: AnswerOption { text: a, weight: 1 },
        option_b: AnswerOption { text: b, weight: -1 },
    }
}

pub static MBTI_QUESTIONS: [MbtiQuestion; 8] = [
    question(
        "パーティーや集まりでは？",
        Dimension::ExtraversionIntroversion,
        "多くの人と話す",
        "少数の人と深く話す",
    ),
    question(
        "エネルギーを充電する方法は？",
        Dimension::ExtraversionIntroversion,
        "人と過ごす",
        "一人の時間",
    ),
    question(
        "情報を処理する方法は？",
        Dimension::SensingIntuition,
        "具体的な事実と詳細",
        "可能性とパターン",
    ),
    question(
        "新しいスキルを学ぶ時は？",
        Dimension::SensingIntuition,
        "実践的に試す",
        "理論を理解してから",
    ),
    question(
        "意思決定の基準は？",
        Dimension::ThinkingFeeling,
        "論理と客観性",
        "価値観と調和",
    ),
    question(
        "問題が起きた時は？",
        Dimension::ThinkingFeeling,
        "事実を分析する",
        "人の気持ちを考える",
    ),
    question(
        "生活スタイルは？",
        Dimension::JudgingPerceiving,
        "計画を立てて実行",
        "柔軟に適応",
    ),
    question(
        "締切がある時は？",
        Dimension::JudgingPerceiving,
        "早めに完了させる",
        "締切直前まで作業",
    ),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_each_dimension_has_two_questions() {
        for dim in Dimension::ORDER {
            let count = MBTI_QUESTIONS.iter().filter(|q| q.dimension == dim).count();
            assert_eq!(count, 2, "{dim:?}");
        }
    }

    #[test]
    fn test_option_weights_are_opposed() {
        for q in &MBTI_QUESTIONS {
            assert_eq!(q.weight_for(0), 1);
            assert_eq!(q.weight_for(1), -1);
        }
    }

    #[test]
    fn test_dimension_letters() {
        let a: String = Dimension::ORDER.iter().map(|d| d.a_side()).collect();
        let b: String = Dimension::ORDER.iter().map(|d| d.b_side()).collect();
        assert_eq!(a, "ESTJ");
        assert_eq!(b, "INFP");
    }
}
