//! Fold eight forced-choice answers into a four-letter type.

use tracing::debug;

use crate::errors::FortuneResult;
use crate::mbti::questions::{Dimension, MBTI_QUESTIONS};
use crate::models::MbtiType;
use crate::profile::guards::validate_answers;

/// Per-dimension running totals, indexed by [`Dimension::position`].
pub fn dimension_totals(answers: &[u8]) -> FortuneResult<[i32; 4]> {
    validate_answers(answers)?;
    let mut totals = [0i32; 4];
    for (question, &answer) in MBTI_QUESTIONS.iter().zip(answers) {
        totals[question.dimension.position()] += question.weight_for(answer);
    }
    Ok(totals)
}

/// Classify answers (0 = option A, 1 = option B). Ties resolve to the B side.
pub fn classify(answers: &[u8]) -> FortuneResult<MbtiType> {
    let totals = dimension_totals(answers)?;
    let resolved = |dim: Dimension| totals[dim.position()] > 0;
    let mbti_type = MbtiType::from_letters(
        resolved(Dimension::ExtraversionIntroversion),
        resolved(Dimension::SensingIntuition),
        resolved(Dimension::ThinkingFeeling),
        resolved(Dimension::JudgingPerceiving),
    );
    debug!(?totals, %mbti_type, "classified MBTI answers");
    Ok(mbti_type)
}
