//! Profile assembly: merges numerology, pillars and MBTI into one record.

use std::time::Instant;

use rayon::prelude::*;
use tracing::{debug, info};

use crate::config::{max_batch_size, parallel_batch_enabled};
use crate::errors::{FortuneError, FortuneResult};
use crate::mbti::{classify, lookup_mbti_profile};
use crate::models::{AnalysisRequest, CalendarDate, CompleteProfile, MbtiSelection, MbtiType};
use crate::numerology::numerology_for;
use crate::profile::guards::parse_mbti_type;
use crate::sexagenary::four_pillars_for;

/// A declared type is used as-is; answers go through the classifier.
pub fn resolve_mbti_type(selection: Option<&MbtiSelection>) -> FortuneResult<MbtiType> {
    match selection {
        Some(MbtiSelection::Declared(mbti_type)) => Ok(*mbti_type),
        Some(MbtiSelection::Answers(answers)) => classify(answers),
        None => Err(FortuneError::MissingSelection(
            "neither a declared MBTI type nor an answer set was supplied".to_string(),
        )),
    }
}

/// Build a selection from loose inputs. A declared code wins over answers;
/// neither gives `None`, which [`resolve_mbti_type`] reports as missing.
pub fn build_selection(
    declared: Option<&str>,
    answers: Option<Vec<u8>>,
) -> FortuneResult<Option<MbtiSelection>> {
    Ok(match (declared, answers) {
        (Some(code), _) => Some(MbtiSelection::Declared(parse_mbti_type(code)?)),
        (None, Some(answers)) => Some(MbtiSelection::Answers(answers)),
        (None, None) => None,
    })
}

pub fn assemble_profile(
    date: &CalendarDate,
    gender: &str,
    mbti_type: MbtiType,
) -> FortuneResult<CompleteProfile> {
    let numerology = numerology_for(date)?;
    let pillars = four_pillars_for(date)?;
    let profile = CompleteProfile {
        numerology,
        pillars,
        mbti_type,
        mbti_profile: lookup_mbti_profile(mbti_type),
        gender: gender.to_string(),
        birth_date: *date,
    };
    debug!(
        date = %date.naive_date(),
        hour = ?date.hour(),
        %mbti_type,
        "assembled profile"
    );
    Ok(profile)
}

/// Resolve the MBTI selection, then assemble.
pub fn analyze(request: &AnalysisRequest) -> FortuneResult<CompleteProfile> {
    let mbti_type = resolve_mbti_type(request.selection.as_ref())?;
    assemble_profile(&request.date, &request.gender, mbti_type)
}

/// Analyze every request independently, preserving input order.
///
/// Fails as a whole only when the batch exceeds `FORTUNE_MAX_BATCH`.
pub fn analyze_batch(
    requests: &[AnalysisRequest],
) -> FortuneResult<Vec<FortuneResult<CompleteProfile>>> {
    let limit = max_batch_size();
    if requests.len() > limit {
        return Err(FortuneError::BatchLimit {
            size: requests.len(),
            limit,
        });
    }
    if requests.is_empty() {
        return Ok(vec![]);
    }

    let started = Instant::now();
    let parallel = parallel_batch_enabled();
    let results: Vec<FortuneResult<CompleteProfile>> = if parallel {
        requests.par_iter().map(analyze).collect()
    } else {
        requests.iter().map(analyze).collect()
    };

    let failed = results.iter().filter(|r| r.is_err()).count();
    info!(
        requests = requests.len(),
        failed,
        parallel,
        elapsed_ms = started.elapsed().as_millis() as u64,
        "analyzed batch"
    );
    Ok(results)
}

pub fn profile_to_json(profile: &CompleteProfile) -> FortuneResult<String> {
    Ok(serde_json::to_string(profile)?)
}
