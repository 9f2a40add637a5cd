//! PyO3 wrappers for the presentation layer.
//!
//! Results are serialized with serde and handed over as plain Python
//! dicts/lists through the stdlib `json` module.

use pyo3::prelude::*;
use pyo3::wrap_pyfunction;
use serde::Serialize;

use crate::errors::FortuneError;
use crate::mbti::{self, MBTI_QUESTIONS};
use crate::models::{AnalysisRequest, CalendarDate, CompleteProfile};
use crate::profile::guards::{self, MAX_HOUR, MAX_YEAR, MBTI_ANSWER_COUNT, MIN_YEAR};
use crate::profile::{self as profile_mod, derive_insights};
use crate::{numerology, sexagenary};

fn to_py<T: Serialize>(py: Python<'_>, value: &T) -> PyResult<PyObject> {
    let text = serde_json::to_string(value).map_err(FortuneError::from)?;
    let json_module = py.import("json")?;
    Ok(json_module.call_method1("loads", (text,))?.unbind())
}

fn build_request(
    year: i32,
    month: u32,
    day: u32,
    gender: String,
    mbti_type: Option<&str>,
    answers: Option<Vec<i64>>,
    hour: Option<u32>,
) -> PyResult<AnalysisRequest> {
    let date = CalendarDate::new(year, month, day, hour)?;
    // A declared type wins, so answers are only checked when they are used.
    let answers = match (mbti_type, answers) {
        (None, Some(raw)) => Some(guards::narrow_answers(&raw)?),
        _ => None,
    };
    let selection = profile_mod::build_selection(mbti_type, answers)?;
    Ok(AnalysisRequest {
        date,
        gender,
        selection,
    })
}

fn analyze_args(
    year: i32,
    month: u32,
    day: u32,
    gender: String,
    mbti_type: Option<&str>,
    answers: Option<Vec<i64>>,
    hour: Option<u32>,
) -> PyResult<CompleteProfile> {
    let request = build_request(year, month, day, gender, mbti_type, answers, hour)?;
    Ok(profile_mod::analyze(&request)?)
}

#[pyfunction]
#[pyo3(name = "compute_numerology")]
fn py_compute_numerology(py: Python<'_>, year: i32, month: u32, day: u32) -> PyResult<PyObject> {
    let result = numerology::compute_numerology(year, month, day)?;
    to_py(py, &result)
}

#[pyfunction]
#[pyo3(name = "compute_four_pillars", signature = (year, month, day, hour=None))]
fn py_compute_four_pillars(
    py: Python<'_>,
    year: i32,
    month: u32,
    day: u32,
    hour: Option<u32>,
) -> PyResult<PyObject> {
    let pillars = sexagenary::compute_four_pillars(year, month, day, hour)?;
    to_py(py, &pillars)
}

#[pyfunction]
#[pyo3(name = "classify_mbti")]
fn py_classify_mbti(answers: Vec<i64>) -> PyResult<String> {
    let answers = guards::narrow_answers(&answers)?;
    Ok(mbti::classify(&answers)?.as_str().to_string())
}

#[pyfunction]
#[pyo3(name = "lookup_mbti_profile")]
fn py_lookup_mbti_profile(py: Python<'_>, mbti_type: &str) -> PyResult<PyObject> {
    let mbti_type = guards::parse_mbti_type(mbti_type)?;
    to_py(py, mbti::lookup_mbti_profile(mbti_type))
}

#[pyfunction]
#[pyo3(
    name = "assemble_profile",
    signature = (year, month, day, gender, mbti_type=None, answers=None, hour=None)
)]
#[allow(clippy::too_many_arguments)]
fn py_assemble_profile(
    py: Python<'_>,
    year: i32,
    month: u32,
    day: u32,
    gender: String,
    mbti_type: Option<&str>,
    answers: Option<Vec<i64>>,
    hour: Option<u32>,
) -> PyResult<PyObject> {
    let profile = analyze_args(year, month, day, gender, mbti_type, answers, hour)?;
    to_py(py, &profile)
}

#[pyfunction]
#[pyo3(
    name = "profile_insights",
    signature = (year, month, day, gender, mbti_type=None, answers=None, hour=None)
)]
#[allow(clippy::too_many_arguments)]
fn py_profile_insights(
    py: Python<'_>,
    year: i32,
    month: u32,
    day: u32,
    gender: String,
    mbti_type: Option<&str>,
    answers: Option<Vec<i64>>,
    hour: Option<u32>,
) -> PyResult<PyObject> {
    let profile = analyze_args(year, month, day, gender, mbti_type, answers, hour)?;
    to_py(py, &derive_insights(&profile))
}

#[pyfunction]
#[pyo3(name = "mbti_questions")]
fn py_mbti_questions(py: Python<'_>) -> PyResult<PyObject> {
    to_py(py, &MBTI_QUESTIONS)
}

#[pyfunction]
#[pyo3(name = "parse_hour")]
fn py_parse_hour(raw: &str) -> PyResult<Option<u32>> {
    Ok(guards::parse_hour(raw)?)
}

pub fn register(m: &Bound<'_, PyModule>) -> PyResult<()> {
    // -- Guard constants ------------------------------------------------------
    m.add("MIN_YEAR", MIN_YEAR)?;
    m.add("MAX_YEAR", MAX_YEAR)?;
    m.add("MAX_HOUR", MAX_HOUR)?;
    m.add("MBTI_ANSWER_COUNT", MBTI_ANSWER_COUNT)?;

    // -- Engine ---------------------------------------------------------------
    m.add_function(wrap_pyfunction!(py_compute_numerology, m)?)?;
    m.add_function(wrap_pyfunction!(py_compute_four_pillars, m)?)?;
    m.add_function(wrap_pyfunction!(py_classify_mbti, m)?)?;
    m.add_function(wrap_pyfunction!(py_lookup_mbti_profile, m)?)?;
    m.add_function(wrap_pyfunction!(py_assemble_profile, m)?)?;
    m.add_function(wrap_pyfunction!(py_profile_insights, m)?)?;

    // -- Helpers --------------------------------------------------------------
    m.add_function(wrap_pyfunction!(py_mbti_questions, m)?)?;
    m.add_function(wrap_pyfunction!(py_parse_hour, m)?)?;

    Ok(())
}
