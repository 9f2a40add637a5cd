//! Fortune core library: birth-date numerology, the sexagenary stem/branch
//! calendar and MBTI typing, assembled into a single career profile.
//!
//! The engine is pure and deterministic. With the `python` feature enabled
//! it is also compiled as a Python extension module (`_fortune_core`) via
//! PyO3 so the presentation layer can call it directly.

pub mod config;
pub mod errors;
pub mod mbti;
pub mod models;
pub mod numerology;
pub mod profile;
pub mod sexagenary;

#[cfg(feature = "python")]
mod python;

#[cfg(feature = "python")]
use pyo3::prelude::*;

// ---------------------------------------------------------------------------
// Top-level Python module: _fortune_core
// ---------------------------------------------------------------------------

#[cfg(feature = "python")]
#[pymodule]
fn _fortune_core(m: &Bound<'_, PyModule>) -> PyResult<()> {
    python::register(m)
}
