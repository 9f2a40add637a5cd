//! Analysis requests: input guards, profile assembly and derived insights.

pub mod assembler;
pub mod guards;
pub mod insights;

pub use assembler::{
    analyze, analyze_batch, assemble_profile, build_selection, profile_to_json, resolve_mbti_type,
};
pub use insights::{derive_insights, ProfileInsights};
