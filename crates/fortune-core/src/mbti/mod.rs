//! MBTI typing: the question instrument, the answer classifier and the
//! static profile table.

pub mod classifier;
pub mod profiles;
pub mod questions;

pub use classifier::classify;
pub use profiles::lookup_mbti_profile;
pub use questions::{Dimension, MbtiQuestion, MBTI_QUESTIONS};
