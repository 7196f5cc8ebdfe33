pub mod exercise;
pub mod generation_policy;
pub mod messages;

pub use exercise::{MAX_PROMPT_LENGTH, QUESTION_ID, QUESTION_TEXT};
