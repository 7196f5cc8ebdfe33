use std::borrow::Cow;

use serde::Deserialize;
use validator::{Validate, ValidationError};

use crate::{
    constants::{messages, MAX_PROMPT_LENGTH},
    errors::{AppError, AppResult},
    models::domain::{Level, MatchRating},
};

/// Body of `POST /api/submissions`. Fields are optional so that a missing
/// field produces the localized validation message instead of a decode error.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateSubmissionRequest {
    pub level: Option<String>,
    pub prompt: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Validate)]
pub struct ValidatedSubmission {
    pub level: Level,
    #[validate(custom(function = "validate_prompt_length"))]
    pub prompt_text: String,
}

fn validate_prompt_length(prompt: &str) -> Result<(), ValidationError> {
    if prompt.chars().count() > MAX_PROMPT_LENGTH {
        return Err(ValidationError::new("length")
            .with_message(Cow::Borrowed(messages::PROMPT_TOO_LONG)));
    }
    Ok(())
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

impl CreateSubmissionRequest {
    pub fn into_validated(self) -> AppResult<ValidatedSubmission> {
        let (Some(level), Some(prompt)) = (non_blank(&self.level), non_blank(&self.prompt)) else {
            return Err(AppError::ValidationError(
                messages::MISSING_SUBMISSION_FIELDS.to_string(),
            ));
        };

        let level = Level::parse(level)
            .ok_or_else(|| AppError::ValidationError(messages::INVALID_LEVEL.to_string()))?;

        let validated = ValidatedSubmission {
            level,
            prompt_text: prompt.to_string(),
        };
        validated.validate()?;

        Ok(validated)
    }
}

/// Body of `POST /api/submissions/{id}/feedback`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FeedbackRequest {
    #[serde(rename = "match")]
    pub rating: Option<String>,
    pub comment: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedFeedback {
    pub rating: MatchRating,
    pub comment: Option<String>,
}

impl FeedbackRequest {
    pub fn into_validated(self) -> AppResult<ValidatedFeedback> {
        let rating = non_blank(&self.rating)
            .ok_or_else(|| AppError::ValidationError(messages::MISSING_MATCH.to_string()))?;

        let rating = MatchRating::parse(rating)
            .ok_or_else(|| AppError::ValidationError(messages::INVALID_MATCH.to_string()))?;

        Ok(ValidatedFeedback {
            rating,
            comment: self.comment.filter(|c| !c.trim().is_empty()),
        })
    }
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct PaginationParams {
    #[validate(range(min = 0))]
    pub offset: Option<i64>,

    #[validate(range(min = 1, max = 100))]
    pub limit: Option<i64>,
}

impl Default for PaginationParams {
    fn default() -> Self {
        Self {
            offset: Some(0),
            limit: Some(20),
        }
    }
}

impl PaginationParams {
    pub fn offset(&self) -> i64 {
        self.offset.unwrap_or(0).max(0)
    }

    pub fn limit(&self) -> i64 {
        self.limit.unwrap_or(20).clamp(1, 100)
    }
}
