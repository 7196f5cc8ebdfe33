use std::sync::Arc;

use crate::{
    constants::{messages, QUESTION_ID},
    errors::{AppError, AppResult},
    models::{
        domain::{NewSubmission, Submission},
        dto::{
            request::CreateSubmissionRequest,
            response::{SubmissionCreatedResponse, SubmissionListResponse},
        },
    },
    repositories::SubmissionRepository,
    services::generation_client::HtmlGenerator,
};

/// Result of one generation attempt after the sanity check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerationOutcome {
    Generated(String),
    Missing,
    Incoherent(String),
}

impl GenerationOutcome {
    /// Best-effort gate: anything mentioning `<html` (any case) passes.
    pub fn classify(generated: Option<String>) -> Self {
        match generated {
            None => GenerationOutcome::Missing,
            Some(text) if text.is_empty() => GenerationOutcome::Missing,
            Some(text) if text.to_lowercase().contains("<html") => {
                GenerationOutcome::Generated(text)
            }
            Some(text) => GenerationOutcome::Incoherent(text),
        }
    }

    pub fn is_error(&self) -> bool {
        !matches!(self, GenerationOutcome::Generated(_))
    }

    fn html(&self) -> &str {
        match self {
            GenerationOutcome::Generated(text) | GenerationOutcome::Incoherent(text) => text,
            GenerationOutcome::Missing => "",
        }
    }
}

pub struct SubmissionService {
    repository: Arc<dyn SubmissionRepository>,
    generator: Arc<dyn HtmlGenerator>,
}

impl SubmissionService {
    pub fn new(repository: Arc<dyn SubmissionRepository>, generator: Arc<dyn HtmlGenerator>) -> Self {
        Self {
            repository,
            generator,
        }
    }

    /// Validates, generates once, and always persists the attempt unless
    /// validation rejected it.
    pub async fn submit(
        &self,
        request: CreateSubmissionRequest,
    ) -> AppResult<SubmissionCreatedResponse> {
        let validated = request.into_validated()?;

        log::info!(
            "Generating page for level {} submission ({} chars)",
            validated.level,
            validated.prompt_text.chars().count()
        );

        let outcome = GenerationOutcome::classify(
            self.generator.generate(&validated.prompt_text).await,
        );

        let submission = self
            .repository
            .create(NewSubmission {
                level: validated.level,
                question_id: QUESTION_ID.to_string(),
                prompt_text: validated.prompt_text,
                html_generated: outcome.html().to_string(),
                error_flag: outcome.is_error(),
            })
            .await?;

        match outcome {
            GenerationOutcome::Generated(html) => {
                log::info!("Submission {} generated successfully", submission.id);
                Ok(SubmissionCreatedResponse {
                    submission_id: submission.id,
                    html,
                })
            }
            GenerationOutcome::Missing => {
                log::warn!("Submission {} recorded without generated content", submission.id);
                Err(AppError::GenerationFailed {
                    submission_id: submission.id,
                })
            }
            GenerationOutcome::Incoherent(_) => {
                log::warn!("Submission {} failed the HTML sanity check", submission.id);
                Err(AppError::IncoherentResult {
                    submission_id: submission.id,
                })
            }
        }
    }

    pub async fn get_submission(&self, id: &str) -> AppResult<Submission> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(messages::SUBMISSION_NOT_FOUND.to_string()))
    }

    pub async fn list_submissions(&self, offset: i64, limit: i64) -> AppResult<SubmissionListResponse> {
        let (items, total) = self.repository.list_recent(offset, limit).await?;
        Ok(SubmissionListResponse {
            items,
            total,
            offset,
            limit,
        })
    }

    pub async fn health_check(&self) -> AppResult<()> {
        self.repository.health_check().await
    }
}
