use std::sync::Arc;

use crate::{
    constants::messages,
    errors::{AppError, AppResult},
    models::dto::{request::FeedbackRequest, response::FeedbackResponse},
    repositories::SubmissionRepository,
};

pub struct FeedbackService {
    repository: Arc<dyn SubmissionRepository>,
}

impl FeedbackService {
    pub fn new(repository: Arc<dyn SubmissionRepository>) -> Self {
        Self { repository }
    }

    /// Stores the student's rating. Resending overwrites the previous one.
    pub async fn record_feedback(
        &self,
        submission_id: &str,
        request: FeedbackRequest,
    ) -> AppResult<FeedbackResponse> {
        let feedback = request.into_validated()?;

        let updated = self
            .repository
            .update_feedback(submission_id, feedback.rating, feedback.comment)
            .await?;

        match updated {
            Some(submission) => {
                log::info!(
                    "Recorded feedback '{}' for submission {}",
                    feedback.rating,
                    submission.id
                );
                Ok(FeedbackResponse { ok: true })
            }
            None => Err(AppError::NotFound(
                messages::FEEDBACK_SUBMISSION_NOT_FOUND.to_string(),
            )),
        }
    }
}
