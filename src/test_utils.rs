#[cfg(test)]
pub mod fixtures {
    use crate::{
        constants::QUESTION_ID,
        models::{
            domain::{Level, NewSubmission},
            dto::request::{CreateSubmissionRequest, FeedbackRequest},
        },
    };

    pub const VALID_HTML: &str =
        "<!DOCTYPE html><html lang=\"pt-BR\"><body><ul id=\"atividades\"></ul></body></html>";

    pub fn submission_request(level: &str, prompt: &str) -> CreateSubmissionRequest {
        CreateSubmissionRequest {
            level: Some(level.to_string()),
            prompt: Some(prompt.to_string()),
        }
    }

    pub fn feedback_request(rating: Option<&str>, comment: Option<&str>) -> FeedbackRequest {
        FeedbackRequest {
            rating: rating.map(str::to_string),
            comment: comment.map(str::to_string),
        }
    }

    /// A successfully generated submission, ready to hand to a repository.
    pub fn new_submission() -> NewSubmission {
        NewSubmission {
            level: Level::A,
            question_id: QUESTION_ID.to_string(),
            prompt_text: "Quero uma lista de atividades com um botão Adicionar".to_string(),
            html_generated: VALID_HTML.to_string(),
            error_flag: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;

    #[test]
    fn test_fixtures_submission_request() {
        let request = submission_request("A", "texto");
        assert_eq!(request.level.as_deref(), Some("A"));
        assert_eq!(request.prompt.as_deref(), Some("texto"));
    }

    #[test]
    fn test_fixtures_new_submission_is_clean() {
        let submission = new_submission();
        assert!(!submission.error_flag);
        assert!(submission.html_generated.contains("<html"));
    }
}
