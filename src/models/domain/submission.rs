use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::domain::{Level, MatchRating};

/// One student attempt: the prompt, what the model produced, and the
/// optional rating given afterwards.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Submission {
    pub id: String,
    pub level: Level,
    pub question_id: String,
    pub prompt_text: String,
    pub html_generated: String,
    pub error_flag: bool,
    pub created_at: DateTime<Utc>,
    pub feedback_match: Option<MatchRating>,
    pub feedback_comment: Option<String>,
    pub feedback_created_at: Option<DateTime<Utc>>,
}

/// Fields supplied by the caller; the store assigns `id` and `created_at`.
#[derive(Clone, Debug, PartialEq)]
pub struct NewSubmission {
    pub level: Level,
    pub question_id: String,
    pub prompt_text: String,
    pub html_generated: String,
    pub error_flag: bool,
}

impl Submission {
    pub fn from_new(new: NewSubmission) -> Self {
        Submission {
            id: Uuid::new_v4().to_string(),
            level: new.level,
            question_id: new.question_id,
            prompt_text: new.prompt_text,
            html_generated: new.html_generated,
            error_flag: new.error_flag,
            created_at: Utc::now(),
            feedback_match: None,
            feedback_comment: None,
            feedback_created_at: None,
        }
    }

    /// Overwrites all three feedback fields together.
    pub fn apply_feedback(
        &mut self,
        rating: MatchRating,
        comment: Option<String>,
        at: DateTime<Utc>,
    ) {
        self.feedback_match = Some(rating);
        self.feedback_comment = comment;
        self.feedback_created_at = Some(at);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_submission() -> NewSubmission {
        NewSubmission {
            level: Level::B,
            question_id: "Q1".to_string(),
            prompt_text: "Uma lista de atividades".to_string(),
            html_generated: "<!DOCTYPE html><html></html>".to_string(),
            error_flag: false,
        }
    }

    #[test]
    fn from_new_assigns_identity_and_leaves_feedback_empty() {
        let before = Utc::now();
        let submission = Submission::from_new(new_submission());

        assert!(Uuid::parse_str(&submission.id).is_ok());
        assert!(submission.created_at >= before);
        assert!(submission.feedback_match.is_none());
        assert!(submission.feedback_comment.is_none());
        assert!(submission.feedback_created_at.is_none());
    }

    #[test]
    fn from_new_generates_distinct_ids() {
        let a = Submission::from_new(new_submission());
        let b = Submission::from_new(new_submission());
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn apply_feedback_overwrites_previous_rating() {
        let mut submission = Submission::from_new(new_submission());

        submission.apply_feedback(MatchRating::Yes, Some("ótimo".to_string()), Utc::now());
        submission.apply_feedback(MatchRating::No, None, Utc::now());

        assert_eq!(submission.feedback_match, Some(MatchRating::No));
        assert!(submission.feedback_comment.is_none());
        assert!(submission.feedback_created_at.is_some());
    }

    #[test]
    fn serializes_with_camel_case_and_explicit_nulls() {
        let submission = Submission::from_new(new_submission());
        let json = serde_json::to_value(&submission).unwrap();

        assert_eq!(json["questionId"], "Q1");
        assert_eq!(json["promptText"], "Uma lista de atividades");
        assert_eq!(json["errorFlag"], false);
        assert_eq!(json["level"], "B");
        assert!(json["feedbackMatch"].is_null());
        assert!(json.get("feedbackCreatedAt").is_some());
    }
}
