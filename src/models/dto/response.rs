use serde::Serialize;

use crate::models::domain::{Level, Submission};

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionCreatedResponse {
    pub submission_id: String,
    pub html: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct FeedbackResponse {
    pub ok: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct SubmissionListResponse {
    pub items: Vec<Submission>,
    pub total: i64,
    pub offset: i64,
    pub limit: i64,
}

#[derive(Debug, Clone, Serialize)]
pub struct LevelDto {
    pub code: &'static str,
    pub description: &'static str,
}

impl From<Level> for LevelDto {
    fn from(level: Level) -> Self {
        LevelDto {
            code: level.code(),
            description: level.description(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExerciseResponse {
    pub question_id: &'static str,
    pub question_text: &'static str,
    pub levels: Vec<LevelDto>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_created_response_field_names() {
        let response = SubmissionCreatedResponse {
            submission_id: "abc".to_string(),
            html: "<html></html>".to_string(),
        };
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(
            json,
            serde_json::json!({ "submissionId": "abc", "html": "<html></html>" })
        );
    }

    #[test]
    fn test_level_dto_from_level() {
        let dto = LevelDto::from(Level::C);
        assert_eq!(dto.code, "C");
        assert_eq!(dto.description, "Programo com frequência / sou de Computação");
    }
}
