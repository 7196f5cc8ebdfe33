use async_trait::async_trait;
use chrono::{DateTime, Utc};
use futures::TryStreamExt;
use mongodb::{
    bson::{
        doc,
        serde_helpers::{chrono_datetime_as_bson_datetime, chrono_datetime_as_bson_datetime_optional},
        to_bson, Document,
    },
    options::{FindOneAndUpdateOptions, IndexOptions, ReturnDocument},
    Collection, Database, IndexModel,
};
use serde::{Deserialize, Serialize};

use crate::{
    errors::AppResult,
    models::domain::{Level, MatchRating, NewSubmission, Submission},
};

/// Storage for submissions. Each record is written once on creation and
/// then only through `update_feedback`, where the last write wins.
#[async_trait]
pub trait SubmissionRepository: Send + Sync {
    async fn create(&self, submission: NewSubmission) -> AppResult<Submission>;
    async fn find_by_id(&self, id: &str) -> AppResult<Option<Submission>>;
    async fn update_feedback(
        &self,
        id: &str,
        rating: MatchRating,
        comment: Option<String>,
    ) -> AppResult<Option<Submission>>;
    async fn list_recent(&self, offset: i64, limit: i64) -> AppResult<(Vec<Submission>, i64)>;
    async fn health_check(&self) -> AppResult<()>;
}

/// Stored shape of a submission. Timestamps are BSON dates so that
/// `createdAt` sorts chronologically on the server.
#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
struct SubmissionDocument {
    id: String,
    level: Level,
    question_id: String,
    prompt_text: String,
    html_generated: String,
    error_flag: bool,
    #[serde(with = "chrono_datetime_as_bson_datetime")]
    created_at: DateTime<Utc>,
    #[serde(default)]
    feedback_match: Option<MatchRating>,
    #[serde(default)]
    feedback_comment: Option<String>,
    #[serde(default, with = "chrono_datetime_as_bson_datetime_optional")]
    feedback_created_at: Option<DateTime<Utc>>,
}

impl From<Submission> for SubmissionDocument {
    fn from(submission: Submission) -> Self {
        Self {
            id: submission.id,
            level: submission.level,
            question_id: submission.question_id,
            prompt_text: submission.prompt_text,
            html_generated: submission.html_generated,
            error_flag: submission.error_flag,
            created_at: submission.created_at,
            feedback_match: submission.feedback_match,
            feedback_comment: submission.feedback_comment,
            feedback_created_at: submission.feedback_created_at,
        }
    }
}

impl From<SubmissionDocument> for Submission {
    fn from(document: SubmissionDocument) -> Self {
        Self {
            id: document.id,
            level: document.level,
            question_id: document.question_id,
            prompt_text: document.prompt_text,
            html_generated: document.html_generated,
            error_flag: document.error_flag,
            created_at: document.created_at,
            feedback_match: document.feedback_match,
            feedback_comment: document.feedback_comment,
            feedback_created_at: document.feedback_created_at,
        }
    }
}

/// The `$set` body of a feedback write. All three fields change together.
fn feedback_fields(
    rating: MatchRating,
    comment: Option<String>,
    at: DateTime<Utc>,
) -> AppResult<Document> {
    Ok(doc! {
        "feedbackMatch": to_bson(&rating)?,
        "feedbackComment": comment,
        "feedbackCreatedAt": mongodb::bson::DateTime::from_chrono(at),
    })
}

pub struct MongoSubmissionRepository {
    database: Database,
    collection: Collection<SubmissionDocument>,
}

impl MongoSubmissionRepository {
    pub fn new(database: Database, collection_name: &str) -> Self {
        let collection = database.collection(collection_name);
        Self {
            database,
            collection,
        }
    }

    pub async fn ensure_indexes(&self) -> AppResult<()> {
        log::info!(
            "Creating indexes for {}.{} collection",
            self.database.name(),
            self.collection.name()
        );

        let id_index = IndexModel::builder()
            .keys(doc! { "id": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .name("id_unique".to_string())
                    .build(),
            )
            .build();

        let created_at_index = IndexModel::builder()
            .keys(doc! { "createdAt": -1 })
            .options(
                IndexOptions::builder()
                    .name("created_at_desc".to_string())
                    .build(),
            )
            .build();

        self.collection.create_index(id_index).await?;
        self.collection.create_index(created_at_index).await?;

        log::info!("Successfully created indexes for submissions collection");
        Ok(())
    }
}

#[async_trait]
impl SubmissionRepository for MongoSubmissionRepository {
    async fn create(&self, submission: NewSubmission) -> AppResult<Submission> {
        let document = SubmissionDocument::from(Submission::from_new(submission));
        self.collection.insert_one(&document).await?;
        Ok(document.into())
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<Submission>> {
        let document = self.collection.find_one(doc! { "id": id }).await?;
        Ok(document.map(Submission::from))
    }

    async fn update_feedback(
        &self,
        id: &str,
        rating: MatchRating,
        comment: Option<String>,
    ) -> AppResult<Option<Submission>> {
        let fields = feedback_fields(rating, comment, Utc::now())?;
        let update = doc! { "$set": fields };
        let options = FindOneAndUpdateOptions::builder()
            .return_document(ReturnDocument::After)
            .build();

        let updated = self
            .collection
            .find_one_and_update(doc! { "id": id }, update)
            .with_options(options)
            .await?;

        Ok(updated.map(Submission::from))
    }

    async fn list_recent(&self, offset: i64, limit: i64) -> AppResult<(Vec<Submission>, i64)> {
        let total = self.collection.count_documents(doc! {}).await?;

        let documents: Vec<SubmissionDocument> = self
            .collection
            .find(doc! {})
            .sort(doc! { "createdAt": -1 })
            .skip(offset.max(0) as u64)
            .limit(limit)
            .await?
            .try_collect()
            .await?;

        Ok((
            documents.into_iter().map(Submission::from).collect(),
            total as i64,
        ))
    }

    async fn health_check(&self) -> AppResult<()> {
        self.database.run_command(doc! { "ping": 1 }).await?;
        Ok(())
    }
}
