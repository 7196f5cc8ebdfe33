use std::{collections::HashMap, sync::Arc};

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use crate::{
    errors::AppResult,
    models::domain::{MatchRating, NewSubmission, Submission},
    repositories::SubmissionRepository,
};

/// Process-local store, selected with `STORE_BACKEND=memory`. Contents are
/// lost on restart.
#[derive(Clone, Default)]
pub struct InMemorySubmissionRepository {
    submissions: Arc<RwLock<HashMap<String, Submission>>>,
}

impl InMemorySubmissionRepository {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub async fn len(&self) -> usize {
        self.submissions.read().await.len()
    }

    #[cfg(test)]
    pub async fn is_empty(&self) -> bool {
        self.submissions.read().await.is_empty()
    }
}

#[async_trait]
impl SubmissionRepository for InMemorySubmissionRepository {
    async fn create(&self, submission: NewSubmission) -> AppResult<Submission> {
        let submission = Submission::from_new(submission);
        let mut submissions = self.submissions.write().await;
        submissions.insert(submission.id.clone(), submission.clone());
        Ok(submission)
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<Submission>> {
        let submissions = self.submissions.read().await;
        Ok(submissions.get(id).cloned())
    }

    async fn update_feedback(
        &self,
        id: &str,
        rating: MatchRating,
        comment: Option<String>,
    ) -> AppResult<Option<Submission>> {
        let mut submissions = self.submissions.write().await;
        let Some(submission) = submissions.get_mut(id) else {
            return Ok(None);
        };

        submission.apply_feedback(rating, comment, Utc::now());
        Ok(Some(submission.clone()))
    }

    async fn list_recent(&self, offset: i64, limit: i64) -> AppResult<(Vec<Submission>, i64)> {
        let submissions = self.submissions.read().await;
        let mut items: Vec<_> = submissions.values().cloned().collect();
        items.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        let total = items.len() as i64;
        let start = offset.max(0) as usize;
        let end = (start + limit.max(0) as usize).min(items.len());

        let page = if start >= items.len() {
            vec![]
        } else {
            items[start..end].to_vec()
        };

        Ok((page, total))
    }

    async fn health_check(&self) -> AppResult<()> {
        Ok(())
    }
}
