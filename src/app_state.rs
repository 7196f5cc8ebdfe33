use std::sync::Arc;

use crate::{
    config::{Config, StoreBackend},
    db,
    errors::AppResult,
    repositories::{InMemorySubmissionRepository, MongoSubmissionRepository, SubmissionRepository},
    services::{FeedbackService, HtmlGenerator, OpenAiHtmlGenerator, SubmissionService},
};

#[derive(Clone)]
pub struct AppState {
    pub submission_service: Arc<SubmissionService>,
    pub feedback_service: Arc<FeedbackService>,
}

impl AppState {
    pub async fn new(config: &Config) -> AppResult<Self> {
        let repository: Arc<dyn SubmissionRepository> = match config.store_backend {
            StoreBackend::Mongo => {
                let database = db::connect(config).await?;
                let repository =
                    MongoSubmissionRepository::new(database, &config.submissions_collection);
                repository.ensure_indexes().await?;
                Arc::new(repository)
            }
            StoreBackend::Memory => {
                log::warn!("Using in-memory submission store; data is lost on restart");
                Arc::new(InMemorySubmissionRepository::new())
            }
        };

        let generator = Arc::new(OpenAiHtmlGenerator::new(config));

        Ok(Self::from_parts(repository, generator))
    }

    /// Wires the services around an already built store and generator.
    pub fn from_parts(
        repository: Arc<dyn SubmissionRepository>,
        generator: Arc<dyn HtmlGenerator>,
    ) -> Self {
        Self {
            submission_service: Arc::new(SubmissionService::new(repository.clone(), generator)),
            feedback_service: Arc::new(FeedbackService::new(repository)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_state_is_cloneable() {
        fn assert_clone<T: Clone>() {}
        assert_clone::<AppState>();
    }

    #[actix_web::test]
    async fn test_memory_backend_needs_no_database() {
        let state = AppState::new(&Config::test_config()).await;
        assert!(state.is_ok());
    }
}
