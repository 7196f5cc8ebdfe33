pub mod in_memory_submission_repository;
pub mod submission_repository;

pub use in_memory_submission_repository::InMemorySubmissionRepository;
pub use submission_repository::{MongoSubmissionRepository, SubmissionRepository};
