pub mod feedback_service;
pub mod generation_client;
pub mod submission_service;

pub use feedback_service::FeedbackService;
pub use generation_client::{HtmlGenerator, OpenAiHtmlGenerator};
pub use submission_service::SubmissionService;
