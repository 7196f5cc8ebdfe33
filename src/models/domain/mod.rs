pub mod level;
pub mod match_rating;
pub mod submission;

pub use level::Level;
pub use match_rating::MatchRating;
pub use submission::{NewSubmission, Submission};
