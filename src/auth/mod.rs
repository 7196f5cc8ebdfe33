pub mod middleware;

pub use middleware::{AccessTokenMiddleware, ACCESS_TOKEN_HEADER};
