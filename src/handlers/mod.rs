pub mod health_handler;
pub mod submission_handler;

use actix_web::web;
use secrecy::SecretString;

use crate::{auth::AccessTokenMiddleware, constants::messages, errors::AppError};

pub use health_handler::{health_check, health_check_ready};
pub use submission_handler::{
    create_submission, get_exercise, get_submission, list_submissions, record_feedback,
};

/// Malformed or missing JSON bodies become a localized 400.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(64 * 1024)
        .error_handler(|err, _req| {
            log::debug!("Rejected request body: {}", err);
            AppError::ValidationError(messages::INVALID_REQUEST_BODY.to_string()).into()
        })
}

pub fn query_config() -> web::QueryConfig {
    web::QueryConfig::default().error_handler(|err, _req| {
        log::debug!("Rejected query string: {}", err);
        AppError::ValidationError(err.to_string()).into()
    })
}

/// Registers every route. The `/api` scope sits behind the access gate;
/// the health probes do not.
pub fn configure_routes(cfg: &mut web::ServiceConfig, access_token: Option<SecretString>) {
    cfg.app_data(json_config())
        .app_data(query_config())
        .service(health_check)
        .service(health_check_ready)
        .service(
            web::scope("/api")
                .wrap(AccessTokenMiddleware::new(access_token))
                .service(create_submission)
                .service(list_submissions)
                .service(get_exercise)
                .service(record_feedback)
                .service(get_submission),
        );
}
