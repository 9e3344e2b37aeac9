pub mod comments;
pub mod model;

pub use model::{Comment, DecodeError};

use kafka_client::Publisher;
use ntex::web;
use serde::Serialize;

#[derive(Clone)]
pub struct AppState<P> {
    pub publisher: P,
    pub topic: String,
}

#[derive(Debug, Serialize)]
pub struct CommentResponse<'a> {
    pub success: bool,
    pub message: &'a str,
    pub comment: &'a Comment,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub message: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        ErrorResponse {
            success: false,
            message: message.into(),
        }
    }
}

/// Registers the service routes. The app must carry an `Arc<AppState<P>>` state.
pub fn routes<P>(cfg: &mut web::ServiceConfig)
where
    P: Publisher + 'static,
{
    cfg.route("/health", web::get().to(async || "OK")).service(
        web::scope("/api/v1").route("/comments", web::post().to(comments::create_comment::<P>)),
    );
}
