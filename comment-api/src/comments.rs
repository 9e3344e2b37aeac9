use crate::{AppState, Comment, CommentResponse, ErrorResponse};
use kafka_client::Publisher;
use log::{error, info, warn};
use ntex::http::StatusCode;
use ntex::http::header::CONTENT_TYPE;
use ntex::util::Bytes;
use ntex::web;
use std::sync::Arc;

pub async fn create_comment<P: Publisher + 'static>(
    data: web::types::State<Arc<AppState<P>>>,
    req: web::HttpRequest,
    body: Bytes,
) -> Result<web::HttpResponse, web::Error> {
    let content_type = req
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok());

    let comment = match Comment::decode(content_type, &body) {
        Ok(c) => c,
        Err(e) => {
            warn!("Rejected comment body: {e}");
            return Ok(web::HttpResponse::BadRequest().json(&ErrorResponse::new(e.to_string())));
        }
    };

    let payload = match comment.to_payload() {
        Ok(p) => p,
        Err(e) => {
            error!("Failed to serialize comment: {e}");
            return Ok(web::HttpResponse::build(StatusCode::INTERNAL_SERVER_ERROR)
                .json(&ErrorResponse::new(format!("Error encoding comment: {e}"))));
        }
    };

    match data.publisher.publish(&data.topic, None, &payload).await {
        Ok(delivery) => {
            info!(
                "Message is stored in topic({})/partition({})/offset({})",
                data.topic, delivery.partition, delivery.offset
            );
            let resp = CommentResponse {
                success: true,
                message: "Comment pushed successfully",
                comment: &comment,
            };
            Ok(web::HttpResponse::Ok().json(&resp))
        }
        Err(e) => {
            error!("Failed to deliver comment: {e}");
            Ok(web::HttpResponse::build(StatusCode::INTERNAL_SERVER_ERROR)
                .json(&ErrorResponse::new(format!("Error publishing comment: {e}"))))
        }
    }
}
