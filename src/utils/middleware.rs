use std::any::Any;

use axum::{
    http::HeaderValue,
    response::{IntoResponse, Response},
};
use tower_http::cors::{self, CorsLayer};

use crate::handler::error::AppError;

pub fn cors_layer() -> CorsLayer {
    let allowed_env = std::env::var("ALLOWED_ORIGINS").unwrap_or_default();
    let from_env = parse_origins(&allowed_env);

    let layer = CorsLayer::new()
        .allow_methods(cors::Any)
        .allow_headers(cors::Any);
    if from_env.is_empty() {
        layer.allow_origin(cors::Any)
    } else {
        layer.allow_origin(from_env)
    }
}

fn parse_origins(raw: &str) -> Vec<HeaderValue> {
    raw.split(',')
        .filter_map(|o| {
            let trimmed = o.trim();
            if trimmed.is_empty() {
                None
            } else {
                HeaderValue::from_str(trimmed).ok()
            }
        })
        .collect()
}

/// handler 中的 panic 转成 500 + `{"message": ...}`，进程继续服务
pub fn panic_response(err: Box<dyn Any + Send + 'static>) -> Response {
    let message = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic".to_string()
    };
    tracing::error!("Handler panicked: {}", message);
    AppError::InternalServerError(message).into_response()
}
