use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::api_models::MissingFields;
use crate::repositories::StoreError;

pub const RESOURCE_NOT_FOUND: &str = "404 Resource Not Found";

#[derive(Debug)]
pub enum AppError {
    NotFound(String),
    Unprocessable(String),
    /// 其余请求体提取失败，沿用 axum 给出的状态码
    Rejected(StatusCode, String),
    InternalServerError(String),
}

impl AppError {
    fn status(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Unprocessable(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::Rejected(status, _) => *status,
            AppError::InternalServerError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match self {
            AppError::NotFound(msg)
            | AppError::Unprocessable(msg)
            | AppError::Rejected(_, msg)
            | AppError::InternalServerError(msg) => msg,
        };
        (status, Json(json!({ "message": message }))).into_response()
    }
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        tracing::error!("Dog store failure: {}", err);
        AppError::InternalServerError(err.to_string())
    }
}

impl From<MissingFields> for AppError {
    fn from(err: MissingFields) -> Self {
        AppError::Unprocessable(err.to_string())
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        match rejection {
            JsonRejection::JsonDataError(e) => AppError::Unprocessable(e.body_text()),
            other => AppError::Rejected(other.status(), other.body_text()),
        }
    }
}

/// 未匹配的路径或方法统一返回 404
pub async fn not_found() -> AppError {
    AppError::NotFound(RESOURCE_NOT_FOUND.to_string())
}

#[cfg(test)]
mod tests {
    use http_body_util::BodyExt;
    use serde_json::Value;

    use super::*;

    async fn render(err: AppError) -> (StatusCode, Value) {
        let response = err.into_response();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn every_variant_renders_a_message_body() {
        let cases = [
            (AppError::NotFound("gone".into()), StatusCode::NOT_FOUND),
            (AppError::Unprocessable("bad".into()), StatusCode::UNPROCESSABLE_ENTITY),
            (
                AppError::Rejected(StatusCode::UNSUPPORTED_MEDIA_TYPE, "json please".into()),
                StatusCode::UNSUPPORTED_MEDIA_TYPE,
            ),
            (AppError::InternalServerError("boom".into()), StatusCode::INTERNAL_SERVER_ERROR),
        ];

        for (err, expected) in cases {
            let (status, body) = render(err).await;
            assert_eq!(status, expected);
            assert!(body["message"].is_string());
        }
    }

    #[tokio::test]
    async fn store_error_keeps_its_message() {
        let err: AppError = StoreError::Unavailable("lock poisoned".into()).into();
        let (status, body) = render(err).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["message"], "dog store unavailable: lock poisoned");
    }

    #[tokio::test]
    async fn fallback_uses_generic_message() {
        let (status, body) = render(not_found().await).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["message"], RESOURCE_NOT_FOUND);
    }
}
