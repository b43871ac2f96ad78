use axum::{
    async_trait,
    body::Bytes,
    extract::{FromRequest, Request},
    http::{header, HeaderMap},
    Json,
};

use crate::api_models::DogPayload;
use crate::handler::error::AppError;

/// dogs 请求体提取器。没有 body、body 为空或不是 JSON 时按 `{}` 处理，
/// 交给必填校验返回 422；只有真正写坏的 JSON 才返回 400。
#[derive(Debug)]
pub struct DogBody(pub DogPayload);

#[async_trait]
impl<S> FromRequest<S> for DogBody
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let is_json = has_json_content_type(req.headers());
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|e| AppError::Rejected(e.status(), e.body_text()))?;

        if !is_json || bytes.is_empty() {
            return Ok(DogBody(DogPayload::default()));
        }

        let Json(payload) = Json::<DogPayload>::from_bytes(&bytes)?;
        Ok(DogBody(payload))
    }
}

fn has_json_content_type(headers: &HeaderMap) -> bool {
    let Some(content_type) = headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
    else {
        return false;
    };

    let essence = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();
    essence == "application/json" || (essence.starts_with("application/") && essence.ends_with("+json"))
}

#[cfg(test)]
mod tests {
    use axum::http::HeaderValue;

    use super::*;

    fn headers_with(content_type: &'static str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(header::CONTENT_TYPE, HeaderValue::from_static(content_type));
        headers
    }

    #[test]
    fn recognises_json_content_types() {
        assert!(has_json_content_type(&headers_with("application/json")));
        assert!(has_json_content_type(&headers_with("application/json; charset=utf-8")));
        assert!(has_json_content_type(&headers_with("application/vnd.api+json")));
    }

    #[test]
    fn other_or_missing_content_types_are_not_json() {
        assert!(!has_json_content_type(&HeaderMap::new()));
        assert!(!has_json_content_type(&headers_with("application/x-www-form-urlencoded")));
        assert!(!has_json_content_type(&headers_with("text/plain")));
    }
}
