use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::app::AppState;
use crate::handler::error::not_found;

const GREETING: &str = "hello, world";

pub fn router() -> Router<AppState> {
    Router::new().route("/", get(root).fallback(not_found))
}

#[derive(Serialize)]
struct GreetingResponse<'a> {
    message: &'a str,
}

async fn root() -> Json<GreetingResponse<'static>> {
    Json(GreetingResponse { message: GREETING })
}
