use axum::Router;

use crate::app::AppState;
use crate::handler::error::not_found;

mod dog;
mod root;

pub fn build_routes() -> Router<AppState> {
    Router::new()
        .merge(root::router())
        // 业务 API 统一挂在 /api 前缀下
        .nest("/api", dog::router())
        .fallback(not_found)
}
