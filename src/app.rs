use std::sync::Arc;

use axum::Router;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::trace::{
    DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer,
};
use tracing::Level;

use crate::repositories::{DogStore, InMemoryDogStore};
use crate::routes;
use crate::utils::middleware;

#[derive(Clone)]
pub struct AppState {
    pub dog_store: Arc<dyn DogStore>,
}

/// 使用带种子数据的内存表构建应用
pub fn build_app() -> Router {
    let store = InMemoryDogStore::seeded();
    tracing::info!("Seeded in-memory dogs table with {} rows", store.len());
    build_app_with_store(Arc::new(store))
}

pub fn build_app_with_store(dog_store: Arc<dyn DogStore>) -> Router {
    let state = AppState { dog_store };

    routes::build_routes()
        .with_state(state)
        .layer(CatchPanicLayer::custom(middleware::panic_response))
        .layer(middleware::cors_layer())
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO))
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
