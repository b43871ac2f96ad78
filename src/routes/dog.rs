use axum::{routing::get, Router};

use crate::app::AppState;
use crate::handler::dog::{create_dog, delete_dog, get_dog, list_dogs, update_dog};
use crate::handler::error::not_found;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/dogs", get(list_dogs).post(create_dog).fallback(not_found))
        .route(
            "/dogs/:id",
            get(get_dog)
                .put(update_dog)
                .delete(delete_dog)
                .fallback(not_found),
        )
}
