use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::api_models::DogResponse;
use crate::app::AppState;
use crate::handler::error::AppError;
use crate::handler::extract::DogBody;
use crate::models::Dog;

impl From<Dog> for DogResponse {
    fn from(dog: Dog) -> Self {
        Self {
            id: dog.id,
            name: dog.name,
            weight: dog.weight,
        }
    }
}

fn dog_not_found(id: &str) -> AppError {
    tracing::debug!("Dog {} not found", id);
    AppError::NotFound(format!("dog with id {} not found", id))
}

pub async fn list_dogs(
    State(state): State<AppState>,
) -> Result<Json<Vec<DogResponse>>, AppError> {
    let dogs = state.dog_store.find_all()?;
    let response: Vec<DogResponse> = dogs.into_iter().map(Into::into).collect();
    Ok(Json(response))
}

pub async fn get_dog(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<DogResponse>, AppError> {
    let found = state
        .dog_store
        .find_by_id(&id)?
        .ok_or_else(|| dog_not_found(&id))?;
    Ok(Json(found.into()))
}

pub async fn create_dog(
    State(state): State<AppState>,
    DogBody(payload): DogBody,
) -> Result<(StatusCode, Json<DogResponse>), AppError> {
    let new_dog = payload.validate()?;

    let created = state.dog_store.create(new_dog)?;
    tracing::info!("Created dog {} ({})", created.id, created.name);
    Ok((StatusCode::CREATED, Json(created.into())))
}

/// 整行替换：name 与 weight 都必须提供
pub async fn update_dog(
    State(state): State<AppState>,
    Path(id): Path<String>,
    DogBody(payload): DogBody,
) -> Result<Json<DogResponse>, AppError> {
    let changes = payload.validate()?;

    let updated = state
        .dog_store
        .update(&id, changes)?
        .ok_or_else(|| dog_not_found(&id))?;
    tracing::info!("Updated dog {}", updated.id);
    Ok(Json(updated.into()))
}

pub async fn delete_dog(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<DogResponse>, AppError> {
    let removed = state
        .dog_store
        .delete(&id)?
        .ok_or_else(|| dog_not_found(&id))?;
    tracing::info!("Deleted dog {}", removed.id);
    Ok(Json(removed.into()))
}
