//! Rutas de features del admin

use axum::{
    extract::{Path, State},
    routing::{delete, get, post, put},
    Json, Router,
};
use uuid::Uuid;

use crate::controllers::feature_controller::FeatureController;
use crate::dto::catalog_dto::{CreateFeatureRequest, UpdateFeatureRequest};
use crate::dto::ApiResponse;
use crate::models::feature::Feature;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_feature_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_feature))
        .route("/", get(list_features))
        .route("/:id", get(get_feature))
        .route("/:id", put(update_feature))
        .route("/:id", delete(delete_feature))
}

async fn create_feature(
    State(state): State<AppState>,
    Json(request): Json<CreateFeatureRequest>,
) -> Result<Json<ApiResponse<Feature>>, AppError> {
    let controller = FeatureController::new(state.pool.clone());
    let response = controller.create(request).await?;
    Ok(Json(response))
}

async fn list_features(State(state): State<AppState>) -> Result<Json<Vec<Feature>>, AppError> {
    let controller = FeatureController::new(state.pool.clone());
    let response = controller.list().await?;
    Ok(Json(response))
}

async fn get_feature(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Feature>, AppError> {
    let controller = FeatureController::new(state.pool.clone());
    let response = controller.get_by_id(id).await?;
    Ok(Json(response))
}

async fn update_feature(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateFeatureRequest>,
) -> Result<Json<Feature>, AppError> {
    let controller = FeatureController::new(state.pool.clone());
    let response = controller.update(id, request).await?;
    Ok(Json(response))
}

async fn delete_feature(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, AppError> {
    let controller = FeatureController::new(state.pool.clone());
    controller.delete(id).await?;
    Ok(Json(serde_json::json!({
        "success": true,
        "message": "Feature eliminada exitosamente"
    })))
}
