//! Rutas de marcas del admin

use axum::{
    extract::{Path, State},
    routing::{delete, get, post, put},
    Json, Router,
};
use uuid::Uuid;

use crate::controllers::brand_controller::BrandController;
use crate::dto::catalog_dto::{CreateBrandRequest, UpdateBrandRequest};
use crate::dto::ApiResponse;
use crate::models::brand::Brand;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_brand_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_brand))
        .route("/", get(list_brands))
        .route("/:id", get(get_brand))
        .route("/:id", put(update_brand))
        .route("/:id", delete(delete_brand))
}

async fn create_brand(
    State(state): State<AppState>,
    Json(request): Json<CreateBrandRequest>,
) -> Result<Json<ApiResponse<Brand>>, AppError> {
    let controller = BrandController::new(state.pool.clone());
    let response = controller.create(request).await?;
    Ok(Json(response))
}

async fn list_brands(State(state): State<AppState>) -> Result<Json<Vec<Brand>>, AppError> {
    let controller = BrandController::new(state.pool.clone());
    let response = controller.list().await?;
    Ok(Json(response))
}

async fn get_brand(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Brand>, AppError> {
    let controller = BrandController::new(state.pool.clone());
    let response = controller.get_by_id(id).await?;
    Ok(Json(response))
}

async fn update_brand(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateBrandRequest>,
) -> Result<Json<Brand>, AppError> {
    let controller = BrandController::new(state.pool.clone());
    let response = controller.update(id, request).await?;
    Ok(Json(response))
}

async fn delete_brand(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, AppError> {
    let controller = BrandController::new(state.pool.clone());
    controller.delete(id).await?;
    Ok(Json(serde_json::json!({
        "success": true,
        "message": "Marca eliminada exitosamente"
    })))
}
