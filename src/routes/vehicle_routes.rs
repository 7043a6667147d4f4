//! Rutas de vehículos del admin

use axum::{
    extract::{Path, Query, State},
    routing::{delete, get, post, put},
    Json, Router,
};
use uuid::Uuid;

use crate::controllers::vehicle_controller::VehicleController;
use crate::dto::catalog_dto::ListingQuery;
use crate::dto::vehicle_dto::{
    CreateVehicleImageRequest, CreateVehicleRequest, UpdateVehicleImageRequest,
    UpdateVehicleRequest, VehicleDetailResponse, VehicleResponse,
};
use crate::dto::ApiResponse;
use crate::models::vehicle_image::VehicleImage;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_vehicle_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_vehicle))
        .route("/", get(list_vehicles))
        .route("/:id", get(get_vehicle))
        .route("/:id", put(update_vehicle))
        .route("/:id", delete(delete_vehicle))
        .route("/:id/images", get(list_images))
        .route("/:id/images", post(add_image))
        .route("/images/:image_id", put(update_image))
        .route("/images/:image_id", delete(delete_image))
}

async fn create_vehicle(
    State(state): State<AppState>,
    Json(request): Json<CreateVehicleRequest>,
) -> Result<Json<ApiResponse<VehicleResponse>>, AppError> {
    let controller = VehicleController::new(state.pool.clone());
    let response = controller.create(request).await?;
    Ok(Json(response))
}

async fn list_vehicles(
    State(state): State<AppState>,
    Query(query): Query<ListingQuery>,
) -> Result<Json<Vec<VehicleResponse>>, AppError> {
    let controller = VehicleController::new(state.pool.clone());
    let response = controller.list(&query).await?;
    Ok(Json(response))
}

async fn get_vehicle(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<VehicleDetailResponse>, AppError> {
    let controller = VehicleController::new(state.pool.clone());
    let response = controller.get_by_id(id).await?;
    Ok(Json(response))
}

async fn update_vehicle(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateVehicleRequest>,
) -> Result<Json<ApiResponse<VehicleResponse>>, AppError> {
    let controller = VehicleController::new(state.pool.clone());
    let response = controller.update(id, request).await?;
    Ok(Json(response))
}

async fn delete_vehicle(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, AppError> {
    let controller = VehicleController::new(state.pool.clone());
    controller.delete(id).await?;
    Ok(Json(serde_json::json!({
        "success": true,
        "message": "Vehículo eliminado exitosamente"
    })))
}

async fn list_images(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Vec<VehicleImage>>, AppError> {
    let controller = VehicleController::new(state.pool.clone());
    let response = controller.list_images(id).await?;
    Ok(Json(response))
}

async fn add_image(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<CreateVehicleImageRequest>,
) -> Result<Json<ApiResponse<VehicleImage>>, AppError> {
    let controller = VehicleController::new(state.pool.clone());
    let response = controller.add_image(id, request).await?;
    Ok(Json(response))
}

async fn update_image(
    State(state): State<AppState>,
    Path(image_id): Path<Uuid>,
    Json(request): Json<UpdateVehicleImageRequest>,
) -> Result<Json<VehicleImage>, AppError> {
    let controller = VehicleController::new(state.pool.clone());
    let response = controller.update_image(image_id, request).await?;
    Ok(Json(response))
}

async fn delete_image(
    State(state): State<AppState>,
    Path(image_id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, AppError> {
    let controller = VehicleController::new(state.pool.clone());
    controller.delete_image(image_id).await?;
    Ok(Json(serde_json::json!({
        "success": true,
        "message": "Imagen eliminada exitosamente"
    })))
}
