//! Rutas de leads del admin
//!
//! Solo lectura y borrado: los leads son inmutables una vez creados.

use axum::{
    extract::{Path, State},
    routing::{delete, get},
    Json, Router,
};
use uuid::Uuid;

use crate::controllers::contact_controller::ContactController;
use crate::dto::contact_dto::ContactResponse;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_contact_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_contacts))
        .route("/:id", get(get_contact))
        .route("/:id", delete(delete_contact))
}

async fn list_contacts(
    State(state): State<AppState>,
) -> Result<Json<Vec<ContactResponse>>, AppError> {
    let controller = ContactController::new(state.pool.clone());
    let contacts = controller.list().await?;
    Ok(Json(contacts.into_iter().map(ContactResponse::from).collect()))
}

async fn get_contact(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ContactResponse>, AppError> {
    let controller = ContactController::new(state.pool.clone());
    let contact = controller.get_by_id(id).await?;
    Ok(Json(contact.into()))
}

async fn delete_contact(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, AppError> {
    let controller = ContactController::new(state.pool.clone());
    controller.delete(id).await?;
    Ok(Json(serde_json::json!({
        "success": true,
        "message": "Lead eliminado exitosamente"
    })))
}
