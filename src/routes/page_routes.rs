//! Rutas de páginas de contenido del admin
//!
//! Get/upsert de cada singleton: site_info, about y las páginas que
//! solo llevan code dinámico.

use axum::{
    extract::{Path, State},
    routing::{get, put},
    Json, Router,
};

use crate::controllers::page_controller::PageController;
use crate::dto::page_dto::{
    UpdateAboutPageRequest, UpdateCodePageRequest, UpdateSiteInfoRequest,
};
use crate::models::pages::{AboutPage, CodePage, CodePageKind, SiteInfo};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_page_router() -> Router<AppState> {
    Router::new()
        .route("/site-info", get(get_site_info))
        .route("/site-info", put(update_site_info))
        .route("/about", get(get_about_page))
        .route("/about", put(update_about_page))
        .route("/:slug", get(get_code_page))
        .route("/:slug", put(update_code_page))
}

fn code_page_kind(slug: &str) -> Result<CodePageKind, AppError> {
    match slug {
        "index" => Ok(CodePageKind::Index),
        "shipping" => Ok(CodePageKind::Shipping),
        "privacy" => Ok(CodePageKind::Privacy),
        "terms-of-use" => Ok(CodePageKind::Terms),
        _ => Err(AppError::NotFound(format!("Página desconocida: {}", slug))),
    }
}

async fn get_site_info(
    State(state): State<AppState>,
) -> Result<Json<Option<SiteInfo>>, AppError> {
    let controller = PageController::new(state.pool.clone());
    let response = controller.get_site_info().await?;
    Ok(Json(response))
}

async fn update_site_info(
    State(state): State<AppState>,
    Json(request): Json<UpdateSiteInfoRequest>,
) -> Result<Json<SiteInfo>, AppError> {
    let controller = PageController::new(state.pool.clone());
    let response = controller.upsert_site_info(request).await?;
    Ok(Json(response))
}

async fn get_about_page(
    State(state): State<AppState>,
) -> Result<Json<Option<AboutPage>>, AppError> {
    let controller = PageController::new(state.pool.clone());
    let response = controller.get_about_page().await?;
    Ok(Json(response))
}

async fn update_about_page(
    State(state): State<AppState>,
    Json(request): Json<UpdateAboutPageRequest>,
) -> Result<Json<AboutPage>, AppError> {
    let controller = PageController::new(state.pool.clone());
    let response = controller.upsert_about_page(request).await?;
    Ok(Json(response))
}

async fn get_code_page(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<Option<CodePage>>, AppError> {
    let kind = code_page_kind(&slug)?;
    let controller = PageController::new(state.pool.clone());
    let response = controller.get_code_page(kind).await?;
    Ok(Json(response))
}

async fn update_code_page(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    Json(request): Json<UpdateCodePageRequest>,
) -> Result<Json<CodePage>, AppError> {
    let kind = code_page_kind(&slug)?;
    let controller = PageController::new(state.pool.clone());
    let response = controller.upsert_code_page(kind, request).await?;
    Ok(Json(response))
}
