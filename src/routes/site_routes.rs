//! Rutas públicas del sitio
//!
//! Páginas HTML renderizadas con Tera: home con filtros, detalle de
//! vehículo, formulario de contacto y páginas estáticas.

use axum::{
    extract::{Path, Query, State},
    response::{Html, Redirect},
    routing::{get, post},
    Form, Router,
};
use tera::Context;
use uuid::Uuid;

use crate::controllers::catalog_controller::CatalogController;
use crate::controllers::contact_controller::ContactController;
use crate::controllers::page_controller::PageController;
use crate::dto::catalog_dto::ListingQuery;
use crate::dto::contact_dto::ContactFormRequest;
use crate::middleware::rate_limit::rate_limit_middleware;
use crate::models::pages::CodePageKind;
use crate::services::mail_service::MailService;
use crate::services::render_service::render_template;
use crate::services::telegram_service::TelegramService;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_site_router(state: AppState) -> Router<AppState> {
    // El formulario de contacto lleva rate limiting por IP
    let contact_router = Router::new()
        .route("/contact/", get(contact_form).post(submit_contact))
        .route("/contact/car/:car_id/", post(submit_contact_for_car))
        .route_layer(axum::middleware::from_fn_with_state(
            state,
            rate_limit_middleware,
        ));

    Router::new()
        .route("/", get(home))
        .route("/car/:id/", get(car_detail))
        .route("/thank-you/", get(thank_you))
        .route("/about/", get(about))
        .route("/shipping/", get(shipping))
        .route("/privacy/", get(privacy))
        .route("/terms-of-use/", get(terms_of_use))
        .merge(contact_router)
}

async fn home(
    State(state): State<AppState>,
    Query(query): Query<ListingQuery>,
) -> Result<Html<String>, AppError> {
    let controller = CatalogController::new(state.pool.clone());
    let context = controller.build_home_context(&query).await?;
    render_template(&state.templates, "index.html", &context)
}

async fn car_detail(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Html<String>, AppError> {
    let controller = CatalogController::new(state.pool.clone());
    let context = controller.build_detail_context(id).await?;
    render_template(&state.templates, "vehicle.html", &context)
}

async fn contact_form(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    // El formulario se muestra sobre el template del home
    let controller = CatalogController::new(state.pool.clone());
    let context = controller.build_home_context(&ListingQuery::default()).await?;
    render_template(&state.templates, "index.html", &context)
}

async fn submit_contact(
    State(state): State<AppState>,
    Form(form): Form<ContactFormRequest>,
) -> Result<Redirect, AppError> {
    process_contact(state, None, form).await
}

async fn submit_contact_for_car(
    State(state): State<AppState>,
    Path(car_id): Path<String>,
    Form(form): Form<ContactFormRequest>,
) -> Result<Redirect, AppError> {
    // Un id malformado se trata igual que uno inexistente: el lead
    // se guarda sin vehículo
    let car_id = Uuid::parse_str(&car_id).ok();
    process_contact(state, car_id, form).await
}

async fn process_contact(
    state: AppState,
    car_id: Option<Uuid>,
    form: ContactFormRequest,
) -> Result<Redirect, AppError> {
    let controller = ContactController::new(state.pool.clone());
    let telegram = TelegramService::new(
        state.config.bot_token.clone(),
        state.config.channel_id.clone(),
    );
    let mailer = MailService::new(&state.config)?;

    controller.submit(car_id, form, &telegram, &mailer).await?;

    Ok(Redirect::to("/thank-you/"))
}

async fn thank_you(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    render_template(&state.templates, "thank-you.html", &Context::new())
}

async fn about(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let controller = PageController::new(state.pool.clone());
    let context = controller.build_about_context().await?;
    render_template(&state.templates, "about.html", &context)
}

async fn shipping(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let controller = PageController::new(state.pool.clone());
    let context = controller.build_code_page_context(CodePageKind::Shipping).await?;
    render_template(&state.templates, "shipping.html", &context)
}

async fn privacy(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let controller = PageController::new(state.pool.clone());
    let context = controller.build_code_page_context(CodePageKind::Privacy).await?;
    render_template(&state.templates, "privacy.html", &context)
}

async fn terms_of_use(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let controller = PageController::new(state.pool.clone());
    let context = controller.build_code_page_context(CodePageKind::Terms).await?;
    render_template(&state.templates, "termsofuse.html", &context)
}
