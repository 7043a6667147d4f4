pub mod auth_routes;
pub mod brand_routes;
pub mod contact_routes;
pub mod feature_routes;
pub mod page_routes;
pub mod site_routes;
pub mod vehicle_routes;

use axum::Router;

use crate::middleware::auth::auth_middleware;
use crate::state::AppState;

/// Router del panel de administración: login público, el resto
/// protegido por JWT
pub fn create_admin_router(state: AppState) -> Router<AppState> {
    let protected = Router::new()
        .nest("/vehicles", vehicle_routes::create_vehicle_router())
        .nest("/brands", brand_routes::create_brand_router())
        .nest("/features", feature_routes::create_feature_router())
        .nest("/contacts", contact_routes::create_contact_router())
        .nest("/pages", page_routes::create_page_router())
        .route_layer(axum::middleware::from_fn_with_state(state, auth_middleware));

    Router::new()
        .nest("/auth", auth_routes::create_auth_router())
        .merge(protected)
}
