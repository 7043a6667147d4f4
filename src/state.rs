//! Shared application state
//!
//! Este módulo define el estado compartido de la aplicación que se pasa
//! a través del router de Axum.

use std::sync::Arc;

use sqlx::PgPool;
use tera::Tera;

use crate::config::environment::EnvironmentConfig;
use crate::middleware::rate_limit::RateLimitState;

#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub config: EnvironmentConfig,
    pub templates: Arc<Tera>,
    pub rate_limiter: RateLimitState,
}

impl AppState {
    pub fn new(pool: PgPool, config: EnvironmentConfig, templates: Tera) -> Self {
        let rate_limiter = RateLimitState::new(&config);
        Self {
            pool,
            config,
            templates: Arc::new(templates),
            rate_limiter,
        }
    }
}
