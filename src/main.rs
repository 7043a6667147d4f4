mod config;
mod state;
mod database;
mod services;
mod utils;
mod models;
mod middleware;
mod controllers;
mod repositories;
mod routes;
mod dto;

use anyhow::Result;
use axum::Router;
use dotenvy::dotenv;
use std::net::SocketAddr;
use tokio::signal;
use tower_http::services::ServeDir;
use tracing::{error, info};

use config::environment::EnvironmentConfig;
use controllers::auth_controller::AuthController;
use database::connection::{create_pool, mask_database_url, run_migrations};
use middleware::cors::cors_middleware;
use state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();

    // Configurar logging
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    info!("🚗 Dealership Listing - Sitio web del concesionario");
    info!("================================================");

    // Inicializar base de datos
    let pool = match create_pool(None).await {
        Ok(pool) => pool,
        Err(e) => {
            error!("❌ Error conectando a la base de datos: {}", e);
            return Err(anyhow::anyhow!("Error de base de datos: {}", e));
        }
    };

    info!(
        "🗄️ Base de datos conectada: {}",
        mask_database_url(&std::env::var("DATABASE_URL").unwrap_or_default())
    );

    if let Err(e) = run_migrations(&pool).await {
        error!("❌ Error ejecutando migraciones: {}", e);
        return Err(anyhow::anyhow!("Error de migraciones: {}", e));
    }
    info!("✅ Migraciones aplicadas");

    let config = EnvironmentConfig::default();

    // Cargar templates del sitio
    let templates = match tera::Tera::new(&format!("{}/**/*.html", config.templates_dir)) {
        Ok(templates) => {
            info!("✅ Templates cargados");
            templates
        }
        Err(e) => {
            error!("❌ Error cargando templates: {}", e);
            return Err(anyhow::anyhow!("Error de templates: {}", e));
        }
    };

    // Crear el admin inicial si la tabla está vacía
    AuthController::new(pool.clone()).seed_initial_admin().await?;

    // Crear router de la aplicación
    let app_state = AppState::new(pool, config.clone(), templates);

    let app = Router::new()
        .merge(routes::site_routes::create_site_router(app_state.clone()))
        .nest("/api/admin", routes::create_admin_router(app_state.clone()))
        .nest_service("/media", ServeDir::new(config.media_root.clone()))
        .layer(cors_middleware())
        .with_state(app_state);

    // Puerto del servidor
    let port = std::env::var("PORT").unwrap_or_else(|_| "3000".to_string());
    let addr: SocketAddr = format!("0.0.0.0:{}", port).parse()?;

    info!("🌐 Servidor iniciando en http://{}", addr);
    info!("🔍 Páginas públicas:");
    info!("   GET  / - Home con filtros de inventario");
    info!("   GET  /car/:id/ - Detalle de vehículo");
    info!("   GET  /contact/ - Formulario de contacto");
    info!("   POST /contact/ - Enviar lead");
    info!("   POST /contact/car/:id/ - Enviar lead vinculado a un vehículo");
    info!("   GET  /thank-you/ - Confirmación");
    info!("   GET  /about/ /shipping/ /privacy/ /terms-of-use/ - Páginas estáticas");
    info!("   GET  /media/* - Archivos subidos");
    info!("🔧 Panel de administración:");
    info!("   POST /api/admin/auth/login - Login");
    info!("   CRUD /api/admin/vehicles - Vehículos e imágenes (máx. 20 por vehículo)");
    info!("   CRUD /api/admin/brands - Marcas");
    info!("   CRUD /api/admin/features - Features");
    info!("   CRUD /api/admin/contacts - Leads (lectura y borrado)");
    info!("   CRUD /api/admin/pages - Páginas de contenido");

    // Iniciar servidor en background
    let server_handle = tokio::spawn(async move {
        let listener = tokio::net::TcpListener::bind(addr).await?;
        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .map_err(|e| {
                error!("❌ Error del servidor: {}", e);
                e
            })
    });

    // Esperar a que el servidor termine
    if let Err(e) = server_handle.await? {
        error!("❌ Servidor terminó con error: {}", e);
    }

    info!("👋 Servidor terminado");
    Ok(())
}

/// Señal de apagado graceful
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("🛑 Señal Ctrl+C recibida, apagando servidor...");
        },
        _ = terminate => {
            info!("🛑 Señal de terminación recibida, apagando servidor...");
        },
    }
}
