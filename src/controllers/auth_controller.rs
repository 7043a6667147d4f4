//! Controller de autenticación del admin

use sqlx::PgPool;

use crate::config::environment::EnvironmentConfig;
use crate::dto::auth_dto::{LoginRequest, LoginResponse};
use crate::repositories::admin_user_repository::AdminUserRepository;
use crate::utils::errors::AppError;
use crate::utils::jwt::{generate_token, JwtConfig};

pub struct AuthController {
    repository: AdminUserRepository,
}

impl AuthController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: AdminUserRepository::new(pool),
        }
    }

    pub async fn login(
        &self,
        request: LoginRequest,
        config: &EnvironmentConfig,
    ) -> Result<LoginResponse, AppError> {
        let user = self
            .repository
            .find_by_username(&request.username)
            .await?
            .ok_or_else(|| AppError::Unauthorized("Credenciales inválidas".to_string()))?;

        let valid = bcrypt::verify(&request.password, &user.password_hash)
            .map_err(|e| AppError::Internal(format!("Error verificando credenciales: {}", e)))?;

        if !valid {
            return Err(AppError::Unauthorized("Credenciales inválidas".to_string()));
        }

        let token = generate_token(user.id, &user.username, &JwtConfig::from(config))?;

        log::info!("🔑 Login de administrador: {}", user.username);

        Ok(LoginResponse {
            token,
            expires_in: config.jwt_expiration,
        })
    }

    /// Crear el administrador inicial desde ADMIN_USERNAME/ADMIN_PASSWORD
    /// si la tabla está vacía
    pub async fn seed_initial_admin(&self) -> Result<(), AppError> {
        if self.repository.count().await? > 0 {
            return Ok(());
        }

        let (username, password) = match (
            std::env::var("ADMIN_USERNAME"),
            std::env::var("ADMIN_PASSWORD"),
        ) {
            (Ok(username), Ok(password)) => (username, password),
            _ => {
                log::warn!("⚠️ No hay administradores y ADMIN_USERNAME/ADMIN_PASSWORD no están configurados");
                return Ok(());
            }
        };

        let password_hash = bcrypt::hash(&password, bcrypt::DEFAULT_COST)
            .map_err(|e| AppError::Internal(format!("Error generando hash: {}", e)))?;

        self.repository.create(&username, &password_hash).await?;

        log::info!("👤 Usuario administrador inicial creado: {}", username);

        Ok(())
    }
}
