//! Controller de features del admin

use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

use crate::dto::catalog_dto::{CreateFeatureRequest, UpdateFeatureRequest};
use crate::dto::ApiResponse;
use crate::models::feature::Feature;
use crate::repositories::feature_repository::FeatureRepository;
use crate::utils::errors::AppError;

pub struct FeatureController {
    repository: FeatureRepository,
}

impl FeatureController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: FeatureRepository::new(pool),
        }
    }

    pub async fn create(
        &self,
        request: CreateFeatureRequest,
    ) -> Result<ApiResponse<Feature>, AppError> {
        request.validate()?;

        // El nombre de la feature es único
        if self.repository.name_exists(&request.name).await? {
            return Err(AppError::Conflict(
                "La feature ya está registrada".to_string(),
            ));
        }

        let feature = self
            .repository
            .create(&request.name, request.description.as_deref())
            .await?;

        Ok(ApiResponse::success_with_message(
            feature,
            "Feature creada exitosamente".to_string(),
        ))
    }

    pub async fn list(&self) -> Result<Vec<Feature>, AppError> {
        self.repository.find_all().await
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<Feature, AppError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Feature no encontrada".to_string()))
    }

    pub async fn update(
        &self,
        id: Uuid,
        request: UpdateFeatureRequest,
    ) -> Result<Feature, AppError> {
        request.validate()?;
        self.repository
            .update(id, request.name.as_deref(), request.description.as_deref())
            .await
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        self.repository.delete(id).await
    }
}
