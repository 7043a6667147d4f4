//! Controller de marcas del admin

use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

use crate::dto::catalog_dto::{CreateBrandRequest, UpdateBrandRequest};
use crate::dto::ApiResponse;
use crate::models::brand::Brand;
use crate::repositories::brand_repository::BrandRepository;
use crate::utils::errors::{validation_error, AppError};
use crate::utils::validation::validate_not_empty;

pub struct BrandController {
    repository: BrandRepository,
}

impl BrandController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: BrandRepository::new(pool),
        }
    }

    pub async fn create(
        &self,
        request: CreateBrandRequest,
    ) -> Result<ApiResponse<Brand>, AppError> {
        request.validate()?;
        validate_not_empty(&request.name)
            .map_err(|_| validation_error("name", "La marca requiere un nombre"))?;

        let brand = self.repository.create(&request.name).await?;

        Ok(ApiResponse::success_with_message(
            brand,
            "Marca creada exitosamente".to_string(),
        ))
    }

    pub async fn list(&self) -> Result<Vec<Brand>, AppError> {
        self.repository.find_all().await
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<Brand, AppError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Marca no encontrada".to_string()))
    }

    pub async fn update(&self, id: Uuid, request: UpdateBrandRequest) -> Result<Brand, AppError> {
        request.validate()?;
        validate_not_empty(&request.name)
            .map_err(|_| validation_error("name", "La marca requiere un nombre"))?;
        self.repository.update(id, &request.name).await
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        self.repository.delete(id).await
    }
}
