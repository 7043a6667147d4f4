//! Repositorio de marcas

use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::brand::Brand;
use crate::utils::errors::AppError;

pub struct BrandRepository {
    pool: PgPool,
}

impl BrandRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, name: &str) -> Result<Brand, AppError> {
        let brand = sqlx::query_as::<_, Brand>(
            "INSERT INTO brands (id, name, created_at) VALUES ($1, $2, $3) RETURNING *",
        )
        .bind(Uuid::new_v4())
        .bind(name)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(brand)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Brand>, AppError> {
        let brand = sqlx::query_as::<_, Brand>("SELECT * FROM brands WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(brand)
    }

    pub async fn find_all(&self) -> Result<Vec<Brand>, AppError> {
        let brands = sqlx::query_as::<_, Brand>("SELECT * FROM brands ORDER BY name")
            .fetch_all(&self.pool)
            .await?;

        Ok(brands)
    }

    pub async fn update(&self, id: Uuid, name: &str) -> Result<Brand, AppError> {
        let brand = sqlx::query_as::<_, Brand>(
            "UPDATE brands SET name = $2 WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(name)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound("Marca no encontrada".to_string()))?;

        Ok(brand)
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        self.find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Marca no encontrada".to_string()))?;

        sqlx::query("DELETE FROM brands WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}
