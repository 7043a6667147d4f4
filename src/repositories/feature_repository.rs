//! Repositorio de features

use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::feature::Feature;
use crate::utils::errors::AppError;

pub struct FeatureRepository {
    pool: PgPool,
}

impl FeatureRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, name: &str, description: Option<&str>) -> Result<Feature, AppError> {
        let feature = sqlx::query_as::<_, Feature>(
            r#"
            INSERT INTO features (id, name, description, created_at)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(name)
        .bind(description)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(feature)
    }

    pub async fn name_exists(&self, name: &str) -> Result<bool, AppError> {
        let result: (bool,) =
            sqlx::query_as("SELECT EXISTS(SELECT 1 FROM features WHERE name = $1)")
                .bind(name)
                .fetch_one(&self.pool)
                .await?;

        Ok(result.0)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Feature>, AppError> {
        let feature = sqlx::query_as::<_, Feature>("SELECT * FROM features WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(feature)
    }

    pub async fn find_all(&self) -> Result<Vec<Feature>, AppError> {
        let features = sqlx::query_as::<_, Feature>("SELECT * FROM features ORDER BY name")
            .fetch_all(&self.pool)
            .await?;

        Ok(features)
    }

    pub async fn update(
        &self,
        id: Uuid,
        name: Option<&str>,
        description: Option<&str>,
    ) -> Result<Feature, AppError> {
        let current = self
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Feature no encontrada".to_string()))?;

        let feature = sqlx::query_as::<_, Feature>(
            "UPDATE features SET name = $2, description = $3 WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(name.unwrap_or(&current.name))
        .bind(description.or(current.description.as_deref()))
        .fetch_one(&self.pool)
        .await?;

        Ok(feature)
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        self.find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Feature no encontrada".to_string()))?;

        sqlx::query("DELETE FROM features WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}
