//! Repositorio de imágenes de vehículos

use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::vehicle_dto::{CreateVehicleImageRequest, UpdateVehicleImageRequest};
use crate::models::vehicle_image::VehicleImage;
use crate::utils::errors::AppError;

pub struct VehicleImageRepository {
    pool: PgPool,
}

impl VehicleImageRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(
        &self,
        vehicle_id: Uuid,
        request: &CreateVehicleImageRequest,
    ) -> Result<VehicleImage, AppError> {
        let image = sqlx::query_as::<_, VehicleImage>(
            r#"
            INSERT INTO vehicle_images (id, vehicle_id, image, caption, display_order, uploaded_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(vehicle_id)
        .bind(&request.image)
        .bind(&request.caption)
        .bind(request.display_order.unwrap_or(0))
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(image)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<VehicleImage>, AppError> {
        let image =
            sqlx::query_as::<_, VehicleImage>("SELECT * FROM vehicle_images WHERE id = $1")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;

        Ok(image)
    }

    pub async fn list_by_vehicle(&self, vehicle_id: Uuid) -> Result<Vec<VehicleImage>, AppError> {
        let images = sqlx::query_as::<_, VehicleImage>(
            r#"
            SELECT * FROM vehicle_images
            WHERE vehicle_id = $1
            ORDER BY display_order, uploaded_at DESC
            "#,
        )
        .bind(vehicle_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(images)
    }

    /// Cantidad de imágenes del vehículo; el límite de 20 se valida en el
    /// controller contra este conteo en memoria
    pub async fn count_for_vehicle(&self, vehicle_id: Uuid) -> Result<i64, AppError> {
        let count: (i64,) =
            sqlx::query_as("SELECT COUNT(*) FROM vehicle_images WHERE vehicle_id = $1")
                .bind(vehicle_id)
                .fetch_one(&self.pool)
                .await?;

        Ok(count.0)
    }

    pub async fn update(
        &self,
        id: Uuid,
        request: &UpdateVehicleImageRequest,
    ) -> Result<VehicleImage, AppError> {
        let current = self
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Imagen no encontrada".to_string()))?;

        let image = sqlx::query_as::<_, VehicleImage>(
            r#"
            UPDATE vehicle_images
            SET caption = $2, display_order = $3
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(request.caption.clone().or(current.caption))
        .bind(request.display_order.unwrap_or(current.display_order))
        .fetch_one(&self.pool)
        .await?;

        Ok(image)
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        self.find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Imagen no encontrada".to_string()))?;

        sqlx::query("DELETE FROM vehicle_images WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}
