//! Repositorio de vehículos
//!
//! Todo el SQL del inventario: CRUD, listado filtrado y los agregados
//! que alimentan los controles de filtro del home.

use std::collections::HashMap;

use chrono::Utc;
use rust_decimal::Decimal;
use sqlx::{PgPool, Postgres, QueryBuilder};
use uuid::Uuid;

use crate::dto::vehicle_dto::{CreateVehicleRequest, UpdateVehicleRequest};
use crate::models::feature::Feature;
use crate::models::vehicle::{Vehicle, VehicleFilters, YearFilter};
use crate::utils::errors::AppError;

const SELECT_VEHICLE: &str =
    "SELECT v.*, b.name AS brand_name FROM vehicles v LEFT JOIN brands b ON b.id = v.brand_id";

pub struct VehicleRepository {
    pool: PgPool,
}

impl VehicleRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, request: &CreateVehicleRequest) -> Result<Vehicle, AppError> {
        let id = Uuid::new_v4();
        let now = Utc::now();

        sqlx::query(
            r#"
            INSERT INTO vehicles (
                id, title, price, brand_id, mileage, engine, year, location,
                transmission, fuel_type, drivetrain, body_style, exterior_color,
                interior_color, vin, stock_number, description, extra_1, extra_2,
                created_at, updated_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14,
                    $15, $16, $17, $18, $19, $20, $20)
            "#,
        )
        .bind(id)
        .bind(&request.title)
        .bind(request.price)
        .bind(request.brand_id)
        .bind(request.mileage)
        .bind(&request.engine)
        .bind(request.year)
        .bind(&request.location)
        .bind(&request.transmission)
        .bind(&request.fuel_type)
        .bind(&request.drivetrain)
        .bind(&request.body_style)
        .bind(&request.exterior_color)
        .bind(&request.interior_color)
        .bind(&request.vin)
        .bind(&request.stock_number)
        .bind(&request.description)
        .bind(&request.extra_1)
        .bind(&request.extra_2)
        .bind(now)
        .execute(&self.pool)
        .await?;

        // Re-leer con el join de brand para devolver brand_name resuelto
        self.find_by_id(id)
            .await?
            .ok_or_else(|| AppError::Internal("Vehicle disappeared after insert".to_string()))
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Vehicle>, AppError> {
        let vehicle =
            sqlx::query_as::<_, Vehicle>(&format!("{} WHERE v.id = $1", SELECT_VEHICLE))
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;

        Ok(vehicle)
    }

    /// Listado filtrado. Cada filtro presente se aplica de forma
    /// independiente (semántica AND); los rangos son inclusivos.
    pub async fn find_filtered(&self, filters: &VehicleFilters) -> Result<Vec<Vehicle>, AppError> {
        let mut qb = QueryBuilder::<Postgres>::new(format!("{} WHERE 1=1", SELECT_VEHICLE));

        if let Some(brand) = &filters.brand_name {
            qb.push(" AND b.name = ");
            qb.push_bind(brand.clone());
        }

        match filters.year {
            Some(YearFilter::Exact(year)) => {
                qb.push(" AND v.year = ");
                qb.push_bind(year);
            }
            Some(YearFilter::Range(start, end)) => {
                qb.push(" AND v.year >= ");
                qb.push_bind(start);
                qb.push(" AND v.year <= ");
                qb.push_bind(end);
            }
            None => {}
        }

        if let Some(min_price) = filters.min_price {
            qb.push(" AND v.price >= ");
            qb.push_bind(min_price);
        }

        if let Some(max_price) = filters.max_price {
            qb.push(" AND v.price <= ");
            qb.push_bind(max_price);
        }

        qb.push(" ORDER BY v.created_at DESC");

        if let Some(limit) = filters.limit {
            qb.push(" LIMIT ");
            qb.push_bind(limit);
        }

        if let Some(offset) = filters.offset {
            qb.push(" OFFSET ");
            qb.push_bind(offset);
        }

        let vehicles = qb.build_query_as::<Vehicle>().fetch_all(&self.pool).await?;

        Ok(vehicles)
    }

    pub async fn update(
        &self,
        id: Uuid,
        request: &UpdateVehicleRequest,
    ) -> Result<Vehicle, AppError> {
        // Obtener vehículo actual
        let current = self
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Vehículo no encontrado".to_string()))?;

        sqlx::query(
            r#"
            UPDATE vehicles
            SET title = $2, price = $3, brand_id = $4, mileage = $5, engine = $6,
                year = $7, location = $8, transmission = $9, fuel_type = $10,
                drivetrain = $11, body_style = $12, exterior_color = $13,
                interior_color = $14, vin = $15, stock_number = $16,
                description = $17, extra_1 = $18, extra_2 = $19, updated_at = $20
            WHERE id = $1
            "#,
        )
        .bind(id)
        .bind(request.title.clone().or(current.title))
        .bind(request.price.or(current.price))
        .bind(request.brand_id.or(current.brand_id))
        .bind(request.mileage.or(current.mileage))
        .bind(request.engine.clone().or(current.engine))
        .bind(request.year.or(current.year))
        .bind(request.location.clone().or(current.location))
        .bind(request.transmission.clone().or(current.transmission))
        .bind(request.fuel_type.clone().or(current.fuel_type))
        .bind(request.drivetrain.clone().or(current.drivetrain))
        .bind(request.body_style.clone().or(current.body_style))
        .bind(request.exterior_color.clone().or(current.exterior_color))
        .bind(request.interior_color.clone().or(current.interior_color))
        .bind(request.vin.clone().or(current.vin))
        .bind(request.stock_number.clone().or(current.stock_number))
        .bind(request.description.clone().or(current.description))
        .bind(request.extra_1.clone().or(current.extra_1))
        .bind(request.extra_2.clone().or(current.extra_2))
        .bind(Utc::now())
        .execute(&self.pool)
        .await?;

        self.find_by_id(id)
            .await?
            .ok_or_else(|| AppError::Internal("Vehicle disappeared after update".to_string()))
    }

    /// Borra el vehículo. Las imágenes caen en cascada y los leads
    /// relacionados quedan con la referencia en NULL (schema).
    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        self.find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Vehículo no encontrado".to_string()))?;

        sqlx::query("DELETE FROM vehicles WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    pub async fn vin_exists(&self, vin: &str, exclude_id: Option<Uuid>) -> Result<bool, AppError> {
        let result: (bool,) = sqlx::query_as(
            "SELECT EXISTS(SELECT 1 FROM vehicles WHERE vin = $1 AND ($2::uuid IS NULL OR id <> $2))",
        )
        .bind(vin)
        .bind(exclude_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(result.0)
    }

    /// Marcas distintas presentes en el inventario, para el dropdown de make
    pub async fn distinct_brand_names(&self) -> Result<Vec<String>, AppError> {
        let names = sqlx::query_scalar::<_, String>(
            r#"
            SELECT DISTINCT b.name FROM vehicles v
            JOIN brands b ON b.id = v.brand_id
            WHERE b.name IS NOT NULL
            ORDER BY b.name
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(names)
    }

    /// Años distintos del inventario, ordenados ascendente
    pub async fn distinct_years(&self) -> Result<Vec<i32>, AppError> {
        let years = sqlx::query_scalar::<_, i32>(
            "SELECT DISTINCT year FROM vehicles WHERE year IS NOT NULL ORDER BY year",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(years)
    }

    /// Precio mínimo y máximo global del inventario
    pub async fn price_range(&self) -> Result<(Option<Decimal>, Option<Decimal>), AppError> {
        let range: (Option<Decimal>, Option<Decimal>) =
            sqlx::query_as("SELECT MIN(price), MAX(price) FROM vehicles")
                .fetch_one(&self.pool)
                .await?;

        Ok(range)
    }

    /// Imagen principal (primera por display_order) de cada vehículo
    pub async fn primary_images(&self) -> Result<HashMap<Uuid, String>, AppError> {
        let rows: Vec<(Uuid, Option<String>)> = sqlx::query_as(
            r#"
            SELECT DISTINCT ON (vehicle_id) vehicle_id, image
            FROM vehicle_images
            ORDER BY vehicle_id, display_order, uploaded_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows
            .into_iter()
            .filter_map(|(vehicle_id, image)| image.map(|img| (vehicle_id, img)))
            .collect())
    }

    /// Reemplaza el set de features asignadas al vehículo
    pub async fn set_features(
        &self,
        vehicle_id: Uuid,
        feature_ids: &[Uuid],
    ) -> Result<(), AppError> {
        let mut tx = self.pool.begin().await?;

        sqlx::query("DELETE FROM vehicle_features WHERE vehicle_id = $1")
            .bind(vehicle_id)
            .execute(&mut *tx)
            .await?;

        for feature_id in feature_ids {
            sqlx::query(
                "INSERT INTO vehicle_features (vehicle_id, feature_id) VALUES ($1, $2)",
            )
            .bind(vehicle_id)
            .bind(feature_id)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;

        Ok(())
    }

    pub async fn features_for(&self, vehicle_id: Uuid) -> Result<Vec<Feature>, AppError> {
        let features = sqlx::query_as::<_, Feature>(
            r#"
            SELECT f.* FROM features f
            JOIN vehicle_features vf ON vf.feature_id = f.id
            WHERE vf.vehicle_id = $1
            ORDER BY f.name
            "#,
        )
        .bind(vehicle_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(features)
    }
}
