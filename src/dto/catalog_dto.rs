//! DTOs del catálogo público y de marcas/features del admin

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::vehicle::Vehicle;

/// Parámetros de filtrado del listado.
///
/// make/year/min_price/max_price llegan como strings crudos: un valor
/// ausente, el sentinel "all" o un número no parseable se ignoran en vez
/// de rechazar el request.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct ListingQuery {
    pub make: Option<String>,
    pub year: Option<String>,
    pub min_price: Option<String>,
    pub max_price: Option<String>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

/// Bucket de década para el histograma de años del filtro
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct YearRange {
    pub range: String,
    pub count: i64,
}

/// Item del listado público, con la imagen principal resuelta
#[derive(Debug, Serialize)]
pub struct CarListItem {
    pub id: Uuid,
    pub title: Option<String>,
    pub price: Option<Decimal>,
    pub brand_name: Option<String>,
    pub mileage: Option<i32>,
    pub engine: Option<String>,
    pub year: Option<i32>,
    pub location: Option<String>,
    pub transmission: Option<String>,
    pub fuel_type: Option<String>,
    pub body_style: Option<String>,
    pub primary_image: Option<String>,
}

impl CarListItem {
    pub fn from_vehicle(vehicle: Vehicle, primary_image: Option<String>) -> Self {
        Self {
            id: vehicle.id,
            title: vehicle.title,
            price: vehicle.price,
            brand_name: vehicle.brand_name,
            mileage: vehicle.mileage,
            engine: vehicle.engine,
            year: vehicle.year,
            location: vehicle.location,
            transmission: vehicle.transmission,
            fuel_type: vehicle.fuel_type,
            body_style: vehicle.body_style,
            primary_image,
        }
    }
}

// Request para crear una marca
#[derive(Debug, Deserialize, Validate)]
pub struct CreateBrandRequest {
    #[validate(length(min = 1, max = 255))]
    pub name: String,
}

// Request para actualizar una marca
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateBrandRequest {
    #[validate(length(min = 1, max = 255))]
    pub name: String,
}

// Request para crear una feature
#[derive(Debug, Deserialize, Validate)]
pub struct CreateFeatureRequest {
    #[validate(length(min = 1, max = 200))]
    pub name: String,

    pub description: Option<String>,
}

// Request para actualizar una feature
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateFeatureRequest {
    #[validate(length(min = 1, max = 200))]
    pub name: Option<String>,

    pub description: Option<String>,
}
