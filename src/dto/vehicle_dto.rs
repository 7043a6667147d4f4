//! DTOs de vehículos del admin

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::feature::Feature;
use crate::models::vehicle::Vehicle;
use crate::models::vehicle_image::VehicleImage;

// Request para crear un vehículo
#[derive(Debug, Deserialize, Validate)]
pub struct CreateVehicleRequest {
    #[validate(length(max = 255))]
    pub title: Option<String>,

    pub price: Option<Decimal>,

    pub brand_id: Option<Uuid>,

    #[validate(range(min = 0))]
    pub mileage: Option<i32>,

    #[validate(length(max = 255))]
    pub engine: Option<String>,

    #[validate(range(min = 1900, max = 2100))]
    pub year: Option<i32>,

    #[validate(length(max = 100))]
    pub location: Option<String>,

    #[validate(length(max = 100))]
    pub transmission: Option<String>,

    #[validate(custom = "crate::utils::validation::validate_fuel_type")]
    pub fuel_type: Option<String>,

    #[validate(custom = "crate::utils::validation::validate_drivetrain")]
    pub drivetrain: Option<String>,

    #[validate(custom = "crate::utils::validation::validate_body_style")]
    pub body_style: Option<String>,

    #[validate(length(max = 100))]
    pub exterior_color: Option<String>,

    #[validate(length(max = 100))]
    pub interior_color: Option<String>,

    #[validate(custom = "crate::utils::validation::validate_vin")]
    pub vin: Option<String>,

    #[validate(length(max = 100))]
    pub stock_number: Option<String>,

    pub description: Option<String>,

    #[validate(length(max = 255))]
    pub extra_1: Option<String>,

    #[validate(length(max = 255))]
    pub extra_2: Option<String>,

    // Features asignadas por id
    pub features: Option<Vec<Uuid>>,
}

// Request para actualizar un vehículo existente
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateVehicleRequest {
    #[validate(length(max = 255))]
    pub title: Option<String>,

    pub price: Option<Decimal>,

    pub brand_id: Option<Uuid>,

    #[validate(range(min = 0))]
    pub mileage: Option<i32>,

    #[validate(length(max = 255))]
    pub engine: Option<String>,

    #[validate(range(min = 1900, max = 2100))]
    pub year: Option<i32>,

    #[validate(length(max = 100))]
    pub location: Option<String>,

    #[validate(length(max = 100))]
    pub transmission: Option<String>,

    #[validate(custom = "crate::utils::validation::validate_fuel_type")]
    pub fuel_type: Option<String>,

    #[validate(custom = "crate::utils::validation::validate_drivetrain")]
    pub drivetrain: Option<String>,

    #[validate(custom = "crate::utils::validation::validate_body_style")]
    pub body_style: Option<String>,

    #[validate(length(max = 100))]
    pub exterior_color: Option<String>,

    #[validate(length(max = 100))]
    pub interior_color: Option<String>,

    #[validate(custom = "crate::utils::validation::validate_vin")]
    pub vin: Option<String>,

    #[validate(length(max = 100))]
    pub stock_number: Option<String>,

    pub description: Option<String>,

    #[validate(length(max = 255))]
    pub extra_1: Option<String>,

    #[validate(length(max = 255))]
    pub extra_2: Option<String>,

    pub features: Option<Vec<Uuid>>,
}

// Response de vehículo
#[derive(Debug, Serialize)]
pub struct VehicleResponse {
    pub id: Uuid,
    pub title: Option<String>,
    pub price: Option<Decimal>,
    pub brand_id: Option<Uuid>,
    pub brand_name: Option<String>,
    pub mileage: Option<i32>,
    pub engine: Option<String>,
    pub year: Option<i32>,
    pub location: Option<String>,
    pub transmission: Option<String>,
    pub fuel_type: Option<String>,
    pub drivetrain: Option<String>,
    pub body_style: Option<String>,
    pub exterior_color: Option<String>,
    pub interior_color: Option<String>,
    pub vin: Option<String>,
    pub stock_number: Option<String>,
    pub description: Option<String>,
    pub extra_1: Option<String>,
    pub extra_2: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Vehicle> for VehicleResponse {
    fn from(vehicle: Vehicle) -> Self {
        Self {
            id: vehicle.id,
            title: vehicle.title,
            price: vehicle.price,
            brand_id: vehicle.brand_id,
            brand_name: vehicle.brand_name,
            mileage: vehicle.mileage,
            engine: vehicle.engine,
            year: vehicle.year,
            location: vehicle.location,
            transmission: vehicle.transmission,
            fuel_type: vehicle.fuel_type,
            drivetrain: vehicle.drivetrain,
            body_style: vehicle.body_style,
            exterior_color: vehicle.exterior_color,
            interior_color: vehicle.interior_color,
            vin: vehicle.vin,
            stock_number: vehicle.stock_number,
            description: vehicle.description,
            extra_1: vehicle.extra_1,
            extra_2: vehicle.extra_2,
            created_at: vehicle.created_at,
            updated_at: vehicle.updated_at,
        }
    }
}

// Response de detalle con features e imágenes
#[derive(Debug, Serialize)]
pub struct VehicleDetailResponse {
    #[serde(flatten)]
    pub vehicle: VehicleResponse,
    pub features: Vec<Feature>,
    pub images: Vec<VehicleImage>,
}

// Request para agregar una imagen a un vehículo
#[derive(Debug, Deserialize, Validate)]
pub struct CreateVehicleImageRequest {
    #[validate(length(min = 1, max = 500))]
    pub image: String,

    #[validate(length(max = 255))]
    pub caption: Option<String>,

    #[validate(range(min = 0))]
    pub display_order: Option<i32>,
}

// Request para actualizar caption/orden de una imagen
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateVehicleImageRequest {
    #[validate(length(max = 255))]
    pub caption: Option<String>,

    #[validate(range(min = 0))]
    pub display_order: Option<i32>,
}
