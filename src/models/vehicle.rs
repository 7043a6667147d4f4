//! Modelo de Vehicle
//!
//! Este módulo contiene el struct Vehicle del inventario y los conjuntos
//! de valores enumerados. Mapea a la tabla vehicles del schema PostgreSQL,
//! con el nombre de la marca resuelto via join.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Tipos de combustible permitidos
pub const FUEL_TYPES: &[&str] = &["gasoline", "diesel", "electric", "hybrid", "other"];

/// Tipos de tracción permitidos
pub const DRIVETRAINS: &[&str] = &["rwd", "fwd", "awd", "4wd", "other"];

/// Tipos de carrocería permitidos
pub const BODY_STYLES: &[&str] = &[
    "sedan",
    "hatchback",
    "coupe",
    "convertible",
    "pickup",
    "wagon",
    "suv",
    "other",
];

/// Vehicle principal - mapea a la tabla vehicles, con brand_name resuelto
/// desde la tabla brands en todos los SELECT
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Vehicle {
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

impl Vehicle {
    /// Etiqueta legible del vehículo para notificaciones y listados del admin
    pub fn display_label(&self) -> String {
        match (&self.title, self.year) {
            (Some(title), Some(year)) => format!("{} ({})", title, year),
            (Some(title), None) => format!("{} (n/a)", title),
            _ => format!(
                "Vehicle {} - {}",
                self.id,
                self.vin.as_deref().unwrap_or("no-vin")
            ),
        }
    }
}

/// Filtro de año ya parseado: valor exacto o rango inclusivo
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum YearFilter {
    Exact(i32),
    Range(i32, i32),
}

/// Filtros para búsqueda de vehículos, ya normalizados.
/// Los valores ausentes no imponen restricción.
#[derive(Debug, Default, Clone)]
pub struct VehicleFilters {
    pub brand_name: Option<String>,
    pub year: Option<YearFilter>,
    pub min_price: Option<Decimal>,
    pub max_price: Option<Decimal>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn empty_vehicle() -> Vehicle {
        Vehicle {
            id: Uuid::new_v4(),
            title: None,
            price: None,
            brand_id: None,
            brand_name: None,
            mileage: None,
            engine: None,
            year: None,
            location: None,
            transmission: None,
            fuel_type: None,
            drivetrain: None,
            body_style: None,
            exterior_color: None,
            interior_color: None,
            vin: None,
            stock_number: None,
            description: None,
            extra_1: None,
            extra_2: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_display_label_with_title_and_year() {
        let mut v = empty_vehicle();
        v.title = Some("Bel Air Restomod".to_string());
        v.year = Some(1957);
        assert_eq!(v.display_label(), "Bel Air Restomod (1957)");
    }

    #[test]
    fn test_display_label_without_title() {
        let mut v = empty_vehicle();
        v.vin = Some("VC56F239098".to_string());
        assert!(v.display_label().contains("VC56F239098"));
    }
}
