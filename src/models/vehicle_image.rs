//! Modelo de VehicleImage
//!
//! Cada imagen pertenece a exactamente un vehículo y se elimina en cascada
//! con él. El orden de presentación lo define display_order.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct VehicleImage {
    pub id: Uuid,
    pub vehicle_id: Uuid,
    pub image: Option<String>,
    pub caption: Option<String>,
    pub display_order: i32,
    pub uploaded_at: DateTime<Utc>,
}
