//! Modelo de Feature
//!
//! Tags compartidos de equipamiento ('Classic Forrest Green paint',
//! 'Wood bed floor', etc.), many-to-many con Vehicle.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Feature {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}
