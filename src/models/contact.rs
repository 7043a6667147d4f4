//! Modelo de Contact
//!
//! Un lead: la consulta de un comprador potencial. Se crea una sola vez al
//! enviar el formulario y es inmutable después. Si el vehículo relacionado
//! se elimina, la referencia queda en NULL sin borrar el lead.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Contact {
    pub id: Uuid,
    pub vehicle_id: Option<Uuid>,
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub message: Option<String>,
    pub created_at: DateTime<Utc>,
}
