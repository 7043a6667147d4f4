//! DTOs del formulario de contacto y de leads del admin

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::contact::Contact;

/// Formulario de contacto público. Los campos son opcionales a nivel de
/// schema pero el formulario los valida antes de persistir.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ContactFormRequest {
    #[validate(length(min = 1, max = 255))]
    pub name: String,

    #[validate(email)]
    pub email: String,

    #[validate(custom = "crate::utils::validation::validate_phone")]
    pub phone: Option<String>,

    #[validate(length(min = 1))]
    pub message: String,
}

// Response de lead para el admin
#[derive(Debug, Serialize)]
pub struct ContactResponse {
    pub id: Uuid,
    pub vehicle_id: Option<Uuid>,
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub message: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<Contact> for ContactResponse {
    fn from(contact: Contact) -> Self {
        Self {
            id: contact.id,
            vehicle_id: contact.vehicle_id,
            name: contact.name,
            email: contact.email,
            phone: contact.phone,
            message: contact.message,
            created_at: contact.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_form() -> ContactFormRequest {
        ContactFormRequest {
            name: "John Buyer".to_string(),
            email: "john@example.com".to_string(),
            phone: Some("555-123-4567".to_string()),
            message: "Is this car still available?".to_string(),
        }
    }

    #[test]
    fn test_valid_form_passes() {
        assert!(valid_form().validate().is_ok());
    }

    #[test]
    fn test_invalid_email_rejected() {
        let mut form = valid_form();
        form.email = "not-an-email".to_string();
        assert!(form.validate().is_err());
    }

    #[test]
    fn test_empty_message_rejected() {
        let mut form = valid_form();
        form.message = String::new();
        assert!(form.validate().is_err());
    }

    #[test]
    fn test_phone_is_optional() {
        let mut form = valid_form();
        form.phone = None;
        assert!(form.validate().is_ok());
    }
}
