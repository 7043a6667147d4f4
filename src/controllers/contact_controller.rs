//! Controller del formulario de contacto
//!
//! Flujo del lead: validar → vincular vehículo si viene en la URL →
//! persistir → notificar por Telegram y email. Las notificaciones no se
//! reintentan ni se revierten contra el lead ya guardado.

use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

use crate::dto::contact_dto::ContactFormRequest;
use crate::models::contact::Contact;
use crate::models::vehicle::Vehicle;
use crate::repositories::contact_repository::ContactRepository;
use crate::repositories::vehicle_repository::VehicleRepository;
use crate::services::mail_service::MailService;
use crate::services::telegram_service::TelegramService;
use crate::utils::errors::AppError;

/// Dirección fija de operaciones que recibe cada lead
const SALES_EMAIL: &str = "sales@jeautosalesco.com";

pub struct ContactController {
    contacts: ContactRepository,
    vehicles: VehicleRepository,
}

impl ContactController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            contacts: ContactRepository::new(pool.clone()),
            vehicles: VehicleRepository::new(pool),
        }
    }

    pub async fn submit(
        &self,
        car_id: Option<Uuid>,
        form: ContactFormRequest,
        telegram: &TelegramService,
        mailer: &MailService,
    ) -> Result<Contact, AppError> {
        form.validate()?;

        // Si la URL trae car_id se vincula; un id inexistente se ignora
        // y el lead se guarda sin vehículo
        let vehicle = match car_id {
            Some(id) => self.vehicles.find_by_id(id).await?,
            None => None,
        };

        let contact = self
            .contacts
            .create(
                vehicle.as_ref().map(|v| v.id),
                &form.name,
                &form.email,
                form.phone.as_deref(),
                &form.message,
            )
            .await?;

        log::info!("📝 Lead guardado: {}", contact.id);
        if let Some(vehicle) = &vehicle {
            log::info!("🚗 Lead vinculado a: {}", vehicle.display_label());
        }

        let text = format_contact_message(&contact, vehicle.as_ref());

        // --- Telegram ---
        telegram.send_message(&text).await?;

        // --- Email ---
        let html = text.replace('\n', "<br>");
        mailer
            .send(SALES_EMAIL, "New Contact Request", text, html)
            .await?;

        Ok(contact)
    }

    pub async fn list(&self) -> Result<Vec<Contact>, AppError> {
        self.contacts.find_all().await
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<Contact, AppError> {
        self.contacts
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Lead no encontrado".to_string()))
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        self.contacts.delete(id).await
    }
}

/// Resumen de texto plano del lead para las notificaciones
pub fn format_contact_message(contact: &Contact, vehicle: Option<&Vehicle>) -> String {
    let mut text = format!(
        "📩 New Contact Request\nName: {}\nEmail: {}\nPhone: {}\nMessage: {}\n",
        contact.name.as_deref().unwrap_or(""),
        contact.email.as_deref().unwrap_or(""),
        contact.phone.as_deref().unwrap_or(""),
        contact.message.as_deref().unwrap_or(""),
    );

    if let Some(vehicle) = vehicle {
        text.push_str(&format!(
            "\n🚗 Vehicle: {} ({})\nVIN: {}",
            vehicle.title.as_deref().unwrap_or(""),
            vehicle
                .year
                .map(|y| y.to_string())
                .unwrap_or_else(|| "n/a".to_string()),
            vehicle.vin.as_deref().unwrap_or(""),
        ));
    }

    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn sample_contact() -> Contact {
        Contact {
            id: Uuid::new_v4(),
            vehicle_id: None,
            name: Some("John Buyer".to_string()),
            email: Some("john@example.com".to_string()),
            phone: Some("555-123-4567".to_string()),
            message: Some("Is this car still available?".to_string()),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_format_contact_message_without_vehicle() {
        let text = format_contact_message(&sample_contact(), None);

        assert!(text.starts_with("📩 New Contact Request\n"));
        assert!(text.contains("Name: John Buyer\n"));
        assert!(text.contains("Email: john@example.com\n"));
        assert!(text.contains("Phone: 555-123-4567\n"));
        assert!(text.contains("Message: Is this car still available?\n"));
        assert!(!text.contains("🚗"));
    }

    #[test]
    fn test_format_contact_message_with_vehicle() {
        let vehicle = Vehicle {
            id: Uuid::new_v4(),
            title: Some("Bel Air Restomod".to_string()),
            price: None,
            brand_id: None,
            brand_name: None,
            mileage: None,
            engine: None,
            year: Some(1957),
            location: None,
            transmission: None,
            fuel_type: None,
            drivetrain: None,
            body_style: None,
            exterior_color: None,
            interior_color: None,
            vin: Some("VC56F239098".to_string()),
            stock_number: None,
            description: None,
            extra_1: None,
            extra_2: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };

        let text = format_contact_message(&sample_contact(), Some(&vehicle));

        assert!(text.contains("🚗 Vehicle: Bel Air Restomod (1957)"));
        assert!(text.contains("VIN: VC56F239098"));
    }
}
