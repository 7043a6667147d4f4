//! Servicio de email transaccional
//!
//! Envía los avisos de nuevos leads por SMTP con cuerpo alternativo
//! texto plano + HTML.

use lettre::message::MultiPart;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};

use crate::config::environment::EnvironmentConfig;
use crate::utils::errors::AppError;

pub struct MailService {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from: String,
}

impl MailService {
    pub fn new(config: &EnvironmentConfig) -> Result<Self, AppError> {
        let credentials = Credentials::new(
            config.smtp_username.clone(),
            config.smtp_password.clone(),
        );

        let transport = AsyncSmtpTransport::<Tokio1Executor>::relay(&config.smtp_host)
            .map_err(|e| AppError::Mail(format!("Invalid SMTP relay: {}", e)))?
            .credentials(credentials)
            .build();

        Ok(Self {
            transport,
            from: config.default_from_email.clone(),
        })
    }

    pub async fn send(
        &self,
        to: &str,
        subject: &str,
        text_body: String,
        html_body: String,
    ) -> Result<(), AppError> {
        log::info!("📧 Enviando email a {}", to);

        let email = Message::builder()
            .from(self
                .from
                .parse()
                .map_err(|e| AppError::Mail(format!("Invalid from address: {}", e)))?)
            .to(to
                .parse()
                .map_err(|e| AppError::Mail(format!("Invalid recipient address: {}", e)))?)
            .subject(subject)
            .multipart(MultiPart::alternative_plain_html(text_body, html_body))
            .map_err(|e| AppError::Mail(format!("Error building email: {}", e)))?;

        self.transport
            .send(email)
            .await
            .map_err(|e| AppError::Mail(format!("Error sending email: {}", e)))?;

        Ok(())
    }
}
