//! Servicio de notificaciones por Telegram
//!
//! Envía el resumen de cada lead al canal de operaciones usando el
//! endpoint sendMessage de la Bot API. La entrega no se verifica: solo
//! los errores de transporte se propagan.

use crate::utils::errors::AppError;

const TELEGRAM_API_BASE: &str = "https://api.telegram.org";

pub struct TelegramService {
    bot_token: String,
    chat_id: String,
    client: reqwest::Client,
}

impl TelegramService {
    pub fn new(bot_token: String, chat_id: String) -> Self {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(10))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            bot_token,
            chat_id,
            client,
        }
    }

    pub async fn send_message(&self, text: &str) -> Result<(), AppError> {
        log::info!("📤 Enviando notificación de lead a Telegram");

        let url = format!(
            "{}/bot{}/sendMessage?chat_id={}&text={}",
            TELEGRAM_API_BASE,
            self.bot_token,
            urlencoding::encode(&self.chat_id),
            urlencoding::encode(text)
        );

        // Hacer la petición HTTP; el status de la API no se valida
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| AppError::ExternalApi(format!("Telegram request failed: {}", e)))?;

        log::info!("📡 Telegram response status: {}", response.status());

        Ok(())
    }
}
