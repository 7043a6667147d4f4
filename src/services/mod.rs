//! Services module
//!
//! Este módulo contiene las integraciones externas (Telegram, SMTP)
//! y el renderizado de templates.

pub mod mail_service;
pub mod render_service;
pub mod telegram_service;

pub use mail_service::*;
pub use render_service::*;
pub use telegram_service::*;
