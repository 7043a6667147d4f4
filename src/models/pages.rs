//! Modelos de páginas de contenido
//!
//! Singletons: cada tabla se espera con cero o una fila, y la primera fila
//! es la fuente del contenido del sitio. Los campos `code` guardan template
//! source autorado por el admin que se compila y renderiza por request.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Información general del sitio (banner del home, datos de contacto, etc.)
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct SiteInfo {
    pub id: Uuid,
    pub site_name: Option<String>,
    pub banner: Option<String>,
    pub logo: Option<String>,
    pub showroom_iframe: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub location: Option<String>,
    pub opening_hours: Option<String>,
    pub video: Option<String>,
}

/// Página "about" con contenido propio además del code dinámico
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct AboutPage {
    pub id: Uuid,
    pub title: Option<String>,
    pub text: Option<String>,
    pub banner: Option<String>,
    pub code: Option<String>,
}

/// Fila de una página que solo lleva code dinámico
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct CodePage {
    pub id: Uuid,
    pub code: Option<String>,
}

/// Identifica cada tabla singleton que solo guarda code dinámico
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodePageKind {
    Index,
    Shipping,
    Privacy,
    Terms,
}

impl CodePageKind {
    pub fn table_name(&self) -> &'static str {
        match self {
            CodePageKind::Index => "index_page",
            CodePageKind::Shipping => "shipping_page",
            CodePageKind::Privacy => "privacy_page",
            CodePageKind::Terms => "terms_page",
        }
    }
}
