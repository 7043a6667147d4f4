//! DTOs de las páginas de contenido del admin

use serde::Deserialize;
use validator::Validate;

// Upsert de site_info
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateSiteInfoRequest {
    #[validate(length(max = 255))]
    pub site_name: Option<String>,

    #[validate(length(max = 500))]
    pub banner: Option<String>,

    #[validate(length(max = 500))]
    pub logo: Option<String>,

    pub showroom_iframe: Option<String>,

    #[validate(length(max = 255))]
    pub email: Option<String>,

    #[validate(length(max = 255))]
    pub phone: Option<String>,

    pub location: Option<String>,

    pub opening_hours: Option<String>,

    #[validate(length(max = 500))]
    pub video: Option<String>,
}

// Upsert de la página about
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateAboutPageRequest {
    #[validate(length(max = 255))]
    pub title: Option<String>,

    pub text: Option<String>,

    #[validate(length(max = 500))]
    pub banner: Option<String>,

    pub code: Option<String>,
}

// Upsert de una página que solo lleva code dinámico
#[derive(Debug, Deserialize)]
pub struct UpdateCodePageRequest {
    pub code: Option<String>,
}
