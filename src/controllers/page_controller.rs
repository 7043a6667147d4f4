//! Controller de páginas de contenido
//!
//! Contextos de las páginas estáticas públicas (about, shipping,
//! privacy, terms) y el upsert de los singletons desde el admin.

use sqlx::PgPool;
use tera::Context;
use validator::Validate;

use crate::dto::page_dto::{
    UpdateAboutPageRequest, UpdateCodePageRequest, UpdateSiteInfoRequest,
};
use crate::models::pages::{AboutPage, CodePage, CodePageKind, SiteInfo};
use crate::repositories::page_repository::PageRepository;
use crate::services::render_service::render_page_code;
use crate::utils::errors::AppError;

pub struct PageController {
    repository: PageRepository,
}

impl PageController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: PageRepository::new(pool),
        }
    }

    /// Contexto de about.html: la fila de la página más su code renderizado
    pub async fn build_about_context(&self) -> Result<Context, AppError> {
        let page = self.repository.about_page().await?;

        let mut context = Context::new();
        context.insert("ab", &page);

        let rendered_code =
            render_page_code(page.as_ref().and_then(|p| p.code.as_deref()), &context)?;
        context.insert("rendered_code", &rendered_code);

        Ok(context)
    }

    /// Contexto de una página que solo lleva code dinámico
    pub async fn build_code_page_context(&self, kind: CodePageKind) -> Result<Context, AppError> {
        let page = self.repository.code_page(kind).await?;

        let mut context = Context::new();
        let rendered_code =
            render_page_code(page.as_ref().and_then(|p| p.code.as_deref()), &context)?;
        context.insert("rendered_code", &rendered_code);

        Ok(context)
    }

    // --- Admin ---

    pub async fn get_site_info(&self) -> Result<Option<SiteInfo>, AppError> {
        self.repository.site_info().await
    }

    pub async fn upsert_site_info(
        &self,
        request: UpdateSiteInfoRequest,
    ) -> Result<SiteInfo, AppError> {
        request.validate()?;
        self.repository.upsert_site_info(&request).await
    }

    pub async fn get_about_page(&self) -> Result<Option<AboutPage>, AppError> {
        self.repository.about_page().await
    }

    pub async fn upsert_about_page(
        &self,
        request: UpdateAboutPageRequest,
    ) -> Result<AboutPage, AppError> {
        request.validate()?;
        self.repository.upsert_about_page(&request).await
    }

    pub async fn get_code_page(&self, kind: CodePageKind) -> Result<Option<CodePage>, AppError> {
        self.repository.code_page(kind).await
    }

    pub async fn upsert_code_page(
        &self,
        kind: CodePageKind,
        request: UpdateCodePageRequest,
    ) -> Result<CodePage, AppError> {
        self.repository
            .upsert_code_page(kind, request.code.as_deref())
            .await
    }
}
