//! Repositorio de páginas de contenido
//!
//! Cada tabla es un singleton: se usa la primera fila como fuente del
//! contenido y el upsert actualiza esa fila o la crea si no existe.

use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::page_dto::{UpdateAboutPageRequest, UpdateSiteInfoRequest};
use crate::models::pages::{AboutPage, CodePage, CodePageKind, SiteInfo};
use crate::utils::errors::AppError;

pub struct PageRepository {
    pool: PgPool,
}

impl PageRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn site_info(&self) -> Result<Option<SiteInfo>, AppError> {
        let row = sqlx::query_as::<_, SiteInfo>("SELECT * FROM site_info LIMIT 1")
            .fetch_optional(&self.pool)
            .await?;

        Ok(row)
    }

    pub async fn upsert_site_info(
        &self,
        request: &UpdateSiteInfoRequest,
    ) -> Result<SiteInfo, AppError> {
        if let Some(current) = self.site_info().await? {
            let row = sqlx::query_as::<_, SiteInfo>(
                r#"
                UPDATE site_info
                SET site_name = $2, banner = $3, logo = $4, showroom_iframe = $5,
                    email = $6, phone = $7, location = $8, opening_hours = $9, video = $10
                WHERE id = $1
                RETURNING *
                "#,
            )
            .bind(current.id)
            .bind(request.site_name.clone().or(current.site_name))
            .bind(request.banner.clone().or(current.banner))
            .bind(request.logo.clone().or(current.logo))
            .bind(request.showroom_iframe.clone().or(current.showroom_iframe))
            .bind(request.email.clone().or(current.email))
            .bind(request.phone.clone().or(current.phone))
            .bind(request.location.clone().or(current.location))
            .bind(request.opening_hours.clone().or(current.opening_hours))
            .bind(request.video.clone().or(current.video))
            .fetch_one(&self.pool)
            .await?;

            Ok(row)
        } else {
            let row = sqlx::query_as::<_, SiteInfo>(
                r#"
                INSERT INTO site_info (id, site_name, banner, logo, showroom_iframe,
                                       email, phone, location, opening_hours, video)
                VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
                RETURNING *
                "#,
            )
            .bind(Uuid::new_v4())
            .bind(&request.site_name)
            .bind(&request.banner)
            .bind(&request.logo)
            .bind(&request.showroom_iframe)
            .bind(&request.email)
            .bind(&request.phone)
            .bind(&request.location)
            .bind(&request.opening_hours)
            .bind(&request.video)
            .fetch_one(&self.pool)
            .await?;

            Ok(row)
        }
    }

    pub async fn about_page(&self) -> Result<Option<AboutPage>, AppError> {
        let row = sqlx::query_as::<_, AboutPage>("SELECT * FROM about_page LIMIT 1")
            .fetch_optional(&self.pool)
            .await?;

        Ok(row)
    }

    pub async fn upsert_about_page(
        &self,
        request: &UpdateAboutPageRequest,
    ) -> Result<AboutPage, AppError> {
        if let Some(current) = self.about_page().await? {
            let row = sqlx::query_as::<_, AboutPage>(
                r#"
                UPDATE about_page
                SET title = $2, text = $3, banner = $4, code = $5
                WHERE id = $1
                RETURNING *
                "#,
            )
            .bind(current.id)
            .bind(request.title.clone().or(current.title))
            .bind(request.text.clone().or(current.text))
            .bind(request.banner.clone().or(current.banner))
            .bind(request.code.clone().or(current.code))
            .fetch_one(&self.pool)
            .await?;

            Ok(row)
        } else {
            let row = sqlx::query_as::<_, AboutPage>(
                r#"
                INSERT INTO about_page (id, title, text, banner, code)
                VALUES ($1, $2, $3, $4, $5)
                RETURNING *
                "#,
            )
            .bind(Uuid::new_v4())
            .bind(&request.title)
            .bind(&request.text)
            .bind(&request.banner)
            .bind(&request.code)
            .fetch_one(&self.pool)
            .await?;

            Ok(row)
        }
    }

    pub async fn code_page(&self, kind: CodePageKind) -> Result<Option<CodePage>, AppError> {
        // Nombres de tabla fijos, definidos en CodePageKind
        let sql = format!("SELECT * FROM {} LIMIT 1", kind.table_name());
        let row = sqlx::query_as::<_, CodePage>(&sql)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row)
    }

    pub async fn upsert_code_page(
        &self,
        kind: CodePageKind,
        code: Option<&str>,
    ) -> Result<CodePage, AppError> {
        if let Some(current) = self.code_page(kind).await? {
            let sql = format!(
                "UPDATE {} SET code = $2 WHERE id = $1 RETURNING *",
                kind.table_name()
            );
            let row = sqlx::query_as::<_, CodePage>(&sql)
                .bind(current.id)
                .bind(code.map(str::to_string).or(current.code))
                .fetch_one(&self.pool)
                .await?;

            Ok(row)
        } else {
            let sql = format!(
                "INSERT INTO {} (id, code) VALUES ($1, $2) RETURNING *",
                kind.table_name()
            );
            let row = sqlx::query_as::<_, CodePage>(&sql)
                .bind(Uuid::new_v4())
                .bind(code)
                .fetch_one(&self.pool)
                .await?;

            Ok(row)
        }
    }
}
