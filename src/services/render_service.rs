//! Renderizado de templates
//!
//! Renderiza los templates de página del directorio de templates y el
//! code dinámico que los admins guardan en las tablas de contenido.
//! El code se compila por request contra el contexto completo de la
//! vista; un template malformado falla el request, sin fallback.

use axum::response::Html;
use tera::{Context, Tera};

use crate::utils::errors::AppError;

/// Renderizar un template de página del sitio
pub fn render_template(
    templates: &Tera,
    name: &str,
    context: &Context,
) -> Result<Html<String>, AppError> {
    let html = templates.render(name, context)?;
    Ok(Html(html))
}

/// Compilar y renderizar el code dinámico de una página contra el
/// contexto del request. Sin fila de página no hay code: string vacío.
pub fn render_page_code(code: Option<&str>, context: &Context) -> Result<String, AppError> {
    match code {
        Some(code) if !code.is_empty() => {
            let rendered = Tera::one_off(code, context, false)?;
            Ok(rendered)
        }
        _ => Ok(String::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_page_code_substitutes_context() {
        let mut context = Context::new();
        context.insert("min_price_value", &5000);

        let rendered =
            render_page_code(Some("<p>From {{ min_price_value }}</p>"), &context).unwrap();
        assert_eq!(rendered, "<p>From 5000</p>");
    }

    #[test]
    fn test_render_page_code_empty_without_row() {
        let context = Context::new();
        assert_eq!(render_page_code(None, &context).unwrap(), "");
        assert_eq!(render_page_code(Some(""), &context).unwrap(), "");
    }

    #[test]
    fn test_render_page_code_malformed_fails() {
        let context = Context::new();
        assert!(render_page_code(Some("{% if %}"), &context).is_err());
    }

    #[test]
    fn test_render_page_code_does_not_escape_html() {
        let mut context = Context::new();
        context.insert("banner", &"<img src='/media/banner.jpg'>");

        let rendered = render_page_code(Some("{{ banner }}"), &context).unwrap();
        assert_eq!(rendered, "<img src='/media/banner.jpg'>");
    }
}
