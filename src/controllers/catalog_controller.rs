//! Controller del catálogo público
//!
//! Construye el contexto del home: listado filtrado, marcas para el
//! dropdown, histograma de años por década, rango global de precios y
//! el code dinámico del home ya renderizado.

use rust_decimal::Decimal;
use sqlx::PgPool;
use std::str::FromStr;
use tera::Context;
use uuid::Uuid;

use crate::dto::catalog_dto::{CarListItem, ListingQuery, YearRange};
use crate::models::pages::CodePageKind;
use crate::models::vehicle::{VehicleFilters, YearFilter};
use crate::repositories::page_repository::PageRepository;
use crate::repositories::vehicle_image_repository::VehicleImageRepository;
use crate::repositories::vehicle_repository::VehicleRepository;
use crate::services::render_service::render_page_code;
use crate::utils::errors::AppError;

/// Sentinel de los dropdowns: no filtra
pub const ALL_SENTINEL: &str = "all";

/// Precio máximo por defecto cuando el inventario está vacío
const DEFAULT_MAX_PRICE: i64 = 100_000;

pub struct CatalogController {
    vehicles: VehicleRepository,
    images: VehicleImageRepository,
    pages: PageRepository,
}

impl CatalogController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            vehicles: VehicleRepository::new(pool.clone()),
            images: VehicleImageRepository::new(pool.clone()),
            pages: PageRepository::new(pool),
        }
    }

    /// Normalizar los parámetros crudos del request.
    /// Valores ausentes, el sentinel "all" y números no parseables
    /// se ignoran en vez de rechazar el request.
    pub fn parse_filters(query: &ListingQuery) -> VehicleFilters {
        VehicleFilters {
            brand_name: query
                .make
                .as_deref()
                .map(str::trim)
                .filter(|m| !m.is_empty() && *m != ALL_SENTINEL)
                .map(str::to_string),
            year: query.year.as_deref().and_then(parse_year_filter),
            min_price: query.min_price.as_deref().and_then(parse_price),
            max_price: query.max_price.as_deref().and_then(parse_price),
            limit: query.limit,
            offset: query.offset,
        }
    }

    /// Contexto completo del home (index.html)
    pub async fn build_home_context(&self, query: &ListingQuery) -> Result<Context, AppError> {
        let filters = Self::parse_filters(query);

        let vehicles = self.vehicles.find_filtered(&filters).await?;
        let primary_images = self.vehicles.primary_images().await?;
        let cars: Vec<CarListItem> = vehicles
            .into_iter()
            .map(|vehicle| {
                let image = primary_images.get(&vehicle.id).cloned();
                CarListItem::from_vehicle(vehicle, image)
            })
            .collect();

        let makes = self.vehicles.distinct_brand_names().await?;
        let years = self.vehicles.distinct_years().await?;
        let year_ranges = decade_buckets(&years);
        let (min_price, max_price) = self.vehicles.price_range().await?;
        let banner = self.pages.site_info().await?;

        let mut context = Context::new();
        context.insert("cars", &cars);
        context.insert("banner", &banner);
        context.insert("makes", &makes);
        context.insert("year_ranges", &year_ranges);
        context.insert("all_years", &years);
        context.insert("min_price_value", &min_price.unwrap_or(Decimal::ZERO));
        context.insert(
            "max_price_value",
            &max_price.unwrap_or_else(|| Decimal::from(DEFAULT_MAX_PRICE)),
        );

        // Guardar los parámetros de filtro actuales
        context.insert("current_make", query.make.as_deref().unwrap_or(ALL_SENTINEL));
        context.insert("current_year", query.year.as_deref().unwrap_or(ALL_SENTINEL));
        context.insert("current_min_price", query.min_price.as_deref().unwrap_or(""));
        context.insert("current_max_price", query.max_price.as_deref().unwrap_or(""));

        // Code dinámico del home, renderizado contra el contexto de la vista
        let page = self.pages.code_page(CodePageKind::Index).await?;
        let rendered_code =
            render_page_code(page.as_ref().and_then(|p| p.code.as_deref()), &context)?;
        context.insert("rendered_code", &rendered_code);

        Ok(context)
    }

    /// Contexto del detalle de un vehículo (vehicle.html)
    pub async fn build_detail_context(&self, id: Uuid) -> Result<Context, AppError> {
        let vehicle = self
            .vehicles
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Vehículo no encontrado".to_string()))?;

        let images = self.images.list_by_vehicle(vehicle.id).await?;
        let features = self.vehicles.features_for(vehicle.id).await?;

        let mut context = Context::new();
        context.insert("car", &vehicle);
        context.insert("images", &images);
        context.insert("features", &features);

        Ok(context)
    }
}

fn parse_year_filter(raw: &str) -> Option<YearFilter> {
    let raw = raw.trim();
    if raw.is_empty() || raw == ALL_SENTINEL {
        return None;
    }

    // Formato de rango: "2020-2025", si no un año exacto
    if let Some((start, end)) = raw.split_once('-') {
        let start = start.trim().parse().ok()?;
        let end = end.trim().parse().ok()?;
        Some(YearFilter::Range(start, end))
    } else {
        raw.parse().ok().map(YearFilter::Exact)
    }
}

fn parse_price(raw: &str) -> Option<Decimal> {
    Decimal::from_str(raw.trim()).ok()
}

/// Agrupar los años distintos del inventario en buckets de década,
/// desde la década del año mínimo hasta la del máximo. Los buckets
/// vacíos se omiten.
pub fn decade_buckets(years: &[i32]) -> Vec<YearRange> {
    let (min_year, max_year) = match (years.first(), years.last()) {
        (Some(&min), Some(&max)) => (min, max),
        _ => return Vec::new(),
    };

    let mut ranges = Vec::new();
    let mut decade_start = (min_year / 10) * 10;
    while decade_start <= max_year {
        let decade_end = decade_start + 9;
        let count = years
            .iter()
            .filter(|&&year| year >= decade_start && year <= decade_end)
            .count() as i64;
        if count > 0 {
            ranges.push(YearRange {
                range: format!("{}-{}", decade_start, decade_end),
                count,
            });
        }
        decade_start += 10;
    }

    ranges
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_year_filter_exact() {
        assert_eq!(parse_year_filter("1957"), Some(YearFilter::Exact(1957)));
    }

    #[test]
    fn test_parse_year_filter_range() {
        assert_eq!(
            parse_year_filter("2000-2010"),
            Some(YearFilter::Range(2000, 2010))
        );
    }

    #[test]
    fn test_parse_year_filter_sentinel_and_garbage() {
        assert_eq!(parse_year_filter("all"), None);
        assert_eq!(parse_year_filter(""), None);
        assert_eq!(parse_year_filter("abc"), None);
        assert_eq!(parse_year_filter("2000-abc"), None);
    }

    #[test]
    fn test_parse_filters_ignores_invalid_prices() {
        let query = ListingQuery {
            min_price: Some("cheap".to_string()),
            max_price: Some("50000".to_string()),
            ..Default::default()
        };
        let filters = CatalogController::parse_filters(&query);
        assert_eq!(filters.min_price, None);
        assert_eq!(filters.max_price, Some(Decimal::from(50_000)));
    }

    #[test]
    fn test_parse_filters_make_sentinel() {
        let query = ListingQuery {
            make: Some("all".to_string()),
            ..Default::default()
        };
        assert_eq!(CatalogController::parse_filters(&query).brand_name, None);

        let query = ListingQuery {
            make: Some("Chevrolet".to_string()),
            ..Default::default()
        };
        assert_eq!(
            CatalogController::parse_filters(&query).brand_name,
            Some("Chevrolet".to_string())
        );
    }

    #[test]
    fn test_decade_buckets_anchored_at_floor_decade() {
        let years = vec![1955, 1957, 1963, 1971];
        let buckets = decade_buckets(&years);

        assert_eq!(
            buckets,
            vec![
                YearRange {
                    range: "1950-1959".to_string(),
                    count: 2
                },
                YearRange {
                    range: "1960-1969".to_string(),
                    count: 1
                },
                YearRange {
                    range: "1970-1979".to_string(),
                    count: 1
                },
            ]
        );
    }

    #[test]
    fn test_decade_buckets_skip_empty_decades() {
        let years = vec![1950, 1980];
        let buckets = decade_buckets(&years);

        assert_eq!(buckets.len(), 2);
        assert_eq!(buckets[0].range, "1950-1959");
        assert_eq!(buckets[1].range, "1980-1989");
    }

    #[test]
    fn test_decade_buckets_every_year_in_exactly_one_bucket() {
        let years = vec![1999, 2000, 2001, 2009, 2010, 2023];
        let buckets = decade_buckets(&years);

        let total: i64 = buckets.iter().map(|b| b.count).sum();
        assert_eq!(total, years.len() as i64);
    }

    #[test]
    fn test_decade_buckets_empty_inventory() {
        assert!(decade_buckets(&[]).is_empty());
    }
}
