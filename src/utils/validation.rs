//! Utilidades de validación
//!
//! Este módulo contiene funciones helper para validación de datos
//! del inventario y de los formularios de contacto.

use lazy_static::lazy_static;
use regex::Regex;
use serde::Serialize;
use validator::ValidationError;

use crate::models::vehicle::{BODY_STYLES, DRIVETRAINS, FUEL_TYPES};

/// Máximo de imágenes asociadas a un vehículo
pub const MAX_VEHICLE_IMAGES: i64 = 20;

lazy_static! {
    // VIN estándar: 11-17 caracteres alfanuméricos sin I, O ni Q
    static ref VIN_RE: Regex = Regex::new(r"^[A-HJ-NPR-Za-hj-npr-z0-9]{11,17}$").unwrap();
}

/// Validar que un string no esté vacío
pub fn validate_not_empty(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut error = ValidationError::new("not_empty");
        error.add_param("value".into(), &value.to_string());
        return Err(error);
    }
    Ok(())
}

/// Validar formato de teléfono (básico)
pub fn validate_phone(value: &str) -> Result<(), ValidationError> {
    let clean_phone = value.chars().filter(|c| c.is_digit(10)).collect::<String>();
    if clean_phone.len() < 7 || clean_phone.len() > 15 {
        let mut error = ValidationError::new("phone");
        error.add_param("value".into(), &value.to_string());
        return Err(error);
    }
    Ok(())
}

/// Validar que un valor esté en una lista de valores permitidos
pub fn validate_enum<T: PartialEq + std::fmt::Display + std::fmt::Debug + serde::Serialize>(
    value: T,
    allowed_values: &[T],
) -> Result<(), ValidationError> {
    if !allowed_values.contains(&value) {
        let mut error = ValidationError::new("enum");
        error.add_param("value".into(), &value);
        error.add_param("allowed_values".into(), &format!("{:?}", allowed_values));
        return Err(error);
    }
    Ok(())
}

/// Validar formato de VIN
pub fn validate_vin(value: &str) -> Result<(), ValidationError> {
    if !VIN_RE.is_match(value) {
        let mut error = ValidationError::new("vin");
        error.add_param("value".into(), &value.to_string());
        return Err(error);
    }
    Ok(())
}

/// Validar tipo de combustible
pub fn validate_fuel_type(value: &str) -> Result<(), ValidationError> {
    validate_enum(value, FUEL_TYPES)
}

/// Validar tipo de tracción
pub fn validate_drivetrain(value: &str) -> Result<(), ValidationError> {
    validate_enum(value, DRIVETRAINS)
}

/// Validar tipo de carrocería
pub fn validate_body_style(value: &str) -> Result<(), ValidationError> {
    validate_enum(value, BODY_STYLES)
}

/// Validar que un valor sea no negativo
pub fn validate_non_negative<T: PartialOrd + std::fmt::Display + num_traits::Zero + Serialize>(
    value: T,
) -> Result<(), ValidationError> {
    if value < T::zero() {
        let mut error = ValidationError::new("non_negative");
        error.add_param("value".into(), &value);
        return Err(error);
    }
    Ok(())
}

/// Validar la cantidad de imágenes de un vehículo.
/// El límite se aplica solo en tiempo de validación, no a nivel de schema.
pub fn validate_image_count(count: i64) -> Result<(), ValidationError> {
    if count > MAX_VEHICLE_IMAGES {
        let mut error = ValidationError::new("max_images");
        error.add_param("max".into(), &MAX_VEHICLE_IMAGES);
        error.add_param("actual".into(), &count);
        return Err(error);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_not_empty() {
        assert!(validate_not_empty("test").is_ok());
        assert!(validate_not_empty("").is_err());
        assert!(validate_not_empty("   ").is_err());
    }

    #[test]
    fn test_validate_phone() {
        assert!(validate_phone("1234567890").is_ok());
        assert!(validate_phone("+1 (555) 123-4567").is_ok());
        assert!(validate_phone("123").is_err());
        assert!(validate_phone("1234567890123456").is_err());
    }

    #[test]
    fn test_validate_enum() {
        let allowed = vec!["sedan", "coupe"];
        assert!(validate_enum("sedan", &allowed).is_ok());
        assert!(validate_enum("minivan", &allowed).is_err());
    }

    #[test]
    fn test_validate_vin() {
        assert!(validate_vin("1HGBH41JXMN109186").is_ok());
        assert!(validate_vin("VC56F239098").is_ok());
        assert!(validate_vin("SHORT").is_err());
        assert!(validate_vin("1HGBH41JXMN10918O").is_err()); // contiene O
    }

    #[test]
    fn test_validate_fuel_type() {
        assert!(validate_fuel_type("gasoline").is_ok());
        assert!(validate_fuel_type("diesel").is_ok());
        assert!(validate_fuel_type("plutonium").is_err());
    }

    #[test]
    fn test_validate_non_negative() {
        assert!(validate_non_negative(0).is_ok());
        assert!(validate_non_negative(5).is_ok());
        assert!(validate_non_negative(-1).is_err());
    }

    #[test]
    fn test_validate_image_count() {
        assert!(validate_image_count(0).is_ok());
        assert!(validate_image_count(20).is_ok());
        assert!(validate_image_count(21).is_err());
    }
}
