//! Modelos del sistema
//!
//! Este módulo contiene todos los modelos de datos que mapean exactamente
//! al schema PostgreSQL con las convenciones estándar.

pub mod admin_user;
pub mod brand;
pub mod contact;
pub mod feature;
pub mod pages;
pub mod vehicle;
pub mod vehicle_image;
