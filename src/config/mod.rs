//! Configuración del proyecto
//!
//! Este módulo contiene la configuración del servidor y de los precios,
//! ambas cargadas desde variables de entorno.

pub mod environment;
pub mod pricing;

pub use environment::EnvironmentConfig;
pub use pricing::PricingConfig;
