//! Services module
//!
//! Este módulo contiene la lógica de negocio: el estimador de tarifas, la
//! política de suplementos, la geometría de trayectos y el registro de zonas.

pub mod fare_estimator;
pub mod geo;
pub mod surcharge;
pub mod time_context;
pub mod zone_matcher;
pub mod zone_registry;

pub use fare_estimator::FareEstimator;
pub use surcharge::SurchargePolicy;
pub use zone_registry::ZoneRegistry;
