//! Shared application state
//!
//! Este módulo define el estado compartido de la aplicación que se pasa
//! a través del router de Axum. Tarifas y estimador son inmutables; solo el
//! registro de zonas se edita en caliente.

use std::sync::Arc;

use crate::config::environment::EnvironmentConfig;
use crate::config::pricing::PricingConfig;
use crate::models::tariff::TariffTable;
use crate::services::fare_estimator::FareEstimator;
use crate::services::zone_registry::ZoneRegistry;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<EnvironmentConfig>,
    pub pricing: Arc<PricingConfig>,
    pub tariffs: Arc<TariffTable>,
    pub estimator: Arc<FareEstimator>,
    pub zones: ZoneRegistry,
}

impl AppState {
    pub fn new(config: EnvironmentConfig, pricing: PricingConfig, tariffs: TariffTable) -> Self {
        let estimator = FareEstimator::new(pricing.surcharges.clone());
        Self {
            config: Arc::new(config),
            pricing: Arc::new(pricing),
            tariffs: Arc::new(tariffs),
            estimator: Arc::new(estimator),
            zones: ZoneRegistry::new(),
        }
    }
}
