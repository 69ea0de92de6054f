//! Utilidades de validación
//!
//! Funciones helper usadas por los DTOs (`#[validate(custom = ...)]`) y por
//! la carga de configuración de precios.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use validator::ValidationError;

use crate::models::tariff::VehicleTier;
use crate::utils::errors::PricingError;

/// Validar que un string no esté vacío
pub fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut error = ValidationError::new("not_blank");
        error.add_param("value".into(), &value.to_string());
        return Err(error);
    }
    Ok(())
}

/// Validar que ningún precio fijo de zona sea negativo
pub fn validate_tier_prices(prices: &BTreeMap<VehicleTier, Decimal>) -> Result<(), ValidationError> {
    for (tier, price) in prices {
        if *price < Decimal::ZERO {
            let mut error = ValidationError::new("non_negative_price");
            error.add_param("tier".into(), &tier.as_str());
            error.add_param("value".into(), &price.to_string());
            return Err(error);
        }
    }
    Ok(())
}

/// Validar que el IVA sea una fracción en [0, 1)
pub fn validate_vat_rate(vat_rate: Decimal) -> Result<Decimal, PricingError> {
    if vat_rate < Decimal::ZERO || vat_rate >= Decimal::ONE {
        return Err(PricingError::invalid(format!(
            "vat_rate must be in [0, 1), got {}",
            vat_rate
        )));
    }
    Ok(vat_rate)
}

/// Validar que una magnitud no sea negativa
pub fn validate_non_negative(value: f64, field: &str) -> Result<f64, PricingError> {
    if value.is_nan() || value < 0.0 {
        return Err(PricingError::invalid(format!("{} must be >= 0, got {}", field, value)));
    }
    Ok(value)
}
