//! Configuración de precios
//!
//! IVA, multiplicadores y tasas fijas de suplementos, y franja nocturna.

use anyhow::Result;
use rust_decimal::Decimal;

use crate::config::environment::{var_opt, var_or};
use crate::services::surcharge::SurchargePolicy;
use crate::services::time_context::NightWindow;
use crate::utils::validation::validate_vat_rate;

/// Tasa de IVA suiza vigente (8.1 %)
pub fn default_vat_rate() -> Decimal {
    Decimal::new(81, 3)
}

#[derive(Debug, Clone)]
pub struct PricingConfig {
    pub vat_rate: Decimal,
    pub surcharges: SurchargePolicy,
    pub night_window: NightWindow,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            vat_rate: default_vat_rate(),
            surcharges: SurchargePolicy::default(),
            night_window: NightWindow::default(),
        }
    }
}

impl PricingConfig {
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();
        let policy = defaults.surcharges;

        let config = Self {
            vat_rate: var_or("VAT_RATE", defaults.vat_rate)?,
            surcharges: SurchargePolicy {
                night_multiplier: var_or("NIGHT_MULTIPLIER", policy.night_multiplier)?,
                weekend_multiplier: var_opt("WEEKEND_MULTIPLIER")?,
                premium_multiplier: var_or("PREMIUM_MULTIPLIER", policy.premium_multiplier)?,
                child_seat_fee: var_or("CHILD_SEAT_FEE", policy.child_seat_fee)?,
                wait_fee_per_hour: var_or("WAIT_FEE_PER_HOUR", policy.wait_fee_per_hour)?,
            },
            night_window: NightWindow::new(
                var_or("NIGHT_START_HOUR", defaults.night_window.start_hour)?,
                var_or("NIGHT_END_HOUR", defaults.night_window.end_hour)?,
            )?,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        validate_vat_rate(self.vat_rate)?;
        self.surcharges.validate()?;
        Ok(())
    }
}
