//! Política de suplementos
//!
//! Orden fijo: noche -> fin de semana -> premium (multiplicativos sobre el
//! subtotal acumulado), luego silla de niño y espera (importes fijos, nunca
//! multiplicados).

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::quote::{SurchargeKind, SurchargeLine};
use crate::models::trip::{Supplement, TripParameters};
use crate::utils::errors::PricingError;
use crate::utils::money::{checked_add, checked_mul, decimal_from_f64};
use crate::utils::validation::validate_non_negative;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SurchargePolicy {
    pub night_multiplier: Decimal,
    /// `None` desactiva el suplemento de fin de semana
    pub weekend_multiplier: Option<Decimal>,
    pub premium_multiplier: Decimal,
    pub child_seat_fee: Decimal,
    pub wait_fee_per_hour: Decimal,
}

impl Default for SurchargePolicy {
    fn default() -> Self {
        Self {
            night_multiplier: Decimal::new(125, 2),
            weekend_multiplier: None,
            premium_multiplier: Decimal::new(140, 2),
            child_seat_fee: Decimal::new(500, 2),
            wait_fee_per_hour: Decimal::new(3000, 2),
        }
    }
}

impl SurchargePolicy {
    /// Multiplicadores < 1 o importes negativos romperían la no-negatividad del precio
    pub fn validate(&self) -> Result<(), PricingError> {
        let multipliers = [
            ("night_multiplier", Some(self.night_multiplier)),
            ("weekend_multiplier", self.weekend_multiplier),
            ("premium_multiplier", Some(self.premium_multiplier)),
        ];
        for (name, value) in multipliers {
            if let Some(m) = value {
                if m < Decimal::ONE {
                    return Err(PricingError::invalid(format!("{} must be >= 1, got {}", name, m)));
                }
            }
        }
        for (name, fee) in [
            ("child_seat_fee", self.child_seat_fee),
            ("wait_fee_per_hour", self.wait_fee_per_hour),
        ] {
            if fee < Decimal::ZERO {
                return Err(PricingError::invalid(format!("{} must be >= 0, got {}", name, fee)));
            }
        }
        Ok(())
    }

    /// Aplicar los suplementos del trayecto al subtotal.
    ///
    /// Devuelve el subtotal tras suplementos y las líneas aplicadas, sin redondear.
    pub fn apply(
        &self,
        subtotal: Decimal,
        trip: &TripParameters,
    ) -> Result<(Decimal, Vec<SurchargeLine>), PricingError> {
        let mut running = subtotal;
        let mut lines = Vec::new();

        let mut multiply = |running: &mut Decimal,
                            kind,
                            label: &str,
                            multiplier: Decimal|
         -> Result<(), PricingError> {
            let amount = checked_mul(*running, multiplier - Decimal::ONE, label)?;
            *running = checked_mul(*running, multiplier, label)?;
            lines.push(SurchargeLine {
                kind,
                label: label.to_string(),
                amount,
            });
            Ok(())
        };

        if trip.is_night {
            multiply(&mut running, SurchargeKind::Night, "Supplement nuit", self.night_multiplier)?;
        }
        if trip.is_weekend {
            if let Some(multiplier) = self.weekend_multiplier {
                multiply(&mut running, SurchargeKind::Weekend, "Supplement week-end", multiplier)?;
            }
        }
        if trip.has(Supplement::Premium) {
            multiply(&mut running, SurchargeKind::Premium, "Vehicule premium", self.premium_multiplier)?;
        }

        if trip.has(Supplement::ChildSeat) {
            running = checked_add(running, self.child_seat_fee, "child_seat_fee")?;
            lines.push(SurchargeLine {
                kind: SurchargeKind::ChildSeat,
                label: "Siege enfant".to_string(),
                amount: self.child_seat_fee,
            });
        }

        if trip.has(Supplement::ExtraWait) {
            let hours = validate_non_negative(trip.wait_hours.unwrap_or(1.0), "wait_hours")?;
            let amount = checked_mul(
                self.wait_fee_per_hour,
                decimal_from_f64(hours, "wait_hours")?,
                "wait_hours",
            )?;
            running = checked_add(running, amount, "wait_hours")?;
            lines.push(SurchargeLine {
                kind: SurchargeKind::ExtraWait,
                label: "Temps d'attente".to_string(),
                amount,
            });
        }

        Ok((running, lines))
    }
}
