//! Utilidades de montos en CHF
//!
//! Todos los importes son `Decimal` de punto fijo; el redondeo a centimos
//! se hace una sola vez, al final del cálculo.

use rust_decimal::prelude::FromPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::utils::errors::PricingError;

/// Moneda única soportada
pub const CURRENCY: &str = "CHF";

/// Redondeo comercial a 2 decimales (0.005 -> 0.01)
pub fn round2(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Convertir una magnitud física (km, minutos, horas) a `Decimal`
pub fn decimal_from_f64(value: f64, field: &str) -> Result<Decimal, PricingError> {
    if !value.is_finite() {
        return Err(PricingError::invalid(format!("{} must be a finite number", field)));
    }
    Decimal::from_f64(value)
        .ok_or_else(|| PricingError::invalid(format!("{} is out of range", field)))
}

/// Producto que falla con `InvalidInput` en lugar de desbordar
pub fn checked_mul(a: Decimal, b: Decimal, field: &str) -> Result<Decimal, PricingError> {
    a.checked_mul(b)
        .ok_or_else(|| PricingError::invalid(format!("{}: amount out of range", field)))
}

/// Suma que falla con `InvalidInput` en lugar de desbordar
pub fn checked_add(a: Decimal, b: Decimal, field: &str) -> Result<Decimal, PricingError> {
    a.checked_add(b)
        .ok_or_else(|| PricingError::invalid(format!("{}: amount out of range", field)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round2_half_up() {
        assert_eq!(round2(Decimal::new(191706, 3)), Decimal::new(19171, 2));
        assert_eq!(round2(Decimal::new(2396325, 4)), Decimal::new(23963, 2));
        assert_eq!(round2(Decimal::new(1005, 3)), Decimal::new(101, 2));
    }

    #[test]
    fn test_decimal_from_f64_rejects_nan() {
        assert!(decimal_from_f64(f64::NAN, "distance_km").is_err());
        assert!(decimal_from_f64(f64::INFINITY, "distance_km").is_err());
        assert_eq!(decimal_from_f64(68.0, "distance_km").unwrap(), Decimal::from(68));
    }

    #[test]
    fn test_checked_ops_report_overflow() {
        assert_eq!(checked_mul(Decimal::new(25, 1), Decimal::from(4), "x").unwrap(), Decimal::TEN);
        assert!(matches!(
            checked_mul(Decimal::MAX, Decimal::TWO, "distance_cost"),
            Err(PricingError::InvalidInput(_))
        ));
        assert!(matches!(
            checked_add(Decimal::MAX, Decimal::ONE, "subtotal"),
            Err(PricingError::InvalidInput(_))
        ));
    }
}
