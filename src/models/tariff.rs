//! Modelo de tarifas por tipo de vehículo
//!
//! Un `VehicleTariff` por tier (eco, berline, van, bus, luxe). Son datos de
//! referencia inmutables: se construyen al arrancar y se leen en cada cotización.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::utils::errors::PricingError;

/// Tier de vehículo
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VehicleTier {
    Eco,
    Berline,
    Van,
    Bus,
    Luxe,
}

impl VehicleTier {
    pub const ALL: [VehicleTier; 5] = [
        VehicleTier::Eco,
        VehicleTier::Berline,
        VehicleTier::Van,
        VehicleTier::Bus,
        VehicleTier::Luxe,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            VehicleTier::Eco => "eco",
            VehicleTier::Berline => "berline",
            VehicleTier::Van => "van",
            VehicleTier::Bus => "bus",
            VehicleTier::Luxe => "luxe",
        }
    }
}

impl fmt::Display for VehicleTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for VehicleTier {
    type Err = PricingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "eco" => Ok(VehicleTier::Eco),
            "berline" => Ok(VehicleTier::Berline),
            "van" => Ok(VehicleTier::Van),
            "bus" => Ok(VehicleTier::Bus),
            "luxe" => Ok(VehicleTier::Luxe),
            other => Err(PricingError::invalid(format!("unknown vehicle tier '{}'", other))),
        }
    }
}

/// Tarifa de un tier
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VehicleTariff {
    pub id: VehicleTier,
    pub name: String,
    pub base_fare: Decimal,
    pub price_per_km: Decimal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_per_min: Option<Decimal>,
    pub capacity: u32,
}

impl VehicleTariff {
    pub fn new(
        id: VehicleTier,
        name: &str,
        base_fare: Decimal,
        price_per_km: Decimal,
        price_per_min: Option<Decimal>,
        capacity: u32,
    ) -> Self {
        Self {
            id,
            name: name.to_string(),
            base_fare,
            price_per_km,
            price_per_min,
            capacity,
        }
    }
}

/// Tabla de tarifas indexada por tier
#[derive(Debug, Clone, Default)]
pub struct TariffTable {
    tariffs: BTreeMap<VehicleTier, VehicleTariff>,
}

impl TariffTable {
    pub fn new(tariffs: impl IntoIterator<Item = VehicleTariff>) -> Self {
        Self {
            tariffs: tariffs.into_iter().map(|t| (t.id, t)).collect(),
        }
    }

    /// Tabla por defecto para Suisse Romande (CHF)
    pub fn swiss_default() -> Self {
        Self::new([
            VehicleTariff::new(
                VehicleTier::Eco,
                "Eco",
                Decimal::new(600, 2),
                Decimal::new(250, 2),
                Some(Decimal::new(40, 2)),
                4,
            ),
            VehicleTariff::new(
                VehicleTier::Berline,
                "Berline Luxe",
                Decimal::new(1000, 2),
                Decimal::new(350, 2),
                Some(Decimal::new(60, 2)),
                4,
            ),
            VehicleTariff::new(
                VehicleTier::Van,
                "Van Premium",
                Decimal::new(1500, 2),
                Decimal::new(450, 2),
                Some(Decimal::new(80, 2)),
                7,
            ),
            VehicleTariff::new(
                VehicleTier::Bus,
                "Minibus",
                Decimal::new(2500, 2),
                Decimal::new(600, 2),
                Some(Decimal::new(100, 2)),
                50,
            ),
            VehicleTariff::new(
                VehicleTier::Luxe,
                "Luxe",
                Decimal::new(2000, 2),
                Decimal::new(500, 2),
                Some(Decimal::new(120, 2)),
                3,
            ),
        ])
    }

    /// Tarifa de un tier; un tier sin tarifa es un error del llamador
    pub fn get(&self, tier: VehicleTier) -> Result<&VehicleTariff, PricingError> {
        self.tariffs
            .get(&tier)
            .ok_or_else(|| PricingError::invalid(format!("no tariff configured for tier '{}'", tier)))
    }

    pub fn lookup(&self, tier: &str) -> Result<&VehicleTariff, PricingError> {
        self.get(tier.parse()?)
    }

    pub fn contains(&self, tier: VehicleTier) -> bool {
        self.tariffs.contains_key(&tier)
    }

    pub fn iter(&self) -> impl Iterator<Item = &VehicleTariff> {
        self.tariffs.values()
    }

    pub fn len(&self) -> usize {
        self.tariffs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tariffs.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_tier() {
        assert_eq!("eco".parse::<VehicleTier>().unwrap(), VehicleTier::Eco);
        assert_eq!(" Luxe ".parse::<VehicleTier>().unwrap(), VehicleTier::Luxe);
        assert!(matches!(
            "limousine".parse::<VehicleTier>(),
            Err(PricingError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_swiss_default_covers_every_tier() {
        let table = TariffTable::swiss_default();
        assert_eq!(table.len(), VehicleTier::ALL.len());
        for tier in VehicleTier::ALL {
            assert!(table.contains(tier), "missing {}", tier);
        }
        assert_eq!(table.get(VehicleTier::Bus).unwrap().capacity, 50);
    }

    #[test]
    fn test_missing_tier_is_invalid_input() {
        let table = TariffTable::new([TariffTable::swiss_default().get(VehicleTier::Eco).unwrap().clone()]);
        assert!(table.get(VehicleTier::Eco).is_ok());
        assert!(matches!(table.get(VehicleTier::Van), Err(PricingError::InvalidInput(_))));
        assert!(table.lookup("bogus").is_err());
    }

    #[test]
    fn test_tier_serializes_lowercase() {
        let json = serde_json::to_string(&VehicleTier::Berline).unwrap();
        assert_eq!(json, "\"berline\"");
    }
}
