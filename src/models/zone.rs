//! Modelo de tarifas fijas por zona
//!
//! Un `ZoneFare` define un par origen/destino con un radio en cada extremo y
//! un precio fijo por tier. Los precios fijos incluyen el IVA.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::tariff::VehicleTier;
use crate::models::trip::GeoPoint;

/// Extremo de una zona
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ZoneEndpoint {
    pub name: String,
    pub lat: f64,
    pub lon: f64,
    pub radius_km: f64,
}

impl ZoneEndpoint {
    pub fn new(name: &str, lat: f64, lon: f64, radius_km: f64) -> Self {
        Self {
            name: name.to_string(),
            lat,
            lon,
            radius_km,
        }
    }

    pub fn center(&self) -> GeoPoint {
        GeoPoint::new(self.lat, self.lon)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ZoneFare {
    pub id: Uuid,
    pub name: String,
    pub origin: ZoneEndpoint,
    pub destination: ZoneEndpoint,
    pub prices: BTreeMap<VehicleTier, Decimal>,
    pub bidirectional: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ZoneFare {
    pub fn new(
        name: &str,
        origin: ZoneEndpoint,
        destination: ZoneEndpoint,
        prices: BTreeMap<VehicleTier, Decimal>,
        bidirectional: bool,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name: name.to_string(),
            origin,
            destination,
            prices,
            bidirectional,
            created_at: now,
            updated_at: now,
        }
    }

    /// Precio fijo del tier; 0 equivale a "sin precio" (el editor guarda 0 para campos vacíos)
    pub fn price_for(&self, tier: VehicleTier) -> Option<Decimal> {
        self.prices
            .get(&tier)
            .copied()
            .filter(|price| *price > Decimal::ZERO)
    }
}
