//! Búsqueda de tarifa fija por zona
//!
//! Una zona coincide si la recogida cae en el radio de origen y el destino en
//! el radio de destino (o al revés si la zona es bidireccional). Gana la
//! primera zona coincidente con precio para el tier.

use rust_decimal::Decimal;
use tracing::debug;
use uuid::Uuid;

use crate::models::tariff::VehicleTier;
use crate::models::trip::GeoPoint;
use crate::models::zone::{ZoneEndpoint, ZoneFare};
use crate::services::geo::haversine_km;
use crate::utils::errors::PricingError;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoneMatch {
    pub zone_id: Uuid,
    pub fixed_price: Decimal,
}

fn within(endpoint: &ZoneEndpoint, point: GeoPoint) -> bool {
    haversine_km(endpoint.center(), point) <= endpoint.radius_km
}

/// Cobertura geográfica de la zona, sin mirar precios
pub fn covers(zone: &ZoneFare, pickup: GeoPoint, destination: GeoPoint) -> bool {
    let forward = within(&zone.origin, pickup) && within(&zone.destination, destination);
    forward || (zone.bidirectional && within(&zone.origin, destination) && within(&zone.destination, pickup))
}

/// Precio fijo del tier en una zona que cubre el trayecto
pub fn zone_price(zone: &ZoneFare, tier: VehicleTier) -> Result<Decimal, PricingError> {
    zone.price_for(tier).ok_or_else(|| {
        PricingError::Configuration(format!("zone '{}' has no price for tier '{}'", zone.name, tier))
    })
}

pub fn find_zone_fare<'a, I>(
    zones: I,
    pickup: GeoPoint,
    destination: GeoPoint,
    tier: VehicleTier,
) -> Option<ZoneMatch>
where
    I: IntoIterator<Item = &'a ZoneFare>,
{
    for zone in zones {
        if !covers(zone, pickup, destination) {
            continue;
        }
        match zone_price(zone, tier) {
            Ok(fixed_price) => {
                return Some(ZoneMatch {
                    zone_id: zone.id,
                    fixed_price,
                })
            }
            Err(e) => debug!("🗺️ Zona ignorada: {}", e),
        }
    }
    None
}
