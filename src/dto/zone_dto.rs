use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::Deserialize;
use validator::{Validate, ValidationError};

use crate::models::tariff::VehicleTier;
use crate::models::zone::{ZoneEndpoint, ZoneFare};
use crate::utils::validation::{validate_not_blank, validate_tier_prices};

fn default_radius_km() -> f64 {
    2.0
}

fn default_bidirectional() -> bool {
    true
}

// Extremo de zona tal como llega del editor de zonas
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
#[validate(schema(function = "validate_endpoint_request"))]
pub struct ZoneEndpointRequest {
    pub name: String,
    #[validate(range(min = -90.0, max = 90.0))]
    pub lat: f64,
    #[validate(range(min = -180.0, max = 180.0))]
    pub lon: f64,
    #[serde(default = "default_radius_km", alias = "radius_km")]
    pub radius_km: f64,
}

fn validate_endpoint_request(endpoint: &ZoneEndpointRequest) -> Result<(), ValidationError> {
    validate_not_blank(&endpoint.name)?;
    if endpoint.radius_km.is_nan() || endpoint.radius_km <= 0.0 {
        let mut error = ValidationError::new("radius_km");
        error.add_param("value".into(), &endpoint.radius_km);
        return Err(error);
    }
    Ok(())
}

impl From<ZoneEndpointRequest> for ZoneEndpoint {
    fn from(request: ZoneEndpointRequest) -> Self {
        ZoneEndpoint {
            name: request.name.trim().to_string(),
            lat: request.lat,
            lon: request.lon,
            radius_km: request.radius_km,
        }
    }
}

// Request para crear o reemplazar una zona
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
#[validate(schema(function = "validate_zone_request"))]
pub struct ZoneRequest {
    pub name: String,
    #[validate]
    pub origin: ZoneEndpointRequest,
    #[validate]
    pub destination: ZoneEndpointRequest,
    #[serde(default)]
    pub prices: BTreeMap<VehicleTier, Decimal>,
    #[serde(default = "default_bidirectional")]
    pub bidirectional: bool,
}

fn validate_zone_request(request: &ZoneRequest) -> Result<(), ValidationError> {
    validate_not_blank(&request.name)?;
    validate_tier_prices(&request.prices)
}

impl ZoneRequest {
    pub fn into_zone(self) -> ZoneFare {
        ZoneFare::new(
            self.name.trim(),
            self.origin.into(),
            self.destination.into(),
            self.prices,
            self.bidirectional,
        )
    }
}
