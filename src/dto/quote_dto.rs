use std::collections::BTreeSet;

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::quote::PriceBreakdown;
use crate::models::trip::{GeoPoint, Supplement};

// Datos del trayecto compartidos por las cotizaciones
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct TripRequest {
    #[validate(range(min = 0.0))]
    pub distance_km: Option<f64>,
    #[validate(range(min = 0.0))]
    pub duration_min: Option<f64>,
    #[validate]
    pub pickup: Option<GeoPoint>,
    #[validate]
    pub destination: Option<GeoPoint>,
    /// Hora local de recogida; de ella salen noche / fin de semana
    pub pickup_time: Option<NaiveDateTime>,
    pub is_night: Option<bool>,
    pub is_weekend: Option<bool>,
    #[serde(default)]
    pub supplements: BTreeSet<Supplement>,
    #[validate(range(min = 0.0))]
    pub wait_hours: Option<f64>,
    /// IVA puntual; por defecto el configurado
    pub vat_rate: Option<Decimal>,
}

// Request para cotizar un tier
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct QuoteRequest {
    pub tier: String,
    #[serde(flatten)]
    #[validate]
    pub trip: TripRequest,
}

// Response de una cotización
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteResponse {
    pub distance_km: f64,
    pub duration_min: f64,
    pub is_night: bool,
    pub is_weekend: bool,
    pub breakdown: PriceBreakdown,
}

// Response con un desglose por tier
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuotesResponse {
    pub distance_km: f64,
    pub duration_min: f64,
    pub is_night: bool,
    pub is_weekend: bool,
    pub quotes: Vec<PriceBreakdown>,
}
