use std::sync::Arc;

use rust_decimal::Decimal;
use tracing::info;
use validator::Validate;

use crate::config::pricing::PricingConfig;
use crate::dto::quote_dto::{QuoteRequest, QuoteResponse, QuotesResponse, TripRequest};
use crate::dto::tariff_dto::TariffsResponse;
use crate::models::tariff::{TariffTable, VehicleTier};
use crate::models::trip::{GeoPoint, TripParameters};
use crate::services::fare_estimator::FareEstimator;
use crate::services::geo::{estimate_duration_min, haversine_km};
use crate::services::time_context::TimeContext;
use crate::services::zone_registry::ZoneRegistry;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::money::CURRENCY;

/// Trayecto listo para el estimador
#[derive(Debug, Clone)]
pub struct ResolvedTrip {
    pub trip: TripParameters,
    pub endpoints: Option<(GeoPoint, GeoPoint)>,
    pub vat_rate: Decimal,
}

pub struct QuoteController {
    estimator: Arc<FareEstimator>,
    tariffs: Arc<TariffTable>,
    pricing: Arc<PricingConfig>,
    zones: ZoneRegistry,
}

impl QuoteController {
    pub fn new(state: &AppState) -> Self {
        Self {
            estimator: state.estimator.clone(),
            tariffs: state.tariffs.clone(),
            pricing: state.pricing.clone(),
            zones: state.zones.clone(),
        }
    }

    /// Completar distancia, duración y banderas horarias a partir de la petición.
    ///
    /// Los valores explícitos ganan: distancia manual sobre la haversine,
    /// banderas explícitas sobre las derivadas de `pickup_time`.
    pub fn resolve(&self, request: TripRequest) -> Result<ResolvedTrip, AppError> {
        let endpoints = request.pickup.zip(request.destination);

        let distance_km = match (request.distance_km, endpoints) {
            (Some(distance), _) => distance,
            (None, Some((pickup, destination))) => haversine_km(pickup, destination),
            (None, None) => {
                return Err(AppError::BadRequest(
                    "distanceKm or both pickup and destination are required".to_string(),
                ))
            }
        };
        let duration_min = request
            .duration_min
            .unwrap_or_else(|| estimate_duration_min(distance_km));

        let derived = request
            .pickup_time
            .map(|time| TimeContext::from_local(time, &self.pricing.night_window));

        let trip = TripParameters {
            distance_km,
            duration_min,
            is_night: request
                .is_night
                .or(derived.map(|c| c.is_night))
                .unwrap_or(false),
            is_weekend: request
                .is_weekend
                .or(derived.map(|c| c.is_weekend))
                .unwrap_or(false),
            supplements: request.supplements,
            wait_hours: request.wait_hours,
        };

        Ok(ResolvedTrip {
            trip,
            endpoints,
            vat_rate: request.vat_rate.unwrap_or(self.pricing.vat_rate),
        })
    }

    pub async fn quote(&self, request: QuoteRequest) -> Result<QuoteResponse, AppError> {
        request.validate()?;
        let tier: VehicleTier = request.tier.parse()?;
        let resolved = self.resolve(request.trip)?;
        let zones = self.zones.snapshot().await;

        let breakdown = self.estimator.quote(
            tier,
            &resolved.trip,
            resolved.endpoints,
            &self.tariffs,
            &zones,
            resolved.vat_rate,
        )?;

        info!(
            "💰 Cotización {} ({:?}): {:.1} km -> {} {}",
            tier, breakdown.source, resolved.trip.distance_km, breakdown.total, CURRENCY
        );

        Ok(QuoteResponse {
            distance_km: resolved.trip.distance_km,
            duration_min: resolved.trip.duration_min,
            is_night: resolved.trip.is_night,
            is_weekend: resolved.trip.is_weekend,
            breakdown,
        })
    }

    /// Un desglose por cada tier de la tabla
    pub async fn quote_all(&self, request: TripRequest) -> Result<QuotesResponse, AppError> {
        request.validate()?;
        let resolved = self.resolve(request)?;
        let zones = self.zones.snapshot().await;

        let quotes = self
            .tariffs
            .iter()
            .map(|tariff| {
                self.estimator.quote(
                    tariff.id,
                    &resolved.trip,
                    resolved.endpoints,
                    &self.tariffs,
                    &zones,
                    resolved.vat_rate,
                )
            })
            .collect::<Result<Vec<_>, _>>()?;

        info!(
            "💰 Cotización de {} tiers para {:.1} km",
            quotes.len(),
            resolved.trip.distance_km
        );

        Ok(QuotesResponse {
            distance_km: resolved.trip.distance_km,
            duration_min: resolved.trip.duration_min,
            is_night: resolved.trip.is_night,
            is_weekend: resolved.trip.is_weekend,
            quotes,
        })
    }

    pub fn tariffs(&self) -> TariffsResponse {
        TariffsResponse {
            currency: CURRENCY,
            vat_rate: self.pricing.vat_rate,
            tariffs: self.tariffs.iter().cloned().collect(),
            surcharges: self.estimator.policy().clone(),
            night_window: self.pricing.night_window,
        }
    }
}
