//! Estimador de tarifas
//!
//! Cálculo puro y determinista: mismas entradas, mismo `PriceBreakdown`.
//! Sin E/S, sin estado mutable y sin reloj interno; se puede llamar desde
//! cualquier número de tareas a la vez.
//!
//! Orden del cálculo:
//! 1. `base = tariff.base_fare`
//! 2. `distance_cost = price_per_km * distance_km`
//! 3. `time_cost = price_per_min * duration_min` (0 sin tarifa por minuto)
//! 4. `subtotal = base + distance_cost + time_cost`
//! 5. suplementos (ver [`SurchargePolicy`])
//! 6. `vat = subtotal_after_surcharges * vat_rate`
//! 7. `total = round2(subtotal_after_surcharges + vat)`

use rust_decimal::Decimal;
use tracing::debug;

use crate::models::quote::{PriceBreakdown, PriceSource};
use crate::models::tariff::{TariffTable, VehicleTariff, VehicleTier};
use crate::models::trip::{GeoPoint, TripParameters};
use crate::models::zone::ZoneFare;
use crate::services::surcharge::SurchargePolicy;
use crate::services::zone_matcher::{find_zone_fare, ZoneMatch};
use crate::utils::errors::PricingError;
use crate::utils::money::{checked_add, checked_mul, decimal_from_f64, round2, CURRENCY};
use crate::utils::validation::{validate_non_negative, validate_vat_rate};

#[derive(Debug, Clone, Default)]
pub struct FareEstimator {
    policy: SurchargePolicy,
}

impl FareEstimator {
    pub fn new(policy: SurchargePolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> &SurchargePolicy {
        &self.policy
    }

    /// Precio calculado por distancia y tiempo
    pub fn estimate(
        &self,
        trip: &TripParameters,
        tariff: &VehicleTariff,
        vat_rate: Decimal,
    ) -> Result<PriceBreakdown, PricingError> {
        let vat_rate = validate_vat_rate(vat_rate)?;
        let distance_km = decimal_from_f64(validate_non_negative(trip.distance_km, "distance_km")?, "distance_km")?;
        let duration_min = decimal_from_f64(validate_non_negative(trip.duration_min, "duration_min")?, "duration_min")?;

        let base = tariff.base_fare;
        let distance_cost = checked_mul(tariff.price_per_km, distance_km, "distance_cost")?;
        let time_cost = checked_mul(
            tariff.price_per_min.unwrap_or(Decimal::ZERO),
            duration_min,
            "time_cost",
        )?;
        let subtotal = checked_add(checked_add(base, distance_cost, "subtotal")?, time_cost, "subtotal")?;
        if subtotal < Decimal::ZERO {
            return Err(PricingError::invalid(format!(
                "tariff '{}' yields a negative subtotal",
                tariff.id
            )));
        }

        let (subtotal_after_surcharges, surcharges) = self.policy.apply(subtotal, trip)?;
        let vat = checked_mul(subtotal_after_surcharges, vat_rate, "vat")?;
        let total = round2(checked_add(subtotal_after_surcharges, vat, "total")?);

        debug!(
            "💰 Tarifa {}: {} km, {} min -> {} {}",
            tariff.id, trip.distance_km, trip.duration_min, total, CURRENCY
        );

        Ok(PriceBreakdown {
            tier: tariff.id,
            source: PriceSource::Computed,
            zone_id: None,
            base,
            distance_cost,
            time_cost,
            subtotal,
            surcharges,
            subtotal_after_surcharges,
            vat_rate,
            vat,
            total,
            currency: CURRENCY.to_string(),
        })
    }

    /// Cotización completa: zona de precio fijo si cubre el trayecto, si no cálculo.
    pub fn quote<'a, I>(
        &self,
        tier: VehicleTier,
        trip: &TripParameters,
        endpoints: Option<(GeoPoint, GeoPoint)>,
        tariffs: &TariffTable,
        zones: I,
        vat_rate: Decimal,
    ) -> Result<PriceBreakdown, PricingError>
    where
        I: IntoIterator<Item = &'a ZoneFare>,
    {
        let tariff = tariffs.get(tier)?;
        let vat_rate = validate_vat_rate(vat_rate)?;
        validate_non_negative(trip.distance_km, "distance_km")?;
        validate_non_negative(trip.duration_min, "duration_min")?;

        if let Some((pickup, destination)) = endpoints {
            if let Some(found) = find_zone_fare(zones, pickup, destination, tier) {
                debug!("🗺️ Tarifa de zona {} aplicada a {}", found.zone_id, tier);
                return Ok(zone_breakdown(tier, found, vat_rate));
            }
        }

        self.estimate(trip, tariff, vat_rate)
    }
}

/// Desglose de un precio fijo de zona.
///
/// Los precios de zona incluyen IVA: `total` es exactamente el precio fijo y
/// el IVA contenido se informa como `fixed - fixed / (1 + vat_rate)`.
/// No hay componentes base/distancia/tiempo: `subtotal` y
/// `subtotal_after_surcharges` llevan ambos el neto.
pub fn zone_breakdown(tier: VehicleTier, found: ZoneMatch, vat_rate: Decimal) -> PriceBreakdown {
    let net = found.fixed_price / (Decimal::ONE + vat_rate);
    PriceBreakdown {
        tier,
        source: PriceSource::Zone,
        zone_id: Some(found.zone_id),
        base: Decimal::ZERO,
        distance_cost: Decimal::ZERO,
        time_cost: Decimal::ZERO,
        subtotal: net,
        surcharges: Vec::new(),
        subtotal_after_surcharges: net,
        vat_rate,
        vat: found.fixed_price - net,
        total: found.fixed_price,
        currency: CURRENCY.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::trip::Supplement;
    use crate::models::zone::ZoneEndpoint;
    use std::collections::BTreeMap;

    fn hero_tariff() -> VehicleTariff {
        VehicleTariff::new(
            VehicleTier::Berline,
            "Berline",
            Decimal::from(8),
            Decimal::new(25, 1),
            Some(Decimal::ZERO),
            4,
        )
    }

    fn vat_77() -> Decimal {
        Decimal::new(77, 3)
    }

    #[test]
    fn test_hero_example_68_km() {
        let estimator = FareEstimator::default();
        let trip = TripParameters::new(68.0, 45.0);
        let quote = estimator.estimate(&trip, &hero_tariff(), vat_77()).unwrap();

        assert_eq!(quote.subtotal, Decimal::from(178));
        assert_eq!(quote.vat, Decimal::new(13706, 3));
        assert_eq!(quote.total, Decimal::new(19171, 2));
        assert_eq!(quote.source, PriceSource::Computed);
        assert_eq!(quote.currency, "CHF");
    }

    #[test]
    fn test_hero_example_at_night() {
        let estimator = FareEstimator::default();
        let trip = TripParameters::new(68.0, 45.0).with_night(true);
        let quote = estimator.estimate(&trip, &hero_tariff(), vat_77()).unwrap();

        assert_eq!(quote.subtotal, Decimal::from(178));
        assert_eq!(quote.subtotal_after_surcharges, Decimal::new(2225, 1));
        assert_eq!(quote.vat, Decimal::new(171325, 4));
        assert_eq!(quote.total, Decimal::new(23963, 2));
    }

    #[test]
    fn test_zero_distance_is_base_fare_plus_vat() {
        let estimator = FareEstimator::default();
        let table = TariffTable::swiss_default();
        for tariff in table.iter() {
            let quote = estimator
                .estimate(&TripParameters::new(0.0, 0.0), tariff, vat_77())
                .unwrap();
            assert_eq!(quote.total, round2(tariff.base_fare * (Decimal::ONE + vat_77())));
        }
    }

    #[test]
    fn test_missing_per_minute_rate_means_no_time_cost() {
        let mut tariff = hero_tariff();
        tariff.price_per_min = None;
        let quote = FareEstimator::default()
            .estimate(&TripParameters::new(10.0, 600.0), &tariff, Decimal::ZERO)
            .unwrap();
        assert_eq!(quote.time_cost, Decimal::ZERO);
        assert_eq!(quote.total, Decimal::from(33));
    }

    #[test]
    fn test_surcharges_combine_multiplicatively() {
        let estimator = FareEstimator::default();
        let trip = TripParameters::new(68.0, 0.0)
            .with_night(true)
            .with_supplement(Supplement::Premium);
        let quote = estimator.estimate(&trip, &hero_tariff(), Decimal::ZERO).unwrap();

        let expected = Decimal::from(178) * Decimal::new(125, 2) * Decimal::new(140, 2);
        assert_eq!(quote.subtotal_after_surcharges, expected);
        assert_ne!(quote.subtotal_after_surcharges, Decimal::from(178) * Decimal::new(165, 2));
    }

    #[test]
    fn test_monotonic_in_distance_and_duration() {
        let estimator = FareEstimator::default();
        let table = TariffTable::swiss_default();
        let tariff = table.get(VehicleTier::Van).unwrap();

        let mut previous = Decimal::ZERO;
        for step in 0..50 {
            let trip = TripParameters::new(step as f64 * 3.7, 20.0).with_night(true);
            let total = estimator.estimate(&trip, tariff, vat_77()).unwrap().total;
            assert!(total >= previous);
            previous = total;
        }

        let mut previous = Decimal::ZERO;
        for step in 0..50 {
            let trip = TripParameters::new(20.0, step as f64 * 2.5);
            let total = estimator.estimate(&trip, tariff, vat_77()).unwrap().total;
            assert!(total >= previous);
            previous = total;
        }
    }

    #[test]
    fn test_deterministic() {
        let estimator = FareEstimator::default();
        let trip = TripParameters::new(33.3, 41.7)
            .with_weekend(true)
            .with_supplement(Supplement::ChildSeat);
        let tariff = TariffTable::swiss_default().get(VehicleTier::Eco).unwrap().clone();
        let first = estimator.estimate(&trip, &tariff, vat_77()).unwrap();
        let second = estimator.estimate(&trip, &tariff, vat_77()).unwrap();
        assert_eq!(first, second);
        assert_eq!(first.total, round2(first.subtotal_after_surcharges + first.vat));
    }

    #[test]
    fn test_invalid_inputs_rejected() {
        let estimator = FareEstimator::default();
        let tariff = hero_tariff();

        for trip in [TripParameters::new(-1.0, 0.0), TripParameters::new(1.0, -0.5)] {
            assert!(matches!(
                estimator.estimate(&trip, &tariff, vat_77()),
                Err(PricingError::InvalidInput(_))
            ));
        }
        assert!(estimator
            .estimate(&TripParameters::new(1.0, 1.0), &tariff, Decimal::ONE)
            .is_err());
        assert!(estimator
            .estimate(&TripParameters::new(1.0, 1.0), &tariff, Decimal::new(-1, 2))
            .is_err());
    }

    fn zone() -> ZoneFare {
        let mut prices = BTreeMap::new();
        prices.insert(VehicleTier::Eco, Decimal::new(85, 0));
        ZoneFare::new(
            "GVA - Lausanne",
            ZoneEndpoint::new("Aeroport de Geneve", 46.2381, 6.1089, 2.0),
            ZoneEndpoint::new("Lausanne", 46.5197, 6.6323, 3.0),
            prices,
            true,
        )
    }

    #[test]
    fn test_zone_takes_precedence() {
        let estimator = FareEstimator::default();
        let tariffs = TariffTable::swiss_default();
        let zones = vec![zone()];
        let endpoints = Some((GeoPoint::new(46.2381, 6.1089), GeoPoint::new(46.5197, 6.6323)));

        // La distancia declarada no importa
        for distance in [0.0, 51.0, 500.0] {
            let trip = TripParameters::new(distance, 45.0).with_night(true);
            let quote = estimator
                .quote(VehicleTier::Eco, &trip, endpoints, &tariffs, &zones, vat_77())
                .unwrap();
            assert_eq!(quote.source, PriceSource::Zone);
            assert_eq!(quote.total, Decimal::from(85));
            assert_eq!(quote.base, Decimal::ZERO);
            assert_eq!(quote.distance_cost, Decimal::ZERO);
            assert_eq!(quote.time_cost, Decimal::ZERO);
            assert_eq!(quote.zone_id, Some(zones[0].id));
            assert_eq!(quote.subtotal + quote.vat, Decimal::from(85));
            assert_eq!(quote.subtotal, quote.subtotal_after_surcharges);
            assert!(quote.surcharges.is_empty());
        }
    }

    #[test]
    fn test_zone_without_tier_price_falls_back_to_computed() {
        let estimator = FareEstimator::default();
        let tariffs = TariffTable::swiss_default();
        let zones = vec![zone()];
        let endpoints = Some((GeoPoint::new(46.2381, 6.1089), GeoPoint::new(46.5197, 6.6323)));
        let trip = TripParameters::new(51.0, 45.0);

        let quote = estimator
            .quote(VehicleTier::Van, &trip, endpoints, &tariffs, &zones, vat_77())
            .unwrap();
        assert_eq!(quote.source, PriceSource::Computed);
        assert_eq!(
            quote,
            estimator.estimate(&trip, tariffs.get(VehicleTier::Van).unwrap(), vat_77()).unwrap()
        );
    }

    #[test]
    fn test_quote_rejects_unknown_tier_and_negative_distance() {
        let estimator = FareEstimator::default();
        let tariffs = TariffTable::new([hero_tariff()]);
        let zones: Vec<ZoneFare> = Vec::new();

        let err = estimator
            .quote(VehicleTier::Bus, &TripParameters::new(1.0, 1.0), None, &tariffs, &zones, vat_77())
            .unwrap_err();
        assert!(matches!(err, PricingError::InvalidInput(_)));

        let err = estimator
            .quote(VehicleTier::Berline, &TripParameters::new(-3.0, 1.0), None, &tariffs, &zones, vat_77())
            .unwrap_err();
        assert!(matches!(err, PricingError::InvalidInput(_)));
    }

    #[test]
    fn test_computed_subtotal_is_sum_of_components() {
        let trip = TripParameters::new(42.0, 31.0).with_supplement(Supplement::ChildSeat);
        let table = TariffTable::swiss_default();
        for tariff in table.iter() {
            let quote = FareEstimator::default().estimate(&trip, tariff, vat_77()).unwrap();
            assert_eq!(quote.subtotal, quote.base + quote.distance_cost + quote.time_cost);
        }
    }

    #[test]
    fn test_huge_magnitudes_are_invalid_input() {
        let estimator = FareEstimator::default();
        let table = TariffTable::swiss_default();
        let bus = table.get(VehicleTier::Bus).unwrap();

        let trips = [
            TripParameters::new(1e28, 0.0)
                .with_night(true)
                .with_supplement(Supplement::Premium),
            TripParameters::new(0.0, 7e28).with_night(true),
            TripParameters::new(1.0, 0.0).with_wait_hours(7e27),
            TripParameters::new(1e30, 0.0),
        ];
        for trip in trips {
            assert!(matches!(
                estimator.estimate(&trip, bus, Decimal::new(81, 3)),
                Err(PricingError::InvalidInput(_))
            ));
        }
    }

    #[test]
    fn test_large_but_representable_distance_still_prices() {
        let estimator = FareEstimator::default();
        let table = TariffTable::swiss_default();
        let quote = estimator
            .estimate(&TripParameters::new(1e9, 0.0), table.get(VehicleTier::Eco).unwrap(), vat_77())
            .unwrap();
        assert!(quote.total > Decimal::from(2_500_000_000u64));
    }
}
