//! Parámetros de un trayecto
//!
//! `TripParameters` llega ya resuelto: distancia y duración vienen de la capa
//! de geocodificación (o de un valor manual) y las banderas de noche/fin de
//! semana las calcula el llamador a partir de un reloj de confianza.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Coordenada WGS84
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Validate)]
pub struct GeoPoint {
    #[validate(range(min = -90.0, max = 90.0))]
    pub lat: f64,
    #[validate(range(min = -180.0, max = 180.0))]
    pub lon: f64,
}

impl GeoPoint {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }
}

/// Suplementos opcionales
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Supplement {
    Premium,
    ChildSeat,
    ExtraWait,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TripParameters {
    pub distance_km: f64,
    pub duration_min: f64,
    #[serde(default)]
    pub is_night: bool,
    #[serde(default)]
    pub is_weekend: bool,
    #[serde(default)]
    pub supplements: BTreeSet<Supplement>,
    /// Horas de espera facturadas con `ExtraWait` (1 hora si no se indica)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wait_hours: Option<f64>,
}

impl TripParameters {
    pub fn new(distance_km: f64, duration_min: f64) -> Self {
        Self {
            distance_km,
            duration_min,
            is_night: false,
            is_weekend: false,
            supplements: BTreeSet::new(),
            wait_hours: None,
        }
    }

    pub fn with_night(mut self, is_night: bool) -> Self {
        self.is_night = is_night;
        self
    }

    pub fn with_weekend(mut self, is_weekend: bool) -> Self {
        self.is_weekend = is_weekend;
        self
    }

    pub fn with_supplement(mut self, supplement: Supplement) -> Self {
        self.supplements.insert(supplement);
        self
    }

    pub fn with_wait_hours(mut self, hours: f64) -> Self {
        self.supplements.insert(Supplement::ExtraWait);
        self.wait_hours = Some(hours);
        self
    }

    pub fn has(&self, supplement: Supplement) -> bool {
        self.supplements.contains(&supplement)
    }
}
