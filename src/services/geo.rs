//! Geometría de trayectos
//!
//! Distancia ortodrómica y estimación de duración cuando la capa de mapas
//! no entrega una duración de ruta.

use crate::models::trip::GeoPoint;

const EARTH_RADIUS_KM: f64 = 6371.0;
const AVERAGE_SPEED_KMH: f64 = 38.0;
const MIN_DURATION_MIN: f64 = 6.0;

/// Distancia haversine en km
pub fn haversine_km(from: GeoPoint, to: GeoPoint) -> f64 {
    let d_lat = (to.lat - from.lat).to_radians();
    let d_lon = (to.lon - from.lon).to_radians();
    let a = (d_lat / 2.0).sin().powi(2)
        + from.lat.to_radians().cos() * to.lat.to_radians().cos() * (d_lon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
    EARTH_RADIUS_KM * c
}

/// Duración estimada en minutos enteros (38 km/h, mínimo 6 min)
pub fn estimate_duration_min(distance_km: f64) -> f64 {
    if distance_km <= 0.0 {
        return 0.0;
    }
    (distance_km / AVERAGE_SPEED_KMH * 60.0).round().max(MIN_DURATION_MIN)
}
