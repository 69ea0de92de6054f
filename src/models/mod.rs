//! Modelos del sistema
//!
//! Tarifas, parámetros de trayecto, zonas de precio fijo y desglose de precio.
//! Todos son efímeros salvo las tarifas y zonas, que son datos de referencia.

pub mod quote;
pub mod tariff;
pub mod trip;
pub mod zone;
