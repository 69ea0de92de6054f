//! Utilidades del sistema
//!
//! Este módulo contiene utilidades para manejo de errores, validación
//! y montos en CHF.

pub mod errors;
pub mod money;
pub mod validation;
