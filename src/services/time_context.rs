//! Contexto horario de una recogida
//!
//! Traduce una hora local de recogida, suministrada por el llamador, a las
//! banderas `is_night` / `is_weekend`. Nunca lee el reloj del sistema.

use chrono::{Datelike, NaiveDateTime, Timelike, Weekday};
use serde::{Deserialize, Serialize};

use crate::utils::errors::PricingError;

/// Franja nocturna [start_hour, end_hour), puede cruzar medianoche
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NightWindow {
    pub start_hour: u32,
    pub end_hour: u32,
}

impl Default for NightWindow {
    fn default() -> Self {
        Self {
            start_hour: 22,
            end_hour: 6,
        }
    }
}

impl NightWindow {
    pub fn new(start_hour: u32, end_hour: u32) -> Result<Self, PricingError> {
        if start_hour > 23 || end_hour > 23 {
            return Err(PricingError::invalid(format!(
                "night window hours must be in 0..=23, got {}..{}",
                start_hour, end_hour
            )));
        }
        Ok(Self { start_hour, end_hour })
    }

    pub fn contains(&self, hour: u32) -> bool {
        if self.start_hour <= self.end_hour {
            hour >= self.start_hour && hour < self.end_hour
        } else {
            hour >= self.start_hour || hour < self.end_hour
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeContext {
    pub is_night: bool,
    pub is_weekend: bool,
}

impl TimeContext {
    pub fn from_local(pickup_time: NaiveDateTime, window: &NightWindow) -> Self {
        Self {
            is_night: window.contains(pickup_time.hour()),
            is_weekend: matches!(pickup_time.weekday(), Weekday::Sat | Weekday::Sun),
        }
    }
}
