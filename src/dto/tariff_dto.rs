use rust_decimal::Decimal;
use serde::Serialize;

use crate::models::tariff::VehicleTariff;
use crate::services::surcharge::SurchargePolicy;
use crate::services::time_context::NightWindow;

// Response con la tabla de tarifas vigente
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TariffsResponse {
    pub currency: &'static str,
    pub vat_rate: Decimal,
    pub tariffs: Vec<VehicleTariff>,
    pub surcharges: SurchargePolicy,
    pub night_window: NightWindow,
}
