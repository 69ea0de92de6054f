//! Desglose de precio devuelto por el estimador

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::tariff::VehicleTier;

/// Origen del precio
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PriceSource {
    Computed,
    Zone,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SurchargeKind {
    Night,
    Weekend,
    Premium,
    ChildSeat,
    ExtraWait,
}

/// Línea de suplemento aplicada, en orden de aplicación
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SurchargeLine {
    pub kind: SurchargeKind,
    pub label: String,
    pub amount: Decimal,
}

/// Desglose de precio.
///
/// Para precios calculados, `subtotal` es base + distancia + tiempo, antes de
/// suplementos. Para precios de zona (`source = zone`) no hay componentes:
/// base, distancia y tiempo valen 0 y `subtotal` es el neto sin IVA del
/// precio fijo. Solo `total` está redondeado a centimos.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceBreakdown {
    pub tier: VehicleTier,
    pub source: PriceSource,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zone_id: Option<Uuid>,
    pub base: Decimal,
    pub distance_cost: Decimal,
    pub time_cost: Decimal,
    pub subtotal: Decimal,
    pub surcharges: Vec<SurchargeLine>,
    pub subtotal_after_surcharges: Decimal,
    pub vat_rate: Decimal,
    pub vat: Decimal,
    pub total: Decimal,
    pub currency: String,
}
