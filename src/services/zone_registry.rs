//! Registro de zonas de precio fijo
//!
//! Almacén en memoria editado por la administración y leído por cada
//! cotización. Conserva el orden de creación, que decide la prioridad entre
//! zonas solapadas.

use std::sync::Arc;

use chrono::Utc;
use tokio::sync::RwLock;
use tracing::info;
use uuid::Uuid;

use crate::models::zone::ZoneFare;

#[derive(Clone, Default)]
pub struct ZoneRegistry {
    zones: Arc<RwLock<Vec<ZoneFare>>>,
}

impl ZoneRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copia de las zonas actuales, para cotizar sin retener el lock
    pub async fn snapshot(&self) -> Vec<ZoneFare> {
        self.zones.read().await.clone()
    }

    pub async fn get(&self, id: Uuid) -> Option<ZoneFare> {
        self.zones.read().await.iter().find(|z| z.id == id).cloned()
    }

    pub async fn insert(&self, zone: ZoneFare) -> ZoneFare {
        let mut zones = self.zones.write().await;
        info!("🗺️ Zona creada: '{}' ({})", zone.name, zone.id);
        zones.push(zone.clone());
        zone
    }

    /// Reemplazar una zona conservando id, posición y fecha de creación
    pub async fn replace(&self, id: Uuid, mut zone: ZoneFare) -> Option<ZoneFare> {
        let mut zones = self.zones.write().await;
        let slot = zones.iter_mut().find(|z| z.id == id)?;
        zone.id = id;
        zone.created_at = slot.created_at;
        zone.updated_at = Utc::now();
        *slot = zone.clone();
        info!("🗺️ Zona actualizada: '{}' ({})", zone.name, id);
        Some(zone)
    }

    pub async fn remove(&self, id: Uuid) -> Option<ZoneFare> {
        let mut zones = self.zones.write().await;
        let index = zones.iter().position(|z| z.id == id)?;
        let removed = zones.remove(index);
        info!("🗺️ Zona eliminada: '{}' ({})", removed.name, id);
        Some(removed)
    }

    pub async fn len(&self) -> usize {
        self.zones.read().await.len()
    }
}
