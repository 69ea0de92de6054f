use anyhow::Result;
use std::net::SocketAddr;
use tokio::signal;
use tracing::{error, info};
use dotenvy::dotenv;

use vtc_fare_engine::config::{EnvironmentConfig, PricingConfig};
use vtc_fare_engine::create_app;
use vtc_fare_engine::models::tariff::TariffTable;
use vtc_fare_engine::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();

    let config = EnvironmentConfig::from_env()?;

    // Configurar logging
    tracing_subscriber::fmt()
        .with_max_level(config.log_level)
        .init();

    info!("🚖 VTC Fare Engine - Cotización de trayectos");
    info!("================================================");

    let pricing = match PricingConfig::from_env() {
        Ok(pricing) => pricing,
        Err(e) => {
            error!("❌ Configuración de precios inválida: {:#}", e);
            return Err(e);
        }
    };
    let tariffs = TariffTable::swiss_default();

    info!("💶 IVA: {} | tiers: {}", pricing.vat_rate, tariffs.len());
    if config.admin_api_key.is_none() {
        info!("⚠️ ADMIN_API_KEY no definido: la edición de zonas queda abierta");
    }

    let addr: SocketAddr = config.server_url().parse()?;
    let app = create_app(AppState::new(config, pricing, tariffs));

    info!("🌐 Servidor iniciando en http://{}", addr);
    info!("🔍 Endpoints disponibles:");
    info!("   GET  /health - Health check");
    info!("   GET  /api/tariffs - Tabla de tarifas");
    info!("   POST /api/quotes - Cotizar un tier");
    info!("   POST /api/quotes/all - Cotizar todos los tiers");
    info!("🗺️ Endpoints - Zonas:");
    info!("   GET    /api/zones - Listar zonas");
    info!("   POST   /api/zones - Crear zona");
    info!("   GET    /api/zones/:id - Obtener zona");
    info!("   PUT    /api/zones/:id - Actualizar zona");
    info!("   DELETE /api/zones/:id - Eliminar zona");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        error!("❌ Error del servidor: {}", e);
        return Err(e.into());
    }

    info!("👋 Servidor terminado");
    Ok(())
}

/// Señal de apagado graceful
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("❌ No se pudo instalar el handler de Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                error!("❌ No se pudo instalar el handler de SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("🛑 Señal Ctrl+C recibida, apagando servidor...");
        },
        _ = terminate => {
            info!("🛑 Señal de terminación recibida, apagando servidor...");
        },
    }
}
