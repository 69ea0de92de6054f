//! Configuración de variables de entorno
//!
//! Este módulo maneja la configuración del servidor. Valores ausentes toman
//! un default; valores presentes pero mal formados son un error.

use std::env;
use std::str::FromStr;

use anyhow::{Context, Result};

/// Leer una variable con default; error si existe pero no se puede parsear
pub(crate) fn var_or<T>(key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match env::var(key) {
        Ok(raw) if !raw.trim().is_empty() => raw
            .trim()
            .parse()
            .map_err(|e| anyhow::anyhow!("{}: {}", key, e))
            .with_context(|| format!("{} has an invalid value '{}'", key, raw)),
        _ => Ok(default),
    }
}

/// Leer una variable opcional; error si existe pero no se puede parsear
pub(crate) fn var_opt<T>(key: &str) -> Result<Option<T>>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match env::var(key) {
        Ok(raw) if !raw.trim().is_empty() => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|e| anyhow::anyhow!("{} has an invalid value '{}': {}", key, raw, e)),
        _ => Ok(None),
    }
}

/// Configuración del entorno
#[derive(Debug, Clone)]
pub struct EnvironmentConfig {
    pub environment: String,
    pub port: u16,
    pub host: String,
    pub cors_origins: Vec<String>,
    pub log_level: tracing::Level,
    /// Sin clave, las rutas de administración de zonas quedan abiertas
    pub admin_api_key: Option<String>,
}

impl Default for EnvironmentConfig {
    fn default() -> Self {
        Self {
            environment: "development".to_string(),
            port: 3000,
            host: "0.0.0.0".to_string(),
            cors_origins: Vec::new(),
            log_level: tracing::Level::INFO,
            admin_api_key: None,
        }
    }
}

impl EnvironmentConfig {
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();
        Ok(Self {
            environment: var_or("ENVIRONMENT", defaults.environment)?,
            port: var_or("PORT", defaults.port)?,
            host: var_or("HOST", defaults.host)?,
            cors_origins: env::var("CORS_ORIGINS")
                .map(|raw| {
                    raw.split(',')
                        .map(|s| s.trim().to_string())
                        .filter(|s| !s.is_empty())
                        .collect()
                })
                .unwrap_or_default(),
            log_level: var_or("LOG_LEVEL", defaults.log_level)?,
            admin_api_key: var_opt("ADMIN_API_KEY")?,
        })
    }

    /// Verificar si estamos en modo desarrollo
    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }

    /// Verificar si estamos en modo producción
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    /// Obtener la dirección del servidor
    pub fn server_url(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
