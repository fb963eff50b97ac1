//! Configuración central de la aplicación.
//! Carga variables de entorno (.env) en una estructura inmutable (`AppConfig`).
//! Los valores controlan la latencia y el fallo simulados de los envíos.
use std::env;
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

use haven_adapters::SimulatedSubmissionService;

use crate::errors::CoreError;

pub const ENV_VOLUNTEER_DELAY_MS: &str = "HAVEN_VOLUNTEER_DELAY_MS";
pub const ENV_DONATION_DELAY_MS: &str = "HAVEN_DONATION_DELAY_MS";
pub const ENV_NEWSLETTER_DELAY_MS: &str = "HAVEN_NEWSLETTER_DELAY_MS";
pub const ENV_SIMULATE_FAILURE: &str = "HAVEN_SIMULATE_FAILURE";

/// Motivo usado por el servicio simulado cuando se fuerza el fallo.
pub const SIMULATED_FAILURE_REASON: &str = "simulated failure";

/// Configuración global de la aplicación.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppConfig {
    /// Parámetros de los envíos simulados.
    pub submission: SubmissionConfig,
}

/// Latencias (y fallo forzado) del servicio de envío simulado, por formulario.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionConfig {
    pub volunteer_delay: Duration,
    pub donation_delay: Duration,
    pub newsletter_delay: Duration,
    pub simulate_failure: bool,
}

impl Default for SubmissionConfig {
    fn default() -> Self {
        Self { volunteer_delay: Duration::from_millis(1500),
               donation_delay: Duration::from_millis(1500),
               newsletter_delay: Duration::from_millis(1000),
               simulate_failure: false }
    }
}

impl SubmissionConfig {
    pub fn volunteer_service(&self) -> Arc<SimulatedSubmissionService> {
        self.service(self.volunteer_delay)
    }

    pub fn donation_service(&self) -> Arc<SimulatedSubmissionService> {
        self.service(self.donation_delay)
    }

    pub fn newsletter_service(&self) -> Arc<SimulatedSubmissionService> {
        self.service(self.newsletter_delay)
    }

    fn service(&self, delay: Duration) -> Arc<SimulatedSubmissionService> {
        let service = SimulatedSubmissionService::new(delay);
        Arc::new(if self.simulate_failure { service.failing(SIMULATED_FAILURE_REASON) } else { service })
    }
}

impl AppConfig {
    /// Lee `.env` (si existe) y luego el entorno del proceso.
    pub fn from_env() -> Result<Self, CoreError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Construye la configuración a partir de una función de búsqueda; las
    /// claves ausentes toman su valor por defecto.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, CoreError>
        where F: Fn(&str) -> Option<String>
    {
        let defaults = SubmissionConfig::default();
        let delay = |key: &str, default: Duration| -> Result<Duration, CoreError> {
            Ok(parse_var::<u64>(&lookup, key)?.map(Duration::from_millis).unwrap_or(default))
        };
        let submission = SubmissionConfig { volunteer_delay: delay(ENV_VOLUNTEER_DELAY_MS, defaults.volunteer_delay)?,
                                            donation_delay: delay(ENV_DONATION_DELAY_MS, defaults.donation_delay)?,
                                            newsletter_delay: delay(ENV_NEWSLETTER_DELAY_MS, defaults.newsletter_delay)?,
                                            simulate_failure: parse_flag(&lookup, ENV_SIMULATE_FAILURE)?.unwrap_or(false) };
        Ok(AppConfig { submission })
    }
}

fn parse_var<T: FromStr>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Result<Option<T>, CoreError> {
    match lookup(key) {
        None => Ok(None),
        Some(raw) => raw.trim()
                        .parse()
                        .map(Some)
                        .map_err(|_| CoreError::Config(format!("{key}={raw}"))),
    }
}

fn parse_flag(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Result<Option<bool>, CoreError> {
    match lookup(key).map(|raw| raw.trim().to_ascii_lowercase()) {
        None => Ok(None),
        Some(v) if matches!(v.as_str(), "1" | "true" | "yes" | "on") => Ok(Some(true)),
        Some(v) if matches!(v.as_str(), "0" | "false" | "no" | "off" | "") => Ok(Some(false)),
        Some(v) => Err(CoreError::Config(format!("{key}={v}"))),
    }
}
