/// Configuración de la aplicación, leída de variables de entorno (y de un
/// `.env` si existe).
use std::env;
use std::path::PathBuf;

use tracing::Level;

use crate::error::ConfigError;

pub const DEFAULT_BIND: &str = "127.0.0.1:8080";
pub const DEFAULT_MAX_EDIT_ATTEMPTS: u32 = 3;

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Dirección del servidor HTTP (`COURSEPICK_BIND`)
    pub bind_addr: String,
    /// Documento de horario a cargar (`COURSEPICK_SCHEDULE`). Sin valor se usa el de ejemplo.
    pub schedule_path: Option<PathBuf>,
    /// Intentos antes de abandonar una edición (`COURSEPICK_MAX_EDIT_ATTEMPTS`)
    pub max_edit_attempts: u32,
    /// Nivel de log (`COURSEPICK_LOG`)
    pub log_level: Level,
    /// Usuario con el que `move` se considera autenticado (`COURSEPICK_USER`)
    pub user_name: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            bind_addr: DEFAULT_BIND.to_string(),
            schedule_path: None,
            max_edit_attempts: DEFAULT_MAX_EDIT_ATTEMPTS,
            log_level: Level::INFO,
            user_name: None,
        }
    }
}

fn load_dotenv() {
    let _ = dotenv::dotenv();
}

impl AppConfig {
    /// Lee la configuración del entorno del proceso.
    pub fn from_env() -> Result<Self, ConfigError> {
        load_dotenv();
        AppConfig::from_lookup(|key| env::var(key).ok())
    }

    /// Igual que `from_env` pero con una función de búsqueda inyectable (tests).
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut cfg = AppConfig::default();
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        if let Some(bind) = get("COURSEPICK_BIND") {
            cfg.bind_addr = bind;
        }
        if let Some(path) = get("COURSEPICK_SCHEDULE") {
            cfg.schedule_path = Some(PathBuf::from(path));
        }
        if let Some(raw) = get("COURSEPICK_MAX_EDIT_ATTEMPTS") {
            cfg.max_edit_attempts = match raw.parse::<u32>() {
                Ok(n) if n >= 1 => n,
                _ => return Err(invalid("COURSEPICK_MAX_EDIT_ATTEMPTS", &raw, "expected an integer >= 1")),
            };
        }
        if let Some(raw) = get("COURSEPICK_LOG") {
            cfg.log_level = raw
                .parse::<Level>()
                .map_err(|_| invalid("COURSEPICK_LOG", &raw, "expected trace, debug, info, warn or error"))?;
        }
        cfg.user_name = get("COURSEPICK_USER");
        Ok(cfg)
    }
}

fn invalid(key: &str, value: &str, reason: &str) -> ConfigError {
    ConfigError::InvalidValue {
        key: key.to_string(),
        value: value.to_string(),
        reason: reason.to_string(),
    }
}
