//! Tipos de error de la frontera (store, carga de documentos, configuración,
//! edición). El motor de conflictos no tiene errores: un horario inválido es
//! simplemente un curso sin `TimeSlot`.

use thiserror::Error;

/// Fallos del store de documentos.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// No existe `courses/{id}` en el documento actual
    #[error("Course not found: {id}")]
    CourseNotFound { id: String },

    /// Todavía no ha llegado ningún documento
    #[error("No schedule document loaded yet")]
    NotLoaded,

    /// El store rechazó o no pudo completar la escritura
    #[error("Store unavailable: {message}")]
    Unavailable { message: String },
}

impl StoreError {
    /// Mensaje pensado para mostrarse al usuario como notificación.
    pub fn notification(&self) -> String {
        match self {
            StoreError::CourseNotFound { id } => format!("Could not save: course {} no longer exists", id),
            StoreError::NotLoaded => "Could not save: the schedule has not loaded yet".to_string(),
            StoreError::Unavailable { message } => format!("Could not save: {}", message),
        }
    }
}

/// Errores al leer un documento de horario.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Failed to read schedule file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// El JSON es válido pero no tiene forma de documento de horario
    #[error("Unexpected document shape: {message}")]
    Shape { message: String },
}

/// Valor inválido en una variable de configuración.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {value:?} ({reason})")]
    InvalidValue { key: String, value: String, reason: String },
}

/// Errores del flujo de edición de horario.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EditError {
    /// Sólo un usuario autenticado puede mover cursos
    #[error("Sign in to edit meeting times")]
    NotSignedIn,

    /// El texto no cumple el formato "DÍAS H:MM-H:MM"
    #[error("Invalid meeting time {meets:?}, expected something like \"MWF 11:00-11:50\"")]
    InvalidMeets { meets: String },

    #[error(transparent)]
    Store(#[from] StoreError),
}
