// Biblioteca raíz del crate `coursepick`.
// El motor de conflictos vive en `algorithm` (funciones puras); el resto es la
// frontera: store de documentos, API HTTP, edición y configuración.
pub mod algorithm;
pub mod api_json;
pub mod cli;
pub mod config;
pub mod edit;
pub mod error;
pub mod models;
pub mod server;
pub mod server_handlers;
pub mod store;

/// Ejecuta el servidor HTTP (reexport para facilitar uso desde `main`)
pub use server::run_server;
