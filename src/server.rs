use std::sync::Arc;

use actix_cors::Cors;
use actix_web::{web, App, HttpRequest, HttpServer};
use tracing::info;

use crate::models::Identity;
use crate::server_handlers::*;
use crate::store::{ScheduleFeed, ScheduleStore};

/// Cabecera con el nombre del usuario autenticado. La pone el proxy de
/// autenticación que está delante del servidor; sin ella el usuario es anónimo.
pub const USER_HEADER: &str = "X-User-Name";

/// Contexto explícito compartido por los handlers (nada de estado global).
pub struct AppState {
    pub store: Arc<dyn ScheduleStore>,
    pub feed: ScheduleFeed,
    pub max_edit_attempts: u32,
}

impl AppState {
    pub fn new(store: Arc<dyn ScheduleStore>, max_edit_attempts: u32) -> Self {
        let feed = ScheduleFeed::from_store(store.as_ref());
        AppState { store, feed, max_edit_attempts }
    }
}

/// Identidad del request, si la hay.
pub fn identity_from_request(req: &HttpRequest) -> Option<Identity> {
    req.headers()
        .get(USER_HEADER)
        .and_then(|v| v.to_str().ok())
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(|name| Identity { display_name: name.to_string() })
}

/// Registra todas las rutas. Se usa tanto en `run_server` como en los tests.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/session", web::get().to(session_handler))
        .route("/terms", web::get().to(terms_handler))
        .route("/schedule", web::get().to(schedule_handler))
        .route("/courses", web::get().to(courses_handler))
        .route("/courses/{id}/meets", web::put().to(update_meets_handler))
        .route("/selection/toggle", web::post().to(toggle_handler))
        .route("/selection/validate", web::post().to(validate_handler))
        .route("/help", web::get().to(help_handler));
}

pub async fn run_server(bind_addr: &str, state: AppState) -> std::io::Result<()> {
    let state = web::Data::new(state);
    info!("listening on http://{}", bind_addr);
    HttpServer::new(move || {
        App::new()
            .wrap(Cors::permissive())
            .app_data(state.clone())
            .configure(configure)
    })
    .bind(bind_addr)?
    .run()
    .await
}
