use actix_web::{web, HttpRequest, HttpResponse, Responder};
use serde_json::json;

use crate::models::Term;
use crate::server::{identity_from_request, AppState};

/// Título que se muestra mientras no ha llegado ningún documento.
pub const LOADING_TITLE: &str = "[loading...]";

/// GET /session
/// Banner: título del horario y saludo si hay usuario autenticado.
pub async fn session_handler(req: HttpRequest, state: web::Data<AppState>) -> impl Responder {
    let identity = identity_from_request(&req);
    let title = state
        .feed
        .current()
        .map(|s| s.title.clone())
        .filter(|t| !t.is_empty())
        .unwrap_or_else(|| LOADING_TITLE.to_string());

    HttpResponse::Ok().json(json!({
        "title": title,
        "welcome": identity.as_ref().map(|u| format!("Welcome, {}", u.display_name)),
        "signed_in": identity.is_some(),
    }))
}

/// GET /terms
pub async fn terms_handler() -> impl Responder {
    HttpResponse::Ok().json(json!({
        "terms": Term::ALL,
        "default": Term::DEFAULT,
    }))
}
