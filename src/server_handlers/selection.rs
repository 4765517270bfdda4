use actix_web::{web, HttpRequest, HttpResponse, Responder};
use serde_json::json;
use tracing::info;

use crate::algorithm::conflict::{conflicting_pairs, has_conflict};
use crate::algorithm::term::get_term;
use crate::algorithm::view::course_views;
use crate::algorithm::SelectionSet;
use crate::api_json::{ToggleRequest, ValidateRequest};
use crate::models::Term;
use crate::server::{identity_from_request, AppState};
use crate::server_handlers::courses::{not_loaded, unknown_courses};

/// POST /selection/toggle
/// Alterna un curso en la selección del cliente. Agregar un curso en conflicto
/// se rechaza con 409, igual que un botón deshabilitado; quitarlo siempre se permite.
pub async fn toggle_handler(
    req: HttpRequest,
    body: web::Json<ToggleRequest>,
    state: web::Data<AppState>,
) -> impl Responder {
    let payload = body.into_inner();
    let schedule = match state.feed.current() {
        Some(s) => s,
        None => return not_loaded(),
    };

    let (selection, unknown) = SelectionSet::from_ids(&schedule, &payload.selected);
    if !unknown.is_empty() {
        return unknown_courses(&unknown);
    }
    let course = match schedule.find(payload.course.trim()) {
        Some(c) => c.clone(),
        None => return unknown_courses(&[payload.course]),
    };

    if !selection.contains(&course) && has_conflict(&course, &selection) {
        return HttpResponse::Conflict().json(json!({
            "error": format!("{} conflicts with the current selection", course.id),
            "selected": selection.ids(),
        }));
    }

    let term = match payload.term.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
        Some(raw) => match Term::parse(raw) {
            Some(t) => t,
            None => return HttpResponse::BadRequest().json(json!({"error": format!("unknown term '{}'", raw)})),
        },
        None => get_term(&course).unwrap_or(Term::DEFAULT),
    };

    let next = selection.toggle(&course);
    info!("toggled {} ({} selected)", course.id, next.len());
    let can_edit = identity_from_request(&req).is_some();
    HttpResponse::Ok().json(json!({
        "term": term,
        "selected": next.ids(),
        "courses": course_views(&schedule, term, &next, can_edit),
    }))
}

/// POST /selection/validate
/// Valida una selección completa: ningún par puede estar en conflicto.
pub async fn validate_handler(body: web::Json<ValidateRequest>, state: web::Data<AppState>) -> impl Responder {
    let payload = body.into_inner();
    let schedule = match state.feed.current() {
        Some(s) => s,
        None => return not_loaded(),
    };
    let (selection, unknown) = SelectionSet::from_ids(&schedule, &payload.selected);
    if !unknown.is_empty() {
        return unknown_courses(&unknown);
    }

    let conflicts: Vec<[String; 2]> = conflicting_pairs(selection.as_slice())
        .into_iter()
        .map(|(a, b)| [a.id.clone(), b.id.clone()])
        .collect();
    HttpResponse::Ok().json(json!({
        "conflict_free": conflicts.is_empty(),
        "conflicts": conflicts,
    }))
}
