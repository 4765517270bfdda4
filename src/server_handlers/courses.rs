use std::collections::HashMap;

use actix_web::{web, HttpRequest, HttpResponse, Responder};
use serde_json::json;
use tracing::{info, warn};

use crate::algorithm::enrich_course;
use crate::algorithm::times::MEETS_FORMAT_HINT;
use crate::algorithm::view::course_views;
use crate::algorithm::SelectionSet;
use crate::api_json::{course_to_dto, split_ids, MeetsUpdate};
use crate::edit::save_meets;
use crate::error::{EditError, StoreError};
use crate::models::Term;
use crate::server::{identity_from_request, AppState};

pub(crate) fn not_loaded() -> HttpResponse {
    HttpResponse::ServiceUnavailable().json(json!({"error": "schedule has not loaded yet"}))
}

pub(crate) fn unknown_courses(ids: &[String]) -> HttpResponse {
    HttpResponse::NotFound().json(json!({"error": "unknown course ids", "unknown": ids}))
}

/// GET /schedule
/// Horario completo con los horarios ya parseados.
pub async fn schedule_handler(state: web::Data<AppState>) -> impl Responder {
    let schedule = match state.feed.current() {
        Some(s) => s,
        None => return not_loaded(),
    };
    let courses: Vec<_> = schedule.courses.iter().map(|c| course_to_dto(c)).collect();
    HttpResponse::Ok().json(json!({"title": schedule.title, "courses": courses}))
}

/// GET /courses?term=Fall&selected=F101,F110
/// Cursos del periodo con su estado: seleccionado, deshabilitado por
/// conflicto y editable.
pub async fn courses_handler(
    req: HttpRequest,
    query: web::Query<HashMap<String, String>>,
    state: web::Data<AppState>,
) -> impl Responder {
    let qm = query.into_inner();
    let term = match qm.get("term").map(|s| s.trim()).filter(|s| !s.is_empty()) {
        None => Term::DEFAULT,
        Some(raw) => match Term::parse(raw) {
            Some(t) => t,
            None => return HttpResponse::BadRequest().json(json!({"error": format!("unknown term '{}'", raw)})),
        },
    };
    info!("GET /courses term={}", term);

    let schedule = match state.feed.current() {
        Some(s) => s,
        None => return not_loaded(),
    };
    let ids = split_ids(qm.get("selected").map(String::as_str));
    let (selection, unknown) = SelectionSet::from_ids(&schedule, &ids);
    if !unknown.is_empty() {
        return unknown_courses(&unknown);
    }

    let can_edit = identity_from_request(&req).is_some();
    HttpResponse::Ok().json(json!({
        "term": term,
        "selected": selection.ids(),
        "courses": course_views(&schedule, term, &selection, can_edit),
    }))
}

/// PUT /courses/{id}/meets
/// Cambia el horario de un curso. Requiere usuario autenticado; un horario
/// inválido se rechaza con 422 para que el cliente vuelva a preguntar.
pub async fn update_meets_handler(
    req: HttpRequest,
    path: web::Path<String>,
    body: web::Json<MeetsUpdate>,
    state: web::Data<AppState>,
) -> impl Responder {
    let course_id = path.into_inner();
    let identity = identity_from_request(&req);
    let update = body.into_inner();

    match save_meets(state.store.as_ref(), identity.as_ref(), &course_id, &update.meets) {
        Ok(_) => {
            let course = state
                .store
                .snapshot()
                .and_then(|doc| doc.course(&course_id).map(enrich_course));
            HttpResponse::Ok().json(json!({
                "status": "ok",
                "course": course.as_ref().map(course_to_dto),
            }))
        }
        Err(EditError::NotSignedIn) => {
            HttpResponse::Unauthorized().json(json!({"error": EditError::NotSignedIn.to_string()}))
        }
        Err(e @ EditError::InvalidMeets { .. }) => HttpResponse::UnprocessableEntity().json(json!({
            "error": e.to_string(),
            "format": MEETS_FORMAT_HINT,
            "retry": true,
        })),
        Err(EditError::Store(e)) => {
            warn!("failed to save courses/{}/meets: {}", course_id, e);
            let body = json!({"error": e.to_string(), "notification": e.notification()});
            match e {
                StoreError::CourseNotFound { .. } => HttpResponse::NotFound().json(body),
                StoreError::NotLoaded | StoreError::Unavailable { .. } => HttpResponse::ServiceUnavailable().json(body),
            }
        }
    }
}
