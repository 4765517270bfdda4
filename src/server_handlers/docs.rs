use actix_web::{HttpResponse, Responder};
use serde_json::json;

use crate::algorithm::times::MEETS_FORMAT_HINT;
use crate::server::USER_HEADER;

pub async fn help_handler() -> impl Responder {
    let help = json!({
        "description": "API del navegador de cursos. Los cursos se agrupan por periodo (F = Fall, W = Winter, S = Spring) y no se pueden seleccionar dos cursos del mismo periodo cuyos horarios se solapen.",
        "endpoints": {
            "GET /session": "titulo del horario y saludo del usuario",
            "GET /terms": "periodos disponibles y periodo por defecto",
            "GET /schedule": "todos los cursos con su horario parseado",
            "GET /courses?term=Fall&selected=F101,F110": "cursos del periodo con estado selected/disabled/editable",
            "POST /selection/toggle": "alterna un curso en la seleccion",
            "POST /selection/validate": "valida que una seleccion no tenga conflictos",
            "PUT /courses/{id}/meets": "cambia el horario de un curso (requiere usuario)"
        },
        "toggle_example": {"selected": ["F101"], "course": "F110"},
        "validate_example": {"selected": ["F101", "F110"]},
        "meets_example": {"meets": MEETS_FORMAT_HINT},
        "auth_header": USER_HEADER,
        "note": "Un horario que no cumple el formato deja al curso sin horario: nunca bloquea ni es bloqueado por otro curso."
    });

    HttpResponse::Ok().json(help)
}
