use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::algorithm::term::{course_number, get_term};
use crate::error::LoadError;
use crate::models::{Course, CourseRecord, ScheduleDocument, Term};

/// Documento de horario que entrega el store externo
///
/// # Estructura del JSON esperado:
/// ```json
/// {
///   "title": "CS Courses for 2018-2019",
///   "courses": {
///     "F101": { "id": "F101", "title": "Computer Science: Concepts, Philosophy, and Connections", "meets": "MWF 11:00-11:50" },
///     "F110": { "id": "F110", "title": "Intro Programming for non-majors", "meets": "MWF 10:00-10:50" }
///   }
/// }
/// ```
///
/// `courses` también puede ser un arreglo de cursos. Un curso sin `id` toma
/// la clave del mapa; si no tiene ninguna de las dos se ignora. `meets`
/// puede faltar o no ser un string: en ese caso el curso queda sin horario.
pub fn parse_schedule_document(json_str: &str) -> Result<ScheduleDocument, LoadError> {
    let value: Value = serde_json::from_str(json_str)?;
    document_from_value(&value)
}

pub fn load_schedule_document<P: AsRef<Path>>(path: P) -> Result<ScheduleDocument, LoadError> {
    let contents = std::fs::read_to_string(path)?;
    parse_schedule_document(&contents)
}

pub fn document_from_value(value: &Value) -> Result<ScheduleDocument, LoadError> {
    let obj = value.as_object().ok_or_else(|| LoadError::Shape {
        message: "schedule document must be a JSON object".to_string(),
    })?;

    let title = obj.get("title").and_then(Value::as_str).unwrap_or("").to_string();

    let courses = match obj.get("courses") {
        None | Some(Value::Null) => Vec::new(),
        Some(Value::Array(items)) => items.iter().filter_map(|v| record_from_value(None, v)).collect(),
        Some(Value::Object(map)) => map.iter().filter_map(|(k, v)| record_from_value(Some(k), v)).collect(),
        Some(_) => {
            return Err(LoadError::Shape {
                message: "`courses` must be an object or an array".to_string(),
            })
        }
    };

    Ok(ScheduleDocument { title, courses })
}

fn record_from_value(key: Option<&String>, value: &Value) -> Option<CourseRecord> {
    let obj = value.as_object()?;
    let id = obj
        .get("id")
        .and_then(Value::as_str)
        .map(str::to_string)
        .or_else(|| key.cloned())?;
    if id.is_empty() {
        return None;
    }
    Some(CourseRecord {
        id,
        title: obj.get("title").and_then(Value::as_str).unwrap_or("").to_string(),
        meets: obj.get("meets").and_then(Value::as_str).map(str::to_string),
    })
}

/// Forma canónica del documento: `courses` como mapa `id -> curso`, en orden.
pub fn document_to_value(doc: &ScheduleDocument) -> Value {
    let mut courses = Map::new();
    for c in &doc.courses {
        courses.insert(c.id.clone(), serde_json::to_value(c).unwrap_or(Value::Null));
    }
    serde_json::json!({ "title": doc.title, "courses": courses })
}

/// Horario de ejemplo que se usa cuando no se configura ningún archivo.
pub fn sample_schedule() -> ScheduleDocument {
    let course = |id: &str, title: &str, meets: &str| CourseRecord {
        id: id.to_string(),
        title: title.to_string(),
        meets: Some(meets.to_string()),
    };
    ScheduleDocument {
        title: "CS Courses for 2018-2019".to_string(),
        courses: vec![
            course("F101", "Computer Science: Concepts, Philosophy, and Connections", "MWF 11:00-11:50"),
            course("F110", "Intro Programming for non-majors", "MWF 10:00-10:50"),
            course("F111", "Fundamentals of Computer Programming I", "MWF 13:00-13:50"),
            course("F211", "Fundamentals of Computer Programming II", "TuTh 12:30-13:50"),
        ],
    }
}

/// Curso enriquecido tal como lo devuelve `GET /schedule`.
#[derive(Debug, Serialize)]
pub struct CourseDto {
    pub id: String,
    pub title: String,
    pub meets: Option<String>,
    pub term: Option<Term>,
    pub number: String,
    pub days: Option<Vec<String>>,
    pub start: Option<i32>,
    pub end: Option<i32>,
}

pub fn course_to_dto(c: &Course) -> CourseDto {
    CourseDto {
        id: c.id.clone(),
        title: c.title.clone(),
        meets: c.meets.clone(),
        term: get_term(c),
        number: course_number(c).to_string(),
        days: c.slot.map(|s| s.days.days().into_iter().map(|d| d.code().to_string()).collect()),
        start: c.slot.map(|s| s.hours.start),
        end: c.slot.map(|s| s.hours.end),
    }
}

/// Cuerpo de `POST /selection/toggle`.
#[derive(Debug, Deserialize)]
pub struct ToggleRequest {
    #[serde(default)]
    pub selected: Vec<String>,
    pub course: String,
    /// Periodo para las vistas devueltas; por defecto el del curso alternado.
    #[serde(default)]
    pub term: Option<String>,
}

/// Cuerpo de `POST /selection/validate`.
#[derive(Debug, Deserialize)]
pub struct ValidateRequest {
    #[serde(default)]
    pub selected: Vec<String>,
}

/// Cuerpo de `PUT /courses/{id}/meets`.
#[derive(Debug, Deserialize)]
pub struct MeetsUpdate {
    pub meets: String,
}

/// "F101, F110" -> ["F101", "F110"]
pub fn split_ids(raw: Option<&str>) -> Vec<String> {
    match raw {
        Some(s) if !s.trim().is_empty() => s
            .split(',')
            .map(|p| p.trim().to_string())
            .filter(|p| !p.is_empty())
            .collect(),
        _ => Vec::new(),
    }
}
