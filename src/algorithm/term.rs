// Clasificación de cursos por periodo académico.
use crate::models::{Course, CourseRef, Schedule, Term};

/// Periodo del curso según la primera letra de su id (F, W, S).
/// Cualquier otra letra (o un id vacío) no tiene periodo.
pub fn get_term(course: &Course) -> Option<Term> {
    course.id.chars().next().and_then(Term::from_code)
}

/// Número del curso: los 3 caracteres que siguen a la letra del periodo.
pub fn course_number(course: &Course) -> &str {
    let mut chars = course.id.char_indices().skip(1);
    let start = match chars.next() {
        Some((i, _)) => i,
        None => return "",
    };
    let end = chars.nth(2).map(|(i, _)| i).unwrap_or(course.id.len());
    &course.id[start..end]
}

/// True sólo si ambos cursos tienen periodo y es el mismo.
pub fn same_term(a: &Course, b: &Course) -> bool {
    match (get_term(a), get_term(b)) {
        (Some(ta), Some(tb)) => ta == tb,
        _ => false,
    }
}

/// Cursos de un periodo, en el orden del horario.
pub fn courses_in_term(schedule: &Schedule, term: Term) -> Vec<CourseRef> {
    schedule
        .courses
        .iter()
        .filter(|c| get_term(c) == Some(term))
        .cloned()
        .collect()
}

/// Agrupa por periodo en el orden de `Term::ALL`. Los cursos sin periodo no aparecen.
pub fn group_by_term(schedule: &Schedule) -> Vec<(Term, Vec<CourseRef>)> {
    Term::ALL
        .into_iter()
        .map(|t| (t, courses_in_term(schedule, t)))
        .collect()
}
