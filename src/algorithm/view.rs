// Datos por curso que necesita la capa de presentación para pintar la lista.
use serde::Serialize;

use crate::algorithm::conflict::has_conflict;
use crate::algorithm::selection::SelectionSet;
use crate::algorithm::term::{course_number, courses_in_term, get_term};
use crate::models::{Course, Schedule, Term};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CourseView {
    pub id: String,
    pub label: String,
    pub meets: Option<String>,
    pub selected: bool,
    /// El curso choca con la selección actual y no se puede agregar.
    pub disabled: bool,
    /// Sólo un usuario autenticado puede mover el curso.
    pub editable: bool,
}

/// "Fall CS 101: Computer Science ..."
pub fn course_label(course: &Course) -> String {
    let term = get_term(course).map(Term::name).unwrap_or("");
    format!("{} CS {}: {}", term, course_number(course), course.title)
}

pub fn course_views(schedule: &Schedule, term: Term, selected: &SelectionSet, can_edit: bool) -> Vec<CourseView> {
    courses_in_term(schedule, term)
        .iter()
        .map(|c| CourseView {
            id: c.id.clone(),
            label: course_label(c),
            meets: c.meets.clone(),
            selected: selected.contains(c),
            disabled: has_conflict(c, selected),
            editable: can_edit,
        })
        .collect()
}
