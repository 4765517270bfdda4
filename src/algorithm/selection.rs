// Conjunto de cursos seleccionados por el usuario.
use std::sync::Arc;

use crate::models::{CourseRef, Schedule};

/// Secuencia ordenada con semántica de conjunto: sin duplicados y con
/// pertenencia por instancia (`Arc::ptr_eq`). Es inmutable: `toggle` devuelve
/// un conjunto nuevo.
#[derive(Debug, Clone, Default)]
pub struct SelectionSet {
    courses: Vec<CourseRef>,
}

impl SelectionSet {
    pub fn new() -> Self {
        SelectionSet { courses: Vec::new() }
    }

    pub fn contains(&self, course: &CourseRef) -> bool {
        self.courses.iter().any(|c| Arc::ptr_eq(c, course))
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CourseRef> {
        self.courses.iter()
    }

    pub fn len(&self) -> usize {
        self.courses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }

    pub fn as_slice(&self) -> &[CourseRef] {
        &self.courses
    }

    /// Ids en el orden de la selección.
    pub fn ids(&self) -> Vec<String> {
        self.courses.iter().map(|c| c.id.clone()).collect()
    }

    /// Quita el curso si está; si no, lo antepone. No consulta conflictos:
    /// impedir la selección de un curso en conflicto es cosa del llamador.
    pub fn toggle(&self, course: &CourseRef) -> SelectionSet {
        if self.contains(course) {
            SelectionSet {
                courses: self.courses.iter().filter(|c| !Arc::ptr_eq(c, course)).cloned().collect(),
            }
        } else {
            let mut courses = Vec::with_capacity(self.courses.len() + 1);
            courses.push(Arc::clone(course));
            courses.extend(self.courses.iter().cloned());
            SelectionSet { courses }
        }
    }

    /// Reconstruye una selección a partir de ids enviados por un cliente,
    /// resolviéndolos contra el snapshot actual. Devuelve también los ids que
    /// no existen en el horario. Los repetidos se colapsan.
    pub fn from_ids<S: AsRef<str>>(schedule: &Schedule, ids: &[S]) -> (SelectionSet, Vec<String>) {
        let mut set = SelectionSet::new();
        let mut unknown = Vec::new();
        for id in ids {
            let id = id.as_ref().trim();
            if id.is_empty() {
                continue;
            }
            match schedule.find(id) {
                Some(c) if !set.contains(c) => set.courses.push(Arc::clone(c)),
                Some(_) => {}
                None => unknown.push(id.to_string()),
            }
        }
        (set, unknown)
    }
}

impl FromIterator<CourseRef> for SelectionSet {
    fn from_iter<I: IntoIterator<Item = CourseRef>>(iter: I) -> Self {
        let mut set = SelectionSet::new();
        for c in iter {
            if !set.contains(&c) {
                set.courses.push(c);
            }
        }
        set
    }
}

impl<'a> IntoIterator for &'a SelectionSet {
    type Item = &'a CourseRef;
    type IntoIter = std::slice::Iter<'a, CourseRef>;

    fn into_iter(self) -> Self::IntoIter {
        self.courses.iter()
    }
}

/// Forma funcional de `SelectionSet::toggle`.
pub fn toggle(selected: &SelectionSet, course: &CourseRef) -> SelectionSet {
    selected.toggle(course)
}
