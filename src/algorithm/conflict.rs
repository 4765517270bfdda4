// Funciones para detectar solapamientos y conflictos entre cursos.
use std::sync::Arc;

use crate::algorithm::selection::SelectionSet;
use crate::algorithm::term::same_term;
use crate::models::{CourseRef, DaySet, Hours};

/// True si los dos conjuntos comparten al menos un día.
pub fn days_overlap(days1: &DaySet, days2: &DaySet) -> bool {
    days1.intersects(days2)
}

/// Solapamiento de intervalos abiertos: `max(start) < min(end)`.
/// Intervalos que sólo se tocan (end1 == start2) no solapan.
pub fn hours_overlap(h1: &Hours, h2: &Hours) -> bool {
    h1.start.max(h2.start) < h1.end.min(h2.end)
}

/// Conflicto de horario: mismos días y horas solapadas. Si a alguno de los
/// dos le falta el horario, nunca hay conflicto.
pub fn time_conflict(c1: &CourseRef, c2: &CourseRef) -> bool {
    match (&c1.slot, &c2.slot) {
        (Some(s1), Some(s2)) => days_overlap(&s1.days, &s2.days) && hours_overlap(&s1.hours, &s2.hours),
        _ => false,
    }
}

/// Dos cursos están en conflicto si son instancias distintas, del mismo
/// periodo y con horarios solapados.
pub fn course_conflict(c1: &CourseRef, c2: &CourseRef) -> bool {
    !Arc::ptr_eq(c1, c2) && same_term(c1, c2) && time_conflict(c1, c2)
}

/// ¿Agregar `candidate` a `selected` rompería la regla de no-conflicto?
/// El propio curso nunca cuenta como conflicto. Corta en el primer conflicto.
pub fn has_conflict(candidate: &CourseRef, selected: &SelectionSet) -> bool {
    selected.iter().any(|s| course_conflict(candidate, s))
}

/// Todos los pares en conflicto dentro de una lista de cursos, en orden de aparición.
pub fn conflicting_pairs(courses: &[CourseRef]) -> Vec<(CourseRef, CourseRef)> {
    let mut out = Vec::new();
    for (i, a) in courses.iter().enumerate() {
        for b in courses.iter().skip(i + 1) {
            if course_conflict(a, b) {
                out.push((Arc::clone(a), Arc::clone(b)));
            }
        }
    }
    out
}

/// Validación retroactiva de una selección completa.
pub fn is_conflict_free(selected: &SelectionSet) -> bool {
    selected.iter().all(|c| !has_conflict(c, selected))
}
