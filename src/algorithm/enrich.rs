// Enriquecimiento: documento crudo -> Schedule con TimeSlot por curso.
use std::sync::Arc;

use crate::algorithm::times::parse_time;
use crate::models::{Course, CourseRecord, Schedule, ScheduleDocument};

/// Adjunta el horario parseado a un curso. Si `meets` falta o no se puede
/// parsear, el curso queda sin `slot` y no participa en conflictos.
pub fn enrich_course(record: &CourseRecord) -> Course {
    let slot = record.meets.as_deref().and_then(parse_time);
    Course {
        id: record.id.clone(),
        title: record.title.clone(),
        meets: record.meets.clone(),
        slot,
    }
}

/// Construye un snapshot nuevo completo; nunca reutiliza cursos de uno anterior.
pub fn enrich_schedule(doc: &ScheduleDocument) -> Schedule {
    Schedule {
        title: doc.title.clone(),
        courses: doc.courses.iter().map(|r| Arc::new(enrich_course(r))).collect(),
    }
}
