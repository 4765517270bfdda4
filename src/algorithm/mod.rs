// Motor de conflictos de horario.
// Todo lo de este módulo es puro: sin I/O, sin estado compartido, sin logs.
pub mod conflict;
pub mod enrich;
pub mod selection;
pub mod term;
pub mod times;
pub mod view;

// API pública que consume la capa de presentación
pub use conflict::{conflicting_pairs, course_conflict, days_overlap, has_conflict, hours_overlap, is_conflict_free, time_conflict};
pub use enrich::{enrich_course, enrich_schedule};
pub use selection::{toggle, SelectionSet};
pub use term::{course_number, courses_in_term, get_term, group_by_term};
pub use times::parse_time;
pub use view::{course_label, course_views, CourseView};
