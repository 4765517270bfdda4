// Estructuras de datos principales

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// Día lectivo. El orden de las variantes es el orden canónico de los códigos
/// ("M", "Tu", "W", "Th", "F").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Day {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
}

impl Day {
    pub const ALL: [Day; 5] = [Day::Monday, Day::Tuesday, Day::Wednesday, Day::Thursday, Day::Friday];

    /// Código compacto usado en los strings de horario.
    pub fn code(self) -> &'static str {
        match self {
            Day::Monday => "M",
            Day::Tuesday => "Tu",
            Day::Wednesday => "W",
            Day::Thursday => "Th",
            Day::Friday => "F",
        }
    }

    fn bit(self) -> u8 {
        1 << (self as u8)
    }
}

/// Conjunto de días como máscara de bits (duplicados colapsan solos).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct DaySet(u8);

impl DaySet {
    pub fn empty() -> Self {
        DaySet(0)
    }

    pub fn insert(&mut self, day: Day) {
        self.0 |= day.bit();
    }

    pub fn contains(&self, day: Day) -> bool {
        self.0 & day.bit() != 0
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// True si ambos conjuntos comparten al menos un día.
    pub fn intersects(&self, other: &DaySet) -> bool {
        self.0 & other.0 != 0
    }

    /// Días presentes, en orden canónico.
    pub fn days(&self) -> Vec<Day> {
        Day::ALL.into_iter().filter(|d| self.contains(*d)).collect()
    }

    /// Códigos concatenados en orden canónico, p.ej. "MWF".
    pub fn codes(&self) -> String {
        self.days().into_iter().map(Day::code).collect()
    }
}

impl FromIterator<Day> for DaySet {
    fn from_iter<I: IntoIterator<Item = Day>>(iter: I) -> Self {
        let mut set = DaySet::empty();
        for d in iter {
            set.insert(d);
        }
        set
    }
}

impl Serialize for DaySet {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.days().into_iter().map(Day::code))
    }
}

/// Intervalo en minutos desde medianoche. Se espera start < end, pero no se
/// valida: un rango invertido simplemente nunca solapa con nada.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Hours {
    pub start: i32,
    pub end: i32,
}

/// Horario parseado: días + intervalo horario.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct TimeSlot {
    pub days: DaySet,
    pub hours: Hours,
}

/// Periodo académico, derivado de la primera letra del id del curso.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Term {
    Fall,
    Winter,
    Spring,
}

impl Term {
    pub const ALL: [Term; 3] = [Term::Fall, Term::Winter, Term::Spring];

    /// Periodo con el que arranca una sesión de navegación.
    pub const DEFAULT: Term = Term::Fall;

    pub fn from_code(c: char) -> Option<Term> {
        match c {
            'F' => Some(Term::Fall),
            'W' => Some(Term::Winter),
            'S' => Some(Term::Spring),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Term::Fall => "Fall",
            Term::Winter => "Winter",
            Term::Spring => "Spring",
        }
    }

    /// Acepta el nombre ("Fall") o la letra ("F").
    pub fn parse(s: &str) -> Option<Term> {
        let s = s.trim();
        Term::ALL
            .into_iter()
            .find(|t| t.name().eq_ignore_ascii_case(s))
            .or_else(|| {
                let mut chars = s.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Term::from_code(c.to_ascii_uppercase()),
                    _ => None,
                }
            })
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Curso ya enriquecido. `slot` es None cuando `meets` falta o no se pudo parsear.
#[derive(Debug, Clone, Serialize)]
pub struct Course {
    pub id: String,
    pub title: String,
    pub meets: Option<String>,
    pub slot: Option<TimeSlot>,
}

/// Los cursos se comparten por referencia; la identidad es la instancia
/// (`Arc::ptr_eq`), nunca la igualdad de campos.
pub type CourseRef = Arc<Course>;

/// Snapshot inmutable del horario. Se reconstruye entero con cada documento nuevo.
#[derive(Debug, Clone, Default)]
pub struct Schedule {
    pub title: String,
    pub courses: Vec<CourseRef>,
}

impl Schedule {
    /// Busca un curso por id (sólo para direccionar cursos desde fuera).
    pub fn find(&self, id: &str) -> Option<&CourseRef> {
        self.courses.iter().find(|c| c.id == id)
    }
}

/// Usuario autenticado. Sólo decide si se ofrecen acciones de edición.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub display_name: String,
}

/// Curso tal como llega en el documento externo (sin enriquecer).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseRecord {
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meets: Option<String>,
}

/// Documento de horario recibido como snapshot completo desde el store.
/// Los cursos conservan el orden en que aparecen en el documento.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ScheduleDocument {
    pub title: String,
    pub courses: Vec<CourseRecord>,
}

impl ScheduleDocument {
    pub fn course(&self, id: &str) -> Option<&CourseRecord> {
        self.courses.iter().find(|c| c.id == id)
    }

    pub fn course_mut(&mut self, id: &str) -> Option<&mut CourseRecord> {
        self.courses.iter_mut().find(|c| c.id == id)
    }
}
