// Parser de franjas horarias: "MWF 11:00-11:50" -> TimeSlot
use std::sync::OnceLock;

use regex::Regex;

use crate::models::{Day, DaySet, Hours, TimeSlot};

/// Formato que se muestra al usuario cuando un horario no es válido.
pub const MEETS_FORMAT_HINT: &str = "MWF 11:00-11:50";

fn meets_pattern() -> &'static Regex {
    static MEETS_PAT: OnceLock<Regex> = OnceLock::new();
    MEETS_PAT.get_or_init(|| {
        Regex::new(r"^ *((?:M|Tu|W|Th|F)+) +(\d\d?):(\d\d) *[ -] *(\d\d?):(\d\d) *$")
            .expect("meets pattern is a valid regex")
    })
}

/// Separa "MTuWThF" en días. Sólo se llama con texto ya validado por el patrón,
/// así que cualquier token desconocido corta el recorrido.
fn parse_days(codes: &str) -> DaySet {
    let mut days = DaySet::empty();
    let mut rest = codes;
    while !rest.is_empty() {
        let (day, len) = if rest.starts_with("Tu") {
            (Day::Tuesday, 2)
        } else if rest.starts_with("Th") {
            (Day::Thursday, 2)
        } else if rest.starts_with('M') {
            (Day::Monday, 1)
        } else if rest.starts_with('W') {
            (Day::Wednesday, 1)
        } else if rest.starts_with('F') {
            (Day::Friday, 1)
        } else {
            break;
        };
        days.insert(day);
        rest = &rest[len..];
    }
    days
}

fn to_min(hh: &str, mm: &str) -> Option<i32> {
    let h = hh.parse::<i32>().ok()?;
    let m = mm.parse::<i32>().ok()?;
    Some(h * 60 + m)
}

/// Parsea un horario en formato "DÍAS HH:MM-HH:MM".
///
/// Cualquier texto que no cumpla el formato devuelve `None`: no es un error,
/// significa "no hay horario que comprobar". No se valida el rango de horas
/// ("99:00" se acepta tal cual) ni que `start < end`; un intervalo invertido
/// nunca solapa con nada.
pub fn parse_time(raw: &str) -> Option<TimeSlot> {
    let caps = meets_pattern().captures(raw)?;
    let days = parse_days(&caps[1]);
    let start = to_min(&caps[2], &caps[3])?;
    let end = to_min(&caps[4], &caps[5])?;
    Some(TimeSlot { days, hours: Hours { start, end } })
}

/// Convierte minutos desde medianoche a "H:MM".
pub fn format_minutes(minutes: i32) -> String {
    format!("{}:{:02}", minutes / 60, minutes % 60)
}

impl TimeSlot {
    /// Forma canónica: días en orden M, Tu, W, Th, F y horas "H:MM-H:MM".
    /// Parsear la forma canónica y volver a formatear da el mismo texto.
    pub fn to_meets(&self) -> String {
        format!(
            "{} {}-{}",
            self.days.codes(),
            format_minutes(self.hours.start),
            format_minutes(self.hours.end)
        )
    }
}
