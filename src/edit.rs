//! Edición del horario de un curso ("mover" un curso).
//!
//! Sólo un usuario autenticado puede editar. Un horario nuevo que no se puede
//! parsear se rechaza y se vuelve a preguntar, con un número máximo de
//! intentos; una respuesta vacía cancela.

use tracing::{info, warn};

use crate::algorithm::times::{parse_time, MEETS_FORMAT_HINT};
use crate::error::EditError;
use crate::models::{Course, Identity, TimeSlot};
use crate::store::ScheduleStore;

pub const PROMPT_MESSAGE: &str = "Enter new meeting data, in this format:";

/// Fuente de respuestas del usuario (stdin, un test, ...).
pub trait MeetsPrompt {
    /// Pregunta mostrando `default` como valor sugerido. `None` = el usuario canceló.
    fn ask(&mut self, message: &str, default: &str) -> Option<String>;
}

/// Resultado del bucle de preguntas.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MeetsAnswer {
    Valid { meets: String, slot: TimeSlot },
    Cancelled,
    /// Se agotaron los intentos sin una respuesta válida
    GaveUp { attempts: u32 },
}

/// Resultado de `move_course`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditOutcome {
    Saved { course_id: String, meets: String },
    Cancelled,
    GaveUp { attempts: u32 },
}

/// Pregunta hasta obtener un horario válido, como mucho `max_attempts` veces
/// (al menos una). El texto se guarda tal como lo escribió el usuario.
pub fn prompt_for_meets<P: MeetsPrompt + ?Sized>(current: Option<&str>, prompt: &mut P, max_attempts: u32) -> MeetsAnswer {
    let max_attempts = max_attempts.max(1);
    let mut default = current.unwrap_or(MEETS_FORMAT_HINT).to_string();
    let mut message = PROMPT_MESSAGE.to_string();

    for attempt in 1..=max_attempts {
        let answer = match prompt.ask(&message, &default) {
            Some(a) if !a.trim().is_empty() => a,
            _ => return MeetsAnswer::Cancelled,
        };
        if let Some(slot) = parse_time(&answer) {
            return MeetsAnswer::Valid { meets: answer, slot };
        }
        warn!("rejected meeting time {:?} (attempt {}/{})", answer, attempt, max_attempts);
        message = format!("{:?} is not a valid meeting time. {}", answer, PROMPT_MESSAGE);
        default = answer;
    }
    MeetsAnswer::GaveUp { attempts: max_attempts }
}

/// Valida y guarda un horario nuevo en `courses/{id}/meets`.
pub fn save_meets<S: ScheduleStore + ?Sized>(
    store: &S,
    identity: Option<&Identity>,
    course_id: &str,
    meets: &str,
) -> Result<TimeSlot, EditError> {
    let user = identity.ok_or(EditError::NotSignedIn)?;
    let slot = parse_time(meets).ok_or_else(|| EditError::InvalidMeets { meets: meets.to_string() })?;
    store.update_meets(course_id, meets)?;
    info!("{} moved {} to {:?}", user.display_name, course_id, meets);
    Ok(slot)
}

/// Flujo completo de edición interactiva de un curso.
pub fn move_course<S, P>(
    store: &S,
    identity: Option<&Identity>,
    course: &Course,
    prompt: &mut P,
    max_attempts: u32,
) -> Result<EditOutcome, EditError>
where
    S: ScheduleStore + ?Sized,
    P: MeetsPrompt + ?Sized,
{
    if identity.is_none() {
        return Err(EditError::NotSignedIn);
    }
    match prompt_for_meets(course.meets.as_deref(), prompt, max_attempts) {
        MeetsAnswer::Valid { meets, .. } => {
            save_meets(store, identity, &course.id, &meets)?;
            Ok(EditOutcome::Saved { course_id: course.id.clone(), meets })
        }
        MeetsAnswer::Cancelled => Ok(EditOutcome::Cancelled),
        MeetsAnswer::GaveUp { attempts } => Ok(EditOutcome::GaveUp { attempts }),
    }
}
