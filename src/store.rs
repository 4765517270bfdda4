//! Store de documentos de horario.
//!
//! El store real es un colaborador externo (clave-valor por rutas, con
//! suscripción). Aquí sólo se define la interfaz que usa la aplicación y una
//! implementación en memoria sin persistencia.
//!
//! `ScheduleFeed` convierte los snapshots del documento en `Schedule`
//! enriquecidos, reconstruyendo el snapshot completo cada vez que cambia.

use std::sync::{Arc, Mutex};

use chrono::{DateTime, Utc};
use tokio::sync::watch;
use tracing::{debug, info};

use crate::algorithm::enrich_schedule;
use crate::error::StoreError;
use crate::models::{Schedule, ScheduleDocument};

pub type DocumentSnapshot = Option<Arc<ScheduleDocument>>;

/// Interfaz del store externo. `None` significa "todavía no hay documento".
pub trait ScheduleStore: Send + Sync {
    /// Último documento recibido.
    fn snapshot(&self) -> DocumentSnapshot;

    /// Suscripción a snapshots completos del documento.
    fn subscribe(&self) -> watch::Receiver<DocumentSnapshot>;

    /// Escribe `courses/{course_id}/meets`.
    fn update_meets(&self, course_id: &str, meets: &str) -> Result<(), StoreError>;
}

/// Store en memoria. Cada escritura publica un documento nuevo; los
/// snapshots anteriores no se modifican.
pub struct MemoryStore {
    tx: watch::Sender<DocumentSnapshot>,
    updated_at: Mutex<Option<DateTime<Utc>>>,
}

impl MemoryStore {
    pub fn empty() -> Self {
        let (tx, _rx) = watch::channel(None);
        MemoryStore { tx, updated_at: Mutex::new(None) }
    }

    pub fn with_document(doc: ScheduleDocument) -> Self {
        let store = MemoryStore::empty();
        store.replace(doc);
        store
    }

    /// Reemplaza el documento entero (equivalente a recibir un snapshot nuevo).
    pub fn replace(&self, doc: ScheduleDocument) {
        info!("schedule document replaced: {:?} ({} courses)", doc.title, doc.courses.len());
        self.tx.send_replace(Some(Arc::new(doc)));
        self.touch();
    }

    /// Momento de la última escritura.
    pub fn last_updated(&self) -> Option<DateTime<Utc>> {
        *self.updated_at.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn touch(&self) {
        *self.updated_at.lock().unwrap_or_else(|e| e.into_inner()) = Some(Utc::now());
    }
}

impl ScheduleStore for MemoryStore {
    fn snapshot(&self) -> DocumentSnapshot {
        self.tx.borrow().clone()
    }

    fn subscribe(&self) -> watch::Receiver<DocumentSnapshot> {
        self.tx.subscribe()
    }

    fn update_meets(&self, course_id: &str, meets: &str) -> Result<(), StoreError> {
        let mut result: Result<(), StoreError> = Ok(());
        self.tx.send_if_modified(|current| {
            let Some(doc) = current.as_ref() else {
                result = Err(StoreError::NotLoaded);
                return false;
            };
            let mut next = ScheduleDocument::clone(doc);
            match next.course_mut(course_id) {
                Some(course) => {
                    course.meets = Some(meets.to_string());
                    *current = Some(Arc::new(next));
                    true
                }
                None => {
                    result = Err(StoreError::CourseNotFound { id: course_id.to_string() });
                    false
                }
            }
        });
        if result.is_ok() {
            info!("courses/{}/meets updated to {:?}", course_id, meets);
            self.touch();
        }
        result
    }
}

/// Vista enriquecida del último documento. Reconstruye el `Schedule` sólo
/// cuando llega un documento distinto; mientras tanto entrega el mismo `Arc`.
pub struct ScheduleFeed {
    docs: watch::Receiver<DocumentSnapshot>,
    cache: Mutex<Option<(Arc<ScheduleDocument>, Arc<Schedule>)>>,
}

impl ScheduleFeed {
    pub fn new(docs: watch::Receiver<DocumentSnapshot>) -> Self {
        ScheduleFeed { docs, cache: Mutex::new(None) }
    }

    pub fn from_store(store: &dyn ScheduleStore) -> Self {
        ScheduleFeed::new(store.subscribe())
    }

    /// Snapshot actual, o `None` si aún no llegó ningún documento.
    pub fn current(&self) -> Option<Arc<Schedule>> {
        let doc = self.docs.borrow().clone()?;
        let mut cache = self.cache.lock().unwrap_or_else(|e| e.into_inner());
        if let Some((cached_doc, schedule)) = cache.as_ref() {
            if Arc::ptr_eq(cached_doc, &doc) {
                return Some(Arc::clone(schedule));
            }
        }
        let schedule = Arc::new(enrich_schedule(&doc));
        debug!("schedule rebuilt: {} courses", schedule.courses.len());
        *cache = Some((doc, Arc::clone(&schedule)));
        Some(schedule)
    }
}
