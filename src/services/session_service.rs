use crate::models::session::AssessmentSession;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::{Mutex, RwLock};
use uuid::Uuid;

/// In-memory registry of assessment sessions. Each session carries its own
/// lock so one applicant's slow generation call does not serialize everyone
/// else's run.
#[derive(Clone, Default)]
pub struct SessionStore {
    inner: Arc<RwLock<HashMap<Uuid, Arc<Mutex<AssessmentSession>>>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn create(&self) -> Uuid {
        let id = Uuid::new_v4();
        let session = Arc::new(Mutex::new(AssessmentSession::new(id)));
        self.inner.write().await.insert(id, session);
        id
    }

    pub async fn get(&self, id: Uuid) -> Option<Arc<Mutex<AssessmentSession>>> {
        self.inner.read().await.get(&id).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::session::AssessmentState;

    #[tokio::test]
    async fn created_sessions_start_awaiting_intake() {
        let store = SessionStore::new();
        let id = store.create().await;
        let session = store.get(id).await.expect("session exists");
        let session = session.lock().await;
        assert!(matches!(session.state, AssessmentState::AwaitingIntake));
        assert_eq!(session.id, id);
    }

    #[tokio::test]
    async fn unknown_ids_resolve_to_none() {
        let store = SessionStore::new();
        assert!(store.get(Uuid::new_v4()).await.is_none());
    }
}
