//! Per-user conversational state and the store that owns it.

use super::keyboard::Keyboard;
use super::list::ShoppingList;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::{Mutex, RwLock};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PendingAction {
    Adding,
    Removing,
}

#[derive(Debug, Clone, Default)]
pub struct Session {
    pub items: ShoppingList,
    pub shopping_mode: bool,
    /// Set between a "type the item name" prompt and the next utterance.
    pub pending_action: Option<PendingAction>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode_keyboard(&self) -> Keyboard {
        Keyboard::for_mode(self.shopping_mode)
    }
}

pub type SharedSession = Arc<Mutex<Session>>;

/// Owns every user's session for the lifetime of the process. Nothing is persisted.
///
/// Each session sits behind its own mutex, so one user's utterances are processed one at a
/// time while different users never contend beyond the brief map lookup.
#[derive(Default)]
pub struct SessionStore {
    sessions: RwLock<HashMap<u64, SharedSession>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn get_or_create(&self, user_id: u64) -> SharedSession {
        if let Some(session) = self.sessions.read().await.get(&user_id) {
            return session.clone();
        }
        let mut sessions = self.sessions.write().await;
        sessions
            .entry(user_id)
            .or_insert_with(|| {
                tracing::debug!(target = "session", user_id, "session created");
                Arc::new(Mutex::new(Session::new()))
            })
            .clone()
    }

    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.sessions.read().await.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn get_or_create_is_idempotent() {
        let store = SessionStore::new();
        let a = store.get_or_create(7).await;
        a.lock().await.shopping_mode = true;
        let b = store.get_or_create(7).await;
        assert!(Arc::ptr_eq(&a, &b));
        assert!(b.lock().await.shopping_mode);
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn fresh_session_defaults() {
        let store = SessionStore::new();
        let s = store.get_or_create(1).await;
        let s = s.lock().await;
        assert!(s.items.is_empty());
        assert!(!s.shopping_mode);
        assert_eq!(s.pending_action, None);
        assert_eq!(s.mode_keyboard(), Keyboard::Normal);
    }
}
