//! In-memory, token-keyed quiz sessions.
//!
//! Nothing here outlives the process: a session is created when a visitor
//! first opens the quiz, keyed by the ulid token carried in their cookie,
//! and dropped once it sits idle past the cookie lifetime.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

use tokio::sync::RwLock;
use ulid::Ulid;

use crate::engine::QuizSession;

/// Matches the Max-Age on the session cookie.
const SESSION_TTL: Duration = Duration::from_secs(3600);

struct Entry {
    session: QuizSession,
    touched: Instant,
}

#[derive(Clone, Default)]
pub struct SessionStore {
    inner: Arc<RwLock<HashMap<String, Entry>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a fresh session and return its token. Stale entries are swept
    /// here rather than by a background task.
    pub async fn create(&self) -> String {
        let token = Ulid::new().to_string();
        let mut sessions = self.inner.write().await;
        sessions.retain(|_, entry| entry.touched.elapsed() < SESSION_TTL);
        sessions.insert(
            token.clone(),
            Entry {
                session: QuizSession::new(),
                touched: Instant::now(),
            },
        );
        token
    }

    pub async fn contains(&self, token: &str) -> bool {
        let sessions = self.inner.read().await;
        sessions
            .get(token)
            .is_some_and(|entry| entry.touched.elapsed() < SESSION_TTL)
    }

    /// Apply one operation to the session behind `token` and return its
    /// result. `None` for unknown or expired tokens.
    pub async fn update<R>(
        &self,
        token: &str,
        op: impl FnOnce(&mut QuizSession) -> R,
    ) -> Option<R> {
        let mut sessions = self.inner.write().await;
        let entry = sessions.get_mut(token)?;
        if entry.touched.elapsed() >= SESSION_TTL {
            sessions.remove(token);
            return None;
        }
        entry.touched = Instant::now();
        Some(op(&mut entry.session))
    }

    pub async fn snapshot(&self, token: &str) -> Option<QuizSession> {
        self.update(token, |session| session.clone()).await
    }
}
