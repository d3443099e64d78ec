use std::collections::HashMap;
use std::sync::RwLock;

use careline_schema::{SessionId, Turn};

/// Process-wide session log store. Logs are created lazily on first
/// append, are append-only, and never expire within the process lifetime.
/// The map is guarded by a single coarse lock; contention is not a concern
/// at this scale.
#[derive(Default)]
pub struct SessionStore {
    inner: RwLock<HashMap<SessionId, Vec<Turn>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&self, id: &SessionId, turn: Turn) {
        let mut map = match self.inner.write() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        map.entry(id.clone()).or_default().push(turn);
    }

    /// Snapshot of a session's turn log, insertion-ordered. Unknown ids
    /// yield an empty log, never an error.
    pub fn get(&self, id: &SessionId) -> Vec<Turn> {
        let map = match self.inner.read() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        map.get(id).cloned().unwrap_or_default()
    }
}
