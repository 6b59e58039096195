use crate::api::ApiClient;
use crate::models::Note;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Application context handed to every handler. The note collection is the
/// only mutable piece: a completed refresh replaces it wholesale, and every
/// snapshot is derived from whatever collection is current at that moment.
#[derive(Clone)]
pub struct AppState {
    pub api: ApiClient,
    pub notes: Arc<Mutex<Vec<Note>>>,
}

impl AppState {
    pub fn new(api: ApiClient) -> Self {
        Self {
            api,
            notes: Arc::new(Mutex::new(Vec::new())),
        }
    }
}
