use crate::{client::HttpPostsApi, config_store::ConfigStore, frontend::Frontend};
use std::sync::Arc;

/// The config store behind the running UI; a file in production, memory in tests.
pub type SharedStore = Box<dyn ConfigStore + Send>;

// ============================================================================
// APPLICATION STATE - Shared by every handler
// ============================================================================
/// There is one user and one page, so every request drives the same
/// `Frontend`. Its parts are locked individually, never across a request to
/// the remote API, so slow calls do not block the page.
#[derive(Clone)]
pub struct AppState {
    pub frontend: Arc<Frontend<HttpPostsApi, SharedStore>>,
}

impl AppState {
    pub fn new(api: HttpPostsApi, store: SharedStore) -> Self {
        Self {
            frontend: Arc::new(Frontend::new(api, store)),
        }
    }
}
