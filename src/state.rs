//! Shared application state injected into handlers.

use std::sync::Arc;

use tower_http::services::ServeDir;

use crate::application::services::LinkService;
use crate::domain::generator::RandomCodeGenerator;
use crate::infrastructure::memory::InMemoryMappingStore;

/// The link service wired with the production store and generator.
pub type DefaultLinkService = LinkService<InMemoryMappingStore, RandomCodeGenerator>;

/// State shared by all handlers.
///
/// Cloning is cheap; every clone refers to the same mapping store.
#[derive(Clone)]
pub struct AppState {
    pub link_service: Arc<DefaultLinkService>,
    /// Frontend files, consulted when a single-segment path is not a code.
    pub static_files: Option<ServeDir>,
}

impl AppState {
    pub fn new(link_service: Arc<DefaultLinkService>) -> Self {
        Self {
            link_service,
            static_files: None,
        }
    }

    /// Builds state around a fresh, empty in-memory store.
    pub fn in_memory() -> Self {
        let store = Arc::new(InMemoryMappingStore::new());
        let generator = Arc::new(RandomCodeGenerator::new());
        Self::new(Arc::new(LinkService::new(store, generator)))
    }

    pub fn with_static_files(mut self, static_files: Option<ServeDir>) -> Self {
        self.static_files = static_files;
        self
    }
}
