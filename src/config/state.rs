// Application state module
// Immutable configuration plus the mounted endpoints, shared across connections

use std::sync::atomic::AtomicUsize;
use std::sync::Arc;

use super::types::Config;
use crate::ajax::{AjaxGuard, RequestContext};
use crate::api::{Mounted, PageFieldsHandler, RegisterHandler};
use crate::logger::Logger;
use crate::pages::PageStore;

/// Application state
pub struct AppState {
    pub config: Config,
    /// Endpoints in match order
    pub endpoints: Vec<Mounted>,
    /// Open connections, checked against `performance.max_connections`
    pub active_connections: AtomicUsize,
}

impl AppState {
    /// Wire the endpoints with their collaborators
    ///
    /// The page fields endpoint is only mounted when `pages.enabled` is set.
    pub fn new(config: Config, logger: Arc<dyn Logger>, store: Arc<dyn PageStore>) -> Self {
        let context: Arc<dyn RequestContext> = Arc::new(AjaxGuard::new(&config.ajax));

        let mut endpoints = vec![Mounted::new(
            config.api.register_path.clone(),
            Arc::new(RegisterHandler::new(Arc::clone(&logger), Arc::clone(&context))),
        )];

        if config.pages.enabled {
            endpoints.push(Mounted::new(
                config.pages.mount.clone(),
                Arc::new(PageFieldsHandler::new(
                    logger,
                    context,
                    store,
                    config.pages.debug,
                )),
            ));
        }

        Self {
            config,
            endpoints,
            active_connections: AtomicUsize::new(0),
        }
    }
}
