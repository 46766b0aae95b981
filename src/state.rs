use crate::config::Config;
use crate::store::TodoStore;
use std::sync::Arc;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub store: TodoStore,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            store: TodoStore::new(config.data_file.clone()),
            config: Arc::new(config),
        }
    }
}
