use std::{fmt, sync::Arc};

use tokio::sync::Mutex;

use crate::infra::config::Config;
use roster_core::UserStore;

/// Shared server state handed to every handler.
///
/// The store sits behind a single mutex; handlers hold the lock for the
/// whole scan-and-mutate span of an operation, so concurrent requests
/// cannot race a lookup against a removal.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<Mutex<UserStore>>,
    pub config: Arc<Config>,
}

impl fmt::Debug for AppState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppState").finish_non_exhaustive()
    }
}

impl AppState {
    pub fn new(config: Arc<Config>) -> Self {
        Self {
            store: Arc::new(Mutex::new(UserStore::new())),
            config,
        }
    }

    pub fn with_store(store: UserStore, config: Arc<Config>) -> Self {
        Self {
            store: Arc::new(Mutex::new(store)),
            config,
        }
    }
}
