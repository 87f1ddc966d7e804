use std::fmt;
use std::sync::Arc;

use marquee_core::MovieStore;

use crate::config::Config;

/// Shared per-request state: the store port plus the startup configuration.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn MovieStore>,
    pub config: Arc<Config>,
}

impl fmt::Debug for AppState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppState").finish_non_exhaustive()
    }
}
