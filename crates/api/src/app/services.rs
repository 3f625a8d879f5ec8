use std::sync::Arc;

use stockroom_infra::{ReleaseInfo, Store};

/// Dependencies shared by every handler.
#[derive(Clone)]
pub struct AppServices {
    store: Arc<dyn Store>,
    release: ReleaseInfo,
}

impl AppServices {
    pub fn new(store: Arc<dyn Store>, release: ReleaseInfo) -> Self {
        Self { store, release }
    }

    pub fn store(&self) -> &dyn Store {
        self.store.as_ref()
    }

    pub fn release(&self) -> &ReleaseInfo {
        &self.release
    }
}

impl core::fmt::Debug for AppServices {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("AppServices")
            .field("release", &self.release)
            .finish_non_exhaustive()
    }
}
