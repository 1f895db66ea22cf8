use pd_gateway::{AuthGateway, ProfileStoreBackend};

use std::sync::Arc;

/// Handles to the remote capabilities, built once at startup and handed to
/// the dashboard.
#[derive(Clone)]
pub struct SessionContext {
    auth: Arc<dyn AuthGateway>,
    profiles: Arc<dyn ProfileStoreBackend>,
}

impl SessionContext {
    pub fn new(auth: Arc<dyn AuthGateway>, profiles: Arc<dyn ProfileStoreBackend>) -> Self {
        Self { auth, profiles }
    }

    pub fn auth(&self) -> Arc<dyn AuthGateway> {
        Arc::clone(&self.auth)
    }

    pub fn profiles(&self) -> Arc<dyn ProfileStoreBackend> {
        Arc::clone(&self.profiles)
    }
}
