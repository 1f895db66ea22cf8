use crate::UNEXPECTED_ERROR_MESSAGE;

use pd_core::Profile;
use pd_gateway::{ProfileOrder, ProfileStoreBackend};

use std::sync::Arc;

use log::{error, info, warn};
use tokio::sync::watch;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreStatus {
    Loading,
    /// Fetch failed; the only way out is a full reload
    Error(String),
    Ready,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreState {
    pub status: StoreStatus,
    pub profiles: Vec<Profile>,
}

/// In-memory profile collection for one authenticated mount.
///
/// Mounting issues a single list request. Locally created profiles are
/// prepended without re-sorting; a list response replaces the collection
/// wholesale whenever it lands.
#[derive(Clone)]
pub struct ProfileStore {
    state_tx: Arc<watch::Sender<StoreState>>,
}

impl ProfileStore {
    /// Mount a fresh collection and start fetching it. Must run inside a
    /// tokio runtime.
    pub fn mount(backend: Arc<dyn ProfileStoreBackend>) -> Self {
        let (state_tx, _) = watch::channel(StoreState {
            status: StoreStatus::Loading,
            profiles: Vec::new(),
        });
        let state_tx = Arc::new(state_tx);

        let fetch_tx = Arc::clone(&state_tx);
        tokio::spawn(async move {
            // Inner task isolates a panicking backend
            let fetched = tokio::spawn(async move {
                backend.list(ProfileOrder::CreatedAtDesc).await
            })
            .await;

            let outcome = match fetched {
                Ok(Ok(profiles)) => {
                    info!("Loaded {} profiles", profiles.len());
                    Ok(profiles)
                }
                Ok(Err(e)) if e.is_remote() => {
                    warn!("Failed to load profiles: {e}");
                    Err(e.detail())
                }
                Ok(Err(e)) => {
                    error!("Unexpected error loading profiles: {e}");
                    Err(UNEXPECTED_ERROR_MESSAGE.to_string())
                }
                Err(join_error) => {
                    error!("Profile fetch task failed: {join_error}");
                    Err(UNEXPECTED_ERROR_MESSAGE.to_string())
                }
            };

            fetch_tx.send_modify(|state| match outcome {
                Ok(profiles) => {
                    state.profiles = profiles;
                    state.status = StoreStatus::Ready;
                }
                Err(message) => state.status = StoreStatus::Error(message),
            });
        });

        Self { state_tx }
    }

    pub fn snapshot(&self) -> StoreState {
        self.state_tx.borrow().clone()
    }

    pub fn status(&self) -> StoreStatus {
        self.state_tx.borrow().status.clone()
    }

    pub fn profiles(&self) -> Vec<Profile> {
        self.state_tx.borrow().profiles.clone()
    }

    /// Subscribe to state changes.
    pub fn watch(&self) -> watch::Receiver<StoreState> {
        self.state_tx.subscribe()
    }

    /// Put `profile` at the front of the collection
    pub fn append(&self, profile: Profile) {
        info!("Appending profile {} ({})", profile.id, profile.name);
        self.state_tx
            .send_modify(|state| state.profiles.insert(0, profile));
    }

    /// Wait for the fetch to settle, successfully or not
    pub async fn ready(&self) -> StoreStatus {
        let mut rx = self.state_tx.subscribe();
        match rx
            .wait_for(|state| state.status != StoreStatus::Loading)
            .await
        {
            Ok(state) => state.status.clone(),
            Err(_) => self.status(),
        }
    }
}
