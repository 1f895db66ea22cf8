use crate::{
    DashboardError, DashboardResult, GateState, ProfileCreator, ProfileStore, RouteResolution,
    Routes, SearchIndex, SessionContext, SessionGate, StoreStatus, View,
};

use pd_core::{Profile, SearchSummary, Session};

use log::{debug, info};

/// Signed-in user as shown in the header
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserBadge {
    pub display_name: String,
    pub initial: Option<char>,
}

impl From<&Session> for UserBadge {
    fn from(session: &Session) -> Self {
        Self {
            display_name: session.display_name().to_string(),
            initial: session.initial(),
        }
    }
}

/// Contents of the protected directory view
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryScreen {
    pub user: UserBadge,
    pub status: StoreStatus,
    pub profiles: Vec<Profile>,
    pub query: String,
    pub summary: SearchSummary,
    pub show_create: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    Loading,
    Landing,
    Directory(DirectoryScreen),
}

struct MountedStore {
    epoch: u64,
    store: ProfileStore,
}

/// Top-level shell: the session gate decides what is mounted, and the
/// directory view mounts a fresh profile store for every signed-in period.
pub struct Dashboard {
    context: SessionContext,
    gate: SessionGate,
    store: Option<MountedStore>,
    search: SearchIndex,
}

impl Dashboard {
    /// Must run inside a tokio runtime.
    pub fn start(context: SessionContext, routes: Routes, initial_path: &str) -> Self {
        info!("Starting dashboard at {initial_path}");
        let gate = SessionGate::start(context.auth(), routes, initial_path);

        Self {
            context,
            gate,
            store: None,
            search: SearchIndex::new(),
        }
    }

    pub fn gate(&self) -> &SessionGate {
        &self.gate
    }

    pub fn context(&self) -> &SessionContext {
        &self.context
    }

    /// Profile store of the current signed-in period, if mounted
    pub fn store(&self) -> Option<&ProfileStore> {
        self.store.as_ref().map(|mounted| &mounted.store)
    }

    pub fn search(&self) -> &SearchIndex {
        &self.search
    }

    /// Wait for the session probe to resolve
    pub async fn initialized(&self) {
        self.gate.initialized().await;
    }

    /// Build the screen for the current location, mounting or dropping the
    /// profile store to match the session.
    pub fn render(&mut self) -> Screen {
        let view = match self.gate.view() {
            RouteResolution::Render(view) => view,
            RouteResolution::Redirect(target) => {
                let location = self.gate.navigate(&target);
                debug!("Render followed redirect to {location}");
                match self.gate.view() {
                    RouteResolution::Render(view) => view,
                    RouteResolution::Redirect(_) => View::Placeholder,
                }
            }
        };

        let snapshot = self.gate.snapshot();
        if snapshot.state() != GateState::Authenticated && self.store.take().is_some() {
            info!("Unmounted profile store");
        }

        match (view, snapshot.session) {
            (View::Placeholder, _) => Screen::Loading,
            (View::Landing, _) => Screen::Landing,
            (View::Directory, Some(session)) => {
                let store = self.mount_store(snapshot.epoch);
                Screen::Directory(self.directory(&session, &store))
            }
            (View::Directory, None) => Screen::Loading,
        }
    }

    /// Go to `path`; returns where the user actually lands
    pub fn navigate(&self, path: &str) -> String {
        self.gate.navigate(path)
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.search.set_query(query);
    }

    pub fn clear_query(&mut self) {
        self.search.clear();
    }

    /// Open the creation form for the signed-in user.
    ///
    /// Only allowed once the collection has loaded: a list response landing
    /// later would replace the collection and drop the new profile.
    pub fn open_creator(&mut self) -> DashboardResult<ProfileCreator> {
        let snapshot = self.gate.snapshot();
        let Some(session) = snapshot.session.filter(|_| !snapshot.loading) else {
            return Err(DashboardError::not_authenticated());
        };

        if !self.search.create_affordance_visible() {
            return Err(DashboardError::search_active());
        }

        let store = match &self.store {
            Some(mounted) if mounted.epoch == snapshot.epoch => mounted.store.clone(),
            _ => return Err(DashboardError::store_not_mounted()),
        };

        match store.status() {
            StoreStatus::Ready => {}
            StoreStatus::Loading => return Err(DashboardError::store_not_ready("loading")),
            StoreStatus::Error(message) => return Err(DashboardError::store_not_ready(message)),
        }

        Ok(ProfileCreator::new(
            self.context.profiles(),
            session.user_id(),
            store,
        ))
    }

    pub async fn sign_out(&self) {
        self.gate.sign_out().await;
    }

    /// Throw away all client state and start over from the current location.
    ///
    /// This is the only recovery from a failed profile fetch.
    pub async fn reload(&mut self) {
        let location = self.gate.location();
        info!("Reloading dashboard at {location}");

        self.gate.shutdown().await;
        self.store = None;
        self.search.clear();
        self.gate = SessionGate::start(self.context.auth(), self.gate.routes().clone(), &location);
    }

    pub async fn shutdown(&mut self) {
        self.gate.shutdown().await;
        self.store = None;
        info!("Dashboard shut down");
    }

    fn mount_store(&mut self, epoch: u64) -> ProfileStore {
        match &self.store {
            Some(mounted) if mounted.epoch == epoch => mounted.store.clone(),
            _ => {
                info!("Mounting profile store for session epoch {epoch}");
                let store = ProfileStore::mount(self.context.profiles());
                self.store = Some(MountedStore {
                    epoch,
                    store: store.clone(),
                });
                store
            }
        }
    }

    fn directory(&self, session: &Session, store: &ProfileStore) -> DirectoryScreen {
        let state = store.snapshot();
        let view = self.search.view(&state.profiles);

        DirectoryScreen {
            user: UserBadge::from(session),
            status: state.status.clone(),
            profiles: view.profiles.into_iter().cloned().collect(),
            query: self.search.query().to_string(),
            summary: view.summary,
            show_create: self.search.create_affordance_visible()
                && state.status == StoreStatus::Ready,
        }
    }
}
