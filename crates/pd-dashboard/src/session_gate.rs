use crate::{RouteResolution, Routes};

use pd_core::Session;
use pd_gateway::{AuthGateway, GatewayResult, SessionEvent, Subscription};

use std::sync::Arc;

use log::{debug, error, info, warn};
use tokio::sync::watch;
use tokio::task::JoinHandle;

/// Where the session state machine stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateState {
    Initializing,
    Authenticated,
    Anonymous,
}

/// Everything the gate knows, replaced atomically on every change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GateSnapshot {
    /// Owned by the initial probe; true until it resolves
    pub loading: bool,
    pub session: Option<Session>,
    pub location: String,
    /// Bumped on every entry into `Authenticated`
    pub epoch: u64,
    feed_seen: bool,
}

impl GateSnapshot {
    fn new(location: String) -> Self {
        Self {
            loading: true,
            session: None,
            location,
            epoch: 0,
            feed_seen: false,
        }
    }

    pub fn state(&self) -> GateState {
        match (self.loading, self.session.is_some()) {
            (true, _) => GateState::Initializing,
            (false, true) => GateState::Authenticated,
            (false, false) => GateState::Anonymous,
        }
    }

    fn enter(&mut self, before: GateState) {
        if before != GateState::Authenticated && self.state() == GateState::Authenticated {
            self.epoch += 1;
        }
    }

    fn settle(&mut self, routes: &Routes) {
        if let RouteResolution::Redirect(target) = routes.resolve(self.state(), &self.location) {
            debug!("Redirecting {} -> {target}", self.location);
            self.location = target;
        }
    }
}

/// Session state machine.
///
/// One probe is issued on start and the push feed is followed for the
/// gate's whole lifetime. Feed events replace the session outright and force
/// navigation; the probe only decides the session if no feed event beat it.
pub struct SessionGate {
    auth: Arc<dyn AuthGateway>,
    routes: Routes,
    state_tx: Arc<watch::Sender<GateSnapshot>>,
    feed_task: Option<JoinHandle<()>>,
}

impl SessionGate {
    /// Subscribe to the feed, then issue the probe. Must run inside a tokio
    /// runtime.
    pub fn start(auth: Arc<dyn AuthGateway>, routes: Routes, initial_path: &str) -> Self {
        let (state_tx, _) = watch::channel(GateSnapshot::new(initial_path.to_string()));
        let state_tx = Arc::new(state_tx);

        let subscription = auth.subscribe();
        let feed_task = tokio::spawn(follow_feed(
            subscription,
            Arc::clone(&state_tx),
            routes.clone(),
        ));

        let probe_auth = Arc::clone(&auth);
        let probe_tx = Arc::clone(&state_tx);
        let probe_routes = routes.clone();
        tokio::spawn(async move {
            let result = probe_auth.probe_session().await;
            apply_probe(&probe_tx, &probe_routes, result);
        });

        Self {
            auth,
            routes,
            state_tx,
            feed_task: Some(feed_task),
        }
    }

    pub fn routes(&self) -> &Routes {
        &self.routes
    }

    pub fn snapshot(&self) -> GateSnapshot {
        self.state_tx.borrow().clone()
    }

    pub fn state(&self) -> GateState {
        self.state_tx.borrow().state()
    }

    pub fn session(&self) -> Option<Session> {
        self.state_tx.borrow().session.clone()
    }

    pub fn location(&self) -> String {
        self.state_tx.borrow().location.clone()
    }

    /// Subscribe to state changes.
    pub fn watch(&self) -> watch::Receiver<GateSnapshot> {
        self.state_tx.subscribe()
    }

    /// What the current location shows
    pub fn view(&self) -> RouteResolution {
        let snapshot = self.state_tx.borrow();
        self.routes.resolve(snapshot.state(), &snapshot.location)
    }

    /// Wait for the probe to resolve
    pub async fn initialized(&self) {
        let mut rx = self.state_tx.subscribe();
        if rx.wait_for(|snapshot| !snapshot.loading).await.is_err() {
            warn!("Session gate closed before the probe resolved");
        }
    }

    /// Go to `path`, landing wherever the current state allows. Returns the
    /// resulting location.
    pub fn navigate(&self, path: &str) -> String {
        let mut location = String::new();
        self.state_tx.send_modify(|snapshot| {
            snapshot.location = path.to_string();
            if snapshot.state() != GateState::Initializing {
                snapshot.settle(&self.routes);
            }
            location = snapshot.location.clone();
        });
        location
    }

    /// Ask the identity service to end the session.
    ///
    /// State only changes through the resulting feed event. A failure is
    /// logged and otherwise ignored.
    pub async fn sign_out(&self) {
        match self.auth.sign_out().await {
            Ok(()) => info!("Sign out requested"),
            Err(e) => error!("Sign out failed: {e}"),
        }
    }

    /// Stop following the feed. An outstanding probe still completes.
    pub async fn shutdown(&mut self) {
        if let Some(task) = self.feed_task.take() {
            task.abort();
            let _ = task.await;
            debug!("Session feed listener stopped");
        }
    }
}

impl Drop for SessionGate {
    fn drop(&mut self) {
        if let Some(task) = self.feed_task.take() {
            task.abort();
        }
    }
}

async fn follow_feed(
    mut subscription: Subscription,
    state_tx: Arc<watch::Sender<GateSnapshot>>,
    routes: Routes,
) {
    while let Some(event) = subscription.recv().await {
        apply_event(&state_tx, &routes, event);
    }
    debug!("Session feed closed");
}

fn apply_event(state_tx: &watch::Sender<GateSnapshot>, routes: &Routes, event: SessionEvent) {
    info!(
        "Session event {:?} ({})",
        event.kind,
        if event.session.is_some() {
            "signed in"
        } else {
            "signed out"
        }
    );

    state_tx.send_modify(|snapshot| {
        let before = snapshot.state();
        let target = routes.home_for(event.session.is_some()).to_string();

        snapshot.session = event.session;
        snapshot.feed_seen = true;
        snapshot.enter(before);

        if snapshot.location != target {
            info!("Navigating {} -> {target}", snapshot.location);
            snapshot.location = target;
        }
    });
}

fn apply_probe(
    state_tx: &watch::Sender<GateSnapshot>,
    routes: &Routes,
    result: GatewayResult<Option<Session>>,
) {
    let probed = match result {
        Ok(session) => session,
        Err(e) => {
            warn!("Session probe failed, continuing signed out: {e}");
            None
        }
    };

    state_tx.send_modify(|snapshot| {
        let before = snapshot.state();

        if snapshot.feed_seen {
            debug!("Probe result superseded by an earlier feed event");
        } else {
            snapshot.session = probed;
        }
        snapshot.loading = false;
        snapshot.enter(before);
        snapshot.settle(routes);

        info!(
            "Session resolved: {:?} at {}",
            snapshot.state(),
            snapshot.location
        );
    });
}

