use crate::FEED_CAPACITY;

use pd_core::Session;

use log::{debug, warn};
use tokio::sync::broadcast;
use tokio::sync::broadcast::error::RecvError;

/// What happened to the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEventKind {
    SignedIn,
    SignedOut,
    TokenRefreshed,
    UserUpdated,
}

/// One push-feed event. The carried session replaces whatever the receiver
/// held before; `None` means signed out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionEvent {
    pub kind: SessionEventKind,
    pub session: Option<Session>,
}

impl SessionEvent {
    pub fn signed_in(session: Session) -> Self {
        Self {
            kind: SessionEventKind::SignedIn,
            session: Some(session),
        }
    }

    pub fn signed_out() -> Self {
        Self {
            kind: SessionEventKind::SignedOut,
            session: None,
        }
    }

    pub fn token_refreshed(session: Session) -> Self {
        Self {
            kind: SessionEventKind::TokenRefreshed,
            session: Some(session),
        }
    }

    pub fn user_updated(session: Session) -> Self {
        Self {
            kind: SessionEventKind::UserUpdated,
            session: Some(session),
        }
    }
}

/// Push feed of session changes
#[derive(Clone)]
pub struct SessionFeed {
    tx: broadcast::Sender<SessionEvent>,
}

impl SessionFeed {
    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(FEED_CAPACITY);
        Self { tx }
    }

    /// Start receiving events published from now on
    pub fn subscribe(&self) -> Subscription {
        Subscription {
            rx: self.tx.subscribe(),
        }
    }

    /// Deliver an event to every live subscription, returning how many got it
    pub fn publish(&self, event: SessionEvent) -> usize {
        debug!("Publishing session event {:?}", event.kind);
        self.tx.send(event).unwrap_or(0)
    }

    /// Number of live subscriptions
    pub fn subscriber_count(&self) -> usize {
        self.tx.receiver_count()
    }
}

impl Default for SessionFeed {
    fn default() -> Self {
        Self::new()
    }
}

/// A live registration on the feed. Dropping it unsubscribes.
pub struct Subscription {
    rx: broadcast::Receiver<SessionEvent>,
}

impl Subscription {
    /// Next event in emission order; `None` once the feed is gone.
    ///
    /// A subscriber that fell behind skips straight to the oldest event still
    /// buffered. Events are full replacements, so nothing is lost but
    /// intermediate states.
    pub async fn recv(&mut self) -> Option<SessionEvent> {
        loop {
            match self.rx.recv().await {
                Ok(event) => return Some(event),
                Err(RecvError::Lagged(skipped)) => {
                    warn!("Session subscription lagged, skipped {skipped} events");
                }
                Err(RecvError::Closed) => return None,
            }
        }
    }

    /// Release the registration
    pub fn unsubscribe(self) {
        drop(self);
    }
}
