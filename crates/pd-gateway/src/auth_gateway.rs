use crate::{GatewayResult, Subscription};

use pd_core::{Session, SessionUser};

use async_trait::async_trait;

/// Result of registering a new account.
///
/// `session` is `None` when the identity service wants the address verified
/// before it issues a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignUpOutcome {
    pub user: SessionUser,
    pub session: Option<Session>,
}

impl SignUpOutcome {
    pub fn needs_confirmation(&self) -> bool {
        self.session.is_none()
    }
}

/// Identity service capability.
///
/// Implementations publish every session change they cause on the feed
/// handed out by [`AuthGateway::subscribe`].
#[async_trait]
pub trait AuthGateway: Send + Sync {
    /// One-shot read of the current session
    async fn probe_session(&self) -> GatewayResult<Option<Session>>;

    /// Register for session-change events until the subscription is dropped
    fn subscribe(&self) -> Subscription;

    async fn sign_in(&self, email: &str, password: &str) -> GatewayResult<Session>;

    async fn sign_up(&self, email: &str, password: &str) -> GatewayResult<SignUpOutcome>;

    async fn sign_out(&self) -> GatewayResult<()>;
}
