use crate::records::token_response::{SignUpResponse, TokenResponse};
use crate::{
    AUTH_PATH, AuthGateway, GatewayResult, RestClient, SessionEvent, SessionFeed, SessionStorage,
    SignUpOutcome, Subscription,
};

use pd_core::Session;

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use log::{info, warn};
use reqwest::Method;
use serde::Serialize;

#[derive(Serialize)]
struct Credentials<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Serialize)]
struct RefreshRequest<'a> {
    refresh_token: &'a str,
}

/// Identity service client for a GoTrue-style `/auth/v1` API.
///
/// The session lives in [`SessionStorage`]; every change made through this
/// client is published on its [`SessionFeed`].
pub struct HttpAuthGateway {
    rest: RestClient,
    storage: Arc<SessionStorage>,
    feed: SessionFeed,
}

impl HttpAuthGateway {
    pub fn new(rest: RestClient, storage: Arc<SessionStorage>) -> Self {
        Self {
            rest,
            storage,
            feed: SessionFeed::new(),
        }
    }

    pub fn feed(&self) -> &SessionFeed {
        &self.feed
    }

    pub fn storage(&self) -> &Arc<SessionStorage> {
        &self.storage
    }

    async fn refresh(
        &self,
        session: &Session,
        refresh_token: &str,
    ) -> GatewayResult<Option<Session>> {
        let req = self
            .rest
            .request(
                Method::POST,
                &format!("{AUTH_PATH}/token?grant_type=refresh_token"),
            )
            .json(&RefreshRequest { refresh_token });

        match self.rest.execute::<TokenResponse>(req).await {
            Ok(token) => {
                let refreshed = token.into_session(Utc::now());
                self.storage.store(&refreshed)?;
                info!("Refreshed session for user {}", refreshed.user_id());
                self.feed.publish(SessionEvent::token_refreshed(refreshed.clone()));
                Ok(Some(refreshed))
            }
            Err(e) if e.is_rejection() => {
                warn!(
                    "Refresh rejected for user {}, dropping session: {}",
                    session.user_id(),
                    e.detail()
                );
                self.storage.clear()?;
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }
}

#[async_trait]
impl AuthGateway for HttpAuthGateway {
    async fn probe_session(&self) -> GatewayResult<Option<Session>> {
        let Some(session) = self.storage.load()? else {
            return Ok(None);
        };

        if !session.is_expired_at(Utc::now()) {
            return Ok(Some(session));
        }

        match session.refresh_token.clone() {
            Some(refresh_token) => self.refresh(&session, &refresh_token).await,
            None => {
                info!("Stored session expired with no refresh token");
                self.storage.clear()?;
                Ok(None)
            }
        }
    }

    fn subscribe(&self) -> Subscription {
        self.feed.subscribe()
    }

    async fn sign_in(&self, email: &str, password: &str) -> GatewayResult<Session> {
        let req = self
            .rest
            .request(Method::POST, &format!("{AUTH_PATH}/token?grant_type=password"))
            .json(&Credentials { email, password });

        let session = self
            .rest
            .execute::<TokenResponse>(req)
            .await?
            .into_session(Utc::now());

        self.storage.store(&session)?;
        info!("Signed in as user {}", session.user_id());
        self.feed.publish(SessionEvent::signed_in(session.clone()));
        Ok(session)
    }

    async fn sign_up(&self, email: &str, password: &str) -> GatewayResult<SignUpOutcome> {
        let req = self
            .rest
            .request(Method::POST, &format!("{AUTH_PATH}/signup"))
            .json(&Credentials { email, password });

        match self.rest.execute::<SignUpResponse>(req).await? {
            SignUpResponse::Session(token) => {
                let session = token.into_session(Utc::now());
                self.storage.store(&session)?;
                info!("Signed up and signed in as user {}", session.user_id());
                self.feed.publish(SessionEvent::signed_in(session.clone()));
                Ok(SignUpOutcome {
                    user: session.user.clone(),
                    session: Some(session),
                })
            }
            SignUpResponse::User(user) => {
                info!("Signed up user {}, confirmation pending", user.id);
                Ok(SignUpOutcome {
                    user,
                    session: None,
                })
            }
        }
    }

    async fn sign_out(&self) -> GatewayResult<()> {
        if let Some(token) = self.storage.access_token() {
            let req = self
                .rest
                .request(Method::POST, &format!("{AUTH_PATH}/logout"))
                .bearer_auth(token);
            self.rest.execute_empty(req).await?;
        }

        self.storage.clear()?;
        info!("Signed out");
        self.feed.publish(SessionEvent::signed_out());
        Ok(())
    }
}
