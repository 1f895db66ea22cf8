use crate::GatewayResult;

use pd_core::{NewProfile, Profile};

use async_trait::async_trait;

/// Sort order for listing profiles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProfileOrder {
    #[default]
    CreatedAtDesc,
    CreatedAtAsc,
}

impl ProfileOrder {
    /// Query-string form understood by the record store
    pub fn as_query(&self) -> &'static str {
        match self {
            Self::CreatedAtDesc => "created_at.desc",
            Self::CreatedAtAsc => "created_at.asc",
        }
    }
}

/// Profile record store capability.
#[async_trait]
pub trait ProfileStoreBackend: Send + Sync {
    /// Every visible profile, in the requested order
    async fn list(&self, order: ProfileOrder) -> GatewayResult<Vec<Profile>>;

    /// Insert a profile and return the stored record
    async fn create(&self, profile: NewProfile) -> GatewayResult<Profile>;
}
