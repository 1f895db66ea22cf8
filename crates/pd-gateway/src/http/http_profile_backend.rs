use crate::records::new_profile_record::NewProfileRecord;
use crate::records::profile_record::ProfileRecord;
use crate::{
    GatewayError, GatewayResult, ProfileOrder, ProfileStoreBackend, REST_PATH, RestClient,
    SessionStorage,
};

use pd_core::{NewProfile, Profile};

use std::sync::Arc;

use async_trait::async_trait;
use log::{debug, warn};
use reqwest::{Method, RequestBuilder};

const PREFER_HEADER: &str = "Prefer";
const RETURN_REPRESENTATION: &str = "return=representation";

/// Record store client for a PostgREST-style `/rest/v1` API.
///
/// Requests carry the signed-in user's access token so row-level policies
/// apply; without a session the public API key is used instead.
pub struct HttpProfileBackend {
    rest: RestClient,
    table: String,
    storage: Arc<SessionStorage>,
}

impl HttpProfileBackend {
    pub fn new(rest: RestClient, table: impl Into<String>, storage: Arc<SessionStorage>) -> Self {
        Self {
            rest,
            table: table.into(),
            storage,
        }
    }

    fn authorized(&self, method: Method, path: &str) -> RequestBuilder {
        let token = self
            .storage
            .access_token()
            .unwrap_or_else(|| self.rest.api_key().to_string());
        self.rest.request(method, path).bearer_auth(token)
    }

    fn table_path(&self) -> String {
        format!("{REST_PATH}/{}", self.table)
    }
}

#[async_trait]
impl ProfileStoreBackend for HttpProfileBackend {
    async fn list(&self, order: ProfileOrder) -> GatewayResult<Vec<Profile>> {
        let path = format!("{}?select=*&order={}", self.table_path(), order.as_query());
        let req = self.authorized(Method::GET, &path);

        let records: Vec<ProfileRecord> = self.rest.execute(req).await?;
        debug!("Fetched {} profile records", records.len());

        // A row that cannot be shown is skipped; it must not hide the rest
        let profiles = records
            .into_iter()
            .filter_map(|record| match record.into_profile() {
                Ok(profile) => Some(profile),
                Err(e) => {
                    warn!("Skipping unusable profile row: {e}");
                    None
                }
            })
            .collect();

        Ok(profiles)
    }

    async fn create(&self, profile: NewProfile) -> GatewayResult<Profile> {
        let body = [NewProfileRecord::from(&profile)];
        let req = self
            .authorized(Method::POST, &self.table_path())
            .header(PREFER_HEADER, RETURN_REPRESENTATION)
            .json(&body);

        let records: Vec<ProfileRecord> = self.rest.execute(req).await?;

        records
            .into_iter()
            .next()
            .ok_or_else(|| GatewayError::record("insert returned no row"))?
            .into_profile()
    }
}
