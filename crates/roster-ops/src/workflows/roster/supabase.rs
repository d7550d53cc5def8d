use serde::de::DeserializeOwned;
use tracing::info;

use crate::config::StoreConfig;

use super::domain::{CollaboratorRecord, RoleRecord, RosterSnapshot, TeamRecord};

const COLLABORATOR_SELECT: &str = "id,name,role,status,hire_date,equipe,oab_number,oab_uf";
const REFERENCE_SELECT: &str = "id,name";

/// Failures raised by the roster store boundary.
///
/// Callers must treat any of these as "no data available": the audit pipeline
/// is never run on a partial fetch, so a store failure is distinguishable
/// from a roster with zero eligible members.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),
    #[error("request for '{table}' failed: {source}")]
    Transport {
        table: &'static str,
        #[source]
        source: reqwest::Error,
    },
    #[error("'{table}' responded with HTTP {status}")]
    Status { table: &'static str, status: u16 },
    #[error("could not decode '{table}' payload: {source}")]
    Decode {
        table: &'static str,
        #[source]
        source: reqwest::Error,
    },
}

/// REST client for the hosted roster store (PostgREST endpoints).
///
/// Credentials arrive as explicit configuration; the same key is sent as both
/// the `apikey` header and the bearer token, which is what the store's REST
/// gateway expects for anonymous-role access.
pub struct StoreClient {
    base_url: String,
    api_key: String,
    client: reqwest::Client,
}

impl StoreClient {
    pub fn new(config: &StoreConfig) -> Result<Self, SourceError> {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .danger_accept_invalid_certs(config.accept_invalid_certs)
            .build()
            .map_err(SourceError::Client)?;

        Ok(Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
            client,
        })
    }

    /// Fetch all three tables up front. Any failure aborts the snapshot.
    pub async fn fetch_snapshot(&self) -> Result<RosterSnapshot, SourceError> {
        let collaborators: Vec<CollaboratorRecord> =
            self.fetch_table("collaborators", COLLABORATOR_SELECT).await?;
        let roles: Vec<RoleRecord> = self.fetch_table("roles", REFERENCE_SELECT).await?;
        let teams: Vec<TeamRecord> = self.fetch_table("teams", REFERENCE_SELECT).await?;

        info!(
            collaborators = collaborators.len(),
            roles = roles.len(),
            teams = teams.len(),
            "roster snapshot fetched"
        );

        Ok(RosterSnapshot {
            collaborators,
            roles,
            teams,
        })
    }

    async fn fetch_table<T: DeserializeOwned>(
        &self,
        table: &'static str,
        select: &str,
    ) -> Result<Vec<T>, SourceError> {
        let url = format!("{}/rest/v1/{}?select={}", self.base_url, table, select);

        let response = self
            .client
            .get(&url)
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
            .send()
            .await
            .map_err(|source| SourceError::Transport { table, source })?;

        let status = response.status();
        if !status.is_success() {
            return Err(SourceError::Status {
                table,
                status: status.as_u16(),
            });
        }

        response
            .json::<Vec<T>>()
            .await
            .map_err(|source| SourceError::Decode { table, source })
    }
}
