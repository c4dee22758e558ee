use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use base64::engine::general_purpose;
use base64::Engine;

use crate::core::config::Config;
use crate::core::connect_params::ConnectParams;
use crate::core::gql_client::{ClientConfig, GQLClient};
use crate::errors::GantryError;

/// The transport seam facades talk through. Swapped for a mock in tests.
#[async_trait]
pub trait GraphQLClient {
    async fn query(&self, query: &str) -> Result<serde_json::Value, GantryError>;
}

pub type DynGraphQLClient = Arc<dyn GraphQLClient + Send + Sync>;

pub const USER_AGENT: &str = concat!("gantry-sdk-rust/", env!("CARGO_PKG_VERSION"));

#[derive(Debug)]
pub struct DefaultGraphQLClient {
    client: GQLClient,
}

impl DefaultGraphQLClient {
    pub fn new(conn: &ConnectParams, cfg: &Config) -> Self {
        let token = general_purpose::STANDARD.encode(format!("{}:", conn.session_token));

        let mut headers = HashMap::new();
        headers.insert("Authorization".to_string(), format!("Basic {token}"));
        headers.insert("User-Agent".to_string(), USER_AGENT.to_string());

        Self {
            client: GQLClient::new_with_config(ClientConfig {
                endpoint: conn.url(),
                timeout_ms: Some(cfg.timeout_ms),
                headers: Some(headers),
            }),
        }
    }
}

#[async_trait]
impl GraphQLClient for DefaultGraphQLClient {
    async fn query(&self, query: &str) -> Result<serde_json::Value, GantryError> {
        self.client.query(query).await
    }
}
