use serde::Deserialize;

use crate::errors::GantryError;

pub const SESSION_PORT_ENV: &str = "GANTRY_SESSION_PORT";
pub const SESSION_TOKEN_ENV: &str = "GANTRY_SESSION_TOKEN";

/// The two out-of-band values a session needs: where the engine listens and
/// the credential it expects.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct ConnectParams {
    pub port: u64,
    pub session_token: String,
}

impl ConnectParams {
    pub fn new(port: u64, session_token: &str) -> Self {
        Self {
            port,
            session_token: session_token.to_string(),
        }
    }

    /// One discovery strategy: an already-running session advertised through
    /// the environment. Callers that own their session pass explicit params
    /// instead.
    pub fn from_env() -> Result<Self, GantryError> {
        let port = std::env::var(SESSION_PORT_ENV).ok();
        let token = std::env::var(SESSION_TOKEN_ENV).ok();

        let (port, session_token) = match (port, token) {
            (Some(port), Some(token)) => (port, token),
            _ => {
                return Err(GantryError::Connection(format!(
                    "this process must run inside a gantry session ({SESSION_PORT_ENV} and {SESSION_TOKEN_ENV} are not set)"
                )))
            }
        };

        let port = port.parse::<u64>().map_err(|e| {
            GantryError::Connection(format!("{SESSION_PORT_ENV} is not a port number: {e}"))
        })?;

        Ok(Self { port, session_token })
    }

    pub fn url(&self) -> String {
        format!("http://127.0.0.1:{}/query", self.port)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::ConnectParams;

    #[test]
    fn test_url() {
        let params = ConnectParams::new(8080, "secret");

        assert_eq!(params.url(), "http://127.0.0.1:8080/query");
    }
}
