use std::collections::HashMap;

use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::errors::GantryError;

/// Transport configuration for one session.
#[derive(Clone, Debug)]
pub struct ClientConfig {
    pub endpoint: String,
    /// Round-trip timeout, milliseconds.
    pub timeout_ms: Option<u64>,
    /// Additional request headers, sent on every query.
    pub headers: Option<HashMap<String, String>>,
}

#[derive(Clone, Debug)]
pub struct GQLClient {
    config: ClientConfig,
}

#[derive(Serialize)]
struct RequestBody {
    query: String,
}

#[derive(Deserialize, Debug)]
struct ResponseEnvelope {
    data: Option<serde_json::Value>,
    errors: Option<Vec<ErrorMessage>>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct ErrorMessage {
    pub message: String,
}

impl GQLClient {
    pub fn new_with_config(config: ClientConfig) -> Self {
        Self { config }
    }

    fn client(&self) -> Result<Client, GantryError> {
        Client::builder()
            .timeout(std::time::Duration::from_millis(
                self.config.timeout_ms.unwrap_or(600 * 1000),
            ))
            .build()
            .map_err(|e| GantryError::Connection(format!("cannot create http client: {e}")))
    }

    /// Posts one compiled query and returns the `data` envelope.
    pub async fn query(&self, query: &str) -> Result<serde_json::Value, GantryError> {
        let client = self.client()?;
        let body = RequestBody {
            query: query.to_string(),
        };

        let mut request = client.post(&self.config.endpoint).json(&body);
        if let Some(headers) = &self.config.headers {
            for (name, value) in headers {
                request = request.header(name, value);
            }
        }

        let response = request
            .send()
            .await
            .map_err(|e| GantryError::Connection(format!("request failed: {e}")))?;

        let status = response.status().as_u16();
        let body_text = response
            .text()
            .await
            .map_err(|e| GantryError::Protocol(format!("cannot read response body: {e}")))?;

        decode_response(status, &body_text)
    }
}

/// Maps one transport status + body into the error taxonomy, or the decoded
/// `data` object on success.
pub(crate) fn decode_response(
    status: u16,
    body: &str,
) -> Result<serde_json::Value, GantryError> {
    match status {
        200 => {
            let envelope: ResponseEnvelope = serde_json::from_str(body)
                .map_err(|_| GantryError::Protocol("invalid response body".to_string()))?;

            if let Some(errors) = envelope.errors {
                if !errors.is_empty() {
                    let messages = errors
                        .into_iter()
                        .map(|e| e.message)
                        .collect::<Vec<_>>()
                        .join(", ");
                    return Err(GantryError::Protocol(messages));
                }
            }

            match envelope.data {
                Some(data) if !data.is_null() => Ok(data),
                _ => Err(GantryError::Protocol("no data in response".to_string())),
            }
        }
        400 => Err(GantryError::InvalidQuery {
            body: body.to_string(),
        }),
        401 => Err(GantryError::Connection("authentication failed".to_string())),
        status => Err(GantryError::Transport {
            status,
            body: body.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::decode_response;
    use crate::errors::GantryError;

    #[test]
    fn test_success_returns_data() {
        let body = r#"{"data":{"container":{"id":"abc"}}}"#;

        let data = decode_response(200, body).unwrap();
        assert_eq!(data, json!({"container": {"id": "abc"}}));
    }

    #[test]
    fn test_error_list_is_a_protocol_error() {
        let body = r#"{"data":null,"errors":[{"message":"first"},{"message":"second"}]}"#;

        let err = decode_response(200, body).unwrap_err();
        match err {
            GantryError::Protocol(msg) => assert_eq!(msg, "first, second"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_missing_data_is_a_protocol_error() {
        let err = decode_response(200, "{}").unwrap_err();
        match err {
            GantryError::Protocol(msg) => assert_eq!(msg, "no data in response"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_malformed_body_is_a_protocol_error() {
        let err = decode_response(200, "not json at all").unwrap_err();
        match err {
            GantryError::Protocol(msg) => assert_eq!(msg, "invalid response body"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_bad_request_carries_the_body() {
        let err = decode_response(400, "syntax error near withExec").unwrap_err();
        match err {
            GantryError::InvalidQuery { body } => {
                assert_eq!(body, "syntax error near withExec")
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_unauthorized_is_a_connection_error() {
        let err = decode_response(401, "").unwrap_err();
        assert!(matches!(err, GantryError::Connection(_)));
    }

    #[test]
    fn test_other_statuses_are_transport_errors() {
        let err = decode_response(503, "engine going down").unwrap_err();
        match err {
            GantryError::Transport { status, body } => {
                assert_eq!(status, 503);
                assert_eq!(body, "engine going down");
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
