use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConnectError {
    #[error("failed to connect to gantry engine")]
    FailedToConnect(#[source] GantryError),
    #[error("gantry session error")]
    GantryContext(#[source] eyre::Error),
}

/// Every failure a terminal accessor can surface. Nothing here is recovered
/// from locally; callers see the first failure in their pipeline.
#[derive(Error, Debug)]
pub enum GantryError {
    #[error("engine session unavailable: {0}")]
    Connection(String),
    #[error("engine rejected query: {body}")]
    InvalidQuery { body: String },
    #[error("protocol error: {0}")]
    Protocol(String),
    #[error("transport error: HTTP {status}: {body}")]
    Transport { status: u16, body: String },
    #[error("cannot render value into query text: {0}")]
    UnsupportedValue(String),
    #[error("failed to decode response value")]
    Decode(#[source] serde_json::Error),
}
