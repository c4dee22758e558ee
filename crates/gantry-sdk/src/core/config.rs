pub struct Config {
    /// Bound on one whole request/response round trip, in milliseconds.
    pub timeout_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self::new(None)
    }
}

impl Config {
    pub fn new(timeout_ms: Option<u64>) -> Self {
        Self {
            timeout_ms: timeout_ms.unwrap_or(600 * 1000),
        }
    }
}
