use tracing::Level;

/// Installs a plain stdout subscriber. Query texts are emitted at TRACE.
pub fn default_logging() -> eyre::Result<()> {
    tracing_subscriber::fmt().with_max_level(Level::INFO).init();
    Ok(())
}
