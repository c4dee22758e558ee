use std::sync::Arc;

use crate::core::config::Config;
use crate::core::connect_params::ConnectParams;
use crate::core::graphql_client::{DefaultGraphQLClient, DynGraphQLClient};
use crate::errors::{ConnectError, GantryError};
use crate::gen::Query;
use crate::querybuilder::query;

pub type GantryConn = Query;

/// Connects to the session advertised through the environment and hands the
/// root client to the given pipeline.
pub async fn connect<F, Fut>(gantry: F) -> Result<(), ConnectError>
where
    F: FnOnce(GantryConn) -> Fut + 'static,
    Fut: futures::Future<Output = eyre::Result<()>> + 'static,
{
    connect_opts(Config::default(), gantry).await
}

pub async fn connect_opts<F, Fut>(cfg: Config, gantry: F) -> Result<(), ConnectError>
where
    F: FnOnce(GantryConn) -> Fut + 'static,
    Fut: futures::Future<Output = eyre::Result<()>> + 'static,
{
    let conn = ConnectParams::from_env().map_err(ConnectError::FailedToConnect)?;
    let client = connect_with_params(cfg, &conn).await?;

    gantry(client).await.map_err(ConnectError::GantryContext)?;

    Ok(())
}

/// Builds a client against explicit session parameters. One liveness probe
/// runs before the client is handed out; a dead endpoint fails here rather
/// than on the first real pipeline.
pub async fn connect_with_params(
    cfg: Config,
    conn: &ConnectParams,
) -> Result<GantryConn, ConnectError> {
    let graphql_client: DynGraphQLClient = Arc::new(DefaultGraphQLClient::new(conn, &cfg));

    probe(graphql_client.clone())
        .await
        .map_err(ConnectError::FailedToConnect)?;

    Ok(Query::new(query(), graphql_client))
}

async fn probe(graphql_client: DynGraphQLClient) -> Result<(), GantryError> {
    let chain = query().append("container", vec![]);

    chain
        .execute::<Option<String>>("id", graphql_client)
        .await
        .map_err(|e| GantryError::Connection(format!("failed to reach gantry engine: {e}")))?;

    Ok(())
}
