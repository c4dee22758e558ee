pub mod config;
pub mod connect_params;
pub mod gql_client;
pub mod graphql_client;
