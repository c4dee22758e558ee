use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use pretty_assertions::assert_eq;
use serde_json::json;

use gantry_sdk::core::graphql_client::{DynGraphQLClient, GraphQLClient};
use gantry_sdk::errors::GantryError;
use gantry_sdk::querybuilder::query;
use gantry_sdk::{
    ContainerWithExposedPortOptsBuilder, Directory, DirectoryId, EnvVariable, Host, HostId,
    NetworkProtocol, Query,
};

/// Answers every query through a fixed closure and records the query texts
/// it was asked, in order.
struct MockClient {
    queries: Mutex<Vec<String>>,
    respond: Box<dyn Fn(&str) -> serde_json::Value + Send + Sync>,
}

impl MockClient {
    fn new(
        respond: impl Fn(&str) -> serde_json::Value + Send + Sync + 'static,
    ) -> Arc<MockClient> {
        Arc::new(MockClient {
            queries: Mutex::new(Vec::new()),
            respond: Box::new(respond),
        })
    }

    fn queries(&self) -> Vec<String> {
        self.queries.lock().unwrap().clone()
    }
}

#[async_trait]
impl GraphQLClient for MockClient {
    async fn query(&self, query: &str) -> Result<serde_json::Value, GantryError> {
        self.queries.lock().unwrap().push(query.to_string());
        Ok((self.respond)(query))
    }
}

fn root(client: &Arc<MockClient>) -> Query {
    let graphql_client: DynGraphQLClient = client.clone();
    Query::new(query(), graphql_client)
}

#[tokio::test]
async fn test_container_pipeline_query_text_and_result() {
    let client = MockClient::new(|_| {
        json!({ "container": { "from": { "withExec": { "stdout": "hi\n" } } } })
    });

    let stdout = root(&client)
        .container()
        .from("alpine:latest")
        .with_exec(vec!["echo", "hi"])
        .stdout()
        .await
        .unwrap();

    assert_eq!(stdout, "hi\n");
    assert_eq!(
        client.queries(),
        vec![
            r#"query { container { from(address: "alpine:latest") { withExec(args: ["echo", "hi"]) { stdout } } } }"#
                .to_string()
        ]
    );
}

#[tokio::test]
async fn test_id_is_fetched_once_and_cached() {
    let client = MockClient::new(|_| json!({ "container": { "id": "ctr-1" } }));

    let ctr = root(&client).container();
    let first = ctr.id().await.unwrap();
    let second = ctr.id().await.unwrap();

    assert_eq!(first.0, "ctr-1");
    assert_eq!(second.0, "ctr-1");
    assert_eq!(client.queries().len(), 1);
}

#[tokio::test]
async fn test_sync_forces_evaluation_and_primes_the_id() {
    let client = MockClient::new(|_| json!({ "container": { "id": "ctr-1" } }));

    let ctr = root(&client).container();
    let synced = ctr.sync().await.unwrap();
    let id = synced.id().await.unwrap();

    assert_eq!(id.0, "ctr-1");
    assert_eq!(client.queries().len(), 1);
}

#[tokio::test]
async fn test_chaining_does_not_share_the_id_cache() {
    let client = MockClient::new(|query| {
        if query.contains("withWorkdir") {
            json!({ "container": { "withWorkdir": { "id": "ctr-2" } } })
        } else {
            json!({ "container": { "id": "ctr-1" } })
        }
    });

    let base = root(&client).container();
    base.id().await.unwrap();

    let derived = base.with_workdir("/app");
    let id = derived.id().await.unwrap();

    assert_eq!(id.0, "ctr-2");
    assert_eq!(client.queries().len(), 2);
}

#[tokio::test]
async fn test_load_container_from_id_skips_the_original_chain() {
    let client =
        MockClient::new(|_| json!({ "container": { "loadFromId": { "stdout": "cached\n" } } }));

    let ctr = root(&client).load_container_from_id("ctr-1".into());
    let stdout = ctr.stdout().await.unwrap();

    assert_eq!(stdout, "cached\n");
    assert_eq!(
        client.queries(),
        vec![r#"query { container { loadFromId(id: "ctr-1") { stdout } } }"#.to_string()]
    );
}

#[tokio::test]
async fn test_node_argument_resolves_before_the_outer_query() {
    let client = MockClient::new(|query| {
        if query.starts_with("query { directory") {
            json!({ "directory": { "loadFromId": { "id": "dir-1" } } })
        } else {
            json!({ "container": { "withDirectory": { "id": "ctr-9" } } })
        }
    });

    let graphql_client: DynGraphQLClient = client.clone();
    let dir = Directory::from_id(DirectoryId::from("dir-1"), graphql_client);
    let id = root(&client)
        .container()
        .with_directory("/src", dir)
        .id()
        .await
        .unwrap();

    assert_eq!(id.0, "ctr-9");

    let queries = client.queries();
    assert_eq!(queries.len(), 2);
    assert_eq!(
        queries[0],
        r#"query { directory { loadFromId(id: "dir-1") { id } } }"#
    );
    assert_eq!(
        queries[1],
        r#"query { container { withDirectory(path: "/src", directory: "dir-1") { id } } }"#
    );
}

#[tokio::test]
async fn test_env_variable_missing_is_none() {
    let client =
        MockClient::new(|_| json!({ "container": { "from": { "envVariable": null } } }));

    let value = root(&client)
        .container()
        .from("alpine:latest")
        .env_variable("MISSING")
        .await
        .unwrap();

    assert_eq!(value, None);
    assert!(client.queries()[0].contains(r#"envVariable(name: "MISSING")"#));
}

#[tokio::test]
async fn test_env_variables_use_a_sub_selection() {
    let client = MockClient::new(|_| {
        json!({
            "container": {
                "envVariables": [
                    { "name": "PATH", "value": "/usr/bin" },
                    { "name": "HOME", "value": "/root" },
                ]
            }
        })
    });

    let vars = root(&client).container().env_variables().await.unwrap();

    assert_eq!(
        vars,
        vec![
            EnvVariable {
                name: "PATH".to_string(),
                value: "/usr/bin".to_string()
            },
            EnvVariable {
                name: "HOME".to_string(),
                value: "/root".to_string()
            },
        ]
    );
    assert_eq!(
        client.queries(),
        vec!["query { container { envVariables { name value } } }".to_string()]
    );
}

#[tokio::test]
async fn test_exposed_ports_expand_into_child_facades() {
    let client = MockClient::new(|query| {
        if query.contains("exposedPorts") {
            json!({ "container": { "exposedPorts": [{ "id": "port-1" }, { "id": "port-2" }] } })
        } else {
            json!({ "port": { "loadFromId": { "port": 8080 } } })
        }
    });

    let ports = root(&client).container().exposed_ports().await.unwrap();
    assert_eq!(ports.len(), 2);

    let number = ports[0].port().await.unwrap();
    assert_eq!(number, 8080);

    let queries = client.queries();
    assert_eq!(
        queries[0],
        "query { container { exposedPorts { id } } }"
    );
    assert_eq!(
        queries[1],
        r#"query { port { loadFromId(id: "port-1") { port } } }"#
    );
}

#[tokio::test]
async fn test_exposed_ports_null_is_empty() {
    let client = MockClient::new(|_| json!({ "container": { "exposedPorts": null } }));

    let ports = root(&client).container().exposed_ports().await.unwrap();

    assert!(ports.is_empty());
}

#[tokio::test]
async fn test_enum_arguments_render_unquoted() {
    let client = MockClient::new(|_| {
        json!({ "container": { "withExposedPort": { "id": "ctr-1" } } })
    });

    let opts = ContainerWithExposedPortOptsBuilder::default()
        .protocol(NetworkProtocol::Udp)
        .build()
        .unwrap();
    root(&client)
        .container()
        .with_exposed_port_opts(8080, opts)
        .id()
        .await
        .unwrap();

    assert!(client.queries()[0].contains("withExposedPort(port: 8080, protocol: UDP)"));
}

#[tokio::test]
async fn test_host_directory_is_rooted_at_host() {
    let client = MockClient::new(|_| {
        json!({ "host": { "directory": { "entries": ["Cargo.toml", "src"] } } })
    });

    let entries = root(&client)
        .host()
        .directory("/work")
        .entries()
        .await
        .unwrap();

    assert_eq!(entries, vec!["Cargo.toml".to_string(), "src".to_string()]);
    assert_eq!(
        client.queries(),
        vec![r#"query { host { directory(path: "/work") { entries(path: ".") } } }"#.to_string()]
    );
}

#[tokio::test]
async fn test_set_secret_registers_and_chains() {
    let client = MockClient::new(|query| {
        if query.contains("setSecret") {
            json!({ "setSecret": { "id": "secret-1" } })
        } else {
            json!({ "container": { "withSecretVariable": { "id": "ctr-1" } } })
        }
    });

    let secret = root(&client).set_secret("token", "hunter2");
    root(&client)
        .container()
        .with_secret_variable("TOKEN", secret)
        .id()
        .await
        .unwrap();

    let queries = client.queries();
    assert_eq!(
        queries[0],
        r#"query { setSecret(name: "token", plaintext: "hunter2") { id } }"#
    );
    assert!(queries[1].contains(r#"withSecretVariable(name: "TOKEN", secret: "secret-1")"#));
}

#[tokio::test]
async fn test_service_start_returns_its_id() {
    let client = MockClient::new(|_| {
        json!({ "container": { "asService": { "start": "svc-1" } } })
    });

    let id = root(&client)
        .container()
        .as_service()
        .start()
        .await
        .unwrap();

    assert_eq!(id.0, "svc-1");
    assert_eq!(
        client.queries(),
        vec!["query { container { asService { start } } }".to_string()]
    );
}

#[tokio::test]
async fn test_cache_volume_mount_resolves_the_volume_id() {
    let client = MockClient::new(|query| {
        if query.contains("cacheVolume") {
            json!({ "cacheVolume": { "id": "cache-1" } })
        } else {
            json!({ "container": { "withMountedCache": { "id": "ctr-1" } } })
        }
    });

    let volume = root(&client).cache_volume("cargo-registry");
    root(&client)
        .container()
        .with_mounted_cache("/cache", volume)
        .id()
        .await
        .unwrap();

    let queries = client.queries();
    assert_eq!(
        queries[0],
        r#"query { cacheVolume(key: "cargo-registry") { id } }"#
    );
    assert!(queries[1].contains(r#"withMountedCache(path: "/cache", cache: "cache-1")"#));
}

#[tokio::test]
async fn test_host_from_id_rehydrates_the_handle() {
    let client =
        MockClient::new(|_| json!({ "host": { "loadFromId": { "workdir": "/work" } } }));

    let graphql_client: DynGraphQLClient = client.clone();
    let host = Host::from_id(HostId::from("host-1"), graphql_client);
    let workdir = host.workdir().await.unwrap();

    assert_eq!(workdir, "/work");
    assert_eq!(
        client.queries(),
        vec![r#"query { host { loadFromId(id: "host-1") { workdir } } }"#.to_string()]
    );
}

#[tokio::test]
async fn test_terminal_chains_like_any_other_operation() {
    let client = MockClient::new(|_| {
        json!({ "container": { "from": { "terminal": { "id": "ctr-1" } } } })
    });

    root(&client)
        .container()
        .from("alpine:latest")
        .terminal()
        .id()
        .await
        .unwrap();

    assert_eq!(
        client.queries(),
        vec![
            r#"query { container { from(address: "alpine:latest") { terminal { id } } } }"#
                .to_string()
        ]
    );
}

#[tokio::test]
async fn test_with_secret_env_resolves_the_secret() {
    let client = MockClient::new(|query| {
        if query.contains("setSecret") {
            json!({ "setSecret": { "id": "secret-1" } })
        } else {
            json!({ "container": { "withSecretEnv": { "id": "ctr-1" } } })
        }
    });

    let secret = root(&client).set_secret("api-key", "hunter2");
    root(&client)
        .container()
        .with_secret_env("API_KEY", secret)
        .id()
        .await
        .unwrap();

    assert!(client.queries()[1].contains(r#"withSecretEnv(name: "API_KEY", secret: "secret-1")"#));
}

#[tokio::test]
async fn test_export_to_file_returns_the_written_location() {
    let client =
        MockClient::new(|_| json!({ "container": { "exportToFile": "/out/image.tar" } }));

    let location = root(&client)
        .container()
        .export_to_file("/out/image.tar")
        .await
        .unwrap();

    assert_eq!(location, "/out/image.tar");
    assert_eq!(
        client.queries(),
        vec![r#"query { container { exportToFile(path: "/out/image.tar") } }"#.to_string()]
    );
}

#[tokio::test]
async fn test_as_tarball_is_a_lazy_file() {
    let client = MockClient::new(|_| json!({ "container": { "asTarball": { "size": 2048 } } }));

    let size = root(&client).container().as_tarball().size().await.unwrap();

    assert_eq!(size, 2048);
    assert_eq!(
        client.queries(),
        vec!["query { container { asTarball { size } } }".to_string()]
    );
}

#[tokio::test]
async fn test_file_with_secret_contents() {
    let client = MockClient::new(|query| {
        if query.contains("setSecret") {
            json!({ "setSecret": { "id": "secret-1" } })
        } else {
            json!({ "file": { "withSecret": { "contents": "hunter2" } } })
        }
    });

    let secret = root(&client).set_secret("token", "hunter2");
    let contents = root(&client)
        .file()
        .with_secret(secret)
        .contents()
        .await
        .unwrap();

    assert_eq!(contents, "hunter2");
    assert_eq!(
        client.queries()[1],
        r#"query { file { withSecret(secret: "secret-1") { contents } } }"#
    );
}

#[tokio::test]
async fn test_git_ref_tree_entries() {
    let client = MockClient::new(|_| {
        json!({
            "git": { "branch": { "tree": { "entries": ["README.md"] } } }
        })
    });

    let entries = root(&client)
        .git("https://example.com/repo.git")
        .branch("main")
        .tree()
        .entries()
        .await
        .unwrap();

    assert_eq!(entries, vec!["README.md".to_string()]);
    assert_eq!(
        client.queries(),
        vec![
            r#"query { git(url: "https://example.com/repo.git") { branch(name: "main") { tree { entries(path: ".") } } } }"#
                .to_string()
        ]
    );
}
