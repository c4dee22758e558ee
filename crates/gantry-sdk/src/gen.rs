use std::sync::Arc;

use async_trait::async_trait;
use derive_builder::Builder;
use serde::{Deserialize, Serialize};
use tokio::sync::OnceCell;

use crate::core::graphql_client::DynGraphQLClient;
use crate::errors::GantryError;
use crate::querybuilder::{query_with_root, Chain};
use crate::value::{NodeReference, Value};

#[derive(Serialize, Deserialize, PartialEq, Debug, Clone)]
pub struct CacheVolumeId(pub String);
impl From<&str> for CacheVolumeId {
    fn from(value: &str) -> Self {
        CacheVolumeId(value.to_string())
    }
}
impl From<String> for CacheVolumeId {
    fn from(value: String) -> Self {
        CacheVolumeId(value)
    }
}
#[derive(Serialize, Deserialize, PartialEq, Debug, Clone)]
pub struct ContainerId(pub String);
impl From<&str> for ContainerId {
    fn from(value: &str) -> Self {
        ContainerId(value.to_string())
    }
}
impl From<String> for ContainerId {
    fn from(value: String) -> Self {
        ContainerId(value)
    }
}
#[derive(Serialize, Deserialize, PartialEq, Debug, Clone)]
pub struct DirectoryId(pub String);
impl From<&str> for DirectoryId {
    fn from(value: &str) -> Self {
        DirectoryId(value.to_string())
    }
}
impl From<String> for DirectoryId {
    fn from(value: String) -> Self {
        DirectoryId(value)
    }
}
#[derive(Serialize, Deserialize, PartialEq, Debug, Clone)]
pub struct FileId(pub String);
impl From<&str> for FileId {
    fn from(value: &str) -> Self {
        FileId(value.to_string())
    }
}
impl From<String> for FileId {
    fn from(value: String) -> Self {
        FileId(value)
    }
}
#[derive(Serialize, Deserialize, PartialEq, Debug, Clone)]
pub struct GitRefId(pub String);
impl From<&str> for GitRefId {
    fn from(value: &str) -> Self {
        GitRefId(value.to_string())
    }
}
impl From<String> for GitRefId {
    fn from(value: String) -> Self {
        GitRefId(value)
    }
}
#[derive(Serialize, Deserialize, PartialEq, Debug, Clone)]
pub struct GitRepositoryId(pub String);
impl From<&str> for GitRepositoryId {
    fn from(value: &str) -> Self {
        GitRepositoryId(value.to_string())
    }
}
impl From<String> for GitRepositoryId {
    fn from(value: String) -> Self {
        GitRepositoryId(value)
    }
}
#[derive(Serialize, Deserialize, PartialEq, Debug, Clone)]
pub struct HostId(pub String);
impl From<&str> for HostId {
    fn from(value: &str) -> Self {
        HostId(value.to_string())
    }
}
impl From<String> for HostId {
    fn from(value: String) -> Self {
        HostId(value)
    }
}
#[derive(Serialize, Deserialize, PartialEq, Debug, Clone)]
pub struct PortId(pub String);
impl From<&str> for PortId {
    fn from(value: &str) -> Self {
        PortId(value.to_string())
    }
}
impl From<String> for PortId {
    fn from(value: String) -> Self {
        PortId(value)
    }
}
#[derive(Serialize, Deserialize, PartialEq, Debug, Clone)]
pub struct SecretId(pub String);
impl From<&str> for SecretId {
    fn from(value: &str) -> Self {
        SecretId(value.to_string())
    }
}
impl From<String> for SecretId {
    fn from(value: String) -> Self {
        SecretId(value)
    }
}
#[derive(Serialize, Deserialize, PartialEq, Debug, Clone)]
pub struct ServiceId(pub String);
impl From<&str> for ServiceId {
    fn from(value: &str) -> Self {
        ServiceId(value.to_string())
    }
}
impl From<String> for ServiceId {
    fn from(value: String) -> Self {
        ServiceId(value)
    }
}
#[derive(Serialize, Deserialize, PartialEq, Debug, Clone)]
pub struct SocketId(pub String);
impl From<&str> for SocketId {
    fn from(value: &str) -> Self {
        SocketId(value.to_string())
    }
}
impl From<String> for SocketId {
    fn from(value: String) -> Self {
        SocketId(value)
    }
}
#[derive(Serialize, Deserialize, PartialEq, Debug, Clone)]
pub struct Platform(pub String);
impl From<&str> for Platform {
    fn from(value: &str) -> Self {
        Platform(value.to_string())
    }
}
impl From<String> for Platform {
    fn from(value: String) -> Self {
        Platform(value)
    }
}

#[derive(Serialize, Deserialize, Debug, PartialEq, Clone)]
pub struct BuildArg {
    pub name: String,
    pub value: String,
}
impl From<&BuildArg> for Value {
    fn from(arg: &BuildArg) -> Self {
        Value::Object(vec![
            ("name".to_string(), Value::from(arg.name.clone())),
            ("value".to_string(), Value::from(arg.value.clone())),
        ])
    }
}
#[derive(Serialize, Deserialize, Debug, PartialEq, Clone)]
pub struct EnvVariable {
    pub name: String,
    pub value: String,
}
#[derive(Serialize, Deserialize, Debug, PartialEq, Clone)]
pub struct Label {
    pub name: String,
    pub value: String,
}

#[derive(Serialize, Deserialize, Clone, PartialEq, Debug)]
pub enum NetworkProtocol {
    #[serde(rename = "TCP")]
    Tcp,
    #[serde(rename = "UDP")]
    Udp,
}
#[derive(Serialize, Deserialize, Clone, PartialEq, Debug)]
pub enum CacheSharingMode {
    #[serde(rename = "SHARED")]
    Shared,
    #[serde(rename = "LOCKED")]
    Locked,
    #[serde(rename = "PRIVATE")]
    Private,
}
#[derive(Serialize, Deserialize, Clone, PartialEq, Debug)]
pub enum ImageLayerCompression {
    Gzip,
    Zstd,
    Uncompressed,
}
#[derive(Serialize, Deserialize, Clone, PartialEq, Debug)]
pub enum ImageMediaTypes {
    #[serde(rename = "OCIMediaTypes")]
    OciMediaTypes,
    #[serde(rename = "DockerMediaTypes")]
    DockerMediaTypes,
}

/// Renders an enum as a bare query literal, without quotes.
fn enum_value<S: Serialize>(value: &S) -> Value {
    let rendered = serde_json::to_string(value).unwrap();
    Value::Raw(rendered.trim_matches('"').to_string())
}

#[derive(Clone)]
pub struct CacheVolume {
    selection: Chain,
    graphql_client: DynGraphQLClient,
    id_cell: Arc<OnceCell<CacheVolumeId>>,
}
impl CacheVolume {
    pub fn new(selection: Chain, graphql_client: DynGraphQLClient) -> Self {
        Self {
            selection,
            graphql_client,
            id_cell: Arc::new(OnceCell::new()),
        }
    }
    /// Rebuilds the cache volume from a previously obtained identifier.
    pub fn from_id(id: CacheVolumeId, graphql_client: DynGraphQLClient) -> Self {
        Self::new(query_with_root("cacheVolume").load_from_id(id.0), graphql_client)
    }
    /// A unique identifier for this cache volume, fetched once and cached.
    pub async fn id(&self) -> Result<CacheVolumeId, GantryError> {
        let id = self
            .id_cell
            .get_or_try_init(|| async {
                self.selection
                    .execute::<CacheVolumeId>("id", self.graphql_client.clone())
                    .await
            })
            .await?;
        Ok(id.clone())
    }
    pub async fn key(&self) -> Result<String, GantryError> {
        self.selection.execute("key", self.graphql_client.clone()).await
    }
    /// Forces evaluation of the pipeline behind this cache volume.
    pub async fn sync(&self) -> Result<CacheVolume, GantryError> {
        self.id().await?;
        Ok(self.clone())
    }
}
#[async_trait]
impl NodeReference for CacheVolume {
    async fn resolved_identifier(&self) -> Result<String, GantryError> {
        self.id().await.map(|id| id.0)
    }
}

#[derive(Clone)]
pub struct Container {
    selection: Chain,
    graphql_client: DynGraphQLClient,
    id_cell: Arc<OnceCell<ContainerId>>,
}
#[derive(Builder, Debug, PartialEq)]
pub struct ContainerAsServiceOpts {
    /// Command to run instead of the container's default command.
    #[builder(setter(into, strip_option), default)]
    pub args: Option<Vec<String>>,
    /// Use the entrypoint instead of the default command.
    #[builder(setter(into, strip_option), default)]
    pub use_entrypoint: Option<bool>,
    #[builder(setter(into, strip_option), default)]
    pub experimental_privileged_nesting: Option<bool>,
    #[builder(setter(into, strip_option), default)]
    pub insecure_root_capabilities: Option<bool>,
    #[builder(setter(into, strip_option), default)]
    pub expand: Option<bool>,
    #[builder(setter(into, strip_option), default)]
    pub no_init: Option<bool>,
}
#[derive(Builder, Debug, PartialEq)]
pub struct ContainerAsTarballOpts {
    #[builder(setter(into, strip_option), default)]
    pub platform_variants: Option<Vec<ContainerId>>,
    #[builder(setter(into, strip_option), default)]
    pub forced_compression: Option<ImageLayerCompression>,
    #[builder(setter(into, strip_option), default)]
    pub media_types: Option<ImageMediaTypes>,
}
#[derive(Builder, Debug, PartialEq)]
pub struct ContainerBuildOpts {
    /// Path to the Dockerfile to use, relative to the context.
    #[builder(setter(into, strip_option), default)]
    pub dockerfile: Option<String>,
    /// Target build stage to build.
    #[builder(setter(into, strip_option), default)]
    pub target: Option<String>,
    /// Additional build arguments.
    #[builder(setter(into, strip_option), default)]
    pub build_args: Option<Vec<BuildArg>>,
    #[builder(setter(into, strip_option), default)]
    pub no_init: Option<bool>,
}
#[derive(Builder, Debug, PartialEq)]
pub struct ContainerDirectoryOpts {
    #[builder(setter(into, strip_option), default)]
    pub expand: Option<bool>,
}
#[derive(Builder, Debug, PartialEq)]
pub struct ContainerExportOpts {
    /// Identifiers of other platform-specific containers for a multi-platform
    /// image.
    #[builder(setter(into, strip_option), default)]
    pub platform_variants: Option<Vec<ContainerId>>,
    #[builder(setter(into, strip_option), default)]
    pub forced_compression: Option<ImageLayerCompression>,
    #[builder(setter(into, strip_option), default)]
    pub media_types: Option<ImageMediaTypes>,
    #[builder(setter(into, strip_option), default)]
    pub expand: Option<bool>,
}
#[derive(Builder, Debug, PartialEq)]
pub struct ContainerFileOpts {
    #[builder(setter(into, strip_option), default)]
    pub expand: Option<bool>,
}
#[derive(Builder, Debug, PartialEq)]
pub struct ContainerImportOpts {
    /// Tag to import from the archive, if it bundles multiple tags.
    #[builder(setter(into, strip_option), default)]
    pub tag: Option<String>,
}
#[derive(Builder, Debug, PartialEq)]
pub struct ContainerPublishOpts {
    #[builder(setter(into, strip_option), default)]
    pub platform_variants: Option<Vec<ContainerId>>,
    #[builder(setter(into, strip_option), default)]
    pub forced_compression: Option<ImageLayerCompression>,
    #[builder(setter(into, strip_option), default)]
    pub media_types: Option<ImageMediaTypes>,
}
#[derive(Builder, Debug, PartialEq)]
pub struct ContainerTerminalOpts {
    /// Command to run in the terminal instead of the default shell.
    #[builder(setter(into, strip_option), default)]
    pub cmd: Option<Vec<String>>,
    #[builder(setter(into, strip_option), default)]
    pub experimental_privileged_nesting: Option<bool>,
    #[builder(setter(into, strip_option), default)]
    pub insecure_root_capabilities: Option<bool>,
}
#[derive(Builder, Debug, PartialEq)]
pub struct ContainerWithDirectoryOpts {
    /// Patterns to exclude from the written directory.
    #[builder(setter(into, strip_option), default)]
    pub exclude: Option<Vec<String>>,
    /// Patterns to include in the written directory.
    #[builder(setter(into, strip_option), default)]
    pub include: Option<Vec<String>>,
    /// A user:group to set for the directory and its contents.
    #[builder(setter(into, strip_option), default)]
    pub owner: Option<String>,
    #[builder(setter(into, strip_option), default)]
    pub expand: Option<bool>,
}
#[derive(Builder, Debug, PartialEq)]
pub struct ContainerWithEntrypointOpts {
    /// Keep the default arguments when setting the entrypoint.
    #[builder(setter(into, strip_option), default)]
    pub keep_default_args: Option<bool>,
}
#[derive(Builder, Debug, PartialEq)]
pub struct ContainerWithEnvVariableOpts {
    /// Replace `${VAR}` in the value with the container's environment.
    #[builder(setter(into, strip_option), default)]
    pub expand: Option<bool>,
}
#[derive(Builder, Debug, PartialEq)]
pub struct ContainerWithExecOpts {
    /// Wrap the args with the container's entrypoint.
    #[builder(setter(into, strip_option), default)]
    pub use_entrypoint: Option<bool>,
    /// Content to write to the command's standard input before closing.
    #[builder(setter(into, strip_option), default)]
    pub stdin: Option<String>,
    /// Redirect the command's standard output to a file in the container.
    #[builder(setter(into, strip_option), default)]
    pub redirect_stdout: Option<String>,
    /// Redirect the command's standard error to a file in the container.
    #[builder(setter(into, strip_option), default)]
    pub redirect_stderr: Option<String>,
    /// Exit-code expectation, e.g. "ANY" to tolerate failures.
    #[builder(setter(into, strip_option), default)]
    pub expect: Option<String>,
    #[builder(setter(into, strip_option), default)]
    pub experimental_privileged_nesting: Option<bool>,
    #[builder(setter(into, strip_option), default)]
    pub insecure_root_capabilities: Option<bool>,
    #[builder(setter(into, strip_option), default)]
    pub expand: Option<bool>,
    #[builder(setter(into, strip_option), default)]
    pub no_init: Option<bool>,
}
#[derive(Builder, Debug, PartialEq)]
pub struct ContainerWithExposedPortOpts {
    #[builder(setter(into, strip_option), default)]
    pub protocol: Option<NetworkProtocol>,
    #[builder(setter(into, strip_option), default)]
    pub description: Option<String>,
    #[builder(setter(into, strip_option), default)]
    pub experimental_skip_healthcheck: Option<bool>,
}
#[derive(Builder, Debug, PartialEq)]
pub struct ContainerWithFileOpts {
    /// Permissions of the copied file, e.g. 0o644.
    #[builder(setter(into, strip_option), default)]
    pub permissions: Option<isize>,
    #[builder(setter(into, strip_option), default)]
    pub owner: Option<String>,
    #[builder(setter(into, strip_option), default)]
    pub expand: Option<bool>,
}
#[derive(Builder, Debug, PartialEq)]
pub struct ContainerWithMountedCacheOpts {
    /// Identifier of the directory to use as the cache volume's root.
    #[builder(setter(into, strip_option), default)]
    pub source: Option<DirectoryId>,
    #[builder(setter(into, strip_option), default)]
    pub sharing: Option<CacheSharingMode>,
    #[builder(setter(into, strip_option), default)]
    pub owner: Option<String>,
    #[builder(setter(into, strip_option), default)]
    pub expand: Option<bool>,
}
#[derive(Builder, Debug, PartialEq)]
pub struct ContainerWithMountedDirectoryOpts {
    #[builder(setter(into, strip_option), default)]
    pub owner: Option<String>,
    #[builder(setter(into, strip_option), default)]
    pub expand: Option<bool>,
}
#[derive(Builder, Debug, PartialEq)]
pub struct ContainerWithMountedFileOpts {
    #[builder(setter(into, strip_option), default)]
    pub owner: Option<String>,
    #[builder(setter(into, strip_option), default)]
    pub expand: Option<bool>,
}
#[derive(Builder, Debug, PartialEq)]
pub struct ContainerWithMountedSecretOpts {
    #[builder(setter(into, strip_option), default)]
    pub owner: Option<String>,
    /// Permissions of the mounted secret, e.g. 0o400.
    #[builder(setter(into, strip_option), default)]
    pub mode: Option<isize>,
    #[builder(setter(into, strip_option), default)]
    pub expand: Option<bool>,
}
#[derive(Builder, Debug, PartialEq)]
pub struct ContainerWithNewFileOpts {
    #[builder(setter(into, strip_option), default)]
    pub permissions: Option<isize>,
    #[builder(setter(into, strip_option), default)]
    pub owner: Option<String>,
    #[builder(setter(into, strip_option), default)]
    pub expand: Option<bool>,
}
#[derive(Builder, Debug, PartialEq)]
pub struct ContainerWithoutExposedPortOpts {
    #[builder(setter(into, strip_option), default)]
    pub protocol: Option<NetworkProtocol>,
}
impl Container {
    pub fn new(selection: Chain, graphql_client: DynGraphQLClient) -> Self {
        Self {
            selection,
            graphql_client,
            id_cell: Arc::new(OnceCell::new()),
        }
    }
    /// Rebuilds the container from a previously obtained identifier, without
    /// replaying its construction chain.
    pub fn from_id(id: ContainerId, graphql_client: DynGraphQLClient) -> Self {
        Self::new(query_with_root("container").load_from_id(id.0), graphql_client)
    }
    fn chain(&self, selection: Chain) -> Container {
        Container::new(selection, self.graphql_client.clone())
    }
    /// Turns the container into a long-running service.
    pub fn as_service(&self) -> Service {
        let query = self.selection.append("asService", vec![]);
        Service::new(query, self.graphql_client.clone())
    }
    pub fn as_service_opts(&self, opts: ContainerAsServiceOpts) -> Service {
        let mut args: Vec<(String, Value)> = vec![];
        if let Some(cmd) = opts.args {
            args.push(("args".to_string(), Value::from(cmd)));
        }
        if let Some(use_entrypoint) = opts.use_entrypoint {
            args.push(("useEntrypoint".to_string(), Value::from(use_entrypoint)));
        }
        if let Some(nesting) = opts.experimental_privileged_nesting {
            args.push((
                "experimentalPrivilegedNesting".to_string(),
                Value::from(nesting),
            ));
        }
        if let Some(insecure) = opts.insecure_root_capabilities {
            args.push(("insecureRootCapabilities".to_string(), Value::from(insecure)));
        }
        if let Some(expand) = opts.expand {
            args.push(("expand".to_string(), Value::from(expand)));
        }
        if let Some(no_init) = opts.no_init {
            args.push(("noInit".to_string(), Value::from(no_init)));
        }
        let query = self.selection.append("asService", args);
        Service::new(query, self.graphql_client.clone())
    }
    /// Packages the container's state as an OCI tarball, as a lazy file.
    pub fn as_tarball(&self) -> File {
        let query = self.selection.append("asTarball", vec![]);
        File::new(query, self.graphql_client.clone())
    }
    pub fn as_tarball_opts(&self, opts: ContainerAsTarballOpts) -> File {
        let mut args: Vec<(String, Value)> = vec![];
        if let Some(variants) = opts.platform_variants {
            args.push((
                "platformVariants".to_string(),
                Value::List(variants.into_iter().map(|v| Value::from(v.0)).collect()),
            ));
        }
        if let Some(compression) = opts.forced_compression {
            args.push(("forcedCompression".to_string(), enum_value(&compression)));
        }
        if let Some(media_types) = opts.media_types {
            args.push(("mediaTypes".to_string(), enum_value(&media_types)));
        }
        let query = self.selection.append("asTarball", args);
        File::new(query, self.graphql_client.clone())
    }
    /// Initializes this container from a Dockerfile build, using the context
    /// directory.
    pub fn build(&self, context: Directory) -> Container {
        let args = vec![("context".to_string(), Value::node(context))];
        self.chain(self.selection.append("build", args))
    }
    pub fn build_opts(&self, context: Directory, opts: ContainerBuildOpts) -> Container {
        let mut args = vec![("context".to_string(), Value::node(context))];
        if let Some(dockerfile) = opts.dockerfile {
            args.push(("dockerfile".to_string(), Value::from(dockerfile)));
        }
        if let Some(target) = opts.target {
            args.push(("target".to_string(), Value::from(target)));
        }
        if let Some(build_args) = opts.build_args {
            args.push((
                "buildArgs".to_string(),
                Value::List(build_args.iter().map(Value::from).collect()),
            ));
        }
        if let Some(no_init) = opts.no_init {
            args.push(("noInit".to_string(), Value::from(no_init)));
        }
        self.chain(self.selection.append("build", args))
    }
    /// Retrieves a directory at the given path. Mounts are included.
    pub fn directory(&self, path: impl Into<String>) -> Directory {
        let args = vec![("path".to_string(), Value::from(path.into()))];
        let query = self.selection.append("directory", args);
        Directory::new(query, self.graphql_client.clone())
    }
    pub fn directory_opts(&self, path: impl Into<String>, opts: ContainerDirectoryOpts) -> Directory {
        let mut args = vec![("path".to_string(), Value::from(path.into()))];
        if let Some(expand) = opts.expand {
            args.push(("expand".to_string(), Value::from(expand)));
        }
        let query = self.selection.append("directory", args);
        Directory::new(query, self.graphql_client.clone())
    }
    /// Retrieves entrypoint to be prepended to the arguments of all commands.
    pub async fn entrypoint(&self) -> Result<Vec<String>, GantryError> {
        self.selection
            .execute("entrypoint", self.graphql_client.clone())
            .await
    }
    /// Retrieves the value of the specified environment variable.
    pub async fn env_variable(&self, name: impl Into<String>) -> Result<Option<String>, GantryError> {
        let args = vec![("name".to_string(), Value::from(name.into()))];
        self.selection
            .execute_with_args("envVariable", args, self.graphql_client.clone())
            .await
    }
    /// Retrieves the list of environment variables passed to commands.
    pub async fn env_variables(&self) -> Result<Vec<EnvVariable>, GantryError> {
        self.selection
            .execute_selection(
                "envVariables { name value }",
                "envVariables",
                self.graphql_client.clone(),
            )
            .await
    }
    /// The exit code of the last executed command.
    pub async fn exit_code(&self) -> Result<isize, GantryError> {
        self.selection
            .execute("exitCode", self.graphql_client.clone())
            .await
    }
    /// Writes the container as an OCI tarball to the given host path.
    pub async fn export(&self, path: impl Into<String>) -> Result<bool, GantryError> {
        let args = vec![("path".to_string(), Value::from(path.into()))];
        self.selection
            .execute_with_args("export", args, self.graphql_client.clone())
            .await
    }
    pub async fn export_opts(
        &self,
        path: impl Into<String>,
        opts: ContainerExportOpts,
    ) -> Result<bool, GantryError> {
        let mut args = vec![("path".to_string(), Value::from(path.into()))];
        if let Some(variants) = opts.platform_variants {
            args.push((
                "platformVariants".to_string(),
                Value::List(variants.into_iter().map(|v| Value::from(v.0)).collect()),
            ));
        }
        if let Some(compression) = opts.forced_compression {
            args.push(("forcedCompression".to_string(), enum_value(&compression)));
        }
        if let Some(media_types) = opts.media_types {
            args.push(("mediaTypes".to_string(), enum_value(&media_types)));
        }
        if let Some(expand) = opts.expand {
            args.push(("expand".to_string(), Value::from(expand)));
        }
        self.selection
            .execute_with_args("export", args, self.graphql_client.clone())
            .await
    }
    /// Writes the container as an OCI tarball to the given engine-side path
    /// and returns the written file's location.
    pub async fn export_to_file(&self, path: impl Into<String>) -> Result<String, GantryError> {
        let args = vec![("path".to_string(), Value::from(path.into()))];
        self.selection
            .execute_with_args("exportToFile", args, self.graphql_client.clone())
            .await
    }
    pub async fn export_to_file_opts(
        &self,
        path: impl Into<String>,
        opts: ContainerExportOpts,
    ) -> Result<String, GantryError> {
        let mut args = vec![("path".to_string(), Value::from(path.into()))];
        if let Some(variants) = opts.platform_variants {
            args.push((
                "platformVariants".to_string(),
                Value::List(variants.into_iter().map(|v| Value::from(v.0)).collect()),
            ));
        }
        if let Some(compression) = opts.forced_compression {
            args.push(("forcedCompression".to_string(), enum_value(&compression)));
        }
        if let Some(media_types) = opts.media_types {
            args.push(("mediaTypes".to_string(), enum_value(&media_types)));
        }
        if let Some(expand) = opts.expand {
            args.push(("expand".to_string(), Value::from(expand)));
        }
        self.selection
            .execute_with_args("exportToFile", args, self.graphql_client.clone())
            .await
    }
    /// Retrieves the list of exposed ports as child facades.
    pub async fn exposed_ports(&self) -> Result<Vec<Port>, GantryError> {
        let ids = self
            .selection
            .execute_id_list("exposedPorts", self.graphql_client.clone())
            .await?;
        Ok(ids
            .into_iter()
            .map(|id| Port::from_id(PortId(id), self.graphql_client.clone()))
            .collect())
    }
    /// Retrieves a file at the given path. Mounts are included.
    pub fn file(&self, path: impl Into<String>) -> File {
        let args = vec![("path".to_string(), Value::from(path.into()))];
        let query = self.selection.append("file", args);
        File::new(query, self.graphql_client.clone())
    }
    pub fn file_opts(&self, path: impl Into<String>, opts: ContainerFileOpts) -> File {
        let mut args = vec![("path".to_string(), Value::from(path.into()))];
        if let Some(expand) = opts.expand {
            args.push(("expand".to_string(), Value::from(expand)));
        }
        let query = self.selection.append("file", args);
        File::new(query, self.graphql_client.clone())
    }
    /// Initializes this container from a pulled base image.
    pub fn from(&self, address: impl Into<String>) -> Container {
        let args = vec![("address".to_string(), Value::from(address.into()))];
        self.chain(self.selection.append("from", args))
    }
    /// A unique identifier for this container, fetched once and cached on the
    /// instance.
    pub async fn id(&self) -> Result<ContainerId, GantryError> {
        let id = self
            .id_cell
            .get_or_try_init(|| async {
                self.selection
                    .execute::<ContainerId>("id", self.graphql_client.clone())
                    .await
            })
            .await?;
        Ok(id.clone())
    }
    /// The image reference this container was created from, if any.
    pub async fn image_ref(&self) -> Result<String, GantryError> {
        self.selection
            .execute("imageRef", self.graphql_client.clone())
            .await
    }
    /// Reads the container from an OCI tarball.
    pub fn import(&self, source: File) -> Container {
        let args = vec![("source".to_string(), Value::node(source))];
        self.chain(self.selection.append("import", args))
    }
    pub fn import_opts(&self, source: File, opts: ContainerImportOpts) -> Container {
        let mut args = vec![("source".to_string(), Value::node(source))];
        if let Some(tag) = opts.tag {
            args.push(("tag".to_string(), Value::from(tag)));
        }
        self.chain(self.selection.append("import", args))
    }
    /// Retrieves the value of the specified label.
    pub async fn label(&self, name: impl Into<String>) -> Result<Option<String>, GantryError> {
        let args = vec![("name".to_string(), Value::from(name.into()))];
        self.selection
            .execute_with_args("label", args, self.graphql_client.clone())
            .await
    }
    /// Retrieves the list of labels on the container image.
    pub async fn labels(&self) -> Result<Vec<Label>, GantryError> {
        self.selection
            .execute_selection("labels { name value }", "labels", self.graphql_client.clone())
            .await
    }
    /// Retrieves the list of mount paths.
    pub async fn mounts(&self) -> Result<Vec<String>, GantryError> {
        self.selection
            .execute("mounts", self.graphql_client.clone())
            .await
    }
    /// The platform this container executes and publishes as.
    pub async fn platform(&self) -> Result<Platform, GantryError> {
        self.selection
            .execute("platform", self.graphql_client.clone())
            .await
    }
    /// Publishes the container image to the given registry address and
    /// returns the published reference.
    pub async fn publish(&self, address: impl Into<String>) -> Result<String, GantryError> {
        let args = vec![("address".to_string(), Value::from(address.into()))];
        self.selection
            .execute_with_args("publish", args, self.graphql_client.clone())
            .await
    }
    pub async fn publish_opts(
        &self,
        address: impl Into<String>,
        opts: ContainerPublishOpts,
    ) -> Result<String, GantryError> {
        let mut args = vec![("address".to_string(), Value::from(address.into()))];
        if let Some(variants) = opts.platform_variants {
            args.push((
                "platformVariants".to_string(),
                Value::List(variants.into_iter().map(|v| Value::from(v.0)).collect()),
            ));
        }
        if let Some(compression) = opts.forced_compression {
            args.push(("forcedCompression".to_string(), enum_value(&compression)));
        }
        if let Some(media_types) = opts.media_types {
            args.push(("mediaTypes".to_string(), enum_value(&media_types)));
        }
        self.selection
            .execute_with_args("publish", args, self.graphql_client.clone())
            .await
    }
    /// The error stream of the last executed command.
    pub async fn stderr(&self) -> Result<String, GantryError> {
        self.selection
            .execute("stderr", self.graphql_client.clone())
            .await
    }
    /// The output stream of the last executed command.
    pub async fn stdout(&self) -> Result<String, GantryError> {
        self.selection
            .execute("stdout", self.graphql_client.clone())
            .await
    }
    /// Forces evaluation of the pipeline in the engine.
    pub async fn sync(&self) -> Result<Container, GantryError> {
        self.id().await?;
        Ok(self.clone())
    }
    /// Opens an interactive terminal in the container when the pipeline runs.
    pub fn terminal(&self) -> Container {
        self.chain(self.selection.append("terminal", vec![]))
    }
    pub fn terminal_opts(&self, opts: ContainerTerminalOpts) -> Container {
        let mut args: Vec<(String, Value)> = vec![];
        if let Some(cmd) = opts.cmd {
            args.push(("cmd".to_string(), Value::from(cmd)));
        }
        if let Some(nesting) = opts.experimental_privileged_nesting {
            args.push((
                "experimentalPrivilegedNesting".to_string(),
                Value::from(nesting),
            ));
        }
        if let Some(insecure) = opts.insecure_root_capabilities {
            args.push(("insecureRootCapabilities".to_string(), Value::from(insecure)));
        }
        self.chain(self.selection.append("terminal", args))
    }
    /// The user the container commands run as.
    pub async fn user(&self) -> Result<String, GantryError> {
        self.selection
            .execute("user", self.graphql_client.clone())
            .await
    }
    /// Retrieves this container plus a directory written at the given path.
    pub fn with_directory(&self, path: impl Into<String>, directory: Directory) -> Container {
        let args = vec![
            ("path".to_string(), Value::from(path.into())),
            ("directory".to_string(), Value::node(directory)),
        ];
        self.chain(self.selection.append("withDirectory", args))
    }
    pub fn with_directory_opts(
        &self,
        path: impl Into<String>,
        directory: Directory,
        opts: ContainerWithDirectoryOpts,
    ) -> Container {
        let mut args = vec![
            ("path".to_string(), Value::from(path.into())),
            ("directory".to_string(), Value::node(directory)),
        ];
        if let Some(exclude) = opts.exclude {
            args.push(("exclude".to_string(), Value::from(exclude)));
        }
        if let Some(include) = opts.include {
            args.push(("include".to_string(), Value::from(include)));
        }
        if let Some(owner) = opts.owner {
            args.push(("owner".to_string(), Value::from(owner)));
        }
        if let Some(expand) = opts.expand {
            args.push(("expand".to_string(), Value::from(expand)));
        }
        self.chain(self.selection.append("withDirectory", args))
    }
    /// Retrieves this container with a replaced entrypoint.
    pub fn with_entrypoint(&self, args: Vec<impl Into<String>>) -> Container {
        let entry = vec![(
            "args".to_string(),
            Value::List(args.into_iter().map(|a| Value::from(a.into())).collect()),
        )];
        self.chain(self.selection.append("withEntrypoint", entry))
    }
    pub fn with_entrypoint_opts(
        &self,
        args: Vec<impl Into<String>>,
        opts: ContainerWithEntrypointOpts,
    ) -> Container {
        let mut entry = vec![(
            "args".to_string(),
            Value::List(args.into_iter().map(|a| Value::from(a.into())).collect()),
        )];
        if let Some(keep) = opts.keep_default_args {
            entry.push(("keepDefaultArgs".to_string(), Value::from(keep)));
        }
        self.chain(self.selection.append("withEntrypoint", entry))
    }
    /// Retrieves this container plus the given environment variable.
    pub fn with_env_variable(
        &self,
        name: impl Into<String>,
        value: impl Into<String>,
    ) -> Container {
        let args = vec![
            ("name".to_string(), Value::from(name.into())),
            ("value".to_string(), Value::from(value.into())),
        ];
        self.chain(self.selection.append("withEnvVariable", args))
    }
    pub fn with_env_variable_opts(
        &self,
        name: impl Into<String>,
        value: impl Into<String>,
        opts: ContainerWithEnvVariableOpts,
    ) -> Container {
        let mut args = vec![
            ("name".to_string(), Value::from(name.into())),
            ("value".to_string(), Value::from(value.into())),
        ];
        if let Some(expand) = opts.expand {
            args.push(("expand".to_string(), Value::from(expand)));
        }
        self.chain(self.selection.append("withEnvVariable", args))
    }
    /// Retrieves this container after executing the given command.
    pub fn with_exec(&self, args: Vec<impl Into<String>>) -> Container {
        let exec = vec![(
            "args".to_string(),
            Value::List(args.into_iter().map(|a| Value::from(a.into())).collect()),
        )];
        self.chain(self.selection.append("withExec", exec))
    }
    pub fn with_exec_opts(
        &self,
        args: Vec<impl Into<String>>,
        opts: ContainerWithExecOpts,
    ) -> Container {
        let mut exec = vec![(
            "args".to_string(),
            Value::List(args.into_iter().map(|a| Value::from(a.into())).collect()),
        )];
        if let Some(use_entrypoint) = opts.use_entrypoint {
            exec.push(("useEntrypoint".to_string(), Value::from(use_entrypoint)));
        }
        if let Some(stdin) = opts.stdin {
            exec.push(("stdin".to_string(), Value::from(stdin)));
        }
        if let Some(redirect_stdout) = opts.redirect_stdout {
            exec.push(("redirectStdout".to_string(), Value::from(redirect_stdout)));
        }
        if let Some(redirect_stderr) = opts.redirect_stderr {
            exec.push(("redirectStderr".to_string(), Value::from(redirect_stderr)));
        }
        if let Some(expect) = opts.expect {
            exec.push(("expect".to_string(), Value::from(expect)));
        }
        if let Some(nesting) = opts.experimental_privileged_nesting {
            exec.push((
                "experimentalPrivilegedNesting".to_string(),
                Value::from(nesting),
            ));
        }
        if let Some(insecure) = opts.insecure_root_capabilities {
            exec.push(("insecureRootCapabilities".to_string(), Value::from(insecure)));
        }
        if let Some(expand) = opts.expand {
            exec.push(("expand".to_string(), Value::from(expand)));
        }
        if let Some(no_init) = opts.no_init {
            exec.push(("noInit".to_string(), Value::from(no_init)));
        }
        self.chain(self.selection.append("withExec", exec))
    }
    /// Exposes a network port. The port is only bound when the container
    /// becomes a service.
    pub fn with_exposed_port(&self, port: isize) -> Container {
        let args = vec![("port".to_string(), Value::from(port))];
        self.chain(self.selection.append("withExposedPort", args))
    }
    pub fn with_exposed_port_opts(
        &self,
        port: isize,
        opts: ContainerWithExposedPortOpts,
    ) -> Container {
        let mut args = vec![("port".to_string(), Value::from(port))];
        if let Some(protocol) = opts.protocol {
            args.push(("protocol".to_string(), enum_value(&protocol)));
        }
        if let Some(description) = opts.description {
            args.push(("description".to_string(), Value::from(description)));
        }
        if let Some(skip) = opts.experimental_skip_healthcheck {
            args.push(("experimentalSkipHealthcheck".to_string(), Value::from(skip)));
        }
        self.chain(self.selection.append("withExposedPort", args))
    }
    /// Retrieves this container plus the contents of the given file copied to
    /// the given path.
    pub fn with_file(&self, path: impl Into<String>, source: File) -> Container {
        let args = vec![
            ("path".to_string(), Value::from(path.into())),
            ("source".to_string(), Value::node(source)),
        ];
        self.chain(self.selection.append("withFile", args))
    }
    pub fn with_file_opts(
        &self,
        path: impl Into<String>,
        source: File,
        opts: ContainerWithFileOpts,
    ) -> Container {
        let mut args = vec![
            ("path".to_string(), Value::from(path.into())),
            ("source".to_string(), Value::node(source)),
        ];
        if let Some(permissions) = opts.permissions {
            args.push(("permissions".to_string(), Value::from(permissions)));
        }
        if let Some(owner) = opts.owner {
            args.push(("owner".to_string(), Value::from(owner)));
        }
        if let Some(expand) = opts.expand {
            args.push(("expand".to_string(), Value::from(expand)));
        }
        self.chain(self.selection.append("withFile", args))
    }
    /// Retrieves this container plus a label.
    pub fn with_label(&self, name: impl Into<String>, value: impl Into<String>) -> Container {
        let args = vec![
            ("name".to_string(), Value::from(name.into())),
            ("value".to_string(), Value::from(value.into())),
        ];
        self.chain(self.selection.append("withLabel", args))
    }
    /// Retrieves this container plus a cache volume mounted at the given path.
    pub fn with_mounted_cache(&self, path: impl Into<String>, cache: CacheVolume) -> Container {
        let args = vec![
            ("path".to_string(), Value::from(path.into())),
            ("cache".to_string(), Value::node(cache)),
        ];
        self.chain(self.selection.append("withMountedCache", args))
    }
    pub fn with_mounted_cache_opts(
        &self,
        path: impl Into<String>,
        cache: CacheVolume,
        opts: ContainerWithMountedCacheOpts,
    ) -> Container {
        let mut args = vec![
            ("path".to_string(), Value::from(path.into())),
            ("cache".to_string(), Value::node(cache)),
        ];
        if let Some(source) = opts.source {
            args.push(("source".to_string(), Value::from(source.0)));
        }
        if let Some(sharing) = opts.sharing {
            args.push(("sharing".to_string(), enum_value(&sharing)));
        }
        if let Some(owner) = opts.owner {
            args.push(("owner".to_string(), Value::from(owner)));
        }
        if let Some(expand) = opts.expand {
            args.push(("expand".to_string(), Value::from(expand)));
        }
        self.chain(self.selection.append("withMountedCache", args))
    }
    /// Retrieves this container plus a directory mounted at the given path.
    pub fn with_mounted_directory(&self, path: impl Into<String>, source: Directory) -> Container {
        let args = vec![
            ("path".to_string(), Value::from(path.into())),
            ("source".to_string(), Value::node(source)),
        ];
        self.chain(self.selection.append("withMountedDirectory", args))
    }
    pub fn with_mounted_directory_opts(
        &self,
        path: impl Into<String>,
        source: Directory,
        opts: ContainerWithMountedDirectoryOpts,
    ) -> Container {
        let mut args = vec![
            ("path".to_string(), Value::from(path.into())),
            ("source".to_string(), Value::node(source)),
        ];
        if let Some(owner) = opts.owner {
            args.push(("owner".to_string(), Value::from(owner)));
        }
        if let Some(expand) = opts.expand {
            args.push(("expand".to_string(), Value::from(expand)));
        }
        self.chain(self.selection.append("withMountedDirectory", args))
    }
    /// Retrieves this container plus a file mounted at the given path.
    pub fn with_mounted_file(&self, path: impl Into<String>, source: File) -> Container {
        let args = vec![
            ("path".to_string(), Value::from(path.into())),
            ("source".to_string(), Value::node(source)),
        ];
        self.chain(self.selection.append("withMountedFile", args))
    }
    pub fn with_mounted_file_opts(
        &self,
        path: impl Into<String>,
        source: File,
        opts: ContainerWithMountedFileOpts,
    ) -> Container {
        let mut args = vec![
            ("path".to_string(), Value::from(path.into())),
            ("source".to_string(), Value::node(source)),
        ];
        if let Some(owner) = opts.owner {
            args.push(("owner".to_string(), Value::from(owner)));
        }
        if let Some(expand) = opts.expand {
            args.push(("expand".to_string(), Value::from(expand)));
        }
        self.chain(self.selection.append("withMountedFile", args))
    }
    /// Retrieves this container plus a secret mounted as a file at the given
    /// path.
    pub fn with_mounted_secret(&self, path: impl Into<String>, source: Secret) -> Container {
        let args = vec![
            ("path".to_string(), Value::from(path.into())),
            ("source".to_string(), Value::node(source)),
        ];
        self.chain(self.selection.append("withMountedSecret", args))
    }
    pub fn with_mounted_secret_opts(
        &self,
        path: impl Into<String>,
        source: Secret,
        opts: ContainerWithMountedSecretOpts,
    ) -> Container {
        let mut args = vec![
            ("path".to_string(), Value::from(path.into())),
            ("source".to_string(), Value::node(source)),
        ];
        if let Some(owner) = opts.owner {
            args.push(("owner".to_string(), Value::from(owner)));
        }
        if let Some(mode) = opts.mode {
            args.push(("mode".to_string(), Value::from(mode)));
        }
        if let Some(expand) = opts.expand {
            args.push(("expand".to_string(), Value::from(expand)));
        }
        self.chain(self.selection.append("withMountedSecret", args))
    }
    /// Retrieves this container plus a new file written at the given path.
    pub fn with_new_file(&self, path: impl Into<String>, contents: impl Into<String>) -> Container {
        let args = vec![
            ("path".to_string(), Value::from(path.into())),
            ("contents".to_string(), Value::from(contents.into())),
        ];
        self.chain(self.selection.append("withNewFile", args))
    }
    pub fn with_new_file_opts(
        &self,
        path: impl Into<String>,
        contents: impl Into<String>,
        opts: ContainerWithNewFileOpts,
    ) -> Container {
        let mut args = vec![
            ("path".to_string(), Value::from(path.into())),
            ("contents".to_string(), Value::from(contents.into())),
        ];
        if let Some(permissions) = opts.permissions {
            args.push(("permissions".to_string(), Value::from(permissions)));
        }
        if let Some(owner) = opts.owner {
            args.push(("owner".to_string(), Value::from(owner)));
        }
        if let Some(expand) = opts.expand {
            args.push(("expand".to_string(), Value::from(expand)));
        }
        self.chain(self.selection.append("withNewFile", args))
    }
    /// Retrieves this container plus a secret injected into the command
    /// environment without persisting in the image configuration.
    pub fn with_secret_env(&self, name: impl Into<String>, secret: Secret) -> Container {
        let args = vec![
            ("name".to_string(), Value::from(name.into())),
            ("secret".to_string(), Value::node(secret)),
        ];
        self.chain(self.selection.append("withSecretEnv", args))
    }
    /// Retrieves this container plus a secret-backed environment variable.
    pub fn with_secret_variable(&self, name: impl Into<String>, secret: Secret) -> Container {
        let args = vec![
            ("name".to_string(), Value::from(name.into())),
            ("secret".to_string(), Value::node(secret)),
        ];
        self.chain(self.selection.append("withSecretVariable", args))
    }
    /// Establishes a runtime dependency on another service, reachable under
    /// the given alias.
    pub fn with_service_binding(&self, alias: impl Into<String>, service: Service) -> Container {
        let args = vec![
            ("alias".to_string(), Value::from(alias.into())),
            ("service".to_string(), Value::node(service)),
        ];
        self.chain(self.selection.append("withServiceBinding", args))
    }
    /// Retrieves this container with a different command user.
    pub fn with_user(&self, name: impl Into<String>) -> Container {
        let args = vec![("name".to_string(), Value::from(name.into()))];
        self.chain(self.selection.append("withUser", args))
    }
    /// Retrieves this container with a different working directory.
    pub fn with_workdir(&self, path: impl Into<String>) -> Container {
        let args = vec![("path".to_string(), Value::from(path.into()))];
        self.chain(self.selection.append("withWorkdir", args))
    }
    /// Retrieves this container minus the directory at the given path.
    pub fn without_directory(&self, path: impl Into<String>) -> Container {
        let args = vec![("path".to_string(), Value::from(path.into()))];
        self.chain(self.selection.append("withoutDirectory", args))
    }
    /// Retrieves this container minus the given environment variable.
    pub fn without_env_variable(&self, name: impl Into<String>) -> Container {
        let args = vec![("name".to_string(), Value::from(name.into()))];
        self.chain(self.selection.append("withoutEnvVariable", args))
    }
    /// Unexposes a previously exposed port.
    pub fn without_exposed_port(&self, port: isize) -> Container {
        let args = vec![("port".to_string(), Value::from(port))];
        self.chain(self.selection.append("withoutExposedPort", args))
    }
    pub fn without_exposed_port_opts(
        &self,
        port: isize,
        opts: ContainerWithoutExposedPortOpts,
    ) -> Container {
        let mut args = vec![("port".to_string(), Value::from(port))];
        if let Some(protocol) = opts.protocol {
            args.push(("protocol".to_string(), enum_value(&protocol)));
        }
        self.chain(self.selection.append("withoutExposedPort", args))
    }
    /// Retrieves this container minus the file at the given path.
    pub fn without_file(&self, path: impl Into<String>) -> Container {
        let args = vec![("path".to_string(), Value::from(path.into()))];
        self.chain(self.selection.append("withoutFile", args))
    }
    /// Retrieves this container without the registry authentication for the
    /// given address.
    pub fn without_registry_auth(&self, address: impl Into<String>) -> Container {
        let args = vec![("address".to_string(), Value::from(address.into()))];
        self.chain(self.selection.append("withoutRegistryAuth", args))
    }
    /// The working directory of the container.
    pub async fn workdir(&self) -> Result<String, GantryError> {
        self.selection
            .execute("workdir", self.graphql_client.clone())
            .await
    }
}
#[async_trait]
impl NodeReference for Container {
    async fn resolved_identifier(&self) -> Result<String, GantryError> {
        self.id().await.map(|id| id.0)
    }
}

#[derive(Clone)]
pub struct Directory {
    selection: Chain,
    graphql_client: DynGraphQLClient,
    id_cell: Arc<OnceCell<DirectoryId>>,
}
#[derive(Builder, Debug, PartialEq)]
pub struct DirectoryDockerBuildOpts {
    #[builder(setter(into, strip_option), default)]
    pub dockerfile: Option<String>,
    #[builder(setter(into, strip_option), default)]
    pub platform: Option<Platform>,
    #[builder(setter(into, strip_option), default)]
    pub build_args: Option<Vec<BuildArg>>,
    #[builder(setter(into, strip_option), default)]
    pub target: Option<String>,
    /// Secrets to expose to the build.
    #[builder(setter(into, strip_option), default)]
    pub secrets: Option<Vec<SecretId>>,
    #[builder(setter(into, strip_option), default)]
    pub no_init: Option<bool>,
}
#[derive(Builder, Debug, PartialEq)]
pub struct DirectoryEntriesOpts {
    /// Location to look at relative to the directory.
    #[builder(setter(into, strip_option), default)]
    pub path: Option<String>,
}
#[derive(Builder, Debug, PartialEq)]
pub struct DirectoryExportOpts {
    /// Allow the destination to be a parent of the engine's working directory.
    #[builder(setter(into, strip_option), default)]
    pub allow_parent_dir_path: Option<bool>,
}
#[derive(Builder, Debug, PartialEq)]
pub struct DirectoryWithDirectoryOpts {
    #[builder(setter(into, strip_option), default)]
    pub exclude: Option<Vec<String>>,
    #[builder(setter(into, strip_option), default)]
    pub include: Option<Vec<String>>,
}
#[derive(Builder, Debug, PartialEq)]
pub struct DirectoryWithFileOpts {
    #[builder(setter(into, strip_option), default)]
    pub permissions: Option<isize>,
}
#[derive(Builder, Debug, PartialEq)]
pub struct DirectoryWithNewDirectoryOpts {
    #[builder(setter(into, strip_option), default)]
    pub permissions: Option<isize>,
}
#[derive(Builder, Debug, PartialEq)]
pub struct DirectoryWithNewFileOpts {
    #[builder(setter(into, strip_option), default)]
    pub permissions: Option<isize>,
}
impl Directory {
    pub fn new(selection: Chain, graphql_client: DynGraphQLClient) -> Self {
        Self {
            selection,
            graphql_client,
            id_cell: Arc::new(OnceCell::new()),
        }
    }
    pub fn from_id(id: DirectoryId, graphql_client: DynGraphQLClient) -> Self {
        Self::new(query_with_root("directory").load_from_id(id.0), graphql_client)
    }
    fn chain(&self, selection: Chain) -> Directory {
        Directory::new(selection, self.graphql_client.clone())
    }
    /// The difference between this directory and another.
    pub fn diff(&self, other: Directory) -> Directory {
        let args = vec![("other".to_string(), Value::node(other))];
        self.chain(self.selection.append("diff", args))
    }
    /// Retrieves a subdirectory at the given path.
    pub fn directory(&self, path: impl Into<String>) -> Directory {
        let args = vec![("path".to_string(), Value::from(path.into()))];
        self.chain(self.selection.append("directory", args))
    }
    /// Builds a container from this directory as a Dockerfile context.
    pub fn docker_build(&self) -> Container {
        let query = self.selection.append("dockerBuild", vec![]);
        Container::new(query, self.graphql_client.clone())
    }
    pub fn docker_build_opts(&self, opts: DirectoryDockerBuildOpts) -> Container {
        let mut args: Vec<(String, Value)> = vec![];
        if let Some(dockerfile) = opts.dockerfile {
            args.push(("dockerfile".to_string(), Value::from(dockerfile)));
        }
        if let Some(platform) = opts.platform {
            args.push(("platform".to_string(), Value::from(platform.0)));
        }
        if let Some(build_args) = opts.build_args {
            args.push((
                "buildArgs".to_string(),
                Value::List(build_args.iter().map(Value::from).collect()),
            ));
        }
        if let Some(target) = opts.target {
            args.push(("target".to_string(), Value::from(target)));
        }
        if let Some(secrets) = opts.secrets {
            args.push((
                "secrets".to_string(),
                Value::List(secrets.into_iter().map(|s| Value::from(s.0)).collect()),
            ));
        }
        if let Some(no_init) = opts.no_init {
            args.push(("noInit".to_string(), Value::from(no_init)));
        }
        let query = self.selection.append("dockerBuild", args);
        Container::new(query, self.graphql_client.clone())
    }
    /// Lists the entry names at the root of the directory. The root is always
    /// named explicitly; the engine is not trusted to default the path.
    pub async fn entries(&self) -> Result<Vec<String>, GantryError> {
        self.entries_opts(DirectoryEntriesOpts { path: None }).await
    }
    pub async fn entries_opts(&self, opts: DirectoryEntriesOpts) -> Result<Vec<String>, GantryError> {
        let path = opts.path.unwrap_or_else(|| ".".to_string());
        let args = vec![("path".to_string(), Value::from(path))];
        self.selection
            .execute_with_args("entries", args, self.graphql_client.clone())
            .await
    }
    /// Writes the directory to the given host path.
    pub async fn export(&self, path: impl Into<String>) -> Result<bool, GantryError> {
        let args = vec![("path".to_string(), Value::from(path.into()))];
        self.selection
            .execute_with_args("export", args, self.graphql_client.clone())
            .await
    }
    pub async fn export_opts(
        &self,
        path: impl Into<String>,
        opts: DirectoryExportOpts,
    ) -> Result<bool, GantryError> {
        let mut args = vec![("path".to_string(), Value::from(path.into()))];
        if let Some(allow) = opts.allow_parent_dir_path {
            args.push(("allowParentDirPath".to_string(), Value::from(allow)));
        }
        self.selection
            .execute_with_args("export", args, self.graphql_client.clone())
            .await
    }
    /// Retrieves a file at the given path.
    pub fn file(&self, path: impl Into<String>) -> File {
        let args = vec![("path".to_string(), Value::from(path.into()))];
        let query = self.selection.append("file", args);
        File::new(query, self.graphql_client.clone())
    }
    /// Lists entries matching the given glob pattern, recursively.
    pub async fn glob(&self, pattern: impl Into<String>) -> Result<Vec<String>, GantryError> {
        let args = vec![("pattern".to_string(), Value::from(pattern.into()))];
        self.selection
            .execute_with_args("glob", args, self.graphql_client.clone())
            .await
    }
    pub async fn id(&self) -> Result<DirectoryId, GantryError> {
        let id = self
            .id_cell
            .get_or_try_init(|| async {
                self.selection
                    .execute::<DirectoryId>("id", self.graphql_client.clone())
                    .await
            })
            .await?;
        Ok(id.clone())
    }
    pub async fn sync(&self) -> Result<Directory, GantryError> {
        self.id().await?;
        Ok(self.clone())
    }
    /// Retrieves this directory plus another directory written at the given
    /// path.
    pub fn with_directory(&self, path: impl Into<String>, directory: Directory) -> Directory {
        let args = vec![
            ("path".to_string(), Value::from(path.into())),
            ("directory".to_string(), Value::node(directory)),
        ];
        self.chain(self.selection.append("withDirectory", args))
    }
    pub fn with_directory_opts(
        &self,
        path: impl Into<String>,
        directory: Directory,
        opts: DirectoryWithDirectoryOpts,
    ) -> Directory {
        let mut args = vec![
            ("path".to_string(), Value::from(path.into())),
            ("directory".to_string(), Value::node(directory)),
        ];
        if let Some(exclude) = opts.exclude {
            args.push(("exclude".to_string(), Value::from(exclude)));
        }
        if let Some(include) = opts.include {
            args.push(("include".to_string(), Value::from(include)));
        }
        self.chain(self.selection.append("withDirectory", args))
    }
    /// Retrieves this directory plus the contents of the given file copied to
    /// the given path.
    pub fn with_file(&self, path: impl Into<String>, source: File) -> Directory {
        let args = vec![
            ("path".to_string(), Value::from(path.into())),
            ("source".to_string(), Value::node(source)),
        ];
        self.chain(self.selection.append("withFile", args))
    }
    pub fn with_file_opts(
        &self,
        path: impl Into<String>,
        source: File,
        opts: DirectoryWithFileOpts,
    ) -> Directory {
        let mut args = vec![
            ("path".to_string(), Value::from(path.into())),
            ("source".to_string(), Value::node(source)),
        ];
        if let Some(permissions) = opts.permissions {
            args.push(("permissions".to_string(), Value::from(permissions)));
        }
        self.chain(self.selection.append("withFile", args))
    }
    /// Retrieves this directory plus a new empty directory at the given path.
    pub fn with_new_directory(&self, path: impl Into<String>) -> Directory {
        let args = vec![("path".to_string(), Value::from(path.into()))];
        self.chain(self.selection.append("withNewDirectory", args))
    }
    pub fn with_new_directory_opts(
        &self,
        path: impl Into<String>,
        opts: DirectoryWithNewDirectoryOpts,
    ) -> Directory {
        let mut args = vec![("path".to_string(), Value::from(path.into()))];
        if let Some(permissions) = opts.permissions {
            args.push(("permissions".to_string(), Value::from(permissions)));
        }
        self.chain(self.selection.append("withNewDirectory", args))
    }
    /// Retrieves this directory plus a new file written at the given path.
    pub fn with_new_file(&self, path: impl Into<String>, contents: impl Into<String>) -> Directory {
        let args = vec![
            ("path".to_string(), Value::from(path.into())),
            ("contents".to_string(), Value::from(contents.into())),
        ];
        self.chain(self.selection.append("withNewFile", args))
    }
    pub fn with_new_file_opts(
        &self,
        path: impl Into<String>,
        contents: impl Into<String>,
        opts: DirectoryWithNewFileOpts,
    ) -> Directory {
        let mut args = vec![
            ("path".to_string(), Value::from(path.into())),
            ("contents".to_string(), Value::from(contents.into())),
        ];
        if let Some(permissions) = opts.permissions {
            args.push(("permissions".to_string(), Value::from(permissions)));
        }
        self.chain(self.selection.append("withNewFile", args))
    }
    /// Retrieves this directory minus the directory at the given path.
    pub fn without_directory(&self, path: impl Into<String>) -> Directory {
        let args = vec![("path".to_string(), Value::from(path.into()))];
        self.chain(self.selection.append("withoutDirectory", args))
    }
    /// Retrieves this directory minus the file at the given path.
    pub fn without_file(&self, path: impl Into<String>) -> Directory {
        let args = vec![("path".to_string(), Value::from(path.into()))];
        self.chain(self.selection.append("withoutFile", args))
    }
}
#[async_trait]
impl NodeReference for Directory {
    async fn resolved_identifier(&self) -> Result<String, GantryError> {
        self.id().await.map(|id| id.0)
    }
}

#[derive(Clone)]
pub struct File {
    selection: Chain,
    graphql_client: DynGraphQLClient,
    id_cell: Arc<OnceCell<FileId>>,
}
#[derive(Builder, Debug, PartialEq)]
pub struct FileExportOpts {
    #[builder(setter(into, strip_option), default)]
    pub allow_parent_dir_path: Option<bool>,
}
impl File {
    pub fn new(selection: Chain, graphql_client: DynGraphQLClient) -> Self {
        Self {
            selection,
            graphql_client,
            id_cell: Arc::new(OnceCell::new()),
        }
    }
    pub fn from_id(id: FileId, graphql_client: DynGraphQLClient) -> Self {
        Self::new(query_with_root("file").load_from_id(id.0), graphql_client)
    }
    /// The raw contents of the file.
    pub async fn contents(&self) -> Result<String, GantryError> {
        self.selection
            .execute("contents", self.graphql_client.clone())
            .await
    }
    /// Writes the file to the given host path.
    pub async fn export(&self, path: impl Into<String>) -> Result<bool, GantryError> {
        let args = vec![("path".to_string(), Value::from(path.into()))];
        self.selection
            .execute_with_args("export", args, self.graphql_client.clone())
            .await
    }
    pub async fn export_opts(
        &self,
        path: impl Into<String>,
        opts: FileExportOpts,
    ) -> Result<bool, GantryError> {
        let mut args = vec![("path".to_string(), Value::from(path.into()))];
        if let Some(allow) = opts.allow_parent_dir_path {
            args.push(("allowParentDirPath".to_string(), Value::from(allow)));
        }
        self.selection
            .execute_with_args("export", args, self.graphql_client.clone())
            .await
    }
    pub async fn id(&self) -> Result<FileId, GantryError> {
        let id = self
            .id_cell
            .get_or_try_init(|| async {
                self.selection
                    .execute::<FileId>("id", self.graphql_client.clone())
                    .await
            })
            .await?;
        Ok(id.clone())
    }
    /// The basename of the file.
    pub async fn name(&self) -> Result<String, GantryError> {
        self.selection
            .execute("name", self.graphql_client.clone())
            .await
    }
    /// The size of the file, in bytes.
    pub async fn size(&self) -> Result<isize, GantryError> {
        self.selection
            .execute("size", self.graphql_client.clone())
            .await
    }
    pub async fn sync(&self) -> Result<File, GantryError> {
        self.id().await?;
        Ok(self.clone())
    }
    /// Retrieves this file with its contents replaced.
    pub fn with_contents(&self, contents: impl Into<String>) -> File {
        let args = vec![("contents".to_string(), Value::from(contents.into()))];
        File::new(
            self.selection.append("withContents", args),
            self.graphql_client.clone(),
        )
    }
    /// Retrieves this file with the given secret's plaintext as its contents.
    pub fn with_secret(&self, secret: Secret) -> File {
        let args = vec![("secret".to_string(), Value::node(secret))];
        File::new(
            self.selection.append("withSecret", args),
            self.graphql_client.clone(),
        )
    }
    /// Retrieves this file with a different name.
    pub fn with_name(&self, name: impl Into<String>) -> File {
        let args = vec![("name".to_string(), Value::from(name.into()))];
        File::new(
            self.selection.append("withName", args),
            self.graphql_client.clone(),
        )
    }
    /// Retrieves this file with its timestamps set to the given Unix time.
    pub fn with_timestamps(&self, timestamp: isize) -> File {
        let args = vec![("timestamp".to_string(), Value::from(timestamp))];
        File::new(
            self.selection.append("withTimestamps", args),
            self.graphql_client.clone(),
        )
    }
}
#[async_trait]
impl NodeReference for File {
    async fn resolved_identifier(&self) -> Result<String, GantryError> {
        self.id().await.map(|id| id.0)
    }
}

#[derive(Clone)]
pub struct GitRef {
    selection: Chain,
    graphql_client: DynGraphQLClient,
    id_cell: Arc<OnceCell<GitRefId>>,
}
#[derive(Builder, Debug, PartialEq)]
pub struct GitRefTreeOpts {
    #[builder(setter(into, strip_option), default)]
    pub path: Option<String>,
    #[builder(setter(into, strip_option), default)]
    pub exclude: Option<Vec<String>>,
    #[builder(setter(into, strip_option), default)]
    pub include: Option<Vec<String>>,
}
impl GitRef {
    pub fn new(selection: Chain, graphql_client: DynGraphQLClient) -> Self {
        Self {
            selection,
            graphql_client,
            id_cell: Arc::new(OnceCell::new()),
        }
    }
    pub fn from_id(id: GitRefId, graphql_client: DynGraphQLClient) -> Self {
        Self::new(query_with_root("gitRef").load_from_id(id.0), graphql_client)
    }
    /// The resolved commit hash.
    pub async fn commit(&self) -> Result<String, GantryError> {
        self.selection
            .execute("commit", self.graphql_client.clone())
            .await
    }
    pub async fn id(&self) -> Result<GitRefId, GantryError> {
        let id = self
            .id_cell
            .get_or_try_init(|| async {
                self.selection
                    .execute::<GitRefId>("id", self.graphql_client.clone())
                    .await
            })
            .await?;
        Ok(id.clone())
    }
    /// The fully qualified ref name.
    pub async fn ref_(&self) -> Result<String, GantryError> {
        self.selection
            .execute("ref", self.graphql_client.clone())
            .await
    }
    pub async fn sync(&self) -> Result<GitRef, GantryError> {
        self.id().await?;
        Ok(self.clone())
    }
    /// The filesystem tree at this ref.
    pub fn tree(&self) -> Directory {
        let query = self.selection.append("tree", vec![]);
        Directory::new(query, self.graphql_client.clone())
    }
    pub fn tree_opts(&self, opts: GitRefTreeOpts) -> Directory {
        let mut args: Vec<(String, Value)> = vec![];
        if let Some(path) = opts.path {
            args.push(("path".to_string(), Value::from(path)));
        }
        if let Some(exclude) = opts.exclude {
            args.push(("exclude".to_string(), Value::from(exclude)));
        }
        if let Some(include) = opts.include {
            args.push(("include".to_string(), Value::from(include)));
        }
        let query = self.selection.append("tree", args);
        Directory::new(query, self.graphql_client.clone())
    }
}

#[derive(Clone)]
pub struct GitRepository {
    selection: Chain,
    graphql_client: DynGraphQLClient,
    id_cell: Arc<OnceCell<GitRepositoryId>>,
}
impl GitRepository {
    pub fn new(selection: Chain, graphql_client: DynGraphQLClient) -> Self {
        Self {
            selection,
            graphql_client,
            id_cell: Arc::new(OnceCell::new()),
        }
    }
    pub fn from_id(id: GitRepositoryId, graphql_client: DynGraphQLClient) -> Self {
        Self::new(
            query_with_root("gitRepository").load_from_id(id.0),
            graphql_client,
        )
    }
    /// Selects a branch of the repository.
    pub fn branch(&self, name: impl Into<String>) -> GitRef {
        let args = vec![("name".to_string(), Value::from(name.into()))];
        GitRef::new(self.selection.append("branch", args), self.graphql_client.clone())
    }
    /// Lists the branch names of the repository.
    pub async fn branches(&self) -> Result<Vec<String>, GantryError> {
        self.selection
            .execute("branches", self.graphql_client.clone())
            .await
    }
    /// Selects a commit of the repository.
    pub fn commit(&self, id: impl Into<String>) -> GitRef {
        let args = vec![("id".to_string(), Value::from(id.into()))];
        GitRef::new(self.selection.append("commit", args), self.graphql_client.clone())
    }
    /// The default branch's head.
    pub fn head(&self) -> GitRef {
        GitRef::new(
            self.selection.append("head", vec![]),
            self.graphql_client.clone(),
        )
    }
    pub async fn id(&self) -> Result<GitRepositoryId, GantryError> {
        let id = self
            .id_cell
            .get_or_try_init(|| async {
                self.selection
                    .execute::<GitRepositoryId>("id", self.graphql_client.clone())
                    .await
            })
            .await?;
        Ok(id.clone())
    }
    pub async fn sync(&self) -> Result<GitRepository, GantryError> {
        self.id().await?;
        Ok(self.clone())
    }
    /// Selects a tag of the repository.
    pub fn tag(&self, name: impl Into<String>) -> GitRef {
        let args = vec![("name".to_string(), Value::from(name.into()))];
        GitRef::new(self.selection.append("tag", args), self.graphql_client.clone())
    }
    /// Lists the tag names of the repository.
    pub async fn tags(&self) -> Result<Vec<String>, GantryError> {
        self.selection
            .execute("tags", self.graphql_client.clone())
            .await
    }
    /// Authenticates HTTPS fetches with a token held as a secret.
    pub fn with_auth_token(&self, token: Secret) -> GitRepository {
        let args = vec![("token".to_string(), Value::node(token))];
        GitRepository::new(
            self.selection.append("withAuthToken", args),
            self.graphql_client.clone(),
        )
    }
    /// Authenticates HTTPS fetches with a full header held as a secret.
    pub fn with_auth_header(&self, header: Secret) -> GitRepository {
        let args = vec![("header".to_string(), Value::node(header))];
        GitRepository::new(
            self.selection.append("withAuthHeader", args),
            self.graphql_client.clone(),
        )
    }
}

#[derive(Clone)]
pub struct Host {
    selection: Chain,
    graphql_client: DynGraphQLClient,
    id_cell: Arc<OnceCell<HostId>>,
}
#[derive(Builder, Debug, PartialEq)]
pub struct HostDirectoryOpts {
    #[builder(setter(into, strip_option), default)]
    pub exclude: Option<Vec<String>>,
    #[builder(setter(into, strip_option), default)]
    pub include: Option<Vec<String>>,
}
impl Host {
    pub fn new(selection: Chain, graphql_client: DynGraphQLClient) -> Self {
        Self {
            selection,
            graphql_client,
            id_cell: Arc::new(OnceCell::new()),
        }
    }
    pub fn from_id(id: HostId, graphql_client: DynGraphQLClient) -> Self {
        Self::new(query_with_root("host").load_from_id(id.0), graphql_client)
    }
    /// Retrieves a directory from the host filesystem.
    pub fn directory(&self, path: impl Into<String>) -> Directory {
        let args = vec![("path".to_string(), Value::from(path.into()))];
        let query = self.selection.append("directory", args);
        Directory::new(query, self.graphql_client.clone())
    }
    pub fn directory_opts(&self, path: impl Into<String>, opts: HostDirectoryOpts) -> Directory {
        let mut args = vec![("path".to_string(), Value::from(path.into()))];
        if let Some(exclude) = opts.exclude {
            args.push(("exclude".to_string(), Value::from(exclude)));
        }
        if let Some(include) = opts.include {
            args.push(("include".to_string(), Value::from(include)));
        }
        let query = self.selection.append("directory", args);
        Directory::new(query, self.graphql_client.clone())
    }
    /// Retrieves a file from the host filesystem.
    pub fn file(&self, path: impl Into<String>) -> File {
        let args = vec![("path".to_string(), Value::from(path.into()))];
        let query = self.selection.append("file", args);
        File::new(query, self.graphql_client.clone())
    }
    pub async fn id(&self) -> Result<HostId, GantryError> {
        let id = self
            .id_cell
            .get_or_try_init(|| async {
                self.selection
                    .execute::<HostId>("id", self.graphql_client.clone())
                    .await
            })
            .await?;
        Ok(id.clone())
    }
    pub async fn sync(&self) -> Result<Host, GantryError> {
        self.id().await?;
        Ok(self.clone())
    }
    /// Accesses a Unix socket on the host.
    pub fn unix_socket(&self, path: impl Into<String>) -> Socket {
        let args = vec![("path".to_string(), Value::from(path.into()))];
        let query = self.selection.append("unixSocket", args);
        Socket::new(query, self.graphql_client.clone())
    }
    /// The engine's working directory on the host.
    pub async fn workdir(&self) -> Result<String, GantryError> {
        self.selection
            .execute("workdir", self.graphql_client.clone())
            .await
    }
}

#[derive(Clone)]
pub struct Port {
    selection: Chain,
    graphql_client: DynGraphQLClient,
    id_cell: Arc<OnceCell<PortId>>,
}
impl Port {
    pub fn new(selection: Chain, graphql_client: DynGraphQLClient) -> Self {
        Self {
            selection,
            graphql_client,
            id_cell: Arc::new(OnceCell::new()),
        }
    }
    pub fn from_id(id: PortId, graphql_client: DynGraphQLClient) -> Self {
        Self::new(query_with_root("port").load_from_id(id.0), graphql_client)
    }
    pub async fn description(&self) -> Result<Option<String>, GantryError> {
        self.selection
            .execute("description", self.graphql_client.clone())
            .await
    }
    pub async fn id(&self) -> Result<PortId, GantryError> {
        let id = self
            .id_cell
            .get_or_try_init(|| async {
                self.selection
                    .execute::<PortId>("id", self.graphql_client.clone())
                    .await
            })
            .await?;
        Ok(id.clone())
    }
    pub async fn port(&self) -> Result<isize, GantryError> {
        self.selection
            .execute("port", self.graphql_client.clone())
            .await
    }
    pub async fn protocol(&self) -> Result<NetworkProtocol, GantryError> {
        self.selection
            .execute("protocol", self.graphql_client.clone())
            .await
    }
}

#[derive(Clone)]
pub struct Query {
    selection: Chain,
    graphql_client: DynGraphQLClient,
}
#[derive(Builder, Debug, PartialEq)]
pub struct QueryContainerOpts {
    /// Platform to initialize the container for, e.g. "linux/amd64".
    #[builder(setter(into, strip_option), default)]
    pub platform: Option<Platform>,
}
#[derive(Builder, Debug, PartialEq)]
pub struct QueryGitOpts {
    /// Keep the `.git` directory in the fetched trees.
    #[builder(setter(into, strip_option), default)]
    pub keep_git_dir: Option<bool>,
    #[builder(setter(into, strip_option), default)]
    pub ssh_known_hosts: Option<String>,
    #[builder(setter(into, strip_option), default)]
    pub ssh_auth_socket: Option<SocketId>,
    #[builder(setter(into, strip_option), default)]
    pub http_auth_username: Option<String>,
    #[builder(setter(into, strip_option), default)]
    pub http_auth_token: Option<SecretId>,
    #[builder(setter(into, strip_option), default)]
    pub http_auth_header: Option<SecretId>,
}
#[derive(Builder, Debug, PartialEq)]
pub struct QueryHttpOpts {
    /// File name to use instead of the URL's basename.
    #[builder(setter(into, strip_option), default)]
    pub name: Option<String>,
    #[builder(setter(into, strip_option), default)]
    pub permissions: Option<isize>,
    #[builder(setter(into, strip_option), default)]
    pub auth_header: Option<SecretId>,
}
impl Query {
    pub fn new(selection: Chain, graphql_client: DynGraphQLClient) -> Self {
        Self {
            selection,
            graphql_client,
        }
    }
    /// Constructs a cache volume for the given key.
    pub fn cache_volume(&self, key: impl Into<String>) -> CacheVolume {
        let args = vec![("key".to_string(), Value::from(key.into()))];
        let query = self.selection.append("cacheVolume", args);
        CacheVolume::new(query, self.graphql_client.clone())
    }
    /// Starts a new container pipeline, initially scratch.
    pub fn container(&self) -> Container {
        let query = self.selection.append("container", vec![]);
        Container::new(query, self.graphql_client.clone())
    }
    pub fn container_opts(&self, opts: QueryContainerOpts) -> Container {
        let mut args: Vec<(String, Value)> = vec![];
        if let Some(platform) = opts.platform {
            args.push(("platform".to_string(), Value::from(platform.0)));
        }
        let query = self.selection.append("container", args);
        Container::new(query, self.graphql_client.clone())
    }
    /// Starts a new empty directory pipeline.
    pub fn directory(&self) -> Directory {
        Directory::new(query_with_root("directory"), self.graphql_client.clone())
    }
    /// Starts a new empty file pipeline.
    pub fn file(&self) -> File {
        File::new(query_with_root("file"), self.graphql_client.clone())
    }
    /// Queries a Git repository by URL.
    pub fn git(&self, url: impl Into<String>) -> GitRepository {
        let args = vec![("url".to_string(), Value::from(url.into()))];
        let query = self.selection.append("git", args);
        GitRepository::new(query, self.graphql_client.clone())
    }
    pub fn git_opts(&self, url: impl Into<String>, opts: QueryGitOpts) -> GitRepository {
        let mut args = vec![("url".to_string(), Value::from(url.into()))];
        if let Some(keep) = opts.keep_git_dir {
            args.push(("keepGitDir".to_string(), Value::from(keep)));
        }
        if let Some(known_hosts) = opts.ssh_known_hosts {
            args.push(("sshKnownHosts".to_string(), Value::from(known_hosts)));
        }
        if let Some(socket) = opts.ssh_auth_socket {
            args.push(("sshAuthSocket".to_string(), Value::from(socket.0)));
        }
        if let Some(username) = opts.http_auth_username {
            args.push(("httpAuthUsername".to_string(), Value::from(username)));
        }
        if let Some(token) = opts.http_auth_token {
            args.push(("httpAuthToken".to_string(), Value::from(token.0)));
        }
        if let Some(header) = opts.http_auth_header {
            args.push(("httpAuthHeader".to_string(), Value::from(header.0)));
        }
        let query = self.selection.append("git", args);
        GitRepository::new(query, self.graphql_client.clone())
    }
    /// The host the engine runs on.
    pub fn host(&self) -> Host {
        Host::new(query_with_root("host"), self.graphql_client.clone())
    }
    /// Fetches an HTTP URL as a file.
    pub fn http(&self, url: impl Into<String>) -> File {
        let args = vec![("url".to_string(), Value::from(url.into()))];
        let query = self.selection.append("http", args);
        File::new(query, self.graphql_client.clone())
    }
    pub fn http_opts(&self, url: impl Into<String>, opts: QueryHttpOpts) -> File {
        let mut args = vec![("url".to_string(), Value::from(url.into()))];
        if let Some(name) = opts.name {
            args.push(("name".to_string(), Value::from(name)));
        }
        if let Some(permissions) = opts.permissions {
            args.push(("permissions".to_string(), Value::from(permissions)));
        }
        if let Some(header) = opts.auth_header {
            args.push(("authHeader".to_string(), Value::from(header.0)));
        }
        let query = self.selection.append("http", args);
        File::new(query, self.graphql_client.clone())
    }
    /// Rehydrates a container from an identifier.
    pub fn load_container_from_id(&self, id: ContainerId) -> Container {
        Container::from_id(id, self.graphql_client.clone())
    }
    /// Rehydrates a directory from an identifier.
    pub fn load_directory_from_id(&self, id: DirectoryId) -> Directory {
        Directory::from_id(id, self.graphql_client.clone())
    }
    /// Rehydrates a file from an identifier.
    pub fn load_file_from_id(&self, id: FileId) -> File {
        File::from_id(id, self.graphql_client.clone())
    }
    /// Rehydrates a host handle from an identifier.
    pub fn load_host_from_id(&self, id: HostId) -> Host {
        Host::from_id(id, self.graphql_client.clone())
    }
    /// Rehydrates a secret from an identifier.
    pub fn load_secret_from_id(&self, id: SecretId) -> Secret {
        Secret::from_id(id, self.graphql_client.clone())
    }
    /// Rehydrates a service from an identifier.
    pub fn load_service_from_id(&self, id: ServiceId) -> Service {
        Service::from_id(id, self.graphql_client.clone())
    }
    /// Rehydrates a socket from an identifier.
    pub fn load_socket_from_id(&self, id: SocketId) -> Socket {
        Socket::from_id(id, self.graphql_client.clone())
    }
    /// Looks up a secret by name.
    pub fn secret(&self) -> Secret {
        Secret::new(query_with_root("secret"), self.graphql_client.clone())
    }
    /// Registers a plaintext value as a named secret and returns its handle.
    pub fn set_secret(&self, name: impl Into<String>, plaintext: impl Into<String>) -> Secret {
        let args = vec![
            ("name".to_string(), Value::from(name.into())),
            ("plaintext".to_string(), Value::from(plaintext.into())),
        ];
        let query = self.selection.append("setSecret", args);
        Secret::new(query, self.graphql_client.clone())
    }
}

#[derive(Clone)]
pub struct Secret {
    selection: Chain,
    graphql_client: DynGraphQLClient,
    id_cell: Arc<OnceCell<SecretId>>,
}
impl Secret {
    pub fn new(selection: Chain, graphql_client: DynGraphQLClient) -> Self {
        Self {
            selection,
            graphql_client,
            id_cell: Arc::new(OnceCell::new()),
        }
    }
    pub fn from_id(id: SecretId, graphql_client: DynGraphQLClient) -> Self {
        Self::new(query_with_root("secret").load_from_id(id.0), graphql_client)
    }
    pub async fn id(&self) -> Result<SecretId, GantryError> {
        let id = self
            .id_cell
            .get_or_try_init(|| async {
                self.selection
                    .execute::<SecretId>("id", self.graphql_client.clone())
                    .await
            })
            .await?;
        Ok(id.clone())
    }
    /// The name of the secret.
    pub async fn name(&self) -> Result<String, GantryError> {
        self.selection
            .execute("name", self.graphql_client.clone())
            .await
    }
    /// The plaintext value of the secret.
    pub async fn plaintext(&self) -> Result<String, GantryError> {
        self.selection
            .execute("plaintext", self.graphql_client.clone())
            .await
    }
    pub async fn sync(&self) -> Result<Secret, GantryError> {
        self.id().await?;
        Ok(self.clone())
    }
    pub fn with_name(&self, name: impl Into<String>) -> Secret {
        let args = vec![("name".to_string(), Value::from(name.into()))];
        Secret::new(
            self.selection.append("withName", args),
            self.graphql_client.clone(),
        )
    }
    pub fn with_plaintext(&self, plaintext: impl Into<String>) -> Secret {
        let args = vec![("plaintext".to_string(), Value::from(plaintext.into()))];
        Secret::new(
            self.selection.append("withPlaintext", args),
            self.graphql_client.clone(),
        )
    }
}
#[async_trait]
impl NodeReference for Secret {
    async fn resolved_identifier(&self) -> Result<String, GantryError> {
        self.id().await.map(|id| id.0)
    }
}

#[derive(Clone)]
pub struct Service {
    selection: Chain,
    graphql_client: DynGraphQLClient,
    id_cell: Arc<OnceCell<ServiceId>>,
}
#[derive(Builder, Debug, PartialEq)]
pub struct ServiceEndpointOpts {
    /// The exposed port to address. Defaults to the first exposed port.
    #[builder(setter(into, strip_option), default)]
    pub port: Option<isize>,
    /// A scheme to prepend, e.g. "http".
    #[builder(setter(into, strip_option), default)]
    pub scheme: Option<String>,
}
#[derive(Builder, Debug, PartialEq)]
pub struct ServiceStopOpts {
    /// Send SIGKILL instead of SIGTERM.
    #[builder(setter(into, strip_option), default)]
    pub kill: Option<bool>,
}
#[derive(Builder, Debug, PartialEq)]
pub struct ServiceUpOpts {
    /// Port forwards as "frontend:backend" pairs.
    #[builder(setter(into, strip_option), default)]
    pub ports: Option<Vec<String>>,
    /// Bind each port to a random host port.
    #[builder(setter(into, strip_option), default)]
    pub random: Option<bool>,
}
impl Service {
    pub fn new(selection: Chain, graphql_client: DynGraphQLClient) -> Self {
        Self {
            selection,
            graphql_client,
            id_cell: Arc::new(OnceCell::new()),
        }
    }
    pub fn from_id(id: ServiceId, graphql_client: DynGraphQLClient) -> Self {
        Self::new(query_with_root("service").load_from_id(id.0), graphql_client)
    }
    /// An address callers can reach the service on.
    pub async fn endpoint(&self) -> Result<String, GantryError> {
        self.selection
            .execute("endpoint", self.graphql_client.clone())
            .await
    }
    pub async fn endpoint_opts(&self, opts: ServiceEndpointOpts) -> Result<String, GantryError> {
        let mut args: Vec<(String, Value)> = vec![];
        if let Some(port) = opts.port {
            args.push(("port".to_string(), Value::from(port)));
        }
        if let Some(scheme) = opts.scheme {
            args.push(("scheme".to_string(), Value::from(scheme)));
        }
        self.selection
            .execute_with_args("endpoint", args, self.graphql_client.clone())
            .await
    }
    /// The service's hostname on the session network.
    pub async fn hostname(&self) -> Result<String, GantryError> {
        self.selection
            .execute("hostname", self.graphql_client.clone())
            .await
    }
    pub async fn id(&self) -> Result<ServiceId, GantryError> {
        let id = self
            .id_cell
            .get_or_try_init(|| async {
                self.selection
                    .execute::<ServiceId>("id", self.graphql_client.clone())
                    .await
            })
            .await?;
        Ok(id.clone())
    }
    /// The ports the service exposes, as child facades.
    pub async fn ports(&self) -> Result<Vec<Port>, GantryError> {
        let ids = self
            .selection
            .execute_id_list("ports", self.graphql_client.clone())
            .await?;
        Ok(ids
            .into_iter()
            .map(|id| Port::from_id(PortId(id), self.graphql_client.clone()))
            .collect())
    }
    /// Starts the service and waits for its health checks.
    pub async fn start(&self) -> Result<ServiceId, GantryError> {
        self.selection
            .execute("start", self.graphql_client.clone())
            .await
    }
    /// Stops the service.
    pub async fn stop(&self) -> Result<ServiceId, GantryError> {
        self.selection
            .execute("stop", self.graphql_client.clone())
            .await
    }
    pub async fn stop_opts(&self, opts: ServiceStopOpts) -> Result<ServiceId, GantryError> {
        let mut args: Vec<(String, Value)> = vec![];
        if let Some(kill) = opts.kill {
            args.push(("kill".to_string(), Value::from(kill)));
        }
        self.selection
            .execute_with_args("stop", args, self.graphql_client.clone())
            .await
    }
    pub async fn sync(&self) -> Result<Service, GantryError> {
        self.id().await?;
        Ok(self.clone())
    }
    /// Forwards the service's ports to the host until the session closes.
    pub async fn up(&self) -> Result<(), GantryError> {
        let _: Option<serde_json::Value> = self
            .selection
            .execute("up", self.graphql_client.clone())
            .await?;
        Ok(())
    }
    pub async fn up_opts(&self, opts: ServiceUpOpts) -> Result<(), GantryError> {
        let mut args: Vec<(String, Value)> = vec![];
        if let Some(ports) = opts.ports {
            args.push(("ports".to_string(), Value::from(ports)));
        }
        if let Some(random) = opts.random {
            args.push(("random".to_string(), Value::from(random)));
        }
        let _: Option<serde_json::Value> = self
            .selection
            .execute_with_args("up", args, self.graphql_client.clone())
            .await?;
        Ok(())
    }
    /// Retrieves this service with a custom hostname.
    pub fn with_hostname(&self, hostname: impl Into<String>) -> Service {
        let args = vec![("hostname".to_string(), Value::from(hostname.into()))];
        Service::new(
            self.selection.append("withHostname", args),
            self.graphql_client.clone(),
        )
    }
}
#[async_trait]
impl NodeReference for Service {
    async fn resolved_identifier(&self) -> Result<String, GantryError> {
        self.id().await.map(|id| id.0)
    }
}

#[derive(Clone)]
pub struct Socket {
    selection: Chain,
    graphql_client: DynGraphQLClient,
    id_cell: Arc<OnceCell<SocketId>>,
}
impl Socket {
    pub fn new(selection: Chain, graphql_client: DynGraphQLClient) -> Self {
        Self {
            selection,
            graphql_client,
            id_cell: Arc::new(OnceCell::new()),
        }
    }
    pub fn from_id(id: SocketId, graphql_client: DynGraphQLClient) -> Self {
        Self::new(query_with_root("socket").load_from_id(id.0), graphql_client)
    }
    pub async fn id(&self) -> Result<SocketId, GantryError> {
        let id = self
            .id_cell
            .get_or_try_init(|| async {
                self.selection
                    .execute::<SocketId>("id", self.graphql_client.clone())
                    .await
            })
            .await?;
        Ok(id.clone())
    }
    pub async fn sync(&self) -> Result<Socket, GantryError> {
        self.id().await?;
        Ok(self.clone())
    }
}
#[async_trait]
impl NodeReference for Socket {
    async fn resolved_identifier(&self) -> Result<String, GantryError> {
        self.id().await.map(|id| id.0)
    }
}
