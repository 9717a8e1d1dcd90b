//! Sdk for functions running inside the edge runtime.
//!
//! ```no_run
//! # async fn run<T: linkedge_sdk::TaskTransport + 'static>(transport: T) -> anyhow::Result<()> {
//! use linkedge_sdk::{EdgeEntrypoint, EdgeSdk, ReqwestTransport, iot::PublishRequest};
//!
//! EdgeEntrypoint::default().init();
//! let sdk = EdgeSdk::from_env(transport)?
//!     .with_credentials(ReqwestTransport::new("http://127.0.0.1:9000")?)?;
//!
//! sdk.iot()
//!     .publish(PublishRequest::new("/hello/world", "Hello World!"))
//!     .await?;
//! let _credential = sdk.resolve_credential().await?;
//! # Ok(())
//! # }
//! ```
use std::sync::Arc;

pub use credential_provider::{
    self as credential, Credential, CredentialErr, CredentialProvider, CredentialProviderChain,
    DefaultCredentialProvider, HttpTransport, ReqwestTransport,
};
pub use edge_config::{ConfigErr, EdgeConfig, RunMode};
pub use edge_entrypoint::EdgeEntrypoint;
pub use edge_params::MissingParam;
pub use fc_client::{
    self as fc, FcClient, FcErr, InvocationId, InvocationRequest, InvocationResult, InvocationType,
    InvokeOutput, TaskTransport,
};
pub use iot_data_client::{self as iot, IotData, IotErr};

#[cfg(test)]
mod tests;

/// Every client a function needs, sharing one transport and one [EdgeConfig]
#[derive(Clone, Debug)]
pub struct EdgeSdk<T> {
    config: EdgeConfig,
    fc: FcClient<Arc<T>>,
    iot: IotData<Arc<T>>,
    credentials: CredentialProviderChain,
}

impl<T> EdgeSdk<T>
where
    T: TaskTransport,
{
    /// The credential chain starts out empty, see [EdgeSdk::with_credentials]
    pub fn new(config: EdgeConfig, transport: T) -> Self {
        let fc = FcClient::new(Arc::new(transport));
        let iot = IotData::new(&config, fc.clone());
        Self {
            config,
            fc,
            iot,
            credentials: CredentialProviderChain::with_providers(Vec::new()),
        }
    }

    /// Builds the sdk from the variables the edge runtime exports
    #[tracing::instrument(err, skip(transport))]
    pub fn from_env(transport: T) -> Result<Self, ConfigErr> {
        Ok(Self::new(EdgeConfig::from_env()?, transport))
    }

    /// Installs the default credential chain.
    /// Fails if the host does not expose a credential endpoint.
    pub fn with_credentials<H>(mut self, http: H) -> Result<Self, ConfigErr>
    where
        H: HttpTransport + 'static,
    {
        self.credentials = CredentialProviderChain::from_config(&self.config, http)?;
        Ok(self)
    }

    /// Replaces the credential chain
    pub fn with_credential_chain(mut self, chain: CredentialProviderChain) -> Self {
        self.credentials = chain;
        self
    }

    pub fn config(&self) -> &EdgeConfig {
        &self.config
    }

    pub fn fc(&self) -> &FcClient<Arc<T>> {
        &self.fc
    }

    pub fn iot(&self) -> &IotData<Arc<T>> {
        &self.iot
    }

    pub fn credentials(&self) -> &CredentialProviderChain {
        &self.credentials
    }

    /// See [FcClient::invoke]
    pub async fn invoke_function(
        &self,
        request: &InvocationRequest,
    ) -> Result<InvokeOutput, FcErr> {
        self.fc.invoke(request).await
    }

    /// See [CredentialProviderChain::resolve]
    pub async fn resolve_credential(&self) -> Result<Credential, CredentialErr> {
        self.credentials.resolve().await
    }
}
