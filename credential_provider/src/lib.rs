//! Resolves short-lived cloud credentials from the edge host.
//!
//! [CredentialProviderChain] holds an ordered list of [CredentialProvider]s. Only the
//! [DefaultCredentialProvider] exists today, which asks the host's credential endpoint.
use std::sync::Arc;

pub mod credential;
mod default_provider;
pub mod error;
pub mod http;

#[cfg(test)]
mod tests;

pub use credential::Credential;
pub use default_provider::{CREDENTIAL_HEADER, DefaultCredentialProvider};
pub use error::CredentialErr;
#[cfg(any(test, feature = "mock"))]
pub use http::MockHttpTransport;
pub use http::{HttpRequest, HttpResponse, HttpTransport, ReqwestTransport};

use edge_config::{ConfigErr, EdgeConfig};

/// A strategy for obtaining a [Credential]
#[async_trait::async_trait]
pub trait CredentialProvider: Send + Sync {
    async fn get(&self) -> Result<Credential, CredentialErr>;
}

#[derive(Clone)]
pub struct CredentialProviderChain {
    providers: Vec<Arc<dyn CredentialProvider>>,
}

impl std::fmt::Debug for CredentialProviderChain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CredentialProviderChain")
            .field("providers", &self.providers.len())
            .finish()
    }
}

impl CredentialProviderChain {
    /// The chain every function gets: a single [DefaultCredentialProvider].
    /// Fails right away if the host does not expose a credential endpoint.
    pub fn from_config<H>(config: &EdgeConfig, http: H) -> Result<Self, ConfigErr>
    where
        H: HttpTransport + 'static,
    {
        let provider: Arc<dyn CredentialProvider> =
            Arc::new(DefaultCredentialProvider::new(config, http)?);
        Ok(Self::with_providers(vec![provider]))
    }

    pub fn with_providers(providers: Vec<Arc<dyn CredentialProvider>>) -> Self {
        Self { providers }
    }

    /// Resolves a fresh credential from the first provider in the chain
    #[tracing::instrument(err, skip(self))]
    pub async fn resolve(&self) -> Result<Credential, CredentialErr> {
        let provider = self.providers.first().ok_or(CredentialErr::NoProviders)?;
        provider.get().await
    }
}
