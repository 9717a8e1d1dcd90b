use crate::{
    CredentialProvider,
    credential::Credential,
    error::CredentialErr,
    http::{HttpRequest, HttpTransport},
};
use edge_config::{ConfigErr, EdgeConfig};
use reqwest::{
    Method, StatusCode,
    header::{AUTHORIZATION, HeaderMap, HeaderValue},
};

/// Response header carrying the JSON encoded [Credential] (`X-Provider-Credential`, matched case-insensitively)
pub const CREDENTIAL_HEADER: &str = "x-provider-credential";

/// Asks the host's credential endpoint for a fresh [Credential] on every call
pub struct DefaultCredentialProvider<H> {
    relative_uri: String,
    auth_token: String,
    http: H,
}

impl<H> std::fmt::Debug for DefaultCredentialProvider<H> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DefaultCredentialProvider")
            .field("relative_uri", &self.relative_uri)
            .finish_non_exhaustive()
    }
}

impl<H> DefaultCredentialProvider<H>
where
    H: HttpTransport,
{
    /// Only meaningful inside the edge runtime: fails if the config has no credential endpoint.
    pub fn new(config: &EdgeConfig, http: H) -> Result<Self, ConfigErr> {
        let relative_uri = config.require_credentials_uri()?.to_string();
        Ok(Self {
            relative_uri,
            auth_token: config.auth_token().to_string(),
            http,
        })
    }

    fn build_request(&self) -> Result<HttpRequest, CredentialErr> {
        let mut headers = HeaderMap::new();
        let token = HeaderValue::from_str(&self.auth_token)
            .map_err(|e| CredentialErr::Request(anyhow::Error::from(e)))?;
        headers.insert(AUTHORIZATION, token);

        Ok(HttpRequest {
            method: Method::GET,
            path: self.relative_uri.clone(),
            headers,
        })
    }
}

#[async_trait::async_trait]
impl<H> CredentialProvider for DefaultCredentialProvider<H>
where
    H: HttpTransport,
{
    #[tracing::instrument(err, skip(self), fields(relative_uri = %self.relative_uri))]
    async fn get(&self) -> Result<Credential, CredentialErr> {
        let request = self.build_request()?;
        let response = self.http.request(request).await.map_err(|e| {
            tracing::error!(error = ?e, "failed to get credential");
            CredentialErr::Request(e)
        })?;

        if response.status_code != StatusCode::OK {
            return Err(CredentialErr::Rejected {
                status_code: response.status_code.as_u16(),
                body: response.body,
            });
        }

        let raw = response
            .headers
            .get(CREDENTIAL_HEADER)
            .map(|v| String::from_utf8_lossy(v.as_bytes()).into_owned())
            .unwrap_or_default();

        serde_json::from_str::<Credential>(&raw)
            .map_err(|source| CredentialErr::Parse { raw, source })
    }
}
