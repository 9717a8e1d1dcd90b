#![deny(missing_docs)]
//! Configuration captured once when a function process starts.
//! Every client in the sdk receives an [EdgeConfig] explicitly instead of reading globals.

use edge_env_var::VarNameErr;
use thiserror::Error;

mod run_mode;

pub use run_mode::{RunMode, UnknownRunMode};


mod var {
    edge_env_var::env_var!(
        pub struct AuthToken;
    );
    edge_env_var::env_var!(
        pub struct MyFunctionId;
    );
    edge_env_var::env_var!(
        pub struct RouterFunctionId;
    );
    edge_env_var::env_var!(
        pub struct ThingFunctionId;
    );
    // the runtime exports the misspelled name
    edge_env_var::env_var!(
        pub struct DeffaultCredentialsRelativeUri;
    );
}

/// Name of the variable which carries the credential endpoint path
pub const CREDENTIALS_RELATIVE_URI_VAR: &str = "DEFFAULT_CREDENTIALS_RELATIVE_URI";

/// An error which can occur when constructing an [EdgeConfig]
#[derive(Debug, Error)]
pub enum ConfigErr {
    /// A required option was absent or empty
    #[error("missing required configuration {0}")]
    Missing(&'static str),
    /// A std::env::var error while reading an env var
    #[error("{0}")]
    VarErr(#[from] VarNameErr),
}

/// Identifiers and secrets the edge runtime hands to a function
#[derive(Clone, PartialEq, Eq)]
pub struct EdgeConfig {
    auth_token: String,
    my_function_id: String,
    router_function_id: String,
    thing_function_id: String,
    default_credentials_relative_uri: Option<String>,
}

impl std::fmt::Debug for EdgeConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EdgeConfig")
            .field("auth_token", &"<redacted>")
            .field("my_function_id", &self.my_function_id)
            .field("router_function_id", &self.router_function_id)
            .field("thing_function_id", &self.thing_function_id)
            .field(
                "default_credentials_relative_uri",
                &self.default_credentials_relative_uri,
            )
            .finish()
    }
}

impl EdgeConfig {
    /// begin building a config by hand
    pub fn builder() -> EdgeConfigBuilder {
        EdgeConfigBuilder::default()
    }

    /// Read the config from the variables the edge runtime exports into the function process
    #[tracing::instrument(err)]
    pub fn from_env() -> Result<Self, ConfigErr> {
        let relative_uri = var::DeffaultCredentialsRelativeUri::optional()?;
        EdgeConfig::builder()
            .auth_token(var::AuthToken::new()?.into_string())
            .my_function_id(var::MyFunctionId::new()?.into_string())
            .router_function_id(var::RouterFunctionId::new()?.into_string())
            .thing_function_id(var::ThingFunctionId::new()?.into_string())
            .maybe_credentials_relative_uri(relative_uri.map(|v| v.into_string()))
            .build()
    }

    /// token presented to the host on every request
    pub fn auth_token(&self) -> &str {
        &self.auth_token
    }

    /// id of the function this process is running
    pub fn my_function_id(&self) -> &str {
        &self.my_function_id
    }

    /// id of the function which routes published messages
    pub fn router_function_id(&self) -> &str {
        &self.router_function_id
    }

    /// id of the function which serves thing operations
    pub fn thing_function_id(&self) -> &str {
        &self.thing_function_id
    }

    /// path of the credential endpoint, if the host exposes one
    pub fn credentials_relative_uri(&self) -> Option<&str> {
        self.default_credentials_relative_uri.as_deref()
    }

    /// Like [Self::credentials_relative_uri] but fails when it is not configured
    pub fn require_credentials_uri(&self) -> Result<&str, ConfigErr> {
        self.credentials_relative_uri()
            .ok_or(ConfigErr::Missing(CREDENTIALS_RELATIVE_URI_VAR))
    }
}

/// Builder for [EdgeConfig]
#[derive(Debug, Default, Clone)]
pub struct EdgeConfigBuilder {
    auth_token: Option<String>,
    my_function_id: Option<String>,
    router_function_id: Option<String>,
    thing_function_id: Option<String>,
    default_credentials_relative_uri: Option<String>,
}

impl EdgeConfigBuilder {
    /// set the auth token
    pub fn auth_token(mut self, v: impl Into<String>) -> Self {
        self.auth_token = Some(v.into());
        self
    }

    /// set the id of this function
    pub fn my_function_id(mut self, v: impl Into<String>) -> Self {
        self.my_function_id = Some(v.into());
        self
    }

    /// set the router function id
    pub fn router_function_id(mut self, v: impl Into<String>) -> Self {
        self.router_function_id = Some(v.into());
        self
    }

    /// set the thing function id
    pub fn thing_function_id(mut self, v: impl Into<String>) -> Self {
        self.thing_function_id = Some(v.into());
        self
    }

    /// set the credential endpoint path
    pub fn credentials_relative_uri(mut self, v: impl Into<String>) -> Self {
        self.default_credentials_relative_uri = Some(v.into());
        self
    }

    fn maybe_credentials_relative_uri(mut self, v: Option<String>) -> Self {
        self.default_credentials_relative_uri = v;
        self
    }

    /// Validate and produce the [EdgeConfig]
    pub fn build(self) -> Result<EdgeConfig, ConfigErr> {
        Ok(EdgeConfig {
            auth_token: present("AUTH_TOKEN", self.auth_token)?,
            my_function_id: present("MY_FUNCTION_ID", self.my_function_id)?,
            router_function_id: present("ROUTER_FUNCTION_ID", self.router_function_id)?,
            thing_function_id: present("THING_FUNCTION_ID", self.thing_function_id)?,
            default_credentials_relative_uri: self
                .default_credentials_relative_uri
                .filter(|v| !v.is_empty()),
        })
    }
}

fn present(name: &'static str, value: Option<String>) -> Result<String, ConfigErr> {
    value
        .filter(|v| !v.is_empty())
        .ok_or(ConfigErr::Missing(name))
}
