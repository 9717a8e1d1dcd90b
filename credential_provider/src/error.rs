#[derive(Debug, thiserror::Error)]
pub enum CredentialErr {
    #[error("Failed to get credential: {0}.")]
    Request(#[source] anyhow::Error),
    /// The host answered with a non 200 status. The body explains why.
    #[error("{body}")]
    Rejected { status_code: u16, body: String },
    #[error("Can not parse credential from {raw}.")]
    Parse {
        raw: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("no credential provider is configured")]
    NoProviders,
}
