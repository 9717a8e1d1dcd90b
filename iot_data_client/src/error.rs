use edge_params::MissingParam;
use fc_client::FcErr;

#[derive(Debug, thiserror::Error)]
pub enum IotErr {
    #[error(transparent)]
    MissingParam(#[from] MissingParam),
    #[error(transparent)]
    Invoke(#[from] FcErr),
    /// The thing function reported an error, the message is its response payload
    #[error("{0}")]
    Remote(String),
    #[error("unable to encode request: {0}")]
    Encode(#[source] serde_json::Error),
    #[error("unable to decode response: {0}")]
    Decode(#[source] serde_json::Error),
}
