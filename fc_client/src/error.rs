use edge_params::MissingParam;

#[derive(Debug, thiserror::Error)]
pub enum FcErr {
    #[error("Invoking function via serviceName and functionName is not supported by now.")]
    UnsupportedAddressing,
    #[error(transparent)]
    MissingParam(#[from] MissingParam),
    #[error(transparent)]
    InvalidInvocationType(#[from] InvalidInvocationType),
    #[error("Failed to invoke function due to {0}")]
    PostTask(#[source] anyhow::Error),
    #[error("Failed to get task result due to {0}")]
    GetTaskResult(#[source] anyhow::Error),
}

impl FcErr {
    /// True for errors raised before anything was sent to the host
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            FcErr::UnsupportedAddressing
                | FcErr::MissingParam(_)
                | FcErr::InvalidInvocationType(_)
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Incorrect invocationType {0}. It should be \"Sync\" or \"Async\".")]
pub struct InvalidInvocationType(pub String);
