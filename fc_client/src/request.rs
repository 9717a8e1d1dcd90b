use crate::error::{FcErr, InvalidInvocationType};
use edge_params::required;
use std::{fmt::Display, str::FromStr};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InvocationType {
    /// Wait for the invoked function and return its result
    #[default]
    Sync,
    /// Return as soon as the host accepted the task
    Async,
}

impl Display for InvocationType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InvocationType::Sync => write!(f, "Sync"),
            InvocationType::Async => write!(f, "Async"),
        }
    }
}

impl FromStr for InvocationType {
    type Err = InvalidInvocationType;

    fn from_str(s: &str) -> Result<Self, InvalidInvocationType> {
        match s {
            "Sync" => Ok(InvocationType::Sync),
            "Async" => Ok(InvocationType::Async),
            s => Err(InvalidInvocationType(s.to_string())),
        }
    }
}

/// A request to run another function on this node.
///
/// Fields are kept as the caller supplied them and only checked by [InvocationRequest::validate],
/// so a request built from untyped input fails the same way as one built with the builder methods.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InvocationRequest {
    pub function_id: Option<String>,
    /// Not supported. Setting it makes the invocation fail.
    pub service_name: Option<String>,
    /// Not supported. Setting it makes the invocation fail.
    pub function_name: Option<String>,
    /// `"Sync"` or `"Async"`, `Sync` when absent
    pub invocation_type: Option<String>,
    /// Opaque metadata for the invoked function or the router, empty when absent
    pub invoker_context: Option<String>,
    pub payload: Option<Vec<u8>>,
}

impl InvocationRequest {
    pub fn new(function_id: impl Into<String>) -> Self {
        Self {
            function_id: Some(function_id.into()),
            ..Default::default()
        }
    }

    pub fn sync(self) -> Self {
        self.invocation_type(InvocationType::Sync)
    }

    pub fn asynchronous(self) -> Self {
        self.invocation_type(InvocationType::Async)
    }

    pub fn invocation_type(mut self, invocation_type: InvocationType) -> Self {
        self.invocation_type = Some(invocation_type.to_string());
        self
    }

    pub fn invoker_context(mut self, invoker_context: impl Into<String>) -> Self {
        self.invoker_context = Some(invoker_context.into());
        self
    }

    pub fn payload(mut self, payload: impl Into<Vec<u8>>) -> Self {
        self.payload = Some(payload.into());
        self
    }

    /// Checks, in order: addressing mode, `functionId`, invocation type.
    pub(crate) fn validate(&self) -> Result<Invocation<'_>, FcErr> {
        if self.service_name.is_some() || self.function_name.is_some() {
            return Err(FcErr::UnsupportedAddressing);
        }
        let function_id = required("functionId", self.function_id.as_deref())?;
        let invocation_type = match self.invocation_type.as_deref() {
            None => InvocationType::Sync,
            Some(raw) => raw.parse()?,
        };

        Ok(Invocation {
            function_id,
            invocation_type,
            invoker_context: self.invoker_context.as_deref().unwrap_or_default(),
            payload: self.payload.as_deref().unwrap_or_default(),
        })
    }
}

/// A request which passed validation
#[derive(Debug, Clone, Copy)]
pub(crate) struct Invocation<'a> {
    pub function_id: &'a str,
    pub invocation_type: InvocationType,
    pub invoker_context: &'a str,
    pub payload: &'a [u8],
}
