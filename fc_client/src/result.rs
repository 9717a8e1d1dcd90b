use std::fmt::Display;

/// Opaque identifier the host assigns to a posted task
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct InvocationId(String);

impl InvocationId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for InvocationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// The task result exactly as the host reports it
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskResult {
    pub payload: Vec<u8>,
    /// empty or absent when the function succeeded
    pub function_error: Option<String>,
    pub status_code: u16,
}

/// How the invoked function failed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FunctionError {
    /// The function crashed or threw without handling the error
    Unhandled,
    /// The function reported an error of its own, e.g. `Handled`
    Handled(String),
}

impl From<&str> for FunctionError {
    fn from(value: &str) -> Self {
        match value {
            "Unhandled" => FunctionError::Unhandled,
            other => FunctionError::Handled(other.to_string()),
        }
    }
}

impl Display for FunctionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FunctionError::Unhandled => write!(f, "Unhandled"),
            FunctionError::Handled(kind) => write!(f, "{kind}"),
        }
    }
}

/// Result of a synchronous invocation.
/// `payload` holds the error body when `function_error` is set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvocationResult {
    pub function_error: Option<FunctionError>,
    pub status_code: u16,
    pub payload: Vec<u8>,
}

impl InvocationResult {
    pub fn is_function_error(&self) -> bool {
        self.function_error.is_some()
    }

    pub fn payload_str(&self) -> std::borrow::Cow<'_, str> {
        String::from_utf8_lossy(&self.payload)
    }
}

impl From<TaskResult> for InvocationResult {
    fn from(value: TaskResult) -> Self {
        let function_error = value
            .function_error
            .filter(|e| !e.is_empty())
            .map(|e| FunctionError::from(e.as_str()));

        Self {
            function_error,
            status_code: value.status_code,
            payload: value.payload,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvokeOutput {
    /// The host accepted an async invocation
    Accepted(InvocationId),
    /// A sync invocation finished, successfully or not
    Completed(InvocationResult),
}
