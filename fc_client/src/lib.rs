//! Client for invoking sibling functions hosted on the same edge node.
pub mod error;
mod invoke;
pub mod request;
pub mod result;
pub mod transport;


pub use error::{FcErr, InvalidInvocationType};
pub use request::{InvocationRequest, InvocationType};
pub use result::{FunctionError, InvocationId, InvocationResult, InvokeOutput, TaskResult};
#[cfg(any(test, feature = "mock"))]
pub use transport::MockTaskTransport;
pub use transport::TaskTransport;

#[derive(Clone, Debug)]
pub struct FcClient<T> {
    /// Channel to the local host
    transport: T,
}

impl<T> FcClient<T>
where
    T: TaskTransport,
{
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    /// Validates the request and posts it to the host.
    /// Sync requests additionally wait for the task result, async requests only return the invocation id.
    /// A function error reported by the invoked function is returned as data, not as [FcErr].
    #[tracing::instrument(skip(self, request), fields(function_id = ?request.function_id))]
    pub async fn invoke(&self, request: &InvocationRequest) -> Result<InvokeOutput, FcErr> {
        let invocation = request.validate()?;
        let invocation_id = invoke::post_task(&self.transport, &invocation).await?;

        match invocation.invocation_type {
            InvocationType::Async => Ok(InvokeOutput::Accepted(invocation_id)),
            InvocationType::Sync => {
                invoke::get_task_result(&self.transport, invocation.function_id, &invocation_id)
                    .await
                    .map(InvokeOutput::Completed)
            }
        }
    }

    /// Invokes the function and waits for its result, whatever invocation type the request carried.
    #[tracing::instrument(skip(self, request), fields(function_id = ?request.function_id))]
    pub async fn invoke_sync(&self, request: InvocationRequest) -> Result<InvocationResult, FcErr> {
        let request = request.sync();
        let invocation = request.validate()?;
        let invocation_id = invoke::post_task(&self.transport, &invocation).await?;
        invoke::get_task_result(&self.transport, invocation.function_id, &invocation_id).await
    }

    /// Invokes the function as an event.
    /// It does not wait for the result.
    #[tracing::instrument(skip(self, request), fields(function_id = ?request.function_id))]
    pub async fn invoke_async(&self, request: InvocationRequest) -> Result<InvocationId, FcErr> {
        let request = request.asynchronous();
        let invocation = request.validate()?;
        invoke::post_task(&self.transport, &invocation).await
    }
}
