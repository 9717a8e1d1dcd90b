use crate::{
    request::InvocationType,
    result::{InvocationId, TaskResult},
};

/// The inter-process channel to the edge host.
/// Framing and authentication belong to the implementation; the client only sequences the two calls.
#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
#[async_trait::async_trait]
pub trait TaskTransport: Send + Sync {
    /// Hand a task to the host for `function_id`, returning the id the host assigned to it
    async fn post_task(
        &self,
        function_id: &str,
        invocation_type: InvocationType,
        invoker_context: &str,
        payload: &[u8],
    ) -> anyhow::Result<InvocationId>;

    /// Fetch the result of a task posted with [TaskTransport::post_task]
    async fn get_task_result(
        &self,
        function_id: &str,
        invocation_id: &InvocationId,
    ) -> anyhow::Result<TaskResult>;
}

#[async_trait::async_trait]
impl<T> TaskTransport for std::sync::Arc<T>
where
    T: TaskTransport + ?Sized,
{
    async fn post_task(
        &self,
        function_id: &str,
        invocation_type: InvocationType,
        invoker_context: &str,
        payload: &[u8],
    ) -> anyhow::Result<InvocationId> {
        (**self)
            .post_task(function_id, invocation_type, invoker_context, payload)
            .await
    }

    async fn get_task_result(
        &self,
        function_id: &str,
        invocation_id: &InvocationId,
    ) -> anyhow::Result<TaskResult> {
        (**self).get_task_result(function_id, invocation_id).await
    }
}
