use crate::{
    error::FcErr,
    request::Invocation,
    result::{InvocationId, InvocationResult},
    transport::TaskTransport,
};

/// Posts the task. Failures are propagated without retry.
pub(crate) async fn post_task<T>(
    transport: &T,
    invocation: &Invocation<'_>,
) -> Result<InvocationId, FcErr>
where
    T: TaskTransport + ?Sized,
{
    tracing::info!(
        function_id = invocation.function_id,
        invocation_type = %invocation.invocation_type,
        payload_len = invocation.payload.len(),
        "invoking local function"
    );

    transport
        .post_task(
            invocation.function_id,
            invocation.invocation_type,
            invocation.invoker_context,
            invocation.payload,
        )
        .await
        .map_err(|e| {
            tracing::error!(error = ?e, "failed to invoke function");
            FcErr::PostTask(e)
        })
}

/// Fetches the result of a posted task.
/// A function error is part of the returned [InvocationResult].
pub(crate) async fn get_task_result<T>(
    transport: &T,
    function_id: &str,
    invocation_id: &InvocationId,
) -> Result<InvocationResult, FcErr>
where
    T: TaskTransport + ?Sized,
{
    let task_result = transport
        .get_task_result(function_id, invocation_id)
        .await
        .map_err(|e| {
            tracing::error!(error = ?e, %invocation_id, "failed to get task result");
            FcErr::GetTaskResult(e)
        })?;

    let result = InvocationResult::from(task_result);
    if let Some(function_error) = &result.function_error {
        tracing::warn!(%invocation_id, %function_error, status_code = result.status_code, "invoked function reported an error");
    }

    Ok(result)
}
