//! Publishing and thing (device) operations, all carried out by invoking functions provided by the edge host.
use edge_config::EdgeConfig;
use edge_params::{optional_json, required};
use fc_client::{FcClient, InvocationId, InvocationRequest, InvocationResult, TaskTransport};
use serde::de::DeserializeOwned;
use serde_json::Value;

mod context;
pub mod error;
pub mod request;


pub use error::IotErr;
pub use request::{PublishRequest, ThingPropertiesRequest, ThingServiceRequest, ThingsWithTagsRequest};

/// Topic the thing function serves tag based lookups on
pub const THINGS_WITH_TAGS_TOPIC: &str = "/sys/things///services/getthingswithtags";

pub fn thing_service_topic(product_key: &str, device_name: &str, service: &str) -> String {
    format!("/sys/things/{product_key}/{device_name}/services/{service}")
}

#[derive(Clone, Debug)]
pub struct IotData<T> {
    fc: FcClient<T>,
    my_function_id: String,
    router_function_id: String,
    thing_function_id: String,
}

impl<T> IotData<T>
where
    T: TaskTransport,
{
    pub fn new(config: &EdgeConfig, fc: FcClient<T>) -> Self {
        Self {
            fc,
            my_function_id: config.my_function_id().to_string(),
            router_function_id: config.router_function_id().to_string(),
            thing_function_id: config.thing_function_id().to_string(),
        }
    }

    /// Publishes `payload` on `topic` through the router function.
    /// Returns once the router accepted the message.
    #[tracing::instrument(err, skip(self, request), fields(topic = ?request.topic))]
    pub async fn publish(&self, request: PublishRequest) -> Result<InvocationId, IotErr> {
        let topic = required("topic", request.topic)?;
        let payload = required("payload", request.payload)?;
        let invoker_context =
            context::encode(Some(&self.my_function_id), &topic).map_err(IotErr::Encode)?;

        tracing::info!(%topic, payload_len = payload.len(), "publishing message");
        let invocation = InvocationRequest::new(self.router_function_id.as_str())
            .invoker_context(invoker_context)
            .payload(payload);

        Ok(self.fc.invoke_async(invocation).await?)
    }

    /// Reads the named properties of a thing
    #[tracing::instrument(
        err,
        skip(self, request),
        fields(product_key = ?request.product_key, device_name = ?request.device_name)
    )]
    pub async fn get_thing_properties(
        &self,
        request: ThingPropertiesRequest,
    ) -> Result<Value, IotErr> {
        let payload = required("payload", request.payload)?;
        self.call_thing_service(ThingServiceRequest {
            product_key: request.product_key,
            device_name: request.device_name,
            service: Some("get".to_string()),
            payload: Some(payload),
        })
        .await
    }

    /// Writes property values of a thing
    #[tracing::instrument(
        err,
        skip(self, request),
        fields(product_key = ?request.product_key, device_name = ?request.device_name)
    )]
    pub async fn set_thing_properties(
        &self,
        request: ThingPropertiesRequest,
    ) -> Result<Value, IotErr> {
        let payload = required("payload", request.payload)?;
        self.call_thing_service(ThingServiceRequest {
            product_key: request.product_key,
            device_name: request.device_name,
            service: Some("set".to_string()),
            payload: Some(payload),
        })
        .await
    }

    /// Calls `service` on a thing and returns the decoded response.
    /// An absent or null payload is sent as `{}`.
    #[tracing::instrument(
        err,
        skip(self, request),
        fields(
            product_key = ?request.product_key,
            device_name = ?request.device_name,
            service = ?request.service
        )
    )]
    pub async fn call_thing_service(&self, request: ThingServiceRequest) -> Result<Value, IotErr> {
        let product_key = required("productKey", request.product_key)?;
        let device_name = required("deviceName", request.device_name)?;
        let service = required("service", request.service)?;
        let payload =
            optional_json(request.payload).unwrap_or_else(|| Value::Object(Default::default()));
        let payload = serde_json::to_vec(&payload).map_err(IotErr::Encode)?;

        tracing::info!(%service, %device_name, "calling thing service");
        let topic = thing_service_topic(&product_key, &device_name, &service);
        self.invoke_thing_function(&topic, payload).await
    }

    /// Looks up the things carrying all of the given tags
    #[tracing::instrument(err, skip(self, request))]
    pub async fn get_things_with_tags(
        &self,
        request: ThingsWithTagsRequest,
    ) -> Result<Vec<Value>, IotErr> {
        let payload = required("payload", request.payload)?;
        let payload = serde_json::to_vec(&payload).map_err(IotErr::Encode)?;

        tracing::info!("obtaining things with tags");
        self.invoke_thing_function(THINGS_WITH_TAGS_TOPIC, payload)
            .await
    }

    async fn invoke_thing_function<R>(&self, topic: &str, payload: Vec<u8>) -> Result<R, IotErr>
    where
        R: DeserializeOwned,
    {
        let invoker_context = context::encode(None, topic).map_err(IotErr::Encode)?;
        let invocation = InvocationRequest::new(self.thing_function_id.as_str())
            .invoker_context(invoker_context)
            .payload(payload);

        let result = self.fc.invoke_sync(invocation).await?;
        decode_thing_response(result)
    }
}

/// A function error from the thing function becomes [IotErr::Remote] carrying its payload
fn decode_thing_response<R>(result: InvocationResult) -> Result<R, IotErr>
where
    R: DeserializeOwned,
{
    if result.is_function_error() {
        return Err(IotErr::Remote(result.payload_str().into_owned()));
    }
    serde_json::from_slice(&result.payload).map_err(IotErr::Decode)
}
