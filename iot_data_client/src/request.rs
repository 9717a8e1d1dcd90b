use serde::{Deserialize, Deserializer};
use serde_json::Value;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublishRequest {
    #[serde(default)]
    pub topic: Option<String>,
    /// a JSON string is taken as its UTF-8 bytes, an array of numbers as raw bytes
    #[serde(default, deserialize_with = "payload_bytes")]
    pub payload: Option<Vec<u8>>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawPayload {
    Text(String),
    Bytes(Vec<u8>),
}

fn payload_bytes<'de, D>(deserializer: D) -> Result<Option<Vec<u8>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<RawPayload>::deserialize(deserializer)?;
    Ok(raw.map(|raw| match raw {
        RawPayload::Text(text) => text.into_bytes(),
        RawPayload::Bytes(bytes) => bytes,
    }))
}

impl PublishRequest {
    pub fn new(topic: impl Into<String>, payload: impl Into<Vec<u8>>) -> Self {
        Self {
            topic: Some(topic.into()),
            payload: Some(payload.into()),
        }
    }
}

/// Used by both get (payload is a list of property names) and set (payload maps names to values)
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThingPropertiesRequest {
    #[serde(default)]
    pub product_key: Option<String>,
    #[serde(default)]
    pub device_name: Option<String>,
    #[serde(default)]
    pub payload: Option<Value>,
}

impl ThingPropertiesRequest {
    pub fn new(product_key: impl Into<String>, device_name: impl Into<String>, payload: Value) -> Self {
        Self {
            product_key: Some(product_key.into()),
            device_name: Some(device_name.into()),
            payload: Some(payload),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThingServiceRequest {
    #[serde(default)]
    pub product_key: Option<String>,
    #[serde(default)]
    pub device_name: Option<String>,
    #[serde(default)]
    pub service: Option<String>,
    /// may be absent, sent as `{}` then
    #[serde(default)]
    pub payload: Option<Value>,
}

impl ThingServiceRequest {
    pub fn new(
        product_key: impl Into<String>,
        device_name: impl Into<String>,
        service: impl Into<String>,
    ) -> Self {
        Self {
            product_key: Some(product_key.into()),
            device_name: Some(device_name.into()),
            service: Some(service.into()),
            payload: None,
        }
    }

    pub fn payload(mut self, payload: Value) -> Self {
        self.payload = Some(payload);
        self
    }
}

/// payload is a list of `{"<key>": "<value>"}` tags
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ThingsWithTagsRequest {
    #[serde(default)]
    pub payload: Option<Value>,
}

impl ThingsWithTagsRequest {
    pub fn new(tags: Value) -> Self {
        Self {
            payload: Some(tags),
        }
    }
}
