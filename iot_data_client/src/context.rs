use base64::{Engine as _, engine::general_purpose::STANDARD};
use serde::Serialize;

#[derive(Serialize)]
struct InvokerContext<'a> {
    custom: Custom<'a>,
}

#[derive(Serialize)]
struct Custom<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    source: Option<&'a str>,
    topic: &'a str,
}

/// base64 of `{"custom":{"source":..,"topic":..}}`, the form the router and thing functions read
pub(crate) fn encode(source: Option<&str>, topic: &str) -> Result<String, serde_json::Error> {
    let json = serde_json::to_vec(&InvokerContext {
        custom: Custom { source, topic },
    })?;
    Ok(STANDARD.encode(json))
}
