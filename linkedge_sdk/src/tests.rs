use super::*;
use cool_asserts::assert_matches;
use credential_provider::{HttpResponse, MockHttpTransport};
use fc_client::MockTaskTransport;
use iot::PublishRequest;
use reqwest::{StatusCode, header::HeaderMap};

fn config(relative_uri: Option<&str>) -> EdgeConfig {
    let builder = EdgeConfig::builder()
        .auth_token("auth-token")
        .my_function_id("my-function")
        .router_function_id("router-function")
        .thing_function_id("thing-function");
    match relative_uri {
        Some(uri) => builder.credentials_relative_uri(uri),
        None => builder,
    }
    .build()
    .unwrap()
}

#[tokio::test]
async fn fc_and_iot_share_the_transport() {
    let mut transport = MockTaskTransport::new();
    transport
        .expect_post_task()
        .times(2)
        .returning(|function_id, _, _, _| Ok(InvocationId::new(function_id)));
    transport.expect_get_task_result().never();

    let sdk = EdgeSdk::new(config(None), transport);

    let output = sdk
        .invoke_function(&InvocationRequest::new("other-function").asynchronous())
        .await
        .unwrap();
    assert_matches!(output, InvokeOutput::Accepted(id) => {
        assert_eq!(id.as_str(), "other-function");
    });

    let id = sdk
        .iot()
        .publish(PublishRequest::new("/hello/world", "hi"))
        .await
        .unwrap();
    assert_eq!(id.as_str(), "router-function");
}

#[tokio::test]
async fn credentials_are_not_configured_by_default() {
    let sdk = EdgeSdk::new(config(None), MockTaskTransport::new());
    assert_matches!(
        sdk.resolve_credential().await,
        Err(CredentialErr::NoProviders)
    );
}

#[test]
fn with_credentials_requires_the_relative_uri() {
    let sdk = EdgeSdk::new(config(None), MockTaskTransport::new());
    assert_matches!(
        sdk.with_credentials(MockHttpTransport::new()),
        Err(ConfigErr::Missing(_))
    );
}

#[tokio::test]
async fn resolve_credential_uses_the_default_provider() {
    let mut http = MockHttpTransport::new();
    http.expect_request().times(1).returning(|request| {
        assert_eq!(request.path, "/test/credentialprovider");
        let mut headers = HeaderMap::new();
        headers.insert(
            credential::CREDENTIAL_HEADER,
            r#"{"accessKeyId":"A","accessKeySecret":"B","securityToken":"C"}"#
                .parse()
                .unwrap(),
        );
        Ok(HttpResponse {
            status_code: StatusCode::OK,
            headers,
            body: String::new(),
        })
    });

    let sdk = EdgeSdk::new(
        config(Some("/test/credentialprovider")),
        MockTaskTransport::new(),
    )
    .with_credentials(http)
    .unwrap();

    let credential = sdk.resolve_credential().await.unwrap();
    assert_eq!(credential.access_key_id, "A");
    assert_eq!(credential.access_key_secret, "B");
    assert_eq!(credential.security_token, "C");
}
