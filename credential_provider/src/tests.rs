use super::*;
use cool_asserts::assert_matches;
use reqwest::{StatusCode, header::HeaderMap};

const RELATIVE_URI: &str = "/test/credentialprovider";

fn config(relative_uri: Option<&str>) -> EdgeConfig {
    let builder = EdgeConfig::builder()
        .auth_token("auth-token")
        .my_function_id("me")
        .router_function_id("router")
        .thing_function_id("thing");
    match relative_uri {
        Some(uri) => builder.credentials_relative_uri(uri),
        None => builder,
    }
    .build()
    .unwrap()
}

fn response(status_code: StatusCode, credential: Option<&str>, body: &str) -> HttpResponse {
    let mut headers = HeaderMap::new();
    if let Some(credential) = credential {
        headers.insert(CREDENTIAL_HEADER, credential.parse().unwrap());
    }
    HttpResponse {
        status_code,
        headers,
        body: body.to_string(),
    }
}

fn chain_answering(res: anyhow::Result<HttpResponse>) -> CredentialProviderChain {
    let mut http = MockHttpTransport::new();
    let mut res = Some(res);
    http.expect_request().times(1).returning(move |request| {
        assert_eq!(request.method, reqwest::Method::GET);
        assert_eq!(request.path, RELATIVE_URI);
        assert_eq!(request.headers["Authorization"], "auth-token");
        res.take().unwrap()
    });
    CredentialProviderChain::from_config(&config(Some(RELATIVE_URI)), http).unwrap()
}

#[test]
fn construction_fails_without_relative_uri() {
    let mut http = MockHttpTransport::new();
    http.expect_request().never();

    assert_matches!(
        CredentialProviderChain::from_config(&config(None), http),
        Err(edge_config::ConfigErr::Missing("DEFFAULT_CREDENTIALS_RELATIVE_URI"))
    );
}

#[tokio::test]
async fn it_should_fail_when_the_connection_breaks() {
    let chain = chain_answering(Err(anyhow::anyhow!("Connection has broken")));

    let err = chain.resolve().await.unwrap_err();
    assert_matches!(err, CredentialErr::Request(_));
    assert_eq!(
        err.to_string(),
        "Failed to get credential: Connection has broken."
    );
}

#[tokio::test]
async fn it_should_reject_with_the_body_on_non_200() {
    let chain = chain_answering(Ok(response(StatusCode::NOT_FOUND, None, "Not found")));

    let err = chain.resolve().await.unwrap_err();
    assert_eq!(err.to_string(), "Not found");
    assert_matches!(err, CredentialErr::Rejected { status_code: 404, .. });
}

#[tokio::test]
async fn it_should_reject_unknown_role_arn() {
    let chain = chain_answering(Ok(response(
        StatusCode::BAD_REQUEST,
        None,
        "The requested role arn does not exist.",
    )));

    assert_matches!(chain.resolve().await, Err(CredentialErr::Rejected { body, .. }) => {
        assert_eq!(body, "The requested role arn does not exist.");
    });
}

#[tokio::test]
async fn it_should_fail_when_the_header_is_not_json() {
    let chain = chain_answering(Ok(response(StatusCode::OK, Some("credential"), "Success")));

    let err = chain.resolve().await.unwrap_err();
    assert_eq!(err.to_string(), "Can not parse credential from credential.");
    assert_matches!(err, CredentialErr::Parse { raw, .. } => {
        assert_eq!(raw, "credential");
    });
}

#[tokio::test]
async fn it_should_fail_when_the_header_is_missing() {
    let chain = chain_answering(Ok(response(StatusCode::OK, None, "Success")));

    assert_matches!(chain.resolve().await, Err(CredentialErr::Parse { raw, .. }) => {
        assert!(raw.is_empty());
    });
}

#[tokio::test]
async fn it_should_resolve_a_valid_credential() {
    let chain = chain_answering(Ok(response(
        StatusCode::OK,
        Some(r#"{"accessKeyId":"A","accessKeySecret":"B","securityToken":"C"}"#),
        "",
    )));

    let credential = chain.resolve().await.unwrap();
    assert_eq!(
        credential,
        Credential {
            access_key_id: "A".to_string(),
            access_key_secret: "B".to_string(),
            security_token: "C".to_string(),
        }
    );
}

#[tokio::test]
async fn sts_token_is_accepted_for_security_token() {
    let chain = chain_answering(Ok(response(
        StatusCode::OK,
        Some(r#"{"accessKeyId":"A","accessKeySecret":"B","stsToken":"C"}"#),
        "",
    )));

    assert_eq!(chain.resolve().await.unwrap().security_token, "C");
}

#[tokio::test]
async fn every_resolve_issues_a_new_request() {
    let mut http = MockHttpTransport::new();
    http.expect_request().times(2).returning(|_| {
        Ok(response(
            StatusCode::OK,
            Some(r#"{"accessKeyId":"A","accessKeySecret":"B","securityToken":"C"}"#),
            "",
        ))
    });
    let chain = CredentialProviderChain::from_config(&config(Some(RELATIVE_URI)), http).unwrap();

    chain.resolve().await.unwrap();
    chain.resolve().await.unwrap();
}

struct FixedProvider(&'static str);

#[async_trait::async_trait]
impl CredentialProvider for FixedProvider {
    async fn get(&self) -> Result<Credential, CredentialErr> {
        Ok(Credential {
            access_key_id: self.0.to_string(),
            access_key_secret: String::new(),
            security_token: String::new(),
        })
    }
}

#[tokio::test]
async fn the_first_provider_wins() {
    let chain = CredentialProviderChain::with_providers(vec![
        Arc::new(FixedProvider("first")),
        Arc::new(FixedProvider("second")),
    ]);

    assert_eq!(chain.resolve().await.unwrap().access_key_id, "first");
}

#[tokio::test]
async fn an_empty_chain_fails() {
    let chain = CredentialProviderChain::with_providers(vec![]);
    assert_matches!(chain.resolve().await, Err(CredentialErr::NoProviders));
}

#[test]
fn debug_never_prints_secrets() {
    let credential = Credential {
        access_key_id: "A".to_string(),
        access_key_secret: "secret-value".to_string(),
        security_token: "token-value".to_string(),
    };
    let printed = format!("{credential:?}");
    assert!(!printed.contains("secret-value"));
    assert!(!printed.contains("token-value"));
}

#[test]
fn credential_deserializes_from_the_header_json() {
    let credential: Credential = serde_json::from_str(
        r#"{"accessKeyId":"A","accessKeySecret":"B","securityToken":"C"}"#,
    )
    .unwrap();
    assert_eq!(credential.access_key_id, "A");
    assert!(serde_json::from_str::<Credential>(r#"{"accessKeyId":"A"}"#).is_err());
}

#[test]
fn reqwest_transport_joins_relative_paths() {
    let transport = ReqwestTransport::new("http://127.0.0.1:9000").unwrap();
    assert_eq!(
        transport.url_for(RELATIVE_URI).unwrap().as_str(),
        "http://127.0.0.1:9000/test/credentialprovider"
    );
    assert!(ReqwestTransport::new("not a url").is_err());
}
