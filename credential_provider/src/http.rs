use anyhow::Context;
use reqwest::{Method, StatusCode, Url, header::HeaderMap};

#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: Method,
    /// path relative to the host endpoint, e.g. `/test/credentialprovider`
    pub path: String,
    pub headers: HeaderMap,
}

#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status_code: StatusCode,
    pub headers: HeaderMap,
    pub body: String,
}

/// A single request/response exchange with the edge host
#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
#[async_trait::async_trait]
pub trait HttpTransport: Send + Sync {
    async fn request(&self, request: HttpRequest) -> anyhow::Result<HttpResponse>;
}

/// [HttpTransport] over plain HTTP to the host's local endpoint
#[derive(Clone, Debug)]
pub struct ReqwestTransport {
    base_url: Url,
    client: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new(base_url: &str) -> anyhow::Result<Self> {
        let base_url = Url::parse(base_url).context("invalid host endpoint url")?;
        Ok(Self {
            base_url,
            client: reqwest::Client::new(),
        })
    }

    pub fn with_client(mut self, client: reqwest::Client) -> Self {
        self.client = client;
        self
    }

    pub(crate) fn url_for(&self, path: &str) -> anyhow::Result<Url> {
        self.base_url
            .join(path)
            .with_context(|| format!("unable to build url for {path}"))
    }
}

#[async_trait::async_trait]
impl HttpTransport for ReqwestTransport {
    #[tracing::instrument(skip(self, request), fields(method = %request.method, path = %request.path))]
    async fn request(&self, request: HttpRequest) -> anyhow::Result<HttpResponse> {
        let url = self.url_for(&request.path)?;
        let response = self
            .client
            .request(request.method, url)
            .headers(request.headers)
            .send()
            .await
            .context("unable to reach host endpoint")?;

        let status_code = response.status();
        let headers = response.headers().clone();
        let body = response
            .text()
            .await
            .context("unable to read response body")?;

        Ok(HttpResponse {
            status_code,
            headers,
            body,
        })
    }
}
