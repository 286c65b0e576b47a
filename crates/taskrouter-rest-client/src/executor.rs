//! HTTP request executor implementation

use reqwest::header::{HeaderValue, ACCEPT};
use reqwest::{Client as HttpClient, Response};
use taskrouter_api_contract::RestException;
use taskrouter_client_api::{Method, RestRequest, RestResponse};
use tracing::{debug, warn};
use url::Url;

use crate::auth::AuthMethod;
use crate::config::ClientConfig;
use crate::error::{RestClientError, RestClientResult};

/// Executes request descriptors against the TaskRouter REST API
#[derive(Debug, Clone)]
pub struct HttpExecutor {
    http_client: HttpClient,
    base_url: Url,
    account_sid: String,
    auth: AuthMethod,
}

impl HttpExecutor {
    /// Create an executor authenticating with the account SID and auth token
    pub fn new(config: &ClientConfig) -> RestClientResult<Self> {
        Self::with_auth(config, config.auth())
    }

    /// Create an executor with an explicit authentication method
    pub fn with_auth(config: &ClientConfig, auth: AuthMethod) -> RestClientResult<Self> {
        let mut base_url = Url::parse(&config.base_url)?;
        // without a trailing slash `join` would drop the last path segment
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        let mut builder = HttpClient::builder().user_agent(config.user_agent.as_str());
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            http_client: builder.build()?,
            base_url,
            account_sid: config.account_sid.clone(),
            auth,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn account_sid(&self) -> &str {
        &self.account_sid
    }

    /// Resolve, encode and send one request
    pub async fn send(&self, request: &RestRequest) -> RestClientResult<RestResponse> {
        let path = request.resolve_path(&self.account_sid)?;
        let url = self.base_url.join(&path)?;
        let pairs = request.get_or_post_pairs();

        debug!("{} {} ({} parameters)", request.method(), url, pairs.len());

        let builder = match request.method() {
            Method::Get => self.http_client.get(url).query(&pairs),
            Method::Delete => self.http_client.delete(url).query(&pairs),
            Method::Post => self.http_client.post(url).form(&pairs),
        };

        let response = builder
            .headers(self.auth.headers()?)
            .header(ACCEPT, HeaderValue::from_static("application/json"))
            .send()
            .await?;

        self.handle_response(response).await
    }

    async fn handle_response(&self, response: Response) -> RestClientResult<RestResponse> {
        let status = response.status();
        let text = response.text().await?;

        if status.is_success() {
            return Ok(RestResponse::new(status.as_u16(), text));
        }

        let exception = serde_json::from_str::<RestException>(&text).ok();
        match &exception {
            Some(exception) => warn!("Request failed with status {}: {}", status, exception),
            None => warn!("Request failed with status {}: {}", status, text),
        }

        Err(RestClientError::ServerError { status, exception })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_executor_creation() {
        let executor = HttpExecutor::new(&ClientConfig::new("AC123", "token")).unwrap();

        assert_eq!(executor.base_url().as_str(), crate::config::DEFAULT_BASE_URL);
        assert_eq!(executor.account_sid(), "AC123");
    }

    #[test]
    fn test_base_url_gets_trailing_slash() {
        let config = ClientConfig::new("AC123", "token").with_base_url("http://localhost:3001/v1");
        let executor = HttpExecutor::new(&config).unwrap();

        assert_eq!(executor.base_url().as_str(), "http://localhost:3001/v1/");
        assert_eq!(
            executor.base_url().join("Accounts/AC123/Workspaces.json").unwrap().as_str(),
            "http://localhost:3001/v1/Accounts/AC123/Workspaces.json"
        );
    }

    #[test]
    fn test_invalid_base_url() {
        let config = ClientConfig::new("AC123", "token").with_base_url("not a url");
        assert!(matches!(
            HttpExecutor::new(&config),
            Err(RestClientError::Url(_))
        ));
    }
}
