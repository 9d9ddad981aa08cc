use super::{AccessToken, TokenProvider};
use crate::config::ApiConfig;
use crate::error::AuthError;
use crate::twitter_parser::parse_access_token;
use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use std::fmt;
use std::time::Duration;
use tracing::{debug, info};

pub const API_KEY_VAR: &str = "TWITTER_API_KEY";
pub const API_SECRET_VAR: &str = "TWITTER_API_SECRET";
pub const BEARER_TOKEN_VAR: &str = "TWITTER_BEARER_TOKEN";

/// Consumer key and secret. Held in memory only for the token exchange.
#[derive(Clone, Default)]
pub struct Credentials {
    key: String,
    secret: String,
}

impl Credentials {
    pub fn new(key: impl Into<String>, secret: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            secret: secret.into(),
        }
    }

    /// Read the pair from the process environment. Absent variables become blank
    /// credentials, which fail at `obtain_token` before any request is sent.
    pub fn from_env() -> Self {
        Self {
            key: std::env::var(API_KEY_VAR).unwrap_or_default(),
            secret: std::env::var(API_SECRET_VAR).unwrap_or_default(),
        }
    }

    pub fn is_blank(&self) -> bool {
        self.key.trim().is_empty() || self.secret.trim().is_empty()
    }

    /// RFC 6749 client authentication value: base64("urlencode(key):urlencode(secret)").
    fn basic_authorization(&self) -> String {
        let pair = format!(
            "{}:{}",
            urlencoding::encode(&self.key),
            urlencoding::encode(&self.secret)
        );
        format!("Basic {}", STANDARD.encode(pair.as_bytes()))
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("key", &"<redacted>")
            .field("secret", &"<redacted>")
            .finish()
    }
}

/// Client-credentials exchange against the OAuth2 token endpoint.
pub struct TwitterAuthenticator {
    credentials: Credentials,
    token_url: String,
    timeout: Duration,
    client: reqwest::Client,
}

impl TwitterAuthenticator {
    pub fn new(credentials: Credentials, token_url: String, timeout: Duration) -> Self {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent("tweetpulse/0.1")
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());

        Self {
            credentials,
            token_url,
            timeout,
            client,
        }
    }
}

#[async_trait]
impl TokenProvider for TwitterAuthenticator {
    async fn obtain_token(&self) -> Result<AccessToken, AuthError> {
        if self.credentials.is_blank() {
            return Err(AuthError::MissingCredentials);
        }

        debug!(url = %self.token_url, "requesting bearer token");

        let response = self
            .client
            .post(&self.token_url)
            .timeout(self.timeout)
            .header("Authorization", self.credentials.basic_authorization())
            .form(&[("grant_type", "client_credentials")])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(AuthError::Rejected(status));
        }

        let body = response.text().await?;
        let token = parse_access_token(&body).ok_or(AuthError::MissingToken)?;

        info!("obtained bearer token");
        Ok(AccessToken::new(token))
    }
}

/// A pre-issued bearer token; skips the exchange entirely.
pub struct StaticToken(AccessToken);

impl StaticToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(AccessToken::new(token))
    }

    pub fn from_env() -> Option<Self> {
        std::env::var(BEARER_TOKEN_VAR)
            .ok()
            .filter(|token| !token.trim().is_empty())
            .map(|token| Self::new(token.trim()))
    }
}

#[async_trait]
impl TokenProvider for StaticToken {
    async fn obtain_token(&self) -> Result<AccessToken, AuthError> {
        Ok(self.0.clone())
    }
}

/// Prefer a configured bearer token, otherwise exchange the key/secret pair.
pub fn provider_from_env(api: &ApiConfig) -> Box<dyn TokenProvider> {
    match StaticToken::from_env() {
        Some(token) => {
            debug!("using bearer token from {}", BEARER_TOKEN_VAR);
            Box::new(token)
        }
        None => Box::new(TwitterAuthenticator::new(
            Credentials::from_env(),
            api.token_url.clone(),
            Duration::from_secs(api.timeout_secs),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feeds::test_server::OneShot;

    #[test]
    fn test_basic_authorization_encoding() {
        let credentials = Credentials::new("xvz1evFS4wEEPTGEFPHBog", "L8qq9PZyRg6ieKGEKhZolGC0vJWLw8iEJ88DRdyOg");
        assert_eq!(
            credentials.basic_authorization(),
            "Basic eHZ6MWV2RlM0d0VFUFRHRUZQSEJvZzpMOHFxOVBaeVJnNmllS0dFS2hab2xHQzB2SldMdzhpRUo4OERSZHlPZw=="
        );
    }

    #[test]
    fn test_basic_authorization_percent_encodes_reserved_characters() {
        let credentials = Credentials::new("a:b", "c d");
        let expected = format!("Basic {}", STANDARD.encode("a%3Ab:c%20d"));
        assert_eq!(credentials.basic_authorization(), expected);
    }

    #[test]
    fn test_blank_credentials() {
        assert!(Credentials::default().is_blank());
        assert!(Credentials::new("key", "  ").is_blank());
        assert!(!Credentials::new("key", "secret").is_blank());
    }

    #[test]
    fn test_credentials_debug_is_redacted() {
        let debug = format!("{:?}", Credentials::new("my-key", "my-secret"));
        assert!(!debug.contains("my-key"));
        assert!(!debug.contains("my-secret"));
    }

    #[tokio::test]
    async fn test_missing_credentials_fail_before_network() {
        // Unroutable URL: reaching the network would surface a transport error instead.
        let authenticator = TwitterAuthenticator::new(
            Credentials::default(),
            "http://127.0.0.1:9/oauth2/token".to_string(),
            Duration::from_millis(50),
        );
        let err = authenticator.obtain_token().await.unwrap_err();
        assert!(matches!(err, AuthError::MissingCredentials));
    }

    fn authenticator(base_url: &str, timeout: Duration) -> TwitterAuthenticator {
        TwitterAuthenticator::new(
            Credentials::new("consumer-key", "consumer-secret"),
            format!("{}/oauth2/token", base_url),
            timeout,
        )
    }

    #[tokio::test]
    async fn test_obtain_token_posts_client_credentials() {
        let server = OneShot::respond(200, r#"{"token_type":"bearer","access_token":"AAAA%2FAAA"}"#).await;
        let authenticator = authenticator(&server.url, Duration::from_secs(5));

        let token = authenticator.obtain_token().await.unwrap();
        assert_eq!(token.as_str(), "AAAA%2FAAA");

        let request = server.request().await.to_lowercase();
        assert!(request.starts_with("post /oauth2/token "));
        assert!(request.contains("content-type: application/x-www-form-urlencoded"));
        let expected_auth = format!(
            "authorization: {}",
            Credentials::new("consumer-key", "consumer-secret").basic_authorization()
        );
        assert!(request.contains(&expected_auth.to_lowercase()));
        assert!(request.ends_with("grant_type=client_credentials"));
    }

    #[tokio::test]
    async fn test_non_success_status_is_rejected() {
        let server = OneShot::respond(
            401,
            r#"{"errors":[{"code":99,"message":"Unable to verify your credentials"}]}"#,
        )
        .await;
        let err = authenticator(&server.url, Duration::from_secs(5))
            .obtain_token()
            .await
            .unwrap_err();
        assert!(matches!(err, AuthError::Rejected(status) if status == reqwest::StatusCode::UNAUTHORIZED));
    }

    #[tokio::test]
    async fn test_success_without_token_is_missing_token() {
        let server = OneShot::respond(200, r#"{"token_type":"bearer"}"#).await;
        let err = authenticator(&server.url, Duration::from_secs(5))
            .obtain_token()
            .await
            .unwrap_err();
        assert!(matches!(err, AuthError::MissingToken));
    }

    #[tokio::test]
    async fn test_unanswered_request_times_out() {
        let server = OneShot::silent().await;
        let err = authenticator(&server.url, Duration::from_millis(200))
            .obtain_token()
            .await
            .unwrap_err();
        assert!(matches!(err, AuthError::Transport(ref e) if e.is_timeout()));
    }

    #[tokio::test]
    async fn test_static_token() {
        let provider = StaticToken::new("bearer-abc");
        let token = provider.obtain_token().await.unwrap();
        assert_eq!(token.as_str(), "bearer-abc");
    }
}
