pub mod auth;
#[cfg(test)]
pub(crate) mod test_server;
pub mod twitter;

use crate::error::{AuthError, FetchError};
use crate::twitter_message::RawPost;
use async_trait::async_trait;
use std::fmt;

/// Short-lived bearer token. Never printed.
#[derive(Clone, PartialEq, Eq)]
pub struct AccessToken(String);

impl AccessToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AccessToken(<redacted>)")
    }
}

#[async_trait]
pub trait TokenProvider: Send + Sync {
    async fn obtain_token(&self) -> Result<AccessToken, AuthError>;
}

#[async_trait]
pub trait PostFetcher: Send + Sync {
    /// One bounded search; no pagination beyond the single call.
    async fn search(
        &self,
        token: &AccessToken,
        query: &str,
        max_results: u32,
    ) -> Result<Vec<RawPost>, FetchError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_access_token_debug_is_redacted() {
        let token = AccessToken::new("secret-bearer");
        assert_eq!(token.as_str(), "secret-bearer");
        assert!(!format!("{:?}", token).contains("secret-bearer"));
    }
}
