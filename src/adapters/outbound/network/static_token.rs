use crate::ports::outbound::TokenProvider;
use crate::sbom_upload::domain::Credential;
use crate::shared::Result;
use async_trait::async_trait;

/// StaticTokenProvider adapter serving a pre-issued bearer token
///
/// Used when no token endpoint is configured. The token never expires from
/// the client's point of view; if the server rejects it, the uploads fail.
pub struct StaticTokenProvider {
    credential: Credential,
}

impl StaticTokenProvider {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            credential: Credential::non_expiring(token),
        }
    }
}

#[async_trait]
impl TokenProvider for StaticTokenProvider {
    async fn get_token(&self) -> Result<Credential> {
        Ok(self.credential.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_static_token_is_returned_unchanged() {
        let provider = StaticTokenProvider::new("pre-issued");
        let credential = provider.get_token().await.unwrap();
        assert_eq!(credential.token(), "pre-issued");
        assert!(credential.expires_at().is_none());
    }

    #[tokio::test]
    async fn test_boxed_provider_delegates() {
        let provider: Box<dyn TokenProvider> = Box::new(StaticTokenProvider::new("boxed"));
        let credential = provider.get_token().await.unwrap();
        assert_eq!(credential.token(), "boxed");
    }
}
