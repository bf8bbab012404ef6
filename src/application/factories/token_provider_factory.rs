use crate::adapters::outbound::network::{OidcClientCredentials, StaticTokenProvider};
use crate::ports::outbound::TokenProvider;
use crate::shared::error::UploadError;
use crate::shared::Result;

/// Resolved credential settings for a run
#[derive(Clone, PartialEq, Eq)]
pub enum CredentialSource {
    /// OAuth2 client-credentials exchange against `token_url`
    ClientCredentials {
        token_url: String,
        account: String,
        secret: String,
    },
    /// Pre-issued bearer token used as is
    Static { token: String },
}

impl CredentialSource {
    /// Picks the credential source from the three SSO settings
    ///
    /// With a token URL, `token` is the client secret and an account is
    /// required. Without one, `token` is sent as a static bearer token.
    pub fn resolve(
        token_url: Option<String>,
        account: Option<String>,
        token: Option<String>,
    ) -> Result<Self> {
        let token = token
            .filter(|t| !t.trim().is_empty())
            .ok_or_else(|| UploadError::Configuration {
                message: "TPA_SSO_TOKEN is not set".to_string(),
            })?;

        match token_url.filter(|u| !u.trim().is_empty()) {
            Some(token_url) => {
                let account = account.filter(|a| !a.trim().is_empty()).ok_or_else(|| {
                    UploadError::Configuration {
                        message: "TPA_SSO_ACCOUNT is required when TPA_SSO_TOKEN_URL is set"
                            .to_string(),
                    }
                })?;
                Ok(CredentialSource::ClientCredentials {
                    token_url,
                    account,
                    secret: token,
                })
            }
            None => Ok(CredentialSource::Static { token }),
        }
    }
}

// Secrets stay out of debug output.
impl std::fmt::Debug for CredentialSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CredentialSource::ClientCredentials {
                token_url, account, ..
            } => f
                .debug_struct("ClientCredentials")
                .field("token_url", token_url)
                .field("account", account)
                .finish_non_exhaustive(),
            CredentialSource::Static { .. } => f.debug_struct("Static").finish_non_exhaustive(),
        }
    }
}

/// Factory for creating the token provider of a run
pub struct TokenProviderFactory;

impl TokenProviderFactory {
    pub fn create(source: CredentialSource) -> Result<Box<dyn TokenProvider>> {
        match source {
            CredentialSource::ClientCredentials {
                token_url,
                account,
                secret,
            } => Ok(Box::new(OidcClientCredentials::new(
                token_url, account, secret,
            )?)),
            CredentialSource::Static { token } => Ok(Box::new(StaticTokenProvider::new(token))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_client_credentials() {
        let source = CredentialSource::resolve(
            Some("https://sso.example.com/token".to_string()),
            Some("account".to_string()),
            Some("secret".to_string()),
        )
        .unwrap();

        assert_eq!(
            source,
            CredentialSource::ClientCredentials {
                token_url: "https://sso.example.com/token".to_string(),
                account: "account".to_string(),
                secret: "secret".to_string(),
            }
        );
    }

    #[test]
    fn test_resolve_static_token_without_url() {
        let source = CredentialSource::resolve(None, None, Some("bearer".to_string())).unwrap();
        assert_eq!(
            source,
            CredentialSource::Static {
                token: "bearer".to_string()
            }
        );
    }

    #[test]
    fn test_resolve_requires_token() {
        let result = CredentialSource::resolve(
            Some("https://sso.example.com/token".to_string()),
            Some("account".to_string()),
            None,
        );
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("TPA_SSO_TOKEN"));
    }

    #[test]
    fn test_resolve_requires_account_with_url() {
        let result = CredentialSource::resolve(
            Some("https://sso.example.com/token".to_string()),
            Some("  ".to_string()),
            Some("secret".to_string()),
        );
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("TPA_SSO_ACCOUNT"));
    }

    #[test]
    fn test_debug_hides_secrets() {
        let source = CredentialSource::ClientCredentials {
            token_url: "https://sso.example.com/token".to_string(),
            account: "account".to_string(),
            secret: "hunter2".to_string(),
        };
        assert!(!format!("{:?}", source).contains("hunter2"));
        let source = CredentialSource::Static {
            token: "hunter3".to_string(),
        };
        assert!(!format!("{:?}", source).contains("hunter3"));
    }

    #[tokio::test]
    async fn test_create_static_provider() {
        let provider = TokenProviderFactory::create(CredentialSource::Static {
            token: "bearer".to_string(),
        })
        .unwrap();
        assert_eq!(provider.get_token().await.unwrap().token(), "bearer");
    }

    #[test]
    fn test_create_client_credentials_provider() {
        let provider = TokenProviderFactory::create(CredentialSource::ClientCredentials {
            token_url: "https://sso.example.com/token".to_string(),
            account: "account".to_string(),
            secret: "secret".to_string(),
        });
        assert!(provider.is_ok());
    }
}
