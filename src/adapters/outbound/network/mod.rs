/// Network adapters for the token endpoint and the TPA API
mod oidc_client;
mod static_token;
mod tpa_client;

pub use oidc_client::OidcClientCredentials;
pub use static_token::StaticTokenProvider;
pub use tpa_client::TpaClient;
