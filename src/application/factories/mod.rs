/// Factories selecting concrete adapters from run configuration
mod presenter_factory;
mod token_provider_factory;

pub use presenter_factory::{PresenterFactory, PresenterType};
pub use token_provider_factory::{CredentialSource, TokenProviderFactory};
