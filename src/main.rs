mod adapters;
mod application;
mod cli;
mod config;
mod ports;
mod sbom_upload;
mod shared;

use adapters::outbound::console::StderrProgressReporter;
use adapters::outbound::filesystem::FileSystemDiscovery;
use adapters::outbound::network::TpaClient;
use application::dto::UploadRequest;
use application::factories::{
    CredentialSource, PresenterFactory, PresenterType, TokenProviderFactory,
};
use application::use_cases::UploadSbomsUseCase;
use cli::Args;
use config::ConfigFile;
use sbom_upload::domain::UploadInput;
use shared::error::{ExitCode, UploadError};
use shared::Result;
use std::path::PathBuf;
use std::process;
use std::time::Duration;

const DEFAULT_WORKERS: usize = 1;
const DEFAULT_ATTEMPTS: usize = 1;
const DEFAULT_TIMEOUT_SECS: u64 = 300;

#[tokio::main]
async fn main() {
    // clap exits with status 2 on invalid arguments
    let args = Args::parse_args();

    match run(args).await {
        Ok(exit_code) => process::exit(exit_code.as_i32()),
        Err(e) => {
            eprintln!("\n❌ An error occurred:\n");
            eprintln!("{}", e);

            // Display error chain
            for cause in e.chain().skip(1) {
                eprintln!("\nCaused by: {}", cause);
            }

            eprintln!();
            process::exit(ExitCode::ApplicationError.as_i32());
        }
    }
}

async fn run(args: Args) -> Result<ExitCode> {
    let config = load_config(&args)?;
    let settings = RunSettings::resolve(&args, config)?;

    validate_input_path(&settings.input)?;

    // Create adapters (Dependency Injection)
    let credential_source = CredentialSource::resolve(
        settings.token_url.clone(),
        settings.account.clone(),
        args.sso_token.clone(),
    )?;
    let token_provider = TokenProviderFactory::create(credential_source)?;
    let uploader = TpaClient::new(
        settings.base_url.clone(),
        token_provider,
        Duration::from_secs(settings.timeout_secs),
    )?;
    let discovery = FileSystemDiscovery::new();
    let progress_reporter = StderrProgressReporter::new();
    let presenter = PresenterFactory::create(PresenterType::from_output_path(args.output));

    let use_case = UploadSbomsUseCase::new(discovery, uploader, progress_reporter, presenter);

    let request = UploadRequest::builder()
        .input(settings.input)
        .workers(settings.workers)
        .max_attempts(settings.attempts)
        .emit_report(settings.report)
        .build()?;

    let response = use_case.execute(request).await?;

    Ok(ExitCode::from_upload_success(response.success))
}

/// Explicit `--config` must exist; otherwise look in the working directory.
fn load_config(args: &Args) -> Result<ConfigFile> {
    let config = match &args.config {
        Some(path) => Some(config::load_config_from_path(path)?),
        None => config::discover_config(&std::env::current_dir()?)?,
    };
    Ok(config.unwrap_or_default())
}

/// Effective settings after merging CLI/env over the config file over defaults
#[derive(Debug)]
struct RunSettings {
    input: UploadInput,
    base_url: String,
    workers: usize,
    attempts: usize,
    timeout_secs: u64,
    report: bool,
    token_url: Option<String>,
    account: Option<String>,
}

impl RunSettings {
    fn resolve(args: &Args, config: ConfigFile) -> Result<Self> {
        let input = args.input().ok_or_else(|| UploadError::Configuration {
            message: "one of --file or --from-dir is required".to_string(),
        })?;

        let base_url = args
            .tpa_base_url
            .clone()
            .or(config.tpa_base_url)
            .filter(|url| !url.trim().is_empty())
            .ok_or_else(|| UploadError::Configuration {
                message: "TPA base URL is not set (use --tpa-base-url or TPA_BASE_URL)"
                    .to_string(),
            })?;

        Ok(Self {
            input,
            base_url,
            workers: args.workers.or(config.workers).unwrap_or(DEFAULT_WORKERS),
            attempts: args.retries.or(config.retries).unwrap_or(DEFAULT_ATTEMPTS),
            timeout_secs: args
                .timeout
                .or(config.timeout_secs)
                .unwrap_or(DEFAULT_TIMEOUT_SECS),
            report: args.report || args.output.is_some() || config.report.unwrap_or(false),
            token_url: args.sso_token_url.clone().or(config.token_url),
            account: args.sso_account.clone().or(config.account),
        })
    }
}

fn validate_input_path(input: &UploadInput) -> Result<()> {
    let path = input.path();
    let invalid = |reason: &str| UploadError::Discovery {
        path: PathBuf::from(path),
        reason: reason.to_string(),
    };

    if !path.exists() {
        return Err(invalid("Path does not exist").into());
    }

    match input {
        UploadInput::File(_) if !path.is_file() => Err(invalid("Not a regular file").into()),
        UploadInput::Directory(_) if !path.is_dir() => Err(invalid("Not a directory").into()),
        _ => Ok(()),
    }
}
