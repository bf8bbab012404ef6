use clap::{ArgGroup, Parser};
use crate::sbom_upload::domain::UploadInput;
use std::path::PathBuf;

/// Parses a strictly positive count such as `--workers`
fn parse_positive(s: &str) -> Result<usize, String> {
    match s.parse::<usize>() {
        Ok(0) => Err("value must be at least 1".to_string()),
        Ok(n) => Ok(n),
        Err(_) => Err(format!("'{}' is not a positive integer", s)),
    }
}

fn parse_positive_secs(s: &str) -> Result<u64, String> {
    parse_positive(s).map(|n| n as u64)
}

/// Upload SBOM files to a TPA instance
#[derive(Parser, Debug)]
#[command(name = "sbom-uploader")]
#[command(version)]
#[command(about = "Upload SBOM files to a TPA instance", long_about = None)]
#[command(group(ArgGroup::new("input").required(true).args(["file", "from_dir"])))]
pub struct Args {
    /// Upload a single SBOM file
    #[arg(long, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Upload every file below this directory, recursively
    #[arg(long, value_name = "DIR")]
    pub from_dir: Option<PathBuf>,

    /// Base URL of the TPA instance
    #[arg(long, env = "TPA_BASE_URL", value_name = "URL")]
    pub tpa_base_url: Option<String>,

    /// Number of uploads to run concurrently [default: 1]
    #[arg(short, long, value_parser = parse_positive)]
    pub workers: Option<usize>,

    /// Print a JSON report of uploaded and failed files to stdout
    #[arg(long)]
    pub report: bool,

    /// Write the JSON report to this file instead of stdout (implies --report)
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Attempts per file, including the first one [default: 1]
    #[arg(long, value_parser = parse_positive)]
    pub retries: Option<usize>,

    /// Upload request timeout in seconds [default: 300]
    #[arg(long, value_name = "SECS", value_parser = parse_positive_secs)]
    pub timeout: Option<u64>,

    /// Path to a config file (defaults to ./sbom-uploader.config.yml if present)
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// OAuth2 token endpoint
    #[arg(long, env = "TPA_SSO_TOKEN_URL", value_name = "URL")]
    pub sso_token_url: Option<String>,

    /// OAuth2 client id
    #[arg(long, env = "TPA_SSO_ACCOUNT", value_name = "ACCOUNT")]
    pub sso_account: Option<String>,

    /// Client secret, or a static bearer token when no token URL is set
    #[arg(long, env = "TPA_SSO_TOKEN", hide = true, hide_env_values = true)]
    pub sso_token: Option<String>,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// The input selected by the required `--file` / `--from-dir` group
    pub fn input(&self) -> Option<UploadInput> {
        match (&self.file, &self.from_dir) {
            (Some(file), _) => Some(UploadInput::File(file.clone())),
            (None, Some(dir)) => Some(UploadInput::Directory(dir.clone())),
            (None, None) => None,
        }
    }
}
