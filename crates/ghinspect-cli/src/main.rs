use clap::Parser;
use ghinspect_cli::InspectConfig;
use ghinspect_cli::commands;
use ghinspect_cli::config::{DEFAULT_TIMEOUT_SECS, parse_api_url, parse_timeout};
use ghinspect_core::credential::TOKEN_ENV_VAR;
use ghinspect_core::endpoint::DEFAULT_API_URL;
use ghinspect_core::{Credential, ExitStatus};
use std::process::ExitCode;
use std::time::Duration;
use url::Url;

#[derive(Parser)]
#[command(name = "github-token-inspector")]
#[command(author, version)]
#[command(
    about = "Check a GitHub token and report its scopes, rate limit and owner",
    long_about = "Sends one authenticated GET /user request and prints a single JSON report. \
                  Exit codes: 0 valid, 1 network or other failure, 2 missing token, \
                  3 token rejected (HTTP 401/403)."
)]
struct Cli {
    /// GitHub API token (or set GITHUB_TOKEN)
    #[arg(long)]
    token: Option<String>,

    /// Request timeout in seconds
    #[arg(long, value_name = "SECONDS", default_value = DEFAULT_TIMEOUT_SECS, value_parser = parse_timeout)]
    timeout: Duration,

    /// API base URL, e.g. https://HOST/api/v3 for GitHub Enterprise
    #[arg(
        long = "api-url",
        value_name = "URL",
        env = "GITHUB_API_URL",
        default_value = DEFAULT_API_URL,
        value_parser = parse_api_url
    )]
    identity_url: Url,

    /// Enable verbose logging on stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize logging
    init_logging(cli.verbose);

    let credential = Credential::resolve(cli.token, std::env::var(TOKEN_ENV_VAR).ok());
    let config = InspectConfig::new(credential, cli.timeout, cli.identity_url);

    match commands::inspect::execute(&config) {
        Ok(status) => status.into(),
        Err(e) => {
            tracing::error!("{:#}", e);
            ExitStatus::Failure.into()
        }
    }
}

fn init_logging(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    // stdout carries the report, so logs go to stderr.
    let filter = if verbose {
        EnvFilter::new("github_token_inspector=debug,ghinspect_cli=debug,ghinspect_core=debug")
    } else {
        EnvFilter::new("github_token_inspector=warn,ghinspect_cli=warn,ghinspect_core=warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();
}
