use crate::InspectConfig;
use crate::client::{GithubClient, TransportError};
use anyhow::Result;
use ghinspect_core::{ExitStatus, ResponseInterpreter, Verdict};
use std::io::{self, Write};

/// Check the configured token and return the verdict without printing it.
///
/// Makes no request when there is no credential.
pub fn run(config: &InspectConfig) -> Result<Verdict> {
    let Some(credential) = config.credential.as_ref() else {
        tracing::debug!("No token provided, skipping request");
        return Ok(ResponseInterpreter::missing_credential());
    };

    let fetched = match GithubClient::new(config.identity_url.clone(), config.timeout) {
        Ok(client) => {
            let runtime = tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()?;
            runtime.block_on(client.fetch_identity(credential))
        }
        Err(e) => Err(e),
    };

    let verdict = match fetched {
        Ok(outcome) => ResponseInterpreter::interpret(&outcome),
        Err(TransportError::Timeout) => ResponseInterpreter::timed_out(),
        Err(TransportError::Network(detail)) => ResponseInterpreter::network_error(detail),
    };

    Ok(verdict)
}

/// Run the inspection and print the report as one JSON line on stdout.
pub fn execute(config: &InspectConfig) -> Result<ExitStatus> {
    let verdict = run(config)?;
    let line = verdict.report.to_json_line()?;

    let mut stdout = io::stdout().lock();
    stdout.write_all(line.as_bytes())?;
    stdout.write_all(b"\n")?;
    stdout.flush()?;

    Ok(verdict.exit_status())
}
