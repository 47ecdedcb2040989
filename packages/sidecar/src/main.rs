use anyhow::Context;
use base64_sidecar::api::{SidecarAPI, EXIT_OUTPUT_FAILED};
use base64_sidecar::utils::logging;
use base64_sidecar::Config;
use std::io;
use std::process;

fn main() {
    // Setup config & logging from env
    let config = Config::from_env();
    logging::init(config.log_filter.as_deref());
    tracing::debug!(target: "sidecar", strict_exit = config.strict_exit, "Sidecar started");

    if let Err(e) = Config::init_with(config) {
        tracing::debug!(target: "sidecar", error = e, "Keeping existing config");
    }

    let api = SidecarAPI::default();
    let code = match api
        .run(io::stdin().lock(), io::stdout().lock())
        .context("failed to deliver response")
    {
        Ok(response) => api.exit_code(&response),
        Err(e) => {
            tracing::error!(target: "sidecar", error = %format!("{e:#}"), "Giving up");
            EXIT_OUTPUT_FAILED
        }
    };

    process::exit(code);
}
