// Публичный API sidecar
// One request in, one response out

pub mod codec;

use crate::config::Config;
use crate::protocol::messages::Response;
use crate::protocol::wire;
use crate::utils::error::Result;
use std::io::{Read, Write};
use tracing::{debug, info, warn};

/// Exit code whenever a response was delivered, unless strict exit applies
pub const EXIT_OK: i32 = 0;
/// Exit code for a failed request when strict exit is on
pub const EXIT_REQUEST_FAILED: i32 = 1;
/// Exit code when the response could not be written at all
pub const EXIT_OUTPUT_FAILED: i32 = 2;

pub struct SidecarAPI {
    config: Config,
}

impl SidecarAPI {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Read one request from `reader` and build the response for it.
    ///
    /// Never fails: every error becomes a `success: false` response.
    pub fn handle<R: Read>(&self, reader: R) -> Response {
        let outcome = wire::read_request(reader).and_then(|request| {
            debug!(
                target: "sidecar::api",
                action = %request.action,
                data_len = request.data.len(),
                "Dispatching request"
            );
            codec::dispatch(&request)
        });

        match &outcome {
            Ok(result) => {
                info!(target: "sidecar::api", result_len = result.len(), "Request succeeded")
            }
            Err(e) => warn!(target: "sidecar::api", error = %e, "Request failed"),
        }

        Response::from(outcome)
    }

    /// [`SidecarAPI::handle`] followed by writing the response to `writer`.
    ///
    /// Only an output failure is returned as `Err`.
    pub fn run<R: Read, W: Write>(&self, reader: R, writer: W) -> Result<Response> {
        let response = self.handle(reader);
        wire::write_response(writer, &response)?;
        Ok(response)
    }

    /// Process exit code for a response that was delivered.
    pub fn exit_code(&self, response: &Response) -> i32 {
        if !response.success && self.config.strict_exit {
            EXIT_REQUEST_FAILED
        } else {
            EXIT_OK
        }
    }
}

impl Default for SidecarAPI {
    fn default() -> Self {
        Self::new(Config::global().clone())
    }
}
