// Wire format: один JSON-документ в каждую сторону

use crate::protocol::messages::{Request, Response};
use crate::utils::error::{Result, SidecarError};
use std::io::{Read, Write};
use tracing::{debug, trace};

/// Read the first JSON value from `reader` as a [`Request`].
///
/// Bytes after the first value are never looked at. Empty or
/// whitespace-only input is reported as `EOF`.
pub fn read_request<R: Read>(reader: R) -> Result<Request> {
    let mut values = serde_json::Deserializer::from_reader(reader).into_iter::<Request>();

    match values.next() {
        Some(Ok(request)) => {
            trace!(
                target: "sidecar::wire",
                action = %request.action,
                data_len = request.data.len(),
                "Request decoded"
            );
            Ok(request)
        }
        Some(Err(e)) => {
            debug!(target: "sidecar::wire", error = %e, "Request rejected");
            Err(e.into())
        }
        None => {
            debug!(target: "sidecar::wire", "Empty input");
            Err(SidecarError::Parse("EOF".to_string()))
        }
    }
}

/// Write `response` as one compact JSON line and flush.
///
/// The line is fully serialized before anything touches `writer`.
pub fn write_response<W: Write>(mut writer: W, response: &Response) -> Result<()> {
    let mut line = serde_json::to_vec(response)
        .map_err(|e| SidecarError::Io(format!("response serialization failed: {}", e)))?;
    line.push(b'\n');

    writer.write_all(&line)?;
    writer.flush()?;

    trace!(target: "sidecar::wire", bytes = line.len(), "Response written");
    Ok(())
}
