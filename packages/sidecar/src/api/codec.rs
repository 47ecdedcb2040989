// Обработчики действий base64

use crate::protocol::messages::{Action, Request};
use crate::utils::b64;
use crate::utils::error::{Result, SidecarError};
use tracing::debug;

/// Run the action named by `request` against its `data`.
pub fn dispatch(request: &Request) -> Result<String> {
    match request.action() {
        Action::Base64Encode => Ok(encode_text(&request.data)),
        Action::Base64Decode => decode_text(&request.data),
        Action::Unknown(action) => {
            debug!(target: "sidecar::api", action = %action, "Unknown action");
            Err(SidecarError::UnknownAction(action))
        }
    }
}

/// Base64 of the UTF-8 bytes of `text`.
pub fn encode_text(text: &str) -> String {
    b64::encode(text.as_bytes())
}

/// Decode base64 and read the bytes back as text.
///
/// Bytes that are not valid UTF-8 become U+FFFD rather than failing the
/// request.
pub fn decode_text(encoded: &str) -> Result<String> {
    let bytes = b64::decode(encoded)?;
    Ok(match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(e) => {
            debug!(target: "sidecar::api", "Decoded payload is not valid UTF-8, converting lossily");
            String::from_utf8_lossy(e.as_bytes()).into_owned()
        }
    })
}
