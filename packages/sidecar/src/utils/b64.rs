// Base64 утилиты

use crate::utils::error::Result;
use base64::alphabet;
use base64::engine::{general_purpose, DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use base64::Engine;

/// Standard alphabet with required padding, but non-zero bits in the last
/// symbol are accepted
const STANDARD_DECODER: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new()
        .with_decode_allow_trailing_bits(true)
        .with_decode_padding_mode(DecodePaddingMode::RequireCanonical),
);

/// Standard alphabet, padded.
pub fn encode(data: &[u8]) -> String {
    general_purpose::STANDARD.encode(data)
}

/// Decode standard padded base64.
///
/// CR and LF are skipped so line-wrapped input decodes the same as a single
/// line. Anything else outside the alphabet is an error.
pub fn decode(data: &str) -> Result<Vec<u8>> {
    if data.contains(['\r', '\n']) {
        let joined: String = data.chars().filter(|c| !matches!(c, '\r' | '\n')).collect();
        return Ok(STANDARD_DECODER.decode(joined)?);
    }
    Ok(STANDARD_DECODER.decode(data)?)
}
