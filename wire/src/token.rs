//! URL-safe text tokens wrapping the binary frame.

use base64::engine::general_purpose::GeneralPurposeConfig;
use base64::engine::{DecodePaddingMode, GeneralPurpose};
use base64::{alphabet, Engine as _};

use crate::error::{WireError, WireResult};
use crate::frame::{decode_frame, encode_frame, QuizResult};

/// URL-safe alphabet, no padding on encode, padded or unpadded on decode.
///
/// Tokens travel as URL fragments or query values, so `+`, `/`, and `=`
/// never appear in produced output; inputs that kept their padding still
/// decode.
const TOKEN_ENGINE: GeneralPurpose = GeneralPurpose::new(
    &alphabet::URL_SAFE,
    GeneralPurposeConfig::new()
        .with_encode_padding(false)
        .with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// Encodes a quiz result into a URL-safe share token.
///
/// The token is the base64 encoding of the 37-byte frame, 50 characters of
/// `A-Za-z0-9-_`.
#[must_use]
pub fn encode_share_payload(result: &QuizResult) -> String {
    TOKEN_ENGINE.encode(encode_frame(result))
}

/// Decodes a share token back into a quiz result.
///
/// # Errors
///
/// Returns [`WireError::MalformedToken`] for invalid base64,
/// [`WireError::InvalidPayloadLength`] when the decoded frame is not
/// exactly 37 bytes, and [`WireError::ChecksumMismatch`] for frames that
/// fail verification.
pub fn decode_share_payload(token: &str) -> WireResult<QuizResult> {
    let bytes = TOKEN_ENGINE
        .decode(token)
        .map_err(|err| WireError::MalformedToken {
            reason: err.to_string(),
        })?;
    decode_frame(&bytes)
}
