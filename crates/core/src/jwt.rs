use base64::Engine;
use serde::{Deserialize, Serialize};

use crate::error::Error;

/// The three structural parts of a JSON Web Token.
///
/// The signature is passed through verbatim; nothing here verifies it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecodedJwt {
    pub header: serde_json::Value,
    pub payload: serde_json::Value,
    pub signature: String,
}

/// Decode a JWT structurally.
///
/// The token must have exactly 3 dot-separated segments
/// ([`Error::MalformedToken`] otherwise). Header and payload must be
/// Base64URL-encoded JSON per RFC 4648 §5; padding is tolerated
/// ([`Error::Decode`] otherwise).
pub fn decode(token: &str) -> Result<DecodedJwt, Error> {
    let token = token.trim();
    let parts: Vec<&str> = token.split('.').collect();

    if parts.len() != 3 {
        return Err(Error::MalformedToken(
            "a token must have 3 parts separated by dots".to_string(),
        ));
    }

    Ok(DecodedJwt {
        header: decode_segment(parts[0])?,
        payload: decode_segment(parts[1])?,
        signature: parts[2].to_string(),
    })
}

fn decode_segment(segment: &str) -> Result<serde_json::Value, Error> {
    let bytes = base64::engine::general_purpose::URL_SAFE_NO_PAD
        .decode(segment.trim_end_matches('='))
        .map_err(|e| Error::Decode(format!("segment is not valid base64url: {e}")))?;

    serde_json::from_slice(&bytes)
        .map_err(|e| Error::Decode(format!("segment is not valid JSON: {e}")))
}
