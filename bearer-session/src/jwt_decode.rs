use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use serde_json::{Map, Value};

#[cfg(test)]
use mockall::automock;

use crate::{claims::ClaimSet, error::MalformedTokenError, raw_token::RawToken};

/// Structural decoding of a token into a [ClaimSet].
///
/// Implementations inspect the token's shape only. Whether the token is
/// trustworthy is a separate concern, see [TokenVerifier](crate::verify::TokenVerifier).
#[cfg_attr(test, automock)]
pub trait TokenDecoder: Send + Sync {
    fn decode(&self, token: &RawToken) -> Result<ClaimSet, MalformedTokenError>;
}

/// Decodes JWTs in compact serialization.
///
/// A token is accepted if it consists of exactly three dot separated
/// segments where header and payload are base64url encoded (unpadded)
/// JSON objects. The signature segment is not inspected.
pub struct JwtTokenDecoder;

impl TokenDecoder for JwtTokenDecoder {
    fn decode(&self, token: &RawToken) -> Result<ClaimSet, MalformedTokenError> {
        let segments = token.as_str().split('.').collect::<Vec<_>>();
        if segments.len() != 3 {
            return Err(MalformedTokenError::WrongSegmentCount);
        }
        decode_object(segments[0])?;
        let payload = decode_object(segments[1])?;
        Ok(ClaimSet::from_object(&payload))
    }
}

fn decode_object(segment: &str) -> Result<Map<String, Value>, MalformedTokenError> {
    let bytes = URL_SAFE_NO_PAD
        .decode(segment)
        .map_err(|_| MalformedTokenError::InvalidEncoding)?;
    match serde_json::from_slice::<Value>(&bytes) {
        Ok(Value::Object(payload)) => Ok(payload),
        _ => Err(MalformedTokenError::UnparsablePayload),
    }
}
