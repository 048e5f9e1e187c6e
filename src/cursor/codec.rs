//! Continuation key <-> token conversion

use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};
use serde::{Deserialize, Serialize};

use super::errors::{CursorError, CursorResult};
use crate::model::SortDirection;
use crate::store::ContinuationKey;

/// Envelope version written into every token
pub const CURSOR_VERSION: u8 = 1;

#[derive(Debug, Serialize, Deserialize)]
struct Envelope {
    #[serde(rename = "v")]
    version: u8,

    #[serde(rename = "d", default, skip_serializing_if = "Option::is_none")]
    direction: Option<SortDirection>,

    #[serde(rename = "k")]
    key: ContinuationKey,
}

/// Stateless codec for pagination tokens
pub struct CursorCodec;

impl CursorCodec {
    /// Encodes a continuation key. Absent or empty keys produce no token.
    pub fn encode(key: Option<&ContinuationKey>) -> Option<String> {
        Self::encode_envelope(key, None)
    }

    /// Decodes a token back into the exact key given to `encode`.
    pub fn decode(token: Option<&str>) -> CursorResult<Option<ContinuationKey>> {
        match token {
            None => Ok(None),
            Some(token) => Self::decode_envelope(token).map(|env| Some(env.key)),
        }
    }

    /// Encodes a key bound to the scan direction of the page that produced it.
    pub fn encode_for(key: Option<&ContinuationKey>, direction: SortDirection) -> Option<String> {
        Self::encode_envelope(key, Some(direction))
    }

    /// Decodes a token, rejecting one that was issued for the other direction.
    ///
    /// Tokens without a direction stamp are accepted for either order.
    pub fn decode_for(
        token: Option<&str>,
        direction: SortDirection,
    ) -> CursorResult<Option<ContinuationKey>> {
        let Some(token) = token else {
            return Ok(None);
        };

        let envelope = Self::decode_envelope(token)?;
        match envelope.direction {
            Some(issued) if issued != direction => Err(CursorError::DirectionMismatch {
                issued,
                requested: direction,
            }),
            _ => Ok(Some(envelope.key)),
        }
    }

    fn encode_envelope(
        key: Option<&ContinuationKey>,
        direction: Option<SortDirection>,
    ) -> Option<String> {
        let key = key.filter(|k| !k.is_empty())?;
        let envelope = Envelope {
            version: CURSOR_VERSION,
            direction,
            key: key.clone(),
        };

        // A map of JSON values always serializes.
        let json = serde_json::to_vec(&envelope).ok()?;
        Some(URL_SAFE_NO_PAD.encode(json))
    }

    fn decode_envelope(token: &str) -> CursorResult<Envelope> {
        let bytes = URL_SAFE_NO_PAD
            .decode(token.trim())
            .map_err(|e| CursorError::malformed(format!("not base64: {}", e)))?;

        let envelope: Envelope = serde_json::from_slice(&bytes)
            .map_err(|e| CursorError::malformed(format!("not a cursor envelope: {}", e)))?;

        if envelope.version != CURSOR_VERSION {
            return Err(CursorError::malformed(format!(
                "unsupported cursor version {}",
                envelope.version
            )));
        }

        if envelope.key.is_empty() {
            return Err(CursorError::malformed("cursor carries no key"));
        }

        Ok(envelope)
    }
}
