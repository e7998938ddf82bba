//! Encoded-image payload normalization.
//!
//! Item images arrive from pickers and stores in two forms: a bare base64
//! string or a full `data:image/png;base64,` data URI. The engine always
//! stores and forwards the self-describing form, with the prefix present
//! exactly once. Actual pixel decoding belongs to the host renderer; this
//! module only guarantees the payload's envelope is well formed enough to
//! hand over.

#[cfg(test)]
#[path = "payload_test.rs"]
mod payload_test;

use serde::{Deserialize, Serialize};

use crate::consts::PNG_DATA_URI_PREFIX;

/// A malformed item image payload.
///
/// A decode failure degrades that one item to an empty render; it never
/// aborts the session or the processing of other items.
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    #[error("empty image payload")]
    Empty,
}

/// A self-describing encoded item image.
///
/// The inner string always carries the canonical data-URI prefix exactly
/// once. Construct via [`EncodedImage::normalize`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EncodedImage(String);

impl EncodedImage {
    /// Normalize a raw payload into the self-describing form.
    ///
    /// Idempotent: an already-prefixed payload passes through unchanged, so
    /// repeated normalization never stacks prefixes.
    #[must_use]
    pub fn normalize(raw: &str) -> Self {
        if raw.starts_with(PNG_DATA_URI_PREFIX) {
            Self(raw.to_string())
        } else {
            Self(format!("{PNG_DATA_URI_PREFIX}{raw}"))
        }
    }

    /// The full data-URI form.
    #[must_use]
    pub fn as_data_uri(&self) -> &str {
        &self.0
    }

    /// The bare base64 body, for hosts whose decoder rejects the prefix.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::Empty`] when there is no payload behind the
    /// prefix; the caller should render the item as empty.
    pub fn raw_base64(&self) -> Result<&str, DecodeError> {
        let body = self.0.strip_prefix(PNG_DATA_URI_PREFIX).unwrap_or(&self.0);
        if body.is_empty() {
            return Err(DecodeError::Empty);
        }
        Ok(body)
    }
}

impl std::fmt::Display for EncodedImage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
