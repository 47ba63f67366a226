// Image payload codec: data-URL transport string <-> (media type, base64 data)

use crate::error::{Result, StudioError};
use base64::Engine;
use serde::{Deserialize, Serialize};

/// Media type assumed when the producer did not supply one.
pub const DEFAULT_MIME_TYPE: &str = "image/png";

const DATA_URL_PREFIX: &str = "data:";
const BASE64_MARKER: &str = ";base64,";
const IMAGE_MIME_PREFIX: &str = "image/";

/// An inline image: media type plus base64-encoded bytes.
///
/// Payloads are only ever replaced as a whole; there is no partial mutation.
/// The base64 data is kept in its string form so it can be re-transported
/// verbatim without a decode/encode round trip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImagePayload {
    pub mime_type: String,
    pub data: String,
}

impl ImagePayload {
    /// Build a payload, defaulting the media type to `image/png` when the
    /// producer omitted one.
    pub fn new(mime_type: impl Into<String>, data: impl Into<String>) -> Self {
        let mime_type = mime_type.into();
        let mime_type = if mime_type.is_empty() {
            DEFAULT_MIME_TYPE.to_string()
        } else {
            mime_type
        };
        Self {
            mime_type,
            data: data.into(),
        }
    }

    /// Parse a `data:<media-type>;base64,<data>` transport string.
    ///
    /// The media type must begin with `image/` and the data segment must be
    /// non-empty; anything else fails with [`StudioError::Decode`]. The data
    /// segment is not base64-decoded here, since the string form is reused
    /// verbatim for re-transport.
    pub fn from_data_url(input: &str) -> Result<Self> {
        let rest = input
            .strip_prefix(DATA_URL_PREFIX)
            .ok_or(StudioError::Decode)?;
        let (mime_type, data) = rest.split_once(BASE64_MARKER).ok_or(StudioError::Decode)?;
        if !mime_type.starts_with(IMAGE_MIME_PREFIX)
            || mime_type.len() == IMAGE_MIME_PREFIX.len()
        {
            return Err(StudioError::Decode);
        }
        if data.is_empty() {
            return Err(StudioError::Decode);
        }
        Ok(Self {
            mime_type: mime_type.to_string(),
            data: data.to_string(),
        })
    }

    /// Format the transport string. Pure formatting, always succeeds.
    pub fn to_data_url(&self) -> String {
        format!("{}{}{}{}", DATA_URL_PREFIX, self.mime_type, BASE64_MARKER, self.data)
    }

    /// Decode the base64 data to raw bytes (for disk export).
    pub fn bytes(&self) -> Result<Vec<u8>> {
        base64::engine::general_purpose::STANDARD
            .decode(&self.data)
            .map_err(|_| StudioError::Decode)
    }

    /// File extension matching the media type, defaulting to `png`.
    pub fn extension(&self) -> &'static str {
        match self.mime_type.to_lowercase().as_str() {
            "image/jpeg" | "image/jpg" => "jpeg",
            "image/webp" => "webp",
            "image/gif" => "gif",
            _ => "png",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Tiny 1x1 PNG (base64 encoded)
    const PNG_DATA: &str =
        "iVBORw0KGgoAAAANSUhEUgAAAAEAAAABCAYAAAAfFcSJAAAADUlEQVR42mNk+M9QDwADhgGAWjR9awAAAABJRU5ErkJggg==";

    #[test]
    fn test_round_trip_identity() {
        let payload = ImagePayload::new("image/png", PNG_DATA);
        let url = payload.to_data_url();
        assert!(url.starts_with("data:image/png;base64,"));
        let decoded = ImagePayload::from_data_url(&url).unwrap();
        assert_eq!(decoded, payload);
    }

    #[test]
    fn test_decode_well_formed() {
        let payload = ImagePayload::from_data_url("data:image/webp;base64,AAAA").unwrap();
        assert_eq!(payload.mime_type, "image/webp");
        assert_eq!(payload.data, "AAAA");
    }

    #[test]
    fn test_decode_rejects_malformed() {
        let malformed = [
            "",
            "image/png;base64,AAAA",          // missing data: prefix
            "data:image/png,AAAA",            // missing base64 marker
            "data:text/plain;base64,AAAA",    // not an image media type
            "data:image/;base64,AAAA",        // empty subtype
            "data:image/png;base64,",         // empty data segment
            "https://example.com/cat.png",    // URL, not a data URL
        ];
        for input in malformed {
            assert!(
                matches!(ImagePayload::from_data_url(input), Err(StudioError::Decode)),
                "expected Decode for {input:?}"
            );
        }
    }

    #[test]
    fn test_default_mime_type() {
        let payload = ImagePayload::new("", PNG_DATA);
        assert_eq!(payload.mime_type, DEFAULT_MIME_TYPE);
    }

    #[test]
    fn test_bytes_decodes_base64() {
        let payload = ImagePayload::new("image/png", PNG_DATA);
        let bytes = payload.bytes().unwrap();
        assert!(bytes.starts_with(b"\x89PNG\r\n\x1a\n"));
    }

    #[test]
    fn test_bytes_rejects_invalid_base64() {
        let payload = ImagePayload::new("image/png", "not-valid-base64!!!");
        assert!(payload.bytes().is_err());
    }

    #[test]
    fn test_extension_from_mime() {
        assert_eq!(ImagePayload::new("image/png", "A").extension(), "png");
        assert_eq!(ImagePayload::new("image/jpeg", "A").extension(), "jpeg");
        assert_eq!(ImagePayload::new("image/webp", "A").extension(), "webp");
        assert_eq!(ImagePayload::new("image/x-exotic", "A").extension(), "png");
    }
}
