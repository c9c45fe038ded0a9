//! # tally-encode
//!
//! Standard base64 encoding of text (RFC 4648 alphabet, padded).
//!
//! ```
//! assert_eq!(tally_encode::encode(Some("abc")).unwrap(), "YWJj");
//! assert!(tally_encode::encode(None).is_err());
//! ```

use base64::{Engine, engine::general_purpose};

/// Result type for encoding operations.
pub type Result<T> = std::result::Result<T, EncodeError>;

#[derive(Debug, thiserror::Error)]
pub enum EncodeError {
    /// The value to encode was absent
    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },
}

/// Encode the UTF-8 bytes of `text` as padded standard base64.
///
/// Fails with [`EncodeError::InvalidArgument`] when `text` is `None`.
pub fn encode(text: Option<&str>) -> Result<String> {
    let text = text.ok_or_else(|| EncodeError::InvalidArgument {
        message: "value must not be absent".to_string(),
    })?;
    Ok(encode_bytes(text.as_bytes()))
}

/// Encode raw bytes as padded standard base64.
pub fn encode_bytes(bytes: &[u8]) -> String {
    general_purpose::STANDARD.encode(bytes)
}
