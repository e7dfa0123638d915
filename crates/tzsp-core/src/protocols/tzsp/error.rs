use thiserror::Error;

/// Errors returned by TZSP decoding and encoding.
///
/// Every variant is terminal for the decode call that raised it; no partial
/// packet is returned alongside an error.
///
/// # Examples
/// ```
/// use tzsp_core::TzspError;
///
/// let err = TzspError::UnknownHeaderVersion { value: 2 };
/// assert!(err.to_string().contains("unknown header version"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TzspError {
    #[error("data is empty")]
    EmptyInput,
    #[error("data is too short: need {needed} bytes, got {actual}")]
    TooShort { needed: usize, actual: usize },
    #[error("unknown header version: {value}")]
    UnknownHeaderVersion { value: u8 },
    #[error("unknown header type: {value}")]
    UnknownHeaderType { value: u8 },
    #[error("unknown encapsulated protocol: {value:#06x}")]
    UnknownEncapsulatedProtocol { value: u16 },
    #[error("unknown field type: {value:#04x}")]
    UnknownFieldType { value: u8 },
    #[error("field {tag_type:#04x} declares {declared} bytes but carries {actual}")]
    FieldLengthMismatch {
        tag_type: u8,
        declared: u8,
        actual: usize,
    },
}
