use thiserror::Error;

/// Errors returned by 802.11 frame decoding.
///
/// Only a frame too short to hold frame control, duration/ID and the first
/// address is rejected; shorter headers past that point and truncated IE
/// regions decode to partially populated values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FrameError {
    #[error("frame too short: need {needed} bytes, got {actual}")]
    TooShort { needed: usize, actual: usize },
}
