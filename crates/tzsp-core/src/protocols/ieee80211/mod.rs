//! IEEE 802.11 MAC frame decoding.
//!
//! Frame control is read as a little-endian `u16` and projected through fixed
//! bit offsets; type and subtype resolve through closed tables with a
//! `reserved` fallback. Only frame control, duration/ID and address 1 are
//! mandatory: later header fields are read when present, and beacon,
//! probe-response and probe-request bodies are decoded into fixed parameters
//! and information elements.
//!
//! Decoding is best-effort past the mandatory prefix, so truncated captures
//! yield partially populated frames instead of errors.

pub mod error;
pub mod frame_control;
pub mod layout;
pub mod mac;
pub mod parser;
pub mod reader;
pub mod tags;

pub use error::FrameError;
pub use frame_control::{FrameControl, FrameSubtype, FrameType, decode_frame_control};
pub use mac::MacAddr;
pub use parser::{Frame, FrameBody, decode_frame};
pub use tags::{Tag, Tags, decode_tags};
