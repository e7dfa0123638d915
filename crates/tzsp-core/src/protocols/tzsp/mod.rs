//! TZSP (TaZmen Sniffer Protocol) encapsulation decoding.
//!
//! A datagram is a fixed 4-byte header (version, type, big-endian
//! encapsulated protocol), a tagged-field list terminated by an `End` byte,
//! and the captured frame. Header checks must pass before fields are read;
//! fields are read from byte 4 onward and the first `End` hands the rest of
//! the buffer over as payload.
//!
//! Declared field lengths are bounds-checked against the remaining buffer.
//! Encoding is symmetric and appends `End` when the field list lacks one.

pub mod error;
pub mod fields;
pub mod header;
pub mod layout;
pub mod parser;
pub mod rate;
pub mod reader;

pub use error::TzspError;
pub use fields::{FieldType, TaggedField};
pub use header::{EncapsulatedProtocol, Header, HeaderType};
pub use parser::{Packet, decode_packet, encode_packet};
pub use rate::{DataRate, rate_label};
