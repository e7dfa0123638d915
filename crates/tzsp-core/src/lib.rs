//! TZSP core library: sniffer encapsulation and 802.11 frame decoding.
//!
//! Remote sniffers forward captured frames over UDP wrapped in TZSP: a fixed
//! header, a tagged list of radio metadata (signal, rate, channel...) and the
//! captured frame itself. This crate decodes that envelope and, when it
//! carries an IEEE 802.11 frame, the MAC header and the information elements
//! of beacon and probe frames.
//!
//! Decoding is byte-oriented, synchronous and side-effect free; each call
//! works on its own slice and returns an owned value or an error. Socket I/O
//! lives in the CLI listener.
//!
//! Invariants:
//! - Header checks pass before any tagged field is read.
//! - Declared field lengths never read past the buffer.
//! - Truncated 802.11 headers and IE regions decode best-effort.
//!
//! # Examples
//! ```
//! use tzsp_core::{decode_packet, encode_packet};
//!
//! let bytes = [0x01, 0x00, 0x00, 0x12, 0x12, 0x01, 0x06, 0x01];
//! let packet = decode_packet(&bytes)?;
//! assert_eq!(encode_packet(&packet)?, bytes);
//! # Ok::<(), tzsp_core::TzspError>(())
//! ```

mod protocols;
mod summary;

pub use protocols::ieee80211::{
    Frame, FrameBody, FrameControl, FrameError, FrameSubtype, FrameType, MacAddr, Tag, Tags,
    decode_frame, decode_frame_control, decode_tags,
};
pub use protocols::tzsp::{
    DataRate, EncapsulatedProtocol, FieldType, Header, HeaderType, Packet, TaggedField,
    TzspError, decode_packet, encode_packet, rate_label,
};
pub use summary::{FrameSummary, PacketSummary};

/// UDP port TZSP senders target by default.
pub const DEFAULT_TZSP_PORT: u16 = protocols::tzsp::layout::DEFAULT_PORT;
