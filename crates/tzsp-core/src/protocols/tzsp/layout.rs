pub const VERSION_OFFSET: usize = 0;
pub const TYPE_OFFSET: usize = 1;
pub const ENCAPSULATED_PROTOCOL_RANGE: std::ops::Range<usize> = 2..4;
pub const HEADER_LEN: usize = 4;

pub const PROTOCOL_VERSION: u8 = 0x01;

pub const HEADER_TYPE_RECEIVED_TAG_LIST: u8 = 0x00;
pub const HEADER_TYPE_PACKET_FOR_TRANSMIT: u8 = 0x01;
pub const HEADER_TYPE_RESERVED: u8 = 0x02;
pub const HEADER_TYPE_CONFIGURATION: u8 = 0x03;
pub const HEADER_TYPE_KEEPALIVE: u8 = 0x04;
pub const HEADER_TYPE_PORT_OPENER: u8 = 0x05;

pub const ENCAPSULATED_ETHERNET: u16 = 0x0001;
pub const ENCAPSULATED_IEEE_802_11: u16 = 0x0012;
pub const ENCAPSULATED_PRISM_HEADER: u16 = 0x0077;
pub const ENCAPSULATED_WLAN_AVS: u16 = 0x007f;

pub const FIELD_PADDING: u8 = 0x00;
pub const FIELD_END: u8 = 0x01;
pub const FIELD_RAW_RSSI: u8 = 0x0a;
pub const FIELD_SNR: u8 = 0x0b;
pub const FIELD_DATA_RATE: u8 = 0x0c;
pub const FIELD_TIMESTAMP: u8 = 0x0d;
pub const FIELD_CONTENTION_FREE: u8 = 0x0f;
pub const FIELD_DECRYPTED: u8 = 0x10;
pub const FIELD_FCS_ERROR: u8 = 0x11;
pub const FIELD_RX_CHANNEL: u8 = 0x12;
pub const FIELD_PACKET_COUNT: u8 = 0x28;
pub const FIELD_RX_FRAME_LENGTH: u8 = 0x29;
pub const FIELD_WLAN_RADIO_HDR_SERIAL: u8 = 0x3c;

/// Offset of the length byte relative to the start of a length-prefixed field.
pub const FIELD_LENGTH_OFFSET: usize = 1;
/// Type byte plus length byte.
pub const FIELD_PREFIX_LEN: usize = 2;

/// UDP port TZSP senders target by default.
pub const DEFAULT_PORT: u16 = 37008;
