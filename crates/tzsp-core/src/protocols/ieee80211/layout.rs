pub const FRAME_CONTROL_RANGE: std::ops::Range<usize> = 0..2;
pub const DURATION_ID_RANGE: std::ops::Range<usize> = 2..4;
pub const ADDRESS1_RANGE: std::ops::Range<usize> = 4..10;
pub const ADDRESS2_RANGE: std::ops::Range<usize> = 10..16;
pub const ADDRESS3_RANGE: std::ops::Range<usize> = 16..22;
pub const SEQUENCE_CONTROL_RANGE: std::ops::Range<usize> = 22..24;
pub const ADDRESS4_RANGE: std::ops::Range<usize> = 24..30;

/// Frame control, duration/ID and address 1.
pub const MIN_LEN: usize = ADDRESS1_RANGE.end;
pub const MAC_ADDR_LEN: usize = 6;

/// Low bits of sequence control hold the fragment number.
pub const SEQUENCE_NUMBER_SHIFT: u16 = 4;

pub const VERSION_SHIFT: u16 = 1;
pub const VERSION_MASK: u16 = 0x03;
pub const TYPE_SHIFT: u16 = 3;
pub const TYPE_MASK: u16 = 0x03;
pub const SUBTYPE_SHIFT: u16 = 5;
pub const SUBTYPE_MASK: u16 = 0x0f;

pub const TO_DS_BIT: u16 = 9;
pub const FROM_DS_BIT: u16 = 10;
pub const MORE_FRAGMENTS_BIT: u16 = 11;
pub const RETRY_BIT: u16 = 12;
pub const POWER_MANAGEMENT_BIT: u16 = 13;
pub const MORE_DATA_BIT: u16 = 14;
pub const PROTECTED_FRAME_BIT: u16 = 15;

pub const TIMESTAMP_RANGE: std::ops::Range<usize> = 0..8;
pub const BEACON_INTERVAL_RANGE: std::ops::Range<usize> = 8..10;
pub const CAPABILITY_INFO_RANGE: std::ops::Range<usize> = 10..12;
/// Fixed parameters preceding the IEs in beacon and probe-response bodies.
pub const FIXED_PARAMETERS_LEN: usize = 12;

pub const IE_PREFIX_LEN: usize = 2;
pub const IE_SSID: u8 = 0;
pub const IE_SUPPORTED_RATES: u8 = 1;
pub const IE_DS_PARAMETER_SET: u8 = 3;
pub const RATE_BASIC_FLAG: u8 = 0x80;
