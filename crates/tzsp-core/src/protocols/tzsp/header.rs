use serde::{Deserialize, Serialize};

use super::error::TzspError;
use super::layout;
use super::reader::TzspReader;

/// TZSP header type (byte 1 of the header).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HeaderType {
    ReceivedTagList,
    PacketForTransmit,
    Reserved,
    Configuration,
    Keepalive,
    PortOpener,
}

impl HeaderType {
    pub fn code(self) -> u8 {
        match self {
            HeaderType::ReceivedTagList => layout::HEADER_TYPE_RECEIVED_TAG_LIST,
            HeaderType::PacketForTransmit => layout::HEADER_TYPE_PACKET_FOR_TRANSMIT,
            HeaderType::Reserved => layout::HEADER_TYPE_RESERVED,
            HeaderType::Configuration => layout::HEADER_TYPE_CONFIGURATION,
            HeaderType::Keepalive => layout::HEADER_TYPE_KEEPALIVE,
            HeaderType::PortOpener => layout::HEADER_TYPE_PORT_OPENER,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            HeaderType::ReceivedTagList => "received tag list",
            HeaderType::PacketForTransmit => "packet for transmit",
            HeaderType::Reserved => "reserved",
            HeaderType::Configuration => "configuration",
            HeaderType::Keepalive => "keepalive",
            HeaderType::PortOpener => "port opener",
        }
    }
}

impl TryFrom<u8> for HeaderType {
    type Error = TzspError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            layout::HEADER_TYPE_RECEIVED_TAG_LIST => Ok(HeaderType::ReceivedTagList),
            layout::HEADER_TYPE_PACKET_FOR_TRANSMIT => Ok(HeaderType::PacketForTransmit),
            layout::HEADER_TYPE_RESERVED => Ok(HeaderType::Reserved),
            layout::HEADER_TYPE_CONFIGURATION => Ok(HeaderType::Configuration),
            layout::HEADER_TYPE_KEEPALIVE => Ok(HeaderType::Keepalive),
            layout::HEADER_TYPE_PORT_OPENER => Ok(HeaderType::PortOpener),
            other => Err(TzspError::UnknownHeaderType { value: other }),
        }
    }
}

/// Link layer of the frame carried after the tagged fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EncapsulatedProtocol {
    Ethernet,
    Ieee80211,
    PrismHeader,
    WlanAvs,
}

impl EncapsulatedProtocol {
    pub fn code(self) -> u16 {
        match self {
            EncapsulatedProtocol::Ethernet => layout::ENCAPSULATED_ETHERNET,
            EncapsulatedProtocol::Ieee80211 => layout::ENCAPSULATED_IEEE_802_11,
            EncapsulatedProtocol::PrismHeader => layout::ENCAPSULATED_PRISM_HEADER,
            EncapsulatedProtocol::WlanAvs => layout::ENCAPSULATED_WLAN_AVS,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            EncapsulatedProtocol::Ethernet => "ethernet",
            EncapsulatedProtocol::Ieee80211 => "ieee802.11",
            EncapsulatedProtocol::PrismHeader => "prism header",
            EncapsulatedProtocol::WlanAvs => "wlan avs",
        }
    }
}

impl TryFrom<u16> for EncapsulatedProtocol {
    type Error = TzspError;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            layout::ENCAPSULATED_ETHERNET => Ok(EncapsulatedProtocol::Ethernet),
            layout::ENCAPSULATED_IEEE_802_11 => Ok(EncapsulatedProtocol::Ieee80211),
            layout::ENCAPSULATED_PRISM_HEADER => Ok(EncapsulatedProtocol::PrismHeader),
            layout::ENCAPSULATED_WLAN_AVS => Ok(EncapsulatedProtocol::WlanAvs),
            other => Err(TzspError::UnknownEncapsulatedProtocol { value: other }),
        }
    }
}

/// Fixed 4-byte TZSP header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Header {
    pub version: u8,
    pub header_type: HeaderType,
    pub encapsulated_protocol: EncapsulatedProtocol,
}

impl Header {
    pub fn new(header_type: HeaderType, encapsulated_protocol: EncapsulatedProtocol) -> Self {
        Self {
            version: layout::PROTOCOL_VERSION,
            header_type,
            encapsulated_protocol,
        }
    }
}

/// Decode the header from the first 4 bytes of `data`.
///
/// Checks run in wire order: version, then type, then encapsulated protocol.
/// Bytes past the header are ignored.
pub fn decode_header(data: &[u8]) -> Result<Header, TzspError> {
    let reader = TzspReader::new(data);
    reader.require_len(layout::HEADER_LEN)?;

    let version = reader.read_u8(layout::VERSION_OFFSET)?;
    if version != layout::PROTOCOL_VERSION {
        return Err(TzspError::UnknownHeaderVersion { value: version });
    }
    let header_type = HeaderType::try_from(reader.read_u8(layout::TYPE_OFFSET)?)?;
    let encapsulated_protocol = EncapsulatedProtocol::try_from(
        reader.read_u16_be(layout::ENCAPSULATED_PROTOCOL_RANGE.clone())?,
    )?;

    Ok(Header {
        version,
        header_type,
        encapsulated_protocol,
    })
}

pub fn encode_header(header: &Header, out: &mut Vec<u8>) {
    out.push(header.version);
    out.push(header.header_type.code());
    out.extend_from_slice(&header.encapsulated_protocol.code().to_be_bytes());
}
