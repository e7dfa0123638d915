use serde::{Deserialize, Serialize};

use super::error::TzspError;
use super::fields::{FieldType, TaggedField, decode_fields, encode_fields};
use super::header::{Header, decode_header, encode_header};
use super::layout;
use super::reader::TzspReader;

/// Decoded TZSP packet: header, metadata fields and the encapsulated frame.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Packet {
    pub header: Header,
    pub tagged_fields: Vec<TaggedField>,
    /// Bytes after the first `End` field; empty when none was present.
    pub data: Vec<u8>,
}

impl Packet {
    /// First field of the given type, if any.
    pub fn field(&self, tag_type: FieldType) -> Option<&TaggedField> {
        self.tagged_fields
            .iter()
            .find(|field| field.tag_type == tag_type)
    }

    pub fn encode(&self) -> Result<Vec<u8>, TzspError> {
        encode_packet(self)
    }
}

/// Decode a TZSP datagram.
///
/// # Examples
/// ```
/// use tzsp_core::{EncapsulatedProtocol, decode_packet};
///
/// let packet = decode_packet(&[0x01, 0x00, 0x00, 0x12, 0x12, 0x01, 0x06, 0x01, 0xaa])?;
/// assert_eq!(packet.header.encapsulated_protocol, EncapsulatedProtocol::Ieee80211);
/// assert_eq!(packet.tagged_fields.len(), 2);
/// assert_eq!(packet.data, vec![0xaa]);
/// # Ok::<(), tzsp_core::TzspError>(())
/// ```
///
/// # Errors
/// Fails on empty or short input, on an unknown header version, type or
/// encapsulated protocol, on an unknown field type, and when a field's
/// declared length runs past the end of the buffer.
pub fn decode_packet(data: &[u8]) -> Result<Packet, TzspError> {
    if data.is_empty() {
        return Err(TzspError::EmptyInput);
    }
    let reader = TzspReader::new(data);
    reader.require_len(layout::HEADER_LEN)?;

    let header = decode_header(reader.read_slice(0..layout::HEADER_LEN)?)?;
    let (tagged_fields, payload) = decode_fields(reader.read_rest(layout::HEADER_LEN)?)?;

    Ok(Packet {
        header,
        tagged_fields,
        data: payload.to_vec(),
    })
}

/// Serialize a packet to wire bytes, terminating the field list with `End`
/// when the caller did not include one.
pub fn encode_packet(packet: &Packet) -> Result<Vec<u8>, TzspError> {
    let mut out = Vec::with_capacity(
        layout::HEADER_LEN + packet.tagged_fields.len() * 3 + 1 + packet.data.len(),
    );
    encode_header(&packet.header, &mut out);
    encode_fields(&packet.tagged_fields, &mut out)?;
    out.extend_from_slice(&packet.data);
    Ok(out)
}
