use serde::{Deserialize, Serialize};
use tracing::debug;

use super::error::TzspError;
use super::layout;
use super::reader::TzspReader;

/// Known tagged-field codes.
///
/// `Padding` and `End` are single-byte sentinels; every other type is
/// length-prefixed on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldType {
    Padding,
    End,
    RawRssi,
    Snr,
    DataRate,
    Timestamp,
    ContentionFree,
    Decrypted,
    FcsError,
    RxChannel,
    PacketCount,
    RxFrameLength,
    WlanRadioHdrSerial,
}

impl FieldType {
    pub fn code(self) -> u8 {
        match self {
            FieldType::Padding => layout::FIELD_PADDING,
            FieldType::End => layout::FIELD_END,
            FieldType::RawRssi => layout::FIELD_RAW_RSSI,
            FieldType::Snr => layout::FIELD_SNR,
            FieldType::DataRate => layout::FIELD_DATA_RATE,
            FieldType::Timestamp => layout::FIELD_TIMESTAMP,
            FieldType::ContentionFree => layout::FIELD_CONTENTION_FREE,
            FieldType::Decrypted => layout::FIELD_DECRYPTED,
            FieldType::FcsError => layout::FIELD_FCS_ERROR,
            FieldType::RxChannel => layout::FIELD_RX_CHANNEL,
            FieldType::PacketCount => layout::FIELD_PACKET_COUNT,
            FieldType::RxFrameLength => layout::FIELD_RX_FRAME_LENGTH,
            FieldType::WlanRadioHdrSerial => layout::FIELD_WLAN_RADIO_HDR_SERIAL,
        }
    }

    /// Sentinel types carry neither a length byte nor data.
    pub fn is_sentinel(self) -> bool {
        matches!(self, FieldType::Padding | FieldType::End)
    }
}

impl TryFrom<u8> for FieldType {
    type Error = TzspError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            layout::FIELD_PADDING => Ok(FieldType::Padding),
            layout::FIELD_END => Ok(FieldType::End),
            layout::FIELD_RAW_RSSI => Ok(FieldType::RawRssi),
            layout::FIELD_SNR => Ok(FieldType::Snr),
            layout::FIELD_DATA_RATE => Ok(FieldType::DataRate),
            layout::FIELD_TIMESTAMP => Ok(FieldType::Timestamp),
            layout::FIELD_CONTENTION_FREE => Ok(FieldType::ContentionFree),
            layout::FIELD_DECRYPTED => Ok(FieldType::Decrypted),
            layout::FIELD_FCS_ERROR => Ok(FieldType::FcsError),
            layout::FIELD_RX_CHANNEL => Ok(FieldType::RxChannel),
            layout::FIELD_PACKET_COUNT => Ok(FieldType::PacketCount),
            layout::FIELD_RX_FRAME_LENGTH => Ok(FieldType::RxFrameLength),
            layout::FIELD_WLAN_RADIO_HDR_SERIAL => Ok(FieldType::WlanRadioHdrSerial),
            other => Err(TzspError::UnknownFieldType { value: other }),
        }
    }
}

/// One entry of the metadata region between the header and the payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaggedField {
    pub tag_type: FieldType,
    /// Declared data length; always 0 for sentinels.
    pub tag_length: u8,
    pub data: Vec<u8>,
}

impl TaggedField {
    /// Build a length-prefixed field, deriving `tag_length` from `data`.
    ///
    /// # Examples
    /// ```
    /// use tzsp_core::{FieldType, TaggedField};
    ///
    /// let field = TaggedField::new(FieldType::RxChannel, vec![6]).unwrap();
    /// assert_eq!(field.tag_length, 1);
    /// ```
    pub fn new(tag_type: FieldType, data: Vec<u8>) -> Result<Self, TzspError> {
        let tag_length = u8::try_from(data.len()).map_err(|_| TzspError::FieldLengthMismatch {
            tag_type: tag_type.code(),
            declared: u8::MAX,
            actual: data.len(),
        })?;
        Ok(Self {
            tag_type,
            tag_length,
            data,
        })
    }

    pub fn padding() -> Self {
        Self::sentinel(FieldType::Padding)
    }

    pub fn end() -> Self {
        Self::sentinel(FieldType::End)
    }

    fn sentinel(tag_type: FieldType) -> Self {
        Self {
            tag_type,
            tag_length: 0,
            data: Vec::new(),
        }
    }

    /// Serialize this field, appending its wire bytes to `out`.
    pub fn encode(&self, out: &mut Vec<u8>) -> Result<(), TzspError> {
        if self.tag_type.is_sentinel() {
            out.push(self.tag_type.code());
            return Ok(());
        }
        if self.data.len() != self.tag_length as usize {
            return Err(TzspError::FieldLengthMismatch {
                tag_type: self.tag_type.code(),
                declared: self.tag_length,
                actual: self.data.len(),
            });
        }
        out.push(self.tag_type.code());
        out.push(self.tag_length);
        out.extend_from_slice(&self.data);
        Ok(())
    }
}

/// Decode the tagged-field region that follows the header.
///
/// Returns the fields in wire order and the bytes after the first `End`
/// field. When the input runs out before an `End` field, the payload is
/// empty and the field list is returned as-is.
pub fn decode_fields(data: &[u8]) -> Result<(Vec<TaggedField>, &[u8]), TzspError> {
    let reader = TzspReader::new(data);
    let mut fields = Vec::new();
    let mut offset = 0usize;

    while offset < reader.len() {
        let tag_type = FieldType::try_from(reader.read_u8(offset)?)?;
        match tag_type {
            FieldType::Padding => {
                fields.push(TaggedField::padding());
                offset += 1;
            }
            FieldType::End => {
                fields.push(TaggedField::end());
                let payload = reader.read_rest(offset + 1)?;
                return Ok((fields, payload));
            }
            _ => {
                let tag_length = reader.read_u8(offset + layout::FIELD_LENGTH_OFFSET)?;
                let start = offset + layout::FIELD_PREFIX_LEN;
                let end = start + tag_length as usize;
                let value = reader.read_slice(start..end)?;
                fields.push(TaggedField {
                    tag_type,
                    tag_length,
                    data: value.to_vec(),
                });
                offset = end;
            }
        }
    }

    debug!(fields = fields.len(), "tagged fields ended without an End tag");
    let payload: &[u8] = &[];
    Ok((fields, payload))
}

/// Serialize `fields` in order, appending an `End` byte when none was given.
pub fn encode_fields(fields: &[TaggedField], out: &mut Vec<u8>) -> Result<(), TzspError> {
    let mut end_present = false;
    for field in fields {
        if field.tag_type == FieldType::End {
            end_present = true;
        }
        field.encode(out)?;
    }
    if !end_present {
        out.push(layout::FIELD_END);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{FieldType, TaggedField, decode_fields, encode_fields};
    use crate::protocols::tzsp::error::TzspError;

    #[test]
    fn decode_fields_until_end() {
        let data = [0x00, 0x12, 0x01, 0x06, 0x0a, 0x01, 0xc4, 0x01, 0xde, 0xad];
        let (fields, payload) = decode_fields(&data).unwrap();
        assert_eq!(fields.len(), 4);
        assert_eq!(fields[0], TaggedField::padding());
        assert_eq!(fields[1].tag_type, FieldType::RxChannel);
        assert_eq!(fields[1].data, vec![0x06]);
        assert_eq!(fields[2].tag_type, FieldType::RawRssi);
        assert_eq!(fields[2].data, vec![0xc4]);
        assert_eq!(fields[3], TaggedField::end());
        assert_eq!(payload, &[0xde, 0xad]);
    }

    #[test]
    fn decode_stops_at_first_end() {
        let data = [0x01, 0x0a, 0x01, 0xc4, 0x01];
        let (fields, payload) = decode_fields(&data).unwrap();
        assert_eq!(fields, vec![TaggedField::end()]);
        assert_eq!(payload, &[0x0a, 0x01, 0xc4, 0x01]);
    }

    #[test]
    fn decode_without_end_has_no_payload() {
        let data = [0x00, 0x12, 0x01, 0x0b];
        let (fields, payload) = decode_fields(&data).unwrap();
        assert_eq!(fields.len(), 2);
        assert!(payload.is_empty());
    }

    #[test]
    fn decode_empty_region() {
        let (fields, payload) = decode_fields(&[]).unwrap();
        assert!(fields.is_empty());
        assert!(payload.is_empty());
    }

    #[test]
    fn decode_zero_length_field() {
        let data = [0x10, 0x00, 0x01];
        let (fields, _) = decode_fields(&data).unwrap();
        assert_eq!(fields[0].tag_type, FieldType::Decrypted);
        assert!(fields[0].data.is_empty());
    }

    #[test]
    fn decode_rejects_unknown_type() {
        let data = [0x00, 0x02, 0x01, 0x00, 0x01];
        let err = decode_fields(&data).unwrap_err();
        assert_eq!(err, TzspError::UnknownFieldType { value: 0x02 });
    }

    #[test]
    fn decode_rejects_declared_length_past_end() {
        let data = [0x12, 0x05, 0x06, 0x01];
        let err = decode_fields(&data).unwrap_err();
        assert_eq!(
            err,
            TzspError::TooShort {
                needed: 7,
                actual: 4
            }
        );
    }

    #[test]
    fn decode_rejects_missing_length_byte() {
        let err = decode_fields(&[0x00, 0x12]).unwrap_err();
        assert!(matches!(err, TzspError::TooShort { .. }));
    }

    #[test]
    fn encode_appends_end_when_absent() {
        let fields = vec![
            TaggedField::padding(),
            TaggedField::new(FieldType::DataRate, vec![0x6c]).unwrap(),
        ];
        let mut out = Vec::new();
        encode_fields(&fields, &mut out).unwrap();
        assert_eq!(out, vec![0x00, 0x0c, 0x01, 0x6c, 0x01]);
    }

    #[test]
    fn encode_keeps_explicit_end() {
        let fields = vec![TaggedField::end()];
        let mut out = Vec::new();
        encode_fields(&fields, &mut out).unwrap();
        assert_eq!(out, vec![0x01]);
    }

    #[test]
    fn encode_ignores_sentinel_data() {
        let field = TaggedField {
            tag_type: FieldType::Padding,
            tag_length: 3,
            data: vec![1, 2, 3],
        };
        let mut out = Vec::new();
        field.encode(&mut out).unwrap();
        assert_eq!(out, vec![0x00]);
    }

    #[test]
    fn encode_rejects_length_mismatch() {
        let field = TaggedField {
            tag_type: FieldType::Snr,
            tag_length: 2,
            data: vec![1],
        };
        let err = field.encode(&mut Vec::new()).unwrap_err();
        assert_eq!(
            err,
            TzspError::FieldLengthMismatch {
                tag_type: 0x0b,
                declared: 2,
                actual: 1
            }
        );
    }

    #[test]
    fn new_rejects_oversized_data() {
        let err = TaggedField::new(FieldType::Timestamp, vec![0u8; 256]).unwrap_err();
        assert!(matches!(err, TzspError::FieldLengthMismatch { actual: 256, .. }));
    }
}
