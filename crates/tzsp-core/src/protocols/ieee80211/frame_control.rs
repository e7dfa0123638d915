use serde::Serialize;

use super::error::FrameError;
use super::layout;
use super::reader::FrameReader;

/// Frame type selected by the 2-bit type field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FrameType {
    Management,
    Control,
    Data,
    Reserved,
}

impl FrameType {
    pub fn from_bits(value: u8) -> Self {
        match value & 0x03 {
            0 => FrameType::Management,
            1 => FrameType::Control,
            2 => FrameType::Data,
            _ => FrameType::Reserved,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            FrameType::Management => "management",
            FrameType::Control => "control",
            FrameType::Data => "data",
            FrameType::Reserved => "reserved",
        }
    }
}

/// Subtype resolved against the frame type; pairs without an entry are
/// `Reserved`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FrameSubtype {
    AssociationRequest,
    AssociationResponse,
    ReassociationRequest,
    ReassociationResponse,
    ProbeRequest,
    ProbeResponse,
    Beacon,
    Atim,
    Disassociation,
    Authentication,
    Deauthentication,
    PowerSavePoll,
    RequestToSend,
    ClearToSend,
    Acknowledgment,
    CfEnd,
    CfEndCfAck,
    Data,
    DataCfAck,
    DataCfPoll,
    DataCfAckCfPoll,
    NoData,
    NoDataCfAck,
    NoDataCfPoll,
    NoDataCfAckCfPoll,
    Reserved,
}

impl FrameSubtype {
    pub fn resolve(frame_type: FrameType, subtype: u8) -> Self {
        match (frame_type, subtype & 0x0f) {
            (FrameType::Management, 0) => FrameSubtype::AssociationRequest,
            (FrameType::Management, 1) => FrameSubtype::AssociationResponse,
            (FrameType::Management, 2) => FrameSubtype::ReassociationRequest,
            (FrameType::Management, 3) => FrameSubtype::ReassociationResponse,
            (FrameType::Management, 4) => FrameSubtype::ProbeRequest,
            (FrameType::Management, 5) => FrameSubtype::ProbeResponse,
            (FrameType::Management, 8) => FrameSubtype::Beacon,
            (FrameType::Management, 9) => FrameSubtype::Atim,
            (FrameType::Management, 10) => FrameSubtype::Disassociation,
            (FrameType::Management, 11) => FrameSubtype::Authentication,
            (FrameType::Management, 12) => FrameSubtype::Deauthentication,
            (FrameType::Control, 10) => FrameSubtype::PowerSavePoll,
            (FrameType::Control, 11) => FrameSubtype::RequestToSend,
            (FrameType::Control, 12) => FrameSubtype::ClearToSend,
            (FrameType::Control, 13) => FrameSubtype::Acknowledgment,
            (FrameType::Control, 14) => FrameSubtype::CfEnd,
            (FrameType::Control, 15) => FrameSubtype::CfEndCfAck,
            (FrameType::Data, 0) => FrameSubtype::Data,
            (FrameType::Data, 1) => FrameSubtype::DataCfAck,
            (FrameType::Data, 2) => FrameSubtype::DataCfPoll,
            (FrameType::Data, 3) => FrameSubtype::DataCfAckCfPoll,
            (FrameType::Data, 4) => FrameSubtype::NoData,
            (FrameType::Data, 5) => FrameSubtype::NoDataCfAck,
            (FrameType::Data, 6) => FrameSubtype::NoDataCfPoll,
            (FrameType::Data, 7) => FrameSubtype::NoDataCfAckCfPoll,
            _ => FrameSubtype::Reserved,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            FrameSubtype::AssociationRequest => "association request",
            FrameSubtype::AssociationResponse => "association response",
            FrameSubtype::ReassociationRequest => "reassociation request",
            FrameSubtype::ReassociationResponse => "reassociation response",
            FrameSubtype::ProbeRequest => "probe request",
            FrameSubtype::ProbeResponse => "probe response",
            FrameSubtype::Beacon => "beacon",
            FrameSubtype::Atim => "announcement traffic indication message",
            FrameSubtype::Disassociation => "disassociation",
            FrameSubtype::Authentication => "authentication",
            FrameSubtype::Deauthentication => "deauthentication",
            FrameSubtype::PowerSavePoll => "power save",
            FrameSubtype::RequestToSend => "request to send",
            FrameSubtype::ClearToSend => "clear to send",
            FrameSubtype::Acknowledgment => "acknowledgment",
            FrameSubtype::CfEnd => "contention free end",
            FrameSubtype::CfEndCfAck => "contention free end + ack",
            FrameSubtype::Data => "data",
            FrameSubtype::DataCfAck => "data + CF-Ack",
            FrameSubtype::DataCfPoll => "data + CF-Poll",
            FrameSubtype::DataCfAckCfPoll => "data + CF-Ack + CF-Poll",
            FrameSubtype::NoData => "no data (null function)",
            FrameSubtype::NoDataCfAck => "no data + CF-Ack",
            FrameSubtype::NoDataCfPoll => "no data + CF-Poll",
            FrameSubtype::NoDataCfAckCfPoll => "no data + CF-Ack + CF-Poll",
            FrameSubtype::Reserved => "reserved",
        }
    }
}

/// Decoded frame-control field.
///
/// The two wire bytes are read as one little-endian `u16`: version at bits
/// 1-2, type at bits 3-4, subtype at bits 5-8 and single-bit flags at 9-15.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FrameControl {
    pub raw: u16,
    pub protocol_version: u8,
    pub frame_type: FrameType,
    pub subtype: FrameSubtype,
    pub to_ds: bool,
    pub from_ds: bool,
    pub more_fragments: bool,
    pub retry: bool,
    pub power_management: bool,
    pub more_data: bool,
    pub protected_frame: bool,
}

impl FrameControl {
    pub fn from_raw(raw: u16) -> Self {
        let frame_type = FrameType::from_bits(field(raw, layout::TYPE_SHIFT, layout::TYPE_MASK));
        let subtype = FrameSubtype::resolve(
            frame_type,
            field(raw, layout::SUBTYPE_SHIFT, layout::SUBTYPE_MASK),
        );
        Self {
            raw,
            protocol_version: field(raw, layout::VERSION_SHIFT, layout::VERSION_MASK),
            frame_type,
            subtype,
            to_ds: bit(raw, layout::TO_DS_BIT),
            from_ds: bit(raw, layout::FROM_DS_BIT),
            more_fragments: bit(raw, layout::MORE_FRAGMENTS_BIT),
            retry: bit(raw, layout::RETRY_BIT),
            power_management: bit(raw, layout::POWER_MANAGEMENT_BIT),
            more_data: bit(raw, layout::MORE_DATA_BIT),
            protected_frame: bit(raw, layout::PROTECTED_FRAME_BIT),
        }
    }

    pub fn from_bytes(bytes: [u8; 2]) -> Self {
        Self::from_raw(u16::from_le_bytes(bytes))
    }

    /// `"<type> <subtype>"`, e.g. `"management beacon"`.
    pub fn kind(&self) -> String {
        format!("{} {}", self.frame_type.as_str(), self.subtype.as_str())
    }
}

/// Decode frame control from the first two bytes of `data`.
pub fn decode_frame_control(data: &[u8]) -> Result<FrameControl, FrameError> {
    let reader = FrameReader::new(data);
    reader.require_len(layout::FRAME_CONTROL_RANGE.end)?;
    let raw = reader.read_u16_le(layout::FRAME_CONTROL_RANGE.clone())?;
    Ok(FrameControl::from_raw(raw))
}

fn field(raw: u16, shift: u16, mask: u16) -> u8 {
    ((raw >> shift) & mask) as u8
}

fn bit(raw: u16, position: u16) -> bool {
    (raw >> position) & 0x01 == 1
}

#[cfg(test)]
mod tests {
    use super::{FrameControl, FrameSubtype, FrameType, decode_frame_control};
    use crate::protocols::ieee80211::error::FrameError;

    #[test]
    fn fixture_0x0880() {
        // Bytes on the wire are 0x80, 0x08.
        let fc = FrameControl::from_bytes([0x80, 0x08]);
        assert_eq!(fc.raw, 0x0880);
        assert_eq!(fc.protocol_version, 0);
        assert_eq!(fc.frame_type, FrameType::Management);
        assert_eq!(fc.subtype, FrameSubtype::ProbeRequest);
        assert!(!fc.to_ds);
        assert!(!fc.from_ds);
        assert!(fc.more_fragments);
        assert!(!fc.retry);
        assert!(!fc.power_management);
        assert!(!fc.more_data);
        assert!(!fc.protected_frame);
    }

    #[test]
    fn fixture_0x0800() {
        let fc = FrameControl::from_bytes([0x00, 0x08]);
        assert_eq!(fc.raw, 0x0800);
        assert_eq!(fc.frame_type, FrameType::Management);
        assert_eq!(fc.subtype, FrameSubtype::AssociationRequest);
        assert!(fc.more_fragments);
        assert!(!fc.to_ds);
    }

    #[test]
    fn each_flag_bit() {
        let cases: [(u16, fn(&FrameControl) -> bool); 7] = [
            (1 << 9, |fc| fc.to_ds),
            (1 << 10, |fc| fc.from_ds),
            (1 << 11, |fc| fc.more_fragments),
            (1 << 12, |fc| fc.retry),
            (1 << 13, |fc| fc.power_management),
            (1 << 14, |fc| fc.more_data),
            (1 << 15, |fc| fc.protected_frame),
        ];
        for (raw, flag) in cases {
            let fc = FrameControl::from_raw(raw);
            assert!(flag(&fc), "bit for {raw:#06x} not decoded");
        }
        let all = FrameControl::from_raw(0xfe00);
        assert!(all.to_ds && all.from_ds && all.retry && all.protected_frame);
    }

    #[test]
    fn version_type_and_subtype_offsets() {
        let fc = FrameControl::from_raw((0b10 << 1) | (0b10 << 3) | (0b0011 << 5));
        assert_eq!(fc.protocol_version, 2);
        assert_eq!(fc.frame_type, FrameType::Data);
        assert_eq!(fc.subtype, FrameSubtype::DataCfAckCfPoll);
    }

    #[test]
    fn management_beacon_and_probe_response() {
        assert_eq!(
            FrameControl::from_bytes([0x00, 0x01]).subtype,
            FrameSubtype::Beacon
        );
        assert_eq!(
            FrameControl::from_bytes([0xa0, 0x00]).subtype,
            FrameSubtype::ProbeResponse
        );
    }

    #[test]
    fn control_acknowledgment() {
        let fc = FrameControl::from_raw((1 << 3) | (13 << 5));
        assert_eq!(fc.frame_type, FrameType::Control);
        assert_eq!(fc.subtype, FrameSubtype::Acknowledgment);
        assert_eq!(fc.kind(), "control acknowledgment");
    }

    #[test]
    fn unassigned_pairs_fall_back_to_reserved() {
        assert_eq!(
            FrameControl::from_raw(6 << 5).subtype,
            FrameSubtype::Reserved
        );
        assert_eq!(
            FrameControl::from_raw(1 << 3).subtype,
            FrameSubtype::Reserved
        );
        let fc = FrameControl::from_raw(3 << 3);
        assert_eq!(fc.frame_type, FrameType::Reserved);
        assert_eq!(fc.subtype, FrameSubtype::Reserved);
        assert_eq!(fc.kind(), "reserved reserved");
    }

    #[test]
    fn decode_requires_two_bytes() {
        let err = decode_frame_control(&[0x80]).unwrap_err();
        assert_eq!(err, FrameError::TooShort { needed: 2, actual: 1 });
        assert_eq!(decode_frame_control(&[0x80, 0x08]).unwrap().raw, 0x0880);
    }
}
