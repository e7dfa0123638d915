//! Loggable projections of decoded packets.
//!
//! A `PacketSummary` flattens the tagged fields a collector cares about
//! (signal, rate, channel, FCS status, frame length) and, for 802.11
//! payloads, the addressing and SSID of the carried frame. Fields whose data
//! is missing are left out rather than guessed.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::protocols::ieee80211::{Frame, decode_frame};
use crate::protocols::tzsp::{EncapsulatedProtocol, FieldType, Packet, TaggedField, rate_label};

/// Flattened view of one TZSP packet.
///
/// # Examples
/// ```
/// use tzsp_core::{PacketSummary, decode_packet};
///
/// let packet = decode_packet(&[0x01, 0x00, 0x00, 0x01, 0x0a, 0x01, 0xc4, 0x12, 0x01, 0x06, 0x01])?;
/// let summary = PacketSummary::from_packet(&packet);
/// assert_eq!(summary.signal_dbm, Some(-60));
/// assert_eq!(summary.channel, Some(6));
/// # Ok::<(), tzsp_core::TzspError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PacketSummary {
    pub header_type: String,
    pub protocol: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub signal_dbm: Option<i8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub snr: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rate: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fcs_ok: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channel: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frame_length: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub packet_count: Option<u32>,
    /// Remaining fields keyed by their two-digit hex code.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub extra: BTreeMap<String, String>,
    pub payload_len: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frame: Option<FrameSummary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frame_error: Option<String>,
}

/// Addressing and identity of an 802.11 payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrameSummary {
    pub kind: String,
    pub destination: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bss_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seq: Option<u16>,
    pub duration_id: u16,
    pub to_ds: bool,
    pub from_ds: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub addr4: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ssid: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub beacon_interval: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channel: Option<u8>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub supported_rates: Vec<String>,
}

impl PacketSummary {
    pub fn from_packet(packet: &Packet) -> Self {
        let mut summary = Self {
            header_type: packet.header.header_type.as_str().to_string(),
            protocol: packet.header.encapsulated_protocol.as_str().to_string(),
            signal_dbm: None,
            snr: None,
            rate: None,
            fcs_ok: None,
            channel: None,
            frame_length: None,
            packet_count: None,
            extra: BTreeMap::new(),
            payload_len: packet.data.len(),
            frame: None,
            frame_error: None,
        };

        for field in &packet.tagged_fields {
            summary.apply_field(field);
        }

        if packet.header.encapsulated_protocol == EncapsulatedProtocol::Ieee80211
            && !packet.data.is_empty()
        {
            match decode_frame(&packet.data) {
                Ok(frame) => summary.frame = Some(FrameSummary::from_frame(&frame)),
                Err(err) => summary.frame_error = Some(err.to_string()),
            }
        }
        summary
    }

    fn apply_field(&mut self, field: &TaggedField) {
        let first = field.data.first().copied();
        match field.tag_type {
            FieldType::Padding | FieldType::End => {}
            // Two's complement: 0xc4 is -60 dBm, 0x05 stays 5.
            FieldType::RawRssi if first.is_some() => {
                self.signal_dbm = first.map(|value| value as i8);
            }
            FieldType::Snr if first.is_some() => self.snr = first,
            FieldType::DataRate if first.is_some() => self.rate = first.map(rate_label),
            FieldType::FcsError if first.is_some() => self.fcs_ok = first.map(|value| value == 0),
            FieldType::RxChannel if first.is_some() => self.channel = first,
            FieldType::RxFrameLength if field.data.len() >= 2 => {
                self.frame_length = Some(u16::from_be_bytes([field.data[0], field.data[1]]));
            }
            FieldType::PacketCount if field.data.len() >= 4 => {
                self.packet_count = Some(u32::from_be_bytes([
                    field.data[0],
                    field.data[1],
                    field.data[2],
                    field.data[3],
                ]));
            }
            other => {
                self.extra
                    .insert(format!("{:02x}", other.code()), hex_string(&field.data));
            }
        }
    }
}

impl FrameSummary {
    pub fn from_frame(frame: &Frame) -> Self {
        let tags = &frame.body.tags;
        Self {
            kind: frame.frame_control.kind(),
            destination: frame.address1.to_string(),
            source: frame.address2.map(|mac| mac.to_string()),
            bss_id: frame.address3.map(|mac| mac.to_string()),
            seq: frame.sequence_control,
            duration_id: frame.duration_id,
            to_ds: frame.frame_control.to_ds,
            from_ds: frame.frame_control.from_ds,
            addr4: frame.address4.map(|mac| mac.to_string()),
            ssid: tags.ssid(),
            beacon_interval: frame.body.beacon_interval,
            channel: tags.channel(),
            supported_rates: tags.supported_rates(),
        }
    }
}

fn hex_string(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{:02x}", b)).collect()
}

#[cfg(test)]
mod tests {
    use super::PacketSummary;
    use crate::protocols::tzsp::decode_packet;

    fn beacon_payload() -> Vec<u8> {
        let mut bytes = vec![0x00, 0x01, 0x00, 0x00];
        bytes.extend_from_slice(&[0xff; 6]);
        bytes.extend_from_slice(&[0x02, 0x00, 0x00, 0x00, 0x00, 0x01]);
        bytes.extend_from_slice(&[0x02, 0x00, 0x00, 0x00, 0x00, 0x01]);
        bytes.extend_from_slice(&0x0050u16.to_le_bytes());
        bytes.extend_from_slice(&[0u8; 8]);
        bytes.extend_from_slice(&100u16.to_le_bytes());
        bytes.extend_from_slice(&0x0001u16.to_le_bytes());
        bytes.extend_from_slice(&[0x00, 0x04, b'c', b'a', b'f', b'e']);
        bytes.extend_from_slice(&[0x01, 0x02, 0x82, 0x0c]);
        bytes.extend_from_slice(&[0x03, 0x01, 0x0b]);
        bytes
    }

    #[test]
    fn summary_of_wireless_packet() {
        let mut bytes = vec![0x01, 0x00, 0x00, 0x12];
        bytes.extend_from_slice(&[0x0a, 0x01, 0xb5]);
        bytes.extend_from_slice(&[0x0c, 0x01, 0x16]);
        bytes.extend_from_slice(&[0x11, 0x01, 0x00]);
        bytes.extend_from_slice(&[0x29, 0x02, 0x00, 0x3b]);
        bytes.extend_from_slice(&[0x0d, 0x02, 0xbe, 0xef]);
        bytes.push(0x01);
        bytes.extend_from_slice(&beacon_payload());

        let packet = decode_packet(&bytes).unwrap();
        let summary = PacketSummary::from_packet(&packet);
        assert_eq!(summary.header_type, "received tag list");
        assert_eq!(summary.protocol, "ieee802.11");
        assert_eq!(summary.signal_dbm, Some(-75));
        assert_eq!(summary.rate.as_deref(), Some("11MB/s"));
        assert_eq!(summary.fcs_ok, Some(true));
        assert_eq!(summary.frame_length, Some(59));
        assert_eq!(summary.extra.get("0d").map(String::as_str), Some("beef"));

        let frame = summary.frame.expect("frame summary");
        assert_eq!(frame.kind, "management beacon");
        assert_eq!(frame.destination, "ff:ff:ff:ff:ff:ff");
        assert_eq!(frame.source.as_deref(), Some("02:00:00:00:00:01"));
        assert_eq!(frame.seq, Some(5));
        assert_eq!(frame.ssid.as_deref(), Some("cafe"));
        assert_eq!(frame.beacon_interval, Some(100));
        assert_eq!(frame.channel, Some(11));
        assert_eq!(frame.supported_rates, vec!["1MB/s", "6MB/s"]);
    }

    #[test]
    fn short_wireless_payload_reports_frame_error() {
        let packet = decode_packet(&[0x01, 0x00, 0x00, 0x12, 0x01, 0x08, 0x00]).unwrap();
        let summary = PacketSummary::from_packet(&packet);
        assert!(summary.frame.is_none());
        assert!(summary.frame_error.unwrap().contains("frame too short"));
    }

    #[test]
    fn ethernet_payload_is_not_decoded_as_frame() {
        let packet = decode_packet(&[0x01, 0x00, 0x00, 0x01, 0x01, 0xde, 0xad]).unwrap();
        let summary = PacketSummary::from_packet(&packet);
        assert_eq!(summary.payload_len, 2);
        assert!(summary.frame.is_none());
        assert!(summary.frame_error.is_none());
    }

    #[test]
    fn empty_field_data_is_skipped() {
        let packet = decode_packet(&[0x01, 0x00, 0x00, 0x01, 0x0a, 0x00, 0x29, 0x01, 0x05, 0x01])
            .unwrap();
        let summary = PacketSummary::from_packet(&packet);
        assert_eq!(summary.signal_dbm, None);
        assert_eq!(summary.frame_length, None);
        assert_eq!(summary.extra.get("0a").map(String::as_str), Some(""));
        assert_eq!(summary.extra.get("29").map(String::as_str), Some("05"));
    }

    #[test]
    fn signal_is_read_as_signed_byte() {
        for (raw, expected) in [(0xc4u8, -60i8), (0x80, -128), (0xff, -1), (0x05, 5), (0x00, 0)] {
            let packet = decode_packet(&[0x01, 0x00, 0x00, 0x01, 0x0a, 0x01, raw, 0x01]).unwrap();
            assert_eq!(
                PacketSummary::from_packet(&packet).signal_dbm,
                Some(expected),
                "raw {raw:#04x}"
            );
        }
    }

    #[test]
    fn optional_fields_are_omitted_from_json() {
        let packet = decode_packet(&[0x01, 0x04, 0x00, 0x01]).unwrap();
        let value = serde_json::to_value(PacketSummary::from_packet(&packet)).unwrap();
        assert_eq!(value["header_type"], "keepalive");
        assert!(value.get("signal_dbm").is_none());
        assert!(value.get("extra").is_none());
        assert!(value.get("frame").is_none());
    }
}
