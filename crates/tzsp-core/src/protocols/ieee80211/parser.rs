use serde::Serialize;

use super::error::FrameError;
use super::frame_control::{FrameControl, FrameSubtype, FrameType};
use super::layout;
use super::mac::MacAddr;
use super::reader::FrameReader;
use super::tags::{Tags, decode_tags};

/// Frame body with the fixed parameters and IEs of beacon/probe frames.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FrameBody {
    pub raw: Vec<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub beacon_interval: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capability_info: Option<u16>,
    pub tags: Tags,
}

/// Decoded 802.11 MAC frame.
///
/// Header fields past address 1 are `None` when the capture ends first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Frame {
    pub frame_control: FrameControl,
    pub duration_id: u16,
    pub address1: MacAddr,
    pub address2: Option<MacAddr>,
    pub address3: Option<MacAddr>,
    /// Sequence number; the fragment-number bits are shifted out.
    pub sequence_control: Option<u16>,
    pub address4: Option<MacAddr>,
    pub body: FrameBody,
}

/// Decode an 802.11 MAC frame carried as TZSP payload.
///
/// # Examples
/// ```
/// use tzsp_core::{FrameSubtype, decode_frame};
///
/// let mut bytes = vec![0x00, 0x01, 0x00, 0x00];
/// bytes.extend_from_slice(&[0xff; 6]);
/// let frame = decode_frame(&bytes)?;
/// assert_eq!(frame.frame_control.subtype, FrameSubtype::Beacon);
/// assert!(frame.address1.is_broadcast());
/// assert!(frame.address2.is_none());
/// # Ok::<(), tzsp_core::FrameError>(())
/// ```
///
/// # Errors
/// Fails only when fewer than 10 bytes (frame control, duration/ID and
/// address 1) are present.
pub fn decode_frame(data: &[u8]) -> Result<Frame, FrameError> {
    let reader = FrameReader::new(data);
    reader.require_len(layout::MIN_LEN)?;

    let frame_control = FrameControl::from_raw(
        reader.read_u16_le(layout::FRAME_CONTROL_RANGE.clone())?,
    );
    let duration_id = reader.read_u16_le(layout::DURATION_ID_RANGE.clone())?;
    let address1 = reader.read_mac(layout::ADDRESS1_RANGE.clone())?;
    let mut body_offset = layout::ADDRESS1_RANGE.end;

    let address2 = reader.read_optional_mac(layout::ADDRESS2_RANGE.clone())?;
    if address2.is_some() {
        body_offset = layout::ADDRESS2_RANGE.end;
    }
    let address3 = reader.read_optional_mac(layout::ADDRESS3_RANGE.clone())?;
    if address3.is_some() {
        body_offset = layout::ADDRESS3_RANGE.end;
    }

    let sequence_control = if reader.has(&layout::SEQUENCE_CONTROL_RANGE) {
        body_offset = layout::SEQUENCE_CONTROL_RANGE.end;
        let raw = reader.read_u16_le(layout::SEQUENCE_CONTROL_RANGE.clone())?;
        Some(raw >> layout::SEQUENCE_NUMBER_SHIFT)
    } else {
        None
    };

    let address4 = if frame_control.frame_type == FrameType::Data {
        reader.read_optional_mac(layout::ADDRESS4_RANGE.clone())?
    } else {
        None
    };
    if address4.is_some() {
        body_offset = layout::ADDRESS4_RANGE.end;
    }

    let body = decode_body(frame_control.subtype, reader.read_rest(body_offset))?;

    Ok(Frame {
        frame_control,
        duration_id,
        address1,
        address2,
        address3,
        sequence_control,
        address4,
        body,
    })
}

fn decode_body(subtype: FrameSubtype, raw: &[u8]) -> Result<FrameBody, FrameError> {
    let mut body = FrameBody {
        raw: raw.to_vec(),
        ..FrameBody::default()
    };
    match subtype {
        FrameSubtype::Beacon | FrameSubtype::ProbeResponse
            if raw.len() >= layout::FIXED_PARAMETERS_LEN =>
        {
            let reader = FrameReader::new(raw);
            body.timestamp = Some(reader.read_u64_le(layout::TIMESTAMP_RANGE.clone())?);
            body.beacon_interval =
                Some(reader.read_u16_le(layout::BEACON_INTERVAL_RANGE.clone())?);
            body.capability_info =
                Some(reader.read_u16_le(layout::CAPABILITY_INFO_RANGE.clone())?);
            body.tags = decode_tags(reader.read_rest(layout::FIXED_PARAMETERS_LEN));
        }
        FrameSubtype::ProbeRequest => {
            body.tags = decode_tags(raw);
        }
        _ => {}
    }
    Ok(body)
}
