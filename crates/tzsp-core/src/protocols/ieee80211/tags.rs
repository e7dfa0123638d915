use serde::Serialize;
use tracing::debug;

use super::layout;
use crate::protocols::tzsp::rate::DataRate;

/// One information element from a frame body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Tag {
    pub tag_type: u8,
    pub length: u8,
    pub data: Vec<u8>,
}

/// Information elements in wire order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Tags(pub Vec<Tag>);

impl Tags {
    pub fn iter(&self) -> std::slice::Iter<'_, Tag> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn find(&self, tag_type: u8) -> Option<&Tag> {
        self.0.iter().find(|tag| tag.tag_type == tag_type)
    }

    /// Data of the first SSID element as text.
    ///
    /// # Examples
    /// ```
    /// use tzsp_core::decode_tags;
    ///
    /// let tags = decode_tags(&[0x00, 0x03, b'A', b'B', b'C', 0x01, 0x00]);
    /// assert_eq!(tags.ssid().as_deref(), Some("ABC"));
    /// ```
    pub fn ssid(&self) -> Option<String> {
        self.find(layout::IE_SSID)
            .map(|tag| String::from_utf8_lossy(&tag.data).into_owned())
    }

    /// Labels of the first supported-rates element, basic-rate flag masked.
    pub fn supported_rates(&self) -> Vec<String> {
        self.find(layout::IE_SUPPORTED_RATES)
            .map(|tag| {
                tag.data
                    .iter()
                    .map(|rate| DataRate(rate & !layout::RATE_BASIC_FLAG).to_string())
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Current channel from the DS parameter set element.
    pub fn channel(&self) -> Option<u8> {
        self.find(layout::IE_DS_PARAMETER_SET)
            .and_then(|tag| tag.data.first().copied())
    }
}

impl<'a> IntoIterator for &'a Tags {
    type Item = &'a Tag;
    type IntoIter = std::slice::Iter<'a, Tag>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Decode a length-prefixed IE region.
///
/// Iteration stops at the first element whose declared length runs past the
/// region; elements read before it are kept.
pub fn decode_tags(data: &[u8]) -> Tags {
    let mut tags = Vec::new();
    let mut rest = data;

    while rest.len() >= layout::IE_PREFIX_LEN {
        let tag_type = rest[0];
        let length = rest[1];
        let end = layout::IE_PREFIX_LEN + length as usize;
        let Some(value) = rest.get(layout::IE_PREFIX_LEN..end) else {
            debug!(
                tag_type,
                declared = length,
                remaining = rest.len() - layout::IE_PREFIX_LEN,
                "IE region truncated"
            );
            break;
        };
        tags.push(Tag {
            tag_type,
            length,
            data: value.to_vec(),
        });
        rest = &rest[end..];
    }

    Tags(tags)
}

#[cfg(test)]
mod tests {
    use super::{Tag, decode_tags};

    #[test]
    fn decode_ssid_and_empty_tag() {
        let tags = decode_tags(&[0x00, 0x03, b'A', b'B', b'C', 0x01, 0x00]);
        assert_eq!(tags.len(), 2);
        assert_eq!(
            tags.0[0],
            Tag {
                tag_type: 0,
                length: 3,
                data: b"ABC".to_vec()
            }
        );
        assert_eq!(tags.0[1].tag_type, 1);
        assert_eq!(tags.0[1].length, 0);
        assert!(tags.0[1].data.is_empty());
        assert_eq!(tags.ssid().as_deref(), Some("ABC"));
    }

    #[test]
    fn truncated_entry_keeps_earlier_tags() {
        let tags = decode_tags(&[0x00, 0x01, b'x', 0x03, 0x05, 0x01, 0x02]);
        assert_eq!(tags.len(), 1);
        assert_eq!(tags.ssid().as_deref(), Some("x"));
    }

    #[test]
    fn single_trailing_byte_is_ignored() {
        let tags = decode_tags(&[0x03, 0x01, 0x06, 0xdd]);
        assert_eq!(tags.len(), 1);
        assert_eq!(tags.channel(), Some(6));
    }

    #[test]
    fn ssid_absent() {
        let tags = decode_tags(&[0x03, 0x01, 0x0b]);
        assert_eq!(tags.ssid(), None);
        assert!(decode_tags(&[]).is_empty());
    }

    #[test]
    fn first_ssid_wins() {
        let tags = decode_tags(&[0x00, 0x01, b'a', 0x00, 0x01, b'b']);
        assert_eq!(tags.ssid().as_deref(), Some("a"));
    }

    #[test]
    fn supported_rates_mask_basic_flag() {
        let tags = decode_tags(&[0x01, 0x04, 0x82, 0x84, 0x8b, 0x6c]);
        assert_eq!(
            tags.supported_rates(),
            vec!["1MB/s", "2MB/s", "5.5MB/s", "54MB/s"]
        );
        assert!(decode_tags(&[]).supported_rates().is_empty());
    }
}
