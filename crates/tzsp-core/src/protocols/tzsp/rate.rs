use std::fmt;

/// Raw data-rate byte as carried in the `DataRate` tagged field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DataRate(pub u8);

impl DataRate {
    /// Human label for known codes, `None` otherwise.
    pub fn label(self) -> Option<&'static str> {
        let label = match self.0 {
            0x02 | 0x0a => "1MB/s",
            0x04 | 0x14 => "2MB/s",
            0x0b | 0x37 => "5.5MB/s",
            0x0c => "6MB/s",
            0x12 => "9MB/s",
            0x16 | 0x6e => "11MB/s",
            0x18 => "12MB/s",
            0x24 => "18MB/s",
            0x2c => "22MB/s",
            0x30 => "24MB/s",
            0x42 => "33MB/s",
            0x48 => "36MB/s",
            0x60 => "48MB/s",
            0x6c => "54MB/s",
            _ => return None,
        };
        Some(label)
    }
}

impl fmt::Display for DataRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.label() {
            Some(label) => f.write_str(label),
            None => write!(f, "unknown data rate: {}", self.0),
        }
    }
}

/// Label for a raw data-rate byte; unknown codes yield a descriptive string.
///
/// # Examples
/// ```
/// use tzsp_core::rate_label;
///
/// assert_eq!(rate_label(0x6c), "54MB/s");
/// assert_eq!(rate_label(0x01), "unknown data rate: 1");
/// ```
pub fn rate_label(value: u8) -> String {
    DataRate(value).to_string()
}
