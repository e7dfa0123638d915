use super::error::FrameError;
use super::layout;
use super::mac::MacAddr;

pub struct FrameReader<'a> {
    payload: &'a [u8],
}

impl<'a> FrameReader<'a> {
    pub fn new(payload: &'a [u8]) -> Self {
        Self { payload }
    }

    pub fn require_len(&self, needed: usize) -> Result<(), FrameError> {
        if self.payload.len() < needed {
            return Err(FrameError::TooShort {
                needed,
                actual: self.payload.len(),
            });
        }
        Ok(())
    }

    pub fn has(&self, range: &std::ops::Range<usize>) -> bool {
        self.payload.len() >= range.end
    }

    pub fn read_slice(&self, range: std::ops::Range<usize>) -> Result<&'a [u8], FrameError> {
        self.payload.get(range.clone()).ok_or(FrameError::TooShort {
            needed: range.end,
            actual: self.payload.len(),
        })
    }

    pub fn read_u16_le(&self, range: std::ops::Range<usize>) -> Result<u16, FrameError> {
        let bytes = self.read_slice(range)?;
        if bytes.len() != 2 {
            return Err(FrameError::TooShort {
                needed: 2,
                actual: bytes.len(),
            });
        }
        Ok(u16::from_le_bytes([bytes[0], bytes[1]]))
    }

    pub fn read_u64_le(&self, range: std::ops::Range<usize>) -> Result<u64, FrameError> {
        let bytes = self.read_slice(range)?;
        let array: [u8; 8] = bytes.try_into().map_err(|_| FrameError::TooShort {
            needed: 8,
            actual: bytes.len(),
        })?;
        Ok(u64::from_le_bytes(array))
    }

    pub fn read_mac(&self, range: std::ops::Range<usize>) -> Result<MacAddr, FrameError> {
        let bytes = self.read_slice(range)?;
        MacAddr::from_slice(bytes).ok_or(FrameError::TooShort {
            needed: layout::MAC_ADDR_LEN,
            actual: bytes.len(),
        })
    }

    /// Like `read_mac`, but `None` when the frame ends before the range.
    pub fn read_optional_mac(
        &self,
        range: std::ops::Range<usize>,
    ) -> Result<Option<MacAddr>, FrameError> {
        if !self.has(&range) {
            return Ok(None);
        }
        self.read_mac(range).map(Some)
    }

    pub fn read_rest(&self, offset: usize) -> &'a [u8] {
        self.payload.get(offset..).unwrap_or_default()
    }
}
