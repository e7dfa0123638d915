use super::error::TzspError;

pub struct TzspReader<'a> {
    payload: &'a [u8],
}

impl<'a> TzspReader<'a> {
    pub fn new(payload: &'a [u8]) -> Self {
        Self { payload }
    }

    pub fn len(&self) -> usize {
        self.payload.len()
    }

    pub fn require_len(&self, needed: usize) -> Result<(), TzspError> {
        if self.payload.len() < needed {
            return Err(TzspError::TooShort {
                needed,
                actual: self.payload.len(),
            });
        }
        Ok(())
    }

    pub fn read_u8(&self, offset: usize) -> Result<u8, TzspError> {
        self.payload
            .get(offset)
            .copied()
            .ok_or(TzspError::TooShort {
                needed: offset + 1,
                actual: self.payload.len(),
            })
    }

    pub fn read_u16_be(&self, range: std::ops::Range<usize>) -> Result<u16, TzspError> {
        let bytes = self.read_slice(range)?;
        if bytes.len() != 2 {
            return Err(TzspError::TooShort {
                needed: 2,
                actual: bytes.len(),
            });
        }
        Ok(u16::from_be_bytes([bytes[0], bytes[1]]))
    }

    pub fn read_slice(&self, range: std::ops::Range<usize>) -> Result<&'a [u8], TzspError> {
        self.payload.get(range.clone()).ok_or(TzspError::TooShort {
            needed: range.end,
            actual: self.payload.len(),
        })
    }

    /// Bytes from `offset` to the end; empty when `offset` is exactly the length.
    pub fn read_rest(&self, offset: usize) -> Result<&'a [u8], TzspError> {
        self.payload.get(offset..).ok_or(TzspError::TooShort {
            needed: offset,
            actual: self.payload.len(),
        })
    }
}
