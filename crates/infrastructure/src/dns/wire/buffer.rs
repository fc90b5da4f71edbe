use chicken_dns_domain::DomainError;

/// Largest message accepted or produced (RFC 1035 section 2.3.4, UDP).
pub const MAX_MESSAGE_LEN: usize = 512;

/// Fixed-capacity byte storage with a logical length.
///
/// Reads are bounded by the logical length, writes by the capacity. Offsets
/// passed to the field accessors are in bits from the start of the buffer and
/// fields are big-endian.
#[derive(Debug, Clone)]
pub struct MessageBuffer {
    data: [u8; MAX_MESSAGE_LEN],
    len: usize,
}

impl Default for MessageBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl MessageBuffer {
    pub fn new() -> Self {
        Self {
            data: [0u8; MAX_MESSAGE_LEN],
            len: 0,
        }
    }

    pub fn from_slice(bytes: &[u8]) -> Result<Self, DomainError> {
        let mut buffer = Self::new();
        buffer.append_slice(bytes)?;
        Ok(buffer)
    }

    /// Copies the first `len` bytes of `other`.
    pub fn from_prefix(other: &MessageBuffer, len: usize) -> Result<Self, DomainError> {
        let bytes = other.slice(0, len)?;
        Self::from_slice(bytes)
    }

    pub const fn capacity(&self) -> usize {
        MAX_MESSAGE_LEN
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn remaining(&self) -> usize {
        MAX_MESSAGE_LEN - self.len
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data[..self.len]
    }

    pub(crate) fn data_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// `len` bytes starting at byte `start`, all within the logical length.
    pub(crate) fn slice(&self, start: usize, len: usize) -> Result<&[u8], DomainError> {
        self.check_read(start * 8, len * 8)?;
        Ok(&self.data[start..start + len])
    }

    fn check_read(&self, bit_offset: usize, width: usize) -> Result<(), DomainError> {
        if bit_offset + width > self.len * 8 {
            return Err(DomainError::OutOfRange {
                bit_offset,
                width,
                len: self.len,
            });
        }
        Ok(())
    }

    fn check_capacity(&self, required: usize) -> Result<(), DomainError> {
        if required > MAX_MESSAGE_LEN {
            return Err(DomainError::CapacityExceeded {
                required,
                capacity: MAX_MESSAGE_LEN,
            });
        }
        Ok(())
    }

    pub fn read_bit(&self, bit_offset: usize) -> Result<bool, DomainError> {
        Ok(self.read_bits(bit_offset, 1)? == 1)
    }

    /// Reads `width` (1..=32) bits, most significant first.
    pub fn read_bits(&self, bit_offset: usize, width: usize) -> Result<u32, DomainError> {
        debug_assert!((1..=32).contains(&width));
        self.check_read(bit_offset, width)?;

        let mut value = 0u32;
        for bit in bit_offset..bit_offset + width {
            let set = (self.data[bit / 8] >> (7 - bit % 8)) & 1;
            value = (value << 1) | u32::from(set);
        }
        Ok(value)
    }

    pub fn read_u8(&self, bit_offset: usize) -> Result<u8, DomainError> {
        Ok(self.read_bits(bit_offset, 8)? as u8)
    }

    pub fn read_u16(&self, bit_offset: usize) -> Result<u16, DomainError> {
        if bit_offset % 8 == 0 {
            let bytes = self.slice(bit_offset / 8, 2)?;
            return Ok(u16::from_be_bytes([bytes[0], bytes[1]]));
        }
        Ok(self.read_bits(bit_offset, 16)? as u16)
    }

    pub fn read_u32(&self, bit_offset: usize) -> Result<u32, DomainError> {
        if bit_offset % 8 == 0 {
            let bytes = self.slice(bit_offset / 8, 4)?;
            return Ok(u32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]));
        }
        self.read_bits(bit_offset, 32)
    }

    /// Writes the low `width` bits of `value` in place. The logical length
    /// grows to cover the field if needed.
    pub fn write_bits(
        &mut self,
        bit_offset: usize,
        width: usize,
        value: u32,
    ) -> Result<(), DomainError> {
        debug_assert!((1..=32).contains(&width));
        let end = (bit_offset + width).div_ceil(8);
        self.check_capacity(end)?;

        for (i, bit) in (bit_offset..bit_offset + width).enumerate() {
            let mask = 0x80u8 >> (bit % 8);
            if (value >> (width - 1 - i)) & 1 == 1 {
                self.data[bit / 8] |= mask;
            } else {
                self.data[bit / 8] &= !mask;
            }
        }

        self.len = self.len.max(end);
        Ok(())
    }

    pub fn set_bit(&mut self, bit_offset: usize, value: bool) -> Result<(), DomainError> {
        self.write_bits(bit_offset, 1, u32::from(value))
    }

    pub fn write_u16(&mut self, value: u16, bit_offset: usize) -> Result<(), DomainError> {
        self.write_bits(bit_offset, 16, u32::from(value))
    }

    pub fn write_u32(&mut self, value: u32, bit_offset: usize) -> Result<(), DomainError> {
        self.write_bits(bit_offset, 32, value)
    }

    pub fn append_u8(&mut self, value: u8) -> Result<(), DomainError> {
        self.append_slice(&[value])
    }

    pub fn append_u16(&mut self, value: u16) -> Result<(), DomainError> {
        self.append_slice(&value.to_be_bytes())
    }

    pub fn append_u32(&mut self, value: u32) -> Result<(), DomainError> {
        self.append_slice(&value.to_be_bytes())
    }

    pub fn append_slice(&mut self, bytes: &[u8]) -> Result<(), DomainError> {
        let end = self.len + bytes.len();
        self.check_capacity(end)?;
        self.data[self.len..end].copy_from_slice(bytes);
        self.len = end;
        Ok(())
    }

    /// Grows the logical length to `len`; never shrinks it.
    pub fn ensure_length(&mut self, len: usize) -> Result<(), DomainError> {
        self.check_capacity(len)?;
        self.len = self.len.max(len);
        Ok(())
    }

    /// Restores a length observed earlier, discarding a failed append.
    pub(crate) fn rollback(&mut self, len: usize) {
        debug_assert!(len <= self.len);
        let len = len.min(self.len);
        self.data[len..self.len].fill(0);
        self.len = len;
    }
}
