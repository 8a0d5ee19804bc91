//! Little-endian integer extraction from byte buffers

use crate::error::{Error, Result};

/// Read an unsigned 8-bit integer at `pos`
pub fn read_u8(data: &[u8], pos: usize, context: &'static str) -> Result<u8> {
    data.get(pos).copied().ok_or(Error::Truncated { context })
}

/// Read a little-endian unsigned 16-bit integer at `pos`
pub fn read_u16_le(data: &[u8], pos: usize, context: &'static str) -> Result<u16> {
    let bytes = take(data, pos, 2, context)?;
    Ok(u16::from_le_bytes([bytes[0], bytes[1]]))
}

/// Read a little-endian unsigned 32-bit integer at `pos`
pub fn read_u32_le(data: &[u8], pos: usize, context: &'static str) -> Result<u32> {
    let bytes = take(data, pos, 4, context)?;
    Ok(u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
}

/// Read a little-endian unsigned 64-bit integer at `pos`
pub fn read_u64_le(data: &[u8], pos: usize, context: &'static str) -> Result<u64> {
    let bytes = take(data, pos, 8, context)?;
    let mut buf = [0u8; 8];
    buf.copy_from_slice(bytes);
    Ok(u64::from_le_bytes(buf))
}

fn take<'a>(data: &'a [u8], pos: usize, len: usize, context: &'static str) -> Result<&'a [u8]> {
    let end = pos.checked_add(len).ok_or(Error::Truncated { context })?;
    data.get(pos..end).ok_or(Error::Truncated { context })
}

/// Sequential reader over a byte buffer
#[derive(Debug)]
pub struct ByteReader<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> ByteReader<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    /// Bytes not consumed yet
    pub fn remaining(&self) -> &'a [u8] {
        &self.data[self.pos.min(self.data.len())..]
    }

    pub fn take(&mut self, len: usize, context: &'static str) -> Result<&'a [u8]> {
        let bytes = take(self.data, self.pos, len, context)?;
        self.pos += len;
        Ok(bytes)
    }

    pub fn skip(&mut self, len: usize, context: &'static str) -> Result<()> {
        self.take(len, context).map(|_| ())
    }

    pub fn read_u8(&mut self, context: &'static str) -> Result<u8> {
        let v = read_u8(self.data, self.pos, context)?;
        self.pos += 1;
        Ok(v)
    }

    pub fn read_u16_le(&mut self, context: &'static str) -> Result<u16> {
        let v = read_u16_le(self.data, self.pos, context)?;
        self.pos += 2;
        Ok(v)
    }

    pub fn read_u32_le(&mut self, context: &'static str) -> Result<u32> {
        let v = read_u32_le(self.data, self.pos, context)?;
        self.pos += 4;
        Ok(v)
    }

    pub fn read_u64_le(&mut self, context: &'static str) -> Result<u64> {
        let v = read_u64_le(self.data, self.pos, context)?;
        self.pos += 8;
        Ok(v)
    }

    /// Read an exact-size array
    pub fn read_array<const N: usize>(&mut self, context: &'static str) -> Result<[u8; N]> {
        let mut out = [0u8; N];
        out.copy_from_slice(self.take(N, context)?);
        Ok(out)
    }
}

/// Decode a UTF-16LE string that ends at the first NUL code unit (or at the end of the buffer)
pub fn decode_utf16le_nul_terminated(bytes: &[u8]) -> String {
    let units: Vec<u16> = bytes
        .chunks_exact(2)
        .map(|pair| u16::from_le_bytes([pair[0], pair[1]]))
        .take_while(|&unit| unit != 0)
        .collect();
    String::from_utf16_lossy(&units)
}
