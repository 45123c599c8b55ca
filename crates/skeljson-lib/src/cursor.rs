//! Primitive reads over a skeleton binary.
//!
//! Fixed-width numbers are big-endian. Counts, indices and a few integer
//! payloads use a 7-bit varint of at most five bytes.

use crate::error::{DecodeError, Result};

/// Maximum number of bytes in a varint.
const VARINT_MAX_BYTES: u32 = 5;

/// Read cursor over a byte slice.
#[derive(Clone, Debug)]
pub struct ByteCursor<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> ByteCursor<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    /// Bytes consumed so far.
    pub fn position(&self) -> usize {
        self.pos
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn is_at_end(&self) -> bool {
        self.pos >= self.data.len()
    }

    pub fn remaining(&self) -> usize {
        self.data.len().saturating_sub(self.pos)
    }

    /// Upper bound for preallocating `count` elements.
    ///
    /// Every element takes at least one byte, so a count larger than what is
    /// left cannot be honest and must not drive a huge allocation.
    pub fn capacity_hint(&self, count: usize) -> usize {
        count.min(self.remaining())
    }

    pub fn read_bytes(&mut self, n: usize) -> Result<&'a [u8]> {
        self.ensure(n)?;
        let slice = &self.data[self.pos..self.pos + n];
        self.pos += n;
        Ok(slice)
    }

    pub fn read_u8(&mut self) -> Result<u8> {
        self.ensure(1)?;
        let v = self.data[self.pos];
        self.pos += 1;
        Ok(v)
    }

    pub fn read_sbyte(&mut self) -> Result<i8> {
        Ok(self.read_u8()? as i8)
    }

    /// Any nonzero byte is true.
    pub fn read_bool(&mut self) -> Result<bool> {
        Ok(self.read_u8()? != 0)
    }

    pub fn read_i32(&mut self) -> Result<i32> {
        let bytes = self.read_bytes(4)?;
        Ok(i32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
    }

    pub fn read_u32(&mut self) -> Result<u32> {
        Ok(self.read_i32()? as u32)
    }

    pub fn read_f32(&mut self) -> Result<f32> {
        let bytes = self.read_bytes(4)?;
        Ok(f32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
    }

    /// Raw 32-bit varint accumulator.
    ///
    /// Seven bits per byte, low group first. The fifth byte ends the value
    /// regardless of its continuation bit, and bits shifted past 32 are lost.
    pub fn read_varint_raw(&mut self) -> Result<u32> {
        let mut value = 0u32;
        for i in 0..VARINT_MAX_BYTES {
            let byte = self.read_u8()?;
            value |= u32::from(byte & 0x7F) << (7 * i);
            if byte & 0x80 == 0 {
                break;
            }
        }
        Ok(value)
    }

    /// Varint read as `int32`. Signed values are zig-zag decoded.
    pub fn read_varint(&mut self, signed: bool) -> Result<i32> {
        let raw = self.read_varint_raw()?;
        if signed {
            Ok(((raw >> 1) as i32) ^ -((raw & 1) as i32))
        } else {
            Ok(raw as i32)
        }
    }

    /// Unsigned varint used as a count or a table index.
    pub fn read_count(&mut self) -> Result<usize> {
        Ok(self.read_varint_raw()? as usize)
    }

    /// Length-prefixed UTF-8 string.
    ///
    /// A stored length of 0 is null and 1 is the empty string. Otherwise
    /// `length - 1` bytes of UTF-8 follow.
    pub fn read_string(&mut self) -> Result<Option<String>> {
        let length = self.read_count()?;
        match length {
            0 => Ok(None),
            1 => Ok(Some(String::new())),
            _ => {
                let offset = self.pos;
                let bytes = self.read_bytes(length - 1)?;
                String::from_utf8(bytes.to_vec())
                    .map(Some)
                    .map_err(|source| DecodeError::InvalidUtf8 { offset, source })
            }
        }
    }

    /// Varint count followed by that many big-endian `u16`s.
    pub fn read_short_array(&mut self) -> Result<Vec<u16>> {
        let count = self.read_count()?;
        self.ensure(count.saturating_mul(2))?;
        let mut out = Vec::with_capacity(count);
        for _ in 0..count {
            let bytes = self.read_bytes(2)?;
            out.push(u16::from_be_bytes([bytes[0], bytes[1]]));
        }
        Ok(out)
    }

    /// `n` consecutive floats, each multiplied by `scale`.
    pub fn read_float_array(&mut self, n: usize, scale: f32) -> Result<Vec<f32>> {
        self.ensure(n.saturating_mul(4))?;
        let mut out = Vec::with_capacity(n);
        for _ in 0..n {
            out.push(self.read_f32()? * scale);
        }
        Ok(out)
    }

    fn ensure(&self, n: usize) -> Result<()> {
        let have = self.remaining();
        if have < n {
            return Err(DecodeError::Truncated {
                offset: self.pos,
                need: n,
                have,
            });
        }
        Ok(())
    }
}

/// Synthesized mesh edge list for a hull of `hull` vertices.
///
/// Produces `[0, 2, 2, 4, 4, ..., 2(h-1), 2(h-1), 0]`, i.e. `2h` entries
/// walking the hull and closing back to the first vertex. An empty hull has
/// no edges.
pub fn default_edge_loop(hull: usize) -> Vec<u32> {
    if hull == 0 {
        return Vec::new();
    }
    let mut edges = Vec::with_capacity(hull * 2);
    edges.push(0);
    for i in 1..hull {
        let index = (2 * i) as u32;
        edges.push(index);
        edges.push(index);
    }
    edges.push(0);
    edges
}
