//! Byte-level builder for skeleton binaries in tests.

use std::collections::HashMap;

/// Region sizes standing in for an atlas.
pub type Sizes = HashMap<String, (u32, u32)>;

pub fn sizes(entries: &[(&str, u32, u32)]) -> Sizes {
    entries
        .iter()
        .map(|&(name, w, h)| (name.to_owned(), (w, h)))
        .collect()
}

/// Writer that builds a skeleton byte buffer. Fixed-width writes are big-endian.
#[derive(Default)]
pub struct SkelWriter {
    buf: Vec<u8>,
}

impl SkelWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn byte(&mut self, v: u8) -> &mut Self {
        self.buf.push(v);
        self
    }

    pub fn sbyte(&mut self, v: i8) -> &mut Self {
        self.byte(v as u8)
    }

    pub fn bool(&mut self, v: bool) -> &mut Self {
        self.byte(u8::from(v))
    }

    pub fn int(&mut self, v: i32) -> &mut Self {
        self.buf.extend_from_slice(&v.to_be_bytes());
        self
    }

    pub fn color(&mut self, rgba: u32) -> &mut Self {
        self.buf.extend_from_slice(&rgba.to_be_bytes());
        self
    }

    pub fn float(&mut self, v: f32) -> &mut Self {
        self.buf.extend_from_slice(&v.to_be_bytes());
        self
    }

    pub fn floats(&mut self, values: &[f32]) -> &mut Self {
        for &v in values {
            self.float(v);
        }
        self
    }

    pub fn varint(&mut self, v: u32) -> &mut Self {
        let mut v = v;
        while v >= 0x80 {
            self.buf.push((v as u8 & 0x7F) | 0x80);
            v >>= 7;
        }
        self.buf.push(v as u8);
        self
    }

    pub fn signed_varint(&mut self, v: i32) -> &mut Self {
        self.varint(((v << 1) ^ (v >> 31)) as u32)
    }

    /// `None` encodes the null string.
    pub fn string(&mut self, s: Option<&str>) -> &mut Self {
        match s {
            None => self.varint(0),
            Some(s) => {
                self.varint(s.len() as u32 + 1);
                self.buf.extend_from_slice(s.as_bytes());
                self
            }
        }
    }

    pub fn name(&mut self, s: &str) -> &mut Self {
        self.string(Some(s))
    }

    pub fn shorts(&mut self, values: &[u16]) -> &mut Self {
        self.varint(values.len() as u32);
        for &v in values {
            self.buf.extend_from_slice(&v.to_be_bytes());
        }
        self
    }

    pub fn bytes(&mut self, bytes: &[u8]) -> &mut Self {
        self.buf.extend_from_slice(bytes);
        self
    }

    /// Header for a 3.5.25 skeleton. Nonessential headers carry fps and an images path.
    pub fn header(&mut self, nonessential: bool) -> &mut Self {
        self.name("hash123")
            .name("3.5.25")
            .float(640.0)
            .float(480.0)
            .bool(nonessential);
        if nonessential {
            self.float(30.0).name("./images/");
        }
        self
    }

    /// Bone with every field at its default.
    pub fn default_bone(&mut self, name: &str, parent: Option<u32>, nonessential: bool) -> &mut Self {
        self.name(name);
        if let Some(parent) = parent {
            self.varint(parent);
        }
        self.floats(&[0.0, 0.0, 0.0, 1.0, 1.0, 0.0, 0.0, 0.0]).varint(0);
        if nonessential {
            self.int(-1);
        }
        self
    }

    /// Slot with white color, no attachment and normal blending.
    pub fn default_slot(&mut self, name: &str, bone: u32) -> &mut Self {
        self.name(name)
            .varint(bone)
            .color(0xFFFFFFFF)
            .string(None)
            .varint(0)
    }

    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn finish(&mut self) -> Vec<u8> {
        std::mem::take(&mut self.buf)
    }
}
