//! Single-pass decoder for Spine 3.5 skeleton binaries.
//!
//! The byte stream has no framing: every record's length is implied by the
//! fields before it. Sections are read in a fixed order and each one fills the
//! name tables that later sections index into.

mod animation;
mod bones;
mod constraints;
mod curve;
mod events;
mod header;
mod skins;
mod slots;

#[cfg(test)]
mod skeleton_tests;
#[cfg(test)]
mod skins_tests;

use skeljson_core::utils::rgba_hex;
use skeljson_core::{NameKind, NameRegistry, RegionSizes};
use tracing::debug;

use crate::cursor::ByteCursor;
use crate::diagnostics::Diagnostics;
use crate::error::{DecodeError, Result};
use crate::model::{Mode, SkeletonDocument, SkeletonInfo};

/// Result of a successful decode.
#[derive(Debug, Clone)]
pub struct Decoded {
    pub document: SkeletonDocument,
    pub diagnostics: Diagnostics,
    /// Bytes read by the decoder.
    pub consumed: usize,
    /// Length of the input.
    pub total: usize,
}

impl Decoded {
    /// Whether decoding stopped exactly at the end of the input.
    ///
    /// A mismatch does not fail the decode, but usually means the file was
    /// written by a different format version.
    pub fn is_fully_consumed(&self) -> bool {
        self.consumed == self.total
    }
}

/// Decode a skeleton binary.
///
/// `atlas` supplies region sizes for meshes exported without nonessential data.
pub fn decode<A: RegionSizes>(bytes: &[u8], atlas: A) -> Result<Decoded> {
    let mut cursor = ByteCursor::new(bytes);
    let (skeleton, nonessential) = header::read_header(&mut cursor)?;

    let mut decoder = Decoder::new(cursor, atlas, nonessential);
    let document = decoder.read_document(skeleton)?;

    let consumed = decoder.cursor.position();
    debug!(consumed, total = bytes.len(), "decode finished");
    Ok(Decoded {
        document,
        diagnostics: decoder.diagnostics,
        consumed,
        total: bytes.len(),
    })
}

/// Decode session state after the header.
///
/// `nonessential` is fixed by the header and never changes afterwards.
pub(crate) struct Decoder<'a, A> {
    cursor: ByteCursor<'a>,
    atlas: A,
    names: NameRegistry,
    nonessential: bool,
    diagnostics: Diagnostics,
}

impl<'a, A: RegionSizes> Decoder<'a, A> {
    pub(crate) fn new(cursor: ByteCursor<'a>, atlas: A, nonessential: bool) -> Self {
        Self {
            cursor,
            atlas,
            names: NameRegistry::new(),
            nonessential,
            diagnostics: Diagnostics::new(),
        }
    }

    fn read_document(&mut self, skeleton: SkeletonInfo) -> Result<SkeletonDocument> {
        let bones = self.read_list(Self::read_bone)?;
        debug!(count = bones.len(), "bones");
        let slots = self.read_list(Self::read_slot)?;
        debug!(count = slots.len(), "slots");
        let ik = self.read_list(Self::read_ik_constraint)?;
        let transform = self.read_list(Self::read_transform_constraint)?;
        let path = self.read_list(Self::read_path_constraint)?;
        debug!(
            ik = ik.len(),
            transform = transform.len(),
            path = path.len(),
            "constraints"
        );
        let skins = self.read_skins()?;
        debug!(count = skins.len(), "skins");
        let events = self.read_events()?;
        debug!(count = events.len(), "events");
        let animations = self.read_animations(&events)?;
        debug!(count = animations.len(), "animations");

        Ok(SkeletonDocument {
            skeleton,
            bones,
            slots,
            ik,
            transform,
            path,
            skins,
            events,
            animations,
        })
    }

    /// Count-prefixed list of records.
    fn read_list<T>(&mut self, mut read: impl FnMut(&mut Self) -> Result<T>) -> Result<Vec<T>> {
        let count = self.cursor.read_count()?;
        let mut items = Vec::with_capacity(self.cursor.capacity_hint(count));
        for _ in 0..count {
            items.push(read(self)?);
        }
        Ok(items)
    }

    /// Record name. A null name becomes the empty string.
    fn read_name(&mut self) -> Result<String> {
        Ok(self.cursor.read_string()?.unwrap_or_default())
    }

    /// Back-reference into an already populated name table.
    fn read_ref(&mut self, kind: NameKind) -> Result<String> {
        let index = self.cursor.read_count()?;
        Ok(self.names.get(kind, index)?.to_owned())
    }

    fn read_refs(&mut self, kind: NameKind) -> Result<Vec<String>> {
        self.read_list(|d| d.read_ref(kind))
    }

    fn read_mode<M: Mode>(&mut self) -> Result<M> {
        let offset = self.cursor.position();
        let index = self.cursor.read_count()?;
        M::from_index(index).ok_or(DecodeError::UnknownVariant {
            what: M::WHAT,
            value: index as u32,
            offset,
        })
    }

    fn read_color(&mut self) -> Result<String> {
        Ok(rgba_hex(self.cursor.read_u32()?))
    }

    /// Editor-only int present in nonessential exports. Read for alignment only.
    fn skip_nonessential_int(&mut self) -> Result<()> {
        if self.nonessential {
            self.cursor.read_i32()?;
        }
        Ok(())
    }
}
