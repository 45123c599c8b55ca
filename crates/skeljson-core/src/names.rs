//! Append-only name tables for index-based back-references.
//!
//! Records in a skeleton binary refer to earlier records by their position in
//! the order they were decoded. Each category keeps its own table; a table only
//! grows, and a reference is valid only if it points below the current length.

use std::fmt;

/// The seven categories of referenceable names.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NameKind {
    Bone,
    Slot,
    Ik,
    Transform,
    Path,
    Skin,
    Event,
}

impl NameKind {
    /// All kinds, in the order their tables are populated during decoding.
    pub const ALL: [NameKind; 7] = [
        Self::Bone,
        Self::Slot,
        Self::Ik,
        Self::Transform,
        Self::Path,
        Self::Skin,
        Self::Event,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Bone => "bone",
            Self::Slot => "slot",
            Self::Ik => "ik constraint",
            Self::Transform => "transform constraint",
            Self::Path => "path constraint",
            Self::Skin => "skin",
            Self::Event => "event",
        }
    }
}

impl fmt::Display for NameKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Failed name lookup.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NameError {
    #[error("{kind} index {index} out of range (table has {len} entries)")]
    IndexOutOfRange {
        kind: NameKind,
        index: usize,
        len: usize,
    },
}

/// Ordered, append-only table of names for one category.
///
/// Unlike an interner, duplicates are kept: the index of a name is the
/// position of the record that introduced it.
#[derive(Debug, Clone)]
pub struct NameTable {
    kind: NameKind,
    names: Vec<String>,
}

impl NameTable {
    pub fn new(kind: NameKind) -> Self {
        Self {
            kind,
            names: Vec::new(),
        }
    }

    pub fn kind(&self) -> NameKind {
        self.kind
    }

    /// Append a name, returning its index (the table length before the push).
    pub fn push(&mut self, name: impl Into<String>) -> usize {
        let index = self.names.len();
        self.names.push(name.into());
        index
    }

    /// Resolve an index to its name.
    pub fn get(&self, index: usize) -> Result<&str, NameError> {
        self.names
            .get(index)
            .map(String::as_str)
            .ok_or(NameError::IndexOutOfRange {
                kind: self.kind,
                index,
                len: self.names.len(),
            })
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, &str)> {
        self.names.iter().enumerate().map(|(i, s)| (i, s.as_str()))
    }
}

/// One table per [`NameKind`].
#[derive(Debug, Clone)]
pub struct NameRegistry {
    bones: NameTable,
    slots: NameTable,
    ik: NameTable,
    transform: NameTable,
    path: NameTable,
    skins: NameTable,
    events: NameTable,
}

impl Default for NameRegistry {
    fn default() -> Self {
        Self {
            bones: NameTable::new(NameKind::Bone),
            slots: NameTable::new(NameKind::Slot),
            ik: NameTable::new(NameKind::Ik),
            transform: NameTable::new(NameKind::Transform),
            path: NameTable::new(NameKind::Path),
            skins: NameTable::new(NameKind::Skin),
            events: NameTable::new(NameKind::Event),
        }
    }
}

impl NameRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn table(&self, kind: NameKind) -> &NameTable {
        match kind {
            NameKind::Bone => &self.bones,
            NameKind::Slot => &self.slots,
            NameKind::Ik => &self.ik,
            NameKind::Transform => &self.transform,
            NameKind::Path => &self.path,
            NameKind::Skin => &self.skins,
            NameKind::Event => &self.events,
        }
    }

    fn table_mut(&mut self, kind: NameKind) -> &mut NameTable {
        match kind {
            NameKind::Bone => &mut self.bones,
            NameKind::Slot => &mut self.slots,
            NameKind::Ik => &mut self.ik,
            NameKind::Transform => &mut self.transform,
            NameKind::Path => &mut self.path,
            NameKind::Skin => &mut self.skins,
            NameKind::Event => &mut self.events,
        }
    }

    pub fn push(&mut self, kind: NameKind, name: impl Into<String>) -> usize {
        self.table_mut(kind).push(name)
    }

    pub fn get(&self, kind: NameKind, index: usize) -> Result<&str, NameError> {
        self.table(kind).get(index)
    }

    pub fn len(&self, kind: NameKind) -> usize {
        self.table(kind).len()
    }
}
