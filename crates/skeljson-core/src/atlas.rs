//! Texture atlas text format.
//!
//! Only region sizes are kept: a mesh exported without non-essential data
//! has no width/height of its own, and the size of the packed region it
//! samples from stands in for it.
//!
//! ```text
//! body.png
//! size: 1024,512
//! format: RGBA8888
//! filter: Linear,Linear
//! repeat: none
//! head
//!   rotate: false
//!   xy: 2, 2
//!   size: 100, 120
//!   orig: 100, 120
//!   offset: 0, 0
//!   index: -1
//! ```
//!
//! Pages are separated by blank lines. The first line of a page is the image
//! file; `key: values` lines after it belong to the page until a line without
//! a colon names the first region.

use std::collections::HashMap;
use std::str::FromStr;

use indexmap::IndexMap;

/// Region name to pixel size lookup.
pub trait RegionSizes {
    fn region_size(&self, name: &str) -> Option<(u32, u32)>;
}

impl<T: RegionSizes + ?Sized> RegionSizes for &T {
    fn region_size(&self, name: &str) -> Option<(u32, u32)> {
        (*self).region_size(name)
    }
}

impl RegionSizes for HashMap<String, (u32, u32)> {
    fn region_size(&self, name: &str) -> Option<(u32, u32)> {
        self.get(name).copied()
    }
}

/// Error while reading atlas text. Line numbers are 1-based.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AtlasError {
    #[error("line {line}: expected `key: value`, found {text:?}")]
    ExpectedTuple { line: usize, text: String },
    #[error("line {line}: invalid size value {value:?}")]
    InvalidSize { line: usize, value: String },
    #[error("region {region:?} has no size")]
    MissingSize { region: String },
}

/// Parsed atlas: page files and region sizes.
#[derive(Debug, Clone, Default)]
pub struct Atlas {
    pages: Vec<String>,
    regions: IndexMap<String, (u32, u32)>,
}

enum Section {
    /// Between pages; the next non-blank line is a page file.
    None,
    /// Reading page properties.
    Page,
    /// Reading properties of the named region.
    Region { name: String, sized: bool },
}

impl Atlas {
    pub fn parse(text: &str) -> Result<Self, AtlasError> {
        let mut atlas = Atlas::default();
        let mut section = Section::None;

        for (i, raw) in text.lines().enumerate() {
            let line = i + 1;
            let trimmed = raw.trim();

            if trimmed.is_empty() {
                finish_region(&section)?;
                section = Section::None;
                continue;
            }

            match section {
                Section::None => {
                    atlas.pages.push(trimmed.to_owned());
                    section = Section::Page;
                }
                Section::Page | Section::Region { .. } if !trimmed.contains(':') => {
                    finish_region(&section)?;
                    section = Section::Region {
                        name: trimmed.to_owned(),
                        sized: false,
                    };
                }
                Section::Page => {
                    split_tuple(trimmed, line)?;
                }
                Section::Region {
                    ref name,
                    ref mut sized,
                } => {
                    let (key, values) = split_tuple(trimmed, line)?;
                    if key == "size" {
                        let size = parse_size(&values, line)?;
                        atlas.regions.insert(name.clone(), size);
                        *sized = true;
                    }
                }
            }
        }

        finish_region(&section)?;
        Ok(atlas)
    }

    /// Page image files in file order.
    pub fn pages(&self) -> &[String] {
        &self.pages
    }

    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, (u32, u32))> {
        self.regions.iter().map(|(name, &size)| (name.as_str(), size))
    }
}

impl FromStr for Atlas {
    type Err = AtlasError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl RegionSizes for Atlas {
    fn region_size(&self, name: &str) -> Option<(u32, u32)> {
        self.regions.get(name).copied()
    }
}

fn finish_region(section: &Section) -> Result<(), AtlasError> {
    match section {
        Section::Region { name, sized: false } => Err(AtlasError::MissingSize {
            region: name.clone(),
        }),
        _ => Ok(()),
    }
}

/// Split `key: a, b, c` into the key and its (at most four) trimmed values.
fn split_tuple(text: &str, line: usize) -> Result<(&str, Vec<&str>), AtlasError> {
    let Some((key, rest)) = text.split_once(':') else {
        return Err(AtlasError::ExpectedTuple {
            line,
            text: text.to_owned(),
        });
    };
    let values = rest.splitn(4, ',').map(str::trim).collect();
    Ok((key.trim(), values))
}

fn parse_size(values: &[&str], line: usize) -> Result<(u32, u32), AtlasError> {
    let parse = |value: Option<&&str>| -> Result<u32, AtlasError> {
        let value = value.copied().unwrap_or_default();
        value.parse().map_err(|_| AtlasError::InvalidSize {
            line,
            value: value.to_owned(),
        })
    };
    Ok((parse(values.first())?, parse(values.get(1))?))
}
