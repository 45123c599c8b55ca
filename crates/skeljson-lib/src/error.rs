use std::string::FromUtf8Error;

use skeljson_core::{NameError, NameKind};

/// Fatal decoding failures. Any of these aborts the whole decode.
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    #[error("unexpected end of input at offset {offset:#x}: need {need} bytes, have {have}")]
    Truncated {
        offset: usize,
        need: usize,
        have: usize,
    },

    #[error("{kind} index {index} out of range (table has {len} entries)")]
    IndexOutOfRange {
        kind: NameKind,
        index: usize,
        len: usize,
    },

    #[error("unknown {what} {value} at offset {offset:#x}")]
    UnknownVariant {
        what: &'static str,
        value: u32,
        offset: usize,
    },

    #[error("mesh hull of {hull} vertices exceeds its {vertices} vertices at offset {offset:#x}")]
    InvalidHull {
        hull: usize,
        vertices: usize,
        offset: usize,
    },

    #[error("region `{region}` not found in atlas")]
    RegionNotFound { region: String },

    #[error("invalid UTF-8 in string at offset {offset:#x}")]
    InvalidUtf8 {
        offset: usize,
        #[source]
        source: FromUtf8Error,
    },
}

impl From<NameError> for DecodeError {
    fn from(err: NameError) -> Self {
        match err {
            NameError::IndexOutOfRange { kind, index, len } => {
                Self::IndexOutOfRange { kind, index, len }
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, DecodeError>;
