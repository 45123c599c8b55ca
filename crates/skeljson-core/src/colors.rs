//! ANSI color codes for the conversion summary.
//!
//! - Bold: diagnostic category headings
//! - Green: success line
//! - Yellow: advisory and warning lines
//! - Dim: counts and file statistics

/// ANSI palette for CLI output. Standard 16-color codes only.
#[derive(Clone, Copy, Debug)]
pub struct Colors {
    pub bold: &'static str,
    pub green: &'static str,
    pub yellow: &'static str,
    pub dim: &'static str,
    pub reset: &'static str,
}

impl Default for Colors {
    fn default() -> Self {
        Self::OFF
    }
}

impl Colors {
    pub const ON: Self = Self {
        bold: "\x1b[1m",
        green: "\x1b[32m",
        yellow: "\x1b[33m",
        dim: "\x1b[2m",
        reset: "\x1b[0m",
    };

    pub const OFF: Self = Self {
        bold: "",
        green: "",
        yellow: "",
        dim: "",
        reset: "",
    };

    pub fn new(enabled: bool) -> Self {
        if enabled { Self::ON } else { Self::OFF }
    }
}
