//! Builder-pattern printer for the grouped diagnostics report.

use std::fmt::Write;

use skeljson_core::Colors;

use super::Diagnostics;

/// Renders diagnostics as one block per category:
///
/// ```text
/// DragonBones does not support path constraints (2):
///   - constraint `spine-path`
///   - constraint `tail-path`
/// ```
pub struct DiagnosticsPrinter<'d> {
    diagnostics: &'d Diagnostics,
    colored: bool,
}

impl<'d> DiagnosticsPrinter<'d> {
    pub fn new(diagnostics: &'d Diagnostics) -> Self {
        Self {
            diagnostics,
            colored: false,
        }
    }

    pub fn colored(mut self, value: bool) -> Self {
        self.colored = value;
        self
    }

    pub fn render(&self) -> String {
        let mut out = String::new();
        self.format(&mut out).expect("String write never fails");
        out
    }

    pub fn format(&self, w: &mut impl Write) -> std::fmt::Result {
        let c = Colors::new(self.colored);

        for (i, (kind, details)) in self.diagnostics.grouped().iter().enumerate() {
            if i > 0 {
                writeln!(w)?;
            }
            writeln!(
                w,
                "{}{}{} {}({}){}:",
                c.bold,
                kind.heading(),
                c.reset,
                c.dim,
                details.len(),
                c.reset
            )?;
            for detail in details {
                if detail.is_empty() {
                    continue;
                }
                writeln!(w, "  - {detail}")?;
            }
        }
        Ok(())
    }
}
