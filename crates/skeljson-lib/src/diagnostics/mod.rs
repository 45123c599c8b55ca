//! Non-fatal notes about features the target format drops.
//!
//! Decoding never stops for these. They are collected in encounter order and
//! rendered grouped by category.

mod message;
mod printer;


use indexmap::IndexMap;

pub use message::{Diagnostic, DiagnosticKind};
pub use printer::DiagnosticsPrinter;

#[derive(Debug, Clone, Default)]
pub struct Diagnostics {
    messages: Vec<Diagnostic>,
}

#[must_use = "diagnostic not emitted, call .emit()"]
pub struct DiagnosticBuilder<'a> {
    diagnostics: &'a mut Diagnostics,
    message: Diagnostic,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self {
            messages: Vec::new(),
        }
    }

    /// Start a diagnostic of the given kind. Call `.detail()` to say which item it is about.
    pub fn report(&mut self, kind: DiagnosticKind) -> DiagnosticBuilder<'_> {
        DiagnosticBuilder {
            diagnostics: self,
            message: Diagnostic::new(kind),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
        self.messages.iter()
    }

    pub fn count(&self, kind: DiagnosticKind) -> usize {
        self.messages.iter().filter(|d| d.kind == kind).count()
    }

    /// Details per category, categories in [`DiagnosticKind`] order and
    /// details in encounter order.
    pub fn grouped(&self) -> IndexMap<DiagnosticKind, Vec<&str>> {
        let mut groups: IndexMap<DiagnosticKind, Vec<&str>> = IndexMap::new();
        for kind in DiagnosticKind::ALL {
            let details: Vec<&str> = self
                .messages
                .iter()
                .filter(|d| d.kind == kind)
                .map(|d| d.detail.as_str())
                .collect();
            if !details.is_empty() {
                groups.insert(kind, details);
            }
        }
        groups
    }

    pub fn printer(&self) -> DiagnosticsPrinter<'_> {
        DiagnosticsPrinter::new(self)
    }

    pub fn render(&self) -> String {
        self.printer().render()
    }

    pub fn render_colored(&self, colored: bool) -> String {
        self.printer().colored(colored).render()
    }
}

impl<'a> DiagnosticBuilder<'a> {
    /// Name the item this diagnostic is about.
    pub fn detail(mut self, detail: impl Into<String>) -> Self {
        self.message.detail = detail.into();
        self
    }

    pub fn emit(self) {
        tracing::debug!(
            kind = ?self.message.kind,
            detail = %self.message.detail,
            "unsupported feature"
        );
        self.diagnostics.messages.push(self.message);
    }
}
