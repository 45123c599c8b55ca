use std::fmt;

/// Skeleton features the DragonBones target format cannot represent.
///
/// Declaration order is the order categories appear in a rendered report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DiagnosticKind {
    // Structural records
    TransformConstraint,
    PathConstraint,
    BoundingBoxAttachment,
    PathAttachment,

    // Animation timelines
    ShearTimeline,
    TransformTimeline,
    PathTimeline,
}

impl DiagnosticKind {
    pub const ALL: [DiagnosticKind; 7] = [
        Self::TransformConstraint,
        Self::PathConstraint,
        Self::BoundingBoxAttachment,
        Self::PathAttachment,
        Self::ShearTimeline,
        Self::TransformTimeline,
        Self::PathTimeline,
    ];

    /// Plural noun phrase for the unsupported feature.
    pub fn subject(&self) -> &'static str {
        match self {
            Self::TransformConstraint => "transform constraints",
            Self::PathConstraint => "path constraints",
            Self::BoundingBoxAttachment => "bounding box attachments",
            Self::PathAttachment => "path attachments",
            Self::ShearTimeline => "shear timelines",
            Self::TransformTimeline => "transform constraint timelines",
            Self::PathTimeline => "path constraint timelines",
        }
    }

    /// Report heading for this category.
    pub fn heading(&self) -> String {
        format!("DragonBones does not support {}", self.subject())
    }
}

impl fmt::Display for DiagnosticKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.subject())
    }
}

/// One unsupported-feature note: the category plus the item it refers to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    pub detail: String,
}

impl Diagnostic {
    pub(crate) fn new(kind: DiagnosticKind) -> Self {
        Self {
            kind,
            detail: String::new(),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.detail.is_empty() {
            f.write_str(&self.kind.heading())
        } else {
            write!(f, "{}: {}", self.kind.heading(), self.detail)
        }
    }
}
