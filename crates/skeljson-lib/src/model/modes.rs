//! Index-coded enumerations stored as varints in the binary.

use serde::Serialize;

/// Enumeration stored as a varint index into a fixed table.
pub trait Mode: Copy + PartialEq + Default + 'static {
    /// What the index selects, for error messages.
    const WHAT: &'static str;
    /// Variants in binary index order.
    const ALL: &'static [Self];

    fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// `None` when `self` is the default, so it drops out of the output.
    fn non_default(self) -> Option<Self> {
        (self != Self::default()).then_some(self)
    }
}

/// How a bone inherits its parent's transform.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub enum TransformMode {
    #[default]
    Normal,
    OnlyTranslation,
    NoRotationOrReflection,
    NoScale,
    NoScaleOrReflection,
}

impl Mode for TransformMode {
    const WHAT: &'static str = "transform mode";
    const ALL: &'static [Self] = &[
        Self::Normal,
        Self::OnlyTranslation,
        Self::NoRotationOrReflection,
        Self::NoScale,
        Self::NoScaleOrReflection,
    ];
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub enum BlendMode {
    #[default]
    Normal,
    Additive,
    Multiply,
    Screen,
}

impl Mode for BlendMode {
    const WHAT: &'static str = "blend mode";
    const ALL: &'static [Self] = &[Self::Normal, Self::Additive, Self::Multiply, Self::Screen];
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum PositionMode {
    Fixed,
    #[default]
    Percent,
}

impl Mode for PositionMode {
    const WHAT: &'static str = "position mode";
    const ALL: &'static [Self] = &[Self::Fixed, Self::Percent];
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum SpacingMode {
    #[default]
    Length,
    Fixed,
    Percent,
}

impl Mode for SpacingMode {
    const WHAT: &'static str = "spacing mode";
    const ALL: &'static [Self] = &[Self::Length, Self::Fixed, Self::Percent];
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum RotateMode {
    #[default]
    Tangent,
    Chain,
    ChainScale,
}

impl Mode for RotateMode {
    const WHAT: &'static str = "rotate mode";
    const ALL: &'static [Self] = &[Self::Tangent, Self::Chain, Self::ChainScale];
}
