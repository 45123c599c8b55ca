//! Animation timelines.
//!
//! Every keyframed timeline except attachment swaps, draw order and events
//! carries a [`Curve`] describing interpolation toward the next frame. The
//! final frame of a timeline never has one.

use indexmap::IndexMap;
use serde::Serialize;
use serde::ser::{SerializeTuple, Serializer};

/// Interpolation toward the next keyframe.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum Curve {
    #[default]
    Linear,
    Stepped,
    Bezier([f32; 4]),
}

impl Curve {
    pub fn is_linear(&self) -> bool {
        matches!(self, Self::Linear)
    }
}

impl Serialize for Curve {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Linear => serializer.serialize_str("linear"),
            Self::Stepped => serializer.serialize_str("stepped"),
            Self::Bezier(points) => {
                let mut tuple = serializer.serialize_tuple(4)?;
                for p in points {
                    tuple.serialize_element(p)?;
                }
                tuple.end()
            }
        }
    }
}

/// Frame types that end with an interpolation curve.
pub trait Curved {
    fn curve_mut(&mut self) -> &mut Curve;
}

macro_rules! curved {
    ($($ty:ty),* $(,)?) => {
        $(impl Curved for $ty {
            fn curve_mut(&mut self) -> &mut Curve {
                &mut self.curve
            }
        })*
    };
}

curved!(
    ColorFrame,
    RotateFrame,
    VectorFrame,
    IkFrame,
    TransformFrame,
    PathPositionFrame,
    PathSpacingFrame,
    PathMixFrame,
    DeformFrame,
);

/// Skin → slot → attachment → deform frames.
pub type DeformTimelines = IndexMap<String, IndexMap<String, IndexMap<String, Vec<DeformFrame>>>>;

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Animation {
    #[serde(skip_serializing_if = "IndexMap::is_empty")]
    pub slots: IndexMap<String, SlotTimelines>,
    #[serde(skip_serializing_if = "IndexMap::is_empty")]
    pub bones: IndexMap<String, BoneTimelines>,
    #[serde(skip_serializing_if = "IndexMap::is_empty")]
    pub ik: IndexMap<String, Vec<IkFrame>>,
    #[serde(skip_serializing_if = "IndexMap::is_empty")]
    pub transform: IndexMap<String, Vec<TransformFrame>>,
    #[serde(skip_serializing_if = "IndexMap::is_empty")]
    pub path: IndexMap<String, PathTimelines>,
    #[serde(skip_serializing_if = "IndexMap::is_empty")]
    pub deform: DeformTimelines,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub draw_order: Vec<DrawOrderFrame>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub events: Vec<EventFrame>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct SlotTimelines {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub attachment: Vec<AttachmentFrame>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub color: Vec<ColorFrame>,
}

/// A null name hides the slot's attachment; it is kept as JSON `null`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct AttachmentFrame {
    pub time: f32,
    pub name: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ColorFrame {
    pub time: f32,
    pub color: String,
    #[serde(skip_serializing_if = "Curve::is_linear")]
    pub curve: Curve,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct BoneTimelines {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub rotate: Vec<RotateFrame>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub translate: Vec<VectorFrame>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub scale: Vec<VectorFrame>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub shear: Vec<VectorFrame>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RotateFrame {
    pub time: f32,
    pub angle: f32,
    #[serde(skip_serializing_if = "Curve::is_linear")]
    pub curve: Curve,
}

/// Translate, scale and shear frames.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct VectorFrame {
    pub time: f32,
    pub x: f32,
    pub y: f32,
    #[serde(skip_serializing_if = "Curve::is_linear")]
    pub curve: Curve,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IkFrame {
    pub time: f32,
    pub mix: f32,
    pub bend_positive: bool,
    #[serde(skip_serializing_if = "Curve::is_linear")]
    pub curve: Curve,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransformFrame {
    pub time: f32,
    pub rotate_mix: f32,
    pub translate_mix: f32,
    pub scale_mix: f32,
    pub shear_mix: f32,
    #[serde(skip_serializing_if = "Curve::is_linear")]
    pub curve: Curve,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct PathTimelines {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub position: Vec<PathPositionFrame>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub spacing: Vec<PathSpacingFrame>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub mix: Vec<PathMixFrame>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PathPositionFrame {
    pub time: f32,
    pub position: f32,
    #[serde(skip_serializing_if = "Curve::is_linear")]
    pub curve: Curve,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PathSpacingFrame {
    pub time: f32,
    pub spacing: f32,
    #[serde(skip_serializing_if = "Curve::is_linear")]
    pub curve: Curve,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PathMixFrame {
    pub time: f32,
    pub rotate_mix: f32,
    pub translate_mix: f32,
    #[serde(skip_serializing_if = "Curve::is_linear")]
    pub curve: Curve,
}

/// Sparse vertex delta window `[offset, offset + vertices.len())`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DeformFrame {
    pub time: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vertices: Option<Vec<f32>>,
    #[serde(skip_serializing_if = "Curve::is_linear")]
    pub curve: Curve,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DrawOrderFrame {
    pub time: f32,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub offsets: Vec<DrawOrderOffset>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DrawOrderOffset {
    pub slot: String,
    pub offset: u32,
}

/// Payloads equal to the event definition are left out.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct EventFrame {
    pub time: f32,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub int: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub float: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub string: Option<String>,
}
