//! Top-level document and the structural records.

use indexmap::IndexMap;
use serde::Serialize;

use super::animation::Animation;
use super::attachment::Skin;
use super::modes::{BlendMode, PositionMode, RotateMode, SpacingMode, TransformMode};

/// Decoded skeleton, keyed the way the JSON skeleton format expects.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct SkeletonDocument {
    pub skeleton: SkeletonInfo,
    pub bones: Vec<Bone>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub slots: Vec<Slot>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub ik: Vec<IkConstraint>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub transform: Vec<TransformConstraint>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub path: Vec<PathConstraint>,
    pub skins: IndexMap<String, Skin>,
    #[serde(skip_serializing_if = "IndexMap::is_empty")]
    pub events: IndexMap<String, EventDef>,
    #[serde(skip_serializing_if = "IndexMap::is_empty")]
    pub animations: IndexMap<String, Animation>,
}

/// Header metadata. `fps` and `images` exist only in nonessential exports.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct SkeletonInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hash: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spine: Option<String>,
    pub width: f32,
    pub height: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fps: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub images: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Bone {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rotation: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scale_x: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scale_y: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shear_x: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shear_y: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub length: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transform: Option<TransformMode>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Slot {
    pub name: String,
    pub bone: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attachment: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blend: Option<BlendMode>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IkConstraint {
    pub name: String,
    pub order: u32,
    pub bones: Vec<String>,
    pub target: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mix: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bend_positive: Option<bool>,
}

/// Offsets default to 0, mixes to 1.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransformConstraint {
    pub name: String,
    pub order: u32,
    pub bones: Vec<String>,
    pub target: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rotation: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scale_x: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scale_y: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shear_y: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rotate_mix: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub translate_mix: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scale_mix: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shear_mix: Option<f32>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PathConstraint {
    pub name: String,
    pub order: u32,
    pub bones: Vec<String>,
    pub target: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position_mode: Option<PositionMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spacing_mode: Option<SpacingMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rotate_mode: Option<RotateMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rotation: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spacing: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rotate_mix: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub translate_mix: Option<f32>,
}

/// Event definition. Zero and null payloads are left out of the output.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct EventDef {
    #[serde(skip_serializing_if = "is_zero_int")]
    pub int: i32,
    #[serde(skip_serializing_if = "is_zero_float")]
    pub float: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub string: Option<String>,
}

fn is_zero_int(v: &i32) -> bool {
    *v == 0
}

fn is_zero_float(v: &f32) -> bool {
    !skeljson_core::utils::differs_from(*v, 0.0)
}
