//! Output document model.
//!
//! Field names and nesting follow the JSON skeleton format. Fields equal to
//! their format default are `None` and skipped on serialization.

mod animation;
mod attachment;
mod document;
mod modes;

#[cfg(test)]
mod model_tests;

pub use animation::{
    Animation, AttachmentFrame, BoneTimelines, ColorFrame, Curve, Curved, DeformFrame,
    DeformTimelines, DrawOrderFrame, DrawOrderOffset, EventFrame, IkFrame, PathMixFrame,
    PathPositionFrame, PathSpacingFrame, PathTimelines, RotateFrame, SlotTimelines,
    TransformFrame, VectorFrame,
};
pub use attachment::{
    Attachment, BoundingBoxAttachment, LinkedMeshAttachment, MeshAttachment, PathAttachment,
    RegionAttachment, Skin,
};
pub use document::{
    Bone, EventDef, IkConstraint, PathConstraint, SkeletonDocument, SkeletonInfo, Slot,
    TransformConstraint,
};
pub use modes::{BlendMode, Mode, PositionMode, RotateMode, SpacingMode, TransformMode};
