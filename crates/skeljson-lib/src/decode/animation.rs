//! Animation timelines, read in their fixed family order.

use indexmap::IndexMap;
use skeljson_core::utils::differs_from;
use skeljson_core::{NameKind, RegionSizes};
use tracing::debug;

use super::Decoder;
use crate::diagnostics::DiagnosticKind;
use crate::error::{DecodeError, Result};
use crate::model::{
    Animation, AttachmentFrame, BoneTimelines, ColorFrame, Curve, DeformFrame, DeformTimelines,
    DrawOrderFrame, DrawOrderOffset, EventDef, EventFrame, IkFrame, PathMixFrame,
    PathPositionFrame, PathSpacingFrame, PathTimelines, RotateFrame, SlotTimelines,
    TransformFrame, VectorFrame,
};

const SLOT_ATTACHMENT: u8 = 0;
const SLOT_COLOR: u8 = 1;

const BONE_ROTATE: u8 = 0;
const BONE_TRANSLATE: u8 = 1;
const BONE_SCALE: u8 = 2;
const BONE_SHEAR: u8 = 3;

const PATH_POSITION: i8 = 0;
const PATH_SPACING: i8 = 1;
const PATH_MIX: i8 = 2;

impl<A: RegionSizes> Decoder<'_, A> {
    pub(super) fn read_animations(
        &mut self,
        events: &IndexMap<String, EventDef>,
    ) -> Result<IndexMap<String, Animation>> {
        let count = self.cursor.read_count()?;
        let mut animations = IndexMap::with_capacity(self.cursor.capacity_hint(count));
        for _ in 0..count {
            let name = self.read_name()?;
            let animation = self.read_animation(&name, events)?;
            debug!(animation = %name, "decoded animation");
            animations.insert(name, animation);
        }
        Ok(animations)
    }

    fn read_animation(
        &mut self,
        name: &str,
        events: &IndexMap<String, EventDef>,
    ) -> Result<Animation> {
        let slots = self.read_slot_timelines()?;
        let bones = self.read_bone_timelines(name)?;
        let ik = self.read_ik_timelines()?;

        // Logged for every animation, with or without timelines of the family.
        let transform = self.read_transform_timelines()?;
        self.diagnostics
            .report(DiagnosticKind::TransformTimeline)
            .detail(timeline_detail(name, transform.keys()))
            .emit();

        let path = self.read_path_timelines()?;
        self.diagnostics
            .report(DiagnosticKind::PathTimeline)
            .detail(timeline_detail(name, path.keys()))
            .emit();

        let deform = self.read_deform_timelines()?;
        let draw_order = self.read_draw_order()?;
        let events = self.read_event_frames(events)?;

        Ok(Animation {
            slots,
            bones,
            ik,
            transform,
            path,
            deform,
            draw_order,
            events,
        })
    }

    fn read_slot_timelines(&mut self) -> Result<IndexMap<String, SlotTimelines>> {
        let mut slots: IndexMap<String, SlotTimelines> = IndexMap::new();
        let count = self.cursor.read_count()?;
        for _ in 0..count {
            let slot = self.read_ref(NameKind::Slot)?;
            let timelines = slots.entry(slot).or_default();
            let timeline_count = self.cursor.read_count()?;
            for _ in 0..timeline_count {
                let offset = self.cursor.position();
                let kind = self.cursor.read_u8()?;
                let frame_count = self.cursor.read_count()?;
                match kind {
                    SLOT_ATTACHMENT => {
                        for _ in 0..frame_count {
                            timelines.attachment.push(AttachmentFrame {
                                time: self.cursor.read_f32()?,
                                name: self.cursor.read_string()?,
                            });
                        }
                    }
                    SLOT_COLOR => {
                        let frames = self.read_curved_frames(frame_count, |d| {
                            Ok(ColorFrame {
                                time: d.cursor.read_f32()?,
                                color: d.read_color()?,
                                curve: Curve::Linear,
                            })
                        })?;
                        timelines.color.extend(frames);
                    }
                    other => return Err(unknown("slot timeline type", other, offset)),
                }
            }
        }
        Ok(slots)
    }

    fn read_bone_timelines(&mut self, animation: &str) -> Result<IndexMap<String, BoneTimelines>> {
        let mut bones: IndexMap<String, BoneTimelines> = IndexMap::new();
        let count = self.cursor.read_count()?;
        for _ in 0..count {
            let bone = self.read_ref(NameKind::Bone)?;
            let mut timelines = BoneTimelines::default();
            let timeline_count = self.cursor.read_count()?;
            for _ in 0..timeline_count {
                let offset = self.cursor.position();
                let kind = self.cursor.read_u8()?;
                let frame_count = self.cursor.read_count()?;
                match kind {
                    BONE_ROTATE => {
                        let frames = self.read_curved_frames(frame_count, |d| {
                            Ok(RotateFrame {
                                time: d.cursor.read_f32()?,
                                angle: d.cursor.read_f32()?,
                                curve: Curve::Linear,
                            })
                        })?;
                        timelines.rotate.extend(frames);
                    }
                    BONE_TRANSLATE => {
                        let frames =
                            self.read_curved_frames(frame_count, Self::read_vector_frame)?;
                        timelines.translate.extend(frames);
                    }
                    BONE_SCALE => {
                        let frames =
                            self.read_curved_frames(frame_count, Self::read_vector_frame)?;
                        timelines.scale.extend(frames);
                    }
                    BONE_SHEAR => {
                        self.diagnostics
                            .report(DiagnosticKind::ShearTimeline)
                            .detail(format!("animation `{animation}`, bone `{bone}`"))
                            .emit();
                        let frames =
                            self.read_curved_frames(frame_count, Self::read_vector_frame)?;
                        timelines.shear.extend(frames);
                    }
                    other => return Err(unknown("bone timeline type", other, offset)),
                }
            }
            let entry = bones.entry(bone).or_default();
            entry.rotate.extend(timelines.rotate);
            entry.translate.extend(timelines.translate);
            entry.scale.extend(timelines.scale);
            entry.shear.extend(timelines.shear);
        }
        Ok(bones)
    }

    fn read_vector_frame(&mut self) -> Result<VectorFrame> {
        Ok(VectorFrame {
            time: self.cursor.read_f32()?,
            x: self.cursor.read_f32()?,
            y: self.cursor.read_f32()?,
            curve: Curve::Linear,
        })
    }

    fn read_ik_timelines(&mut self) -> Result<IndexMap<String, Vec<IkFrame>>> {
        let mut ik: IndexMap<String, Vec<IkFrame>> = IndexMap::new();
        let count = self.cursor.read_count()?;
        for _ in 0..count {
            let constraint = self.read_ref(NameKind::Ik)?;
            let frame_count = self.cursor.read_count()?;
            let frames = self.read_curved_frames(frame_count, |d| {
                Ok(IkFrame {
                    time: d.cursor.read_f32()?,
                    mix: d.cursor.read_f32()?,
                    bend_positive: d.cursor.read_sbyte()? == 1,
                    curve: Curve::Linear,
                })
            })?;
            ik.entry(constraint).or_default().extend(frames);
        }
        Ok(ik)
    }

    fn read_transform_timelines(&mut self) -> Result<IndexMap<String, Vec<TransformFrame>>> {
        let mut transform: IndexMap<String, Vec<TransformFrame>> = IndexMap::new();
        let count = self.cursor.read_count()?;
        for _ in 0..count {
            let constraint = self.read_ref(NameKind::Transform)?;
            let frame_count = self.cursor.read_count()?;
            let frames = self.read_curved_frames(frame_count, |d| {
                Ok(TransformFrame {
                    time: d.cursor.read_f32()?,
                    rotate_mix: d.cursor.read_f32()?,
                    translate_mix: d.cursor.read_f32()?,
                    scale_mix: d.cursor.read_f32()?,
                    shear_mix: d.cursor.read_f32()?,
                    curve: Curve::Linear,
                })
            })?;
            transform.entry(constraint).or_default().extend(frames);
        }
        Ok(transform)
    }

    fn read_path_timelines(&mut self) -> Result<IndexMap<String, PathTimelines>> {
        let mut paths: IndexMap<String, PathTimelines> = IndexMap::new();
        let count = self.cursor.read_count()?;
        for _ in 0..count {
            let constraint = self.read_ref(NameKind::Path)?;
            let timeline_count = self.cursor.read_count()?;
            for _ in 0..timeline_count {
                let offset = self.cursor.position();
                let kind = self.cursor.read_sbyte()?;
                let frame_count = self.cursor.read_count()?;
                match kind {
                    PATH_POSITION => {
                        let frames = self.read_curved_frames(frame_count, |d| {
                            Ok(PathPositionFrame {
                                time: d.cursor.read_f32()?,
                                position: d.cursor.read_f32()?,
                                curve: Curve::Linear,
                            })
                        })?;
                        paths.entry(constraint.clone()).or_default().position.extend(frames);
                    }
                    PATH_SPACING => {
                        let frames = self.read_curved_frames(frame_count, |d| {
                            Ok(PathSpacingFrame {
                                time: d.cursor.read_f32()?,
                                spacing: d.cursor.read_f32()?,
                                curve: Curve::Linear,
                            })
                        })?;
                        paths.entry(constraint.clone()).or_default().spacing.extend(frames);
                    }
                    PATH_MIX => {
                        let frames = self.read_curved_frames(frame_count, |d| {
                            Ok(PathMixFrame {
                                time: d.cursor.read_f32()?,
                                rotate_mix: d.cursor.read_f32()?,
                                translate_mix: d.cursor.read_f32()?,
                                curve: Curve::Linear,
                            })
                        })?;
                        paths.entry(constraint.clone()).or_default().mix.extend(frames);
                    }
                    other => return Err(unknown("path timeline type", other as u8, offset)),
                }
            }
            paths.entry(constraint).or_default();
        }
        Ok(paths)
    }

    fn read_deform_timelines(&mut self) -> Result<DeformTimelines> {
        let mut deform = DeformTimelines::new();
        let skin_count = self.cursor.read_count()?;
        for _ in 0..skin_count {
            let skin = self.read_ref(NameKind::Skin)?;
            let slots = deform.entry(skin).or_default();
            let slot_count = self.cursor.read_count()?;
            for _ in 0..slot_count {
                let slot = self.read_ref(NameKind::Slot)?;
                let attachments = slots.entry(slot).or_default();
                let attachment_count = self.cursor.read_count()?;
                for _ in 0..attachment_count {
                    let attachment = self.read_name()?;
                    let frame_count = self.cursor.read_count()?;
                    let frames = self.read_curved_frames(frame_count, Self::read_deform_frame)?;
                    attachments.entry(attachment).or_default().extend(frames);
                }
            }
        }
        Ok(deform)
    }

    fn read_deform_frame(&mut self) -> Result<DeformFrame> {
        let time = self.cursor.read_f32()?;
        let end = self.cursor.read_count()?;
        let (offset, vertices) = if end == 0 {
            (None, None)
        } else {
            let start = self.cursor.read_count()?;
            let vertices = self.cursor.read_float_array(end, 1.0)?;
            ((start != 0).then_some(start as u32), Some(vertices))
        };
        Ok(DeformFrame {
            time,
            offset,
            vertices,
            curve: Curve::Linear,
        })
    }

    fn read_draw_order(&mut self) -> Result<Vec<DrawOrderFrame>> {
        self.read_list(|d| {
            let time = d.cursor.read_f32()?;
            let offsets = d.read_list(|d| {
                Ok(DrawOrderOffset {
                    slot: d.read_ref(NameKind::Slot)?,
                    offset: d.cursor.read_varint_raw()?,
                })
            })?;
            Ok(DrawOrderFrame { time, offsets })
        })
    }

    fn read_event_frames(
        &mut self,
        events: &IndexMap<String, EventDef>,
    ) -> Result<Vec<EventFrame>> {
        self.read_list(|d| {
            let time = d.cursor.read_f32()?;
            let name = d.read_ref(NameKind::Event)?;
            let int = d.cursor.read_varint(true)?;
            let float = d.cursor.read_f32()?;
            let string = if d.cursor.read_bool()? {
                d.cursor.read_string()?
            } else {
                None
            };

            let def = events.get(&name);
            let int_default = def.map_or(0, |def| def.int);
            let float_default = def.map_or(0.0, |def| def.float);
            let string_default = def.and_then(|def| def.string.as_deref());

            Ok(EventFrame {
                time,
                int: (int != int_default).then_some(int),
                float: differs_from(float, float_default).then_some(float),
                string: string.filter(|s| Some(s.as_str()) != string_default),
                name,
            })
        })
    }
}

fn unknown(what: &'static str, value: u8, offset: usize) -> DecodeError {
    DecodeError::UnknownVariant {
        what,
        value: u32::from(value),
        offset,
    }
}

/// `` animation `walk`: `a`, `b` ``, or just the animation when it has no
/// timelines of the family.
fn timeline_detail<'k>(animation: &str, constraints: impl Iterator<Item = &'k String>) -> String {
    let names: Vec<_> = constraints.map(|n| format!("`{n}`")).collect();
    if names.is_empty() {
        format!("animation `{animation}`")
    } else {
        format!("animation `{animation}`: {}", names.join(", "))
    }
}
