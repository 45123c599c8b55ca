use indexmap::IndexMap;
use skeljson_core::{NameKind, RegionSizes};

use super::Decoder;
use crate::cursor::default_edge_loop;
use crate::diagnostics::DiagnosticKind;
use crate::error::{DecodeError, Result};
use crate::model::{
    Attachment, BoundingBoxAttachment, LinkedMeshAttachment, MeshAttachment, PathAttachment,
    RegionAttachment, Skin,
};

pub(crate) const DEFAULT_SKIN: &str = "default";

/// Attachment selector byte.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum AttachmentType {
    Region,
    BoundingBox,
    Mesh,
    LinkedMesh,
    Path,
}

impl AttachmentType {
    fn from_byte(byte: u8) -> Option<Self> {
        Some(match byte {
            0 => Self::Region,
            1 => Self::BoundingBox,
            2 => Self::Mesh,
            3 => Self::LinkedMesh,
            4 => Self::Path,
            _ => return None,
        })
    }
}

/// Where an attachment sits, for diagnostics.
struct Location<'s> {
    skin: &'s str,
    slot: &'s str,
}

impl Location<'_> {
    fn describe(&self, attachment: &str) -> String {
        format!(
            "skin `{}`, slot `{}`, attachment `{attachment}`",
            self.skin, self.slot
        )
    }
}

impl<A: RegionSizes> Decoder<'_, A> {
    /// The default skin followed by the named skins.
    pub(super) fn read_skins(&mut self) -> Result<IndexMap<String, Skin>> {
        let mut skins = IndexMap::new();

        let default = self.read_skin(DEFAULT_SKIN)?;
        self.names.push(NameKind::Skin, DEFAULT_SKIN);
        skins.insert(DEFAULT_SKIN.to_owned(), default);

        let count = self.cursor.read_count()?;
        for _ in 0..count {
            let name = self.read_name()?;
            self.names.push(NameKind::Skin, name.as_str());
            let skin = self.read_skin(&name)?;
            skins.insert(name, skin);
        }
        Ok(skins)
    }

    fn read_skin(&mut self, skin_name: &str) -> Result<Skin> {
        let mut skin = Skin::new();
        let slot_count = self.cursor.read_count()?;
        for _ in 0..slot_count {
            let slot = self.read_ref(NameKind::Slot)?;
            let location = Location {
                skin: skin_name,
                slot: &slot,
            };

            let mut attachments = IndexMap::new();
            let attachment_count = self.cursor.read_count()?;
            for _ in 0..attachment_count {
                let key = self.read_name()?;
                let attachment = self.read_attachment(&key, &location)?;
                attachments.insert(key, attachment);
            }
            skin.entry(slot).or_default().extend(attachments);
        }
        Ok(skin)
    }

    fn read_attachment(&mut self, key: &str, location: &Location<'_>) -> Result<Attachment> {
        let name = self
            .cursor
            .read_string()?
            .unwrap_or_else(|| key.to_owned());

        let offset = self.cursor.position();
        let byte = self.cursor.read_u8()?;
        let kind = AttachmentType::from_byte(byte).ok_or(DecodeError::UnknownVariant {
            what: "attachment type",
            value: u32::from(byte),
            offset,
        })?;

        match kind {
            AttachmentType::Region => self.read_region(name).map(Attachment::Region),
            AttachmentType::BoundingBox => {
                self.diagnostics
                    .report(DiagnosticKind::BoundingBoxAttachment)
                    .detail(location.describe(&name))
                    .emit();
                self.read_bounding_box(name).map(Attachment::BoundingBox)
            }
            AttachmentType::Mesh => self.read_mesh(name).map(Attachment::Mesh),
            AttachmentType::LinkedMesh => self.read_linked_mesh(name).map(Attachment::LinkedMesh),
            AttachmentType::Path => {
                self.diagnostics
                    .report(DiagnosticKind::PathAttachment)
                    .detail(location.describe(&name))
                    .emit();
                self.read_path_attachment(name).map(Attachment::Path)
            }
        }
    }

    fn read_region(&mut self, name: String) -> Result<RegionAttachment> {
        Ok(RegionAttachment {
            name,
            path: self.cursor.read_string()?,
            rotation: self.cursor.read_f32()?,
            x: self.cursor.read_f32()?,
            y: self.cursor.read_f32()?,
            // Output scale is twice the stored value.
            scale_x: self.cursor.read_f32()? * 2.0,
            scale_y: self.cursor.read_f32()? * 2.0,
            width: self.cursor.read_f32()?,
            height: self.cursor.read_f32()?,
            color: self.read_color()?,
        })
    }

    fn read_bounding_box(&mut self, name: String) -> Result<BoundingBoxAttachment> {
        let vertex_count = self.cursor.read_count()?;
        let vertices = self.read_vertices(vertex_count)?;
        self.skip_nonessential_int()?;
        Ok(BoundingBoxAttachment {
            name,
            vertex_count: vertex_count as u32,
            vertices,
        })
    }

    fn read_mesh(&mut self, name: String) -> Result<MeshAttachment> {
        let path = self.cursor.read_string()?;
        let color = self.read_color()?;
        let vertex_count = self.cursor.read_count()?;
        let uvs = self
            .cursor
            .read_float_array(vertex_count.saturating_mul(2), 1.0)?;
        let triangles = self.cursor.read_short_array()?;
        let vertices = self.read_vertices(vertex_count)?;
        let hull_offset = self.cursor.position();
        let hull = self.cursor.read_count()?;
        if hull > vertex_count {
            return Err(DecodeError::InvalidHull {
                hull,
                vertices: vertex_count,
                offset: hull_offset,
            });
        }

        let (edges, width, height) = if self.nonessential {
            let edges = self
                .cursor
                .read_short_array()?
                .into_iter()
                .map(u32::from)
                .collect();
            (edges, self.cursor.read_f32()?, self.cursor.read_f32()?)
        } else {
            let region = path.as_deref().unwrap_or(&name);
            let (width, height) =
                self.atlas
                    .region_size(region)
                    .ok_or_else(|| DecodeError::RegionNotFound {
                        region: region.to_owned(),
                    })?;
            (default_edge_loop(hull), width as f32, height as f32)
        };

        Ok(MeshAttachment {
            name,
            path,
            color,
            uvs,
            triangles,
            vertices,
            hull: hull as u32,
            edges,
            width,
            height,
        })
    }

    fn read_linked_mesh(&mut self, name: String) -> Result<LinkedMeshAttachment> {
        let path = self.cursor.read_string()?;
        let color = self.read_color()?;
        let skin = self.cursor.read_string()?;
        let parent = self.cursor.read_string()?;
        let deform = self.cursor.read_bool()?;
        let (width, height) = if self.nonessential {
            (Some(self.cursor.read_f32()?), Some(self.cursor.read_f32()?))
        } else {
            (None, None)
        };

        Ok(LinkedMeshAttachment {
            name,
            path,
            color,
            skin,
            parent,
            deform,
            width,
            height,
        })
    }

    fn read_path_attachment(&mut self, name: String) -> Result<PathAttachment> {
        let closed = self.cursor.read_bool()?;
        let constant_speed = self.cursor.read_bool()?;
        let vertex_count = self.cursor.read_count()?;
        let vertices = self.read_vertices(vertex_count)?;
        let lengths = self.cursor.read_float_array(vertex_count / 3, 1.0)?;
        self.skip_nonessential_int()?;

        Ok(PathAttachment {
            name,
            closed,
            constant_speed,
            vertex_count: vertex_count as u32,
            vertices,
            lengths,
        })
    }

    /// Vertex block.
    ///
    /// Unweighted: `2 * vertex_count` floats. Weighted: per vertex a bone
    /// count followed by that many `(bone index, x, y, weight)` groups, all
    /// flattened into one float sequence.
    fn read_vertices(&mut self, vertex_count: usize) -> Result<Vec<f32>> {
        if !self.cursor.read_bool()? {
            return self
                .cursor
                .read_float_array(vertex_count.saturating_mul(2), 1.0);
        }

        let mut vertices = Vec::with_capacity(self.cursor.capacity_hint(vertex_count));
        for _ in 0..vertex_count {
            let bone_count = self.cursor.read_count()?;
            vertices.push(bone_count as f32);
            for _ in 0..bone_count {
                vertices.push(self.cursor.read_count()? as f32);
                vertices.push(self.cursor.read_f32()?);
                vertices.push(self.cursor.read_f32()?);
                vertices.push(self.cursor.read_f32()?);
            }
        }
        Ok(vertices)
    }
}
