use indexmap::IndexMap;
use serde::Serialize;

/// Slot name → attachment key → attachment.
pub type Skin = IndexMap<String, IndexMap<String, Attachment>>;

/// Attachment record, tagged by its `type` in the output.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Attachment {
    Region(RegionAttachment),
    BoundingBox(BoundingBoxAttachment),
    Mesh(MeshAttachment),
    LinkedMesh(LinkedMeshAttachment),
    Path(PathAttachment),
}

impl Attachment {
    pub fn name(&self) -> &str {
        match self {
            Self::Region(a) => &a.name,
            Self::BoundingBox(a) => &a.name,
            Self::Mesh(a) => &a.name,
            Self::LinkedMesh(a) => &a.name,
            Self::Path(a) => &a.name,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegionAttachment {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    pub rotation: f32,
    pub x: f32,
    pub y: f32,
    pub scale_x: f32,
    pub scale_y: f32,
    pub width: f32,
    pub height: f32,
    pub color: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BoundingBoxAttachment {
    pub name: String,
    pub vertex_count: u32,
    pub vertices: Vec<f32>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MeshAttachment {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    pub color: String,
    pub uvs: Vec<f32>,
    pub triangles: Vec<u16>,
    pub vertices: Vec<f32>,
    pub hull: u32,
    pub edges: Vec<u32>,
    pub width: f32,
    pub height: f32,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkedMeshAttachment {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    pub color: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skin: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent: Option<String>,
    pub deform: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<f32>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PathAttachment {
    pub name: String,
    pub closed: bool,
    pub constant_speed: bool,
    pub vertex_count: u32,
    pub vertices: Vec<f32>,
    pub lengths: Vec<f32>,
}
