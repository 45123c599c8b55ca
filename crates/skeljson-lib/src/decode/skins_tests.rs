use skeljson_core::NameKind;

use super::Decoder;
use crate::cursor::ByteCursor;
use crate::diagnostics::DiagnosticKind;
use crate::error::DecodeError;
use crate::model::Attachment;
use crate::test_utils::{SkelWriter, Sizes, sizes};

fn decoder<'a>(bytes: &'a [u8], atlas: Sizes, nonessential: bool) -> Decoder<'a, Sizes> {
    let mut d = Decoder::new(ByteCursor::new(bytes), atlas, nonessential);
    d.names.push(NameKind::Bone, "root");
    d.names.push(NameKind::Slot, "body");
    d.names.push(NameKind::Slot, "weapon");
    d
}

/// Default skin holding one attachment in slot 0, no named skins.
fn single_attachment(key: &str, body: impl FnOnce(&mut SkelWriter)) -> Vec<u8> {
    let mut w = SkelWriter::new();
    w.varint(1).varint(0).varint(1).name(key);
    body(&mut w);
    w.varint(0);
    w.finish()
}

fn only_attachment(d: &mut Decoder<'_, Sizes>) -> Attachment {
    let skins = d.read_skins().unwrap();
    assert!(d.cursor.is_at_end());
    skins["default"]["body"].values().next().unwrap().clone()
}

#[test]
fn empty_default_skin() {
    let bytes = SkelWriter::new().varint(0).varint(0).finish();
    let mut d = decoder(&bytes, Sizes::new(), false);

    let skins = d.read_skins().unwrap();

    assert_eq!(skins.len(), 1);
    assert!(skins["default"].is_empty());
    assert_eq!(d.names.get(NameKind::Skin, 0).unwrap(), "default");
}

#[test]
fn named_skins_follow_default() {
    let bytes = SkelWriter::new()
        .varint(0)
        .varint(2)
        .name("red")
        .varint(0)
        .name("blue")
        .varint(0)
        .finish();
    let mut d = decoder(&bytes, Sizes::new(), false);

    let skins = d.read_skins().unwrap();

    let names: Vec<_> = skins.keys().map(String::as_str).collect();
    assert_eq!(names, ["default", "red", "blue"]);
    assert_eq!(d.names.get(NameKind::Skin, 2).unwrap(), "blue");
}

#[test]
fn region_attachment() {
    let bytes = single_attachment("head", |w| {
        w.string(None)
            .byte(0)
            .name("images/head")
            .floats(&[15.0, 1.0, 2.0, 0.5, 0.5, 64.0, 32.0])
            .color(0xFFFFFFFF);
    });
    let mut d = decoder(&bytes, Sizes::new(), false);

    let attachment = only_attachment(&mut d);

    insta::assert_snapshot!(
        serde_json::to_string(&attachment).unwrap(),
        @r#"{"type":"region","name":"head","path":"images/head","rotation":15.0,"x":1.0,"y":2.0,"scaleX":1.0,"scaleY":1.0,"width":64.0,"height":32.0,"color":"FFFFFFFF"}"#
    );
}

#[test]
fn explicit_attachment_name_overrides_key() {
    let bytes = single_attachment("key", |w| {
        w.name("real-name")
            .byte(0)
            .string(None)
            .floats(&[0.0, 0.0, 0.0, 0.5, 0.5, 1.0, 1.0])
            .color(0);
    });
    let mut d = decoder(&bytes, Sizes::new(), false);

    let skins = d.read_skins().unwrap();
    let attachment = &skins["default"]["body"]["key"];
    assert_eq!(attachment.name(), "real-name");
}

#[test]
fn mesh_without_nonessential_uses_atlas() {
    let bytes = single_attachment("cape", |w| {
        w.string(None)
            .byte(2)
            .string(None)
            .color(0xFFFFFFFF)
            .varint(3)
            .floats(&[0.0, 0.0, 1.0, 0.0, 0.0, 1.0])
            .shorts(&[0, 1, 2])
            .bool(false)
            .floats(&[0.0, 0.0, 10.0, 0.0, 0.0, 10.0])
            .varint(3);
    });
    let mut d = decoder(&bytes, sizes(&[("cape", 128, 96)]), false);

    let Attachment::Mesh(mesh) = only_attachment(&mut d) else {
        panic!("expected mesh");
    };

    assert_eq!(mesh.edges, vec![0, 2, 2, 4, 4, 0]);
    assert_eq!((mesh.width, mesh.height), (128.0, 96.0));
    assert_eq!(mesh.hull, 3);
    assert_eq!(mesh.triangles, vec![0, 1, 2]);
    assert_eq!(mesh.uvs.len(), 6);
}

#[test]
fn mesh_atlas_key_prefers_path() {
    let bytes = single_attachment("cape", |w| {
        w.string(None)
            .byte(2)
            .name("cloth/cape")
            .color(0xFFFFFFFF)
            .varint(0)
            .shorts(&[])
            .bool(false)
            .varint(0);
    });
    let mut d = decoder(&bytes, sizes(&[("cape", 1, 1), ("cloth/cape", 8, 4)]), false);

    let Attachment::Mesh(mesh) = only_attachment(&mut d) else {
        panic!("expected mesh");
    };
    assert_eq!((mesh.width, mesh.height), (8.0, 4.0));
    assert!(mesh.edges.is_empty());
}

#[test]
fn mesh_region_not_found() {
    let bytes = single_attachment("cape", |w| {
        w.string(None)
            .byte(2)
            .string(None)
            .color(0xFFFFFFFF)
            .varint(0)
            .shorts(&[])
            .bool(false)
            .varint(0);
    });
    let mut d = decoder(&bytes, sizes(&[("hood", 1, 1)]), false);

    let err = d.read_skins().unwrap_err();
    insta::assert_snapshot!(err.to_string(), @"region `cape` not found in atlas");
}

#[test]
fn mesh_hull_exceeds_vertex_count() {
    let bytes = single_attachment("cape", |w| {
        w.string(None)
            .byte(2)
            .string(None)
            .color(0xFFFFFFFF)
            .varint(1)
            .floats(&[0.0, 0.0])
            .shorts(&[])
            .bool(false)
            .floats(&[0.0, 0.0])
            .varint(u32::MAX);
    });
    let mut d = decoder(&bytes, sizes(&[("cape", 1, 1)]), false);

    let err = d.read_skins().unwrap_err();
    assert!(matches!(
        err,
        DecodeError::InvalidHull {
            hull: 4294967295,
            vertices: 1,
            offset: 0x22,
        }
    ));
    insta::assert_snapshot!(
        err.to_string(),
        @"mesh hull of 4294967295 vertices exceeds its 1 vertices at offset 0x22"
    );
}

#[test]
fn nonessential_mesh_reads_edges_and_size() {
    let bytes = single_attachment("cape", |w| {
        w.string(None)
            .byte(2)
            .string(None)
            .color(0xFFFFFFFF)
            .varint(1)
            .floats(&[0.5, 0.5])
            .shorts(&[])
            .bool(false)
            .floats(&[3.0, 4.0])
            .varint(1)
            .shorts(&[0, 2])
            .float(50.0)
            .float(60.0);
    });
    let mut d = decoder(&bytes, Sizes::new(), true);

    let Attachment::Mesh(mesh) = only_attachment(&mut d) else {
        panic!("expected mesh");
    };
    assert_eq!(mesh.edges, vec![0, 2]);
    assert_eq!((mesh.width, mesh.height), (50.0, 60.0));
}

#[test]
fn weighted_vertices_are_flattened() {
    let bytes = single_attachment("skin", |w| {
        w.string(None)
            .byte(2)
            .string(None)
            .color(0xFFFFFFFF)
            .varint(2)
            .floats(&[0.0, 0.0, 1.0, 1.0])
            .shorts(&[])
            .bool(true)
            // vertex 0: one bone
            .varint(1)
            .varint(0)
            .floats(&[1.0, 2.0, 1.0])
            // vertex 1: two bones
            .varint(2)
            .varint(0)
            .floats(&[3.0, 4.0, 0.25])
            .varint(1)
            .floats(&[5.0, 6.0, 0.75])
            .varint(2);
    });
    let mut d = decoder(&bytes, sizes(&[("skin", 2, 2)]), false);

    let Attachment::Mesh(mesh) = only_attachment(&mut d) else {
        panic!("expected mesh");
    };
    assert_eq!(
        mesh.vertices,
        vec![
            1.0, 0.0, 1.0, 2.0, 1.0, //
            2.0, 0.0, 3.0, 4.0, 0.25, 1.0, 5.0, 6.0, 0.75,
        ]
    );
}

#[test]
fn linked_mesh() {
    let bytes = single_attachment("cape-red", |w| {
        w.string(None)
            .byte(3)
            .string(None)
            .color(0xFF0000FF)
            .name("red")
            .name("cape")
            .bool(true);
    });
    let mut d = decoder(&bytes, Sizes::new(), false);

    let attachment = only_attachment(&mut d);
    insta::assert_snapshot!(
        serde_json::to_string(&attachment).unwrap(),
        @r#"{"type":"linkedmesh","name":"cape-red","color":"FF0000FF","skin":"red","parent":"cape","deform":true}"#
    );
}

#[test]
fn bounding_box_logs_diagnostic() {
    let bytes = single_attachment("hitbox", |w| {
        w.string(None)
            .byte(1)
            .varint(2)
            .bool(false)
            .floats(&[0.0, 0.0, 1.0, 1.0])
            .int(0);
    });
    let mut d = decoder(&bytes, Sizes::new(), true);

    let Attachment::BoundingBox(bbox) = only_attachment(&mut d) else {
        panic!("expected bounding box");
    };
    assert_eq!(bbox.vertex_count, 2);
    insta::assert_snapshot!(d.diagnostics.render(), @r"
    DragonBones does not support bounding box attachments (1):
      - skin `default`, slot `body`, attachment `hitbox`
    ");
}

#[test]
fn path_attachment_lengths() {
    let bytes = single_attachment("rope", |w| {
        w.string(None)
            .byte(4)
            .bool(true)
            .bool(false)
            .varint(6)
            .bool(false)
            .floats(&[0.0; 12])
            .floats(&[10.0, 20.0]);
    });
    let mut d = decoder(&bytes, Sizes::new(), false);

    let Attachment::Path(path) = only_attachment(&mut d) else {
        panic!("expected path");
    };
    assert!(path.closed);
    assert!(!path.constant_speed);
    assert_eq!(path.lengths, vec![10.0, 20.0]);
    assert_eq!(d.diagnostics.count(DiagnosticKind::PathAttachment), 1);
}

#[test]
fn unknown_attachment_type() {
    let bytes = single_attachment("point", |w| {
        w.string(None).byte(6);
    });
    let mut d = decoder(&bytes, Sizes::new(), false);

    let err = d.read_skins().unwrap_err();
    assert!(matches!(
        err,
        DecodeError::UnknownVariant {
            what: "attachment type",
            value: 6,
            offset: 10,
        }
    ));
}

#[test]
fn skin_slot_out_of_range() {
    let bytes = SkelWriter::new().varint(1).varint(7).varint(0).finish();
    let mut d = decoder(&bytes, Sizes::new(), false);

    let err = d.read_skins().unwrap_err();
    assert!(matches!(
        err,
        DecodeError::IndexOutOfRange {
            kind: NameKind::Slot,
            index: 7,
            len: 2
        }
    ));
}
