use skeljson_core::NameKind;

use super::Decoder;
use crate::cursor::ByteCursor;
use crate::error::DecodeError;
use crate::model::{BlendMode, Bone, TransformMode};
use crate::test_utils::{SkelWriter, Sizes};

fn decoder(bytes: &[u8], nonessential: bool) -> Decoder<'_, Sizes> {
    Decoder::new(ByteCursor::new(bytes), Sizes::new(), nonessential)
}

#[test]
fn root_bone_has_only_a_name() {
    let bytes = SkelWriter::new()
        .default_bone("root", None, false)
        .finish();
    let mut d = decoder(&bytes, false);

    let bone = d.read_bone().unwrap();

    assert_eq!(
        bone,
        Bone {
            name: "root".to_owned(),
            ..Bone::default()
        }
    );
    assert!(d.cursor.is_at_end());
    assert_eq!(d.names.get(NameKind::Bone, 0).unwrap(), "root");
}

#[test]
fn child_bone_resolves_parent() {
    let bytes = SkelWriter::new()
        .default_bone("root", None, false)
        .default_bone("hip", Some(0), false)
        .default_bone("leg", Some(1), false)
        .finish();
    let mut d = decoder(&bytes, false);

    d.read_bone().unwrap();
    d.read_bone().unwrap();
    let leg = d.read_bone().unwrap();

    assert_eq!(leg.parent.as_deref(), Some("hip"));
    assert_eq!(d.names.len(NameKind::Bone), 3);
}

#[test]
fn bone_cannot_reference_itself() {
    let bytes = SkelWriter::new()
        .default_bone("root", None, false)
        .default_bone("loop", Some(1), false)
        .finish();
    let mut d = decoder(&bytes, false);

    d.read_bone().unwrap();
    let err = d.read_bone().unwrap_err();
    insta::assert_snapshot!(err.to_string(), @"bone index 1 out of range (table has 1 entries)");
}

#[test]
fn bone_fields_respect_tolerance() {
    let bytes = SkelWriter::new()
        .name("root")
        .floats(&[45.0, 0.000005, 0.0001, 1.5, 1.000005, -0.5, 0.0, 12.0])
        .varint(3)
        .finish();
    let mut d = decoder(&bytes, false);

    let bone = d.read_bone().unwrap();

    assert_eq!(bone.rotation, Some(45.0));
    assert_eq!(bone.x, None);
    assert_eq!(bone.y, Some(0.0001));
    assert_eq!(bone.scale_x, Some(1.5));
    assert_eq!(bone.scale_y, None);
    assert_eq!(bone.shear_x, Some(-0.5));
    assert_eq!(bone.shear_y, None);
    assert_eq!(bone.length, Some(12.0));
    assert_eq!(bone.transform, Some(TransformMode::NoScale));
}

#[test]
fn nonessential_bone_skips_trailing_int() {
    let bytes = SkelWriter::new()
        .default_bone("root", None, true)
        .finish();
    let mut d = decoder(&bytes, true);

    d.read_bone().unwrap();
    assert!(d.cursor.is_at_end());
}

#[test]
fn unknown_transform_mode() {
    let bytes = SkelWriter::new()
        .name("root")
        .floats(&[0.0, 0.0, 0.0, 1.0, 1.0, 0.0, 0.0, 0.0])
        .varint(9)
        .finish();
    let mut d = decoder(&bytes, false);

    let err = d.read_bone().unwrap_err();
    insta::assert_snapshot!(err.to_string(), @"unknown transform mode 9 at offset 0x25");
}

#[test]
fn default_slot() {
    let bytes = SkelWriter::new().default_slot("body", 0).finish();
    let mut d = decoder(&bytes, false);
    d.names.push(NameKind::Bone, "root");

    let slot = d.read_slot().unwrap();

    insta::assert_snapshot!(
        serde_json::to_string(&slot).unwrap(),
        @r#"{"name":"body","bone":"root"}"#
    );
    assert_eq!(d.names.get(NameKind::Slot, 0).unwrap(), "body");
}

#[test]
fn slot_with_color_attachment_and_blend() {
    let bytes = SkelWriter::new()
        .name("glow")
        .varint(0)
        .color(0xFF8000C0)
        .name("glow-fx")
        .varint(1)
        .finish();
    let mut d = decoder(&bytes, false);
    d.names.push(NameKind::Bone, "root");

    let slot = d.read_slot().unwrap();

    assert_eq!(slot.color.as_deref(), Some("FF8000C0"));
    assert_eq!(slot.attachment.as_deref(), Some("glow-fx"));
    assert_eq!(slot.blend, Some(BlendMode::Additive));
}

#[test]
fn slot_bone_out_of_range() {
    let bytes = SkelWriter::new().default_slot("body", 2).finish();
    let mut d = decoder(&bytes, false);
    d.names.push(NameKind::Bone, "root");

    let err = d.read_slot().unwrap_err();
    assert!(matches!(
        err,
        DecodeError::IndexOutOfRange {
            kind: NameKind::Bone,
            index: 2,
            len: 1
        }
    ));
}

#[test]
fn event_definitions() {
    let bytes = SkelWriter::new()
        .varint(2)
        .name("step")
        .signed_varint(0)
        .float(0.0)
        .string(None)
        .name("hit")
        .signed_varint(-4)
        .float(0.25)
        .name("sfx/hit.ogg")
        .finish();
    let mut d = decoder(&bytes, false);

    let events = d.read_events().unwrap();

    insta::assert_snapshot!(
        serde_json::to_string(&events).unwrap(),
        @r#"{"step":{},"hit":{"int":-4,"float":0.25,"string":"sfx/hit.ogg"}}"#
    );
    assert_eq!(d.names.get(NameKind::Event, 1).unwrap(), "hit");
}
