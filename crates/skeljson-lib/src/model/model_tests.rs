use super::*;

fn json<T: serde::Serialize>(value: &T) -> String {
    serde_json::to_string(value).unwrap()
}

#[test]
fn curve_serialization() {
    insta::assert_snapshot!(json(&Curve::Stepped), @r#""stepped""#);
    insta::assert_snapshot!(json(&Curve::Bezier([0.25, 0.0, 0.75, 1.0])), @"[0.25,0.0,0.75,1.0]");
}

#[test]
fn linear_curve_is_omitted_from_frames() {
    let frame = RotateFrame {
        time: 0.5,
        angle: 90.0,
        curve: Curve::Linear,
    };
    insta::assert_snapshot!(json(&frame), @r#"{"time":0.5,"angle":90.0}"#);

    let frame = RotateFrame {
        curve: Curve::Stepped,
        ..frame
    };
    insta::assert_snapshot!(json(&frame), @r#"{"time":0.5,"angle":90.0,"curve":"stepped"}"#);
}

#[test]
fn mode_tables() {
    assert_eq!(TransformMode::from_index(4), Some(TransformMode::NoScaleOrReflection));
    assert_eq!(TransformMode::from_index(5), None);
    assert_eq!(BlendMode::from_index(3), Some(BlendMode::Screen));
    assert_eq!(PositionMode::from_index(0), Some(PositionMode::Fixed));
    assert_eq!(RotateMode::from_index(2), Some(RotateMode::ChainScale));
}

#[test]
fn mode_defaults_are_suppressed() {
    assert_eq!(TransformMode::Normal.non_default(), None);
    assert_eq!(PositionMode::Percent.non_default(), None);
    assert_eq!(PositionMode::Fixed.non_default(), Some(PositionMode::Fixed));
    assert_eq!(SpacingMode::Length.non_default(), None);
    assert_eq!(RotateMode::Tangent.non_default(), None);
}

#[test]
fn mode_names() {
    insta::assert_snapshot!(json(&TransformMode::NoRotationOrReflection), @r#""NoRotationOrReflection""#);
    insta::assert_snapshot!(json(&BlendMode::Additive), @r#""Additive""#);
    insta::assert_snapshot!(json(&SpacingMode::Percent), @r#""percent""#);
    insta::assert_snapshot!(json(&RotateMode::ChainScale), @r#""chainScale""#);
}

#[test]
fn attachment_is_tagged_by_type() {
    let attachment = Attachment::BoundingBox(BoundingBoxAttachment {
        name: "hitbox".to_owned(),
        vertex_count: 1,
        vertices: vec![1.0, 2.0],
    });
    insta::assert_snapshot!(
        json(&attachment),
        @r#"{"type":"boundingbox","name":"hitbox","vertexCount":1,"vertices":[1.0,2.0]}"#
    );
    assert_eq!(attachment.name(), "hitbox");
}

#[test]
fn event_def_drops_zero_payloads() {
    let def = EventDef::default();
    insta::assert_snapshot!(json(&def), @"{}");

    let def = EventDef {
        int: -3,
        float: 0.5,
        string: Some("boom".to_owned()),
    };
    insta::assert_snapshot!(json(&def), @r#"{"int":-3,"float":0.5,"string":"boom"}"#);
}

#[test]
fn bone_keys_are_camel_case() {
    let bone = Bone {
        name: "arm".to_owned(),
        parent: Some("root".to_owned()),
        scale_x: Some(2.0),
        transform: Some(TransformMode::NoScale),
        ..Bone::default()
    };
    insta::assert_snapshot!(
        json(&bone),
        @r#"{"name":"arm","parent":"root","scaleX":2.0,"transform":"NoScale"}"#
    );
}
