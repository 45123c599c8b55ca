use skeljson_core::utils::non_default;
use skeljson_core::{NameKind, RegionSizes};

use super::Decoder;
use crate::diagnostics::DiagnosticKind;
use crate::error::Result;
use crate::model::{
    IkConstraint, Mode, PathConstraint, PositionMode, RotateMode, SpacingMode, TransformConstraint,
};

/// Fields every constraint starts with after its name.
struct Common {
    name: String,
    order: u32,
    bones: Vec<String>,
    target: String,
}

impl<A: RegionSizes> Decoder<'_, A> {
    fn read_constraint_common(&mut self, kind: NameKind) -> Result<Common> {
        let name = self.read_name()?;
        self.names.push(kind, name.as_str());
        let order = self.cursor.read_count()? as u32;
        let bones = self.read_refs(NameKind::Bone)?;
        let target = self.read_ref(NameKind::Bone)?;
        Ok(Common {
            name,
            order,
            bones,
            target,
        })
    }

    pub(super) fn read_ik_constraint(&mut self) -> Result<IkConstraint> {
        let Common {
            name,
            order,
            bones,
            target,
        } = self.read_constraint_common(NameKind::Ik)?;
        let mix = non_default(self.cursor.read_f32()?, 1.0);
        let bend_positive = self.cursor.read_sbyte()? == 1;

        Ok(IkConstraint {
            name,
            order,
            bones,
            target,
            mix,
            bend_positive: (!bend_positive).then_some(false),
        })
    }

    pub(super) fn read_transform_constraint(&mut self) -> Result<TransformConstraint> {
        let Common {
            name,
            order,
            bones,
            target,
        } = self.read_constraint_common(NameKind::Transform)?;
        self.diagnostics
            .report(DiagnosticKind::TransformConstraint)
            .detail(format!("constraint `{name}`"))
            .emit();

        Ok(TransformConstraint {
            rotation: non_default(self.cursor.read_f32()?, 0.0),
            x: non_default(self.cursor.read_f32()?, 0.0),
            y: non_default(self.cursor.read_f32()?, 0.0),
            scale_x: non_default(self.cursor.read_f32()?, 0.0),
            scale_y: non_default(self.cursor.read_f32()?, 0.0),
            shear_y: non_default(self.cursor.read_f32()?, 0.0),
            rotate_mix: non_default(self.cursor.read_f32()?, 1.0),
            translate_mix: non_default(self.cursor.read_f32()?, 1.0),
            scale_mix: non_default(self.cursor.read_f32()?, 1.0),
            shear_mix: non_default(self.cursor.read_f32()?, 1.0),
            name,
            order,
            bones,
            target,
        })
    }

    pub(super) fn read_path_constraint(&mut self) -> Result<PathConstraint> {
        let Common {
            name,
            order,
            bones,
            target,
        } = self.read_constraint_common(NameKind::Path)?;
        self.diagnostics
            .report(DiagnosticKind::PathConstraint)
            .detail(format!("constraint `{name}`"))
            .emit();

        Ok(PathConstraint {
            position_mode: self.read_mode::<PositionMode>()?.non_default(),
            spacing_mode: self.read_mode::<SpacingMode>()?.non_default(),
            rotate_mode: self.read_mode::<RotateMode>()?.non_default(),
            rotation: non_default(self.cursor.read_f32()?, 0.0),
            position: non_default(self.cursor.read_f32()?, 0.0),
            spacing: non_default(self.cursor.read_f32()?, 0.0),
            rotate_mix: non_default(self.cursor.read_f32()?, 1.0),
            translate_mix: non_default(self.cursor.read_f32()?, 1.0),
            name,
            order,
            bones,
            target,
        })
    }
}
