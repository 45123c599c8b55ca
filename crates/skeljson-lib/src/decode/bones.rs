use skeljson_core::{NameKind, RegionSizes};
use skeljson_core::utils::non_default;

use super::Decoder;
use crate::error::Result;
use crate::model::{Bone, Mode, TransformMode};

impl<A: RegionSizes> Decoder<'_, A> {
    pub(super) fn read_bone(&mut self) -> Result<Bone> {
        let name = self.read_name()?;
        // The first bone is the root and stores no parent index.
        let parent = if self.names.len(NameKind::Bone) == 0 {
            None
        } else {
            Some(self.read_ref(NameKind::Bone)?)
        };
        self.names.push(NameKind::Bone, name.as_str());

        let rotation = non_default(self.cursor.read_f32()?, 0.0);
        let x = non_default(self.cursor.read_f32()?, 0.0);
        let y = non_default(self.cursor.read_f32()?, 0.0);
        let scale_x = non_default(self.cursor.read_f32()?, 1.0);
        let scale_y = non_default(self.cursor.read_f32()?, 1.0);
        let shear_x = non_default(self.cursor.read_f32()?, 0.0);
        let shear_y = non_default(self.cursor.read_f32()?, 0.0);
        let length = non_default(self.cursor.read_f32()?, 0.0);
        let transform = self.read_mode::<TransformMode>()?.non_default();
        self.skip_nonessential_int()?;

        Ok(Bone {
            name,
            parent,
            rotation,
            x,
            y,
            scale_x,
            scale_y,
            shear_x,
            shear_y,
            length,
            transform,
        })
    }
}
