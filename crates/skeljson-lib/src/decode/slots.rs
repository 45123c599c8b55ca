use skeljson_core::{NameKind, RegionSizes};

use super::Decoder;
use crate::error::Result;
use crate::model::{BlendMode, Mode, Slot};

const DEFAULT_SLOT_COLOR: &str = "FFFFFFFF";

impl<A: RegionSizes> Decoder<'_, A> {
    pub(super) fn read_slot(&mut self) -> Result<Slot> {
        let name = self.read_name()?;
        self.names.push(NameKind::Slot, name.as_str());
        let bone = self.read_ref(NameKind::Bone)?;
        let color = Some(self.read_color()?).filter(|c| c != DEFAULT_SLOT_COLOR);
        let attachment = self.cursor.read_string()?;
        let blend = self.read_mode::<BlendMode>()?.non_default();

        Ok(Slot {
            name,
            bone,
            color,
            attachment,
            blend,
        })
    }
}
