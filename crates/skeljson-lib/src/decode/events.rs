use indexmap::IndexMap;
use skeljson_core::{NameKind, RegionSizes};

use super::Decoder;
use crate::error::Result;
use crate::model::EventDef;

impl<A: RegionSizes> Decoder<'_, A> {
    pub(super) fn read_events(&mut self) -> Result<IndexMap<String, EventDef>> {
        let count = self.cursor.read_count()?;
        let mut events = IndexMap::with_capacity(self.cursor.capacity_hint(count));
        for _ in 0..count {
            let name = self.read_name()?;
            self.names.push(NameKind::Event, name.as_str());
            let def = EventDef {
                int: self.cursor.read_varint(true)?,
                float: self.cursor.read_f32()?,
                string: self.cursor.read_string()?,
            };
            events.insert(name, def);
        }
        Ok(events)
    }
}
