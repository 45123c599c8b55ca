use skeljson_core::RegionSizes;

use super::Decoder;
use crate::error::{DecodeError, Result};
use crate::model::{Curve, Curved};

const CURVE_LINEAR: u8 = 0;
const CURVE_STEPPED: u8 = 1;
const CURVE_BEZIER: u8 = 2;

impl<A: RegionSizes> Decoder<'_, A> {
    pub(super) fn read_curve(&mut self) -> Result<Curve> {
        let offset = self.cursor.position();
        match self.cursor.read_u8()? {
            CURVE_LINEAR => Ok(Curve::Linear),
            CURVE_STEPPED => Ok(Curve::Stepped),
            CURVE_BEZIER => Ok(Curve::Bezier([
                self.cursor.read_f32()?,
                self.cursor.read_f32()?,
                self.cursor.read_f32()?,
                self.cursor.read_f32()?,
            ])),
            other => Err(DecodeError::UnknownVariant {
                what: "curve type",
                value: u32::from(other),
                offset,
            }),
        }
    }

    /// `count` frames, each followed by a curve except the last.
    pub(super) fn read_curved_frames<T: Curved>(
        &mut self,
        count: usize,
        mut read: impl FnMut(&mut Self) -> Result<T>,
    ) -> Result<Vec<T>> {
        let mut frames = Vec::with_capacity(self.cursor.capacity_hint(count));
        for i in 0..count {
            let mut frame = read(self)?;
            if i + 1 < count {
                *frame.curve_mut() = self.read_curve()?;
            }
            frames.push(frame);
        }
        Ok(frames)
    }
}
