use super::ramp::Ramp;

/// Quantizes luminance in `[0, 255]` onto a glyph ramp.
pub struct GlyphMapper {
    ramp: Ramp,
    invert: bool,
}

impl GlyphMapper {
    pub fn new(ramp: Ramp, invert: bool) -> Self {
        Self { ramp, invert }
    }

    pub fn index_for(&self, luma: f32) -> usize {
        let max_index = self.ramp.len() - 1;
        let scaled = (luma / 255.0) * max_index as f32;

        // NaN casts to zero; overshoot at full white is clamped.
        let index = (scaled.floor().max(0.0) as usize).min(max_index);
        if self.invert {
            max_index - index
        } else {
            index
        }
    }

    pub fn glyph_for(&self, luma: f32) -> char {
        self.ramp.glyph(self.index_for(luma))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::RampKind;

    #[test]
    fn extremes_map_to_ramp_ends() {
        let mapper = GlyphMapper::new(RampKind::Simple.ramp(), false);
        assert_eq!(mapper.index_for(0.0), 0);
        assert_eq!(mapper.index_for(255.0), 9);
        assert_eq!(mapper.glyph_for(255.0), '@');
        assert_eq!(mapper.index_for(300.0), 9);
        assert_eq!(mapper.index_for(-4.0), 0);
    }

    #[test]
    fn quantization_floors() {
        let mapper = GlyphMapper::new(RampKind::Low.ramp(), false);
        // 127.0 / 255 * 4 = 1.99..
        assert_eq!(mapper.index_for(127.0), 1);
        assert_eq!(mapper.index_for(127.5), 2);
    }

    #[test]
    fn inversion_mirrors_index() {
        let plain = GlyphMapper::new(RampKind::High.ramp(), false);
        let inverted = GlyphMapper::new(RampKind::High.ramp(), true);
        for luma in 0..=255 {
            let luma = luma as f32;
            assert_eq!(inverted.index_for(luma), 69 - plain.index_for(luma));
        }
        assert_eq!(inverted.glyph_for(255.0), ' ');
    }

    #[test]
    fn index_is_monotonic_in_luminance() {
        for kind in RampKind::ALL {
            let mapper = GlyphMapper::new(kind.ramp(), false);
            let mut previous = 0;
            for step in 0..=2550 {
                let index = mapper.index_for(step as f32 / 10.0);
                assert!(index >= previous, "{kind} decreased at {step}");
                previous = index;
            }
        }
    }
}
