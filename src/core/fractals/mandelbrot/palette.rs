use crate::core::data::colour::Colour;
use crate::core::fractals::mandelbrot::errors::PaletteError;

/// Palette slots addressable by a colour index, including the reserved slot 0.
pub const MAX_PALETTE_SLOTS: usize = 64;

/// Slot reserved for points that never escape.
pub const NON_ESCAPING_INDEX: usize = 0;

/// Hand-authored fire ramp cycled through by escaping points.
pub const DEFAULT_RAMP: [Colour; 40] = [
    Colour::new(255, 180, 4),
    Colour::new(240, 156, 4),
    Colour::new(220, 124, 4),
    Colour::new(156, 71, 4),
    Colour::new(72, 20, 4),
    Colour::new(251, 180, 4),
    Colour::new(180, 74, 4),
    Colour::new(180, 70, 4),
    Colour::new(164, 91, 4),
    Colour::new(100, 28, 4),
    Colour::new(191, 82, 4),
    Colour::new(47, 5, 4),
    Colour::new(138, 39, 4),
    Colour::new(81, 27, 4),
    Colour::new(192, 89, 4),
    Colour::new(61, 27, 4),
    Colour::new(216, 148, 4),
    Colour::new(71, 14, 4),
    Colour::new(142, 48, 4),
    Colour::new(196, 102, 4),
    Colour::new(58, 9, 4),
    Colour::new(132, 45, 4),
    Colour::new(95, 15, 4),
    Colour::new(92, 21, 4),
    Colour::new(166, 59, 4),
    Colour::new(244, 178, 4),
    Colour::new(194, 121, 4),
    Colour::new(120, 41, 4),
    Colour::new(53, 14, 4),
    Colour::new(80, 15, 4),
    Colour::new(23, 3, 4),
    Colour::new(249, 204, 4),
    Colour::new(97, 25, 4),
    Colour::new(124, 30, 4),
    Colour::new(151, 57, 4),
    Colour::new(104, 36, 4),
    Colour::new(239, 171, 4),
    Colour::new(131, 57, 4),
    Colour::new(111, 23, 4),
    Colour::new(4, 2, 4),
];

/// Immutable colour table: slot 0 is black, slots `1..=ramp_len` the ramp.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    ramp: Vec<Colour>,
}

impl Palette {
    pub fn new(ramp: Vec<Colour>) -> Result<Self, PaletteError> {
        if ramp.is_empty() {
            return Err(PaletteError::EmptyRamp);
        }

        if ramp.len() >= MAX_PALETTE_SLOTS {
            return Err(PaletteError::RampTooLong {
                len: ramp.len(),
                max: MAX_PALETTE_SLOTS - 1,
            });
        }

        Ok(Self { ramp })
    }

    #[must_use]
    pub fn ramp_len(&self) -> usize {
        self.ramp.len()
    }

    #[must_use]
    pub fn slot_count(&self) -> usize {
        self.ramp.len() + 1
    }

    #[must_use]
    pub fn entry(&self, index: usize) -> Colour {
        match index {
            NON_ESCAPING_INDEX => Colour::BLACK,
            i => self.ramp[(i - 1) % self.ramp.len()],
        }
    }

    /// `0` for a non-escaping count, otherwise `(iterations mod ramp_len) + 1`.
    #[must_use]
    pub fn index_for(&self, iterations: u32, max_iterations: u32) -> usize {
        if iterations >= max_iterations {
            return NON_ESCAPING_INDEX;
        }

        iterations as usize % self.ramp.len() + 1
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            ramp: DEFAULT_RAMP.to_vec(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_palette_has_forty_ramp_colours() {
        let palette = Palette::default();

        assert_eq!(palette.ramp_len(), 40);
        assert_eq!(palette.slot_count(), 41);
        assert_eq!(palette.entry(1), Colour::new(255, 180, 4));
        assert_eq!(palette.entry(40), Colour::new(4, 2, 4));
    }

    #[test]
    fn test_slot_zero_is_black() {
        assert_eq!(Palette::default().entry(NON_ESCAPING_INDEX), Colour::BLACK);
    }

    #[test]
    fn test_max_iterations_maps_to_slot_zero() {
        let palette = Palette::default();

        assert_eq!(palette.index_for(500, 500), 0);
        assert_eq!(palette.index_for(40, 40), 0);
    }

    #[test]
    fn test_escaping_counts_skip_slot_zero_and_wrap() {
        let palette = Palette::default();

        assert_eq!(palette.index_for(0, 500), 1);
        assert_eq!(palette.index_for(39, 500), 40);
        assert_eq!(palette.index_for(40, 500), 1);
        assert_eq!(palette.index_for(63, 500), 24);
        assert_eq!(palette.index_for(64, 500), 25);
    }

    #[test]
    fn test_every_index_stays_inside_palette() {
        let palette = Palette::default();
        let max_iterations = 500;

        for iterations in 0..=max_iterations {
            let index = palette.index_for(iterations, max_iterations);

            assert!(index < MAX_PALETTE_SLOTS);
            assert!(index < palette.slot_count());
            if iterations < max_iterations {
                assert!((1..MAX_PALETTE_SLOTS).contains(&index));
            }
        }
    }

    #[test]
    fn test_longest_allowed_ramp_still_fits_in_slots() {
        let palette = Palette::new(vec![Colour::new(1, 2, 3); 63]).unwrap();

        assert_eq!(palette.index_for(62, 1000), 63);
        assert_eq!(palette.index_for(63, 1000), 1);
    }

    #[test]
    fn test_empty_ramp_is_rejected() {
        assert_eq!(Palette::new(vec![]), Err(PaletteError::EmptyRamp));
    }

    #[test]
    fn test_ramp_filling_reserved_slot_is_rejected() {
        assert_eq!(
            Palette::new(vec![Colour::BLACK; 64]),
            Err(PaletteError::RampTooLong { len: 64, max: 63 })
        );
    }
}
