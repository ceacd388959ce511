use crate::core::actions::render_frame::ports::colour_map::ColourMap;
use crate::core::data::colour::Colour;
use crate::core::fractals::mandelbrot::palette::Palette;

/// Colours escape-time counts from a [`Palette`].
#[derive(Debug, Clone)]
pub struct PaletteColourMap {
    palette: Palette,
    max_iterations: u32,
}

impl PaletteColourMap {
    #[must_use]
    pub fn new(palette: Palette, max_iterations: u32) -> Self {
        Self {
            palette,
            max_iterations,
        }
    }

    #[must_use]
    pub fn palette(&self) -> &Palette {
        &self.palette
    }
}

impl ColourMap for PaletteColourMap {
    #[inline]
    fn index(&self, iterations: u32) -> usize {
        self.palette.index_for(iterations, self.max_iterations)
    }

    #[inline]
    fn colour(&self, iterations: u32) -> Colour {
        self.palette.entry(self.index(iterations))
    }
}
