use crate::core::data::colour::Colour;

pub trait ColourMap {
    /// Palette slot for an iteration count.
    fn index(&self, iterations: u32) -> usize;

    fn colour(&self, iterations: u32) -> Colour;
}
