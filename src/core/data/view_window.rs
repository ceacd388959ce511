use crate::core::data::complex::Complex;
use crate::core::data::lane_batch::LANES;
use crate::core::data::resolution::Resolution;

/// Snapshot of the mapping from viewport pixels to the complex plane.
///
/// Pixel `(x, y)` maps to
/// `point_of_interest + (x_offset + x * delta_x, y_offset + y * delta_y)`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ViewWindow {
    pub point_of_interest: Complex,
    pub x_offset: f32,
    pub y_offset: f32,
    pub delta_x: f32,
    pub delta_y: f32,
    pub depth: u32,
}

impl ViewWindow {
    /// Window of `span` plane units on each axis, centred on the point of interest.
    #[must_use]
    pub fn centred(resolution: Resolution, point_of_interest: Complex, span: f32) -> Self {
        let centre = -0.5 * span;

        Self {
            point_of_interest,
            x_offset: centre,
            y_offset: centre,
            delta_x: span / resolution.width() as f32,
            delta_y: span / resolution.height() as f32,
            depth: 0,
        }
    }

    /// Every delta and offset multiplied by the same `scale`.
    #[must_use]
    pub fn scaled(&self, scale: f32, depth: u32) -> Self {
        Self {
            point_of_interest: self.point_of_interest,
            x_offset: self.x_offset * scale,
            y_offset: self.y_offset * scale,
            delta_x: self.delta_x * scale,
            delta_y: self.delta_y * scale,
            depth,
        }
    }

    #[must_use]
    pub fn row_imag(&self, y: usize) -> f32 {
        self.point_of_interest.imag + (self.y_offset + y as f32 * self.delta_y)
    }

    #[must_use]
    pub fn column_real(&self, x: usize) -> f32 {
        self.point_of_interest.real + (self.x_offset + x as f32 * self.delta_x)
    }

    #[must_use]
    pub fn lane_reals(&self, first_column: usize) -> [f32; LANES] {
        std::array::from_fn(|lane| self.column_real(first_column + lane))
    }

    /// True once a pixel step is smaller than the f32 spacing around the point
    /// of interest, so neighbouring pixels collapse onto the same coordinate.
    #[must_use]
    pub fn precision_exhausted(&self) -> bool {
        let spacing = |v: f32| (f32::from_bits(v.abs().to_bits() + 1) - v.abs()).max(f32::MIN_POSITIVE);

        self.delta_x.abs() < spacing(self.point_of_interest.real)
            || self.delta_y.abs() < spacing(self.point_of_interest.imag)
    }
}
