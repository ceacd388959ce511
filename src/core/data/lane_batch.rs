use crate::core::data::complex::Complex;

/// Number of points evaluated together by a lane algorithm.
pub const LANES: usize = 4;

/// A fixed-width group of points on the complex plane, stored per axis.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct LaneBatch {
    pub real: [f32; LANES],
    pub imag: [f32; LANES],
}

impl LaneBatch {
    #[must_use]
    pub fn new(real: [f32; LANES], imag: [f32; LANES]) -> Self {
        Self { real, imag }
    }

    #[must_use]
    pub fn from_points(points: [Complex; LANES]) -> Self {
        Self {
            real: points.map(|p| p.real),
            imag: points.map(|p| p.imag),
        }
    }

    #[must_use]
    pub fn point(&self, lane: usize) -> Complex {
        Complex::new(self.real[lane], self.imag[lane])
    }
}

/// Per-lane iteration counts returned by a lane algorithm.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct LaneIterations([u32; LANES]);

impl LaneIterations {
    #[must_use]
    pub fn new(counts: [u32; LANES]) -> Self {
        Self(counts)
    }

    #[must_use]
    pub fn unpack(self) -> [u32; LANES] {
        self.0
    }

    #[must_use]
    pub fn get(&self, lane: usize) -> u32 {
        self.0[lane]
    }
}
