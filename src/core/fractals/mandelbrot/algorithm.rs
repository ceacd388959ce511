use crate::core::actions::render_frame::ports::lane_algorithm::LaneAlgorithm;
use crate::core::data::complex::Complex;
use crate::core::data::lane_batch::{LANES, LaneBatch, LaneIterations};
use crate::core::fractals::mandelbrot::errors::MandelbrotError;

pub const ESCAPE_RADIUS_SQUARED: f32 = 4.0;

/// Number of `z -> z² + c` steps, starting from `z = c`, before `|z|² >= 4`,
/// or `max_iterations` if the orbit stays bounded that long.
#[must_use]
pub fn escape_time(c: Complex, max_iterations: u32) -> u32 {
    let mut z = c;

    for iteration in 0..max_iterations {
        if z.magnitude_squared() >= ESCAPE_RADIUS_SQUARED {
            return iteration;
        }
        z = z * z + c;
    }

    max_iterations
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct MandelbrotLaneEvaluator {
    max_iterations: u32,
}

impl MandelbrotLaneEvaluator {
    pub fn new(max_iterations: u32) -> Result<Self, MandelbrotError> {
        if max_iterations == 0 {
            return Err(MandelbrotError::ZeroMaxIterationsError);
        }

        Ok(Self { max_iterations })
    }
}

impl LaneAlgorithm for MandelbrotLaneEvaluator {
    fn evaluate(&self, batch: &LaneBatch) -> LaneIterations {
        let cx = batch.real;
        let cy = batch.imag;

        let mut x = cx;
        let mut y = cy;
        let mut x_sq: [f32; LANES] = std::array::from_fn(|lane| x[lane] * x[lane]);
        let mut y_sq: [f32; LANES] = std::array::from_fn(|lane| y[lane] * y[lane]);
        let mut iterations = [0u32; LANES];
        let mut active: [bool; LANES] =
            std::array::from_fn(|lane| x_sq[lane] + y_sq[lane] < ESCAPE_RADIUS_SQUARED);

        // the batch keeps stepping until its slowest lane has escaped or hit the cap
        while active.iter().any(|&a| a) {
            for lane in 0..LANES {
                if !active[lane] {
                    continue;
                }

                let xy = x[lane] * y[lane];
                y[lane] = (xy + xy) + cy[lane];
                x[lane] = (x_sq[lane] - y_sq[lane]) + cx[lane];
                x_sq[lane] = x[lane] * x[lane];
                y_sq[lane] = y[lane] * y[lane];
                iterations[lane] += 1;

                active[lane] = iterations[lane] < self.max_iterations
                    && x_sq[lane] + y_sq[lane] < ESCAPE_RADIUS_SQUARED;
            }
        }

        LaneIterations::new(iterations)
    }

    fn max_iterations(&self) -> u32 {
        self.max_iterations
    }
}
