use std::error::Error;
use std::fmt;
use std::num::NonZeroUsize;

use log::debug;
use rayon::{ThreadPool, ThreadPoolBuildError, ThreadPoolBuilder};

use crate::core::actions::render_frame::ports::colour_map::ColourMap;
use crate::core::actions::render_frame::ports::lane_algorithm::LaneAlgorithm;
use crate::core::actions::render_frame::render_frame_guided::render_frame_guided;
use crate::core::actions::render_frame::render_frame_rayon::render_frame_rayon;
use crate::core::actions::render_frame::render_frame_serial::render_frame_serial;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::view_window::ViewWindow;
use crate::core::fractals::mandelbrot::colour_map::PaletteColourMap;

pub const DEFAULT_MIN_ROWS_PER_CHUNK: usize = 50;

/// How the rows of a frame are spread over the worker pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowScheduling {
    /// rayon work stealing, jobs never smaller than `min_rows`.
    WorkStealing { min_rows: usize },
    /// Shared cursor handing out shrinking chunks, never smaller than `min_rows`.
    Guided { min_rows: usize },
    /// Everything on the calling thread.
    Serial,
}

impl Default for RowScheduling {
    fn default() -> Self {
        Self::WorkStealing {
            min_rows: DEFAULT_MIN_ROWS_PER_CHUNK,
        }
    }
}

#[derive(Debug)]
pub enum FrameRendererError {
    ThreadPool(ThreadPoolBuildError),
}

impl fmt::Display for FrameRendererError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ThreadPool(err) => write!(f, "failed to build row worker pool: {}", err),
        }
    }
}

impl Error for FrameRendererError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::ThreadPool(err) => Some(err),
        }
    }
}

impl From<ThreadPoolBuildError> for FrameRendererError {
    fn from(err: ThreadPoolBuildError) -> Self {
        Self::ThreadPool(err)
    }
}

/// Renders whole frames: evaluates every pixel of a [`ViewWindow`] and writes
/// its palette colour into the surface.
pub struct FrameRenderer<A, C = PaletteColourMap> {
    algorithm: A,
    colour_map: C,
    scheduling: RowScheduling,
    pool: ThreadPool,
}

impl<A, C> FrameRenderer<A, C>
where
    A: LaneAlgorithm + Sync,
    C: ColourMap + Sync,
{
    pub fn new(
        algorithm: A,
        colour_map: C,
        scheduling: RowScheduling,
        worker_threads: NonZeroUsize,
    ) -> Result<Self, FrameRendererError> {
        let pool = ThreadPoolBuilder::new()
            .num_threads(worker_threads.get())
            .thread_name(|index| format!("row-worker-{}", index))
            .build()?;

        debug!(
            "frame renderer ready: {:?} on {} worker threads",
            scheduling,
            pool.current_num_threads()
        );

        Ok(Self {
            algorithm,
            colour_map,
            scheduling,
            pool,
        })
    }

    /// Writes every pixel of `surface`. Returns only after all rows are done.
    pub fn render(&self, window: &ViewWindow, surface: &mut PixelBuffer) {
        let algorithm = &self.algorithm;
        let colour_map = &self.colour_map;

        match self.scheduling {
            RowScheduling::Serial => {
                render_frame_serial(window, surface, algorithm, colour_map);
            }
            RowScheduling::WorkStealing { min_rows } => self.pool.install(|| {
                render_frame_rayon(window, surface, algorithm, colour_map, min_rows);
            }),
            RowScheduling::Guided { min_rows } => {
                let workers = self.pool.current_num_threads();

                self.pool.install(|| {
                    render_frame_guided(window, surface, algorithm, colour_map, workers, min_rows);
                });
            }
        }
    }

    #[must_use]
    pub fn algorithm(&self) -> &A {
        &self.algorithm
    }

    #[must_use]
    pub fn colour_map(&self) -> &C {
        &self.colour_map
    }

    #[must_use]
    pub fn scheduling(&self) -> RowScheduling {
        self.scheduling
    }

    #[must_use]
    pub fn worker_threads(&self) -> usize {
        self.pool.current_num_threads()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::colour::Colour;
    use crate::core::data::complex::Complex;
    use crate::core::data::resolution::Resolution;
    use crate::core::fractals::mandelbrot::algorithm::MandelbrotLaneEvaluator;
    use crate::core::fractals::mandelbrot::palette::Palette;

    fn renderer(max_iterations: u32, scheduling: RowScheduling) -> FrameRenderer<MandelbrotLaneEvaluator> {
        FrameRenderer::new(
            MandelbrotLaneEvaluator::new(max_iterations).unwrap(),
            PaletteColourMap::new(Palette::default(), max_iterations),
            scheduling,
            NonZeroUsize::new(3).unwrap(),
        )
        .unwrap()
    }

    fn all_pixels(surface: &PixelBuffer) -> Vec<Colour> {
        let resolution = surface.resolution();

        (0..resolution.height())
            .flat_map(|y| (0..resolution.width()).map(move |x| (x, y)))
            .map(|(x, y)| surface.pixel(x, y).unwrap())
            .collect()
    }

    #[test]
    fn test_window_outside_escape_radius_renders_first_ramp_colour() {
        let resolution = Resolution::new(8, 4).unwrap();
        // every point lies at least 8 units from the origin
        let window = ViewWindow::centred(resolution, Complex::new(10.0, 10.0), 4.0);
        let mut surface = PixelBuffer::new(resolution);

        renderer(50, RowScheduling::default()).render(&window, &mut surface);

        let first_ramp_colour = Palette::default().entry(1);
        assert!(all_pixels(&surface).iter().all(|&c| c == first_ramp_colour));
    }

    #[test]
    fn test_window_inside_the_set_renders_black() {
        let resolution = Resolution::new(8, 4).unwrap();
        let window = ViewWindow::centred(resolution, Complex::new(-0.1, 0.0), 0.1);
        let mut surface = PixelBuffer::new(resolution);

        renderer(50, RowScheduling::default()).render(&window, &mut surface);

        assert!(all_pixels(&surface).iter().all(|&c| c == Colour::BLACK));
    }

    #[test]
    fn test_every_scheduling_policy_renders_identical_frames() {
        let resolution = Resolution::new(96, 80).unwrap();
        let window = ViewWindow::centred(resolution, Complex::new(-0.702_295_3, 0.350_220_8), 0.5);

        let frames: Vec<PixelBuffer> = [
            RowScheduling::Serial,
            RowScheduling::WorkStealing { min_rows: 50 },
            RowScheduling::WorkStealing { min_rows: 1 },
            RowScheduling::Guided { min_rows: 50 },
            RowScheduling::Guided { min_rows: 3 },
        ]
        .into_iter()
        .map(|scheduling| {
            let mut surface = PixelBuffer::new(resolution);
            renderer(200, scheduling).render(&window, &mut surface);
            surface
        })
        .collect();

        for frame in &frames[1..] {
            assert_eq!(frame, &frames[0]);
        }
    }

    #[test]
    fn test_render_overwrites_previous_frame() {
        let resolution = Resolution::new(8, 4).unwrap();
        let data = vec![77u8; 8 * 4 * 3];
        let mut surface = PixelBuffer::from_data(resolution, data).unwrap();
        let window = ViewWindow::centred(resolution, Complex::new(-0.1, 0.0), 0.1);

        renderer(20, RowScheduling::Guided { min_rows: 1 }).render(&window, &mut surface);

        assert!(surface.buffer().iter().all(|&b| b == 0));
    }

    #[test]
    fn test_pool_uses_requested_worker_count() {
        let renderer = renderer(10, RowScheduling::default());

        assert_eq!(renderer.worker_threads(), 3);
        assert_eq!(renderer.scheduling(), RowScheduling::default());
        assert_eq!(renderer.algorithm().max_iterations(), 10);
    }
}
