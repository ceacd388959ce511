use std::time::{Duration, Instant};

use log::{debug, info};

use crate::controllers::zoom::data::frame_report::{FrameReport, RunSummary};
use crate::controllers::zoom::data::zoom_config::ZoomConfig;
use crate::controllers::zoom::errors::ZoomSessionError;
use crate::controllers::zoom::ports::frame_sink::FrameSink;
use crate::core::actions::quit_signal::QuitSignal;
use crate::core::actions::render_frame::frame_renderer::FrameRenderer;
use crate::core::actions::render_frame::ports::colour_map::ColourMap;
use crate::core::actions::render_frame::ports::lane_algorithm::LaneAlgorithm;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::view_window::ViewWindow;
use crate::core::fractals::mandelbrot::algorithm::MandelbrotLaneEvaluator;
use crate::core::fractals::mandelbrot::colour_map::PaletteColourMap;
use crate::core::util::worker_threads::resolve_worker_threads;
use crate::core::zoom::controller::ZoomController;
use crate::core::zoom::status::ZoomState;

/// The frame loop: render the current window, present it, poll quit, zoom.
///
/// Everything happens on the calling thread except the row work inside
/// [`FrameRenderer::render`], which has fully finished before the frame is
/// presented and before the zoom controller is touched again.
pub struct ZoomSession<A = MandelbrotLaneEvaluator, C = PaletteColourMap> {
    renderer: FrameRenderer<A, C>,
    zoom: ZoomController,
    surface: PixelBuffer,
    frames_rendered: u64,
    total_render_duration: Duration,
}

impl ZoomSession {
    pub fn new(config: &ZoomConfig) -> Result<Self, ZoomSessionError> {
        config.validate()?;

        let resolution = config.resolution()?;
        let algorithm = MandelbrotLaneEvaluator::new(config.max_iterations)?;
        let colour_map = PaletteColourMap::new(config.palette.clone(), config.max_iterations);
        let renderer = FrameRenderer::new(
            algorithm,
            colour_map,
            config.scheduling,
            resolve_worker_threads(config.worker_threads),
        )?;

        let window = ViewWindow::centred(resolution, config.point_of_interest, config.plane_span);
        let zoom = ZoomController::new(window, config.limits);

        info!(
            "zoom session: {}x{}, {} max iterations, depth {} at x{} per frame toward {} + {}i",
            resolution.width(),
            resolution.height(),
            config.max_iterations,
            config.limits.max_depth,
            config.limits.zoom_factor,
            config.point_of_interest.real,
            config.point_of_interest.imag
        );

        Ok(Self::from_parts(renderer, zoom, PixelBuffer::new(resolution)))
    }
}

impl<A, C> ZoomSession<A, C>
where
    A: LaneAlgorithm + Sync,
    C: ColourMap + Sync,
{
    #[must_use]
    pub fn from_parts(renderer: FrameRenderer<A, C>, zoom: ZoomController, surface: PixelBuffer) -> Self {
        Self {
            renderer,
            zoom,
            surface,
            frames_rendered: 0,
            total_render_duration: Duration::ZERO,
        }
    }

    /// Renders the current window into the surface.
    pub fn render_frame(&mut self) -> FrameReport {
        let window = self.zoom.window();

        let start = Instant::now();
        self.renderer.render(&window, &mut self.surface);
        let render_duration = start.elapsed();

        let report = FrameReport {
            frame_index: self.frames_rendered,
            depth: window.depth,
            state: self.zoom.state(),
            render_duration,
        };

        self.frames_rendered += 1;
        self.total_render_duration += render_duration;

        debug!(
            "frame {} at depth {} rendered in {:?}",
            report.frame_index, report.depth, report.render_duration
        );

        report
    }

    /// Polls `quit` once, then either terminates or advances the zoom.
    pub fn complete_frame<Q: QuitSignal>(&mut self, quit: &Q) -> ZoomState {
        if quit.is_quit_requested() {
            self.zoom.terminate();
            return self.zoom.state();
        }

        self.zoom.advance()
    }

    /// One full iteration of the frame loop.
    pub fn step<S, Q>(&mut self, sink: &mut S, quit: &Q) -> Result<ZoomState, S::Error>
    where
        S: FrameSink,
        Q: QuitSignal,
    {
        if self.zoom.state().is_terminated() {
            return Ok(ZoomState::Terminated);
        }

        let report = self.render_frame();
        sink.present(&self.surface, &report)?;

        Ok(self.complete_frame(quit))
    }

    /// Steps until quit is requested.
    pub fn run<S, Q>(&mut self, sink: &mut S, quit: &Q) -> Result<RunSummary, S::Error>
    where
        S: FrameSink,
        Q: QuitSignal,
    {
        let mut state = self.zoom.state();

        while !state.is_terminated() {
            state = self.step(sink, quit)?;
        }

        let summary = self.summary();
        info!(
            "zoom finished: {} frames, depth {}, average {:?} per frame",
            summary.frames_rendered,
            summary.final_depth,
            summary.average_frame_duration()
        );

        Ok(summary)
    }

    #[must_use]
    pub fn summary(&self) -> RunSummary {
        RunSummary {
            frames_rendered: self.frames_rendered,
            final_depth: self.zoom.depth(),
            total_render_duration: self.total_render_duration,
        }
    }

    #[must_use]
    pub fn surface(&self) -> &PixelBuffer {
        &self.surface
    }

    #[must_use]
    pub fn window(&self) -> ViewWindow {
        self.zoom.window()
    }

    #[must_use]
    pub fn state(&self) -> ZoomState {
        self.zoom.state()
    }

    #[must_use]
    pub fn frames_rendered(&self) -> u64 {
        self.frames_rendered
    }
}
