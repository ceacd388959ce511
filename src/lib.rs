mod adapters;
mod controllers;
mod core;
mod input;
mod presenters;
mod storage;

pub use crate::adapters::pixel_format::{FrameSizeMismatch, copy_surface_to_rgba};
pub use crate::controllers::ports::file_presenter::FilePresenterPort;
pub use crate::controllers::zoom::data::frame_report::{FrameReport, RunSummary};
pub use crate::controllers::zoom::data::zoom_config::{ZoomConfig, ZoomConfigError};
pub use crate::controllers::zoom::errors::ZoomSessionError;
pub use crate::controllers::zoom::ports::frame_sink::FrameSink;
pub use crate::controllers::zoom::session::ZoomSession;
pub use crate::core::actions::quit_signal::{FrameBudget, NeverQuit, QuitSignal};
pub use crate::core::actions::render_frame::frame_renderer::{
    DEFAULT_MIN_ROWS_PER_CHUNK, FrameRenderer, FrameRendererError, RowScheduling,
};
pub use crate::core::actions::render_frame::ports::colour_map::ColourMap;
pub use crate::core::actions::render_frame::ports::lane_algorithm::LaneAlgorithm;
pub use crate::core::data::colour::Colour;
pub use crate::core::data::complex::Complex;
pub use crate::core::data::lane_batch::{LANES, LaneBatch, LaneIterations};
pub use crate::core::data::pixel_buffer::{PixelBuffer, PixelBufferError};
pub use crate::core::data::resolution::{Resolution, ResolutionError};
pub use crate::core::data::view_window::ViewWindow;
pub use crate::core::fractals::mandelbrot::algorithm::{MandelbrotLaneEvaluator, escape_time};
pub use crate::core::fractals::mandelbrot::colour_map::PaletteColourMap;
pub use crate::core::fractals::mandelbrot::errors::{MandelbrotError, PaletteError};
pub use crate::core::fractals::mandelbrot::palette::{DEFAULT_RAMP, Palette};
pub use crate::core::util::worker_threads::available_worker_threads;
pub use crate::core::zoom::{ZoomController, ZoomLimits, ZoomState};
pub use crate::presenters::file::ppm::PpmFilePresenter;
pub use crate::presenters::log::log_sink::LogFrameSink;

#[cfg(feature = "gui")]
pub use crate::input::gui::{GuiError, run_gui};
#[cfg(feature = "gui")]
pub use crate::presenters::pixels::{errors::PixelsPresenterError, presenter::PixelsPresenter};
