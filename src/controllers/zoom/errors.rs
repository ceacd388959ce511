use std::error::Error;
use std::fmt;

use crate::controllers::zoom::data::zoom_config::ZoomConfigError;
use crate::core::actions::render_frame::frame_renderer::FrameRendererError;
use crate::core::fractals::mandelbrot::errors::MandelbrotError;

#[derive(Debug)]
pub enum ZoomSessionError {
    Config(ZoomConfigError),
    Renderer(FrameRendererError),
}

impl fmt::Display for ZoomSessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(err) => write!(f, "configuration error: {}", err),
            Self::Renderer(err) => write!(f, "renderer error: {}", err),
        }
    }
}

impl Error for ZoomSessionError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Config(err) => Some(err),
            Self::Renderer(err) => Some(err),
        }
    }
}

impl From<ZoomConfigError> for ZoomSessionError {
    fn from(err: ZoomConfigError) -> Self {
        Self::Config(err)
    }
}

impl From<MandelbrotError> for ZoomSessionError {
    fn from(err: MandelbrotError) -> Self {
        Self::Config(err.into())
    }
}

impl From<FrameRendererError> for ZoomSessionError {
    fn from(err: FrameRendererError) -> Self {
        Self::Renderer(err)
    }
}
