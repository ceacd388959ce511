use std::error::Error;
use std::fmt;
use std::num::NonZeroUsize;

use crate::core::actions::render_frame::frame_renderer::RowScheduling;
use crate::core::data::complex::Complex;
use crate::core::data::resolution::{Resolution, ResolutionError};
use crate::core::fractals::mandelbrot::errors::MandelbrotError;
use crate::core::fractals::mandelbrot::palette::Palette;
use crate::core::zoom::limits::ZoomLimits;

const DEFAULT_WIDTH: u32 = 700;
const DEFAULT_HEIGHT: u32 = 700;
const DEFAULT_MAX_ITERATIONS: u32 = 500;
const DEFAULT_PLANE_SPAN: f32 = 4.0;
const DEFAULT_POINT_OF_INTEREST: Complex = Complex {
    real: -0.702_295_281_061,
    imag: 0.350_220_783_400,
};

#[derive(Debug, Clone, PartialEq)]
pub enum ZoomConfigError {
    Resolution(ResolutionError),
    Mandelbrot(MandelbrotError),
    InvalidZoomFactor(f32),
    NonFinitePointOfInterest(Complex),
    InvalidPlaneSpan(f32),
    ZeroMinRows,
}

impl fmt::Display for ZoomConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Resolution(err) => write!(f, "invalid resolution: {}", err),
            Self::Mandelbrot(err) => write!(f, "invalid fractal settings: {}", err),
            Self::InvalidZoomFactor(factor) => {
                write!(f, "zoom factor must be finite and greater than 1, got {}", factor)
            }
            Self::NonFinitePointOfInterest(point) => {
                write!(f, "point of interest must be finite, got {} + {}i", point.real, point.imag)
            }
            Self::InvalidPlaneSpan(span) => {
                write!(f, "plane span must be finite and positive, got {}", span)
            }
            Self::ZeroMinRows => write!(f, "row chunks must contain at least one row"),
        }
    }
}

impl Error for ZoomConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Resolution(err) => Some(err),
            Self::Mandelbrot(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ResolutionError> for ZoomConfigError {
    fn from(err: ResolutionError) -> Self {
        Self::Resolution(err)
    }
}

impl From<MandelbrotError> for ZoomConfigError {
    fn from(err: MandelbrotError) -> Self {
        Self::Mandelbrot(err)
    }
}

/// Everything a zoom run needs, fixed for the lifetime of a session.
#[derive(Debug, Clone, PartialEq)]
pub struct ZoomConfig {
    pub width: u32,
    pub height: u32,
    pub max_iterations: u32,
    pub limits: ZoomLimits,
    pub point_of_interest: Complex,
    /// Plane units covered by each axis at depth 0.
    pub plane_span: f32,
    pub palette: Palette,
    pub scheduling: RowScheduling,
    /// `None` uses one worker per available core.
    pub worker_threads: Option<NonZeroUsize>,
}

impl Default for ZoomConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            limits: ZoomLimits::default(),
            point_of_interest: DEFAULT_POINT_OF_INTEREST,
            plane_span: DEFAULT_PLANE_SPAN,
            palette: Palette::default(),
            scheduling: RowScheduling::default(),
            worker_threads: None,
        }
    }
}

impl ZoomConfig {
    pub fn resolution(&self) -> Result<Resolution, ZoomConfigError> {
        Ok(Resolution::new(self.width, self.height)?)
    }

    pub fn validate(&self) -> Result<(), ZoomConfigError> {
        self.resolution()?;

        if self.max_iterations == 0 {
            return Err(MandelbrotError::ZeroMaxIterationsError.into());
        }

        let factor = self.limits.zoom_factor;
        if !factor.is_finite() || factor <= 1.0 {
            return Err(ZoomConfigError::InvalidZoomFactor(factor));
        }

        if !self.point_of_interest.is_finite() {
            return Err(ZoomConfigError::NonFinitePointOfInterest(self.point_of_interest));
        }

        if !self.plane_span.is_finite() || self.plane_span <= 0.0 {
            return Err(ZoomConfigError::InvalidPlaneSpan(self.plane_span));
        }

        match self.scheduling {
            RowScheduling::WorkStealing { min_rows: 0 } | RowScheduling::Guided { min_rows: 0 } => {
                Err(ZoomConfigError::ZeroMinRows)
            }
            _ => Ok(()),
        }
    }
}
