use crate::core::data::lane_batch::LANES;
use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ResolutionError {
    ZeroSize { width: u32, height: u32 },
    WidthNotLaneAligned { width: u32, lanes: usize },
}

impl fmt::Display for ResolutionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroSize { width, height } => {
                write!(f, "resolution must be non-zero: {}x{}", width, height)
            }
            Self::WidthNotLaneAligned { width, lanes } => {
                write!(f, "width {} is not a multiple of the lane width {}", width, lanes)
            }
        }
    }
}

impl Error for ResolutionError {}

/// Viewport size in pixels, fixed for the lifetime of a session.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Resolution {
    width: u32,
    height: u32,
}

impl Resolution {
    pub fn new(width: u32, height: u32) -> Result<Self, ResolutionError> {
        if width == 0 || height == 0 {
            return Err(ResolutionError::ZeroSize { width, height });
        }

        if width as usize % LANES != 0 {
            return Err(ResolutionError::WidthNotLaneAligned { width, lanes: LANES });
        }

        Ok(Self { width, height })
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[must_use]
    pub fn size(&self) -> u64 {
        u64::from(self.width) * u64::from(self.height)
    }

    #[must_use]
    pub fn batches_per_row(&self) -> usize {
        self.width as usize / LANES
    }
}
