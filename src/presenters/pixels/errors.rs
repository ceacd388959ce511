use std::error::Error;
use std::fmt;

use crate::adapters::pixel_format::FrameSizeMismatch;

#[derive(Debug)]
pub enum PixelsPresenterError {
    FrameSize(FrameSizeMismatch),
    Render(pixels::Error),
}

impl fmt::Display for PixelsPresenterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FrameSize(err) => write!(f, "surface does not fit the pixels frame: {}", err),
            Self::Render(err) => write!(f, "pixels render failed: {}", err),
        }
    }
}

impl Error for PixelsPresenterError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::FrameSize(err) => Some(err),
            Self::Render(err) => Some(err),
        }
    }
}

impl From<FrameSizeMismatch> for PixelsPresenterError {
    fn from(err: FrameSizeMismatch) -> Self {
        Self::FrameSize(err)
    }
}

impl From<pixels::Error> for PixelsPresenterError {
    fn from(err: pixels::Error) -> Self {
        Self::Render(err)
    }
}
