use std::error::Error;
use std::fmt;

use pixels::TextureError;
use winit::error::{EventLoopError, OsError};

use crate::controllers::zoom::errors::ZoomSessionError;
use crate::presenters::pixels::errors::PixelsPresenterError;

#[derive(Debug)]
pub enum GuiError {
    Session(ZoomSessionError),
    EventLoop(EventLoopError),
    Window(OsError),
    Pixels(pixels::Error),
    Present(PixelsPresenterError),
    Resize(TextureError),
}

impl fmt::Display for GuiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Session(err) => write!(f, "could not start zoom session: {}", err),
            Self::EventLoop(err) => write!(f, "event loop error: {}", err),
            Self::Window(err) => write!(f, "could not create window: {}", err),
            Self::Pixels(err) => write!(f, "could not create pixels surface: {}", err),
            Self::Present(err) => write!(f, "could not present frame: {}", err),
            Self::Resize(err) => write!(f, "could not resize surface: {}", err),
        }
    }
}

impl Error for GuiError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Session(err) => Some(err),
            Self::EventLoop(err) => Some(err),
            Self::Window(err) => Some(err),
            Self::Pixels(err) => Some(err),
            Self::Present(err) => Some(err),
            Self::Resize(err) => Some(err),
        }
    }
}

impl From<ZoomSessionError> for GuiError {
    fn from(err: ZoomSessionError) -> Self {
        Self::Session(err)
    }
}

impl From<EventLoopError> for GuiError {
    fn from(err: EventLoopError) -> Self {
        Self::EventLoop(err)
    }
}

impl From<OsError> for GuiError {
    fn from(err: OsError) -> Self {
        Self::Window(err)
    }
}

impl From<pixels::Error> for GuiError {
    fn from(err: pixels::Error) -> Self {
        Self::Pixels(err)
    }
}

impl From<PixelsPresenterError> for GuiError {
    fn from(err: PixelsPresenterError) -> Self {
        Self::Present(err)
    }
}

impl From<TextureError> for GuiError {
    fn from(err: TextureError) -> Self {
        Self::Resize(err)
    }
}
