use pixels::{Pixels, SurfaceTexture, TextureError};
use winit::window::Window;

use crate::adapters::pixel_format::copy_surface_to_rgba;
use crate::controllers::zoom::data::frame_report::FrameReport;
use crate::controllers::zoom::ports::frame_sink::FrameSink;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::resolution::Resolution;
use crate::presenters::pixels::errors::PixelsPresenterError;

/// Shows each frame in a window. The pixels frame keeps the render
/// resolution and is scaled to whatever size the window has.
pub struct PixelsPresenter {
    pixels: Pixels<'static>,
}

impl PixelsPresenter {
    pub fn new(window: &'static Window, resolution: Resolution) -> Result<Self, pixels::Error> {
        let size = window.inner_size();
        let surface_texture = SurfaceTexture::new(size.width, size.height, window);
        let pixels = Pixels::new(resolution.width(), resolution.height(), surface_texture)?;

        Ok(Self { pixels })
    }

    pub fn resize(&mut self, width: u32, height: u32) -> Result<(), TextureError> {
        // Minimised windows report a zero size
        if width == 0 || height == 0 {
            return Ok(());
        }

        self.pixels.resize_surface(width, height)
    }
}

impl FrameSink for PixelsPresenter {
    type Error = PixelsPresenterError;

    fn present(&mut self, surface: &PixelBuffer, _report: &FrameReport) -> Result<(), Self::Error> {
        copy_surface_to_rgba(surface, self.pixels.frame_mut())?;
        self.pixels.render()?;

        Ok(())
    }
}
