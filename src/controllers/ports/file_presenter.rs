use std::path::Path;

use crate::core::data::pixel_buffer::PixelBuffer;

/// Saves a finished surface somewhere outside the process.
pub trait FilePresenterPort {
    fn present(&self, surface: &PixelBuffer, filepath: impl AsRef<Path>) -> std::io::Result<()>;
}
