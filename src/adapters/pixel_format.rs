use std::error::Error;
use std::fmt;

use crate::core::data::pixel_buffer::{BYTES_PER_PIXEL, PixelBuffer};

pub const RGBA_BYTES_PER_PIXEL: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameSizeMismatch {
    pub expected: usize,
    pub actual: usize,
}

impl fmt::Display for FrameSizeMismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "RGBA frame holds {} bytes but the surface needs {}",
            self.actual, self.expected
        )
    }
}

impl Error for FrameSizeMismatch {}

/// Copies an RGB surface into an opaque RGBA frame of the same resolution.
pub fn copy_surface_to_rgba(surface: &PixelBuffer, dst: &mut [u8]) -> Result<(), FrameSizeMismatch> {
    let src = surface.buffer();
    let expected = src.len() / BYTES_PER_PIXEL * RGBA_BYTES_PER_PIXEL;

    if dst.len() != expected {
        return Err(FrameSizeMismatch {
            expected,
            actual: dst.len(),
        });
    }

    for (src_pixel, dst_pixel) in src
        .chunks_exact(BYTES_PER_PIXEL)
        .zip(dst.chunks_exact_mut(RGBA_BYTES_PER_PIXEL))
    {
        dst_pixel[..BYTES_PER_PIXEL].copy_from_slice(src_pixel);
        dst_pixel[3] = u8::MAX;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::resolution::Resolution;

    #[test]
    fn test_rgb_pixels_become_opaque_rgba() {
        let resolution = Resolution::new(4, 1).unwrap();
        let surface = PixelBuffer::from_data(
            resolution,
            vec![
                255, 0, 0, // red
                0, 255, 0, // green
                0, 0, 255, // blue
                10, 20, 30,
            ],
        )
        .unwrap();
        let mut dst = vec![0; 16];

        copy_surface_to_rgba(&surface, &mut dst).unwrap();

        assert_eq!(
            dst,
            vec![255, 0, 0, 255, 0, 255, 0, 255, 0, 0, 255, 255, 10, 20, 30, 255]
        );
    }

    #[test]
    fn test_wrong_frame_size_is_rejected_untouched() {
        let surface = PixelBuffer::new(Resolution::new(4, 2).unwrap());
        let mut dst = vec![9; 12];

        assert_eq!(
            copy_surface_to_rgba(&surface, &mut dst),
            Err(FrameSizeMismatch { expected: 32, actual: 12 })
        );
        assert!(dst.iter().all(|&b| b == 9));
    }
}
