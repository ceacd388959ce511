use crate::core::data::colour::Colour;
use crate::core::data::resolution::Resolution;
use rayon::prelude::*;
use rayon::slice::ChunksExactMut as ParChunksExactMut;
use std::error::Error;
use std::fmt;
use std::slice::ChunksExactMut;

pub const BYTES_PER_PIXEL: usize = 3;

fn resolution_to_buffer_size(resolution: Resolution) -> usize {
    resolution.size() as usize * BYTES_PER_PIXEL
}

#[derive(Debug, Clone, PartialEq)]
pub enum PixelBufferError {
    BoundsMismatch {
        resolution_size: usize,
        buffer_size: usize,
    },
}

impl fmt::Display for PixelBufferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BoundsMismatch {
                resolution_size,
                buffer_size,
            } => {
                write!(
                    f,
                    "resolution size {} does not match buffer size {}",
                    resolution_size, buffer_size
                )
            }
        }
    }
}

impl Error for PixelBufferError {}

pub type PixelBufferData = Vec<u8>;

/// Row-major RGB surface the renderer writes into.
///
/// Renderers never index pixels directly: they borrow whole rows as disjoint
/// mutable slices, which is what lets rows be filled in parallel without
/// locking.
#[derive(Debug, Clone, PartialEq)]
pub struct PixelBuffer {
    resolution: Resolution,
    buffer: PixelBufferData,
}

impl PixelBuffer {
    #[must_use]
    pub fn new(resolution: Resolution) -> Self {
        Self {
            resolution,
            buffer: vec![0; resolution_to_buffer_size(resolution)],
        }
    }

    pub fn from_data(
        resolution: Resolution,
        buffer: PixelBufferData,
    ) -> Result<Self, PixelBufferError> {
        let resolution_size = resolution_to_buffer_size(resolution);

        if resolution_size != buffer.len() {
            return Err(PixelBufferError::BoundsMismatch {
                resolution_size,
                buffer_size: buffer.len(),
            });
        }

        Ok(Self { resolution, buffer })
    }

    #[must_use]
    pub fn resolution(&self) -> Resolution {
        self.resolution
    }

    #[must_use]
    pub fn buffer(&self) -> &PixelBufferData {
        &self.buffer
    }

    #[must_use]
    pub fn buffer_size(&self) -> usize {
        self.buffer.len()
    }

    #[must_use]
    pub fn row_bytes(&self) -> usize {
        self.resolution.width() as usize * BYTES_PER_PIXEL
    }

    #[must_use]
    pub fn pixel(&self, x: u32, y: u32) -> Option<Colour> {
        if x >= self.resolution.width() || y >= self.resolution.height() {
            return None;
        }

        let index = (y as usize * self.resolution.width() as usize + x as usize) * BYTES_PER_PIXEL;

        Some(Colour::new(
            self.buffer[index],
            self.buffer[index + 1],
            self.buffer[index + 2],
        ))
    }

    pub fn rows_mut(&mut self) -> ChunksExactMut<'_, u8> {
        let row_bytes = self.row_bytes();
        self.buffer.chunks_exact_mut(row_bytes)
    }

    pub fn par_rows_mut(&mut self) -> ParChunksExactMut<'_, u8> {
        let row_bytes = self.row_bytes();
        self.buffer.par_chunks_exact_mut(row_bytes)
    }

    pub(crate) fn buffer_mut(&mut self) -> &mut [u8] {
        &mut self.buffer
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_resolution(width: u32, height: u32) -> Resolution {
        Resolution::new(width, height).unwrap()
    }

    #[test]
    fn test_new_creates_zeroed_buffer() {
        let buffer = PixelBuffer::new(create_resolution(8, 10));

        assert_eq!(buffer.buffer_size(), 240); // 8 * 10 * 3
        assert!(buffer.buffer().iter().all(|&b| b == 0));
    }

    #[test]
    fn test_from_data_valid() {
        let resolution = create_resolution(4, 1);
        let data: Vec<u8> = vec![
            255, 0, 0, // (0,0) red
            0, 255, 0, // (1,0) green
            0, 0, 255, // (2,0) blue
            255, 255, 0, // (3,0) yellow
        ];

        let buffer = PixelBuffer::from_data(resolution, data.clone()).unwrap();

        assert_eq!(buffer.resolution(), resolution);
        assert_eq!(buffer.buffer(), &data);
        assert_eq!(buffer.pixel(2, 0), Some(Colour::new(0, 0, 255)));
    }

    #[test]
    fn test_from_data_buffer_too_small() {
        let result = PixelBuffer::from_data(create_resolution(4, 1), vec![255, 0, 0]);

        assert_eq!(
            result.unwrap_err(),
            PixelBufferError::BoundsMismatch {
                resolution_size: 12,
                buffer_size: 3
            }
        );
    }

    #[test]
    fn test_from_data_buffer_too_large() {
        let result = PixelBuffer::from_data(create_resolution(4, 1), vec![0; 24]);

        assert_eq!(
            result.unwrap_err(),
            PixelBufferError::BoundsMismatch {
                resolution_size: 12,
                buffer_size: 24
            }
        );
    }

    #[test]
    fn test_pixel_outside_bounds_is_none() {
        let buffer = PixelBuffer::new(create_resolution(4, 2));

        assert_eq!(buffer.pixel(4, 0), None);
        assert_eq!(buffer.pixel(0, 2), None);
        assert_eq!(buffer.pixel(3, 1), Some(Colour::BLACK));
    }

    #[test]
    fn test_rows_mut_yields_one_slice_per_row() {
        let mut buffer = PixelBuffer::new(create_resolution(8, 3));

        for (y, row) in buffer.rows_mut().enumerate() {
            assert_eq!(row.len(), 24);
            row.fill(y as u8 + 1);
        }

        assert_eq!(buffer.pixel(0, 0), Some(Colour::new(1, 1, 1)));
        assert_eq!(buffer.pixel(7, 1), Some(Colour::new(2, 2, 2)));
        assert_eq!(buffer.pixel(5, 2), Some(Colour::new(3, 3, 3)));
    }

    #[test]
    fn test_par_rows_mut_writes_disjoint_rows() {
        let mut buffer = PixelBuffer::new(create_resolution(4, 64));

        buffer
            .par_rows_mut()
            .enumerate()
            .for_each(|(y, row)| row.fill(y as u8));

        for y in 0..64 {
            assert_eq!(buffer.pixel(3, y), Some(Colour::new(y as u8, y as u8, y as u8)));
        }
    }
}
