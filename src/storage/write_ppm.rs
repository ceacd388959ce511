use std::io::Write;

use crate::core::data::pixel_buffer::PixelBuffer;

/// Encodes a surface as binary PPM.
pub fn write_ppm(surface: &PixelBuffer, mut writer: impl Write) -> std::io::Result<()> {
    let resolution = surface.resolution();

    // P6 is binary RGB, followed by width, height and the max channel value
    writeln!(writer, "P6")?;
    writeln!(writer, "{} {}", resolution.width(), resolution.height())?;
    writeln!(writer, "255")?;
    writer.write_all(surface.buffer())?;
    writer.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::resolution::Resolution;

    #[test]
    fn test_header_precedes_raw_rgb_bytes() {
        let resolution = Resolution::new(4, 1).unwrap();
        let data: Vec<u8> = (0..12).collect();
        let surface = PixelBuffer::from_data(resolution, data.clone()).unwrap();
        let mut encoded = Vec::new();

        write_ppm(&surface, &mut encoded).unwrap();

        let header = b"P6\n4 1\n255\n";
        assert_eq!(&encoded[..header.len()], header);
        assert_eq!(&encoded[header.len()..], data.as_slice());
    }
}
