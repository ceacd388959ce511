use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use log::info;

use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::storage::write_ppm::write_ppm;

#[derive(Debug, Default)]
pub struct PpmFilePresenter {}

impl FilePresenterPort for PpmFilePresenter {
    fn present(&self, surface: &PixelBuffer, filepath: impl AsRef<Path>) -> std::io::Result<()> {
        let filepath = filepath.as_ref();
        let file = File::create(filepath)?;

        write_ppm(surface, BufWriter::new(file))?;

        info!("wrote {}", filepath.display());
        Ok(())
    }
}

impl PpmFilePresenter {
    #[must_use]
    pub fn new() -> Self {
        Self {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::resolution::Resolution;

    #[test]
    fn test_present_writes_ppm_file() {
        let resolution = Resolution::new(8, 2).unwrap();
        let surface = PixelBuffer::from_data(resolution, vec![7; 8 * 2 * 3]).unwrap();
        let filepath = std::env::temp_dir().join(format!("fractal_zoom_ppm_{}.ppm", std::process::id()));

        PpmFilePresenter::new().present(&surface, &filepath).unwrap();
        let written = std::fs::read(&filepath).unwrap();
        std::fs::remove_file(&filepath).unwrap();

        assert!(written.starts_with(b"P6\n8 2\n255\n"));
        assert_eq!(written.len(), b"P6\n8 2\n255\n".len() + 48);
        assert!(written.ends_with(&[7; 48]));
    }

    #[test]
    fn test_missing_directory_is_an_io_error() {
        let resolution = Resolution::new(4, 1).unwrap();
        let surface = PixelBuffer::new(resolution);
        let filepath = std::env::temp_dir()
            .join("fractal_zoom_missing_dir")
            .join("nested")
            .join("frame.ppm");

        assert!(PpmFilePresenter::new().present(&surface, filepath).is_err());
    }
}
