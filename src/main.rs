use std::error::Error;
use std::path::Path;

use fractal_zoom::{FilePresenterPort, FrameBudget, LogFrameSink, PpmFilePresenter, ZoomConfig, ZoomSession};

const OUTPUT_PATH: &str = "output/zoom.ppm";

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let config = ZoomConfig::default();
    let mut session = ZoomSession::new(&config)?;

    // One frame per depth, including depth 0
    let budget = FrameBudget::new(u64::from(config.limits.max_depth) + 1);
    let mut sink = LogFrameSink::new();
    session.run(&mut sink, &budget)?;

    let output = Path::new(OUTPUT_PATH);
    if let Some(dir) = output.parent() {
        std::fs::create_dir_all(dir)?;
    }
    PpmFilePresenter::new().present(session.surface(), output)?;

    Ok(())
}
