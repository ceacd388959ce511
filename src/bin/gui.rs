fn main() -> Result<(), fractal_zoom::GuiError> {
    env_logger::init();

    fractal_zoom::run_gui(&fractal_zoom::ZoomConfig::default())?;

    Ok(())
}
