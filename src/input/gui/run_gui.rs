use std::cell::Cell;

use log::{error, info};
use winit::{
    dpi::LogicalSize,
    event::{ElementState, Event, WindowEvent},
    event_loop::EventLoop,
    keyboard::{Key, NamedKey},
    window::{Window, WindowBuilder},
};

use crate::controllers::zoom::data::frame_report::RunSummary;
use crate::controllers::zoom::data::zoom_config::ZoomConfig;
use crate::controllers::zoom::session::ZoomSession;
use crate::input::gui::errors::GuiError;
use crate::presenters::pixels::presenter::PixelsPresenter;

/// Runs the zoom in a window until Escape is pressed or the window closes.
///
/// Quit requests only set a flag. The session polls it after the frame in
/// flight has been presented, so the last frame shown is always complete.
pub fn run_gui(config: &ZoomConfig) -> Result<RunSummary, GuiError> {
    let mut session = ZoomSession::new(config)?;
    let resolution = session.surface().resolution();

    let event_loop = EventLoop::new()?;

    // Leak the window to get a 'static reference for pixels
    let window: &'static Window = Box::leak(Box::new(
        WindowBuilder::new()
            .with_title("Fractal Zoom")
            .with_inner_size(LogicalSize::new(
                f64::from(resolution.width()),
                f64::from(resolution.height()),
            ))
            .with_min_inner_size(LogicalSize::new(200.0, 200.0))
            .build(&event_loop)?,
    ));

    let mut presenter = PixelsPresenter::new(window, resolution)?;
    let quit_requested = Cell::new(false);
    let mut failure: Option<GuiError> = None;

    event_loop.run(|event, elwt| match event {
        Event::WindowEvent { event, window_id } if window_id == window.id() => match event {
            WindowEvent::CloseRequested => {
                info!("window closed, finishing current frame");
                quit_requested.set(true);
            }
            WindowEvent::KeyboardInput { event, .. }
                if event.state == ElementState::Pressed
                    && event.logical_key == Key::Named(NamedKey::Escape) =>
            {
                info!("escape pressed, finishing current frame");
                quit_requested.set(true);
            }
            WindowEvent::Resized(size) => {
                if let Err(err) = presenter.resize(size.width, size.height) {
                    error!("resize failed: {}", err);
                    failure = Some(err.into());
                    elwt.exit();
                }
            }
            WindowEvent::RedrawRequested => {
                match session.step(&mut presenter, &|| quit_requested.get()) {
                    Ok(state) if state.is_terminated() => elwt.exit(),
                    Ok(_) => {}
                    Err(err) => {
                        error!("present failed: {}", err);
                        failure = Some(err.into());
                        elwt.exit();
                    }
                }
            }
            _ => {}
        },
        Event::AboutToWait => {
            window.request_redraw();
        }
        _ => {}
    })?;

    match failure {
        Some(err) => Err(err),
        None => Ok(session.summary()),
    }
}
