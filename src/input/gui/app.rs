use log::{error, info};
use winit::{
    dpi::LogicalSize,
    event::{ElementState, Event, KeyEvent, WindowEvent},
    event_loop::EventLoop,
    keyboard::PhysicalKey,
    window::{Window, WindowBuilder},
};

use crate::controllers::frame::frame_controller::FrameController;
use crate::core::constants::{HEIGHT, WIDTH};
use crate::core::fractals::fractal_kinds::FractalKinds;
use crate::core::palette::palette::Palette;
use crate::input::gui::keys::{is_exit_key, view_command_for_key};
use crate::presenters::pixels::presenter::PixelsPresenter;

/// Opens the window and runs the event loop until the window is closed or
/// Escape is pressed.
///
/// Frames are computed on the event-loop thread when a redraw is due, so key
/// presses that arrive during a frame are applied before the next one.
pub fn run_gui(fractal: FractalKinds, palette: Palette) -> Result<(), Box<dyn std::error::Error>> {
    let event_loop = EventLoop::new()?;

    // Leak the window to get a 'static reference for pixels
    let window: &'static Window = Box::leak(Box::new(
        WindowBuilder::new()
            .with_title(format!("Fractal Viewer - {}", fractal))
            .with_inner_size(LogicalSize::new(WIDTH as f64, HEIGHT as f64))
            .with_min_inner_size(LogicalSize::new(200.0, 150.0))
            .build(&event_loop)?,
    ));

    let presenter = PixelsPresenter::new(window, WIDTH, HEIGHT)?;
    let mut controller = FrameController::new(presenter, fractal, palette);

    // The view changed since the last computed frame.
    let mut view_dirty = true;
    let mut redraw_pending = true;

    info!("opened {} window; W/A/S/D pan, Q/E zoom, Escape quits", fractal);

    event_loop.run(|event, elwt| match event {
        Event::WindowEvent {
            ref event,
            window_id,
        } if window_id == window.id() => match event {
            WindowEvent::CloseRequested => elwt.exit(),
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        physical_key: PhysicalKey::Code(key),
                        state: ElementState::Pressed,
                        ..
                    },
                ..
            } => {
                if is_exit_key(*key) {
                    elwt.exit();
                } else if let Some(command) = view_command_for_key(*key) {
                    controller.apply(command);
                    view_dirty = true;
                    redraw_pending = true;
                }
            }
            WindowEvent::Resized(size) => {
                if let Err(e) = controller.presenter_mut().resize_surface(size.width, size.height) {
                    error!("resize failed: {}", e);
                    elwt.exit();
                }
                redraw_pending = true;
            }
            WindowEvent::RedrawRequested => {
                redraw_pending = false;

                let result = if view_dirty {
                    view_dirty = false;
                    controller.render().map(|_| ())
                } else {
                    controller.present()
                };

                if let Err(e) = result {
                    error!("{}", e);
                    elwt.exit();
                }
            }
            _ => {}
        },
        Event::AboutToWait => {
            if redraw_pending {
                window.request_redraw();
            }
        }
        _ => {}
    })?;

    Ok(())
}
