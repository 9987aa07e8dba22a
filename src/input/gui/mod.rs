//! Interactive window: winit for events, pixels for the framebuffer.

mod app;
pub mod keys;

pub use app::run_gui;
