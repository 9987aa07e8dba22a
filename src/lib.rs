pub mod adapters;
pub mod config;
pub mod controllers;
pub mod core;
pub mod input;
pub mod presenters;

pub use config::colour_config::{ConfigError, DEFAULT_CONFIG_PATH, load_colour_config};
pub use controllers::frame::frame_controller::{FrameController, FrameControllerError};
pub use controllers::ports::frame_presenter::FramePresenterPort;
pub use core::actions::compute_frame::compute_frame::{
    compute_frame, compute_frame_into, compute_frame_serial,
};
pub use core::actions::compute_frame::frame_request::FrameRequest;
pub use core::data::frame_buffer::FrameBuffer;
pub use core::data::viewport::{ViewCommand, ViewportState};
pub use core::fractals::fractal_kinds::FractalKinds;
pub use core::palette::coefficients::ColourCoefficients;
pub use core::palette::palette::Palette;
pub use input::menu::{MenuError, prompt_fractal_choice};
pub use presenters::file::ppm::PpmFilePresenter;

#[cfg(feature = "gui")]
pub use input::gui::run_gui;
