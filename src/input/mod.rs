//! Input adapters: the start-up menu and, with the `gui` feature, the window
//! event loop.

pub mod menu;

#[cfg(feature = "gui")]
pub mod gui;
