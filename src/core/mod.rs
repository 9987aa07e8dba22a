pub mod actions;
pub mod constants;
pub mod data;
pub mod fractals;
pub mod palette;
pub mod util;
