//! Loading of the palette coefficients from a small text file.

pub mod colour_config;
