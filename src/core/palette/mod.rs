pub mod coefficients;
pub mod palette;
