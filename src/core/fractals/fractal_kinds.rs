use crate::core::constants::MAX_ITER;
use crate::core::data::complex::Complex;
use crate::core::fractals::burning_ship::burning_ship_iterations;
use crate::core::fractals::julia::{JULIA_CONSTANT, julia_iterations};
use crate::core::fractals::mandelbrot::mandelbrot_iterations;
use crate::core::fractals::multibrot::multibrot_iterations;
use crate::core::fractals::newton::newton_iterations;
use crate::core::fractals::sierpinski_carpet::sierpinski_level;
use crate::core::fractals::tricorn::tricorn_iterations;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FractalKinds {
    #[default]
    Mandelbrot,
    Julia,
    Tricorn,
    Multibrot,
    BurningShip,
    SierpinskiCarpet,
    Newton,
}

impl FractalKinds {
    /// Menu order; entry `n` is chosen with menu number `n + 1`.
    pub const ALL: &'static [Self] = &[
        Self::Mandelbrot,
        Self::Julia,
        Self::Tricorn,
        Self::Multibrot,
        Self::BurningShip,
        Self::SierpinskiCarpet,
        Self::Newton,
    ];

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Mandelbrot => "Mandelbrot",
            Self::Julia => "Julia",
            Self::Tricorn => "Tricorn",
            Self::Multibrot => "Multibrot",
            Self::BurningShip => "Burning Ship",
            Self::SierpinskiCarpet => "Sierpinski Carpet",
            Self::Newton => "Newton",
        }
    }

    #[must_use]
    pub fn from_menu_choice(choice: u32) -> Option<Self> {
        let index = usize::try_from(choice).ok()?.checked_sub(1)?;
        Self::ALL.get(index).copied()
    }

    /// Iteration result in `0..=MAX_ITER` for a point of the plane.
    #[must_use]
    pub fn evaluate(self, point: Complex) -> u32 {
        match self {
            Self::Mandelbrot => mandelbrot_iterations(point, MAX_ITER),
            Self::Julia => julia_iterations(point, JULIA_CONSTANT, MAX_ITER),
            Self::Tricorn => tricorn_iterations(point, MAX_ITER),
            Self::Multibrot => multibrot_iterations(point, MAX_ITER),
            Self::BurningShip => burning_ship_iterations(point, MAX_ITER),
            Self::SierpinskiCarpet => sierpinski_level(point, MAX_ITER),
            Self::Newton => newton_iterations(point, MAX_ITER),
        }
    }
}

impl std::fmt::Display for FractalKinds {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str((*self).display_name())
    }
}
