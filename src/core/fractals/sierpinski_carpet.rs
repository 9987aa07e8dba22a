use crate::core::data::complex::Complex;

/// Depth of the first level whose base-3 digits are both 1, i.e. the level at
/// which the point falls in a removed square of the carpet.
///
/// Not an escape count: `max_iterations` means no removed square was found.
/// Plane coordinates are rescaled with (v + 1) / 2 first, and non-positive
/// rescaled coordinates never match.
#[must_use]
pub fn sierpinski_level(point: Complex, max_iterations: u32) -> u32 {
    let x = (point.real + 1.0) / 2.0;
    let y = (point.imag + 1.0) / 2.0;

    if !(x > 0.0 && y > 0.0) {
        return max_iterations;
    }

    // Only the fractional part decides the next digit, keep the coordinates in [0, 1)
    let mut x = x.fract();
    let mut y = y.fract();

    for level in 0..max_iterations {
        // a zero coordinate has only zero digits left
        if x <= 0.0 || y <= 0.0 {
            return max_iterations;
        }

        if ternary_digit(x) == 1 && ternary_digit(y) == 1 {
            return level;
        }

        x = (x * 3.0).fract();
        y = (y * 3.0).fract();
    }

    max_iterations
}

fn ternary_digit(value: f64) -> u32 {
    (value * 3.0) as u32 % 3
}
