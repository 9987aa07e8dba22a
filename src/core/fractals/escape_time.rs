use crate::core::data::complex::Complex;

pub const BAILOUT_MAGNITUDE_SQUARED: f64 = 4.0;

/// Iterates `step` from `start` until |z|² exceeds the bailout or
/// `max_iterations` steps have run. Returns the number of completed steps.
#[inline]
pub fn escape_iterations<F>(start: Complex, max_iterations: u32, step: F) -> u32
where
    F: Fn(Complex) -> Complex,
{
    let mut z = start;

    for iteration in 0..max_iterations {
        if z.magnitude_squared() > BAILOUT_MAGNITUDE_SQUARED {
            return iteration;
        }
        z = step(z);
    }

    max_iterations
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_outside_bailout_returns_zero() {
        let result = escape_iterations(Complex::new(3.0, 0.0), 10, |z| z);

        assert_eq!(result, 0);
    }

    #[test]
    fn bailout_is_strictly_greater_than_four() {
        let result = escape_iterations(Complex::new(2.0, 0.0), 10, |z| z);

        assert_eq!(result, 10);
    }

    #[test]
    fn counts_steps_until_escape() {
        let result = escape_iterations(Complex::new(1.0, 0.0), 10, |z| z + Complex::ONE);

        // 1, 2 stay inside; 3 escapes after two steps
        assert_eq!(result, 2);
    }
}
