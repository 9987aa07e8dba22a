use std::error::Error;
use std::fmt;

/// Upper bound on samples per axis; 256 samples per pixel.
pub const MAX_SAMPLES_PER_AXIS: u32 = 16;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SupersamplingError {
    ZeroSamplesError,
    TooManySamplesError { samples_per_axis: u32 },
}

impl fmt::Display for SupersamplingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroSamplesError => {
                write!(f, "Samples per axis must be greater than zero")
            }
            Self::TooManySamplesError { samples_per_axis } => {
                write!(
                    f,
                    "Samples per axis must be at most {}: {}",
                    MAX_SAMPLES_PER_AXIS, samples_per_axis
                )
            }
        }
    }
}

impl Error for SupersamplingError {}

/// Sub-pixel position within a pixel, each component in [0, 1).
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SubPixelOffset {
    pub dx: f64,
    pub dy: f64,
}

impl SubPixelOffset {
    pub const ORIGIN: Self = Self { dx: 0.0, dy: 0.0 };
    pub const CENTRE: Self = Self { dx: 0.5, dy: 0.5 };
}

/// An S×S grid of samples per pixel. S = 1 disables antialiasing.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Supersampling {
    samples_per_axis: u32,
}

impl Default for Supersampling {
    fn default() -> Self {
        Self { samples_per_axis: 2 }
    }
}

impl Supersampling {
    pub const NONE: Self = Self { samples_per_axis: 1 };

    pub fn new(samples_per_axis: u32) -> Result<Self, SupersamplingError> {
        if samples_per_axis == 0 {
            return Err(SupersamplingError::ZeroSamplesError);
        }

        if samples_per_axis > MAX_SAMPLES_PER_AXIS {
            return Err(SupersamplingError::TooManySamplesError { samples_per_axis });
        }

        Ok(Self { samples_per_axis })
    }

    #[must_use]
    pub fn samples_per_axis(&self) -> u32 {
        self.samples_per_axis
    }

    #[must_use]
    pub fn samples_per_pixel(&self) -> u32 {
        self.samples_per_axis * self.samples_per_axis
    }

    /// Offsets at ((k + 0.5) / S, (l + 0.5) / S), row by row.
    pub fn offsets(&self) -> impl Iterator<Item = SubPixelOffset> + use<> {
        let s = self.samples_per_axis;
        let step = 1.0 / s as f64;

        (0..s).flat_map(move |l| {
            (0..s).map(move |k| SubPixelOffset {
                dx: (k as f64 + 0.5) * step,
                dy: (l as f64 + 0.5) * step,
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_two_by_two() {
        let supersampling = Supersampling::default();

        assert_eq!(supersampling.samples_per_axis(), 2);
        assert_eq!(supersampling.samples_per_pixel(), 4);
    }

    #[test]
    fn zero_samples_is_rejected() {
        assert_eq!(Supersampling::new(0), Err(SupersamplingError::ZeroSamplesError));
    }

    #[test]
    fn oversized_grids_are_rejected() {
        assert_eq!(
            Supersampling::new(MAX_SAMPLES_PER_AXIS + 1),
            Err(SupersamplingError::TooManySamplesError { samples_per_axis: 17 })
        );
        assert_eq!(
            Supersampling::new(70_000),
            Err(SupersamplingError::TooManySamplesError { samples_per_axis: 70_000 })
        );
    }

    #[test]
    fn largest_grid_is_accepted() {
        let supersampling = Supersampling::new(MAX_SAMPLES_PER_AXIS).unwrap();

        assert_eq!(supersampling.samples_per_pixel(), 256);
    }

    #[test]
    fn single_sample_sits_at_pixel_centre() {
        let offsets: Vec<SubPixelOffset> = Supersampling::NONE.offsets().collect();

        assert_eq!(offsets, vec![SubPixelOffset::CENTRE]);
    }

    #[test]
    fn two_by_two_offsets_are_quarter_points() {
        let offsets: Vec<SubPixelOffset> = Supersampling::default().offsets().collect();

        assert_eq!(
            offsets,
            vec![
                SubPixelOffset { dx: 0.25, dy: 0.25 },
                SubPixelOffset { dx: 0.75, dy: 0.25 },
                SubPixelOffset { dx: 0.25, dy: 0.75 },
                SubPixelOffset { dx: 0.75, dy: 0.75 },
            ]
        );
    }

    #[test]
    fn offsets_stay_inside_the_pixel() {
        let supersampling = Supersampling::new(5).unwrap();

        assert_eq!(supersampling.offsets().count(), 25);
        assert!(
            supersampling
                .offsets()
                .all(|o| (0.0..1.0).contains(&o.dx) && (0.0..1.0).contains(&o.dy))
        );
    }
}
