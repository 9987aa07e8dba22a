use crate::core::actions::compute_frame::ports::colour_map::ColourMap;
use crate::core::constants::MAX_ITER;
use crate::core::data::colour::Colour;
use crate::core::palette::coefficients::ColourCoefficients;

/// Lookup table of `MAX_ITER` colours built once from a set of coefficients.
/// Immutable, shared read-only by every worker of a frame.
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    coefficients: ColourCoefficients,
    colours: Vec<Colour>,
}

impl Palette {
    #[must_use]
    pub fn build(coefficients: ColourCoefficients) -> Self {
        let colours = (0..MAX_ITER).map(|i| coefficients.colour_at(i)).collect();

        Self {
            coefficients,
            colours,
        }
    }

    #[must_use]
    pub fn coefficients(&self) -> ColourCoefficients {
        self.coefficients
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.colours.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.colours.is_empty()
    }

    /// `MAX_ITER` is the background sentinel and is never looked up in the table.
    #[must_use]
    pub fn colour_for(&self, iterations: u32) -> Colour {
        if iterations >= MAX_ITER {
            return Colour::BACKGROUND;
        }

        self.colours[iterations as usize]
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::build(ColourCoefficients::default())
    }
}

impl ColourMap for Palette {
    fn map(&self, iterations: u32) -> Colour {
        self.colour_for(iterations)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_has_one_entry_per_iteration_below_cap() {
        let palette = Palette::default();

        assert_eq!(palette.len(), MAX_ITER as usize);
        assert!(!palette.is_empty());
    }

    #[test]
    fn rebuilding_is_bit_identical() {
        let coefficients = ColourCoefficients {
            r_mult: 9,
            g_mult: 2,
            b_mult: 5,
            r_shift: 0,
            g_shift: 0,
            b_shift: 0,
        };

        assert_eq!(Palette::build(coefficients), Palette::build(coefficients));
    }

    #[test]
    fn table_matches_direct_formula() {
        let palette = Palette::default();
        let coefficients = palette.coefficients();

        for i in 0..MAX_ITER {
            assert_eq!(palette.colour_for(i), coefficients.colour_at(i));
        }
    }

    #[test]
    fn every_entry_is_opaque() {
        let palette = Palette::default();

        assert!((0..MAX_ITER).all(|i| palette.colour_for(i).a == 0xFF));
    }

    #[test]
    fn max_iter_maps_to_background() {
        let palette = Palette::default();

        assert_eq!(palette.colour_for(MAX_ITER), Colour::BACKGROUND);
        assert_eq!(palette.map(MAX_ITER), Colour::BACKGROUND);
    }

    #[test]
    fn values_past_cap_map_to_background() {
        assert_eq!(Palette::default().colour_for(u32::MAX), Colour::BACKGROUND);
    }

    #[test]
    fn last_table_entry_is_reachable() {
        let palette = Palette::default();

        assert_eq!(
            palette.colour_for(MAX_ITER - 1),
            palette.coefficients().colour_at(MAX_ITER - 1)
        );
    }
}
