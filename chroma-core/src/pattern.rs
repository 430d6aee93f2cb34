//! Bring-up test patterns
//!
//! Static full-field patterns for verifying wiring, color order and
//! plane timing before the real content sources go live.

use crate::frame::{Row, Rgb, BLANK_ROW, LEVEL_MAX, SCREEN_W};
use crate::traits::RowSource;

/// Solid and gradient panel test patterns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TestPattern {
    #[default]
    Red,
    Green,
    Blue,
    White,
    /// Thirds of the display sweep one channel each through all eight
    /// levels, column-wise; a quick check of the plane weighting
    Gradient,
}

impl RowSource for TestPattern {
    fn capture_row(&self, _y: u8) -> Row {
        let mut row = BLANK_ROW;
        for (x, px) in row.iter_mut().enumerate() {
            *px = match self {
                TestPattern::Red => Rgb::new(LEVEL_MAX, 0, 0),
                TestPattern::Green => Rgb::new(0, LEVEL_MAX, 0),
                TestPattern::Blue => Rgb::new(0, 0, LEVEL_MAX),
                TestPattern::White => Rgb::new(LEVEL_MAX, LEVEL_MAX, LEVEL_MAX),
                TestPattern::Gradient => {
                    let level = (x % 8) as u8;
                    if x < SCREEN_W / 3 {
                        Rgb::new(level, 0, 0)
                    } else if x < 2 * SCREEN_W / 3 {
                        Rgb::new(0, level, 0)
                    } else {
                        Rgb::new(0, 0, level)
                    }
                }
            };
        }
        row
    }
}
