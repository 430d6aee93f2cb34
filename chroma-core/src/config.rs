//! Drive-timing configuration
//!
//! Everything tied to a specific MCU clock tree (absolute cycle rates,
//! pin assignments) stays outside the core. The one knob the render
//! path needs is the unit exposure time.

/// Default unit exposure, tuned for ~84 MHz bit-banged GPIO
pub const DEFAULT_BASE_EXPOSURE: u32 = 40;

/// Timing knobs for the matrix driver
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TimingConfig {
    /// Output-enable time of plane 0, in `MatrixBus::hold` units.
    /// Higher planes are held for power-of-two multiples of this.
    pub base_exposure: u32,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            base_exposure: DEFAULT_BASE_EXPOSURE,
        }
    }
}
