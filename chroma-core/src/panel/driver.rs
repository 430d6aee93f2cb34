//! Bit-angle-modulation drive sequence
//!
//! The panel has no brightness control of its own; a pixel's 3-bit
//! level is synthesized by exposing each bit plane for a time
//! proportional to its weight. That makes the drive sequence hard
//! real-time: the holds inside `render_scan_address` ARE the image.

use super::packer::{PlaneBuffer, PLANES};
use crate::config::TimingConfig;
use crate::traits::MatrixBus;

/// Output-enable time for `plane`, in bus time units.
///
/// Binary weighting is the whole brightness mechanism: plane k is lit
/// for `base << k`, so the three exposures sum to the pixel's level.
pub const fn exposure_duration(base: u32, plane: u8) -> u32 {
    base << plane
}

/// Drives one panel chain through a [`MatrixBus`].
///
/// `render_scan_address` blocks and always runs to completion; callers
/// poll inputs only between full frames, never mid-scan.
pub struct MatrixDriver<B> {
    bus: B,
    base_exposure: u32,
}

impl<B: MatrixBus> MatrixDriver<B> {
    pub fn new(bus: B, timing: TimingConfig) -> Self {
        Self {
            bus,
            base_exposure: timing.base_exposure,
        }
    }

    /// Transmit and expose one scan address from freshly packed planes.
    ///
    /// Per plane: shift all columns blanked, latch, expose for the
    /// plane's weighted duration, blank again. The panel stays blanked
    /// while the row address changes and while data shifts, so
    /// partially-clocked columns are never visible. Addresses that are
    /// never passed here are never blanked either; their latched
    /// content simply reappears the next time they are scanned.
    pub fn render_scan_address(&mut self, addr: u8, planes: &PlaneBuffer) {
        self.bus.set_output_enable(false);
        self.bus.set_row_address(addr & 0x0F);

        for plane in 0..PLANES {
            for &bits in planes.plane(plane).iter() {
                self.bus.shift(bits);
            }
            self.bus.latch();

            self.bus.set_output_enable(true);
            self.bus.hold(exposure_duration(self.base_exposure, plane as u8));
            self.bus.set_output_enable(false);
        }
    }

    /// The underlying bus (to inspect mocks, reclaim pins)
    pub fn bus_mut(&mut self) -> &mut B {
        &mut self.bus
    }
}
