//! Panel output path: logical rows -> bit planes -> signal lines
//!
//! The two content sources never talk to the panel directly; they hand
//! rows to the packer, and the driver turns packed planes into the
//! multiplexed electrical protocol. `Panel` glues the two behind one
//! plane buffer.

pub mod driver;
pub mod mapping;
pub mod packer;

pub use driver::{exposure_duration, MatrixDriver};
pub use mapping::{scan_target, ScanTarget, CHAIN_COLS, PANEL_COLS, ROWS_PER_ADDRESS, SCAN_ADDRESSES};
pub use packer::{pack_scan_address, PlaneBuffer, PLANES};

use crate::config::TimingConfig;
use crate::dirty::DirtyRows;
use crate::traits::{MatrixBus, RowSource};

/// Packer and driver glued behind one plane buffer
pub struct Panel<B> {
    driver: MatrixDriver<B>,
    planes: PlaneBuffer,
}

impl<B: MatrixBus> Panel<B> {
    pub fn new(bus: B, timing: TimingConfig) -> Self {
        Self {
            driver: MatrixDriver::new(bus, timing),
            planes: PlaneBuffer::new(),
        }
    }

    /// Pack and drive a single scan address from `src`
    pub fn show_scan_address(&mut self, src: &impl RowSource, addr: u8) {
        pack_scan_address(src, addr, &mut self.planes);
        self.driver.render_scan_address(addr, &self.planes);
    }

    /// Drive all 16 scan addresses once: one full visible frame
    pub fn show_frame(&mut self, src: &impl RowSource) {
        for addr in 0..SCAN_ADDRESSES as u8 {
            self.show_scan_address(src, addr);
        }
    }

    /// Drive only the scan addresses covering dirty rows. Untouched
    /// addresses keep their latched content until they are next driven.
    pub fn show_dirty(&mut self, src: &impl RowSource, dirty: DirtyRows) {
        for addr in dirty.scan_addresses() {
            self.show_scan_address(src, addr);
        }
    }

    /// The underlying bus (to inspect mocks, reclaim pins)
    pub fn bus_mut(&mut self) -> &mut B {
        self.driver.bus_mut()
    }
}
