//! Bit-plane packing
//!
//! A 3-bit channel value is spread across three single-bit planes; the
//! driver then exposes plane k for 2^k time units, and the eye
//! reassembles the intensity by integration. Packing must therefore be
//! exact: bit k of the level goes to plane k, nothing more.

use super::mapping::{scan_target, CHAIN_COLS, SCAN_ADDRESSES};
use crate::frame::Rgb;
use crate::traits::RowSource;

/// Bit planes per channel (3-bit color depth)
pub const PLANES: usize = 3;

/// Packed shift data for one scan address: one byte per column per
/// plane, six used bits each (top R,G,B in bits 0..=2, bottom R,G,B in
/// bits 3..=5)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaneBuffer {
    planes: [[u8; CHAIN_COLS]; PLANES],
}

impl Default for PlaneBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl PlaneBuffer {
    pub const fn new() -> Self {
        Self {
            planes: [[0; CHAIN_COLS]; PLANES],
        }
    }

    /// Shift bytes of one plane, in shift order
    pub fn plane(&self, plane: usize) -> &[u8; CHAIN_COLS] {
        &self.planes[plane]
    }
}

/// Combine one column's top and bottom pixels into the data byte for
/// `plane`
fn data_bits(top: Rgb, bottom: Rgb, plane: usize) -> u8 {
    let bit = |level: u8, position: u8| ((level >> plane) & 1) << position;

    bit(top.r, 0)
        | bit(top.g, 1)
        | bit(top.b, 2)
        | bit(bottom.r, 3)
        | bit(bottom.g, 4)
        | bit(bottom.b, 5)
}

/// Pack the four logical rows of scan address `addr` from `src`.
///
/// Pure: identical input rows produce bit-identical planes, which is
/// what lets the dirty-row path skip retransmitting unchanged
/// addresses.
pub fn pack_scan_address(src: &impl RowSource, addr: u8, out: &mut PlaneBuffer) {
    let addr = addr & 0x0F;

    // Logical row addr + 16k lands in slot k, so slot recovery from a
    // scan_target row number is a shift.
    let rows = [
        src.capture_row(addr),
        src.capture_row(addr + SCAN_ADDRESSES as u8),
        src.capture_row(addr + 2 * SCAN_ADDRESSES as u8),
        src.capture_row(addr + 3 * SCAN_ADDRESSES as u8),
    ];

    for col in 0..CHAIN_COLS {
        let target = scan_target(addr, col as u8);
        let top = rows[(target.top_row >> 4) as usize][target.x as usize];
        let bottom = rows[(target.bottom_row >> 4) as usize][target.x as usize];

        for plane in 0..PLANES {
            out.planes[plane][col] = data_bits(top, bottom, plane);
        }
    }
}
