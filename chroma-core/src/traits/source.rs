//! Content source trait

use crate::frame::Row;

/// A content source that can materialize any logical row on demand.
///
/// Both content sources (the frame buffer and the layer engine)
/// implement this; the bit-plane packer pulls rows through it without
/// knowing which source is active this cycle.
pub trait RowSource {
    /// Produce the pixels of logical row `y`.
    ///
    /// Rows outside the display are blank; requesting one is not an
    /// error.
    fn capture_row(&self, y: u8) -> Row;
}
