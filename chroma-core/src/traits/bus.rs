//! Panel signal-line trait

/// Signal-line interface to a HUB75-style panel chain.
///
/// One implementation bit-bangs GPIO (chroma-drivers); tests substitute
/// a recording bus. All methods are infallible: the panel has no
/// feedback path, so there is nothing to report.
pub trait MatrixBus {
    /// Drive the four row-address lines with scan address `addr`
    /// (0..=15).
    fn set_row_address(&mut self, addr: u8);

    /// Present six data bits and pulse the shift clock once.
    ///
    /// Bit layout: bits 0..=2 carry R,G,B for the top sub-row, bits
    /// 3..=5 carry R,G,B for the bottom sub-row of the selected scan
    /// address.
    fn shift(&mut self, bits: u8);

    /// Pulse the latch line, transferring the shifted columns to the
    /// output registers.
    fn latch(&mut self);

    /// Assert (`true`, panel lit) or deassert the output-enable line.
    fn set_output_enable(&mut self, lit: bool);

    /// Block for `duration` bus time units with the lines held steady.
    ///
    /// The driver calls this with output-enable asserted; the length of
    /// the wait encodes brightness, so implementations must not return
    /// early.
    fn hold(&mut self, duration: u32);
}
