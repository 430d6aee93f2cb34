//! Bit-banged HUB75 bus
//!
//! Thirteen GPIO lines: six color data bits, four row-address bits,
//! shift clock, latch, output enable. Data is presented while the
//! clock is low and sampled by the panel on the rising edge.

use chroma_core::traits::MatrixBus;
use chroma_hal::{DelayCycles, OutputPin};

/// The six color data lines: top sub-row then bottom
pub struct DataPins<P> {
    pub r1: P,
    pub g1: P,
    pub b1: P,
    pub r2: P,
    pub g2: P,
    pub b2: P,
}

/// The four row-address lines, least significant first
pub struct AddressPins<P> {
    pub a: P,
    pub b: P,
    pub c: P,
    pub d: P,
}

/// HUB75 bus over plain GPIO
///
/// `OE` on most panels is active-low; construction fixes the polarity
/// and [`MatrixBus::set_output_enable`] speaks in logical terms only.
pub struct GpioMatrixBus<P, D> {
    data: DataPins<P>,
    address: AddressPins<P>,
    clock: P,
    latch: P,
    output_enable: P,
    /// If true, the panel lights when the OE pin is LOW
    oe_active_low: bool,
    delay: D,
}

impl<P: OutputPin, D: DelayCycles> GpioMatrixBus<P, D> {
    /// Create a bus with active-low output enable (the HUB75 norm).
    ///
    /// The panel starts blanked with clock and latch idle low.
    pub fn new(
        data: DataPins<P>,
        address: AddressPins<P>,
        clock: P,
        latch: P,
        output_enable: P,
        delay: D,
    ) -> Self {
        Self::with_oe_polarity(data, address, clock, latch, output_enable, true, delay)
    }

    /// Create a bus with explicit output-enable polarity
    pub fn with_oe_polarity(
        data: DataPins<P>,
        address: AddressPins<P>,
        clock: P,
        latch: P,
        output_enable: P,
        oe_active_low: bool,
        delay: D,
    ) -> Self {
        let mut bus = Self {
            data,
            address,
            clock,
            latch,
            output_enable,
            oe_active_low,
            delay,
        };
        bus.clock.set_low();
        bus.latch.set_low();
        bus.set_output_enable(false);
        bus
    }

    /// Tear the bus back down into its pins
    pub fn release(self) -> (DataPins<P>, AddressPins<P>, P, P, P) {
        (
            self.data,
            self.address,
            self.clock,
            self.latch,
            self.output_enable,
        )
    }
}

impl<P: OutputPin, D: DelayCycles> MatrixBus for GpioMatrixBus<P, D> {
    fn set_row_address(&mut self, addr: u8) {
        self.address.a.set_state(addr & 0x01 != 0);
        self.address.b.set_state(addr & 0x02 != 0);
        self.address.c.set_state(addr & 0x04 != 0);
        self.address.d.set_state(addr & 0x08 != 0);
    }

    fn shift(&mut self, bits: u8) {
        self.clock.set_low();

        self.data.r1.set_state(bits & 0x01 != 0);
        self.data.g1.set_state(bits & 0x02 != 0);
        self.data.b1.set_state(bits & 0x04 != 0);
        self.data.r2.set_state(bits & 0x08 != 0);
        self.data.g2.set_state(bits & 0x10 != 0);
        self.data.b2.set_state(bits & 0x20 != 0);

        self.clock.set_high();
    }

    fn latch(&mut self) {
        self.latch.set_high();
        self.latch.set_low();
    }

    fn set_output_enable(&mut self, lit: bool) {
        // lit != active_low collapses both polarities into one write.
        self.output_enable.set_state(lit != self.oe_active_low);
    }

    fn hold(&mut self, duration: u32) {
        self.delay.delay_cycles(duration);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Mock GPIO pin that counts rising edges
    #[derive(Default)]
    struct MockPin {
        high: bool,
        rises: u32,
    }

    impl OutputPin for MockPin {
        fn set_high(&mut self) {
            if !self.high {
                self.rises += 1;
            }
            self.high = true;
        }

        fn set_low(&mut self) {
            self.high = false;
        }

        fn is_set_high(&self) -> bool {
            self.high
        }
    }

    /// Mock delay that sums requested cycles
    #[derive(Default)]
    struct MockDelay {
        total: u32,
    }

    impl DelayCycles for MockDelay {
        fn delay_cycles(&mut self, cycles: u32) {
            self.total += cycles;
        }
    }

    fn mock_bus() -> GpioMatrixBus<MockPin, MockDelay> {
        GpioMatrixBus::new(
            DataPins {
                r1: MockPin::default(),
                g1: MockPin::default(),
                b1: MockPin::default(),
                r2: MockPin::default(),
                g2: MockPin::default(),
                b2: MockPin::default(),
            },
            AddressPins {
                a: MockPin::default(),
                b: MockPin::default(),
                c: MockPin::default(),
                d: MockPin::default(),
            },
            MockPin::default(),
            MockPin::default(),
            MockPin::default(),
            MockDelay::default(),
        )
    }

    #[test]
    fn construction_blanks_the_panel() {
        let bus = mock_bus();
        // Active-low OE: blanked means the pin is high.
        assert!(bus.output_enable.is_set_high());
        assert!(bus.clock.is_set_low());
        assert!(bus.latch.is_set_low());
    }

    #[test]
    fn shift_presents_data_and_pulses_the_clock() {
        let mut bus = mock_bus();
        bus.shift(0b10_0101);

        assert!(bus.data.r1.is_set_high());
        assert!(bus.data.g1.is_set_low());
        assert!(bus.data.b1.is_set_high());
        assert!(bus.data.r2.is_set_low());
        assert!(bus.data.g2.is_set_low());
        assert!(bus.data.b2.is_set_high());
        assert_eq!(bus.clock.rises, 1);

        bus.shift(0);
        assert!(bus.data.r1.is_set_low());
        assert!(bus.data.b2.is_set_low());
        assert_eq!(bus.clock.rises, 2);
    }

    #[test]
    fn row_address_drives_four_lines_binary() {
        let mut bus = mock_bus();
        bus.set_row_address(0b1010);

        assert!(bus.address.a.is_set_low());
        assert!(bus.address.b.is_set_high());
        assert!(bus.address.c.is_set_low());
        assert!(bus.address.d.is_set_high());
    }

    #[test]
    fn latch_pulses_and_returns_low() {
        let mut bus = mock_bus();
        bus.latch();
        assert!(bus.latch.is_set_low());
        assert_eq!(bus.latch.rises, 1);
    }

    #[test]
    fn output_enable_respects_polarity() {
        let mut bus = mock_bus();
        bus.set_output_enable(true);
        assert!(bus.output_enable.is_set_low());
        bus.set_output_enable(false);
        assert!(bus.output_enable.is_set_high());

        let mut bus = GpioMatrixBus::with_oe_polarity(
            DataPins {
                r1: MockPin::default(),
                g1: MockPin::default(),
                b1: MockPin::default(),
                r2: MockPin::default(),
                g2: MockPin::default(),
                b2: MockPin::default(),
            },
            AddressPins {
                a: MockPin::default(),
                b: MockPin::default(),
                c: MockPin::default(),
                d: MockPin::default(),
            },
            MockPin::default(),
            MockPin::default(),
            MockPin::default(),
            false,
            MockDelay::default(),
        );
        bus.set_output_enable(true);
        assert!(bus.output_enable.is_set_high());
    }

    #[test]
    fn hold_forwards_to_the_delay_provider() {
        let mut bus = mock_bus();
        bus.hold(40);
        bus.hold(80);
        assert_eq!(bus.delay.total, 120);
    }
}
