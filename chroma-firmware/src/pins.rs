//! Pin and timing adapters for embassy-stm32

use chroma_hal::{DelayCycles, InputPin, OutputPin};
use embassy_stm32::gpio::{Input, Output};

/// Push-pull output wired into the chroma-hal pin trait
pub struct PanelPin<'d> {
    inner: Output<'d>,
}

impl<'d> PanelPin<'d> {
    pub fn new(inner: Output<'d>) -> Self {
        Self { inner }
    }
}

impl OutputPin for PanelPin<'_> {
    fn set_high(&mut self) {
        self.inner.set_high();
    }

    fn set_low(&mut self) {
        self.inner.set_low();
    }

    fn is_set_high(&self) -> bool {
        self.inner.is_set_high()
    }
}

/// Button input wired into the chroma-hal pin trait
pub struct ButtonPin<'d> {
    inner: Input<'d>,
}

impl<'d> ButtonPin<'d> {
    pub fn new(inner: Input<'d>) -> Self {
        Self { inner }
    }
}

impl InputPin for ButtonPin<'_> {
    fn is_high(&self) -> bool {
        self.inner.is_high()
    }
}

/// Core-cycle busy wait backing the exposure holds
pub struct CycleDelay;

impl DelayCycles for CycleDelay {
    fn delay_cycles(&mut self, cycles: u32) {
        cortex_m::asm::delay(cycles);
    }
}
