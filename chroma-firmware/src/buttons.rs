//! Button polling
//!
//! Buttons are sampled only at frame boundaries (mid-scan polling
//! would distort the exposure timing), so a previous-state latch is
//! enough; the frame period swamps switch bounce.

use chroma_hal::InputPin;

/// What one poll of a button saw
#[derive(Debug, Clone, Copy)]
pub struct ButtonEvent {
    /// Button is currently down
    pub held: bool,
    /// Button went down since the previous poll
    pub edge: bool,
}

/// Level/edge tracker for one active-low button
pub struct Button<P> {
    pin: P,
    was_pressed: bool,
}

impl<P: InputPin> Button<P> {
    pub fn new(pin: P) -> Self {
        Self {
            pin,
            was_pressed: false,
        }
    }

    /// Sample the pin once and report level plus press edge
    pub fn poll(&mut self) -> ButtonEvent {
        let pressed = self.pin.is_low();
        let event = ButtonEvent {
            held: pressed,
            edge: pressed && !self.was_pressed,
        };
        self.was_pressed = pressed;
        event
    }
}
