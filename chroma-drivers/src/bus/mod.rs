//! Panel bus implementations

mod gpio;

pub use gpio::{AddressPins, DataPins, GpioMatrixBus};
