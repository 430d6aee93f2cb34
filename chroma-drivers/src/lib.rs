//! Hardware driver implementations
//!
//! Concrete implementations of the chroma-core bus traits:
//!
//! - `GpioMatrixBus`: bit-banged HUB75 signal lines over generic GPIO
//!
//! Everything is generic over the chroma-hal pin traits, so the same
//! drivers run on any target that can toggle a pin - including host
//! tests with mock pins.

#![no_std]
#![deny(unsafe_code)]

pub mod bus;
