//! Board-agnostic rendering core for the Chroma LED matrix firmware
//!
//! Everything that does not touch a pin lives here:
//!
//! - Spinning-cube renderer (rotation, projection, painter ordering,
//!   Lambert shading, triangle rasterization)
//! - Bounded layer/sprite compositor with dirty-row tracking
//! - Bit-plane packing for 3-bit color
//! - Bit-angle-modulation drive sequence over an abstract signal bus
//!
//! The render path is deliberately infallible. A multiplexed panel has
//! no channel to report faults and the scan loop must never stall, so
//! every out-of-range input clips or saturates instead of erroring.

#![no_std]
#![deny(unsafe_code)]

pub mod config;
pub mod cube;
pub mod dirty;
pub mod frame;
pub mod layer;
pub mod math;
pub mod panel;
pub mod pattern;
pub mod traits;
