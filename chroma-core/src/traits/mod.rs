//! Seams between the render core and its collaborators

pub mod bus;
pub mod source;

pub use bus::MatrixBus;
pub use source::RowSource;
