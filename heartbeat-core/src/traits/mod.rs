//! Hardware abstraction traits
//!
//! These traits define the interface between the animation logic
//! and the display driver.

pub mod display;

pub use display::{MatrixDisplay, MatrixDisplayExt};
pub use heartbeat_hal::TickDelay;
