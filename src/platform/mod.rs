//! Platform abstraction layer
//!
//! Host-facing glue that the simulation polls:
//! - Input key state
//! - Frame timing (timestamps to dt, FPS)

pub mod input;
pub mod time;

pub use input::PressedKeys;
pub use time::FrameClock;
