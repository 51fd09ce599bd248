//! Simulation module
//!
//! All gameplay logic lives here:
//! - Single-threaded, one tick per display frame
//! - Seeded RNG only
//! - Entity vectors keep insertion order (which is also draw order)
//! - Rendering goes through the `renderer` traits, never concrete backends

pub mod rect;
pub mod state;
pub mod tick;
pub mod timer;
pub mod vitals;

pub use rect::Rect;
pub use state::{Bullet, EntityRef, Meteor, Player, World};
pub use tick::{draw, tick};
pub use timer::Timer;
pub use vitals::Vitals;
