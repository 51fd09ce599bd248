//! Rendering abstraction
//!
//! The game never builds drawing primitives itself. It positions artboards
//! through a small transform-stack [`Renderer`] and lets the vector-animation
//! runtime draw them.

pub mod headless;
pub mod runtime;

pub use headless::{CommandRecorder, DrawCommand, HeadlessRuntime};
pub use runtime::{Animation, AnimationSource, Artboard, AssetError, StateMachine};

/// Axis-aligned bounds as reported by the animation runtime
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Bounds {
    pub min_x: f32,
    pub min_y: f32,
    pub max_x: f32,
    pub max_y: f32,
}

impl Bounds {
    pub const fn new(min_x: f32, min_y: f32, max_x: f32, max_y: f32) -> Self {
        Self {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }

    /// Bounds of a `width` x `height` box centred on the origin
    pub fn centered(width: f32, height: f32) -> Self {
        Self::new(-width / 2.0, -height / 2.0, width / 2.0, height / 2.0)
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.max_x - self.min_x
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.max_y - self.min_y
    }
}

/// How content is scaled into a frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Fit {
    /// Keep the content at its natural size
    #[default]
    None,
}

/// Where content sits inside a frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Alignment {
    #[default]
    TopLeft,
}

/// Transform-stack renderer provided by the host
pub trait Renderer {
    /// Push the current transform
    fn save(&mut self);
    /// Pop back to the last saved transform
    fn restore(&mut self);
    fn translate(&mut self, x: f32, y: f32);
    fn rotate(&mut self, radians: f32);
    /// Transform so `content` lands in `frame` according to `fit`/`alignment`
    fn align(&mut self, fit: Fit, alignment: Alignment, frame: Bounds, content: Bounds);
    fn clear(&mut self);
    /// Raw fill, used by artboard implementations
    fn fill_rect(&mut self, rect: Bounds);
}
