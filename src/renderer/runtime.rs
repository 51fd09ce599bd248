//! Vector-animation runtime boundary
//!
//! The runtime hands out artboard + state machine pairs by name. Both are
//! native resources that must be released exactly once; [`Animation`] owns the
//! pair and enforces that.

use std::fmt;

use thiserror::Error;

use super::{Bounds, Renderer};

/// Failure to resolve a named asset in the loaded animation file
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AssetError {
    #[error("artboard `{0}` not found")]
    MissingArtboard(String),
    #[error("state machine `{state_machine}` not found on artboard `{artboard}`")]
    MissingStateMachine {
        artboard: String,
        state_machine: String,
    },
}

/// A drawable artboard instance
pub trait Artboard {
    fn name(&self) -> &str;
    /// Advance the artboard timeline by `dt` seconds
    fn advance(&mut self, dt: f32);
    fn draw(&self, renderer: &mut dyn Renderer);
    fn bounds(&self) -> Bounds;
    /// When false, the artboard draws around its own origin instead of its frame
    fn set_frame_origin(&mut self, frame_origin: bool);
    fn text_run(&self, name: &str) -> Option<String>;
    /// Returns false when no run with that name exists
    fn set_text_run(&mut self, name: &str, text: &str) -> bool;
    fn dispose(&mut self);
}

/// A state machine instance bound to an artboard
pub trait StateMachine {
    fn name(&self) -> &str;
    fn advance(&mut self, dt: f32);
    fn number_input(&self, name: &str) -> Option<f32>;
    /// Returns false when no number input with that name exists
    fn set_number_input(&mut self, name: &str, value: f32) -> bool;
    fn dispose(&mut self);
}

/// Something that can instantiate named artboards (a loaded animation file)
pub trait AnimationSource {
    fn instantiate(&mut self, artboard: &str, state_machine: &str)
    -> Result<Animation, AssetError>;
}

/// Exclusively owned artboard + state machine pair
pub struct Animation {
    artboard: Box<dyn Artboard>,
    state_machine: Box<dyn StateMachine>,
    disposed: bool,
}

impl Animation {
    pub fn new(artboard: Box<dyn Artboard>, state_machine: Box<dyn StateMachine>) -> Self {
        Self {
            artboard,
            state_machine,
            disposed: false,
        }
    }

    pub fn set_frame_origin(&mut self, frame_origin: bool) {
        if !self.disposed {
            self.artboard.set_frame_origin(frame_origin);
        }
    }

    /// Advance state machine then artboard
    pub fn advance(&mut self, dt: f32) {
        if self.disposed {
            return;
        }
        self.state_machine.advance(dt);
        self.artboard.advance(dt);
    }

    pub fn draw(&self, renderer: &mut dyn Renderer) {
        if !self.disposed {
            self.artboard.draw(renderer);
        }
    }

    pub fn bounds(&self) -> Bounds {
        self.artboard.bounds()
    }

    pub fn has_number_input(&self, name: &str) -> bool {
        !self.disposed && self.state_machine.number_input(name).is_some()
    }

    pub fn number_input(&self, name: &str) -> Option<f32> {
        if self.disposed {
            return None;
        }
        self.state_machine.number_input(name)
    }

    pub fn set_number_input(&mut self, name: &str, value: f32) -> bool {
        !self.disposed && self.state_machine.set_number_input(name, value)
    }

    pub fn has_text_run(&self, name: &str) -> bool {
        !self.disposed && self.artboard.text_run(name).is_some()
    }

    pub fn text_run(&self, name: &str) -> Option<String> {
        if self.disposed {
            return None;
        }
        self.artboard.text_run(name)
    }

    pub fn set_text_run(&mut self, name: &str, text: &str) -> bool {
        !self.disposed && self.artboard.set_text_run(name, text)
    }

    /// Release the native handles. Later calls are no-ops.
    pub fn dispose(&mut self) {
        if self.disposed {
            log::warn!("Animation `{}` disposed twice", self.artboard.name());
            return;
        }
        self.state_machine.dispose();
        self.artboard.dispose();
        self.disposed = true;
    }
}

impl Drop for Animation {
    fn drop(&mut self) {
        if !self.disposed {
            log::debug!("Disposing `{}` on drop", self.artboard.name());
            self.state_machine.dispose();
            self.artboard.dispose();
            self.disposed = true;
        }
    }
}

impl fmt::Debug for Animation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Animation")
            .field("artboard", &self.artboard.name())
            .field("state_machine", &self.state_machine.name())
            .field("disposed", &self.disposed)
            .finish()
    }
}
