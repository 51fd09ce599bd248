//! Headless runtime and renderer
//!
//! Stand-ins for the browser animation runtime and canvas so the game loop can
//! run natively: artboards are fixed-size boxes, and every renderer call is
//! recorded as a [`DrawCommand`].

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use super::runtime::{Animation, AnimationSource, Artboard, AssetError, StateMachine};
use super::{Alignment, Bounds, Fit, Renderer};
use crate::consts::*;

/// Description of one artboard in the headless "file"
#[derive(Debug, Clone, Default)]
pub struct ArtboardDef {
    /// Bounds when drawn around the artboard origin
    pub bounds: Bounds,
    pub state_machines: Vec<String>,
    pub number_inputs: Vec<(String, f32)>,
    pub text_runs: Vec<(String, String)>,
}

impl ArtboardDef {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            bounds: Bounds::centered(width, height),
            state_machines: vec![STATE_MACHINE.to_string()],
            ..Default::default()
        }
    }

    pub fn with_number_input(mut self, name: &str, value: f32) -> Self {
        self.number_inputs.push((name.to_string(), value));
        self
    }

    pub fn with_text_run(mut self, name: &str, text: &str) -> Self {
        self.text_runs.push((name.to_string(), text.to_string()));
        self
    }
}

/// Handle accounting, shared by the runtime and every handle it creates
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HandleStats {
    pub artboards_created: usize,
    pub artboards_disposed: usize,
    pub state_machines_created: usize,
    pub state_machines_disposed: usize,
    /// Dispose calls on an already released handle
    pub double_disposals: usize,
}

impl HandleStats {
    /// Artboards instantiated but not yet released
    pub fn live_artboards(&self) -> usize {
        self.artboards_created - self.artboards_disposed
    }

    pub fn live_state_machines(&self) -> usize {
        self.state_machines_created - self.state_machines_disposed
    }
}

type SharedStats = Rc<RefCell<HandleStats>>;
/// Seconds advanced, summed per artboard name
type SharedClock = Rc<RefCell<HashMap<String, f32>>>;

/// In-memory animation file
#[derive(Debug, Default)]
pub struct HeadlessRuntime {
    artboards: HashMap<String, ArtboardDef>,
    stats: SharedStats,
    advanced: SharedClock,
}

impl HeadlessRuntime {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_artboard(mut self, name: &str, def: ArtboardDef) -> Self {
        self.artboards.insert(name.to_string(), def);
        self
    }

    /// The four artboards the shooter expects
    pub fn spaceshooter() -> Self {
        Self::new()
            .with_artboard(HERO_ARTBOARD, ArtboardDef::new(64.0, 64.0))
            .with_artboard(BULLET_ARTBOARD, ArtboardDef::new(8.0, 16.0))
            .with_artboard(METEOR_ARTBOARD, ArtboardDef::new(48.0, 48.0))
            .with_artboard(
                VITALS_ARTBOARD,
                ArtboardDef::new(240.0, 60.0)
                    .with_number_input(HEALTH_INPUT, MAX_HEALTH as f32)
                    .with_number_input(LIVES_INPUT, STARTING_LIVES as f32)
                    .with_text_run(HEALTH_TEXT_RUN, "100%"),
            )
    }

    pub fn stats(&self) -> HandleStats {
        *self.stats.borrow()
    }

    /// Total seconds every instance of `artboard` has been advanced
    pub fn advanced_time(&self, artboard: &str) -> f32 {
        self.advanced.borrow().get(artboard).copied().unwrap_or(0.0)
    }
}

impl AnimationSource for HeadlessRuntime {
    fn instantiate(
        &mut self,
        artboard: &str,
        state_machine: &str,
    ) -> Result<Animation, AssetError> {
        let def = self
            .artboards
            .get(artboard)
            .ok_or_else(|| AssetError::MissingArtboard(artboard.to_string()))?;

        if !def.state_machines.iter().any(|sm| sm == state_machine) {
            return Err(AssetError::MissingStateMachine {
                artboard: artboard.to_string(),
                state_machine: state_machine.to_string(),
            });
        }

        {
            let mut stats = self.stats.borrow_mut();
            stats.artboards_created += 1;
            stats.state_machines_created += 1;
        }

        let board = HeadlessArtboard {
            name: artboard.to_string(),
            bounds: def.bounds,
            frame_origin: true,
            text_runs: def.text_runs.iter().cloned().collect(),
            disposed: false,
            stats: Rc::clone(&self.stats),
            advanced: Rc::clone(&self.advanced),
        };
        let machine = HeadlessStateMachine {
            name: state_machine.to_string(),
            inputs: def.number_inputs.iter().cloned().collect(),
            disposed: false,
            stats: Rc::clone(&self.stats),
        };

        Ok(Animation::new(Box::new(board), Box::new(machine)))
    }
}

struct HeadlessArtboard {
    name: String,
    bounds: Bounds,
    frame_origin: bool,
    text_runs: HashMap<String, String>,
    disposed: bool,
    stats: SharedStats,
    advanced: SharedClock,
}

impl Artboard for HeadlessArtboard {
    fn name(&self) -> &str {
        &self.name
    }

    fn advance(&mut self, dt: f32) {
        *self
            .advanced
            .borrow_mut()
            .entry(self.name.clone())
            .or_default() += dt;
    }

    fn draw(&self, renderer: &mut dyn Renderer) {
        renderer.fill_rect(self.bounds());
    }

    fn bounds(&self) -> Bounds {
        if self.frame_origin {
            // Frame origin puts the top-left corner at (0, 0)
            Bounds::new(0.0, 0.0, self.bounds.width(), self.bounds.height())
        } else {
            self.bounds
        }
    }

    fn set_frame_origin(&mut self, frame_origin: bool) {
        self.frame_origin = frame_origin;
    }

    fn text_run(&self, name: &str) -> Option<String> {
        self.text_runs.get(name).cloned()
    }

    fn set_text_run(&mut self, name: &str, text: &str) -> bool {
        match self.text_runs.get_mut(name) {
            Some(run) => {
                *run = text.to_string();
                true
            }
            None => false,
        }
    }

    fn dispose(&mut self) {
        let mut stats = self.stats.borrow_mut();
        if self.disposed {
            stats.double_disposals += 1;
        } else {
            self.disposed = true;
            stats.artboards_disposed += 1;
        }
    }
}

struct HeadlessStateMachine {
    name: String,
    inputs: HashMap<String, f32>,
    disposed: bool,
    stats: SharedStats,
}

impl StateMachine for HeadlessStateMachine {
    fn name(&self) -> &str {
        &self.name
    }

    fn advance(&mut self, _dt: f32) {}

    fn number_input(&self, name: &str) -> Option<f32> {
        self.inputs.get(name).copied()
    }

    fn set_number_input(&mut self, name: &str, value: f32) -> bool {
        match self.inputs.get_mut(name) {
            Some(input) => {
                *input = value;
                true
            }
            None => false,
        }
    }

    fn dispose(&mut self) {
        let mut stats = self.stats.borrow_mut();
        if self.disposed {
            stats.double_disposals += 1;
        } else {
            self.disposed = true;
            stats.state_machines_disposed += 1;
        }
    }
}

/// A recorded renderer call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Save,
    Restore,
    Translate(f32, f32),
    Rotate(f32),
    Align {
        fit: Fit,
        alignment: Alignment,
        frame: Bounds,
        content: Bounds,
    },
    Clear,
    FillRect(Bounds),
}

/// Renderer that records calls instead of drawing
#[derive(Debug, Default)]
pub struct CommandRecorder {
    commands: Vec<DrawCommand>,
    depth: usize,
}

impl CommandRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Current save/restore nesting
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Drain recorded commands (one frame's worth)
    pub fn take(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }

    pub fn fills(&self) -> impl Iterator<Item = &Bounds> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::FillRect(b) => Some(b),
            _ => None,
        })
    }
}

impl Renderer for CommandRecorder {
    fn save(&mut self) {
        self.depth += 1;
        self.commands.push(DrawCommand::Save);
    }

    fn restore(&mut self) {
        if self.depth == 0 {
            log::warn!("Renderer restore without matching save");
        } else {
            self.depth -= 1;
        }
        self.commands.push(DrawCommand::Restore);
    }

    fn translate(&mut self, x: f32, y: f32) {
        self.commands.push(DrawCommand::Translate(x, y));
    }

    fn rotate(&mut self, radians: f32) {
        self.commands.push(DrawCommand::Rotate(radians));
    }

    fn align(&mut self, fit: Fit, alignment: Alignment, frame: Bounds, content: Bounds) {
        self.commands.push(DrawCommand::Align {
            fit,
            alignment,
            frame,
            content,
        });
    }

    fn clear(&mut self) {
        self.commands.push(DrawCommand::Clear);
    }

    fn fill_rect(&mut self, rect: Bounds) {
        self.commands.push(DrawCommand::FillRect(rect));
    }
}
