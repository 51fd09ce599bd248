//! Meteor Shooter - a 2D arcade shooter game loop
//!
//! Core modules:
//! - `sim`: Per-frame simulation (entities, spawning, collisions, reset)
//! - `renderer`: Renderer and vector-animation runtime abstraction
//! - `platform`: Input key state and frame timing
//! - `settings`: JSON configuration for the driver
//! - `tuning`: Data-driven game balance

pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;
pub mod tuning;

pub use settings::Settings;
pub use tuning::Tuning;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Bullet travel speed (units/s)
    pub const BULLET_SPEED: f32 = 500.0;
    /// Bullet lifetime before it may be culled offscreen (ms)
    pub const BULLET_LIFE_MS: f32 = 2000.0;

    /// Meteor lifetime before it may be culled offscreen (ms)
    pub const METEOR_LIFE_MS: f32 = 10_000.0;
    pub const METEOR_MIN_SPEED: f32 = 50.0;
    pub const METEOR_MAX_SPEED: f32 = 150.0;
    /// Meteor spin range (rad/s)
    pub const METEOR_MIN_ROTATION_SPEED: f32 = 0.1;
    pub const METEOR_MAX_ROTATION_SPEED: f32 = 1.0;
    /// Interval between meteor spawns (ms)
    pub const METEOR_SPAWN_MS: f32 = 1000.0;

    /// Player turn rate (rad/s)
    pub const PLAYER_ROTATION_SPEED: f32 = 2.0;
    /// Player thrust speed (units/s)
    pub const PLAYER_MOVE_SPEED: f32 = 200.0;
    /// Distance ahead of the ship where bullets appear
    pub const BULLET_SPAWN_OFFSET: f32 = 80.0;
    /// Minimum time between held-trigger shots (ms)
    pub const SHOOT_COOLDOWN_MS: f32 = 300.0;

    pub const HIT_DAMAGE: i32 = 10;
    pub const MAX_HEALTH: i32 = 100;
    pub const STARTING_LIVES: u32 = 3;

    /// HUD inset from the top-left corner of the canvas
    pub const VITALS_OFFSET: f32 = 30.0;

    /// Artboard names inside the animation file
    pub const HERO_ARTBOARD: &str = "hero";
    pub const BULLET_ARTBOARD: &str = "bullet";
    pub const METEOR_ARTBOARD: &str = "meteor";
    pub const VITALS_ARTBOARD: &str = "vitals";
    /// Every artboard drives the same state machine name
    pub const STATE_MACHINE: &str = "State Machine 1";

    /// Vitals bindings
    pub const HEALTH_INPUT: &str = "health";
    pub const LIVES_INPUT: &str = "lives";
    pub const HEALTH_TEXT_RUN: &str = "healthTextRun";
}

/// Facing direction for a rotation (radians).
///
/// Rotation 0 points up the screen; screen Y grows downward.
#[inline]
pub fn forward(rotation: f32) -> Vec2 {
    Vec2::new(rotation.sin(), -rotation.cos()).normalize_or_zero()
}

/// Map a unit sample in [0, 1) onto [min, max)
#[inline]
pub fn lerp_range(min: f32, max: f32, t: f32) -> f32 {
    min + t * (max - min)
}
