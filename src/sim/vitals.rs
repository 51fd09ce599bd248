//! HUD vitals (health and lives)
//!
//! Mirrors the player's counters into the vitals artboard: a numeric state
//! machine input drives the health bar and a text run shows the percentage.

use glam::Vec2;

use crate::consts::*;
use crate::renderer::{Alignment, Animation, AnimationSource, AssetError, Bounds, Fit, Renderer};
use crate::tuning::Tuning;

#[derive(Debug)]
pub struct Vitals {
    pub health: i32,
    pub lives: u32,
    /// Upper bound for `health`, shared with the player
    pub max_health: i32,
    /// Top-left inset of the HUD on the canvas
    pub offset: f32,
    animation: Animation,
    health_input: bool,
    lives_input: bool,
    health_text: bool,
}

impl Vitals {
    /// Starts full: `tuning.max_health` and `tuning.starting_lives`
    pub fn new(source: &mut dyn AnimationSource, tuning: &Tuning) -> Result<Self, AssetError> {
        let mut animation = source.instantiate(VITALS_ARTBOARD, STATE_MACHINE)?;
        animation.set_frame_origin(false);

        // Bindings are optional; a file without them just shows a static HUD
        let health_input = animation.has_number_input(HEALTH_INPUT);
        let lives_input = animation.has_number_input(LIVES_INPUT);
        let health_text = animation.has_text_run(HEALTH_TEXT_RUN);
        if !health_input {
            log::warn!("Vitals artboard has no `{}` input", HEALTH_INPUT);
        }

        Ok(Self {
            health: tuning.max_health,
            lives: tuning.starting_lives,
            max_health: tuning.max_health,
            offset: tuning.vitals_offset,
            animation,
            health_input,
            lives_input,
            health_text,
        })
    }

    /// Clamp `health` to [0, max_health] and push it to the display
    pub fn update_health(&mut self, health: i32) {
        let health = health.clamp(0, self.max_health.max(0));
        self.health = health;

        if self.health_input {
            self.animation.set_number_input(HEALTH_INPUT, health as f32);
        }
        if self.health_text {
            self.animation
                .set_text_run(HEALTH_TEXT_RUN, &format!("{}%", health));
        }
    }

    pub fn update_lives(&mut self, lives: u32) {
        self.lives = lives;

        if self.lives_input {
            self.animation.set_number_input(LIVES_INPUT, lives as f32);
        }
    }

    pub fn update(&mut self, dt: f32) {
        self.animation.advance(dt);
    }

    /// Draw anchored to the canvas corner, independent of world position
    pub fn draw(&self, renderer: &mut dyn Renderer, canvas_size: Vec2) {
        renderer.save();
        renderer.align(
            Fit::None,
            Alignment::TopLeft,
            Bounds::new(self.offset, self.offset, canvas_size.x, canvas_size.y),
            self.animation.bounds(),
        );
        self.animation.draw(renderer);
        renderer.restore();
    }

    pub fn animation(&self) -> &Animation {
        &self.animation
    }
}
