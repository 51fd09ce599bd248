//! Data-driven game balance
//!
//! Every gameplay number the simulation reads lives here so a settings file
//! can override it without touching code.

use serde::{Deserialize, Serialize};

use crate::consts::*;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Bullets ===
    pub bullet_speed: f32,
    pub bullet_life_ms: f32,

    // === Meteors ===
    pub meteor_life_ms: f32,
    pub meteor_min_speed: f32,
    pub meteor_max_speed: f32,
    pub meteor_min_rotation_speed: f32,
    pub meteor_max_rotation_speed: f32,
    pub meteor_spawn_ms: f32,

    // === Player ===
    pub player_rotation_speed: f32,
    pub player_move_speed: f32,
    pub bullet_spawn_offset: f32,
    pub shoot_cooldown_ms: f32,
    pub hit_damage: i32,
    pub max_health: i32,
    pub starting_lives: u32,

    // === HUD ===
    pub vitals_offset: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            bullet_speed: BULLET_SPEED,
            bullet_life_ms: BULLET_LIFE_MS,

            meteor_life_ms: METEOR_LIFE_MS,
            meteor_min_speed: METEOR_MIN_SPEED,
            meteor_max_speed: METEOR_MAX_SPEED,
            meteor_min_rotation_speed: METEOR_MIN_ROTATION_SPEED,
            meteor_max_rotation_speed: METEOR_MAX_ROTATION_SPEED,
            meteor_spawn_ms: METEOR_SPAWN_MS,

            player_rotation_speed: PLAYER_ROTATION_SPEED,
            player_move_speed: PLAYER_MOVE_SPEED,
            bullet_spawn_offset: BULLET_SPAWN_OFFSET,
            shoot_cooldown_ms: SHOOT_COOLDOWN_MS,
            hit_damage: HIT_DAMAGE,
            max_health: MAX_HEALTH,
            starting_lives: STARTING_LIVES,

            vitals_offset: VITALS_OFFSET,
        }
    }
}
