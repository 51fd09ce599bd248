//! Game state and entity types
//!
//! Entities are plain data plus inherent methods. Anything they need from the
//! outside (keys, tuning, the animation source) is passed in explicitly.

use std::f32::consts::TAU;

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::rect::Rect;
use super::timer::Timer;
use super::vitals::Vitals;
use crate::consts::*;
use crate::platform::input::{LEFT_KEYS, PressedKeys, RIGHT_KEYS, SHOOT_KEYS, UP_KEYS};
use crate::renderer::{Animation, AnimationSource, AssetError, Renderer};
use crate::tuning::Tuning;
use crate::{forward, lerp_range};

/// Instantiate an artboard drawn around its own origin
fn instantiate(source: &mut dyn AnimationSource, artboard: &str) -> Result<Animation, AssetError> {
    let mut animation = source.instantiate(artboard, STATE_MACHINE)?;
    animation.set_frame_origin(false);
    Ok(animation)
}

/// Collision box at `position` sized by the far corner of the animation bounds.
///
/// Uses `max_x`/`max_y` as width/height rather than the bounds' own extent,
/// which keeps hitboxes identical to the shipped game.
fn collider_at(position: Vec2, animation: &Animation) -> Rect {
    let bounds = animation.bounds();
    Rect::new(position.x, position.y, bounds.max_x, bounds.max_y)
}

/// Draw an animation translated and rotated into place
fn draw_at(renderer: &mut dyn Renderer, position: Vec2, rotation: f32, animation: &Animation) {
    renderer.save();
    renderer.translate(position.x, position.y);
    renderer.rotate(rotation);
    animation.draw(renderer);
    renderer.restore();
}

/// A bullet fired by the player
#[derive(Debug)]
pub struct Bullet {
    pub position: Vec2,
    /// Heading (radians, 0 = up)
    pub rotation: f32,
    pub speed: f32,
    pub life: Timer,
    animation: Animation,
}

impl Bullet {
    pub fn spawn(
        source: &mut dyn AnimationSource,
        position: Vec2,
        rotation: f32,
        tuning: &Tuning,
    ) -> Result<Self, AssetError> {
        Ok(Self {
            position,
            rotation,
            speed: tuning.bullet_speed,
            life: Timer::new(tuning.bullet_life_ms),
            animation: instantiate(source, BULLET_ARTBOARD)?,
        })
    }

    pub fn update(&mut self, dt: f32) {
        self.life.tick(dt);
        self.position += forward(self.rotation) * self.speed * dt;
        self.animation.advance(dt);
    }

    /// Lifetime has elapsed, so leaving the canvas is final
    pub fn can_be_removed_after_offscreen(&self) -> bool {
        self.life.is_ready()
    }

    pub fn collider(&self) -> Rect {
        collider_at(self.position, &self.animation)
    }

    pub fn animation(&self) -> &Animation {
        &self.animation
    }

    pub fn dispose(&mut self) {
        self.animation.dispose();
    }
}

/// A drifting, spinning meteor
#[derive(Debug)]
pub struct Meteor {
    pub position: Vec2,
    /// Constant velocity (units/s)
    pub movement: Vec2,
    pub rotation: f32,
    /// Spin (rad/s)
    pub rotation_speed: f32,
    pub life: Timer,
    animation: Animation,
}

impl Meteor {
    /// Spawn on a circle of radius `canvas_size.x / 2` around `target`, heading
    /// straight at it. The aim is fixed at spawn time.
    pub fn spawn(
        source: &mut dyn AnimationSource,
        target: Vec2,
        canvas_size: Vec2,
        tuning: &Tuning,
        rng: &mut Pcg32,
    ) -> Result<Self, AssetError> {
        let radius = canvas_size.x / 2.0;
        let angle = rng.random::<f32>() * TAU;
        let position = target + Vec2::new(angle.cos(), angle.sin()) * radius;

        let speed = lerp_range(tuning.meteor_min_speed, tuning.meteor_max_speed, rng.random());
        let direction = (target - position).normalize_or_zero();

        let rotation_speed = lerp_range(
            tuning.meteor_min_rotation_speed,
            tuning.meteor_max_rotation_speed,
            rng.random(),
        );

        Ok(Self {
            position,
            movement: direction * speed,
            rotation: 0.0,
            rotation_speed,
            life: Timer::new(tuning.meteor_life_ms),
            animation: instantiate(source, METEOR_ARTBOARD)?,
        })
    }

    pub fn update(&mut self, dt: f32) {
        self.life.tick(dt);
        self.position += self.movement * dt;
        self.rotation += self.rotation_speed * dt;
        self.animation.advance(dt);
    }

    pub fn can_be_removed_after_offscreen(&self) -> bool {
        self.life.is_ready()
    }

    pub fn collider(&self) -> Rect {
        collider_at(self.position, &self.animation)
    }

    pub fn animation(&self) -> &Animation {
        &self.animation
    }

    pub fn dispose(&mut self) {
        self.animation.dispose();
    }
}

/// The player's ship
#[derive(Debug)]
pub struct Player {
    pub position: Vec2,
    /// Heading (radians, 0 = up)
    pub rotation: f32,
    /// Current thrust direction, zero when not thrusting
    pub direction: Vec2,
    pub health: i32,
    pub lives: u32,
    pub shoot_cooldown: Timer,
    animation: Animation,
}

impl Player {
    pub fn new(
        source: &mut dyn AnimationSource,
        position: Vec2,
        tuning: &Tuning,
    ) -> Result<Self, AssetError> {
        Ok(Self {
            position,
            rotation: 0.0,
            direction: Vec2::ZERO,
            health: tuning.max_health,
            lives: tuning.starting_lives,
            shoot_cooldown: Timer::new(tuning.shoot_cooldown_ms),
            animation: instantiate(source, HERO_ARTBOARD)?,
        })
    }

    /// Apply held keys for one frame. Returns the bullet fired, if any.
    pub fn update(
        &mut self,
        keys: &PressedKeys,
        dt: f32,
        tuning: &Tuning,
        source: &mut dyn AnimationSource,
    ) -> Result<Option<Bullet>, AssetError> {
        self.shoot_cooldown.tick(dt);

        let mut fired = None;
        if keys.any_pressed(SHOOT_KEYS) && self.shoot_cooldown.is_ready() {
            self.shoot_cooldown.reset();
            fired = Some(self.shoot(source, tuning)?);
        }

        if keys.any_pressed(LEFT_KEYS) {
            self.rotation -= tuning.player_rotation_speed * dt;
        }
        if keys.any_pressed(RIGHT_KEYS) {
            self.rotation += tuning.player_rotation_speed * dt;
        }

        if keys.any_pressed(UP_KEYS) {
            self.direction = forward(self.rotation);
            self.position += self.direction * tuning.player_move_speed * dt;
        } else {
            self.direction = Vec2::ZERO;
        }

        self.animation.advance(dt);
        Ok(fired)
    }

    /// Spawn a bullet just ahead of the nose
    pub fn shoot(
        &self,
        source: &mut dyn AnimationSource,
        tuning: &Tuning,
    ) -> Result<Bullet, AssetError> {
        let spawn = self.position + forward(self.rotation) * tuning.bullet_spawn_offset;
        Bullet::spawn(source, spawn, self.rotation, tuning)
    }

    /// Take one hit. Returns true when the hit cost a life.
    pub fn hit(&mut self, tuning: &Tuning) -> bool {
        self.health -= tuning.hit_damage;

        if self.health <= 0 {
            self.lives = self.lives.saturating_sub(1);
            self.health = tuning.max_health;
            return true;
        }
        false
    }

    pub fn reset(&mut self, canvas_size: Vec2, tuning: &Tuning) {
        self.health = tuning.max_health;
        self.lives = tuning.starting_lives;
        self.position = canvas_size / 2.0;
        self.rotation = 0.0;
        self.direction = Vec2::ZERO;
    }

    pub fn collider(&self) -> Rect {
        collider_at(self.position, &self.animation)
    }

    pub fn animation(&self) -> &Animation {
        &self.animation
    }
}

/// Borrowed view over any drawable entity
#[derive(Debug, Clone, Copy)]
pub enum EntityRef<'a> {
    Player(&'a Player),
    Meteor(&'a Meteor),
    Bullet(&'a Bullet),
}

impl<'a> EntityRef<'a> {
    pub fn position(&self) -> Vec2 {
        match *self {
            EntityRef::Player(p) => p.position,
            EntityRef::Meteor(m) => m.position,
            EntityRef::Bullet(b) => b.position,
        }
    }

    pub fn rotation(&self) -> f32 {
        match *self {
            EntityRef::Player(p) => p.rotation,
            EntityRef::Meteor(m) => m.rotation,
            EntityRef::Bullet(b) => b.rotation,
        }
    }

    pub fn animation(&self) -> &'a Animation {
        match *self {
            EntityRef::Player(p) => &p.animation,
            EntityRef::Meteor(m) => &m.animation,
            EntityRef::Bullet(b) => &b.animation,
        }
    }

    pub fn draw(&self, renderer: &mut dyn Renderer) {
        draw_at(renderer, self.position(), self.rotation(), self.animation());
    }
}

/// Complete state of one game session
#[derive(Debug)]
pub struct World {
    /// Canvas dimensions (device pixels)
    pub canvas_size: Vec2,
    pub player: Player,
    pub meteors: Vec<Meteor>,
    pub bullets: Vec<Bullet>,
    pub vitals: Vitals,
    pub meteor_spawn_timer: Timer,
    pub keys: PressedKeys,
    pub tuning: Tuning,
    /// Frames simulated
    pub frame: u64,
    /// Times the player ran out of lives
    pub game_overs: u32,
    rng: Pcg32,
}

impl World {
    /// Create a session with the player centred on the canvas
    pub fn new(
        source: &mut dyn AnimationSource,
        canvas_size: Vec2,
        tuning: Tuning,
        seed: u64,
    ) -> Result<Self, AssetError> {
        let player = Player::new(source, canvas_size / 2.0, &tuning)?;
        let vitals = Vitals::new(source, &tuning)?;

        Ok(Self {
            canvas_size,
            player,
            meteors: Vec::new(),
            bullets: Vec::new(),
            vitals,
            meteor_spawn_timer: Timer::new(tuning.meteor_spawn_ms),
            keys: PressedKeys::new(),
            tuning,
            frame: 0,
            game_overs: 0,
            rng: Pcg32::seed_from_u64(seed),
        })
    }

    pub fn press(&mut self, key: &str) {
        self.keys.press(key);
    }

    pub fn release(&mut self, key: &str) {
        self.keys.release(key);
    }

    pub fn is_key_pressed(&self, key: &str) -> bool {
        self.keys.is_pressed(key)
    }

    pub fn add_bullet(&mut self, bullet: Bullet) {
        log::debug!("Bullet fired at ({:.0}, {:.0})", bullet.position.x, bullet.position.y);
        self.bullets.push(bullet);
    }

    /// Fire immediately, ignoring the held-trigger cooldown (pointer click)
    pub fn shoot(&mut self, source: &mut dyn AnimationSource) -> Result<(), AssetError> {
        let bullet = self.player.shoot(source, &self.tuning)?;
        self.add_bullet(bullet);
        Ok(())
    }

    /// Spawn one meteor aimed at the player's current position
    pub fn spawn_meteor(&mut self, source: &mut dyn AnimationSource) -> Result<(), AssetError> {
        let meteor = Meteor::spawn(
            source,
            self.player.position,
            self.canvas_size,
            &self.tuning,
            &mut self.rng,
        )?;
        log::debug!(
            "Meteor spawned at ({:.0}, {:.0}), speed {:.0}",
            meteor.position.x,
            meteor.position.y,
            meteor.movement.length()
        );
        self.meteors.push(meteor);
        Ok(())
    }

    pub fn resize(&mut self, canvas_size: Vec2) {
        self.canvas_size = canvas_size;
    }

    /// True if `position` lies outside the canvas on either axis
    pub fn is_offscreen(&self, position: Vec2) -> bool {
        position.x < 0.0
            || position.y < 0.0
            || position.x > self.canvas_size.x
            || position.y > self.canvas_size.y
    }

    /// Dispose every meteor and bullet and restore player and HUD
    pub fn reset(&mut self) {
        for mut meteor in self.meteors.drain(..) {
            meteor.dispose();
        }
        for mut bullet in self.bullets.drain(..) {
            bullet.dispose();
        }

        self.player.reset(self.canvas_size, &self.tuning);
        self.vitals.update_health(self.tuning.max_health);
        self.vitals.update_lives(self.tuning.starting_lives);
    }

    /// Entities in draw order: player, meteors, bullets
    pub fn entities(&self) -> impl Iterator<Item = EntityRef<'_>> {
        std::iter::once(EntityRef::Player(&self.player))
            .chain(self.meteors.iter().map(EntityRef::Meteor))
            .chain(self.bullets.iter().map(EntityRef::Bullet))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::HeadlessRuntime;

    fn world(runtime: &mut HeadlessRuntime) -> World {
        World::new(runtime, Vec2::new(800.0, 600.0), Tuning::default(), 7).unwrap()
    }

    #[test]
    fn test_bullet_moves_up_at_rotation_zero() {
        let mut runtime = HeadlessRuntime::spaceshooter();
        let mut bullet =
            Bullet::spawn(&mut runtime, Vec2::new(100.0, 100.0), 0.0, &Tuning::default()).unwrap();

        bullet.update(0.1);

        assert!((bullet.position.y - 50.0).abs() < 1e-3);
        assert!((bullet.position.x - 100.0).abs() < 1e-3);
    }

    #[test]
    fn test_bullet_lifetime() {
        let mut runtime = HeadlessRuntime::spaceshooter();
        let mut bullet =
            Bullet::spawn(&mut runtime, Vec2::ZERO, 1.0, &Tuning::default()).unwrap();

        bullet.update(1.9);
        assert!(!bullet.can_be_removed_after_offscreen());
        bullet.update(0.2);
        assert!(bullet.can_be_removed_after_offscreen());
    }

    #[test]
    fn test_collider_uses_bounds_far_corner() {
        let mut runtime = HeadlessRuntime::spaceshooter();
        let bullet =
            Bullet::spawn(&mut runtime, Vec2::new(10.0, 20.0), 0.0, &Tuning::default()).unwrap();

        // Bullet artboard is 8x16 around its origin: far corner (4, 8)
        assert_eq!(bullet.collider(), Rect::new(10.0, 20.0, 4.0, 8.0));
    }

    #[test]
    fn test_meteor_spawns_on_circle_aimed_at_target() {
        let mut runtime = HeadlessRuntime::spaceshooter();
        let mut rng = Pcg32::seed_from_u64(3);
        let tuning = Tuning::default();

        for _ in 0..50 {
            let meteor = Meteor::spawn(
                &mut runtime,
                Vec2::ZERO,
                Vec2::new(200.0, 200.0),
                &tuning,
                &mut rng,
            )
            .unwrap();

            assert!((meteor.position.length() - 100.0).abs() < 1e-3);

            let speed = meteor.movement.length();
            assert!((50.0..=150.0).contains(&speed), "speed {speed}");

            let heading = meteor.movement.normalize();
            let to_target = (-meteor.position).normalize();
            assert!(heading.dot(to_target) > 0.999);

            assert!((0.1..=1.0).contains(&meteor.rotation_speed));
            assert_eq!(meteor.rotation, 0.0);
        }
    }

    #[test]
    fn test_meteor_keeps_initial_aim() {
        let mut runtime = HeadlessRuntime::spaceshooter();
        let mut rng = Pcg32::seed_from_u64(11);
        let mut meteor = Meteor::spawn(
            &mut runtime,
            Vec2::new(400.0, 300.0),
            Vec2::new(800.0, 600.0),
            &Tuning::default(),
            &mut rng,
        )
        .unwrap();

        let movement = meteor.movement;
        let start = meteor.position;
        meteor.update(0.5);

        assert_eq!(meteor.movement, movement);
        assert!((meteor.position - (start + movement * 0.5)).length() < 1e-3);
        assert!((meteor.rotation - meteor.rotation_speed * 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_player_ten_hits_cost_one_life() {
        let mut runtime = HeadlessRuntime::spaceshooter();
        let tuning = Tuning::default();
        let mut player = Player::new(&mut runtime, Vec2::ZERO, &tuning).unwrap();

        for i in 1..10 {
            assert!(!player.hit(&tuning));
            assert_eq!(player.health, 100 - 10 * i);
        }
        assert!(player.hit(&tuning));
        assert_eq!(player.lives, 2);
        assert_eq!(player.health, 100);
    }

    #[test]
    fn test_player_lives_never_underflow() {
        let mut runtime = HeadlessRuntime::spaceshooter();
        let tuning = Tuning::default();
        let mut player = Player::new(&mut runtime, Vec2::ZERO, &tuning).unwrap();
        player.lives = 0;
        player.health = 10;

        player.hit(&tuning);
        assert_eq!(player.lives, 0);
    }

    #[test]
    fn test_player_rotation_and_thrust() {
        let mut runtime = HeadlessRuntime::spaceshooter();
        let tuning = Tuning::default();
        let mut player = Player::new(&mut runtime, Vec2::new(400.0, 300.0), &tuning).unwrap();
        let mut keys = PressedKeys::new();

        keys.press("d");
        player.update(&keys, 0.5, &tuning, &mut runtime).unwrap();
        assert!((player.rotation - 1.0).abs() < 1e-6);
        assert_eq!(player.direction, Vec2::ZERO);

        keys.release("d");
        keys.press("ArrowLeft");
        player.update(&keys, 0.5, &tuning, &mut runtime).unwrap();
        assert!(player.rotation.abs() < 1e-6);

        keys.release("ArrowLeft");
        keys.press("w");
        player.update(&keys, 0.5, &tuning, &mut runtime).unwrap();
        assert!((player.position.y - 200.0).abs() < 1e-3);
        assert!((player.direction.y + 1.0).abs() < 1e-6);

        keys.release("w");
        player.update(&keys, 0.5, &tuning, &mut runtime).unwrap();
        assert_eq!(player.direction, Vec2::ZERO);
        assert!((player.position.y - 200.0).abs() < 1e-3);
    }

    #[test]
    fn test_player_shoot_respects_cooldown() {
        let mut runtime = HeadlessRuntime::spaceshooter();
        let tuning = Tuning::default();
        let mut player = Player::new(&mut runtime, Vec2::new(400.0, 300.0), &tuning).unwrap();
        let mut keys = PressedKeys::new();
        keys.press(" ");

        // Cooldown starts empty
        assert!(player.update(&keys, 0.1, &tuning, &mut runtime).unwrap().is_none());
        assert!(player.update(&keys, 0.1, &tuning, &mut runtime).unwrap().is_none());

        let bullet = player.update(&keys, 0.15, &tuning, &mut runtime).unwrap();
        let bullet = bullet.expect("cooldown elapsed");
        assert!((bullet.position - Vec2::new(400.0, 220.0)).length() < 1e-3);
        assert_eq!(bullet.rotation, 0.0);

        assert!(player.update(&keys, 0.1, &tuning, &mut runtime).unwrap().is_none());
    }

    #[test]
    fn test_player_reset() {
        let mut runtime = HeadlessRuntime::spaceshooter();
        let tuning = Tuning::default();
        let mut player = Player::new(&mut runtime, Vec2::new(5.0, 5.0), &tuning).unwrap();
        player.rotation = 2.0;
        player.health = 30;
        player.lives = 1;

        player.reset(Vec2::new(800.0, 600.0), &tuning);

        assert_eq!(player.position, Vec2::new(400.0, 300.0));
        assert_eq!(player.rotation, 0.0);
        assert_eq!(player.health, 100);
        assert_eq!(player.lives, 3);
    }

    #[test]
    fn test_world_starts_centred() {
        let mut runtime = HeadlessRuntime::spaceshooter();
        let world = world(&mut runtime);
        assert_eq!(world.player.position, Vec2::new(400.0, 300.0));
        assert!(world.meteors.is_empty());
        assert!(world.bullets.is_empty());
        // Player + vitals
        assert_eq!(runtime.stats().live_artboards(), 2);
    }

    #[test]
    fn test_world_missing_asset_fails_fast() {
        let mut runtime = HeadlessRuntime::new();
        let err = World::new(&mut runtime, Vec2::new(800.0, 600.0), Tuning::default(), 1)
            .unwrap_err();
        assert_eq!(err, AssetError::MissingArtboard(HERO_ARTBOARD.to_string()));
    }

    #[test]
    fn test_world_shoot_bypasses_cooldown() {
        let mut runtime = HeadlessRuntime::spaceshooter();
        let mut world = world(&mut runtime);
        world.shoot(&mut runtime).unwrap();
        world.shoot(&mut runtime).unwrap();
        assert_eq!(world.bullets.len(), 2);
    }

    #[test]
    fn test_world_key_state() {
        let mut runtime = HeadlessRuntime::spaceshooter();
        let mut world = world(&mut runtime);
        world.press("ArrowUp");
        assert!(world.is_key_pressed("ArrowUp"));
        world.release("ArrowUp");
        assert!(!world.is_key_pressed("ArrowUp"));
    }

    #[test]
    fn test_entities_draw_order() {
        let mut runtime = HeadlessRuntime::spaceshooter();
        let mut world = world(&mut runtime);
        world.spawn_meteor(&mut runtime).unwrap();
        world.shoot(&mut runtime).unwrap();
        world.spawn_meteor(&mut runtime).unwrap();

        let kinds: Vec<&str> = world
            .entities()
            .map(|e| match e {
                EntityRef::Player(_) => "player",
                EntityRef::Meteor(_) => "meteor",
                EntityRef::Bullet(_) => "bullet",
            })
            .collect();
        assert_eq!(kinds, ["player", "meteor", "meteor", "bullet"]);
    }

    #[test]
    fn test_reset_is_idempotent() {
        let mut runtime = HeadlessRuntime::spaceshooter();
        let mut world = world(&mut runtime);
        world.spawn_meteor(&mut runtime).unwrap();
        world.shoot(&mut runtime).unwrap();
        world.player.position = Vec2::new(10.0, 10.0);
        world.player.health = 40;
        world.vitals.update_health(40);

        world.reset();
        let after_once = (
            world.player.position,
            world.player.health,
            world.player.lives,
            world.vitals.health,
            world.vitals.lives,
        );
        world.reset();
        let after_twice = (
            world.player.position,
            world.player.health,
            world.player.lives,
            world.vitals.health,
            world.vitals.lives,
        );

        assert_eq!(after_once, after_twice);
        assert_eq!(after_once, (Vec2::new(400.0, 300.0), 100, 3, 100, 3));
        assert!(world.meteors.is_empty() && world.bullets.is_empty());

        let stats = runtime.stats();
        assert_eq!(stats.live_artboards(), 2);
        assert_eq!(stats.double_disposals, 0);
    }

    #[test]
    fn test_reset_keeps_spawn_timer_running() {
        let mut runtime = HeadlessRuntime::spaceshooter();
        let mut world = world(&mut runtime);
        world.meteor_spawn_timer.tick(0.5);

        world.reset();
        assert_eq!(world.meteor_spawn_timer.elapsed(), 500.0);
    }

    #[test]
    fn test_reset_restores_tuned_health_cap() {
        let mut runtime = HeadlessRuntime::spaceshooter();
        let tuning = Tuning {
            max_health: 150,
            ..Tuning::default()
        };
        let mut world = World::new(&mut runtime, Vec2::new(800.0, 600.0), tuning, 7).unwrap();
        assert_eq!(world.vitals.health, 150);

        world.player.health = 20;
        world.vitals.update_health(20);
        world.reset();
        assert_eq!(world.player.health, 150);
        assert_eq!(world.vitals.health, world.player.health);
    }

    #[test]
    fn test_resize_moves_offscreen_edge() {
        let mut runtime = HeadlessRuntime::spaceshooter();
        let mut world = world(&mut runtime);
        let point = Vec2::new(1000.0, 300.0);
        assert!(world.is_offscreen(point));

        world.resize(Vec2::new(1280.0, 720.0));
        assert_eq!(world.canvas_size, Vec2::new(1280.0, 720.0));
        assert!(!world.is_offscreen(point));
    }

    #[test]
    fn test_offscreen_bounds() {
        let mut runtime = HeadlessRuntime::spaceshooter();
        let world = world(&mut runtime);
        assert!(!world.is_offscreen(Vec2::new(0.0, 0.0)));
        assert!(!world.is_offscreen(Vec2::new(800.0, 600.0)));
        assert!(world.is_offscreen(Vec2::new(-1.0, 300.0)));
        assert!(world.is_offscreen(Vec2::new(400.0, 601.0)));
    }

    #[test]
    fn test_drop_releases_everything() {
        let mut runtime = HeadlessRuntime::spaceshooter();
        let mut world = world(&mut runtime);
        world.spawn_meteor(&mut runtime).unwrap();
        world.shoot(&mut runtime).unwrap();
        drop(world);

        let stats = runtime.stats();
        assert_eq!(stats.artboards_created, 4);
        assert_eq!(stats.live_artboards(), 0);
        assert_eq!(stats.live_state_machines(), 0);
        assert_eq!(stats.double_disposals, 0);
    }
}
