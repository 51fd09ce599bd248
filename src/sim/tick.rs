//! Per-frame simulation tick and draw
//!
//! Core game loop: one `tick` followed by one `draw` per display refresh.

use super::state::World;
use crate::renderer::{AnimationSource, AssetError, Renderer};

/// Advance the world by `dt` seconds
pub fn tick(
    world: &mut World,
    source: &mut dyn AnimationSource,
    dt: f32,
) -> Result<(), AssetError> {
    world.frame += 1;

    // Player input may fire a bullet
    if let Some(bullet) = world.player.update(&world.keys, dt, &world.tuning, source)? {
        world.add_bullet(bullet);
    }

    world.meteor_spawn_timer.tick(dt);
    if world.meteor_spawn_timer.is_ready() {
        world.meteor_spawn_timer.reset();
        world.spawn_meteor(source)?;
    }

    // --- COLLISIONS ---
    // Pairwise, flags indexed like the entity vectors
    let mut meteors_hit = vec![false; world.meteors.len()];
    let mut bullets_hit = vec![false; world.bullets.len()];
    let player_collider = world.player.collider();

    for (mi, meteor) in world.meteors.iter().enumerate() {
        let meteor_collider = meteor.collider();

        if player_collider.intersects(&meteor_collider) {
            let life_lost = world.player.hit(&world.tuning);
            world.vitals.update_health(world.player.health);
            if life_lost {
                world.vitals.update_lives(world.player.lives);
                log::info!("Life lost, {} remaining", world.player.lives);
            }
            meteors_hit[mi] = true;
        }

        for (bi, bullet) in world.bullets.iter().enumerate() {
            if bullet.collider().intersects(&meteor_collider) {
                meteors_hit[mi] = true;
                bullets_hit[bi] = true;
            }
        }
    }

    // --- OFFSCREEN ---
    // Only entities past their lifetime are culled
    for (i, meteor) in world.meteors.iter().enumerate() {
        if world.is_offscreen(meteor.position) && meteor.can_be_removed_after_offscreen() {
            meteors_hit[i] = true;
        }
    }
    for (i, bullet) in world.bullets.iter().enumerate() {
        if world.is_offscreen(bullet.position) && bullet.can_be_removed_after_offscreen() {
            bullets_hit[i] = true;
        }
    }

    if world.player.lives == 0 {
        world.game_overs += 1;
        log::info!("Game over #{} at frame {}, resetting", world.game_overs, world.frame);
        world.reset();
        return Ok(());
    }

    let removed_bullets = remove_flagged(&mut world.bullets, &bullets_hit, |b| b.dispose());
    let removed_meteors = remove_flagged(&mut world.meteors, &meteors_hit, |m| m.dispose());
    if removed_bullets + removed_meteors > 0 {
        log::debug!(
            "Removed {} bullets, {} meteors",
            removed_bullets,
            removed_meteors
        );
    }

    for meteor in &mut world.meteors {
        meteor.update(dt);
    }
    for bullet in &mut world.bullets {
        bullet.update(dt);
    }
    world.vitals.update(dt);

    Ok(())
}

/// Render back-to-front: player, meteors, bullets, then the HUD
pub fn draw(world: &World, renderer: &mut dyn Renderer) {
    for entity in world.entities() {
        entity.draw(renderer);
    }
    world.vitals.draw(renderer, world.canvas_size);
}

/// Remove flagged items, keeping survivor order, then dispose each removed item
fn remove_flagged<T>(
    items: &mut Vec<T>,
    flags: &[bool],
    mut dispose: impl FnMut(&mut T),
) -> usize {
    if !flags.contains(&true) {
        return 0;
    }

    let mut kept = Vec::with_capacity(items.len());
    let mut removed = Vec::new();
    for (item, &flag) in items.drain(..).zip(flags) {
        if flag {
            removed.push(item);
        } else {
            kept.push(item);
        }
    }
    *items = kept;

    let count = removed.len();
    for mut item in removed {
        dispose(&mut item);
    }
    count
}
