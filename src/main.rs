//! Meteor Shooter entry point
//!
//! Runs the game loop headlessly: a scripted pilot feeds key events, frames
//! are timestamped at the configured refresh rate, and every frame is drawn
//! into a command recorder.

mod native_game {
    use std::path::Path;
    use std::time::{SystemTime, UNIX_EPOCH};

    use meteor_shooter::platform::FrameClock;
    use meteor_shooter::renderer::{AssetError, CommandRecorder, HeadlessRuntime, Renderer};
    use meteor_shooter::settings::{SETTINGS_FILE, Settings};
    use meteor_shooter::sim::{World, draw, tick};

    /// Game instance holding all state
    struct Game {
        world: World,
        runtime: HeadlessRuntime,
        recorder: CommandRecorder,
        clock: FrameClock,
        show_fps: bool,
        last_fps_log: f64,
    }

    impl Game {
        fn new(settings: &Settings, seed: u64) -> Result<Self, AssetError> {
            let mut runtime = HeadlessRuntime::spaceshooter();
            let world = World::new(
                &mut runtime,
                settings.canvas_size(),
                settings.tuning.clone(),
                seed,
            )?;

            Ok(Self {
                world,
                runtime,
                recorder: CommandRecorder::new(),
                clock: FrameClock::new(),
                show_fps: settings.show_fps,
                last_fps_log: 0.0,
            })
        }

        /// Scripted pilot: always firing, sweeping, thrusting in bursts
        fn pilot(&mut self, frame: u32) {
            let world = &mut self.world;
            world.press(" ");

            if (frame / 90) % 2 == 0 {
                world.press("ArrowRight");
                world.release("ArrowLeft");
            } else {
                world.press("ArrowLeft");
                world.release("ArrowRight");
            }

            if frame % 240 < 30 {
                world.press("w");
            } else {
                world.release("w");
            }
        }

        /// Run one animation frame
        fn frame(&mut self, time_ms: f64) -> Result<(), AssetError> {
            let dt = self.clock.advance(time_ms);

            self.recorder.clear();
            tick(&mut self.world, &mut self.runtime, dt)?;
            draw(&self.world, &mut self.recorder);
            self.recorder.take();

            if self.show_fps && time_ms - self.last_fps_log >= 1000.0 {
                self.last_fps_log = time_ms;
                log::info!(
                    "fps {} | meteors {} | bullets {} | health {} | lives {}",
                    self.clock.fps(),
                    self.world.meteors.len(),
                    self.world.bullets.len(),
                    self.world.vitals.health,
                    self.world.vitals.lives
                );
            }
            Ok(())
        }
    }

    pub fn run() -> Result<(), AssetError> {
        let path = std::env::args().nth(1).unwrap_or_else(|| SETTINGS_FILE.to_string());
        let settings = Settings::load_from(&path);
        if !Path::new(&path).exists() {
            // Leave an editable copy of the defaults behind
            if let Err(e) = settings.save_to(&path) {
                log::warn!("Could not write {}: {}", path, e);
            }
        }

        let seed = settings.seed.unwrap_or_else(|| {
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_millis() as u64)
                .unwrap_or(0)
        });
        log::info!(
            "Canvas {}x{}, seed {}, {} frames",
            settings.canvas_width,
            settings.canvas_height,
            seed,
            settings.frames
        );

        let mut game = Game::new(&settings, seed)?;
        let frame_ms = 1000.0 / settings.frame_rate.max(1.0);

        for frame in 0..settings.frames {
            game.pilot(frame);
            // Timestamps start one frame in, like requestAnimationFrame
            game.frame((frame + 1) as f64 * frame_ms)?;
        }

        let stats = game.runtime.stats();
        log::info!(
            "Finished after {} frames: {} game overs, {} artboards created, {} live",
            game.world.frame,
            game.world.game_overs,
            stats.artboards_created,
            stats.live_artboards()
        );
        Ok(())
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("Meteor Shooter (headless) starting...");

    if let Err(e) = native_game::run() {
        log::error!("Failed to load assets: {}", e);
        std::process::exit(1);
    }
}
