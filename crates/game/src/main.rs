//! Skyraid - headless run of the flight game with a scripted pilot.
//!
//! Drives the game loop at a fixed synthetic frame rate. UI and scene output
//! go to the log; music plays through the default audio device when one is
//! available.

use anyhow::Result;
use audio::{AudioSystem, MusicPlayer, SilentPlayer};
use game::demo::DemoPilot;
use game::{
    CameraMode, Collaborators, Game, GameConfig, GameError, GamePhase, SceneFrame, SceneSink, Screen,
    SpeedGauge, SpeedInfo, UiSink,
};
use input::InputState;

/// UI stand-in that reports every change through the log.
struct ConsoleUi;

impl UiSink for ConsoleUi {
    fn update_speed(&mut self, speed: SpeedInfo) {
        let gauge = SpeedGauge::from_speed(speed);
        log::debug!(
            "Speed: {} [{:.0}% {}]",
            SpeedGauge::label(speed),
            gauge.percentage,
            gauge.band.color()
        );
    }

    fn update_camera_mode(&mut self, mode: CameraMode) {
        log::info!("Camera Mode: {}", mode);
    }

    fn update_mute_status(&mut self, muted: bool) {
        log::info!("Sound: {}", if muted { "Off" } else { "On" });
    }

    fn show_screen(&mut self, screen: Screen) -> Result<(), GameError> {
        let title = match screen {
            Screen::Start => "3D Plane Game - press start",
            Screen::Playing => "",
            Screen::Victory => "Victory! Mission complete.",
            Screen::Lose => "Game Over - your plane has crashed.",
        };
        if !title.is_empty() {
            log::info!("{}", title);
        }
        Ok(())
    }
}

/// Scene stand-in: traces the plane every `every` frames.
struct ConsoleScene {
    frame: u64,
    every: u64,
}

impl SceneSink for ConsoleScene {
    fn present(&mut self, frame: &SceneFrame) {
        if self.frame % self.every == 0 {
            let p = frame.plane.position;
            log::debug!(
                "frame {:>6}: plane ({:7.1}, {:6.1}, {:7.1}), {} instances",
                self.frame,
                p.x,
                p.y,
                p.z,
                frame.instances().len()
            );
        }
        self.frame += 1;
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    println!("╔══════════════════════════════════════════════╗");
    println!("║                   SKYRAID                    ║");
    println!("╠══════════════════════════════════════════════╣");
    println!("║  ↑/↓        - Pitch down/up                  ║");
    println!("║  ←/→        - Roll left/right                ║");
    println!("║  PgUp/PgDn  - Increase/decrease speed        ║");
    println!("║  C          - Toggle camera mode             ║");
    println!("║  M          - Toggle music                   ║");
    println!("╚══════════════════════════════════════════════╝");

    let config = GameConfig::load();
    let demo = config.demo.clone();

    let mut audio: Box<dyn MusicPlayer> = match AudioSystem::new(&config.audio) {
        Ok(system) => Box::new(system),
        Err(e) => {
            log::warn!("Audio unavailable ({}), continuing silently", e);
            Box::new(SilentPlayer::new())
        }
    };
    let mut ui = ConsoleUi;
    let frame_rate = demo.frame_rate.max(1.0);
    let mut scene = ConsoleScene { frame: 0, every: frame_rate as u64 };

    let mut game = Game::new(config);
    let mut pilot = DemoPilot::standard();
    let mut input = InputState::new();

    let frame_ms = 1000.0 / frame_rate as f64;
    let frames = (demo.duration_secs.max(0.0) * frame_rate) as u64;
    log::info!("Running {} frames at {} Hz", frames, frame_rate);

    let mut victories = 0;
    let mut losses = 0;
    for frame in 0..=frames {
        let now_ms = frame as f64 * frame_ms;
        input.begin_frame();
        pilot.drive((now_ms / 1000.0) as f32, game.phase(), &mut input, game.events_mut());

        let before = game.phase();
        let mut out = Collaborators {
            ui: &mut ui,
            audio: audio.as_mut(),
            scene: &mut scene,
        };
        let after = game.tick(now_ms, &input, &mut out);
        if before != after {
            match after {
                GamePhase::Victory => victories += 1,
                GamePhase::Lose => losses += 1,
                _ => {}
            }
        }

        if demo.realtime {
            std::thread::sleep(std::time::Duration::from_secs_f64(frame_ms / 1000.0));
        }
    }

    audio.stop();
    log::info!(
        "Run finished: {} attempts, {} victories, {} losses, final phase {:?}",
        pilot.attempts(),
        victories,
        losses,
        game.phase()
    );

    Ok(())
}
