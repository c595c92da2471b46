//! Throw Lab
//!
//! Headless scripted session: aims, throws, waits out the flight, and
//! prints the reconciled flight data. Useful for tuning configs without
//! a renderer attached (`throw_lab [config.json]`).

use glam::Vec3;

use planet_toss_engine::game::config::ThrowConfig;
use planet_toss_engine::game::input::{MovementState, ThrowCommand};
use planet_toss_engine::game::render::NullSink;
use planet_toss_engine::game::scenes::ThrowScene;
use planet_toss_engine::game::systems::BallPhase;
use planet_toss_engine::game::ui::{ConsolePanel, format_flight_panel};

const FRAME: f32 = 1.0 / 60.0;

fn main() {
    env_logger::init();

    let config = match std::env::args().nth(1) {
        Some(path) => match ThrowConfig::load(&path) {
            Ok(config) => {
                log::info!("loaded config from {path}");
                config
            }
            Err(err) => {
                eprintln!("{err}; using defaults");
                ThrowConfig::default()
            }
        },
        None => ThrowConfig::default(),
    };

    let mut scene = ThrowScene::new(config);
    let mut sink = NullSink;
    let mut panel = ConsolePanel::with_gravity(config.gravity);
    let movement = MovementState::default();
    let view = Vec3::NEG_Z;

    // Walk the aim up a little, then throw
    let script: Vec<(usize, ThrowCommand)> = vec![
        (10, ThrowCommand::BeginAim),
        (20, ThrowCommand::AdjustForce(config.force_step)),
        (25, ThrowCommand::AdjustForce(config.force_step)),
        (30, ThrowCommand::AdjustAngle(config.angle_step)),
        (40, ThrowCommand::Release),
    ];

    let mut landed_shown = false;
    for frame in 0..1200usize {
        let commands: Vec<ThrowCommand> = script
            .iter()
            .filter(|(at, _)| *at == frame)
            .map(|(_, command)| *command)
            .collect();

        scene.update(FRAME, &commands, &movement, view, &mut sink, &mut panel);

        if let Some(pose) = scene.take_camera_request() {
            log::info!(
                "camera framed at {:?}, looking at {:?}",
                pose.position,
                pose.target
            );
        }

        if scene.throw.phase() == BallPhase::Landed && !landed_shown {
            landed_shown = true;
            println!(
                "{}",
                format_flight_panel(scene.record(), scene.throw.phase().label())
            );
        }

        // The grace delay hands the ball back; one more second and stop
        if landed_shown && scene.throw.phase() == BallPhase::Held && frame > 300 {
            log::info!("ball back in hand after {:.2} s", scene.sim_time());
            break;
        }
    }
}
