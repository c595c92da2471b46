//! ThrowScene — high-level composition of the throw simulation.
//!
//! Owns the character, the physics world, the ball, and the throw state
//! machine. Its [`update`](ThrowScene::update) method is the single entry
//! point for the entire per-frame logic and runs in a fixed order. **No
//! GPU imports** — renderer and overlay are reached only through the
//! [`SceneSink`] and [`FlightDisplay`] collaborator traits.

use glam::Vec3;

use crate::game::camera::{CameraPose, frame_throw};
use crate::game::character::Character;
use crate::game::config::ThrowConfig;
use crate::game::flight::{FlightRecord, reconcile};
use crate::game::input::{MovementState, ThrowCommand};
use crate::game::render::SceneSink;
use crate::game::systems::{BallPhase, BallSystem, ThrowSystem};
use crate::game::ui::FlightDisplay;
use crate::physics::trajectory::{
    LandingEstimate, ThrowParameters, TrajectoryPrediction, ideal_flight_time, ideal_range, predict,
};
use crate::physics::world::PhysicsWorld;

/// Height the landing marker floats above the ground to avoid z-fighting
const MARKER_LIFT: f32 = 0.01;

/// Complete scene composing the throw simulation.
///
/// Created once from a [`ThrowConfig`]. Call [`update`](ThrowScene::update)
/// each frame with the wall delta, pending commands, movement state, and
/// the camera's horizontal forward; all logic executes in the correct
/// order and the collaborators receive their notifications before the
/// call returns.
pub struct ThrowScene {
    pub config: ThrowConfig,
    pub character: Character,
    world: PhysicsWorld,
    pub ball: BallSystem,
    pub throw: ThrowSystem,

    record: FlightRecord,
    prediction: TrajectoryPrediction,
    sim_time: f64,
    aim_direction: Vec3,

    // -- Visual state --
    preview_suppressed: bool,
    marker_position: Vec3,
    marker_visible: bool,
    camera_request: Option<CameraPose>,
    last_sent: Option<(FlightRecord, &'static str)>,
}

impl ThrowScene {
    /// Create a scene with the ball already in the character's hand.
    pub fn new(config: ThrowConfig) -> Self {
        let character = Character::default();
        let mut world = PhysicsWorld::new(config.gravity);
        let mut ball = BallSystem::new(&mut world, &config, character.hand_anchor());
        ball.attach_to_hand(&mut world, &config, character.hand_anchor());
        let throw = ThrowSystem::new(&config);

        Self {
            config,
            character,
            world,
            ball,
            throw,
            record: FlightRecord::default(),
            prediction: TrajectoryPrediction::default(),
            sim_time: 0.0,
            aim_direction: Vec3::NEG_Z,
            preview_suppressed: false,
            marker_position: Vec3::ZERO,
            marker_visible: false,
            camera_request: None,
            last_sent: None,
        }
    }

    /// Main per-frame update — executes all logic in the correct order.
    ///
    /// # Order of operations
    /// 1. Consume input commands (state transitions, aim edits)
    /// 2. Deferred auto-pickup check
    /// 3. Physics advance while the ball is loose; landing detection
    /// 4. Character movement
    /// 5. Held-ball pose resync
    /// 6. Trajectory preview recompute while holding
    /// 7. Push scene + overlay updates to the collaborators
    pub fn update(
        &mut self,
        delta: f32,
        commands: &[ThrowCommand],
        movement: &MovementState,
        view_dir: Vec3,
        sink: &mut dyn SceneSink,
        display: &mut dyn FlightDisplay,
    ) {
        let delta = delta.max(0.0);
        self.sim_time += delta as f64;
        self.preview_suppressed = false;

        let flat_view = Vec3::new(view_dir.x, 0.0, view_dir.z).normalize_or_zero();
        if flat_view != Vec3::ZERO {
            self.aim_direction = flat_view;
        }

        // 1. Input commands
        for command in commands {
            self.apply_command(*command, display);
        }

        // 2. Deferred pickup: fires once, and only if still landed
        if self.throw.poll_auto_pickup(self.sim_time) {
            self.ball
                .attach_to_hand(&mut self.world, &self.config, self.character.hand_anchor());
            display.hide_explanation();
            log::debug!("ball returned to hand after grace delay");
        }

        // 3. Physics while the ball is loose
        if !self.throw.phase().is_holding() {
            let signal = self.ball.advance(&mut self.world, &self.config, delta);

            if self.throw.phase() == BallPhase::Thrown {
                if let Some(signal) = signal {
                    self.finish_landing(signal.position, display);
                } else {
                    self.check_analytic_fallback(display);
                }
            }
        }

        // 4. Character movement
        self.character
            .update(movement, self.aim_direction, self.config.move_speed, delta);

        // 5. Held-ball pose resync
        if self.throw.phase().is_holding() {
            self.ball
                .attach_to_hand(&mut self.world, &self.config, self.character.hand_anchor());
        }

        // 6. Preview recompute
        if self.throw.phase().is_holding() && !self.preview_suppressed {
            self.refresh_preview();
        }

        // 7. Render + overlay notifications
        sink.set_ball_pose(self.ball.position(&self.world));
        let preview_visible = self.throw.phase().is_holding() && !self.preview_suppressed;
        sink.set_preview_path(&self.prediction.samples, preview_visible);
        sink.set_landing_marker(self.marker_position, self.marker_visible);

        let label = self.throw.phase().label();
        if self.last_sent != Some((self.record, label)) {
            display.update(&self.record, label);
            self.last_sent = Some((self.record, label));
        }
    }

    /// Take the pending one-shot camera placement, if a throw produced one.
    pub fn take_camera_request(&mut self) -> Option<CameraPose> {
        self.camera_request.take()
    }

    /// Current flight record.
    pub fn record(&self) -> &FlightRecord {
        &self.record
    }

    /// Simulation clock (seconds since scene creation).
    pub fn sim_time(&self) -> f64 {
        self.sim_time
    }

    /// Read access to the physics world.
    pub fn world(&self) -> &PhysicsWorld {
        &self.world
    }

    fn apply_command(&mut self, command: ThrowCommand, display: &mut dyn FlightDisplay) {
        match command {
            ThrowCommand::BeginAim => {
                self.throw.begin_aim();
            }
            ThrowCommand::Release => {
                if self.throw.phase() == BallPhase::Aiming {
                    self.do_throw(display);
                } else {
                    log::debug!("release ignored: not aiming");
                }
            }
            ThrowCommand::StopAim => {
                if self.throw.stop_aim() {
                    self.clear_aim_visuals();
                }
            }
            ThrowCommand::AdjustForce(delta) => {
                self.throw.adjust_force(&self.config, delta);
            }
            ThrowCommand::AdjustAngle(delta) => {
                self.throw.adjust_angle(&self.config, delta);
            }
            ThrowCommand::Throw => {
                self.do_throw(display);
            }
            ThrowCommand::PickupOrDrop => {
                if self.throw.phase().is_holding() {
                    self.drop_ball();
                } else if self.throw.try_pickup() {
                    self.ball.attach_to_hand(
                        &mut self.world,
                        &self.config,
                        self.character.hand_anchor(),
                    );
                    display.hide_explanation();
                }
            }
        }
    }

    /// Held/Aiming → Thrown: freeze parameters, launch the body, hide the
    /// aim visuals, and frame the camera on the predicted arc.
    fn do_throw(&mut self, display: &mut dyn FlightDisplay) {
        let origin = self.character.release_point(&self.config);
        let Some(params) = self.throw.try_throw(origin, self.aim_direction, self.sim_time) else {
            return;
        };

        self.ball.release_with_velocity(
            &mut self.world,
            params.origin,
            params.launch_velocity(),
            self.sim_time,
        );

        // The record freezes on the throw parameters, not on whatever the
        // preview last showed
        let prediction = predict(&params, self.config.gravity);
        self.write_predicted_record(&params, prediction.landing);
        self.camera_request = frame_throw(&prediction.samples, params.direction);

        self.clear_aim_visuals();
        display.hide_live_calculations();
    }

    /// Held/Aiming → Landed without a throw.
    fn drop_ball(&mut self) {
        if !self.throw.mark_dropped() {
            return;
        }
        let nudge = self.character.heading * self.config.drop_nudge_speed;
        self.ball.drop_with_nudge(&mut self.world, nudge);
        self.clear_aim_visuals();
    }

    /// Thrown → Landed off the first contact signal.
    fn finish_landing(&mut self, position: Vec3, display: &mut dyn FlightDisplay) {
        if !self.throw.mark_landed(self.sim_time, self.config.grace_delay) {
            return;
        }
        if let Some(params) = self.throw.snapshot().copied() {
            let elapsed = (self.sim_time - params.start_time) as f32;
            reconcile(&mut self.record, params.origin, position, elapsed);
        }
        self.marker_position = Vec3::new(position.x, MARKER_LIFT, position.z);
        self.marker_visible = true;
        display.show_explanation(&self.record);
        log::info!(
            "landed: range {:.2} m, flight time {:.2} s",
            self.record.range,
            self.record.flight_time
        );
    }

    /// Safety net for a flight whose contact never fires: once the ideal
    /// arc computed from the frozen parameters crosses the ground, force
    /// the landing there. Keeps the state machine from staying airborne
    /// forever.
    fn check_analytic_fallback(&mut self, display: &mut dyn FlightDisplay) {
        let Some(params) = self.throw.snapshot().copied() else {
            return;
        };
        let elapsed = (self.sim_time - params.start_time) as f32;
        let ideal = params.position_at(elapsed, self.config.gravity);
        if ideal.y > 0.0 {
            return;
        }

        let ground = Vec3::new(ideal.x, 0.0, ideal.z);
        self.ball.settle_at(&mut self.world, &self.config, ground);
        log::debug!("analytic landing fallback at {ground:?}");
        self.finish_landing(ground, display);
    }

    /// Take the preview and landing marker down within the current frame.
    /// The preview stays suppressed until the next update's recompute.
    fn clear_aim_visuals(&mut self) {
        self.preview_suppressed = true;
        self.marker_visible = false;
    }

    /// Recompute the preview path and the predicted half of the record
    /// from the live aim parameters.
    fn refresh_preview(&mut self) {
        let origin = self.character.release_point(&self.config);
        let live = ThrowParameters::new(
            self.throw.force(),
            self.throw.angle(),
            self.aim_direction,
            origin,
            self.sim_time,
        );
        self.prediction = predict(&live, self.config.gravity);
        self.write_predicted_record(&live, self.prediction.landing);
    }

    fn write_predicted_record(&mut self, params: &ThrowParameters, landing: Option<LandingEstimate>) {
        self.record.initial_velocity = params.force;
        self.record.angle = params.angle;
        self.record.range = ideal_range(params.force, params.angle, self.config.gravity);
        self.record.flight_time = ideal_flight_time(params.force, params.angle, self.config.gravity);

        if let Some(landing) = landing {
            self.record.max_height = landing.max_height;
            self.record.theoretical_range = landing.range;
            self.record.theoretical_time = landing.flight_time;
            self.marker_position =
                Vec3::new(landing.point.x, MARKER_LIFT, landing.point.z);
            self.marker_visible = true;
        } else {
            // Prediction incomplete within the horizon: keep the previous
            // landing estimates, just take the marker down
            self.marker_visible = false;
        }
    }
}
