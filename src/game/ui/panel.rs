//! Flight Data Panels
//!
//! Text renderings of the flight record: the live readout shown while
//! aiming, and the step-by-step derivation board shown after a landing.
//! The simulation talks to whatever overlay exists through the
//! [`FlightDisplay`] trait; the formatting here is shared by any text
//! backed implementation.

use crate::game::flight::FlightRecord;
use crate::physics::trajectory::{ideal_flight_time, ideal_max_height, ideal_range};

/// Overlay collaborator notified whenever flight data or state changes.
pub trait FlightDisplay {
    /// New record and state label (`"in flight"`, `"aiming"`, `"ready"`).
    fn update(&mut self, record: &FlightRecord, label: &'static str);

    /// The live calculation readout should disappear (ball released).
    fn hide_live_calculations(&mut self);

    /// Show the step-by-step derivation board for a finished throw.
    fn show_explanation(&mut self, record: &FlightRecord);

    /// Hide the derivation board (ball picked back up).
    fn hide_explanation(&mut self);
}

/// Render the live flight-data readout.
pub fn format_flight_panel(record: &FlightRecord, label: &str) -> String {
    format!(
        "Projectile Motion Data\n\
         Initial Velocity: {:.2} m/s\n\
         Launch Angle: {:.2}°\n\
         Flight Time: {:.2} s\n\
         Maximum Height: {:.2} m\n\
         Range: {:.2} m\n\
         [{}]",
        record.initial_velocity,
        record.angle.to_degrees(),
        record.flight_time,
        record.max_height,
        record.range,
        label,
    )
}

/// Render the step-by-step calculation board from the record's launch
/// values, substituting the numbers into each formula the way a worked
/// physics example would.
pub fn format_explanation(record: &FlightRecord, gravity: f32) -> String {
    let u = record.initial_velocity;
    let angle = record.angle;
    let sin_angle = angle.sin();
    let time = ideal_flight_time(u, angle, gravity);
    let height = ideal_max_height(u, angle, gravity);
    let range = ideal_range(u, angle, gravity);

    format!(
        "Step-by-Step Calculation\n\
         \n\
         Step 1: Given Data\n\
         Initial velocity (u) = {u:.2} m/s\n\
         Angle (θ) = {:.2}°\n\
         Gravity (g) = {gravity:.2} m/s²\n\
         \n\
         Step 2: Time of Flight\n\
         T = (2 × u × sinθ) / g = (2 × {u:.2} × {sin_angle:.3}) / {gravity:.2} = {time:.2} s\n\
         \n\
         Step 3: Maximum Height\n\
         H = (u·sinθ)² / (2g) = {:.2}² / {:.2} = {height:.2} m\n\
         \n\
         Step 4: Range\n\
         R = (u² × sin2θ) / g = ({:.2} × {:.3}) / {gravity:.2} = {range:.2} m\n\
         \n\
         Measured: range {:.2} m, flight time {:.2} s",
        angle.to_degrees(),
        u * sin_angle,
        2.0 * gravity,
        u * u,
        (2.0 * angle).sin(),
        record.range,
        record.flight_time,
    )
}

/// Display that writes the panels to the log (headless runs).
pub struct ConsolePanel {
    gravity: f32,
}

impl ConsolePanel {
    pub fn new() -> Self {
        Self { gravity: 9.82 }
    }

    pub fn with_gravity(gravity: f32) -> Self {
        Self { gravity }
    }
}

impl Default for ConsolePanel {
    fn default() -> Self {
        Self::new()
    }
}

impl FlightDisplay for ConsolePanel {
    fn update(&mut self, record: &FlightRecord, label: &'static str) {
        log::debug!("{}", format_flight_panel(record, label));
    }

    fn hide_live_calculations(&mut self) {
        log::debug!("live calculations hidden");
    }

    fn show_explanation(&mut self, record: &FlightRecord) {
        log::info!("{}", format_explanation(record, self.gravity));
    }

    fn hide_explanation(&mut self) {
        log::debug!("explanation board closed");
    }
}

/// Display that records what it was told, for tests.
#[derive(Debug, Default)]
pub struct RecordingDisplay {
    pub last_record: FlightRecord,
    pub last_label: &'static str,
    pub update_count: usize,
    pub live_calculations_visible: bool,
    pub explanation_visible: bool,
}

impl FlightDisplay for RecordingDisplay {
    fn update(&mut self, record: &FlightRecord, label: &'static str) {
        self.last_record = *record;
        self.last_label = label;
        self.update_count += 1;
        // The live readout only makes sense while the ball is in hand
        self.live_calculations_visible = label != "in flight";
    }

    fn hide_live_calculations(&mut self) {
        self.live_calculations_visible = false;
    }

    fn show_explanation(&mut self, record: &FlightRecord) {
        self.last_record = *record;
        self.explanation_visible = true;
    }

    fn hide_explanation(&mut self) {
        self.explanation_visible = false;
    }
}
