//! UI Module
//!
//! Overlay collaborator interface and the text panels pushed through it.

pub mod panel;

pub use panel::{ConsolePanel, FlightDisplay, RecordingDisplay, format_explanation, format_flight_panel};
