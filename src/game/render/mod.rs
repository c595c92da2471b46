//! Render Collaborator Interface
//!
//! The simulation pushes scene updates through [`SceneSink`]; the actual
//! renderer lives outside this crate. **No GPU imports** anywhere in the
//! game modules - everything a renderer needs crosses this boundary as
//! plain positions and point lists.

use glam::Vec3;

/// Receiver for per-frame scene updates.
///
/// The preview path is rebuilt wholesale on every recompute; implementors
/// should replace their line geometry, never append to it.
pub trait SceneSink {
    /// Ball node position for this frame.
    fn set_ball_pose(&mut self, position: Vec3);

    /// Preview path points and visibility. `points` is the complete path.
    fn set_preview_path(&mut self, points: &[Vec3], visible: bool);

    /// Landing marker position and visibility.
    fn set_landing_marker(&mut self, position: Vec3, visible: bool);
}

/// Sink that discards everything (headless runs).
pub struct NullSink;

impl SceneSink for NullSink {
    fn set_ball_pose(&mut self, _position: Vec3) {}
    fn set_preview_path(&mut self, _points: &[Vec3], _visible: bool) {}
    fn set_landing_marker(&mut self, _position: Vec3, _visible: bool) {}
}

/// Sink that records the last pushed state, for tests and inspection.
#[derive(Debug, Default)]
pub struct RecordingSink {
    pub ball_position: Vec3,
    pub preview_points: Vec<Vec3>,
    pub preview_visible: bool,
    pub marker_position: Vec3,
    pub marker_visible: bool,
}

impl SceneSink for RecordingSink {
    fn set_ball_pose(&mut self, position: Vec3) {
        self.ball_position = position;
    }

    fn set_preview_path(&mut self, points: &[Vec3], visible: bool) {
        self.preview_points.clear();
        self.preview_points.extend_from_slice(points);
        self.preview_visible = visible;
    }

    fn set_landing_marker(&mut self, position: Vec3, visible: bool) {
        self.marker_position = position;
        self.marker_visible = visible;
    }
}
