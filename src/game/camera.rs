//! Throw Camera Framing
//!
//! One-shot camera placement that frames the full predicted flight path
//! at the moment of release. Computed from the preview samples, not
//! tracked afterwards - the regular camera controls take over once the
//! pose is applied.

use glam::Vec3;

/// A camera placement request: where to stand and what to look at.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraPose {
    pub position: Vec3,
    pub target: Vec3,
}

/// Frame the trajectory described by `samples`, thrown along `direction`.
///
/// The camera sits beside the path: at the bounding-box center, pushed out
/// along the horizontal perpendicular of the throw direction by twice the
/// box's along-throw extent, and raised by 80% of the box height. Returns
/// `None` for an empty path.
pub fn frame_throw(samples: &[Vec3], direction: Vec3) -> Option<CameraPose> {
    let first = *samples.first()?;
    let mut min = first;
    let mut max = first;
    for point in samples {
        min = min.min(*point);
        max = max.max(*point);
    }

    let center = (min + max) * 0.5;
    let size = max - min;

    let perp = Vec3::new(-direction.z, 0.0, direction.x).normalize_or_zero();
    if perp == Vec3::ZERO {
        return None;
    }

    let along_extent = (size.x * direction.x).abs() + (size.z * direction.z).abs();
    let mut position = center + perp * (along_extent * 2.0);
    position.y += size.y * 0.8;

    Some(CameraPose {
        position,
        target: center,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_path_gives_no_pose() {
        assert!(frame_throw(&[], Vec3::NEG_Z).is_none());
    }

    #[test]
    fn test_camera_sits_beside_the_path() {
        // A straight throw along -Z, rising then falling
        let samples = vec![
            Vec3::new(0.0, 1.5, 0.0),
            Vec3::new(0.0, 4.0, -5.0),
            Vec3::new(0.0, 5.0, -10.0),
            Vec3::new(0.0, 4.0, -15.0),
            Vec3::new(0.0, 0.5, -20.0),
        ];
        let pose = frame_throw(&samples, Vec3::NEG_Z).unwrap();

        // Looking at the box center
        assert_eq!(pose.target, Vec3::new(0.0, 2.75, -10.0));
        // Offset is perpendicular to the throw: pure X here
        assert!(pose.position.x.abs() > 1.0);
        assert_eq!(pose.position.z, -10.0);
        // Along-throw extent is 20m, so the side offset is 40m
        assert!((pose.position.x.abs() - 40.0).abs() < 1e-3);
        // Raised by 80% of the 4.5m box height
        assert!((pose.position.y - (2.75 + 4.5 * 0.8)).abs() < 1e-3);
    }

    #[test]
    fn test_vertical_direction_gives_no_pose() {
        let samples = vec![Vec3::ZERO, Vec3::Y];
        assert!(frame_throw(&samples, Vec3::Y).is_none());
    }
}
