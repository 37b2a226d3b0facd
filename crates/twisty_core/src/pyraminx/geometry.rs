//! Orientation of the pyraminx's faces in the puzzle's local frame.

use std::f32::consts::{FRAC_PI_2, PI};

use cgmath::{InnerSpace, Quaternion, Rad, Rotation3, Vector3};

use super::PyraminxFace;

impl PyraminxFace {
    /// Returns the orientation that takes a face lying in the XY plane onto
    /// this face of the tetrahedron.
    pub fn orientation(self) -> Quaternion<f32> {
        // Tilts a face from vertical onto the slope of a regular tetrahedron.
        let tilt = Quaternion::from_angle_x(Rad(-FRAC_PI_2 + (1.0_f32 / 3.0).acos()));
        let yaw = |angle: f32| Quaternion::from_angle_y(Rad(angle));

        match self {
            PyraminxFace::F => tilt,
            PyraminxFace::L => yaw(-2.0 * PI / 3.0) * tilt,
            PyraminxFace::R => yaw(2.0 * PI / 3.0) * tilt,
            PyraminxFace::D => yaw(PI) * Quaternion::from_angle_x(Rad(FRAC_PI_2)),
        }
    }

    /// Returns the unit axis that layers parallel to this face turn around,
    /// pointing into the puzzle.
    pub fn axis(self) -> Vector3<f32> {
        (-(self.orientation() * Vector3::unit_z())).normalize()
    }
}
