use cgmath::Deg;
use serde::{Deserialize, Serialize};

/// Pyraminx preferences.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct PyraminxPreferences {
    /// Number of layers parallel to each face of a new pyraminx.
    pub layer_count: u8,
    /// Drag speed for a pyraminx with one layer. Larger pyraminxes turn
    /// proportionally slower.
    pub speed_factor: f32,
    /// Maximum angle, in degrees, moved per frame while snapping.
    pub snap_step: f32,
}
impl Default for PyraminxPreferences {
    fn default() -> Self {
        Self {
            layer_count: 3,
            speed_factor: 150.0,
            snap_step: 3.0,
        }
    }
}
impl PyraminxPreferences {
    /// Returns the degrees turned per unit of drag distance.
    pub fn speed(&self) -> f32 {
        self.speed_factor / self.layer_count as f32
    }
    /// Returns the maximum angle moved per frame while snapping.
    pub fn snap_step(&self) -> Deg<f32> {
        Deg(self.snap_step)
    }
}
