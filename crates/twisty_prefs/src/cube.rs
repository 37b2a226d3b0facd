use cgmath::Deg;
use serde::{Deserialize, Serialize};

/// Cube preferences.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct CubePreferences {
    /// Number of layers along each edge of a new cube.
    pub layer_count: u8,
    /// Degrees turned by dragging across the whole face.
    pub drag_sensitivity: f32,
    /// Maximum angle, in degrees, moved per frame while snapping.
    pub snap_step: f32,
}
impl Default for CubePreferences {
    fn default() -> Self {
        Self {
            layer_count: 3,
            drag_sensitivity: 100.0,
            snap_step: 3.0,
        }
    }
}
impl CubePreferences {
    /// Returns the angle turned by dragging across one sticker.
    pub fn degrees_per_unit(&self) -> f32 {
        self.drag_sensitivity / self.layer_count as f32
    }
    /// Returns the maximum angle moved per frame while snapping.
    pub fn snap_step(&self) -> Deg<f32> {
        Deg(self.snap_step)
    }
}
