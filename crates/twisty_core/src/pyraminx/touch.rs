//! Mapping from a drag on a pyraminx triangle to the layer it turns.

use cgmath::{InnerSpace, Vector2};

use super::{PyraminxFace, PyraminxLayer, TriangleInfo};

/// Direction of a drag across a face, parallel to one of its edges.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DragDirection {
    /// Parallel to the bottom edge.
    H,
    /// Parallel to the left edge.
    L,
    /// Parallel to the right edge.
    R,
}

impl DragDirection {
    /// Returns the vector a drag is projected onto. Its sign determines
    /// which way the layer turns.
    pub fn vector(self) -> Vector2<f32> {
        let k = 3.0_f32.sqrt();
        match self {
            DragDirection::H => Vector2::new(1.0, 0.0),
            DragDirection::L => Vector2::new(-1.0, -k),
            DragDirection::R => Vector2::new(-1.0, k),
        }
    }

    /// Returns the signed length of the projection of `point` onto
    /// [`DragDirection::vector()`].
    pub fn signed_distance(self, point: Vector2<f32>) -> f32 {
        let v = self.vector();
        point.dot(v) / v.magnitude()
    }
}

/// Returns the edge a drag by (`x`, `y`) in the plane of a face is closest to
/// being parallel to.
pub fn drag_direction(x: f32, y: f32) -> DragDirection {
    let slope = 1.0 / 3.0_f32.sqrt();

    let mut ret = DragDirection::H;
    if (slope * x <= y && x >= 0.0) || (slope * x >= y && x <= 0.0) {
        ret = DragDirection::L;
    }
    if (-slope * x <= y && x <= 0.0) || (-slope * x >= y && x >= 0.0) {
        ret = DragDirection::R;
    }
    ret
}

/// Returns the layer turned by dragging the triangle described by `info` in
/// `direction`.
pub fn layer_for_drag(info: TriangleInfo, direction: DragDirection) -> PyraminxLayer {
    use DragDirection as Dir;
    use PyraminxFace::*;

    let face = match (info.face, direction) {
        (F, Dir::R) => R,
        (F, Dir::L) => L,
        (R, Dir::R) => L,
        (R, Dir::L) => F,
        (L, Dir::R) => F,
        (L, Dir::L) => R,
        (F | R | L, Dir::H) => D,
        (D, Dir::R) => L,
        (D, Dir::L) => R,
        (D, Dir::H) => F,
    };
    let depth = match direction {
        Dir::R => info.right_diagonal,
        Dir::L => info.left_diagonal,
        Dir::H => info.horizontal,
    };
    PyraminxLayer::new(face, depth)
}
