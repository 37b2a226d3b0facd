//! Mapping from a drag on a cube facelet to the layer it turns.
//!
//! Gesture handling itself lives outside this crate. These tables only
//! resolve a facelet and a dominant drag axis to a layer and a sign.

use cgmath::Deg;

use super::{CubeFace, CubeFaceletInfo, CubeLayer, PivotFace};

/// Dominant axis of a drag, in the plane of the touched face.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DragAxis {
    /// Horizontal.
    X,
    /// Vertical.
    Y,
}

/// Returns the dominant axis of a drag. Exact diagonals count as vertical.
pub fn drag_axis(dx: f32, dy: f32) -> DragAxis {
    if dx.abs() <= dy.abs() {
        DragAxis::Y
    } else {
        DragAxis::X
    }
}

/// Layer turned by dragging a facelet along one axis.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FaceTouchInfo {
    /// Layer to turn.
    pub layer: CubeLayer,
    /// Whether the drag is added to the layer's angle rather than subtracted.
    pub is_opposite_layer: bool,
}

impl FaceTouchInfo {
    /// Returns the absolute angle to pass to
    /// [`super::Cube::rotate_layer()`] after dragging by `drag` from a layer
    /// committed at `baseline`.
    pub fn target_angle(self, baseline: Deg<f32>, drag: Deg<f32>) -> Deg<f32> {
        if self.is_opposite_layer {
            baseline + drag
        } else {
            baseline - drag
        }
    }
}

/// Returns the layer turned by dragging the facelet at (`row`, `col`) of
/// `face` along `axis`, on a cube with `layer_count` layers.
///
/// Returns `None` if the facelet is not on a face of that size.
pub fn face_touch_info(
    face: CubeFace,
    row: usize,
    col: usize,
    layer_count: u8,
    axis: DragAxis,
) -> Option<FaceTouchInfo> {
    use CubeFace::*;
    use DragAxis::*;

    let n = layer_count as usize;
    if row >= n || col >= n {
        return None;
    }
    let last = n - 1;
    let flip_row = last - row;
    let flip_col = last - col;

    let (pivot, depth, is_opposite_layer) = match (face, axis) {
        (F | B | R | L, X) => (PivotFace::U, row, row == last),
        (U, X) => (PivotFace::F, flip_row, row != 0),
        (D, X) => (PivotFace::F, row, row == last),

        (F | U | D, Y) => (PivotFace::R, flip_col, col != 0),
        (B, Y) => (PivotFace::R, col, col == last),
        (R, Y) => (PivotFace::F, col, col == last),
        (L, Y) => (PivotFace::F, flip_col, col != 0),
    };

    Some(FaceTouchInfo {
        layer: CubeLayer::new(pivot, u8::try_from(depth).ok()?),
        is_opposite_layer,
    })
}

/// Returns the layer turned by dragging the facelet described by `info`
/// along `axis`.
pub fn facelet_touch_info(
    info: CubeFaceletInfo,
    layer_count: u8,
    axis: DragAxis,
) -> Option<FaceTouchInfo> {
    face_touch_info(info.face, info.row, info.col, layer_count, axis)
}
