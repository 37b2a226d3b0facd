//! Index arithmetic identifying which facelets belong to a cube layer.
//!
//! Only the three pivot faces F, R, and U have tables. Layers counted from B,
//! L, and D are the same layers counted from the other side; see
//! [`super::CubeLayer::from_face()`].

use cgmath::Vector3;
use itertools::Itertools;

use super::{CubeFace, PivotFace};

/// 3-dimensional axis.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Axis {
    /// X axis (right).
    X = 0,
    /// Y axis (up).
    Y = 1,
    /// Z axis (towards the camera).
    Z = 2,
}
impl Axis {
    /// Returns the unit vector along this axis.
    pub fn unit_vec3(self) -> Vector3<f32> {
        match self {
            Axis::X => Vector3::unit_x(),
            Axis::Y => Vector3::unit_y(),
            Axis::Z => Vector3::unit_z(),
        }
    }
}

/// Arithmetic progression of indices into one face's slots.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct SliceRun {
    /// First index.
    pub index: usize,
    /// Difference between consecutive indices.
    pub step: isize,
}
impl SliceRun {
    const fn new(index: usize, step: isize) -> Self {
        Self { index, step }
    }

    /// Returns the first `len` indices of the run.
    pub fn indices(self, len: usize) -> impl Iterator<Item = usize> + Clone {
        (0..len).map(move |k| self.index.wrapping_add_signed(self.step * k as isize))
    }
}

/// Fixed geometry of the layers turned around one pivot face.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct PivotKernel {
    /// Axis the layers turn around.
    pub axis: Axis,
    /// Faces whose border slices belong to every layer, in the cyclic order
    /// slices are handed off in.
    pub adjacent_faces: [CubeFace; 4],
    /// Face that turns as a whole with the deepest layer.
    pub opposite_face: CubeFace,
}

impl PivotFace {
    /// Returns the fixed geometry of the layers around this face.
    pub fn kernel(self) -> PivotKernel {
        use CubeFace::*;

        match self {
            PivotFace::F => PivotKernel {
                axis: Axis::Z,
                adjacent_faces: [R, U, L, D],
                opposite_face: B,
            },
            PivotFace::R => PivotKernel {
                axis: Axis::X,
                adjacent_faces: [B, U, F, D],
                opposite_face: L,
            },
            PivotFace::U => PivotKernel {
                axis: Axis::Y,
                adjacent_faces: [R, B, L, F],
                opposite_face: D,
            },
        }
    }

    /// Returns the border slice of the layer at `depth` on each adjacent
    /// face, in the order of [`PivotKernel::adjacent_faces`].
    ///
    /// Attaching and permuting both walk these runs, so the k-th index of one
    /// run always lines up with the k-th index of the next.
    pub fn border_runs(self, depth: u8, layer_count: u8) -> [(CubeFace, SliceRun); 4] {
        let n = layer_count as usize;
        let i = depth as usize;
        let row = n as isize;
        let [a, b, c, d] = self.kernel().adjacent_faces;

        let runs = match self {
            PivotFace::F => [
                SliceRun::new(i, row),
                SliceRun::new(n * (n - i - 1), 1),
                SliceRun::new(n * n - i - 1, -row),
                SliceRun::new((i + 1) * n - 1, -1),
            ],
            PivotFace::R => [
                SliceRun::new(n * (n - 1) + i, -row),
                SliceRun::new(n - i - 1, row),
                SliceRun::new(n - i - 1, row),
                SliceRun::new(n - i - 1, row),
            ],
            PivotFace::U => [SliceRun::new(n * i, 1); 4],
        };
        let [ra, rb, rc, rd] = runs;
        [(a, ra), (b, rb), (c, rc), (d, rd)]
    }

    /// Returns every slot that turns with the layer at `depth`: the whole
    /// pivot face for the outermost layer, the whole opposite face for the
    /// deepest layer, and then the border slices in adjacency order.
    pub fn layer_slots(self, depth: u8, layer_count: u8) -> Vec<(CubeFace, usize)> {
        let n = layer_count as usize;
        let kernel = self.kernel();

        let whole_face = if depth == 0 {
            Some(self.face())
        } else if depth == layer_count - 1 {
            Some(kernel.opposite_face)
        } else {
            None
        };

        let face_slots = whole_face
            .into_iter()
            .flat_map(|face| (0..n * n).map(move |index| (face, index)));
        let border_slots = self
            .border_runs(depth, layer_count)
            .into_iter()
            .flat_map(|(face, run)| run.indices(n).map(move |index| (face, index)));
        face_slots.chain(border_slots).collect_vec()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use itertools::Itertools;

    use super::*;

    #[test]
    fn test_front_kernel_for_3x3() {
        let runs = PivotFace::F.border_runs(0, 3);
        let indices = runs
            .iter()
            .map(|&(face, run)| (face, run.indices(3).collect_vec()))
            .collect_vec();
        assert_eq!(
            indices,
            [
                (CubeFace::R, vec![0, 3, 6]),
                (CubeFace::U, vec![6, 7, 8]),
                (CubeFace::L, vec![8, 5, 2]),
                (CubeFace::D, vec![2, 1, 0]),
            ],
        );
    }

    #[test]
    fn test_right_kernel_for_3x3_middle() {
        let indices = PivotFace::R
            .border_runs(1, 3)
            .iter()
            .map(|&(face, run)| (face, run.indices(3).collect_vec()))
            .collect_vec();
        assert_eq!(
            indices,
            [
                (CubeFace::B, vec![7, 4, 1]),
                (CubeFace::U, vec![1, 4, 7]),
                (CubeFace::F, vec![1, 4, 7]),
                (CubeFace::D, vec![1, 4, 7]),
            ],
        );
    }

    #[test]
    fn test_layer_slots_are_distinct_and_in_range() {
        for n in crate::MIN_LAYER_COUNT..=7 {
            for pivot in [PivotFace::F, PivotFace::R, PivotFace::U] {
                for depth in 0..n {
                    let slots = pivot.layer_slots(depth, n);
                    let nn = n as usize * n as usize;
                    assert!(slots.iter().all(|&(_, index)| index < nn));
                    let unique: HashSet<_> = slots.iter().copied().collect();
                    assert_eq!(unique.len(), slots.len(), "{pivot}{depth} on {n}x{n}");

                    let expected_len = if depth == 0 || depth == n - 1 {
                        nn + 4 * n as usize
                    } else {
                        4 * n as usize
                    };
                    assert_eq!(slots.len(), expected_len);
                }
            }
        }
    }

    #[test]
    fn test_border_runs_stay_off_turning_faces() {
        for pivot in [PivotFace::F, PivotFace::R, PivotFace::U] {
            let kernel = pivot.kernel();
            for (face, _) in pivot.border_runs(0, 4) {
                assert_ne!(face, pivot.face());
                assert_ne!(face, kernel.opposite_face);
            }
        }
    }
}
