//! Permutation of the cube's facelet store after a committed turn.

use itertools::Itertools;

use super::{CubeFace, CubeLayer, SliceRun};
use crate::FaceletStore;
use crate::turn::{TurnCount, TurnDirection};

/// Applies `turns` to the layer's facelets in the store.
pub(super) fn apply_turns(
    store: &mut FaceletStore<CubeFace>,
    layer: CubeLayer,
    layer_count: u8,
    turns: TurnCount,
) {
    for _ in 0..turns.turns {
        apply_one_turn(store, layer, layer_count, turns.direction);
    }
}

fn apply_one_turn(
    store: &mut FaceletStore<CubeFace>,
    CubeLayer { face, depth }: CubeLayer,
    layer_count: u8,
    direction: TurnDirection,
) {
    let n = layer_count as usize;
    let runs = face.border_runs(depth, layer_count);

    // The deepest layer is turned from the opposite side, so its slices walk
    // the adjacency list the other way.
    let forward = if depth == 0 {
        rotate_face_matrix(store.face_mut(face.face()), n, direction);
        direction == TurnDirection::Right
    } else if depth == layer_count - 1 {
        rotate_face_matrix(store.face_mut(face.kernel().opposite_face), n, direction);
        direction == TurnDirection::Left
    } else {
        direction == TurnDirection::Right
    };

    cycle_slices(store, &runs, n, forward);
}

/// Rotates the square raster of one face a quarter turn: clockwise for
/// [`TurnDirection::Right`] and counterclockwise for [`TurnDirection::Left`].
fn rotate_face_matrix<T>(slots: &mut [T], n: usize, direction: TurnDirection) {
    match direction {
        TurnDirection::Right => {
            transpose(slots, n);
            reverse_rows(slots, n);
        }
        TurnDirection::Left => {
            reverse_rows(slots, n);
            transpose(slots, n);
        }
    }
}

/// Transposes an `n`×`n` row-major matrix in place.
fn transpose<T>(slots: &mut [T], n: usize) {
    for row in 0..n {
        for col in row + 1..n {
            slots.swap(row * n + col, col * n + row);
        }
    }
}

/// Reverses each row of an `n`×`n` row-major matrix in place.
fn reverse_rows<T>(slots: &mut [T], n: usize) {
    for row in slots.chunks_exact_mut(n) {
        row.reverse();
    }
}

/// Hands each border slice to the next face in `runs` (or the previous one
/// if `forward` is false) by swapping neighboring slices in lockstep.
fn cycle_slices(
    store: &mut FaceletStore<CubeFace>,
    runs: &[(CubeFace, SliceRun)],
    n: usize,
    forward: bool,
) {
    let mut pairs = runs.iter().tuple_windows().collect_vec();
    if !forward {
        pairs.reverse();
    }
    for (&(face_a, run_a), &(face_b, run_b)) in pairs {
        for (a, b) in run_a.indices(n).zip(run_b.indices(n)) {
            store.swap((face_a, a), (face_b, b));
        }
    }
}
