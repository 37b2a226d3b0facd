//! Permutation of the pyraminx's facelet store after a committed turn.

use super::kernel::TriangleRun;
use super::{PyraminxFace, PyraminxLayer};
use crate::FaceletStore;
use crate::turn::{TurnCount, TurnDirection};

/// Constructor for every diagonal of one kind.
type Diagonal = fn(usize, usize) -> TriangleRun;

/// Applies `turns` to the layer's facelets in the store.
///
/// Two turns in one direction are applied as one turn in the other.
pub(super) fn apply_turns(
    store: &mut FaceletStore<PyraminxFace>,
    layer: PyraminxLayer,
    layer_count: u8,
    turns: TurnCount,
) {
    let direction = match turns.turns % 3 {
        0 => return,
        1 => turns.direction,
        _ => turns.direction.rev(),
    };

    let mut cycle = layer.adjacent_runs(layer_count);
    if direction == TurnDirection::Left {
        cycle.reverse();
    }
    let [a, b, c] = cycle.map(|adj| (adj.face, adj.commit_indices()));
    for ((face_1, indices_1), (face_2, indices_2)) in [(&a, &b), (&b, &c)] {
        for (&i, &j) in indices_1.iter().zip(indices_2) {
            store.swap((*face_1, i), (*face_2, j));
        }
    }

    if layer.depth == 0 {
        let (first, second): (Diagonal, Diagonal) = match direction {
            TurnDirection::Right => (TriangleRun::right_diagonal, TriangleRun::left_diagonal),
            TurnDirection::Left => (TriangleRun::left_diagonal, TriangleRun::right_diagonal),
        };
        reverse_diagonals(store, layer.face, layer_count, first);
        reverse_diagonals(store, layer.face, layer_count, second);
    }
}

/// Reverses every diagonal of one kind on a face.
fn reverse_diagonals(
    store: &mut FaceletStore<PyraminxFace>,
    face: PyraminxFace,
    layer_count: u8,
    diagonal: Diagonal,
) {
    let dim = layer_count as usize;
    for n in 0..dim {
        let indices: Vec<usize> = diagonal(n, dim).indices().collect();
        store.reverse_run(face, &indices);
    }
}
