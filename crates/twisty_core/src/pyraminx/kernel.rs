//! Triangular index runs identifying which facelets belong to a pyraminx
//! layer.
//!
//! Each face is a triangle of `dim` rows. Row `r` holds `2r + 1` facelets
//! with indices `r²..(r+1)²`, numbered left to right from the apex down.
//! Within a row, even positions point up and odd positions point down.

use smallvec::SmallVec;

use super::{PyraminxFace, PyraminxLayer};

/// Shape of a run of facelets across one face.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum RunKind {
    /// Diagonal parallel to the right edge of the face.
    RightDiagonal,
    /// Diagonal parallel to the left edge of the face.
    LeftDiagonal,
    /// Row parallel to the bottom edge of the face.
    Horizontal,
}

/// Run of facelets across one face, parallel to one of its edges.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct TriangleRun {
    /// Shape of the run.
    pub kind: RunKind,
    /// Which diagonal (counted from the edge) or which row (counted from
    /// the apex).
    pub n: usize,
    /// Number of facelets in the run.
    pub count: usize,
}

impl TriangleRun {
    /// Returns the full right diagonal `n` of a face with `dim` rows.
    pub fn right_diagonal(n: usize, dim: usize) -> Self {
        Self::new(RunKind::RightDiagonal, n, diagonal_len(n, dim))
    }
    /// Returns the full left diagonal `n` of a face with `dim` rows.
    pub fn left_diagonal(n: usize, dim: usize) -> Self {
        Self::new(RunKind::LeftDiagonal, n, diagonal_len(n, dim))
    }
    /// Returns row `row` of a face.
    pub fn horizontal(row: usize) -> Self {
        Self::new(RunKind::Horizontal, row, 2 * row + 1)
    }
    fn new(kind: RunKind, n: usize, count: usize) -> Self {
        Self { kind, n, count }
    }

    /// Returns the index at position `pos` along the run.
    pub fn index_at(self, pos: usize) -> usize {
        let n = self.n;
        let k = pos.div_ceil(2);
        let odd = pos % 2 == 1;
        match self.kind {
            RunKind::RightDiagonal => {
                let x = n * n + k * (2 * n + k + 2);
                if odd { x - 1 } else { x }
            }
            RunKind::LeftDiagonal => {
                let x = (n + 1) * (n + 1) - 1 + k * (2 * n + k);
                if odd { x + 1 } else { x }
            }
            RunKind::Horizontal => n * n + pos,
        }
    }

    /// Iterates over the indices of the run.
    ///
    /// The iterator can be cloned and the run regenerated any number of
    /// times; both always yield the same sequence.
    pub fn indices(self) -> RunIndices {
        RunIndices { run: self, pos: 0 }
    }
}

/// Number of facelets along diagonal `n` of a face with `dim` rows.
fn diagonal_len(n: usize, dim: usize) -> usize {
    1 + 2 * (dim - n - 1)
}

/// Iterator over the indices of a [`TriangleRun`].
#[derive(Debug, Clone)]
pub struct RunIndices {
    run: TriangleRun,
    pos: usize,
}
impl Iterator for RunIndices {
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        if self.pos >= self.run.count {
            return None;
        }
        let ret = self.run.index_at(self.pos);
        self.pos += 1;
        Some(ret)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.run.count - self.pos;
        (remaining, Some(remaining))
    }
}
impl ExactSizeIterator for RunIndices {}

/// Run of facelets on a neighboring face that turns with a layer.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct AdjacentRun {
    /// Neighboring face.
    pub face: PyraminxFace,
    /// Run on that face.
    pub run: TriangleRun,
    /// Whether the run is walked backwards when slices are handed off.
    pub reversed: bool,
}
impl AdjacentRun {
    /// Returns the indices in the order slices are handed off in.
    pub(crate) fn commit_indices(self) -> SmallVec<[usize; 16]> {
        let mut ret: SmallVec<[usize; 16]> = self.run.indices().collect();
        if self.reversed {
            ret.reverse();
        }
        ret
    }
}

impl PyraminxLayer {
    /// Returns the runs on the three neighboring faces that turn with this
    /// layer, in the order slices are handed off in for a right turn.
    pub fn adjacent_runs(self, layer_count: u8) -> [AdjacentRun; 3] {
        use PyraminxFace::*;

        let dim = layer_count as usize;
        let d = self.depth as usize;
        let right = TriangleRun::right_diagonal(d, dim);
        let left = TriangleRun::left_diagonal(d, dim);
        let row = TriangleRun::horizontal(dim - d - 1);

        let run = |face, run, reversed| AdjacentRun {
            face,
            run,
            reversed,
        };
        match self.face {
            F => [run(R, left, false), run(L, right, true), run(D, row, false)],
            R => [run(L, left, false), run(F, right, true), run(D, left, false)],
            L => [run(F, left, true), run(R, right, false), run(D, right, false)],
            D => [run(F, row, false), run(L, row, false), run(R, row, false)],
        }
    }

    /// Returns every slot that turns with this layer: the whole face for the
    /// outermost layer, and then the runs on the neighboring faces.
    pub fn layer_slots(self, layer_count: u8) -> Vec<(PyraminxFace, usize)> {
        let dim = layer_count as usize;
        let own_face = (self.depth == 0)
            .then_some(self.face)
            .into_iter()
            .flat_map(|face| (0..dim * dim).map(move |index| (face, index)));
        let runs = self
            .adjacent_runs(layer_count)
            .into_iter()
            .flat_map(|adj| adj.run.indices().map(move |index| (adj.face, index)));
        own_face.chain(runs).collect()
    }
}
