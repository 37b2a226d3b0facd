//! Facelet state engine for interactive twisty puzzles.
//!
//! Each puzzle keeps an ordered store of opaque [`Facelet`] handles per face
//! and keeps it synchronized with a 3D presentation that it drives through
//! the [`Presentation`] trait. A turn is performed in two steps:
//!
//! 1. `rotate_layer()` is called any number of times while the layer is being
//!    dragged. The first call detaches the layer's facelets into a rotation
//!    group; later calls only update the group's angle.
//! 2. `fix_change()` / `fix_changes()` returns the facelets to the store and,
//!    if the net angle is a whole number of turns, permutes the store to
//!    match.

pub mod cube;
mod error;
mod facelet;
mod presentation;
pub mod pyraminx;
mod session;
mod snap;
mod turn;

#[cfg(test)]
mod tests;

pub use prelude::*;

/// Prelude of common imports.
pub mod prelude {
    pub use crate::cube::{Cube, CubeFace, CubeFaceletInfo, CubeLayer, PivotFace};
    pub use crate::error::EngineError;
    pub use crate::facelet::{Facelet, FaceLabel, FaceletStore};
    pub use crate::presentation::{BorderIndicator, Headless, Presentation};
    pub use crate::pyraminx::{Pyraminx, PyraminxFace, PyraminxLayer, TriangleInfo};
    pub use crate::snap::{SnapPlan, TieBreak};
    pub use crate::turn::{CommitOutcome, TurnCount, TurnDirection};
}

/// Minimum number of layers along each edge of a puzzle.
pub const MIN_LAYER_COUNT: u8 = 2;
/// Maximum number of layers along each edge of a puzzle.
pub const MAX_LAYER_COUNT: u8 = 17;

/// Tolerance, in degrees, when deciding whether an angle is a whole number of
/// turns.
pub const ANGLE_EPSILON: f32 = 0.001;
