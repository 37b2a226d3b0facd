//! Pyraminx of any size.

use std::fmt;

use cgmath::{Deg, InnerSpace, One, Quaternion, Rad, Rotation, Rotation3, Vector3};
use strum::{EnumCount, EnumIter};

use crate::presentation::{hide_border_indicators, show_border_indicators};
use crate::session::RotationSession;
use crate::snap::{SnapPlan, TieBreak};
use crate::turn::{AngleDelta, CommitOutcome, classify_delta};
use crate::{EngineError, FaceLabel, Facelet, FaceletStore, Headless, Presentation};

mod commit;
mod geometry;
mod kernel;
pub mod touch;

pub use kernel::{AdjacentRun, RunIndices, RunKind, TriangleRun};

/// Angle of one third of a turn.
pub const TURN_UNIT: Deg<f32> = Deg(120.0);
/// Number of third turns in a full rotation.
pub const TURNS_PER_ROTATION: u32 = 3;

/// Face of a pyraminx.
///
/// Facelet ids are allocated in declaration order.
#[derive(EnumIter, EnumCount, Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PyraminxFace {
    /// Front.
    F,
    /// Left.
    L,
    /// Right.
    R,
    /// Down.
    D,
}
impl fmt::Display for PyraminxFace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
impl FaceLabel for PyraminxFace {
    fn index(self) -> usize {
        self as usize
    }
    fn symbol(self) -> &'static str {
        match self {
            PyraminxFace::F => "F",
            PyraminxFace::L => "L",
            PyraminxFace::R => "R",
            PyraminxFace::D => "D",
        }
    }
}

/// Layer of a pyraminx, parallel to a face.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PyraminxLayer {
    /// Face the layer is parallel to.
    pub face: PyraminxFace,
    /// Distance from the face; 0 is the face itself and `dim - 1` is the
    /// opposite tip.
    pub depth: u8,
}
impl fmt::Display for PyraminxLayer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}[{}]", self.face, self.depth)
    }
}
impl PyraminxLayer {
    /// Constructs a layer.
    pub fn new(face: PyraminxFace, depth: u8) -> Self {
        Self { face, depth }
    }
}

/// Location of a triangle in the store of a pyraminx.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TriangleInfo {
    /// Face.
    pub face: PyraminxFace,
    /// Index within the face.
    pub index: usize,
    /// Left diagonal containing the triangle, counted from the left edge.
    pub left_diagonal: u8,
    /// Right diagonal containing the triangle, counted from the right edge.
    pub right_diagonal: u8,
    /// Row containing the triangle, counted from the bottom edge.
    pub horizontal: u8,
}

/// Frame a rotation session turns in, fixed when the session opens.
#[derive(Debug, Copy, Clone, PartialEq)]
struct SessionFrame {
    /// Orientation of the rotation group when the session opened.
    base: Quaternion<f32>,
    /// Turning axis in the rotation group's frame at `base`.
    local_axis: Vector3<f32>,
}

/// Pyraminx whose facelet store follows a 3D presentation.
///
/// Unlike [`crate::Cube`], angles are relative to the start of the current
/// rotation session. The rotation group keeps its orientation between
/// sessions, so each session turns relative to where the last one left it.
#[derive(Debug, Clone)]
pub struct Pyraminx<P = Headless> {
    layer_count: u8,
    store: FaceletStore<PyraminxFace>,
    session: Option<RotationSession<PyraminxLayer, PyraminxFace>>,
    frame: SessionFrame,
    group_orientation: Quaternion<f32>,
    presentation: P,
}

impl Pyraminx {
    /// Constructs a solved pyraminx with no presentation.
    pub fn new(layer_count: u8) -> Result<Self, EngineError> {
        Self::with_presentation(layer_count, Headless)
    }
}

impl<P: Presentation<PyraminxFace>> Pyraminx<P> {
    /// Constructs a solved pyraminx that drives `presentation`.
    ///
    /// Facelets are numbered face by face in the order F, L, R, D, and row by
    /// row from the apex within each face.
    pub fn with_presentation(layer_count: u8, presentation: P) -> Result<Self, EngineError> {
        if !(crate::MIN_LAYER_COUNT..=crate::MAX_LAYER_COUNT).contains(&layer_count) {
            return Err(EngineError::LayerCountOutOfRange(layer_count));
        }
        let dim = layer_count as usize;
        Ok(Self {
            layer_count,
            store: FaceletStore::new(dim * dim),
            session: None,
            frame: SessionFrame {
                base: Quaternion::one(),
                local_axis: Vector3::unit_z(),
            },
            group_orientation: Quaternion::one(),
            presentation,
        })
    }

    /// Returns the number of layers parallel to each face.
    pub fn layer_count(&self) -> u8 {
        self.layer_count
    }
    /// Returns the facelet store.
    ///
    /// While a layer is being rotated, the slots of its facelets are empty.
    pub fn store(&self) -> &FaceletStore<PyraminxFace> {
        &self.store
    }
    /// Returns every facelet currently in the store, in face order.
    pub fn facelets(&self) -> impl '_ + Iterator<Item = Facelet> {
        self.store.facelets()
    }
    /// Returns the presentation.
    pub fn presentation(&self) -> &P {
        &self.presentation
    }
    /// Returns the presentation mutably.
    pub fn presentation_mut(&mut self) -> &mut P {
        &mut self.presentation
    }

    /// Returns the layer being rotated, if any.
    pub fn active_layer(&self) -> Option<PyraminxLayer> {
        self.session.as_ref().map(|s| s.layer)
    }
    /// Returns the number of facelets detached for the layer being rotated.
    pub fn detached_count(&self) -> usize {
        self.session.as_ref().map_or(0, |s| s.len())
    }
    /// Returns whether `facelet` is detached for the layer being rotated.
    pub fn is_detached(&self, facelet: Facelet) -> bool {
        self.session.as_ref().is_some_and(|s| s.contains(facelet))
    }
    /// Returns the angle the current layer has turned since its session
    /// opened, or zero if no layer is being rotated.
    pub fn current_rotation_angle(&self) -> Deg<f32> {
        self.session.as_ref().map_or(Deg(0.0), |s| s.angle)
    }
    /// Returns the orientation of the rotation group.
    pub fn group_orientation(&self) -> Quaternion<f32> {
        self.group_orientation
    }

    /// Returns the location of a triangle in the store, or `None` if the
    /// triangle is not part of this pyraminx or is currently detached.
    pub fn triangle_info(&self, facelet: Facelet) -> Option<TriangleInfo> {
        let (face, index) = self.store.locate(facelet)?;
        let row = index.isqrt();
        let pos = index - row * row;
        Some(TriangleInfo {
            face,
            index,
            left_diagonal: (pos / 2) as u8,
            right_diagonal: (row - pos.div_ceil(2)) as u8,
            horizontal: (self.layer_count as usize - row - 1) as u8,
        })
    }

    /// Sets the angle of a layer relative to the start of its rotation
    /// session, detaching its facelets first if no layer is being rotated.
    ///
    /// # Errors
    ///
    /// Returns an error without changing anything if the depth is out of
    /// range, if `angle` is not finite, or if a different layer is being
    /// rotated.
    pub fn rotate_layer(
        &mut self,
        layer: PyraminxLayer,
        angle: Deg<f32>,
    ) -> Result<(), EngineError> {
        if layer.depth >= self.layer_count {
            return Err(EngineError::DepthOutOfRange {
                depth: layer.depth,
                layer_count: self.layer_count,
            });
        }
        if !angle.0.is_finite() {
            return Err(EngineError::NonFiniteAngle {
                layer: layer.to_string(),
            });
        }
        if let Some(open) = &self.session
            && open.layer != layer
        {
            return Err(EngineError::SessionBusy {
                open: open.layer.to_string(),
                requested: layer.to_string(),
            });
        }

        if self.session.is_none() {
            let slots = layer.layer_slots(self.layer_count);
            let session =
                RotationSession::open(layer, &mut self.store, slots, &mut self.presentation)?;

            // Express the face's axis in the group's current frame.
            let base = self.group_orientation;
            self.frame = SessionFrame {
                base,
                local_axis: (base.invert() * layer.face.axis()).normalize(),
            };
            let PyraminxLayer { face, depth } = layer;
            show_border_indicators(&mut self.presentation, face, depth, self.layer_count);
            log::trace!("detached {} facelets for {layer}", session.len());
            self.session = Some(session);
        }

        let SessionFrame { base, local_axis } = self.frame;
        self.group_orientation = base * Quaternion::from_axis_angle(local_axis, Rad::from(angle));
        self.presentation
            .set_rotation_group_orientation(self.group_orientation);

        if let Some(session) = &mut self.session {
            session.angle = angle;
        }
        Ok(())
    }

    /// Ends the current rotation session and permutes the store if the layer
    /// turned a whole number of third turns.
    pub fn fix_changes(&mut self) -> CommitOutcome {
        let Some(session) = self.session.take() else {
            log::trace!("nothing to commit");
            return CommitOutcome::NoSession;
        };
        let layer = session.layer;
        let angle = session.angle;

        let PyraminxLayer { face, depth } = layer;
        hide_border_indicators(&mut self.presentation, face, depth, self.layer_count);
        session.close(&mut self.store, &mut self.presentation);

        match classify_delta(angle, TURN_UNIT, TURNS_PER_ROTATION) {
            AngleDelta::NonCanonical => {
                log::info!("{layer} left at {angle:?}; no change");
                CommitOutcome::NonCanonical { delta: angle }
            }
            AngleDelta::Zero => CommitOutcome::Unchanged,
            AngleDelta::Turns(turns) => {
                log::debug!("{layer}: {angle:?}, {} x{}", turns.direction, turns.turns);
                commit::apply_turns(&mut self.store, layer, self.layer_count, turns);
                CommitOutcome::Turned(turns)
            }
        }
    }

    /// Turns a layer by a whole number of third turns and commits it.
    ///
    /// # Errors
    ///
    /// Returns an error without changing anything if the depth is out of
    /// range or if a layer is already being rotated.
    pub fn turn_layer(
        &mut self,
        layer: PyraminxLayer,
        third_turns: i32,
    ) -> Result<CommitOutcome, EngineError> {
        if let Some(open) = &self.session {
            return Err(EngineError::SessionBusy {
                open: open.layer.to_string(),
                requested: layer.to_string(),
            });
        }
        self.rotate_layer(layer, TURN_UNIT * third_turns as f32)?;
        Ok(self.fix_changes())
    }

    /// Plans the approach of the layer being rotated to the nearest third
    /// turn, moving at most `step` per frame.
    pub fn snap_plan(&self, step: Deg<f32>) -> SnapPlan {
        SnapPlan::toward_nearest(self.current_rotation_angle(), TURN_UNIT, step, TieBreak::Higher)
    }
}
