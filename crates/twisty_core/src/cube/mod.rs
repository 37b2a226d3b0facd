//! N×N×N cube.

use std::fmt;

use cgmath::{Deg, Quaternion, Rad, Rotation3};
use strum::{EnumCount, EnumIter};

use crate::presentation::{hide_border_indicators, show_border_indicators};
use crate::session::RotationSession;
use crate::snap::{SnapPlan, TieBreak};
use crate::turn::{AngleDelta, CommitOutcome, classify_delta};
use crate::{EngineError, FaceLabel, Facelet, FaceletStore, Headless, Presentation};

mod commit;
mod kernel;
pub mod touch;

pub use kernel::{Axis, PivotKernel, SliceRun};

/// Angle of one quarter turn.
pub const TURN_UNIT: Deg<f32> = Deg(90.0);
/// Number of quarter turns in a full rotation.
pub const TURNS_PER_ROTATION: u32 = 4;

/// Face of a cube.
///
/// Facelet ids are allocated in declaration order.
#[derive(EnumIter, EnumCount, Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CubeFace {
    /// Up.
    U,
    /// Left.
    L,
    /// Back.
    B,
    /// Right.
    R,
    /// Front.
    F,
    /// Down.
    D,
}
impl fmt::Display for CubeFace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
impl FaceLabel for CubeFace {
    fn index(self) -> usize {
        self as usize
    }
    fn symbol(self) -> &'static str {
        use CubeFace::*;

        match self {
            U => "U",
            L => "L",
            B => "B",
            R => "R",
            F => "F",
            D => "D",
        }
    }
}
impl CubeFace {
    /// Returns the face on the other side of the cube.
    #[must_use]
    pub fn opposite(self) -> Self {
        use CubeFace::*;

        match self {
            U => D,
            L => R,
            B => F,
            R => L,
            F => B,
            D => U,
        }
    }

    /// Returns the full name of the face.
    pub fn name(self) -> &'static str {
        use CubeFace::*;

        match self {
            U => "Up",
            L => "Left",
            B => "Back",
            R => "Right",
            F => "Front",
            D => "Down",
        }
    }
}

/// Face from which cube layers are counted.
#[derive(EnumIter, EnumCount, Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PivotFace {
    /// Front; layers turn around the Z axis.
    F = 0,
    /// Right; layers turn around the X axis.
    R = 1,
    /// Up; layers turn around the Y axis.
    U = 2,
}
impl fmt::Display for PivotFace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.face())
    }
}
impl PivotFace {
    /// Returns the cube face.
    pub fn face(self) -> CubeFace {
        match self {
            PivotFace::F => CubeFace::F,
            PivotFace::R => CubeFace::R,
            PivotFace::U => CubeFace::U,
        }
    }
}

/// Layer of a cube, counted from a pivot face.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CubeLayer {
    /// Pivot face.
    pub face: PivotFace,
    /// Distance from the pivot face; 0 is the pivot face itself.
    pub depth: u8,
}
impl fmt::Display for CubeLayer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}[{}]", self.face, self.depth)
    }
}
impl CubeLayer {
    /// Returns the layer at `depth` counted from any face of a cube with
    /// `layer_count` layers.
    ///
    /// Layers counted from B, L, and D are re-expressed from F, R, and U.
    pub fn from_face(face: CubeFace, depth: u8, layer_count: u8) -> Self {
        let far = layer_count.saturating_sub(1).saturating_sub(depth);
        match face {
            CubeFace::F => Self::new(PivotFace::F, depth),
            CubeFace::R => Self::new(PivotFace::R, depth),
            CubeFace::U => Self::new(PivotFace::U, depth),
            CubeFace::B => Self::new(PivotFace::F, far),
            CubeFace::L => Self::new(PivotFace::R, far),
            CubeFace::D => Self::new(PivotFace::U, far),
        }
    }

    /// Constructs a layer.
    pub fn new(face: PivotFace, depth: u8) -> Self {
        Self { face, depth }
    }
}

/// Location of a facelet in the store of a cube.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CubeFaceletInfo {
    /// Face.
    pub face: CubeFace,
    /// Index within the face (`row * N + col`).
    pub index: usize,
    /// Row, counted from the top of the face.
    pub row: usize,
    /// Column, counted from the left of the face.
    pub col: usize,
}

/// Most recent call to [`Cube::rotate_layer()`].
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LastRotatedLayer {
    /// Layer.
    pub layer: CubeLayer,
    /// Absolute angle requested for the layer.
    pub angle: Deg<f32>,
}

/// Orientation bookkeeping for the layers around one pivot face.
#[derive(Debug, Clone)]
struct PivotLayers {
    /// Rotation group angle last set for each layer.
    rotations: Vec<Rad<f32>>,
    /// Absolute angle of each layer at its last commit.
    previous_angles: Vec<Deg<f32>>,
}
impl PivotLayers {
    fn new(layer_count: u8) -> Self {
        Self {
            rotations: vec![Rad(0.0); layer_count as usize],
            previous_angles: vec![Deg(0.0); layer_count as usize],
        }
    }
}

/// N×N×N cube whose facelet store follows a 3D presentation.
///
/// Layer angles are absolute: each layer remembers the angle it was left at
/// when last committed, and [`Cube::rotate_layer()`] takes the new total
/// angle rather than an increment.
#[derive(Debug, Clone)]
pub struct Cube<P = Headless> {
    layer_count: u8,
    store: FaceletStore<CubeFace>,
    layers: [PivotLayers; PivotFace::COUNT],
    session: Option<RotationSession<CubeLayer, CubeFace>>,
    last_rotated: LastRotatedLayer,
    presentation: P,
}

impl Cube {
    /// Constructs a solved cube with no presentation.
    pub fn new(layer_count: u8) -> Result<Self, EngineError> {
        Self::with_presentation(layer_count, Headless)
    }
}

impl<P: Presentation<PivotFace>> Cube<P> {
    /// Constructs a solved cube that drives `presentation`.
    ///
    /// Facelets are numbered face by face in the order U, L, B, R, F, D, and
    /// row by row from the top-left corner within each face.
    pub fn with_presentation(layer_count: u8, presentation: P) -> Result<Self, EngineError> {
        if !(crate::MIN_LAYER_COUNT..=crate::MAX_LAYER_COUNT).contains(&layer_count) {
            return Err(EngineError::LayerCountOutOfRange(layer_count));
        }
        let n = layer_count as usize;
        Ok(Self {
            layer_count,
            store: FaceletStore::new(n * n),
            layers: std::array::from_fn(|_| PivotLayers::new(layer_count)),
            session: None,
            last_rotated: LastRotatedLayer {
                layer: CubeLayer::new(PivotFace::F, 0),
                angle: Deg(0.0),
            },
            presentation,
        })
    }

    /// Returns the number of layers along each edge.
    pub fn layer_count(&self) -> u8 {
        self.layer_count
    }
    /// Returns the facelet store.
    ///
    /// While a layer is being rotated, the slots of its facelets are empty.
    pub fn store(&self) -> &FaceletStore<CubeFace> {
        &self.store
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
    pub fn active_layer(&self) -> Option<CubeLayer> {
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
    /// Returns the most recent call to [`Cube::rotate_layer()`].
    pub fn last_rotated_layer(&self) -> LastRotatedLayer {
        self.last_rotated
    }
    /// Returns the absolute angle of a layer at its last commit.
    pub fn layer_previous_angle(&self, layer: CubeLayer) -> Option<Deg<f32>> {
        self.layers[layer.face as usize]
            .previous_angles
            .get(layer.depth as usize)
            .copied()
    }

    /// Returns the location of a facelet in the store, or `None` if the
    /// facelet is not part of this cube or is currently detached.
    pub fn facelet_info(&self, facelet: Facelet) -> Option<CubeFaceletInfo> {
        let (face, index) = self.store.locate(facelet)?;
        let n = self.layer_count as usize;
        Some(CubeFaceletInfo {
            face,
            index,
            row: index / n,
            col: index % n,
        })
    }

    /// Sets the absolute angle of a layer, detaching its facelets first if no
    /// layer is being rotated.
    ///
    /// Positive angles turn the layer clockwise as seen from its pivot face,
    /// except for the deepest layer, which turns clockwise as seen from the
    /// opposite face.
    ///
    /// # Errors
    ///
    /// Returns an error without changing anything if `depth` is out of range,
    /// if `angle` is not finite, or if a different layer is being rotated.
    pub fn rotate_layer(
        &mut self,
        face: PivotFace,
        depth: u8,
        angle: Deg<f32>,
    ) -> Result<(), EngineError> {
        let layer = CubeLayer::new(face, depth);
        self.check_layer(layer)?;
        if !angle.0.is_finite() {
            return Err(EngineError::NonFiniteAngle {
                layer: layer.to_string(),
            });
        }
        let axis = face.kernel().axis.unit_vec3();

        if let Some(open) = &self.session
            && open.layer != layer
        {
            return Err(EngineError::SessionBusy {
                open: open.layer.to_string(),
                requested: layer.to_string(),
            });
        }
        if self.session.is_none() {
            // Attach relative to the orientation this layer was left in.
            let previous = self.layers[face as usize].rotations[depth as usize];
            self.presentation
                .set_rotation_group_orientation(Quaternion::from_axis_angle(axis, previous));

            let slots = face.layer_slots(depth, self.layer_count);
            let session =
                RotationSession::open(layer, &mut self.store, slots, &mut self.presentation)?;
            show_border_indicators(&mut self.presentation, face, depth, self.layer_count);
            log::trace!("detached {} facelets for {layer}", session.len());
            self.session = Some(session);
        }

        // The deepest layer is seen from the opposite face, which flips its
        // handedness.
        let sign = if depth == self.layer_count - 1 { 1.0 } else { -1.0 };
        let rad = Rad::from(angle) * sign;
        self.presentation
            .set_rotation_group_orientation(Quaternion::from_axis_angle(axis, rad));
        self.layers[face as usize].rotations[depth as usize] = rad;

        if let Some(session) = &mut self.session {
            session.angle = angle;
        }
        self.last_rotated = LastRotatedLayer { layer, angle };
        Ok(())
    }

    /// Ends the current rotation session and permutes the store if the layer
    /// turned a whole number of quarter turns since its last commit.
    ///
    /// The layer's baseline angle is updated even when the angle is not a
    /// whole number of quarter turns; the store is left unchanged in that
    /// case.
    pub fn fix_change(&mut self) -> CommitOutcome {
        let Some(session) = self.session.take() else {
            log::trace!("nothing to commit");
            return CommitOutcome::NoSession;
        };
        let layer = session.layer;
        let CubeLayer { face, depth } = layer;
        let angle = session.angle;

        hide_border_indicators(&mut self.presentation, face, depth, self.layer_count);
        session.close(&mut self.store, &mut self.presentation);

        let previous = &mut self.layers[face as usize].previous_angles[depth as usize];
        let delta = angle - *previous;
        *previous = angle;

        match classify_delta(delta, TURN_UNIT, TURNS_PER_ROTATION) {
            AngleDelta::NonCanonical => {
                log::info!("{layer} left at {delta:?}; no change");
                CommitOutcome::NonCanonical { delta }
            }
            AngleDelta::Zero => CommitOutcome::Unchanged,
            AngleDelta::Turns(turns) => {
                log::debug!("{layer}: {delta:?}, {} x{}", turns.direction, turns.turns);
                commit::apply_turns(&mut self.store, layer, self.layer_count, turns);
                CommitOutcome::Turned(turns)
            }
        }
    }

    /// Turns a layer by a whole number of quarter turns, relative to the
    /// angle it was last committed at, and commits it.
    ///
    /// Positive `quarter_turns` turn the same way as a positive angle passed
    /// to [`Cube::rotate_layer()`].
    ///
    /// # Errors
    ///
    /// Returns an error without changing anything if `depth` is out of range
    /// or if a different layer is being rotated.
    pub fn turn_layer(
        &mut self,
        face: PivotFace,
        depth: u8,
        quarter_turns: i32,
    ) -> Result<CommitOutcome, EngineError> {
        let layer = CubeLayer::new(face, depth);
        let baseline = self
            .layer_previous_angle(layer)
            .ok_or_else(|| self.depth_error(depth))?;
        self.rotate_layer(face, depth, baseline + TURN_UNIT * quarter_turns as f32)?;
        Ok(self.fix_change())
    }

    /// Plans the approach of the most recently rotated layer to the nearest
    /// quarter turn, moving at most `step` per frame.
    pub fn snap_plan(&self, step: Deg<f32>) -> SnapPlan {
        SnapPlan::toward_nearest(self.last_rotated.angle, TURN_UNIT, step, TieBreak::Lower)
    }

    fn check_layer(&self, layer: CubeLayer) -> Result<(), EngineError> {
        if layer.depth < self.layer_count {
            Ok(())
        } else {
            Err(self.depth_error(layer.depth))
        }
    }
    fn depth_error(&self, depth: u8) -> EngineError {
        EngineError::DepthOutOfRange {
            depth,
            layer_count: self.layer_count,
        }
    }
}
