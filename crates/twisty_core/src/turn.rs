//! Classification of a turned angle into whole turns.

use std::fmt;

use cgmath::Deg;

use crate::ANGLE_EPSILON;

/// Direction of a committed turn.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TurnDirection {
    /// Positive angle.
    Right,
    /// Negative angle.
    Left,
}
impl fmt::Display for TurnDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TurnDirection::Right => write!(f, "right"),
            TurnDirection::Left => write!(f, "left"),
        }
    }
}
impl TurnDirection {
    /// Returns the reverse direction.
    #[must_use]
    pub fn rev(self) -> Self {
        match self {
            Self::Right => Self::Left,
            Self::Left => Self::Right,
        }
    }
}

/// Number of unit turns in one direction.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TurnCount {
    /// Direction of the turns.
    pub direction: TurnDirection,
    /// Number of unit turns, reduced modulo a full rotation.
    pub turns: u32,
}

/// Result of committing a rotation session.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CommitOutcome {
    /// No session was open.
    NoSession,
    /// The layer was left at an angle that is not a whole number of turns.
    /// The store is unchanged.
    NonCanonical {
        /// Angle turned since the last commit.
        delta: Deg<f32>,
    },
    /// The layer ended where it started. The store is unchanged.
    Unchanged,
    /// The store was permuted.
    Turned(TurnCount),
}

/// Angle turned during one session, relative to the puzzle's turn unit.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub(crate) enum AngleDelta {
    /// Not a whole number of turns.
    NonCanonical,
    /// Zero.
    Zero,
    /// Nonzero whole number of turns.
    Turns(TurnCount),
}

/// Classifies an angle as a whole number of `unit` turns, reduced modulo
/// `period` (the number of turns in a full rotation).
pub(crate) fn classify_delta(delta: Deg<f32>, unit: Deg<f32>, period: u32) -> AngleDelta {
    if !delta.0.is_finite() {
        return AngleDelta::NonCanonical;
    }
    let quotient = delta.0 / unit.0;
    let rounded = quotient.round();
    if (quotient - rounded).abs() * unit.0 > ANGLE_EPSILON {
        return AngleDelta::NonCanonical;
    }
    if rounded == 0.0 {
        return AngleDelta::Zero;
    }
    let direction = if rounded > 0.0 {
        TurnDirection::Right
    } else {
        TurnDirection::Left
    };
    AngleDelta::Turns(TurnCount {
        direction,
        turns: (rounded.abs() as u32) % period,
    })
}
