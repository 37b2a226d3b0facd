//! Planning the final approach of a released layer to a whole turn.

use cgmath::Deg;

/// Which multiple to prefer when an angle is exactly halfway between two.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TieBreak {
    /// Prefer the multiple with the smaller magnitude.
    Lower,
    /// Prefer the multiple with the larger magnitude.
    Higher,
}

/// Steps that bring a layer from its current angle to the nearest whole
/// turn.
///
/// A controller applies `step` to the angle `steps` times (typically once per
/// frame), then applies `last_step`, which lands exactly on `target`.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SnapPlan {
    /// Nearest multiple of the turn unit.
    pub target: Deg<f32>,
    /// Number of whole steps to take before the last one.
    pub steps: u32,
    /// Signed size of each whole step.
    pub step: Deg<f32>,
    /// Signed size of the final, partial step.
    pub last_step: Deg<f32>,
}

impl SnapPlan {
    /// Plans the approach from `current` to the nearest multiple of
    /// `turn_unit`, moving at most `step` (a positive angle) at a time.
    ///
    /// A non-positive `step` plans a single jump to the target.
    pub fn toward_nearest(
        current: Deg<f32>,
        turn_unit: Deg<f32>,
        step: Deg<f32>,
        tie_break: TieBreak,
    ) -> Self {
        let sign = if current.0 >= 0.0 { 1.0 } else { -1.0 };
        let alpha = current.0.abs();

        let lower = turn_unit.0 * (alpha / turn_unit.0).floor();
        let upper = turn_unit.0 * (alpha / turn_unit.0).ceil();
        let lower_delta = alpha - lower;
        let upper_delta = upper - alpha;

        let prefer_lower = match tie_break {
            TieBreak::Lower => lower_delta <= upper_delta,
            TieBreak::Higher => lower_delta < upper_delta,
        };
        let (target, delta, direction) = if prefer_lower {
            (lower, lower_delta, -sign)
        } else {
            (upper, upper_delta, sign)
        };

        let steps = if step.0 > 0.0 {
            (delta / step.0).floor() as u32
        } else {
            0
        };
        let step = step.0.max(0.0);

        Self {
            target: Deg(target * sign),
            steps,
            step: Deg(direction * step),
            last_step: Deg(direction * (delta - step * steps as f32)),
        }
    }

    /// Returns the absolute angles a controller should pass to
    /// `rotate_layer()`, one per frame, starting from `current`.
    ///
    /// The last angle is always exactly `target`.
    pub fn angles(self, current: Deg<f32>) -> impl Iterator<Item = Deg<f32>> {
        (1..=self.steps)
            .map(move |i| current + self.step * i as f32)
            .chain(std::iter::once(self.target))
    }
}

#[cfg(test)]
mod tests {
    use itertools::Itertools;

    use super::*;

    #[test]
    fn test_snap_forward_to_next_quarter() {
        let plan = SnapPlan::toward_nearest(Deg(80.0), Deg(90.0), Deg(3.0), TieBreak::Lower);
        assert_eq!(plan.target, Deg(90.0));
        assert_eq!(plan.steps, 3);
        assert_eq!(plan.step, Deg(3.0));
        assert_eq!(plan.last_step, Deg(1.0));
    }

    #[test]
    fn test_snap_back_for_negative_angles() {
        let plan = SnapPlan::toward_nearest(Deg(-130.0), Deg(120.0), Deg(3.0), TieBreak::Higher);
        assert_eq!(plan.target, Deg(-120.0));
        assert_eq!(plan.steps, 3);
        assert_eq!(plan.step, Deg(3.0));
        assert_eq!(plan.last_step, Deg(1.0));
    }

    #[test]
    fn test_snap_tie_break() {
        let lower = SnapPlan::toward_nearest(Deg(45.0), Deg(90.0), Deg(5.0), TieBreak::Lower);
        assert_eq!(lower.target, Deg(0.0));
        let higher = SnapPlan::toward_nearest(Deg(60.0), Deg(120.0), Deg(5.0), TieBreak::Higher);
        assert_eq!(higher.target, Deg(120.0));
    }

    #[test]
    fn test_snap_angles_end_on_target() {
        let current = Deg(100.0);
        let plan = SnapPlan::toward_nearest(current, Deg(90.0), Deg(4.0), TieBreak::Lower);
        let angles = plan.angles(current).collect_vec();
        assert_eq!(angles, [Deg(96.0), Deg(92.0), Deg(90.0)]);

        let already_there =
            SnapPlan::toward_nearest(Deg(180.0), Deg(90.0), Deg(4.0), TieBreak::Lower);
        assert_eq!(already_there.angles(Deg(180.0)).collect_vec(), [Deg(180.0)]);
    }
}
