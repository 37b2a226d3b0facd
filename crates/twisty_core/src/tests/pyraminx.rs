use cgmath::{Deg, InnerSpace, One, Quaternion, Rad, Rotation3, Vector2};
use itertools::Itertools;
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use strum::IntoEnumIterator;

use super::RecordingPresentation;
use crate::pyraminx::touch::{DragDirection, drag_direction, layer_for_drag};
use crate::*;

fn solved(dim: u8) -> FaceletStore<PyraminxFace> {
    Pyraminx::new(dim).unwrap().store().clone()
}

fn third_turn(direction: TurnDirection) -> TurnCount {
    TurnCount {
        direction,
        turns: 1,
    }
}

fn assert_quaternion_eq(a: Quaternion<f32>, b: Quaternion<f32>) {
    let diff = f32::min((a - b).magnitude(), (a + b).magnitude());
    assert!(diff < 1e-4, "{a:?} != {b:?}");
}

#[test]
fn test_turn_then_inverse_restores_store() {
    for dim in MIN_LAYER_COUNT..=7 {
        for face in PyraminxFace::iter() {
            for depth in 0..dim {
                let layer = PyraminxLayer::new(face, depth);
                let mut pyraminx = Pyraminx::new(dim).unwrap();
                pyraminx.turn_layer(layer, 1).unwrap();
                assert_ne!(pyraminx.store(), &solved(dim), "{layer} with {dim} layers");
                pyraminx.turn_layer(layer, -1).unwrap();
                assert_eq!(pyraminx.store(), &solved(dim), "{layer} with {dim} layers");
            }
        }
    }
}

#[test]
fn test_three_third_turns_close() {
    for dim in [2, 3, 4] {
        for face in PyraminxFace::iter() {
            for depth in 0..dim {
                let layer = PyraminxLayer::new(face, depth);
                let mut pyraminx = Pyraminx::new(dim).unwrap();
                for _ in 0..3 {
                    assert_eq!(
                        pyraminx.turn_layer(layer, 1),
                        Ok(CommitOutcome::Turned(third_turn(TurnDirection::Right))),
                    );
                }
                assert_eq!(pyraminx.store(), &solved(dim), "{layer}");
            }
        }
    }
}

#[test]
fn test_two_thirds_equal_one_third_back() {
    let layer = PyraminxLayer::new(PyraminxFace::L, 0);
    let mut twice = Pyraminx::new(4).unwrap();
    twice.turn_layer(layer, 2).unwrap();
    let mut once = Pyraminx::new(4).unwrap();
    once.turn_layer(layer, -1).unwrap();
    assert_eq!(twice.store(), once.store());

    let mut full = Pyraminx::new(4).unwrap();
    assert_eq!(
        full.turn_layer(layer, -3),
        Ok(CommitOutcome::Turned(TurnCount {
            direction: TurnDirection::Left,
            turns: 0,
        })),
    );
    assert_eq!(full.store(), &solved(4));
}

#[test]
fn test_front_tip_turn() {
    let mut pyraminx = Pyraminx::new(3).unwrap();
    pyraminx.rotate_layer(PyraminxLayer::new(PyraminxFace::F, 0), Deg(120.0)).unwrap();
    assert_eq!(
        pyraminx.fix_changes(),
        CommitOutcome::Turned(third_turn(TurnDirection::Right)),
    );
    let left = |i: u32| Some(Facelet(9 + i));
    assert_eq!(
        [0, 2, 1, 5, 4].map(|i| pyraminx.store().get(PyraminxFace::R, i)),
        [8, 7, 3, 2, 0].map(left),
    );
    assert!(pyraminx.store().is_complete());
}

#[test]
fn test_non_multiple_angle_is_a_no_op() {
    let mut pyraminx = Pyraminx::new(3).unwrap();
    pyraminx.rotate_layer(PyraminxLayer::new(PyraminxFace::D, 1), Deg(60.0)).unwrap();
    assert_eq!(
        pyraminx.fix_changes(),
        CommitOutcome::NonCanonical { delta: Deg(60.0) },
    );
    assert_eq!(pyraminx.store(), &solved(3));
    assert_eq!(pyraminx.current_rotation_angle(), Deg(0.0));
}

#[test]
fn test_session_owns_detached_facelets() {
    let mut pyraminx = Pyraminx::new(3).unwrap();
    let layer = PyraminxLayer::new(PyraminxFace::F, 0);
    let tip = pyraminx.store().get(PyraminxFace::F, 0).unwrap();

    pyraminx.rotate_layer(layer, Deg(45.0)).unwrap();
    assert_eq!(pyraminx.store().get(PyraminxFace::F, 0), None);
    assert!(pyraminx.is_detached(tip));
    assert_eq!(pyraminx.triangle_info(tip), None);
    assert_eq!(pyraminx.current_rotation_angle(), Deg(45.0));
    assert_eq!(pyraminx.facelets().count(), 4 * 9 - (9 + 3 * 5));
    assert_eq!(pyraminx.detached_count(), 9 + 3 * 5);

    pyraminx.rotate_layer(layer, Deg(0.0)).unwrap();
    assert_eq!(pyraminx.fix_changes(), CommitOutcome::Unchanged);
    assert_eq!(pyraminx.store().get(PyraminxFace::F, 0), Some(tip));
    assert_eq!(pyraminx.facelets().count(), 4 * 9);
    assert_eq!(pyraminx.detached_count(), 0);
}

#[test]
fn test_non_finite_angle_is_rejected() {
    let mut pyraminx = Pyraminx::new(3).unwrap();
    let layer = PyraminxLayer::new(PyraminxFace::R, 0);
    for angle in [f32::NAN, f32::INFINITY] {
        assert_eq!(
            pyraminx.rotate_layer(layer, Deg(angle)),
            Err(EngineError::NonFiniteAngle {
                layer: "R[0]".to_string(),
            }),
        );
        assert_eq!(pyraminx.active_layer(), None);
    }
    assert_eq!(pyraminx.group_orientation(), Quaternion::one());

    // Later turns still reach the store.
    assert_eq!(
        pyraminx.turn_layer(layer, 1),
        Ok(CommitOutcome::Turned(third_turn(TurnDirection::Right))),
    );
    assert_ne!(pyraminx.store(), &solved(3));
    pyraminx.rotate_layer(layer, Deg(30.0)).unwrap();
    assert!(pyraminx.rotate_layer(layer, Deg(f32::NEG_INFINITY)).is_err());
    assert_eq!(pyraminx.current_rotation_angle(), Deg(30.0));
    let orientation = pyraminx.group_orientation();
    assert!(orientation.s.is_finite() && orientation.v.magnitude().is_finite());
}

#[test]
fn test_invalid_arguments() {
    assert_eq!(
        Pyraminx::new(0).unwrap_err(),
        EngineError::LayerCountOutOfRange(0),
    );

    let mut pyraminx = Pyraminx::new(3).unwrap();
    let layer = PyraminxLayer::new(PyraminxFace::R, 3);
    assert_eq!(
        pyraminx.rotate_layer(layer, Deg(120.0)),
        Err(EngineError::DepthOutOfRange {
            depth: 3,
            layer_count: 3,
        }),
    );
    assert_eq!(pyraminx.fix_changes(), CommitOutcome::NoSession);

    let open = PyraminxLayer::new(PyraminxFace::R, 1);
    pyraminx.rotate_layer(open, Deg(10.0)).unwrap();
    let store = pyraminx.store().clone();
    assert_eq!(
        pyraminx.rotate_layer(PyraminxLayer::new(PyraminxFace::D, 0), Deg(10.0)),
        Err(EngineError::SessionBusy {
            open: "R[1]".to_string(),
            requested: "D[0]".to_string(),
        }),
    );
    assert!(pyraminx.turn_layer(open, 1).is_err());
    assert_eq!(pyraminx.store(), &store);
    assert_eq!(pyraminx.active_layer(), Some(open));
}

#[test]
fn test_triangle_info() {
    let pyraminx = Pyraminx::new(4).unwrap();
    let triangle = pyraminx.store().get(PyraminxFace::L, 5).unwrap();
    assert_eq!(
        pyraminx.triangle_info(triangle),
        Some(TriangleInfo {
            face: PyraminxFace::L,
            index: 5,
            left_diagonal: 0,
            right_diagonal: 1,
            horizontal: 1,
        }),
    );

    let bottom_right = pyraminx.store().get(PyraminxFace::D, 15).unwrap();
    let info = pyraminx.triangle_info(bottom_right).unwrap();
    assert_eq!(
        (info.left_diagonal, info.right_diagonal, info.horizontal),
        (3, 0, 0),
    );
}

#[test]
fn test_group_orientation_carries_over() {
    let presentation = RecordingPresentation::<PyraminxFace>::default();
    let mut pyraminx = Pyraminx::with_presentation(3, presentation).unwrap();

    let down = PyraminxLayer::new(PyraminxFace::D, 0);
    pyraminx.rotate_layer(down, Deg(120.0)).unwrap();
    pyraminx.fix_changes();
    let base = pyraminx.group_orientation();
    let expected = Quaternion::from_axis_angle(PyraminxFace::D.axis(), Rad::from(Deg(120.0)));
    assert_quaternion_eq(base, expected);

    let front = PyraminxLayer::new(PyraminxFace::F, 1);
    pyraminx.rotate_layer(front, Deg(0.0)).unwrap();
    assert_quaternion_eq(pyraminx.group_orientation(), base);

    pyraminx.rotate_layer(front, Deg(-120.0)).unwrap();
    let turn = Quaternion::from_axis_angle(PyraminxFace::F.axis(), Rad::from(Deg(-120.0)));
    assert_quaternion_eq(pyraminx.group_orientation(), turn * base);
    assert_quaternion_eq(
        pyraminx.presentation().last_orientation().unwrap(),
        turn * base,
    );
}

#[test]
fn test_presentation_follows_session() {
    let presentation = RecordingPresentation::<PyraminxFace>::default();
    let mut pyraminx = Pyraminx::with_presentation(3, presentation).unwrap();

    let layer = PyraminxLayer::new(PyraminxFace::L, 2);
    pyraminx.rotate_layer(layer, Deg(30.0)).unwrap();
    let p = pyraminx.presentation();
    assert_eq!(p.group.len(), 3);
    let visible = p.visible_indicators.iter().map(|i| i.slot).sorted().collect_vec();
    assert_eq!(visible, [1, 2]);

    pyraminx.fix_changes();
    let p = pyraminx.presentation();
    assert!(p.group.is_empty());
    assert!(p.visible_indicators.is_empty());
}

#[test]
fn test_snap_then_commit() {
    let mut pyraminx = Pyraminx::new(3).unwrap();
    let layer = PyraminxLayer::new(PyraminxFace::R, 1);
    pyraminx.rotate_layer(layer, Deg(70.0)).unwrap();

    let plan = pyraminx.snap_plan(Deg(3.0));
    assert_eq!(plan.target, Deg(120.0));
    for angle in plan.angles(Deg(70.0)) {
        pyraminx.rotate_layer(layer, angle).unwrap();
    }
    assert_eq!(pyraminx.current_rotation_angle(), Deg(120.0));
    assert_eq!(
        pyraminx.fix_changes(),
        CommitOutcome::Turned(third_turn(TurnDirection::Right)),
    );

    pyraminx.rotate_layer(layer, Deg(-60.0)).unwrap();
    assert_eq!(pyraminx.snap_plan(Deg(3.0)).target, Deg(-120.0));
}

#[test]
fn test_drag_turns_a_layer_containing_the_triangle() {
    let dim = 4;
    let pyraminx = Pyraminx::new(dim).unwrap();
    let drags = [(1.0, 0.0), (0.5, 2.0), (-0.5, 2.0)];
    for facelet in pyraminx.facelets() {
        let info = pyraminx.triangle_info(facelet).unwrap();
        for (x, y) in drags {
            let direction = drag_direction(x, y);
            let layer = layer_for_drag(info, direction);
            assert!(
                layer.layer_slots(dim).contains(&(info.face, info.index)),
                "{direction:?} on {info:?} picked {layer}",
            );
        }
    }
}

#[test]
fn test_drag_distance_sign() {
    let direction = drag_direction(-0.5, 2.0);
    assert_eq!(direction, DragDirection::R);
    assert!(direction.signed_distance(Vector2::new(-0.5, 2.0)) > 0.0);
    assert!(direction.signed_distance(Vector2::new(0.5, -2.0)) < 0.0);
}

proptest! {
    #[test]
    fn proptest_scramble_then_undo(
        dim in MIN_LAYER_COUNT..=6,
        moves in prop::collection::vec((0..4_usize, any::<u8>(), -2..=2_i32), 0..24),
    ) {
        let mut pyraminx = Pyraminx::new(dim).unwrap();
        let moves: Vec<(PyraminxLayer, i32)> = moves
            .into_iter()
            .map(|(face, depth, turns)| {
                let face = PyraminxFace::iter().nth(face).unwrap();
                (PyraminxLayer::new(face, depth % dim), turns)
            })
            .collect();
        for &(layer, turns) in &moves {
            pyraminx.turn_layer(layer, turns).unwrap();
        }
        for &(layer, turns) in moves.iter().rev() {
            pyraminx.turn_layer(layer, -turns).unwrap();
        }
        prop_assert_eq!(pyraminx.store(), &solved(dim));
    }
}
