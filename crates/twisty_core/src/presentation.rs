//! Interface to the 3D presentation of a puzzle.

use cgmath::Quaternion;

use crate::Facelet;

/// Translucent surface drawn between two layers while a layer is turning.
///
/// Each turnable axis has one indicator per layer, numbered by depth.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BorderIndicator<F> {
    /// Face whose layers the indicator separates.
    pub face: F,
    /// Depth of the layer the indicator belongs to.
    pub slot: u8,
}

/// 3D presentation driven by a puzzle.
///
/// The presentation owns every transform and mesh. A puzzle only moves
/// facelets between the puzzle body and a single rotation group, orients
/// that group, and toggles border indicators.
///
/// Attaching and detaching must preserve the world transform of the object
/// being moved.
pub trait Presentation<F> {
    /// Moves a facelet from the puzzle body into the rotation group.
    fn attach_facelet(&mut self, facelet: Facelet);
    /// Moves a facelet from the rotation group back into the puzzle body.
    fn detach_facelet(&mut self, facelet: Facelet);

    /// Moves a border indicator into the rotation group.
    fn attach_border_indicator(&mut self, indicator: BorderIndicator<F>);
    /// Moves a border indicator back into the puzzle body.
    fn detach_border_indicator(&mut self, indicator: BorderIndicator<F>);
    /// Shows or hides a border indicator.
    fn set_border_indicator_visible(&mut self, indicator: BorderIndicator<F>, visible: bool);

    /// Sets the local orientation of the rotation group.
    fn set_rotation_group_orientation(&mut self, orientation: Quaternion<f32>);
}

/// Presentation that ignores every command, for puzzles with no display.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct Headless;

impl<F> Presentation<F> for Headless {
    fn attach_facelet(&mut self, _facelet: Facelet) {}
    fn detach_facelet(&mut self, _facelet: Facelet) {}

    fn attach_border_indicator(&mut self, _indicator: BorderIndicator<F>) {}
    fn detach_border_indicator(&mut self, _indicator: BorderIndicator<F>) {}
    fn set_border_indicator_visible(&mut self, _indicator: BorderIndicator<F>, _visible: bool) {}

    fn set_rotation_group_orientation(&mut self, _orientation: Quaternion<f32>) {}
}

/// Shows the indicators around the layer at `depth` and attaches the layer's
/// own indicator to the rotation group.
pub(crate) fn show_border_indicators<F: Copy>(
    presentation: &mut impl Presentation<F>,
    face: F,
    depth: u8,
    layer_count: u8,
) {
    for slot in indicator_slots(depth, layer_count) {
        presentation.set_border_indicator_visible(BorderIndicator { face, slot }, true);
    }
    presentation.attach_border_indicator(BorderIndicator { face, slot: depth });
}

/// Reverses [`show_border_indicators()`].
pub(crate) fn hide_border_indicators<F: Copy>(
    presentation: &mut impl Presentation<F>,
    face: F,
    depth: u8,
    layer_count: u8,
) {
    presentation.detach_border_indicator(BorderIndicator { face, slot: depth });
    for slot in indicator_slots(depth, layer_count) {
        presentation.set_border_indicator_visible(BorderIndicator { face, slot }, false);
    }
}

/// Returns the indicator slots on either side of the layer at `depth`.
fn indicator_slots(depth: u8, layer_count: u8) -> impl Iterator<Item = u8> {
    depth.saturating_sub(1)..=u8::min(depth + 1, layer_count - 1)
}
