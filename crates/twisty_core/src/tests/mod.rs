use std::collections::HashSet;

use cgmath::Quaternion;

use crate::{BorderIndicator, Facelet, Presentation};

mod pyraminx;

/// Command sent to a presentation.
#[derive(Debug, Clone, PartialEq)]
enum Command<F> {
    Attach(Facelet),
    Detach(Facelet),
    AttachIndicator(BorderIndicator<F>),
    DetachIndicator(BorderIndicator<F>),
    ShowIndicator(BorderIndicator<F>, bool),
    Orient(Quaternion<f32>),
}

/// Presentation that records every command and tracks the rotation group.
#[derive(Debug, Clone)]
struct RecordingPresentation<F> {
    commands: Vec<Command<F>>,
    group: HashSet<Facelet>,
    visible_indicators: HashSet<BorderIndicator<F>>,
}
impl<F> Default for RecordingPresentation<F> {
    fn default() -> Self {
        Self {
            commands: vec![],
            group: HashSet::new(),
            visible_indicators: HashSet::new(),
        }
    }
}
impl<F: Copy + Eq + std::hash::Hash> RecordingPresentation<F> {
    fn last_orientation(&self) -> Option<Quaternion<f32>> {
        self.commands.iter().rev().find_map(|command| match command {
            Command::Orient(q) => Some(*q),
            _ => None,
        })
    }
}

impl<F: Copy + Eq + std::hash::Hash> Presentation<F> for RecordingPresentation<F> {
    fn attach_facelet(&mut self, facelet: Facelet) {
        assert!(self.group.insert(facelet), "{facelet} attached twice");
        self.commands.push(Command::Attach(facelet));
    }
    fn detach_facelet(&mut self, facelet: Facelet) {
        assert!(self.group.remove(&facelet), "{facelet} was not attached");
        self.commands.push(Command::Detach(facelet));
    }

    fn attach_border_indicator(&mut self, indicator: BorderIndicator<F>) {
        self.commands.push(Command::AttachIndicator(indicator));
    }
    fn detach_border_indicator(&mut self, indicator: BorderIndicator<F>) {
        self.commands.push(Command::DetachIndicator(indicator));
    }
    fn set_border_indicator_visible(&mut self, indicator: BorderIndicator<F>, visible: bool) {
        if visible {
            self.visible_indicators.insert(indicator);
        } else {
            self.visible_indicators.remove(&indicator);
        }
        self.commands.push(Command::ShowIndicator(indicator, visible));
    }

    fn set_rotation_group_orientation(&mut self, orientation: Quaternion<f32>) {
        self.commands.push(Command::Orient(orientation));
    }
}
