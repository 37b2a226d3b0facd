use cgmath::Deg;

use crate::{EngineError, FaceLabel, Facelet, FaceletStore, Presentation};

/// Facelets detached from the store while one layer is being turned.
///
/// Every facelet in the session remembers the slot it came from and is put
/// back into exactly that slot when the session closes. Any permutation
/// happens afterwards, on the store.
#[derive(Debug, Clone)]
pub(crate) struct RotationSession<L, F> {
    /// Layer being turned.
    pub layer: L,
    /// Angle most recently requested for the layer.
    pub angle: Deg<f32>,
    detached: Vec<(F, usize, Facelet)>,
}

impl<L, F: FaceLabel> RotationSession<L, F> {
    /// Detaches the facelets at `slots` from the store and attaches them to
    /// the presentation's rotation group.
    ///
    /// If any slot is empty, everything detached so far is put back and the
    /// store is left unchanged.
    pub fn open<I>(
        layer: L,
        store: &mut FaceletStore<F>,
        slots: impl IntoIterator<Item = (F, usize)>,
        presentation: &mut impl Presentation<I>,
    ) -> Result<Self, EngineError> {
        let mut session = Self {
            layer,
            angle: Deg(0.0),
            detached: vec![],
        };
        for (face, index) in slots {
            match store.take(face, index) {
                Ok(facelet) => {
                    presentation.attach_facelet(facelet);
                    session.detached.push((face, index, facelet));
                }
                Err(e) => {
                    session.close(store, presentation);
                    return Err(e);
                }
            }
        }
        Ok(session)
    }

    /// Returns the number of facelets owned by the session.
    pub fn len(&self) -> usize {
        self.detached.len()
    }

    /// Returns whether the session owns `facelet`.
    pub fn contains(&self, facelet: Facelet) -> bool {
        self.detached.iter().any(|&(_, _, f)| f == facelet)
    }

    /// Returns every facelet to the slot it was detached from.
    pub fn close<I>(self, store: &mut FaceletStore<F>, presentation: &mut impl Presentation<I>) {
        for (face, index, facelet) in self.detached {
            presentation.detach_facelet(facelet);
            store.put(face, index, facelet);
        }
    }
}
