use std::fmt;
use std::hash::Hash;
use std::marker::PhantomData;

use strum::{EnumCount, IntoEnumIterator};

use crate::EngineError;

/// Opaque handle to one visible sticker or triangle of a puzzle.
///
/// The engine never looks at the geometry behind a facelet. It only tracks
/// which face slot the facelet occupies and tells the presentation layer when
/// to move it in or out of the rotation group.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Facelet(pub u32);
impl fmt::Display for Facelet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Closed set of face labels for a puzzle.
///
/// The declaration order of the enum is the order in which faces are laid out
/// when a [`FaceletStore`] is constructed.
pub trait FaceLabel:
    'static + fmt::Debug + fmt::Display + Copy + Eq + Hash + EnumCount + IntoEnumIterator
{
    /// Returns the position of the face in declaration order.
    fn index(self) -> usize;
    /// Returns the one-letter symbol for the face.
    fn symbol(self) -> &'static str;
}

/// Ordered facelet slots for every face of a puzzle.
///
/// Each slot holds a facelet except while that facelet is owned by an open
/// rotation session, in which case the slot is empty.
#[derive(Clone, PartialEq, Eq)]
pub struct FaceletStore<F> {
    face_len: usize,
    faces: Box<[Box<[Option<Facelet>]>]>,
    _phantom: PhantomData<F>,
}

impl<F: FaceLabel> fmt::Debug for FaceletStore<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut map = f.debug_map();
        for face in F::iter() {
            map.entry(&face.symbol(), &self.face(face));
        }
        map.finish()
    }
}

impl<F: FaceLabel> FaceletStore<F> {
    /// Constructs a store with `face_len` slots per face, filled with
    /// sequentially numbered facelets in face order.
    pub fn new(face_len: usize) -> Self {
        let faces = F::iter()
            .map(|face| {
                let first = face.index() * face_len;
                (first..first + face_len)
                    .map(|id| Some(Facelet(id as u32)))
                    .collect()
            })
            .collect();
        Self {
            face_len,
            faces,
            _phantom: PhantomData,
        }
    }

    /// Returns the number of slots on each face.
    pub fn face_len(&self) -> usize {
        self.face_len
    }
    /// Returns the total number of facelets the store was constructed with.
    pub fn len(&self) -> usize {
        self.face_len * F::COUNT
    }
    /// Returns whether the store has no slots.
    pub fn is_empty(&self) -> bool {
        self.face_len == 0
    }

    /// Returns the slots of one face.
    pub fn face(&self, face: F) -> &[Option<Facelet>] {
        &self.faces[face.index()]
    }
    pub(crate) fn face_mut(&mut self, face: F) -> &mut [Option<Facelet>] {
        &mut self.faces[face.index()]
    }

    /// Returns the facelet in a slot, or `None` if the slot is empty or out of
    /// range.
    pub fn get(&self, face: F, index: usize) -> Option<Facelet> {
        self.face(face).get(index).copied().flatten()
    }

    /// Returns the face and index of the slot holding `facelet`, or `None` if
    /// the facelet is not in the store.
    pub fn locate(&self, facelet: Facelet) -> Option<(F, usize)> {
        F::iter().find_map(|face| {
            let index = self.face(face).iter().position(|&f| f == Some(facelet))?;
            Some((face, index))
        })
    }

    /// Returns whether every slot holds a facelet.
    pub fn is_complete(&self) -> bool {
        self.faces.iter().flat_map(|face| face.iter()).all(Option::is_some)
    }

    /// Iterates over every facelet currently in the store, in face order.
    pub fn facelets(&self) -> impl '_ + Iterator<Item = Facelet> {
        self.faces.iter().flat_map(|face| face.iter()).filter_map(|&f| f)
    }

    /// Removes the facelet from a slot, leaving it empty.
    pub(crate) fn take(&mut self, face: F, index: usize) -> Result<Facelet, EngineError> {
        self.face_mut(face)
            .get_mut(index)
            .and_then(Option::take)
            .ok_or_else(|| EngineError::EmptySlot {
                face: face.symbol(),
                index,
            })
    }

    /// Puts a facelet back into an empty slot.
    pub(crate) fn put(&mut self, face: F, index: usize, facelet: Facelet) {
        let slot = &mut self.face_mut(face)[index];
        debug_assert!(slot.is_none(), "slot {index} of face {face} is occupied");
        *slot = Some(facelet);
    }

    /// Swaps the contents of two slots, which may be on different faces.
    pub(crate) fn swap(&mut self, (face_a, index_a): (F, usize), (face_b, index_b): (F, usize)) {
        let tmp = self.faces[face_a.index()][index_a];
        self.faces[face_a.index()][index_a] = self.faces[face_b.index()][index_b];
        self.faces[face_b.index()][index_b] = tmp;
    }

    /// Reverses the order of the facelets at `indices` within one face.
    pub(crate) fn reverse_run(&mut self, face: F, indices: &[usize]) {
        let slots = self.face_mut(face);
        let n = indices.len();
        for i in 0..n / 2 {
            slots.swap(indices[i], indices[n - i - 1]);
        }
    }
}
