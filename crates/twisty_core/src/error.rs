use thiserror::Error;

/// Error produced when a puzzle operation is called with invalid arguments.
///
/// Every operation that returns this error checks its arguments before
/// touching any state, so the puzzle is unchanged after an error.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// Layer count outside the supported range
    #[error(
        "layer count {0} is out of range {min}..={max}",
        min = crate::MIN_LAYER_COUNT,
        max = crate::MAX_LAYER_COUNT,
    )]
    LayerCountOutOfRange(u8),
    /// Layer depth not less than the layer count
    #[error("layer depth {depth} is out of range for a puzzle with {layer_count} layers")]
    DepthOutOfRange {
        /// Requested depth.
        depth: u8,
        /// Number of layers of the puzzle.
        layer_count: u8,
    },
    /// Angle is NaN or infinite
    #[error("angle for {layer} is not finite")]
    NonFiniteAngle {
        /// Layer that was requested.
        layer: String,
    },
    /// Another layer is already being rotated
    ///
    /// Only one rotation session may be open at a time. The open session
    /// must be committed before a different layer can be turned.
    #[error("cannot rotate {requested} while {open} is being rotated")]
    SessionBusy {
        /// Layer of the session that is currently open.
        open: String,
        /// Layer that was requested.
        requested: String,
    },
    /// Facelet slot is empty because its facelet is detached
    ///
    /// Sessions only open on a complete store, so this indicates a broken
    /// internal invariant rather than a bad argument.
    #[error("slot {index} of face {face} is empty")]
    EmptySlot {
        /// Face name.
        face: &'static str,
        /// Index within the face.
        index: usize,
    },
}
