//=========================================================================
// Scene Errors
//=========================================================================
//
// Local, recoverable failures of structural operations (spawn, attach,
// detach, slot access). Traversal itself never raises; gating is boolean
// and total.
//
//=========================================================================

//=== External Dependencies ===============================================

use thiserror::Error;

//=== Internal Dependencies ===============================================

use super::SceneObjectKey;

//=========================================================================

/// Errors returned by scene tree structural operations.
#[derive(Debug, Error)]
pub enum SceneError {
    /// Every slot in the target array is already occupied.
    ///
    /// The array is left untouched; the rejected value is dropped.
    #[error("slot capacity exceeded: all {capacity} slots are occupied")]
    CapacityExceeded { capacity: usize },

    /// A slot index past the end of the fixed-capacity array.
    #[error("slot index {index} is out of range (capacity {capacity})")]
    SlotOutOfRange { index: usize, capacity: usize },

    /// Attach at a caller-chosen index whose slot is already live.
    #[error("slot {index} is already occupied")]
    SlotOccupied { index: usize },

    /// The key names an object that is not (or no longer) in the tree.
    #[error("scene object {0:?} is not alive")]
    DeadObject(SceneObjectKey),
}
