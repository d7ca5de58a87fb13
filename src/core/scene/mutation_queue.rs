//=========================================================================
// Mutation Queue
//=========================================================================
//
// Queue for deferred structural changes to the scene tree.
//
// Component hooks queue mutations here during traversal. The scene tree
// applies the queue after each traversal pass completes, so slot arrays
// are never modified while they are being iterated.
//
//=========================================================================

//=== Internal Dependencies ===============================================

use super::SceneObjectKey;
use crate::core::component::Component;

//=== Mutation ============================================================

/// A structural change applied at the pass boundary.
///
/// Mutations name their target by key and are applied best-effort in FIFO
/// order: a mutation whose target died earlier in the queue is logged and
/// skipped, never an error.
pub enum Mutation {
    /// Attach a behavior to the lowest free component slot of `object`.
    AttachComponent {
        object: SceneObjectKey,
        behavior: Box<dyn Component>,
    },

    /// Empty the component slot `slot` of `object`.
    DetachComponent {
        object: SceneObjectKey,
        slot: usize,
    },

    /// Flip the enable gate of the component in `slot` of `object`.
    SetComponentEnabled {
        object: SceneObjectKey,
        slot: usize,
        enabled: bool,
    },

    /// Create a new child object under `parent`.
    SpawnChild { parent: SceneObjectKey },

    /// Destroy `object` and its entire subtree.
    Despawn { object: SceneObjectKey },

    /// Flip the master gate of `object`.
    SetActive {
        object: SceneObjectKey,
        active: bool,
    },

    /// Flip the child-processing gate of `object`.
    SetProcessChildren {
        object: SceneObjectKey,
        process: bool,
    },
}

impl std::fmt::Debug for Mutation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AttachComponent { object, .. } => {
                write!(f, "AttachComponent {{ object: {:?} }}", object)
            }
            Self::DetachComponent { object, slot } => {
                write!(f, "DetachComponent {{ object: {:?}, slot: {} }}", object, slot)
            }
            Self::SetComponentEnabled {
                object,
                slot,
                enabled,
            } => write!(
                f,
                "SetComponentEnabled {{ object: {:?}, slot: {}, enabled: {} }}",
                object, slot, enabled
            ),
            Self::SpawnChild { parent } => {
                write!(f, "SpawnChild {{ parent: {:?} }}", parent)
            }
            Self::Despawn { object } => write!(f, "Despawn {{ object: {:?} }}", object),
            Self::SetActive { object, active } => {
                write!(f, "SetActive {{ object: {:?}, active: {} }}", object, active)
            }
            Self::SetProcessChildren { object, process } => write!(
                f,
                "SetProcessChildren {{ object: {:?}, process: {} }}",
                object, process
            ),
        }
    }
}

//=== Mutation Queue ======================================================

/// Queue for structural scene changes.
///
/// Hooks queue mutations here during traversal via
/// [`crate::core::component::HookContext::mutations`]. The scene tree
/// drains the queue once after each update/draw pass; mutations queued
/// while the drain itself runs (for example by a `start` hook of a freshly
/// attached component) wait for the next pass boundary.
pub struct MutationQueue {
    queue: Vec<Mutation>,
}

impl MutationQueue {
    /// Creates a new empty mutation queue.
    pub fn new() -> Self {
        Self { queue: Vec::new() }
    }

    /// Queues a mutation to be applied at the next pass boundary.
    pub fn push(&mut self, mutation: Mutation) {
        self.queue.push(mutation);
    }

    /// Returns an iterator over the queued mutations.
    pub fn iter(&self) -> impl Iterator<Item = &Mutation> {
        self.queue.iter()
    }

    /// Returns true if the queue is empty.
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Returns the number of queued mutations.
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    /// Clears all queued mutations without applying them.
    pub fn clear(&mut self) {
        self.queue.clear()
    }

    /// Takes all queued mutations, leaving the queue empty.
    ///
    /// Used by the scene tree to apply the queue at the pass boundary.
    pub fn take(&mut self) -> Vec<Mutation> {
        std::mem::take(&mut self.queue)
    }
}

impl Default for MutationQueue {
    fn default() -> Self {
        Self::new()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
