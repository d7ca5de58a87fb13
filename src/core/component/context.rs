//=========================================================================
// Hook Context
//=========================================================================
//
// Borrowed view handed to component hooks during traversal.
//
// Contains what a behavior may touch while its slot array is being
// iterated: the owner's local transform, the identity of the owner and
// its parent, and the mutation queue for deferred structural changes.
//
//=========================================================================

//=== Internal Dependencies ===============================================

use crate::core::math::Vector2;
use crate::core::scene::{MutationQueue, SceneObjectKey};

//=== HookContext =========================================================

/// Per-invocation context for component hooks.
///
/// The owning object's slot arrays are deliberately absent: structural
/// changes (attach, detach, spawn, despawn, gate flips) go through
/// [`HookContext::mutations`] and are applied after the traversal pass
/// completes, never mid-iteration.
///
/// `object` and `parent` are non-owning keys. They identify nodes for
/// queued mutations and for host-side lookups between frames; they grant
/// no direct access to other objects while the walk is in progress.
pub struct HookContext<'a> {
    /// Key of the object this component is attached to.
    pub object: SceneObjectKey,

    /// Key of the owner's parent, or `None` on a root object.
    pub parent: Option<SceneObjectKey>,

    /// The owner's local position, writable in place.
    pub position: &'a mut Vector2,

    /// The owner's local rotation in radians, writable in place.
    pub rotation: &'a mut f32,

    /// Queue for structural changes, applied at the pass boundary.
    pub mutations: &'a mut MutationQueue,
}
