//=========================================================================
// Prelude
//=========================================================================
//
// Convenience module that re-exports commonly used types and traits.
//
// Usage:
//   use arbor_engine::prelude::*;
//
//=========================================================================

//=== Public API ==========================================================

// Math primitives
pub use crate::core::math::{DegenerateVectorError, Vector2};

// Component contract
pub use crate::core::component::{Component, HookContext, HookError, HookResult};

// Scene tree
pub use crate::core::scene::{
    FrameError, FrameReport, HookPhase, Mutation, MutationQueue, SceneError, SceneObject,
    SceneObjectKey, SceneTree, MAX_CHILDREN, MAX_COMPONENTS,
};
