//=========================================================================
// Scene System
//=========================================================================
//
// The scene tree: positionable objects carrying components and children,
// traversed once per frame.
//
// Architecture:
//   SceneTree
//     ├─ objects: SlotMap<SceneObjectKey, SceneObject>
//     ├─ mutations: MutationQueue   (deferred structural changes)
//     └─ report: FrameReport        (hook errors, drained per frame)
//
// Flow:
//   update(root, dt) → gate checks → Component::update() → flush mutations
//   draw(root)       → gate checks → Component::draw()   → flush mutations
//
//=========================================================================

//=== Module Declarations =================================================

mod error;
mod frame_report;
mod mutation_queue;
mod scene_object;
mod scene_tree;
mod slot_array;

//=== Public API ==========================================================

pub use error::SceneError;
pub use frame_report::{FrameError, FrameReport, HookPhase};
pub use mutation_queue::{Mutation, MutationQueue};
pub use scene_object::SceneObject;
pub use scene_tree::{SceneObjectKey, SceneTree};
pub use slot_array::SlotArray;

//=== Capacities ==========================================================

/// Maximum number of component slots per scene object.
pub const MAX_COMPONENTS: usize = 64;

/// Maximum number of child slots per scene object.
pub const MAX_CHILDREN: usize = 256;
