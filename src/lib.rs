//=========================================================================
// Arbor Engine — Library Root
//
// This crate defines the public API surface of the Arbor scene core.
//
// Responsibilities:
// - Expose the scene tree (`SceneTree`) and its traversal entry points
// - Expose the component contract (`Component`) and math primitives
// - Keep the crate a pure in-process library: no windowing, no renderer,
//   no frame loop of its own
//
// Typical usage:
// ```no_run
// use arbor_engine::prelude::*;
//
// struct Pulse;
// impl Component for Pulse {}
//
// fn main() {
//     let mut tree = SceneTree::new();
//     let root = tree.spawn();
//     tree.attach_component(root, Box::new(Pulse)).unwrap();
//
//     // driven by the host loop, once per frame:
//     tree.update(root, 1.0 / 60.0);
//     tree.draw(root);
// }
// ```
//
//=========================================================================

//--- Public Modules ------------------------------------------------------
//
// `core` contains the scene systems themselves (math, components, the
// scene tree). It is exposed publicly for engine-level extensibility,
// but normal application code will mostly use the prelude.
//
pub mod core;

//--- Prelude -------------------------------------------------------------
//
// Re-exports the common API surface so applications can bring the whole
// core in with a single `use arbor_engine::prelude::*;`.
//
pub mod prelude;

//--- Public Exports ------------------------------------------------------
//
// The scene tree and component contract are the main entry points; they
// are re-exported here so users can `use arbor_engine::SceneTree;`
// without knowing the internal module structure.
//
pub use crate::core::component::Component;
pub use crate::core::scene::{SceneObject, SceneObjectKey, SceneTree};
