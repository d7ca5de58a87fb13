//=========================================================================
// Core Systems
//
// Central home of the scene-graph core: math primitives, the component
// contract, and the scene tree with its traversal engine.
//
// Responsibilities:
// - Provide the `Vector2` transform primitive
// - Define the `Component` capability contract and its hook context
// - Own scene objects and dispatch per-frame update/draw traversals
//
// Notes:
// The core is single-threaded and synchronous. It is driven once per
// frame by an external host loop calling `SceneTree::update` and
// `SceneTree::draw`; rendering, input, and assets live entirely in the
// consuming application's concrete components.
//
//=========================================================================

//=== Public Modules ======================================================

pub mod component;
pub mod math;
pub mod scene;
