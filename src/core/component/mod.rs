//=========================================================================
// Component System
//=========================================================================
//
// Polymorphic behavior units attached to scene objects.
//
// Architecture:
//   SceneObject
//     └─ components: SlotArray<ComponentSlot, MAX_COMPONENTS>
//          └─ Box<dyn Component>  (behavior)
//
// Flow:
//   SceneTree::update() → gate checks → Component::update()
//
//=========================================================================

//=== Module Declarations =================================================

mod context;

//=== Public API ==========================================================

pub use context::HookContext;

//=== Hook Results ========================================================

/// Error escaping a component hook body.
///
/// Whatever goes wrong inside a concrete behavior is boxed here; the
/// traversal collects these into the frame report instead of propagating.
pub type HookError = Box<dyn std::error::Error>;

/// Result type returned by every component hook.
pub type HookResult = Result<(), HookError>;

//=== Component Trait =====================================================

/// Defines behavior attached to a single scene object.
///
/// Components are attached via [`crate::core::scene::SceneTree::attach_component`]
/// and invoked top-down during traversal. Every hook has a default no-op
/// implementation, so a concrete behavior overrides only what it needs:
///
/// ```rust
/// use arbor_engine::prelude::*;
///
/// struct Spinner {
///     speed: f32,
/// }
///
/// impl Component for Spinner {
///     fn update(&mut self, ctx: &mut HookContext, dt: f32) -> HookResult {
///         *ctx.rotation += self.speed * dt;
///         Ok(())
///     }
/// }
/// ```
///
/// # Gating
///
/// A hook only runs while its slot is enabled and every ancestor object is
/// active; a disabled component is skipped silently. Hooks must not assume
/// any ordering relative to sibling components beyond ascending slot index.
///
/// # Errors
///
/// A hook returning `Err` never aborts the traversal. The failure is
/// recorded in the tree's [`crate::core::scene::FrameReport`] together
/// with the owning object, slot index, and phase, and the walk continues.
pub trait Component {
    /// Called exactly once, when the component is attached to its object.
    fn start(&mut self, _ctx: &mut HookContext) -> HookResult {
        Ok(())
    }

    /// Called once per update traversal while enabled and active.
    fn update(&mut self, _ctx: &mut HookContext, _dt: f32) -> HookResult {
        Ok(())
    }

    /// Called once per draw traversal, under the same gating as `update`.
    fn draw(&mut self, _ctx: &mut HookContext) -> HookResult {
        Ok(())
    }
}
