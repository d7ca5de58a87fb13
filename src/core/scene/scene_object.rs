//=========================================================================
// Scene Object
//=========================================================================
//
// A node in the scene tree: gates, local transform, and the two
// fixed-capacity slot arrays (components and children).
//
// Objects are created and destroyed through the owning SceneTree; this
// type holds per-node state and slot bookkeeping only.
//
//=========================================================================

//=== External Dependencies ===============================================

use log::debug;

//=== Internal Dependencies ===============================================

use super::{SceneError, SceneObjectKey, SlotArray, MAX_CHILDREN, MAX_COMPONENTS};
use crate::core::component::Component;
use crate::core::math::Vector2;

//=== ComponentSlot =======================================================

/// An occupied component slot: the behavior plus its enable gate.
///
/// The gate lives on the slot, not the behavior, so a concrete component
/// never has to carry gating state of its own.
pub(crate) struct ComponentSlot {
    pub(crate) enabled: bool,
    pub(crate) behavior: Box<dyn Component>,
}

impl ComponentSlot {
    pub(crate) fn new(behavior: Box<dyn Component>) -> Self {
        Self {
            enabled: true,
            behavior,
        }
    }
}

//=== SceneObject =========================================================

/// A positionable node owning component slots and child slots.
///
/// The transform is purely local; traversal never composes it with
/// ancestor transforms. Gating:
///
/// - `active == false` skips this object and its entire subtree for both
///   update and draw.
/// - `process_children == false` skips the children, but this object's
///   own enabled components still run while it is active.
pub struct SceneObject {
    /// Master gate for this object and everything below it.
    pub active: bool,

    /// Secondary gate: whether child objects receive traversal calls.
    pub process_children: bool,

    /// Local position.
    pub position: Vector2,

    /// Local rotation in radians.
    pub rotation: f32,

    pub(crate) components: SlotArray<ComponentSlot, MAX_COMPONENTS>,
    pub(crate) children: SlotArray<SceneObjectKey, MAX_CHILDREN>,
    pub(crate) parent: Option<SceneObjectKey>,
}

impl SceneObject {
    //--- Construction -----------------------------------------------------

    pub(crate) fn new(parent: Option<SceneObjectKey>) -> Self {
        Self {
            active: true,
            process_children: true,
            position: Vector2::zero(),
            rotation: 0.0,
            components: SlotArray::new(),
            children: SlotArray::new(),
            parent,
        }
    }

    //--- Relationships ----------------------------------------------------

    /// Returns the key of the owning parent, or `None` on a root.
    pub fn parent(&self) -> Option<SceneObjectKey> {
        self.parent
    }

    /// Returns the child key occupying `slot`, if any.
    pub fn child_at(&self, slot: usize) -> Option<SceneObjectKey> {
        self.children.get(slot).copied()
    }

    /// Returns the number of occupied child slots.
    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    //--- Component Slots --------------------------------------------------

    /// Returns the number of occupied component slots.
    pub fn component_count(&self) -> usize {
        self.components.len()
    }

    /// Returns true if `slot` holds a component.
    pub fn has_component(&self, slot: usize) -> bool {
        self.components.is_occupied(slot)
    }

    /// Returns the enable gate of the component in `slot`, or `None` for
    /// an empty slot.
    pub fn component_enabled(&self, slot: usize) -> Option<bool> {
        self.components.get(slot).map(|component| component.enabled)
    }

    /// Sets the enable gate of the component in `slot`.
    ///
    /// Toggling a never-attached slot is a defined no-op; an index past
    /// the slot capacity is an error.
    pub fn set_component_enabled(
        &mut self,
        slot: usize,
        enabled: bool,
    ) -> Result<(), SceneError> {
        if slot >= MAX_COMPONENTS {
            return Err(SceneError::SlotOutOfRange {
                index: slot,
                capacity: MAX_COMPONENTS,
            });
        }
        match self.components.get_mut(slot) {
            Some(component) => component.enabled = enabled,
            None => debug!("Enable toggle on empty component slot {}, ignoring", slot),
        }
        Ok(())
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::component::Component;

    struct Inert;

    impl Component for Inert {}

    #[test]
    fn new_object_has_open_gates_and_empty_slots() {
        let object = SceneObject::new(None);
        assert!(object.active);
        assert!(object.process_children);
        assert_eq!(object.position, Vector2::zero());
        assert_eq!(object.rotation, 0.0);
        assert_eq!(object.component_count(), 0);
        assert_eq!(object.child_count(), 0);
        assert_eq!(object.parent(), None);
    }

    #[test]
    fn attached_component_starts_enabled() {
        let mut object = SceneObject::new(None);
        let slot = object
            .components
            .insert(ComponentSlot::new(Box::new(Inert)))
            .unwrap();
        assert_eq!(object.component_enabled(slot), Some(true));
        assert!(object.has_component(slot));
    }

    #[test]
    fn enable_toggle_on_occupied_slot_takes_effect() {
        let mut object = SceneObject::new(None);
        let slot = object
            .components
            .insert(ComponentSlot::new(Box::new(Inert)))
            .unwrap();

        object.set_component_enabled(slot, false).unwrap();
        assert_eq!(object.component_enabled(slot), Some(false));

        object.set_component_enabled(slot, true).unwrap();
        assert_eq!(object.component_enabled(slot), Some(true));
    }

    #[test]
    fn enable_toggle_on_empty_slot_is_a_noop() {
        let mut object = SceneObject::new(None);
        assert!(object.set_component_enabled(3, true).is_ok());
        assert_eq!(object.component_enabled(3), None);
    }

    #[test]
    fn enable_toggle_past_capacity_is_an_error() {
        let mut object = SceneObject::new(None);
        assert!(matches!(
            object.set_component_enabled(MAX_COMPONENTS, true),
            Err(SceneError::SlotOutOfRange { .. })
        ));
    }
}
