//=========================================================================
// Scene Tree
//=========================================================================
//
// Arena of scene objects plus the per-frame traversal engine.
//
// Objects are stored in a slotmap and referenced by key; parent/child
// back-references are keys, never owning edges, so the ownership of every
// subtree stays with the tree itself.
//
// Traversal is a plain recursive walk. Per object:
//   1. active == false → hard short-circuit, nothing below runs
//   2. enabled components run in ascending slot order
//   3. process_children == true → recurse into active children in
//      ascending slot order
// After each pass the deferred mutation queue is applied, so hooks never
// see a slot array change under the iteration they run in.
//
//=========================================================================

//=== External Dependencies ===============================================

use log::{debug, warn};
use slotmap::{new_key_type, SlotMap};

//=== Internal Dependencies ===============================================

use super::scene_object::{ComponentSlot, SceneObject};
use super::{
    FrameError, FrameReport, HookPhase, Mutation, MutationQueue, SceneError, MAX_CHILDREN,
    MAX_COMPONENTS,
};
use crate::core::component::{Component, HookContext};

//=== Keys ================================================================

new_key_type! {
    /// Non-owning handle to a scene object in the tree's arena.
    pub struct SceneObjectKey;
}

//=== SceneTree ===========================================================

/// Owns every scene object and drives the per-frame traversal.
///
/// The host loop calls [`SceneTree::update`] and [`SceneTree::draw`] once
/// per frame on a root of its choosing, then drains
/// [`SceneTree::take_frame_errors`]. Structural operations between frames
/// go through the direct methods (`spawn_child`, `attach_component`, ...);
/// during a frame, component hooks queue the same operations as
/// [`Mutation`]s, applied when the pass completes.
///
/// # Examples
///
/// ```rust
/// use arbor_engine::prelude::*;
///
/// struct Blinker;
/// impl Component for Blinker {}
///
/// let mut tree = SceneTree::new();
/// let root = tree.spawn();
/// let child = tree.spawn_child(root).unwrap();
/// tree.attach_component(child, Box::new(Blinker)).unwrap();
///
/// tree.update(root, 1.0 / 60.0);
/// tree.draw(root);
/// assert!(tree.take_frame_errors().is_empty());
/// ```
pub struct SceneTree {
    objects: SlotMap<SceneObjectKey, SceneObject>,
    mutations: MutationQueue,
    report: FrameReport,
}

impl SceneTree {
    //--- Construction -----------------------------------------------------

    /// Creates an empty scene tree.
    pub fn new() -> Self {
        Self {
            objects: SlotMap::with_key(),
            mutations: MutationQueue::new(),
            report: FrameReport::new(),
        }
    }

    //--- Spawning ---------------------------------------------------------

    /// Creates a parentless object, typically a traversal root.
    ///
    /// The object starts active with open gates and every slot empty.
    pub fn spawn(&mut self) -> SceneObjectKey {
        let key = self.objects.insert(SceneObject::new(None));
        debug!("Spawned root object {:?}", key);
        key
    }

    /// Creates a new object in the lowest free child slot of `parent`.
    ///
    /// Fails with [`SceneError::CapacityExceeded`] once the parent holds
    /// [`MAX_CHILDREN`] children; the arena is left unchanged on failure.
    pub fn spawn_child(&mut self, parent: SceneObjectKey) -> Result<SceneObjectKey, SceneError> {
        if !self.objects.contains_key(parent) {
            return Err(SceneError::DeadObject(parent));
        }

        let child = self.objects.insert(SceneObject::new(Some(parent)));
        let slot = match self.objects.get_mut(parent) {
            Some(node) => node.children.insert(child),
            None => Err(SceneError::DeadObject(parent)),
        };

        match slot {
            Ok(slot) => {
                debug!("Spawned child {:?} under {:?} in slot {}", child, parent, slot);
                Ok(child)
            }
            Err(error) => {
                // roll the orphan back so a failed spawn leaves no trace
                self.objects.remove(child);
                Err(error)
            }
        }
    }

    /// Destroys `object` and its entire subtree.
    ///
    /// The parent's child slot is emptied first; components and child
    /// objects die with their owner, there is no independent lifetime.
    pub fn despawn(&mut self, object: SceneObjectKey) -> Result<(), SceneError> {
        let parent = self
            .objects
            .get(object)
            .ok_or(SceneError::DeadObject(object))?
            .parent;

        if let Some(parent) = parent.and_then(|key| self.objects.get_mut(key)) {
            let slot = parent
                .children
                .iter()
                .find(|(_, child)| **child == object)
                .map(|(slot, _)| slot);
            if let Some(slot) = slot {
                parent.children.remove(slot);
            }
        }

        let removed = self.despawn_subtree(object);
        debug!("Despawned {:?} ({} objects)", object, removed);
        Ok(())
    }

    fn despawn_subtree(&mut self, object: SceneObjectKey) -> usize {
        let Some(node) = self.objects.remove(object) else {
            return 0;
        };
        let mut removed = 1;
        for (_, child) in node.children.iter() {
            removed += self.despawn_subtree(*child);
        }
        removed
    }

    //--- Component Attachment ---------------------------------------------

    /// Attaches a behavior to the lowest free component slot of `object`.
    ///
    /// The slot starts enabled and the component's `start` hook runs
    /// exactly once, here. Returns the slot index.
    pub fn attach_component(
        &mut self,
        object: SceneObjectKey,
        behavior: Box<dyn Component>,
    ) -> Result<usize, SceneError> {
        let node = self
            .objects
            .get_mut(object)
            .ok_or(SceneError::DeadObject(object))?;
        let slot = node.components.insert(ComponentSlot::new(behavior))?;
        debug!("Attached component to {:?} in slot {}", object, slot);

        let Self {
            objects,
            mutations,
            report,
        } = self;
        Self::run_start(objects, mutations, report, object, slot);
        Ok(slot)
    }

    /// Attaches a behavior to a caller-chosen component slot of `object`.
    ///
    /// Same lifecycle as [`SceneTree::attach_component`]; fails when the
    /// slot is occupied or out of range.
    pub fn attach_component_at(
        &mut self,
        object: SceneObjectKey,
        slot: usize,
        behavior: Box<dyn Component>,
    ) -> Result<(), SceneError> {
        let node = self
            .objects
            .get_mut(object)
            .ok_or(SceneError::DeadObject(object))?;
        node.components
            .insert_at(slot, ComponentSlot::new(behavior))?;
        debug!("Attached component to {:?} in slot {}", object, slot);

        let Self {
            objects,
            mutations,
            report,
        } = self;
        Self::run_start(objects, mutations, report, object, slot);
        Ok(())
    }

    /// Empties a component slot, returning the detached behavior.
    ///
    /// Detaching a never-attached slot is a defined no-op returning
    /// `Ok(None)`; an index past the slot capacity is an error.
    pub fn detach_component(
        &mut self,
        object: SceneObjectKey,
        slot: usize,
    ) -> Result<Option<Box<dyn Component>>, SceneError> {
        if slot >= MAX_COMPONENTS {
            return Err(SceneError::SlotOutOfRange {
                index: slot,
                capacity: MAX_COMPONENTS,
            });
        }
        let node = self
            .objects
            .get_mut(object)
            .ok_or(SceneError::DeadObject(object))?;
        match node.components.remove(slot) {
            Some(component) => {
                debug!("Detached component from {:?} slot {}", object, slot);
                Ok(Some(component.behavior))
            }
            None => {
                debug!("Detach on empty component slot {}, ignoring", slot);
                Ok(None)
            }
        }
    }

    /// Sets the enable gate of the component in `slot` of `object`.
    pub fn set_component_enabled(
        &mut self,
        object: SceneObjectKey,
        slot: usize,
        enabled: bool,
    ) -> Result<(), SceneError> {
        self.objects
            .get_mut(object)
            .ok_or(SceneError::DeadObject(object))?
            .set_component_enabled(slot, enabled)
    }

    //--- Object Access ----------------------------------------------------

    /// Returns a reference to the object behind `key`, if alive.
    pub fn get(&self, key: SceneObjectKey) -> Option<&SceneObject> {
        self.objects.get(key)
    }

    /// Returns a mutable reference to the object behind `key`, if alive.
    pub fn get_mut(&mut self, key: SceneObjectKey) -> Option<&mut SceneObject> {
        self.objects.get_mut(key)
    }

    /// Returns true if `key` names a live object.
    pub fn contains(&self, key: SceneObjectKey) -> bool {
        self.objects.contains_key(key)
    }

    /// Returns the number of live objects in the tree.
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// Returns true if the tree holds no objects.
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    //--- Deferred Mutations -----------------------------------------------

    /// Queues a structural change for the next pass boundary.
    ///
    /// Hooks reach the same queue through their context; this entry point
    /// lets the host defer changes alongside them.
    pub fn queue_mutation(&mut self, mutation: Mutation) {
        self.mutations.push(mutation);
    }

    //--- Frame Report -----------------------------------------------------

    /// Returns the hook errors collected since the last drain.
    pub fn frame_report(&self) -> &FrameReport {
        &self.report
    }

    /// Takes all collected hook errors, leaving the report empty.
    pub fn take_frame_errors(&mut self) -> Vec<FrameError> {
        self.report.take()
    }

    //--- Update Traversal -------------------------------------------------

    /// Runs the update pass from `root`, then applies queued mutations.
    ///
    /// `dt` is the frame delta handed unchanged to every `update` hook.
    /// A dead or inactive root produces zero hook calls.
    pub fn update(&mut self, root: SceneObjectKey, dt: f32) {
        let Self {
            objects,
            mutations,
            report,
        } = self;
        Self::update_object(objects, mutations, report, root, dt);
        self.apply_mutations();
    }

    fn update_object(
        objects: &mut SlotMap<SceneObjectKey, SceneObject>,
        mutations: &mut MutationQueue,
        report: &mut FrameReport,
        key: SceneObjectKey,
        dt: f32,
    ) {
        let Some(node) = objects.get_mut(key) else {
            return;
        };
        if !node.active {
            return;
        }
        let parent = node.parent;
        let process_children = node.process_children;

        // Run update on all enabled components
        let SceneObject {
            position,
            rotation,
            components,
            ..
        } = node;
        for (slot, component) in components.iter_mut() {
            if !component.enabled {
                continue;
            }
            let mut ctx = HookContext {
                object: key,
                parent,
                position: &mut *position,
                rotation: &mut *rotation,
                mutations: &mut *mutations,
            };
            if let Err(error) = component.behavior.update(&mut ctx, dt) {
                report.push(FrameError {
                    object: key,
                    slot,
                    phase: HookPhase::Update,
                    error,
                });
            }
        }

        if !process_children {
            return;
        }

        // Run update on all active children; the arena is re-borrowed per
        // slot so recursion never aliases the parent node
        for slot in 0..MAX_CHILDREN {
            let Some(child) = objects.get(key).and_then(|node| node.child_at(slot)) else {
                continue;
            };
            if objects.get(child).is_some_and(|node| node.active) {
                Self::update_object(objects, mutations, report, child, dt);
            }
        }
    }

    //--- Draw Traversal ---------------------------------------------------

    /// Runs the draw pass from `root`, then applies queued mutations.
    ///
    /// Identical structure and gating to [`SceneTree::update`], invoking
    /// `draw` instead of `update`.
    pub fn draw(&mut self, root: SceneObjectKey) {
        let Self {
            objects,
            mutations,
            report,
        } = self;
        Self::draw_object(objects, mutations, report, root);
        self.apply_mutations();
    }

    fn draw_object(
        objects: &mut SlotMap<SceneObjectKey, SceneObject>,
        mutations: &mut MutationQueue,
        report: &mut FrameReport,
        key: SceneObjectKey,
    ) {
        let Some(node) = objects.get_mut(key) else {
            return;
        };
        if !node.active {
            return;
        }
        let parent = node.parent;
        let process_children = node.process_children;

        // Run draw on all enabled components
        let SceneObject {
            position,
            rotation,
            components,
            ..
        } = node;
        for (slot, component) in components.iter_mut() {
            if !component.enabled {
                continue;
            }
            let mut ctx = HookContext {
                object: key,
                parent,
                position: &mut *position,
                rotation: &mut *rotation,
                mutations: &mut *mutations,
            };
            if let Err(error) = component.behavior.draw(&mut ctx) {
                report.push(FrameError {
                    object: key,
                    slot,
                    phase: HookPhase::Draw,
                    error,
                });
            }
        }

        if !process_children {
            return;
        }

        // Run draw on all active children
        for slot in 0..MAX_CHILDREN {
            let Some(child) = objects.get(key).and_then(|node| node.child_at(slot)) else {
                continue;
            };
            if objects.get(child).is_some_and(|node| node.active) {
                Self::draw_object(objects, mutations, report, child);
            }
        }
    }

    //--- Internal Helpers -------------------------------------------------

    fn run_start(
        objects: &mut SlotMap<SceneObjectKey, SceneObject>,
        mutations: &mut MutationQueue,
        report: &mut FrameReport,
        object: SceneObjectKey,
        slot: usize,
    ) {
        let Some(node) = objects.get_mut(object) else {
            return;
        };
        let parent = node.parent;
        let SceneObject {
            position,
            rotation,
            components,
            ..
        } = node;
        let Some(component) = components.get_mut(slot) else {
            return;
        };
        let mut ctx = HookContext {
            object,
            parent,
            position,
            rotation,
            mutations,
        };
        if let Err(error) = component.behavior.start(&mut ctx) {
            report.push(FrameError {
                object,
                slot,
                phase: HookPhase::Start,
                error,
            });
        }
    }

    /// Applies all queued mutations in FIFO order.
    ///
    /// Runs once per pass boundary. Application is best-effort: a
    /// mutation whose target died earlier in the queue is logged and
    /// skipped, matching the fire-and-forget contract hooks queue under.
    fn apply_mutations(&mut self) {
        for mutation in self.mutations.take() {
            self.apply_mutation(mutation);
        }
    }

    fn apply_mutation(&mut self, mutation: Mutation) {
        match mutation {
            Mutation::AttachComponent { object, behavior } => {
                if let Err(error) = self.attach_component(object, behavior) {
                    warn!("Deferred attach on {:?} failed: {}", object, error);
                }
            }
            Mutation::DetachComponent { object, slot } => {
                if let Err(error) = self.detach_component(object, slot) {
                    warn!("Deferred detach on {:?} failed: {}", object, error);
                }
            }
            Mutation::SetComponentEnabled {
                object,
                slot,
                enabled,
            } => {
                if let Err(error) = self.set_component_enabled(object, slot, enabled) {
                    warn!("Deferred enable toggle on {:?} failed: {}", object, error);
                }
            }
            Mutation::SpawnChild { parent } => {
                if let Err(error) = self.spawn_child(parent) {
                    warn!("Deferred spawn under {:?} failed: {}", parent, error);
                }
            }
            Mutation::Despawn { object } => {
                if let Err(error) = self.despawn(object) {
                    warn!("Deferred despawn of {:?} failed: {}", object, error);
                }
            }
            Mutation::SetActive { object, active } => match self.objects.get_mut(object) {
                Some(node) => node.active = active,
                None => warn!("Deferred activity toggle on dead object {:?}", object),
            },
            Mutation::SetProcessChildren { object, process } => {
                match self.objects.get_mut(object) {
                    Some(node) => node.process_children = process,
                    None => warn!("Deferred child gate toggle on dead object {:?}", object),
                }
            }
        }
    }
}

impl Default for SceneTree {
    fn default() -> Self {
        Self::new()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
