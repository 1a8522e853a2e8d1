use generational_arena::{Arena, Index};
use tracing::{debug, instrument};

use crate::domain::{
    Axis, BodyType, Color, ForceMode, Geometry, LightKind, Scene, SceneGraph, Vec3,
};

/// A force or torque recorded against a physics body.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AppliedForce {
    pub vector: Vec3,
    pub mode: ForceMode,
    pub torque: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PhysicsBody {
    pub body_type: BodyType,
    /// Every force and torque applied since the body was attached
    pub applied: Vec<AppliedForce>,
}

/// Node of the in-memory scene graph.
#[derive(Debug)]
pub struct SceneNode {
    pub name: String,
    pub position: Vec3,
    pub geometry: Option<Geometry>,
    pub color: Option<Color>,
    pub light: Option<LightKind>,
    pub physics: Option<PhysicsBody>,
    /// Index of parent node in the arena, None for the root
    pub parent: Option<Index>,
    /// Indices of child nodes in the arena
    pub children: Vec<Index>,
}

impl SceneNode {
    fn new(name: &str, geometry: Option<Geometry>, parent: Option<Index>) -> Self {
        Self {
            name: name.to_string(),
            position: Vec3::ZERO,
            geometry,
            color: None,
            light: None,
            physics: None,
            parent,
            children: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CameraState {
    pub free_control: bool,
    /// Euler angles in radians
    pub rotation: Vec3,
}

/// Arena-backed scene graph standing in for a rendering host.
///
/// Holds a root node iff it is initialized. Removing a node frees its whole
/// subtree; stale indices are rejected by the generational arena.
#[derive(Debug)]
pub struct MemoryScene {
    arena: Arena<SceneNode>,
    root: Option<Index>,
    gravity: Vec3,
    camera: CameraState,
}

impl Default for MemoryScene {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryScene {
    /// Scene with no content; every dispatch against it fails.
    pub fn new() -> Self {
        Self {
            arena: Arena::new(),
            root: None,
            gravity: Vec3::ZERO,
            camera: CameraState::default(),
        }
    }

    /// Scene with an empty root node and the given world gravity.
    pub fn initialized(gravity: Vec3) -> Self {
        let mut scene = Self::new();
        scene.root = Some(scene.arena.insert(SceneNode::new("", None, None)));
        scene.gravity = gravity;
        scene
    }

    pub fn node(&self, idx: Index) -> Option<&SceneNode> {
        self.arena.get(idx)
    }

    pub fn gravity(&self) -> Vec3 {
        self.gravity
    }

    pub fn camera(&self) -> CameraState {
        self.camera
    }

    /// Number of nodes below the root.
    pub fn len(&self) -> usize {
        self.arena.len().saturating_sub(usize::from(self.root.is_some()))
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Pre-order walk below the root.
    fn descendants(&self) -> Vec<Index> {
        let mut out = Vec::new();
        let mut stack: Vec<Index> = match self.root.and_then(|r| self.arena.get(r)) {
            Some(root) => root.children.iter().rev().copied().collect(),
            None => return out,
        };
        while let Some(idx) = stack.pop() {
            if let Some(node) = self.arena.get(idx) {
                out.push(idx);
                // Push children in reverse order for left-to-right traversal
                stack.extend(node.children.iter().rev().copied());
            }
        }
        out
    }

    fn with_node<F: FnOnce(&mut SceneNode)>(&mut self, idx: Index, f: F) -> bool {
        match self.arena.get_mut(idx) {
            Some(node) => {
                f(node);
                true
            }
            None => false,
        }
    }

    fn push_force(&mut self, idx: Index, applied: AppliedForce) -> bool {
        match self.arena.get_mut(idx).and_then(|n| n.physics.as_mut()) {
            Some(body) => {
                body.applied.push(applied);
                true
            }
            None => false,
        }
    }
}

impl Scene for MemoryScene {
    fn is_initialized(&self) -> bool {
        self.root.is_some()
    }
}

impl SceneGraph for MemoryScene {
    type NodeId = Index;

    #[instrument(level = "trace", skip(self))]
    fn find_node(&self, name: &str) -> Option<Index> {
        self.descendants()
            .into_iter()
            .find(|&idx| self.arena.get(idx).is_some_and(|n| n.name == name))
    }

    fn node_names(&self) -> Vec<String> {
        self.descendants()
            .into_iter()
            .filter_map(|idx| self.arena.get(idx).map(|n| n.name.clone()))
            .collect()
    }

    #[instrument(level = "debug", skip(self))]
    fn spawn(&mut self, name: &str, geometry: Geometry) -> Option<Index> {
        let root = self.root?;
        let idx = self
            .arena
            .insert(SceneNode::new(name, Some(geometry), Some(root)));
        if let Some(parent) = self.arena.get_mut(root) {
            parent.children.push(idx);
        }
        Some(idx)
    }

    #[instrument(level = "debug", skip(self))]
    fn remove(&mut self, node: Index) -> bool {
        if Some(node) == self.root {
            return false;
        }
        let Some(parent) = self.arena.get(node).and_then(|n| n.parent) else {
            return false;
        };
        if let Some(p) = self.arena.get_mut(parent) {
            p.children.retain(|&c| c != node);
        }
        let mut stack = vec![node];
        while let Some(idx) = stack.pop() {
            if let Some(removed) = self.arena.remove(idx) {
                stack.extend(removed.children);
            }
        }
        debug!(remaining = self.len(), "node removed");
        true
    }

    fn position(&self, node: Index) -> Option<Vec3> {
        self.arena.get(node).map(|n| n.position)
    }

    fn set_position(&mut self, node: Index, position: Vec3) -> bool {
        self.with_node(node, |n| n.position = position)
    }

    fn set_color(&mut self, node: Index, color: Color) -> bool {
        self.with_node(node, |n| n.color = Some(color))
    }

    fn set_light(&mut self, node: Index, light: Option<LightKind>) -> bool {
        self.with_node(node, |n| n.light = light)
    }

    fn set_physics_body(&mut self, node: Index, body: Option<BodyType>) -> bool {
        self.with_node(node, |n| {
            n.physics = body.map(|body_type| PhysicsBody {
                body_type,
                applied: Vec::new(),
            })
        })
    }

    fn apply_force(&mut self, node: Index, force: Vec3, mode: ForceMode) -> bool {
        self.push_force(
            node,
            AppliedForce {
                vector: force,
                mode,
                torque: false,
            },
        )
    }

    fn apply_torque(&mut self, node: Index, torque: Vec3, mode: ForceMode) -> bool {
        self.push_force(
            node,
            AppliedForce {
                vector: torque,
                mode,
                torque: true,
            },
        )
    }

    fn set_gravity(&mut self, gravity: Vec3) {
        self.gravity = gravity;
    }

    fn set_camera_control(&mut self, enabled: bool) {
        self.camera.free_control = enabled;
    }

    fn rotate_camera(&mut self, axis: Axis, radians: f32) {
        let delta = match axis {
            Axis::X => Vec3::new(radians, 0.0, 0.0),
            Axis::Y => Vec3::new(0.0, radians, 0.0),
            Axis::Z => Vec3::new(0.0, 0.0, radians),
        };
        self.camera.rotation = self.camera.rotation + delta;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sphere() -> Geometry {
        Geometry::Sphere { radius: 1.0 }
    }

    #[test]
    fn given_new_scene_when_checked_then_uninitialized() {
        let mut scene = MemoryScene::new();
        assert!(!scene.is_initialized());
        assert!(scene.spawn("a", sphere()).is_none());
        assert!(scene.node_names().is_empty());
    }

    #[test]
    fn given_nested_nodes_when_finding_then_searches_recursively_first_match() {
        let mut scene = MemoryScene::initialized(Vec3::ZERO);
        let a = scene.spawn("a", sphere()).unwrap();
        let dup = scene.spawn("dup", sphere()).unwrap();
        let _later = scene.spawn("dup", sphere()).unwrap();

        // Hang a child under `a` by hand to exercise recursion
        let child = scene.arena.insert(SceneNode::new("deep", None, Some(a)));
        scene.arena.get_mut(a).unwrap().children.push(child);

        assert_eq!(scene.find_node("deep"), Some(child));
        assert_eq!(scene.find_node("dup"), Some(dup));
        assert_eq!(scene.node_names(), vec!["a", "deep", "dup", "dup"]);
        assert!(scene.find_node("").is_none());
    }

    #[test]
    fn given_subtree_when_removing_then_frees_descendants() {
        let mut scene = MemoryScene::initialized(Vec3::ZERO);
        let a = scene.spawn("a", sphere()).unwrap();
        let child = scene.arena.insert(SceneNode::new("deep", None, Some(a)));
        scene.arena.get_mut(a).unwrap().children.push(child);
        assert_eq!(scene.len(), 2);

        assert!(scene.remove(a));
        assert!(scene.is_empty());
        assert!(scene.node(child).is_none());
        assert!(!scene.remove(a), "stale index must be rejected");
    }

    #[test]
    fn given_root_when_removing_then_refused() {
        let mut scene = MemoryScene::initialized(Vec3::ZERO);
        let root = scene.root.unwrap();
        assert!(!scene.remove(root));
        assert!(scene.is_initialized());
    }

    #[test]
    fn given_body_when_applying_force_then_recorded() {
        let mut scene = MemoryScene::initialized(Vec3::ZERO);
        let a = scene.spawn("a", sphere()).unwrap();
        assert!(!scene.apply_force(a, Vec3::new(0.0, 1.0, 0.0), ForceMode::Impulse));

        scene.set_physics_body(a, Some(BodyType::Dynamic));
        assert!(scene.apply_force(a, Vec3::new(0.0, 1.0, 0.0), ForceMode::Impulse));
        assert!(scene.apply_torque(a, Vec3::new(1.0, 0.0, 0.0), ForceMode::Continuous));

        let body = scene.node(a).unwrap().physics.as_ref().unwrap();
        assert_eq!(body.applied.len(), 2);
        assert!(body.applied[1].torque);
    }

    #[test]
    fn given_camera_when_rotating_then_accumulates_per_axis() {
        let mut scene = MemoryScene::initialized(Vec3::ZERO);
        scene.rotate_camera(Axis::Y, 0.5);
        scene.rotate_camera(Axis::Y, 0.5);
        assert_eq!(scene.camera().rotation, Vec3::new(0.0, 1.0, 0.0));
    }
}
