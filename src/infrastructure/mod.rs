//! Infrastructure layer: concrete scene handles

pub mod memory_scene;

pub use memory_scene::{AppliedForce, CameraState, MemoryScene, PhysicsBody, SceneNode};
