//! Domain layer: command tree, dispatch results and the scene contract
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config loading).

pub mod command;
pub mod error;
pub mod scene;
pub mod tree;

pub use command::{Action, Command, CommandResult};
pub use error::{ConsoleError, TreeError, TreeResult};
pub use scene::{
    Axis, BodyType, Color, ForceMode, Geometry, LightKind, Scene, SceneGraph, Vec3,
};
pub use tree::{CommandTree, CommandTreeBuilder, Resolution, TreeIterator};
