//! Single-line command console for a live scene graph.
//!
//! A raw input line is tokenized on whitespace and resolved greedily against an
//! immutable [`CommandTree`]; the matched command receives the trailing tokens
//! its arity asks for and returns a [`CommandResult`].
//!
//! ```
//! use scenecon::{standard_console, config::Settings, CommandResult, MemoryScene, Vec3};
//!
//! let console = standard_console::<MemoryScene>(&Settings::default()).unwrap();
//! let mut scene = MemoryScene::initialized(Vec3::ZERO);
//! assert_eq!(console.run("spawn sphere 1 ball", &mut scene), CommandResult::Ok);
//! assert_eq!(
//!     console.run("position ball", &mut scene),
//!     CommandResult::Output("ball: (0, 0, 0)".into())
//! );
//! ```

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod infrastructure;
pub mod util;

pub use application::{standard_commands, standard_console, tokenize, Console};
pub use domain::{
    Command, CommandResult, CommandTree, CommandTreeBuilder, ConsoleError, Scene, SceneGraph,
    TreeError, Vec3,
};
pub use infrastructure::MemoryScene;
