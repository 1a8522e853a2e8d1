//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueHint};

/// Single-line command console for manipulating a live scene graph
#[derive(Parser, Debug)]
#[command(name = "scenecon")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Debug output on stderr (-d info, -dd debug, -ddd trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub debug: u8,

    /// Config file layered over the global config
    #[arg(short, long, value_hint = ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    /// Print the effective configuration and exit
    #[arg(long)]
    pub show_config: bool,

    /// Print a commented config template and exit
    #[arg(long, conflicts_with = "show_config")]
    pub config_template: bool,

    /// Dispatch LINE and exit; repeat to run several lines in order
    #[arg(short = 'e', long = "execute", value_name = "LINE")]
    pub execute: Vec<String>,

    /// Start with an uninitialized scene
    #[arg(long)]
    pub uninitialized: bool,
}
