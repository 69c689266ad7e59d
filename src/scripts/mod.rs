//! Launcher scripts written to the bin directory.

pub mod generator;

pub use generator::{render_wrapper, script_name, GeneratedScript, ScriptGenerator, ScriptKind};
