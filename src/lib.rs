//! advent-scaffold - Scaffold solution crates inside an Advent of Code workspace

pub mod commands;
pub mod config;
pub mod scaffold;
pub mod templates;
pub mod workspace;

pub use scaffold::{create, create_in, ScaffoldError, Scaffolded};
