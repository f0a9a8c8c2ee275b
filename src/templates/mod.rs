//! Templates written into a new project directory
//!
//! Only the project manifest carries the project name. The source stub is
//! the same for every project.

use serde::Deserialize;
use std::collections::BTreeMap;

use crate::config::{HARNESS_CRATE, HARNESS_PATH, PACKAGE_EDITION, PACKAGE_VERSION};

/// Source stub for `src/main.rs`
pub const MAIN_RS: &str = r#"use advent::prelude::*;

#[part_one]
fn part_one(_: String) -> &'static str {
    "incomplete"
}

#[part_two]
fn part_two(_: String) -> &'static str {
    "incomplete"
}

harness!();

"#;

/// Render the project `Cargo.toml` for `name`
pub fn project_manifest(name: &str) -> String {
    // Display on a toml string value yields a quoted, escaped TOML string
    let quoted = toml::Value::String(name.to_string());
    format!(
        "[package]\n\
         name = {quoted}\n\
         version = \"{PACKAGE_VERSION}\"\n\
         edition = \"{PACKAGE_EDITION}\"\n\
         \n\
         # See more keys and their definitions at https://doc.rust-lang.org/cargo/reference/manifest.html\n\
         \n\
         [dependencies]\n\
         {HARNESS_CRATE} = {{ path = \"{HARNESS_PATH}\" }}\n"
    )
}

/// The fields of a rendered project manifest
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct ProjectManifest {
    pub package: Package,
    #[serde(default)]
    pub dependencies: BTreeMap<String, PathDependency>,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct Package {
    pub name: String,
    pub version: String,
    pub edition: String,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct PathDependency {
    pub path: String,
}

impl ProjectManifest {
    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }
}
