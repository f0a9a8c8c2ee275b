//! Path resolution and options for scaffolding
//!
//! Everything is relative to a workspace root, which is the current
//! directory unless the caller says otherwise.

use std::path::{Path, PathBuf};

/// File name of both the workspace manifest and each project manifest
pub const MANIFEST_FILE: &str = "Cargo.toml";

/// Entry point written into every new project
pub const ENTRY_SOURCE_FILE: &str = "main.rs";

/// Version stamped into every new project manifest
pub const PACKAGE_VERSION: &str = "0.1.0";

/// Edition stamped into every new project manifest
pub const PACKAGE_EDITION: &str = "2021";

/// Name of the shared harness crate every project depends on
pub const HARNESS_CRATE: &str = "advent";

/// Path to the harness crate, relative to a project directory
pub const HARNESS_PATH: &str = "../advent";

/// Options controlling how a scaffold is written
#[derive(Debug, Clone, Copy, Default)]
pub struct ScaffoldOptions {
    /// Resolve and validate everything but leave the disk untouched
    pub dry_run: bool,
}

/// Paths inside the workspace root
#[derive(Debug, Clone)]
pub struct WorkspacePaths {
    pub root: PathBuf,
    pub manifest: PathBuf,
}

impl WorkspacePaths {
    pub fn new(root: impl AsRef<Path>) -> Self {
        let root = root.as_ref().to_path_buf();
        Self {
            manifest: root.join(MANIFEST_FILE),
            root,
        }
    }

    /// Paths of the project directory `name` inside this workspace
    pub fn project(&self, name: &str) -> ProjectPaths {
        let dir = self.root.join(name);
        let src = dir.join("src");
        ProjectPaths {
            manifest: dir.join(MANIFEST_FILE),
            entry: src.join(ENTRY_SOURCE_FILE),
            src,
            dir,
        }
    }
}

/// Paths of a single project directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectPaths {
    pub dir: PathBuf,
    pub src: PathBuf,
    pub manifest: PathBuf,
    pub entry: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn project_paths_are_nested_under_root() {
        let paths = WorkspacePaths::new("/work/aoc");
        let project = paths.project("seventeen");

        assert_eq!(paths.manifest, Path::new("/work/aoc/Cargo.toml"));
        assert_eq!(project.dir, Path::new("/work/aoc/seventeen"));
        assert_eq!(project.src, Path::new("/work/aoc/seventeen/src"));
        assert_eq!(project.manifest, Path::new("/work/aoc/seventeen/Cargo.toml"));
        assert_eq!(project.entry, Path::new("/work/aoc/seventeen/src/main.rs"));
    }
}
