//! Project scaffolding
//!
//! Creates a project directory with its manifest and source stub, then
//! registers it in the workspace manifest. The steps run in order and stop
//! at the first failure; anything already written stays on disk.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::config::{ProjectPaths, ScaffoldOptions, WorkspacePaths};
use crate::templates::{self, ProjectManifest};
use crate::workspace::WorkspaceManifest;

/// Scaffolding error
#[derive(Debug, thiserror::Error)]
pub enum ScaffoldError {
    #[error("Invalid project name {0:?}")]
    InvalidName(String),

    #[error("{} already exists", .0.display())]
    AlreadyExists(PathBuf),

    #[error("I/O error at {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to parse {}: {message}", .path.display())]
    Parse { path: PathBuf, message: String },
}

impl ScaffoldError {
    pub fn io(path: &Path, source: io::Error) -> Self {
        ScaffoldError::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// What a scaffold run wrote, or would have written in dry-run mode
#[derive(Debug, Clone)]
pub struct Scaffolded {
    pub name: String,
    pub project: ProjectPaths,
    pub workspace_manifest: PathBuf,
    pub members: Vec<String>,
    pub dry_run: bool,
}

/// Scaffold `name` in the current directory
pub fn create(name: &str) -> Result<(), ScaffoldError> {
    create_in(Path::new("."), name, &ScaffoldOptions::default()).map(|_| ())
}

/// Scaffold `name` under `root`
pub fn create_in(
    root: &Path,
    name: &str,
    options: &ScaffoldOptions,
) -> Result<Scaffolded, ScaffoldError> {
    validate_name(name)?;

    let paths = WorkspacePaths::new(root);
    let project = paths.project(name);

    // Single check; a concurrent creator can still win the race
    if project.dir.exists() {
        return Err(ScaffoldError::AlreadyExists(PathBuf::from(name)));
    }

    let manifest = templates::project_manifest(name);
    check_manifest(&project.manifest, &manifest, name)?;

    if options.dry_run {
        let workspace = WorkspaceManifest::read_only(&paths.manifest)?;
        let members = crate::workspace::merge_members(workspace.members()?, name);
        return Ok(Scaffolded {
            name: name.to_string(),
            project,
            workspace_manifest: paths.manifest,
            members,
            dry_run: true,
        });
    }

    create_dir(&project.dir)?;
    create_dir(&project.src)?;
    write_file(&project.manifest, &manifest)?;
    write_file(&project.entry, templates::MAIN_RS)?;

    let mut workspace = WorkspaceManifest::open(&paths.manifest)?;
    let members = workspace.add_member(name)?;
    workspace.save()?;

    tracing::info!(
        "Scaffolded {} ({} workspace members)",
        project.dir.display(),
        members.len()
    );

    Ok(Scaffolded {
        name: name.to_string(),
        project,
        workspace_manifest: paths.manifest,
        members,
        dry_run: false,
    })
}

/// Reject names that cannot be a single directory entry
pub fn validate_name(name: &str) -> Result<(), ScaffoldError> {
    let bad = name.is_empty()
        || name == "."
        || name == ".."
        || name.contains(['/', '\0'])
        || (cfg!(windows) && name.contains('\\'));
    if bad {
        return Err(ScaffoldError::InvalidName(name.to_string()));
    }
    Ok(())
}

fn check_manifest(path: &Path, content: &str, name: &str) -> Result<(), ScaffoldError> {
    let parsed = ProjectManifest::parse(content).map_err(|e| ScaffoldError::Parse {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    if parsed.package.name != name {
        return Err(ScaffoldError::Parse {
            path: path.to_path_buf(),
            message: format!("package.name rendered as {:?}", parsed.package.name),
        });
    }
    Ok(())
}

fn create_dir(path: &Path) -> Result<(), ScaffoldError> {
    fs::create_dir(path).map_err(|e| ScaffoldError::io(path, e))?;
    tracing::debug!("created: {}", path.display());
    Ok(())
}

fn write_file(path: &Path, content: &str) -> Result<(), ScaffoldError> {
    fs::write(path, content).map_err(|e| ScaffoldError::io(path, e))?;
    tracing::debug!("wrote: {}", path.display());
    Ok(())
}
