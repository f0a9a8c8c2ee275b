//! Workspace manifest editing
//!
//! The manifest is held as a format-preserving document. Only the
//! `workspace.members` array is rewritten; every other table, key, comment
//! and inline table is written back exactly as it was read.

use std::collections::BTreeSet;
use std::fs::{self, File, OpenOptions};
use std::io::{self, Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};

use toml_edit::{Array, DocumentMut, Item, Value};

use crate::scaffold::ScaffoldError;

/// Indent used for each entry of the rewritten members array
const MEMBER_INDENT: &str = "\n    ";

/// A parsed workspace manifest, optionally holding the file open for rewrite
#[derive(Debug)]
pub struct WorkspaceManifest {
    path: PathBuf,
    file: Option<File>,
    doc: DocumentMut,
}

impl WorkspaceManifest {
    /// Open the manifest for read-modify-write, creating it if absent.
    ///
    /// A freshly created manifest is empty and has no `workspace` table, so
    /// the first call to [`members`](Self::members) on it fails.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, ScaffoldError> {
        let path = path.as_ref().to_path_buf();
        let mut file = OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(false)
            .open(&path)
            .map_err(|e| ScaffoldError::io(&path, e))?;

        let mut content = String::new();
        file.read_to_string(&mut content)
            .map_err(|e| ScaffoldError::io(&path, e))?;

        let doc = parse_document(&path, &content)?;
        tracing::debug!("Opened workspace manifest {}", path.display());

        Ok(Self {
            path,
            file: Some(file),
            doc,
        })
    }

    /// Parse the manifest without creating or holding it
    pub fn read_only(path: impl AsRef<Path>) -> Result<Self, ScaffoldError> {
        let path = path.as_ref().to_path_buf();
        let content = fs::read_to_string(&path).map_err(|e| ScaffoldError::io(&path, e))?;
        let doc = parse_document(&path, &content)?;
        Ok(Self {
            path,
            file: None,
            doc,
        })
    }

    /// Current `workspace.members`, in file order
    pub fn members(&self) -> Result<Vec<String>, ScaffoldError> {
        let workspace = self
            .doc
            .get("workspace")
            .and_then(Item::as_table_like)
            .ok_or_else(|| self.parse_error("missing [workspace] table"))?;
        let members = workspace
            .get("members")
            .and_then(Item::as_array)
            .ok_or_else(|| self.parse_error("missing workspace.members array"))?;

        members
            .iter()
            .map(|m| {
                m.as_str()
                    .map(str::to_string)
                    .ok_or_else(|| self.parse_error("workspace.members contains a non-string entry"))
            })
            .collect()
    }

    /// Add `name` to `workspace.members`, leaving the list sorted and
    /// duplicate-free. Returns the new list.
    pub fn add_member(&mut self, name: &str) -> Result<Vec<String>, ScaffoldError> {
        let members = merge_members(self.members()?, name);

        // members() has already checked the shape
        if let Some(array) = self
            .doc
            .get_mut("workspace")
            .and_then(Item::as_table_like_mut)
            .and_then(|workspace| workspace.get_mut("members"))
            .and_then(Item::as_array_mut)
        {
            fill_members(array, &members);
        }

        Ok(members)
    }

    fn render(&self) -> String {
        self.doc.to_string()
    }

    /// Truncate the manifest and write the document back in full
    pub fn save(mut self) -> Result<(), ScaffoldError> {
        let content = self.render();
        let path = self.path.clone();
        let mut file = self.file.take().ok_or_else(|| {
            ScaffoldError::io(
                &path,
                io::Error::new(io::ErrorKind::PermissionDenied, "manifest was opened read-only"),
            )
        })?;

        file.set_len(0)
            .and_then(|_| file.seek(SeekFrom::Start(0)))
            .and_then(|_| file.write_all(content.as_bytes()))
            .and_then(|_| file.flush())
            .map_err(|e| ScaffoldError::io(&path, e))?;

        tracing::debug!("Rewrote workspace manifest {}", path.display());
        Ok(())
    }

    fn parse_error(&self, message: &str) -> ScaffoldError {
        ScaffoldError::Parse {
            path: self.path.clone(),
            message: message.to_string(),
        }
    }
}

fn parse_document(path: &Path, content: &str) -> Result<DocumentMut, ScaffoldError> {
    content.parse::<DocumentMut>().map_err(|e| ScaffoldError::Parse {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Replace the array contents with one member per line
fn fill_members(array: &mut Array, members: &[String]) {
    array.clear();
    for member in members {
        let mut value = Value::from(member.as_str());
        value.decor_mut().set_prefix(MEMBER_INDENT);
        array.push_formatted(value);
    }
    array.set_trailing_comma(!members.is_empty());
    array.set_trailing("\n");
}

/// Add `name` to `existing`, dropping duplicates and sorting
pub fn merge_members(existing: Vec<String>, name: &str) -> Vec<String> {
    let mut set: BTreeSet<String> = existing.into_iter().collect();
    set.insert(name.to_string());
    set.into_iter().collect()
}
