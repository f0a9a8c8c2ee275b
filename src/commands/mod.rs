//! CLI commands for new-question

use anyhow::{Context, Result};
use std::path::Path;

use crate::config::ScaffoldOptions;
use crate::scaffold::{self, Scaffolded};

/// Scaffold a new question crate under `root`
pub fn new_question(root: &Path, name: &str, dry_run: bool) -> Result<Scaffolded> {
    let options = ScaffoldOptions { dry_run };
    let report = scaffold::create_in(root, name, &options)
        .with_context(|| format!("Failed to scaffold {}", name))?;

    if report.dry_run {
        print_dry_run(&report);
    }

    Ok(report)
}

fn print_dry_run(report: &Scaffolded) {
    println!("Dry run for {}:", report.name);
    println!("  would-create: {}", report.project.dir.display());
    println!("  would-create: {}", report.project.src.display());
    println!("  would-write:  {}", report.project.manifest.display());
    println!("  would-write:  {}", report.project.entry.display());
    println!("  would-update: {}", report.workspace_manifest.display());
    println!();
    println!("Members after update: {}", report.members.len());
    for member in &report.members {
        let marker = if *member == report.name { "+" } else { " " };
        println!("  {} {}", marker, member);
    }
}

/// Whether `err` is the "target already exists" failure
pub fn is_already_exists(err: &anyhow::Error) -> bool {
    err.chain().any(|cause| {
        matches!(
            cause.downcast_ref::<scaffold::ScaffoldError>(),
            Some(scaffold::ScaffoldError::AlreadyExists(_))
        )
    })
}
