//! Scaffold Generator
//!
//! Materializes a static folder/file tree under a base directory. Existing
//! folders are reused and existing files are never opened for writing, so
//! running it again is a no-op.

pub mod tree;

pub use tree::{Folder, PROJECT_TREE};

use crate::errors::{self, ScaffoldError};
use crate::output::{self, Glyphs, Status};
use std::fs::{self, OpenOptions};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Paths created by one [`materialize`] call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScaffoldReport {
    pub created_dirs: Vec<PathBuf>,
    pub created_files: Vec<PathBuf>,
}

impl ScaffoldReport {
    pub fn is_empty(&self) -> bool {
        self.created_dirs.is_empty() && self.created_files.is_empty()
    }
}

/// Ensure every folder and file of `tree` exists under `base_path`.
///
/// I/O errors are fatal and carry the offending path.
pub fn materialize(
    base_path: &Path,
    tree: &[Folder],
) -> std::result::Result<ScaffoldReport, ScaffoldError> {
    let mut report = ScaffoldReport::default();
    materialize_into(base_path, tree, &mut report)?;
    Ok(report)
}

fn materialize_into(
    base_path: &Path,
    tree: &[Folder],
    report: &mut ScaffoldReport,
) -> std::result::Result<(), ScaffoldError> {
    for folder in tree {
        let folder_path = base_path.join(folder.name);
        if !folder_path.is_dir() {
            fs::create_dir_all(&folder_path).map_err(|source| ScaffoldError::Io {
                path: folder_path.clone(),
                source,
            })?;
            output::print_status(
                &format!("Created folder: {}", folder_path.display()),
                Status::Success,
            );
            report.created_dirs.push(folder_path.clone());
        }

        for file in folder.files {
            let file_path = folder_path.join(file);
            if create_empty_file(&file_path)? {
                output::print_status(
                    &format!("Created file: {}", file_path.display()),
                    Status::Success,
                );
                report.created_files.push(file_path);
            } else {
                debug!(path = %file_path.display(), "File exists, leaving untouched");
            }
        }

        materialize_into(&folder_path, folder.folders, report)?;
    }
    Ok(())
}

/// Create `path` empty unless something already exists there.
/// Returns whether a file was created.
fn create_empty_file(path: &Path) -> std::result::Result<bool, ScaffoldError> {
    match OpenOptions::new().write(true).create_new(true).open(path) {
        Ok(_) => Ok(true),
        Err(e) if e.kind() == ErrorKind::AlreadyExists => Ok(false),
        Err(source) => Err(ScaffoldError::Io {
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// Materialize [`PROJECT_TREE`] under `base_path` and print the closing line.
pub fn run(base_path: &Path) -> errors::Result<ScaffoldReport> {
    let report = materialize(base_path, PROJECT_TREE)?;
    println!();
    println!(
        "{} Project structure created successfully!",
        Glyphs::rocket()
    );
    Ok(report)
}
