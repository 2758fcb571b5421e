use std::fs;
use std::path::{Component, Path, PathBuf};

use crate::GeneratedFile;
use crate::error::WriteError;

/// Absolute, lexically normalized form of `dir` (`.` and `..` folded away).
pub fn resolve_output_dir(dir: &Path) -> Result<PathBuf, WriteError> {
    let absolute = std::path::absolute(dir).map_err(|source| WriteError::Resolve {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut normalized = PathBuf::new();
    for component in absolute.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                normalized.pop();
            }
            other => normalized.push(other),
        }
    }
    Ok(normalized)
}

/// Write one page under `output_dir`. Existing files are overwritten.
///
/// `file_name` must be a single normal path component.
pub fn write_page(output_dir: &Path, file_name: &str, content: &str) -> Result<PathBuf, WriteError> {
    let mut components = Path::new(file_name).components();
    if !matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    ) {
        return Err(WriteError::InvalidFileName {
            name: file_name.to_string(),
        });
    }

    let path = output_dir.join(file_name);
    fs::write(&path, content).map_err(|source| WriteError::Write {
        path: path.clone(),
        source,
    })?;
    log::debug!("wrote {} bytes to {}", content.len(), path.display());
    Ok(path)
}

/// Resolve `output_dir`, create it if needed and write every generated file into it.
pub fn write_files(output_dir: &Path, files: &[GeneratedFile]) -> Result<Vec<PathBuf>, WriteError> {
    let base = resolve_output_dir(output_dir)?;
    fs::create_dir_all(&base).map_err(|source| WriteError::CreateDir {
        path: base.clone(),
        source,
    })?;

    files
        .iter()
        .map(|file| write_page(&base, &file.path, &file.content))
        .collect()
}
