//! 引用分类、路径解析与 data URI 生成

use base64::{prelude::BASE64_STANDARD, Engine};
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::PackError;
use crate::utils::mime::mime_prefix_for;

/// Schemes that mark a reference as something other than a local file
pub const EXTERNAL_SCHEMES: &[&str] = &["http:", "https:", "file:", "data:"];

/// Where a raw attribute value points to
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Reference {
    /// A path relative to the current base directory
    Local,
    /// Remote URL, `file:` URL or data URI; never touched
    External,
}

/// Classifies a raw reference by its (case-sensitive) scheme prefix.
///
/// The empty string classifies as [`Reference::Local`]; callers skip it through
/// [`is_inlinable`].
pub fn classify(value: &str) -> Reference {
    if EXTERNAL_SCHEMES
        .iter()
        .any(|scheme| value.starts_with(scheme))
    {
        Reference::External
    } else {
        Reference::Local
    }
}

/// True for non-empty local references
pub fn is_inlinable(value: &str) -> bool {
    !value.is_empty() && classify(value) == Reference::Local
}

/// Resolves a local reference against a base directory.
///
/// A leading `/` does not escape the base directory.
pub fn resolve_reference(base_dir: &Path, reference: &str) -> PathBuf {
    base_dir.join(reference.trim_start_matches('/'))
}

/// Directory that references found inside `path` are resolved against
pub fn containing_dir(path: &Path) -> Result<PathBuf, PackError> {
    let canonical_path = fs::canonicalize(path).map_err(|e| PackError::read(path, e))?;

    Ok(canonical_path
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or(canonical_path))
}

/// Reads a UTF-8 text asset
pub fn read_text(path: &Path) -> Result<String, PackError> {
    fs::read_to_string(path).map_err(|e| PackError::read(path, e))
}

/// Reads the file at `path` and encodes it as a data URI.
///
/// Files whose extension is missing from the MIME table come back as bare
/// base64 text without any prefix.
pub fn create_data_url(path: &Path) -> Result<String, PackError> {
    let data = fs::read(path).map_err(|e| PackError::read(path, e))?;
    let encoded = BASE64_STANDARD.encode(data);

    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy())
        .unwrap_or_default();

    Ok(match mime_prefix_for(&file_name) {
        Some(prefix) => format!("{prefix}{encoded}"),
        None => encoded,
    })
}
