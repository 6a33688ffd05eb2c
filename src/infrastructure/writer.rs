//! Atomic replacement of the output file.

use std::fs;
use std::io::Write;
use std::path::Path;

use tempfile::Builder;
use tracing::debug;

use crate::domain::errors::{BuildError, BuildResult};

/// Write `contents` to `path` through a temporary sibling file.
///
/// The temporary file lives in the destination directory so the final
/// rename stays on one filesystem. Readers see either the old file or the
/// complete new one. On any failure the temporary file is removed and the
/// existing target is left untouched.
///
/// An existing target keeps its permissions. A new file gets `0o644`
/// narrowed by the process umask on Unix.
pub fn write_atomically(path: &Path, contents: &str) -> BuildResult<()> {
    let wrap = |source: std::io::Error| BuildError::WriteFailed {
        path: path.to_path_buf(),
        source,
    };

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let existing = fs::metadata(path).ok().map(|meta| meta.permissions());

    let mut builder = Builder::new();
    builder.prefix(".skland-config");
    #[cfg(unix)]
    builder.permissions(existing.clone().unwrap_or_else(default_permissions));
    let mut file = builder.tempfile_in(dir).map_err(wrap)?;
    if let Some(permissions) = existing {
        // creation mode is narrowed by the umask; restore the exact bits
        file.as_file().set_permissions(permissions).map_err(wrap)?;
    }
    file.write_all(contents.as_bytes()).map_err(wrap)?;
    file.as_file().sync_all().map_err(wrap)?;
    file.persist(path).map_err(|err| wrap(err.error))?;

    debug!(path = %path.display(), bytes = contents.len(), "output file replaced");
    Ok(())
}

#[cfg(unix)]
fn default_permissions() -> fs::Permissions {
    use std::os::unix::fs::PermissionsExt;
    fs::Permissions::from_mode(0o644)
}
