use std::io::Write;
use std::path::Path;

use log::error;
use tempfile::NamedTempFile;

use crate::error::SteganoError;
use crate::result::Result;

pub trait Persist {
    fn save_as(&mut self, _: &Path) -> Result<()>;
}

/// Write `target` through a temporary sibling file that only replaces the
/// target once `write` has completed, a failed write leaves no output behind.
pub(crate) fn write_atomically<F>(target: &Path, write: F) -> Result<()>
where
    F: FnOnce(&mut NamedTempFile) -> Result<()>,
{
    let dir = match target.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut staging = NamedTempFile::new_in(dir).map_err(|e| {
        error!("Error creating a staging file in {dir:?}: {e}");
        SteganoError::WriteError { source: e }
    })?;

    write(&mut staging)?;
    staging
        .flush()
        .map_err(|source| SteganoError::WriteError { source })?;
    staging.persist(target).map_err(|e| {
        error!("Error persisting {target:?}: {}", e.error);
        SteganoError::WriteError { source: e.error }
    })?;

    Ok(())
}
