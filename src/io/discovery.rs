use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{Error, Result};
use crate::types::FileFormat;

/// List the recognized morphology files directly inside `dir`.
///
/// Not recursive. A file is recognized by its extension, compared
/// case-insensitively against the supported formats. Entries come back in
/// directory iteration order, which is platform dependent and not sorted.
pub fn discover_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let read_err = |source| Error::Discovery {
        path: dir.to_path_buf(),
        source,
    };

    let mut files = Vec::new();
    for entry in fs::read_dir(dir).map_err(read_err)? {
        let path = entry.map_err(read_err)?.path();
        if !path.is_file() {
            continue;
        }
        match FileFormat::from_path(&path) {
            Some(_) => files.push(path),
            None => debug!("Skipping unrecognized file: {:?}", path),
        }
    }
    debug!("Discovered {} morphology files in {:?}", files.len(), dir);
    Ok(files)
}
