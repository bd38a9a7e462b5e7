//! High-level library API: load a morphology file into a raw point table,
//! run the structural checks on it, and find morphology files in a
//! directory. Prefer these entrypoints over the reader and check modules
//! when integrating morphcheck.
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::core::checks::{CheckResult, has_sequential_ids, has_soma_points};
use crate::core::data::RawData;
use crate::error::{Error, Result};
use crate::io::{MorphologyReader, NeurolucidaReader, SwcReader};
use crate::types::FileFormat;

pub use crate::io::discover_files;

/// Load the raw point table of a morphology file, picking the reader from
/// the file extension.
pub fn load_data(path: &Path) -> Result<RawData> {
    let format =
        FileFormat::from_path(path).ok_or_else(|| Error::UnsupportedFormat(path.to_path_buf()))?;
    info!("Loading {} file {:?}", format, path);
    let data = match format {
        FileFormat::Swc => SwcReader::read(path)?,
        FileFormat::Neurolucida => NeurolucidaReader::read(path)?,
    };
    Ok(data)
}

/// Outcome of the structural checks for one file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileReport {
    pub path: PathBuf,
    pub has_soma_points: bool,
    pub sequential_ids: CheckResult,
}

impl FileReport {
    pub fn from_data(path: &Path, data: &RawData) -> Self {
        let (has_soma_points, sequential_ids) = check_data(data);
        Self {
            path: path.to_path_buf(),
            has_soma_points,
            sequential_ids,
        }
    }
}

/// Run both checks over an already loaded table.
pub fn check_data(data: &RawData) -> (bool, CheckResult) {
    (has_soma_points(data), has_sequential_ids(data))
}

/// Load `path` and run both checks on it.
pub fn check_file(path: &Path) -> Result<FileReport> {
    let data = load_data(path)?;
    Ok(FileReport::from_data(path, &data))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn load_dispatches_on_extension() {
        let tmp = TempDir::new().unwrap();
        let swc = tmp.path().join("cell.SWC");
        let asc = tmp.path().join("cell.asc");
        fs::write(&swc, "1 1 0 0 0 1 -1\n").unwrap();
        fs::write(&asc, "((CellBody) (0 0 0 1) (1 0 0 1))").unwrap();

        assert_eq!(load_data(&swc).unwrap().format, FileFormat::Swc);
        assert_eq!(load_data(&asc).unwrap().format, FileFormat::Neurolucida);
    }

    #[test]
    fn unknown_extension_is_rejected() {
        let tmp = TempDir::new().unwrap();
        let h5 = tmp.path().join("cell.h5");
        fs::write(&h5, "").unwrap();
        assert!(matches!(load_data(&h5), Err(Error::UnsupportedFormat(p)) if p == h5));
    }

    #[test]
    fn reader_errors_are_wrapped() {
        let tmp = TempDir::new().unwrap();
        let swc = tmp.path().join("bad.swc");
        fs::write(&swc, "1 1 0 0\n").unwrap();
        assert!(matches!(load_data(&swc), Err(Error::Swc(_))));
        assert!(matches!(
            load_data(&tmp.path().join("missing.swc")),
            Err(Error::Swc(crate::io::SwcError::Io(_)))
        ));
    }

    #[test]
    fn check_file_reports_both_checks() {
        let tmp = TempDir::new().unwrap();
        let swc = tmp.path().join("gap.swc");
        fs::write(&swc, "1 2 0 0 0 1 -1\n2 2 0 0 1 1 1\n4 2 0 0 2 1 2\n").unwrap();

        let report = check_file(&swc).unwrap();
        assert_eq!(report.path, swc);
        assert!(!report.has_soma_points);
        assert_eq!(report.sequential_ids, CheckResult::new(false, vec![4]));

        let data = load_data(&swc).unwrap();
        assert_eq!(check_data(&data), (false, CheckResult::new(false, vec![4])));
    }
}
