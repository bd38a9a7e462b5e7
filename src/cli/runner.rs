use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use morphcheck::api::{FileReport, discover_files, load_data};
use morphcheck::core::data::RawData;
use morphcheck::logging;

use super::args::CliArgs;
use super::errors::AppError;

fn title_bool(value: bool) -> &'static str {
    if value { "True" } else { "False" }
}

/// Turn the data path into the list of files to check. A directory is
/// announced on `out` before its files are discovered.
pub fn resolve_files<W: Write>(datapath: &str, out: &mut W) -> Result<Vec<PathBuf>, AppError> {
    let path = Path::new(datapath);
    if path.is_file() {
        Ok(vec![path.to_path_buf()])
    } else if path.is_dir() {
        writeln!(out, "Checking files in directory {}", datapath)?;
        Ok(discover_files(path)?)
    } else {
        Err(AppError::InvalidDataPath {
            path: datapath.to_string(),
        })
    }
}

/// Write the report block for one file.
pub fn write_report<W: Write>(report: &FileReport, out: &mut W) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "Check file {}...", report.path.display())?;
    writeln!(out, "Has soma points? {}", title_bool(report.has_soma_points))?;
    let ids = &report.sequential_ids;
    writeln!(out, "Consecutive indices? {}", title_bool(ids.status))?;
    if !ids.status {
        writeln!(out, "Non consecutive IDs detected: {:?}", ids.info)?;
    }
    Ok(())
}

/// Load and check each file in order with `loader`. The first load
/// failure stops the run.
pub fn check_files_with<W, L>(files: &[PathBuf], mut loader: L, out: &mut W) -> Result<(), AppError>
where
    W: Write,
    L: FnMut(&Path) -> morphcheck::Result<RawData>,
{
    for path in files {
        let data = loader(path).map_err(|source| AppError::Load {
            path: path.clone(),
            source,
        })?;
        let report = FileReport::from_data(path, &data);
        debug!("Checked {:?}: {:?}", path, report);
        write_report(&report, out)?;
    }
    Ok(())
}

pub fn check_files<W: Write>(files: &[PathBuf], out: &mut W) -> Result<(), AppError> {
    check_files_with(files, load_data, out)
}

pub fn run(args: CliArgs) -> Result<(), AppError> {
    logging::init_cli_logger();

    let stdout = io::stdout();
    let mut out = stdout.lock();

    let files = resolve_files(&args.datapath, &mut out)?;
    info!("Checking {} file(s) from {}", files.len(), args.datapath);
    check_files(&files, &mut out)?;
    out.flush()?;
    Ok(())
}
