//! I/O layer for morphology files.
//! Provides the `swc` and `neurolucida` readers, which turn a file into a
//! format-agnostic [`RawData`](crate::core::data::RawData), and `discovery`
//! for finding recognized files in a directory.
use std::fs;
use std::path::Path;

use tracing::debug;

use crate::core::data::RawData;
use crate::types::FileFormat;

pub mod discovery;
pub use discovery::discover_files;

pub mod neurolucida;
pub use neurolucida::{AscError, NeurolucidaReader};

pub mod swc;
pub use swc::{SwcError, SwcReader};

/// A format-specific adapter producing a raw point table.
pub trait MorphologyReader {
    type Error: From<std::io::Error>;

    const FORMAT: FileFormat;

    /// Parse the full text of a file.
    fn parse(text: &str) -> Result<RawData, Self::Error>;

    /// Read and parse the file at `path`.
    fn read<P: AsRef<Path>>(path: P) -> Result<RawData, Self::Error> {
        let path = path.as_ref();
        debug!("Reading {} file {:?}", Self::FORMAT, path);
        let text = fs::read_to_string(path)?;
        let data = Self::parse(&text)?;
        debug!("Read {} samples from {:?}", data.data_block.nrows(), path);
        Ok(data)
    }
}
