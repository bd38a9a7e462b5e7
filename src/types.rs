//! Shared types and enums used across morphcheck.
//! Includes `PointType` (SWC sample type codes) and `FileFormat`
//! (the supported on-disk morphology formats).
use std::path::Path;

/// Sample point type, following the SWC type code convention.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug, Hash)]
pub enum PointType {
    Undefined,
    Soma,
    Axon,
    BasalDendrite,
    ApicalDendrite,
    Fork,
    End,
    Custom,
}

impl PointType {
    /// Numeric code stored in the TYPE column of a raw data block.
    pub fn code(self) -> i64 {
        match self {
            PointType::Undefined => 0,
            PointType::Soma => 1,
            PointType::Axon => 2,
            PointType::BasalDendrite => 3,
            PointType::ApicalDendrite => 4,
            PointType::Fork => 5,
            PointType::End => 6,
            PointType::Custom => 7,
        }
    }

    /// Map a raw type code back to a `PointType`. Codes past 7 (and negative
    /// codes) are user-defined in SWC and read as `Custom`.
    pub fn from_code(code: i64) -> Self {
        match code {
            0 => PointType::Undefined,
            1 => PointType::Soma,
            2 => PointType::Axon,
            3 => PointType::BasalDendrite,
            4 => PointType::ApicalDendrite,
            5 => PointType::Fork,
            6 => PointType::End,
            _ => PointType::Custom,
        }
    }
}

impl std::fmt::Display for PointType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            PointType::Undefined => "Undefined",
            PointType::Soma => "Soma",
            PointType::Axon => "Axon",
            PointType::BasalDendrite => "BasalDendrite",
            PointType::ApicalDendrite => "ApicalDendrite",
            PointType::Fork => "Fork",
            PointType::End => "End",
            PointType::Custom => "Custom",
        };
        write!(f, "{}", s)
    }
}

/// On-disk morphology formats understood by the loader.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug, Hash)]
pub enum FileFormat {
    Swc,
    Neurolucida,
}

impl FileFormat {
    pub const ALL: [FileFormat; 2] = [FileFormat::Swc, FileFormat::Neurolucida];

    /// Lower-case file extension associated with the format.
    pub fn extension(self) -> &'static str {
        match self {
            FileFormat::Swc => "swc",
            FileFormat::Neurolucida => "asc",
        }
    }

    /// Detect the format from a path's extension (case-insensitive).
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        Self::ALL.into_iter().find(|f| f.extension() == ext)
    }
}

impl std::fmt::Display for FileFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FileFormat::Swc => write!(f, "SWC"),
            FileFormat::Neurolucida => write!(f, "Neurolucida ASC"),
        }
    }
}
