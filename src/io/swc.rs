use thiserror::Error;

use super::MorphologyReader;
use crate::core::data::{RawData, Sample};
use crate::types::FileFormat;

/// Errors encountered when reading SWC files
#[derive(Debug, Error)]
pub enum SwcError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("line {line}: expected 7 fields, found {found}")]
    FieldCount { line: usize, found: usize },
    #[error("line {line}: invalid {field} value `{value}`")]
    InvalidValue {
        line: usize,
        field: &'static str,
        value: String,
    },
}

const FIELDS: [&str; 7] = ["id", "type", "x", "y", "z", "radius", "parent"];

/// Largest magnitude an integer column holds exactly in the `f64` data block.
const MAX_EXACT_INT: i64 = 1 << 53;

/// Reader for SWC files: one `ID TYPE X Y Z R PARENT` record per line.
pub struct SwcReader;

impl SwcReader {
    fn parse_line(line_no: usize, fields: &[&str]) -> Result<Sample, SwcError> {
        if fields.len() != FIELDS.len() {
            return Err(SwcError::FieldCount {
                line: line_no,
                found: fields.len(),
            });
        }

        let mut values = [0.0f64; 7];
        for (i, raw) in fields.iter().enumerate() {
            values[i] = raw
                .parse::<f64>()
                .ok()
                .filter(|v| v.is_finite())
                .ok_or_else(|| SwcError::InvalidValue {
                    line: line_no,
                    field: FIELDS[i],
                    value: raw.to_string(),
                })?;
        }

        // id, type and parent are integers, possibly written as `1.0`
        let integral = |i: usize| -> Result<i64, SwcError> {
            let exact = match fields[i].parse::<i64>() {
                Ok(v) => Some(v),
                Err(_) => {
                    let v = values[i];
                    (v.fract() == 0.0 && v.abs() <= MAX_EXACT_INT as f64).then_some(v as i64)
                }
            };
            exact
                .filter(|v| v.unsigned_abs() <= MAX_EXACT_INT as u64)
                .ok_or_else(|| SwcError::InvalidValue {
                    line: line_no,
                    field: FIELDS[i],
                    value: fields[i].to_string(),
                })
        };

        Ok(Sample {
            id: integral(0)?,
            point_type: integral(1)?,
            x: values[2],
            y: values[3],
            z: values[4],
            radius: values[5],
            parent: integral(6)?,
        })
    }
}

impl MorphologyReader for SwcReader {
    type Error = SwcError;

    const FORMAT: FileFormat = FileFormat::Swc;

    fn parse(text: &str) -> Result<RawData, SwcError> {
        let mut samples = Vec::new();
        for (idx, line) in text.lines().enumerate() {
            let content = match line.find('#') {
                Some(pos) => &line[..pos],
                None => line,
            };
            let fields: Vec<&str> = content.split_whitespace().collect();
            if fields.is_empty() {
                continue;
            }
            samples.push(Self::parse_line(idx + 1, &fields)?);
        }
        Ok(RawData::from_samples(&samples, FileFormat::Swc))
    }
}
