use ndarray::{Array2, Axis};

use crate::types::{FileFormat, PointType};

/// Column layout of a raw data block.
pub mod cols {
    pub const X: usize = 0;
    pub const Y: usize = 1;
    pub const Z: usize = 2;
    pub const R: usize = 3;
    pub const TYPE: usize = 4;
    pub const ID: usize = 5;
    pub const P: usize = 6;
    /// Number of columns in a data block.
    pub const COUNT: usize = 7;
}

/// Parent identifier of a root sample.
pub const ROOT_PARENT: i64 = -1;

/// One sample record as emitted by a format reader.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    pub id: i64,
    pub point_type: i64,
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub radius: f64,
    pub parent: i64,
}

impl Sample {
    fn to_row(self) -> [f64; cols::COUNT] {
        let mut row = [0.0; cols::COUNT];
        row[cols::X] = self.x;
        row[cols::Y] = self.y;
        row[cols::Z] = self.z;
        row[cols::R] = self.radius;
        row[cols::TYPE] = self.point_type as f64;
        row[cols::ID] = self.id as f64;
        row[cols::P] = self.parent as f64;
        row
    }
}

/// Read access to the identifier, type and parent columns of a raw point
/// table, independent of the file format it came from.
pub trait PointTable {
    /// Number of sample rows.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Sample identifiers in row order.
    fn ids(&self) -> Vec<i64>;

    /// Raw type codes in row order.
    fn point_types(&self) -> Vec<i64>;

    /// Parent identifiers in row order; `ROOT_PARENT` marks a root.
    fn parent_ids(&self) -> Vec<i64>;
}

/// Unprocessed sample rows of a morphology file, one row per sample,
/// laid out according to [`cols`]. Rows keep file order.
#[derive(Debug, Clone, PartialEq)]
pub struct RawData {
    pub data_block: Array2<f64>,
    pub format: FileFormat,
}

impl RawData {
    pub fn from_samples(samples: &[Sample], format: FileFormat) -> Self {
        let mut data_block = Array2::zeros((samples.len(), cols::COUNT));
        for (mut row, sample) in data_block.axis_iter_mut(Axis(0)).zip(samples) {
            for (dst, src) in row.iter_mut().zip(sample.to_row()) {
                *dst = src;
            }
        }
        Self { data_block, format }
    }

    /// Rows whose type column is the soma code.
    pub fn soma_points(&self) -> Array2<f64> {
        let rows: Vec<usize> = self
            .point_types()
            .into_iter()
            .enumerate()
            .filter_map(|(i, t)| (PointType::from_code(t) == PointType::Soma).then_some(i))
            .collect();
        self.data_block.select(Axis(0), &rows)
    }

    fn int_column(&self, col: usize) -> Vec<i64> {
        self.data_block.column(col).iter().map(|v| *v as i64).collect()
    }
}

impl PointTable for RawData {
    fn len(&self) -> usize {
        self.data_block.nrows()
    }

    fn ids(&self) -> Vec<i64> {
        self.int_column(cols::ID)
    }

    fn point_types(&self) -> Vec<i64> {
        self.int_column(cols::TYPE)
    }

    fn parent_ids(&self) -> Vec<i64> {
        self.int_column(cols::P)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(id: i64, point_type: PointType, parent: i64) -> Sample {
        Sample {
            id,
            point_type: point_type.code(),
            x: id as f64,
            y: 0.5,
            z: -1.0,
            radius: 2.0,
            parent,
        }
    }

    #[test]
    fn from_samples_lays_out_columns() {
        let data = RawData::from_samples(
            &[
                sample(1, PointType::Soma, ROOT_PARENT),
                sample(2, PointType::Axon, 1),
            ],
            FileFormat::Swc,
        );

        assert_eq!(data.data_block.dim(), (2, cols::COUNT));
        assert_eq!(data.data_block[[1, cols::X]], 2.0);
        assert_eq!(data.data_block[[1, cols::R]], 2.0);
        assert_eq!(data.ids(), vec![1, 2]);
        assert_eq!(data.point_types(), vec![1, 2]);
        assert_eq!(data.parent_ids(), vec![-1, 1]);
    }

    #[test]
    fn soma_points_selects_soma_rows_only() {
        let data = RawData::from_samples(
            &[
                sample(1, PointType::Soma, ROOT_PARENT),
                sample(2, PointType::Axon, 1),
                sample(3, PointType::Soma, 1),
            ],
            FileFormat::Swc,
        );

        let soma = data.soma_points();
        assert_eq!(soma.nrows(), 2);
        assert_eq!(soma[[1, cols::ID]], 3.0);
    }

    #[test]
    fn empty_table() {
        let data = RawData::from_samples(&[], FileFormat::Neurolucida);
        assert!(data.is_empty());
        assert_eq!(data.soma_points().nrows(), 0);
    }
}
