/* ************************************************************************ **
** This file is part of linmin, and is licensed under EITHER the MIT       **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

use linmin_slice_math::vdot;

use crate::{check_input, Dim, LinearOperator, ShapeError};

/// Owned matrix type with C layout.
#[derive(Debug, Clone, PartialEq)]
pub struct DenseMatrix {
    // c-contiguous, row-contiguous data
    data: Vec<f64>,
    // invariant: rows * cols == data.len()
    rows: usize,
    cols: usize,
}

impl DenseMatrix {
    pub fn from_row_major_data((rows, cols): (usize, usize), data: Vec<f64>) -> Self {
        assert_eq!(data.len(), rows * cols, "data does not match dimensions");
        DenseMatrix { data, rows, cols }
    }

    /// Construct from rows.
    ///
    /// The width must be provided explicitly since it cannot be inferred for 0 rows.
    pub fn from_rows<R: AsRef<[f64]>>(cols: usize, rows: impl IntoIterator<Item = R>) -> Self {
        let mut data = vec![];
        let mut count = 0;
        for row in rows {
            let row = row.as_ref();
            assert_eq!(row.len(), cols, "row {} has incorrect width", count);
            data.extend_from_slice(row);
            count += 1;
        }
        DenseMatrix { data, rows: count, cols }
    }

    pub fn eye(n: usize) -> Self {
        let mut data = vec![0.0; n * n];
        for i in 0..n {
            data[i * n + i] = 1.0;
        }
        DenseMatrix { data, rows: n, cols: n }
    }

    /// `(rows, cols)`
    pub fn shape(&self) -> (usize, usize) { (self.rows, self.cols) }

    pub fn row(&self, r: usize) -> &[f64] { &self.data[r * self.cols..(r + 1) * self.cols] }

    pub fn row_major_data(&self) -> &[f64] { &self.data }
}

impl LinearOperator<Vec<f64>> for DenseMatrix {
    fn domain(&self) -> Dim { Dim(self.cols) }
    fn codomain(&self) -> Dim { Dim(self.rows) }

    fn apply(&self, x: &Vec<f64>, transpose: bool) -> Result<Vec<f64>, ShapeError> {
        check_input(self, x, transpose)?;
        Ok(match transpose {
            false => (0..self.rows).map(|r| vdot(self.row(r), x)).collect(),
            true => {
                let mut out = vec![0.0; self.cols];
                for (r, &xr) in x.iter().enumerate() {
                    for (o, &a) in out.iter_mut().zip(self.row(r)) {
                        *o += a * xr;
                    }
                }
                out
            },
        })
    }
}
