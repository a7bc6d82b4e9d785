/* ************************************************************************ **
** This file is part of linmin, and is licensed under EITHER the MIT       **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! Compressed Sparse Row (CSR) matrices

use crate::{check_input, Dim, LinearOperator, ShapeError};

/// A matrix in Compressed Sparse Row (CSR) format.
#[derive(Debug, Clone, PartialEq)]
pub struct CsrMatrix {
    dim: (usize, usize),
    val: Vec<f64>,
    idx: Vec<usize>,
    ptr: Vec<usize>, // "insertion indices" between rows
}

fn is_sorted(xs: &[usize]) -> bool { xs.windows(2).all(|w| w[0] <= w[1]) }
fn is_strictly_sorted(xs: &[usize]) -> bool { xs.windows(2).all(|w| w[0] < w[1]) }

fn validate(csr: &CsrMatrix) {
    let CsrMatrix { ptr, val, idx, dim } = csr;

    // ptr is a sorted list of "endpoints", of length nrows + 1
    assert_eq!(ptr.len(), dim.0 + 1, "ptr must have nrows + 1 elements");
    assert_eq!(ptr[0], 0, "ptr must begin at zero");
    assert_eq!(ptr[dim.0], idx.len(), "ptr must end at nnz");
    assert!(is_sorted(ptr), "ptr must be sorted");

    // idx is a concatenated set of strictly sorted lists, whose endpoints are in ptr
    assert_eq!(idx.len(), val.len());
    assert!(
        ptr.windows(2).all(|win| is_strictly_sorted(&idx[win[0]..win[1]])),
        "columns within a row must be strictly increasing",
    );
    assert!(idx.iter().all(|&c| c < dim.1), "column out of range");
}

impl CsrMatrix {
    /// Build a CSR matrix from its components, which are:
    ///  * `dim`: A tuple `(nrows, ncols)`
    ///  * `val`: A vector of explicit values stored in the matrix, ordered by row then column.
    ///  * `col`: The column of each value in `val`.
    ///  * `ptr`: A list of indices for the endpoints of each row. That is, row `i` consists of
    ///           the elements from `val` and `col` in the range `ptr[i]..ptr[i+1]`.  It must
    ///           contain `nrows+1` elements, starting with `0` and ending in `val.len()`.
    ///
    /// This validates all of the class invariants, with O(`val.len()`) total complexity.
    pub fn from_parts(dim: (usize, usize), val: Vec<f64>, col: Vec<usize>, ptr: Vec<usize>) -> Self {
        let csr = CsrMatrix { dim, val, idx: col, ptr };
        validate(&csr);
        csr
    }

    /// Build from an iterator of `((row, col), value)`.
    ///
    /// The iterator must satisfy the following:
    ///
    /// * Elements are sorted by row, then column.
    /// * No `(row, col)` position is specified twice.
    /// * `row < dim.0`, `col < dim.1`
    pub fn from_triplets<I>(dim: (usize, usize), iter: I) -> Self
    where I: IntoIterator<Item = ((usize, usize), f64)>,
    {
        let iter = iter.into_iter();
        let cap = iter.size_hint().0;
        let mut val = Vec::with_capacity(cap);
        let mut idx = Vec::with_capacity(cap);
        let mut ptr = Vec::with_capacity(dim.0 + 1);
        ptr.push(0); // beginning index of first row

        for ((row, col), x) in iter {
            assert!(row < dim.0, "row out of range");
            assert!(ptr.len() <= row + 1, "triplets must be sorted by row");

            // terminate the previous row and add any empty rows, if necessary
            while ptr.len() <= row {
                ptr.push(idx.len())
            }

            idx.push(col);
            val.push(x);
        }

        // terminate the last filled row and add empty rows to end
        while ptr.len() <= dim.0 {
            ptr.push(idx.len())
        }

        CsrMatrix::from_parts(dim, val, idx, ptr)
    }

    /// Constructs a diagonal matrix
    pub fn from_diagonal(diag: Vec<f64>) -> Self {
        let n = diag.len();
        CsrMatrix {
            dim: (n, n),
            val: diag,
            idx: (0..n).collect(),
            ptr: (0..n + 1).collect(),
        }
    }

    /// Constructs an identity matrix
    pub fn eye(n: usize) -> Self { CsrMatrix::from_diagonal(vec![1.0; n]) }

    /// `(nrows, ncols)`
    pub fn shape(&self) -> (usize, usize) { self.dim }

    /// Number of explicitly stored values.
    pub fn nnz(&self) -> usize { self.val.len() }

    fn row(&self, r: usize) -> impl Iterator<Item = (usize, f64)> + '_ {
        let range = self.ptr[r]..self.ptr[r + 1];
        self.idx[range.clone()].iter().cloned().zip(self.val[range].iter().cloned())
    }
}

impl LinearOperator<Vec<f64>> for CsrMatrix {
    fn domain(&self) -> Dim { Dim(self.dim.1) }
    fn codomain(&self) -> Dim { Dim(self.dim.0) }

    fn apply(&self, x: &Vec<f64>, transpose: bool) -> Result<Vec<f64>, ShapeError> {
        check_input(self, x, transpose)?;
        Ok(match transpose {
            false => {
                (0..self.dim.0)
                    .map(|r| self.row(r).map(|(c, a)| a * x[c]).sum())
                    .collect()
            },
            true => {
                // scatter each row into the output
                let mut out = vec![0.0; self.dim.1];
                for (r, &xr) in x.iter().enumerate() {
                    for (c, a) in self.row(r) {
                        out[c] += a * xr;
                    }
                }
                out
            },
        })
    }
}
