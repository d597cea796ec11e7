use std::fmt;
use std::ops::Index;

use crate::config::FormatConfig;
use crate::error::{checked_len, LinAlgError, Result};
use crate::math::vector::{dot_ordered, Vector};

/// A dense real matrix stored row-major in a single buffer.
#[derive(Clone, Debug, PartialEq)]
pub struct Matrix {
    data: Vec<f64>,
    rows: usize,
    cols: usize,
}

impl Matrix {
    /// Allocate a `rows x cols` zero matrix.
    pub fn new(rows: usize, cols: usize) -> Result<Self> {
        check_extents(rows, cols)?;
        let len = checked_len("Matrix", rows, cols)?;
        Ok(Self {
            data: vec![0.0; len],
            rows,
            cols,
        })
    }

    /// Build a matrix from row-major `data`.
    pub fn from_shape_vec(shape: (usize, usize), data: Vec<f64>) -> Result<Self> {
        let (rows, cols) = shape;
        check_extents(rows, cols)?;
        if rows.checked_mul(cols) != Some(data.len()) {
            return Err(LinAlgError::DimensionMismatch {
                op: "matrix construction",
                lhs: rows.saturating_mul(cols),
                rhs: data.len(),
            });
        }
        Ok(Self { data, rows, cols })
    }

    /// Build a matrix from a slice of equally long rows.
    pub fn from_rows(rows: &[Vec<f64>]) -> Result<Self> {
        let nrows = rows.len();
        let ncols = rows.first().map_or(0, |r| r.len());
        check_extents(nrows, ncols)?;

        let mut data = Vec::with_capacity(nrows * ncols);
        for row in rows {
            if row.len() != ncols {
                return Err(LinAlgError::DimensionMismatch {
                    op: "matrix rows",
                    lhs: ncols,
                    rhs: row.len(),
                });
            }
            data.extend_from_slice(row);
        }
        Ok(Self {
            data,
            rows: nrows,
            cols: ncols,
        })
    }

    /// Square identity matrix of the given dimension.
    pub fn identity(dim: usize) -> Result<Self> {
        let mut identity = Matrix::new(dim, dim)?;
        for i in 0..dim {
            let offset = identity.offset(i, i);
            identity.data[offset] = 1.0;
        }
        Ok(identity)
    }

    pub fn nrows(&self) -> usize {
        self.rows
    }

    pub fn ncols(&self) -> usize {
        self.cols
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    pub fn to_vec(&self) -> Vec<f64> {
        self.data.clone()
    }

    #[inline]
    fn offset(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    fn checked_offset(&self, row: usize, col: usize) -> Result<usize> {
        self.check_row(row)?;
        if col >= self.cols {
            return Err(LinAlgError::IndexOutOfBounds {
                axis: "Column",
                index: col,
                len: self.cols,
            });
        }
        Ok(self.offset(row, col))
    }

    fn check_row(&self, row: usize) -> Result<()> {
        if row >= self.rows {
            return Err(LinAlgError::IndexOutOfBounds {
                axis: "Row",
                index: row,
                len: self.rows,
            });
        }
        Ok(())
    }

    pub fn get(&self, row: usize, col: usize) -> Result<f64> {
        let offset = self.checked_offset(row, col)?;
        Ok(self.data[offset])
    }

    pub fn set(&mut self, row: usize, col: usize, value: f64) -> Result<()> {
        let offset = self.checked_offset(row, col)?;
        self.data[offset] = value;
        Ok(())
    }

    pub fn row_slice(&self, row: usize) -> Result<&[f64]> {
        self.check_row(row)?;
        let start = self.offset(row, 0);
        Ok(&self.data[start..start + self.cols])
    }

    /// Copy row `row` into a fresh vector of dimension `ncols()`.
    pub fn row(&self, row: usize) -> Result<Vector> {
        Vector::from_vec(self.row_slice(row)?.to_vec())
    }

    /// Copy column `col` into a fresh vector of dimension `nrows()`.
    pub fn column(&self, col: usize) -> Result<Vector> {
        if col >= self.cols {
            return Err(LinAlgError::IndexOutOfBounds {
                axis: "Column",
                index: col,
                len: self.cols,
            });
        }
        let values = self
            .data
            .chunks_exact(self.cols)
            .map(|row| row[col])
            .collect();
        Vector::from_vec(values)
    }

    pub fn transpose(&self) -> Matrix {
        let mut data = vec![0.0; self.data.len()];
        for (i, row) in self.data.chunks_exact(self.cols).enumerate() {
            for (j, &value) in row.iter().enumerate() {
                data[j * self.rows + i] = value;
            }
        }
        Matrix {
            data,
            rows: self.cols,
            cols: self.rows,
        }
    }

    /// Matrix product `m1 * m2`.
    ///
    /// Each entry is `Σ_k m1[i, k] * m2[k, j]` accumulated from `0.0` in
    /// ascending `k`, so the result does not depend on the platform.
    pub fn multiply(m1: &Matrix, m2: &Matrix) -> Result<Matrix> {
        if m1.cols != m2.rows {
            return Err(LinAlgError::DimensionMismatch {
                op: "matrix multiply",
                lhs: m1.cols,
                rhs: m2.rows,
            });
        }
        log::debug!(
            "Multiplying {}x{} by {}x{}",
            m1.rows,
            m1.cols,
            m2.rows,
            m2.cols
        );

        let len = checked_len("Matrix", m1.rows, m2.cols)?;
        let mut data = Vec::with_capacity(len);
        for lhs_row in m1.data.chunks_exact(m1.cols) {
            for j in 0..m2.cols {
                let value = lhs_row
                    .iter()
                    .enumerate()
                    .fold(0.0, |acc, (k, &a)| acc + a * m2.data[m2.offset(k, j)]);
                data.push(value);
            }
        }
        Ok(Matrix {
            data,
            rows: m1.rows,
            cols: m2.cols,
        })
    }

    /// Matrix-vector product `m * v`, treating `v` as a column vector.
    pub fn multiply_vector(m: &Matrix, v: &Vector) -> Result<Vector> {
        if m.cols != v.dim() {
            return Err(LinAlgError::DimensionMismatch {
                op: "matrix-vector multiply",
                lhs: m.cols,
                rhs: v.dim(),
            });
        }
        log::debug!("Multiplying {}x{} by vector of dimension {}", m.rows, m.cols, v.dim());

        let values = m
            .data
            .chunks_exact(m.cols)
            .map(|row| dot_ordered(row, v.as_slice()))
            .collect();
        Vector::from_vec(values)
    }

    /// Render one line per row with the default `%6.3f`-style config.
    pub fn format(&self) -> String {
        self.format_with(&FormatConfig::default())
    }

    pub fn format_with(&self, config: &FormatConfig) -> String {
        let mut out = String::new();
        // fmt::Write for String never fails
        let _ = self.write_with(&mut out, config);
        out
    }

    fn write_with<W: fmt::Write>(&self, out: &mut W, config: &FormatConfig) -> fmt::Result {
        for row in self.data.chunks_exact(self.cols) {
            out.write_char('[')?;
            for &value in row {
                config.write_element(out, value)?;
            }
            out.write_str(" ]\n")?;
        }
        Ok(())
    }
}

fn check_extents(rows: usize, cols: usize) -> Result<()> {
    if rows == 0 {
        return Err(LinAlgError::NonPositiveDimension {
            what: "Matrix row",
            dim: rows,
        });
    }
    if cols == 0 {
        return Err(LinAlgError::NonPositiveDimension {
            what: "Matrix column",
            dim: cols,
        });
    }
    Ok(())
}

impl Index<(usize, usize)> for Matrix {
    type Output = f64;

    fn index(&self, index: (usize, usize)) -> &Self::Output {
        let (row, col) = index;
        assert!(
            row < self.rows && col < self.cols,
            "index ({}, {}) out of bounds for {}x{} matrix",
            row,
            col,
            self.rows,
            self.cols
        );
        &self.data[self.offset(row, col)]
    }
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_with(f, &FormatConfig::default())
    }
}
