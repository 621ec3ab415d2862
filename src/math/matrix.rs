use std::mem;
use std::ops::{Index, IndexMut};

use crate::config::{Tolerance, EQUALITY_TOLERANCE};
use crate::error::{LinalgError, Result};
use crate::linalg;
use crate::math::buffer::Buffer;
use crate::math::row::{Row, RowMut};

/// Dense row-major matrix of `f64`.
///
/// The element buffer may be larger than the logical shape: `size()` is
/// `rows * columns`, `capacity()` is the allocated length. Shapes with
/// exactly one zero dimension are normalized to the empty `0x0` matrix.
#[derive(Debug, Default)]
pub struct Matrix {
    buffer: Buffer,
    rows: usize,
    columns: usize,
}

#[inline]
fn normalize_shape(rows: usize, columns: usize) -> (usize, usize) {
    if rows == 0 || columns == 0 {
        (0, 0)
    } else {
        (rows, columns)
    }
}

impl Matrix {
    /// The empty matrix; nothing is allocated.
    pub fn new() -> Self {
        Self::default()
    }

    /// Zero-filled `rows x columns` matrix with `capacity == size`.
    pub fn zeros(rows: usize, columns: usize) -> Self {
        let (rows, columns) = normalize_shape(rows, columns);
        Self {
            buffer: Buffer::zeroed(rows * columns),
            rows,
            columns,
        }
    }

    /// Zero-filled column vector of length `len`.
    pub fn column_vector(len: usize) -> Self {
        Self::zeros(len, 1)
    }

    pub fn identity(n: usize) -> Self {
        linalg::identity(n)
    }

    pub fn from_shape_vec(shape: (usize, usize), data: Vec<f64>) -> Result<Self> {
        let (rows, columns) = shape;
        if data.len() != rows * columns {
            return Err(LinalgError::shape(format!(
                "invalid shape ({}, {}) for buffer of length {}",
                rows,
                columns,
                data.len()
            )));
        }
        let (rows, columns) = normalize_shape(rows, columns);
        let buffer = if rows == 0 {
            Buffer::new()
        } else {
            Buffer::from_vec(data)
        };
        Ok(Self {
            buffer,
            rows,
            columns,
        })
    }

    /// Build from nested row literals. All rows must have the same length.
    ///
    /// ```
    /// use dense_linalg::Matrix;
    ///
    /// let m = Matrix::from_rows(&[[1.0, 2.0], [3.0, 4.0]]).unwrap();
    /// assert_eq!(m.shape(), (2, 2));
    /// assert!(Matrix::from_rows(&[vec![1.0, 2.0], vec![3.0]]).is_err());
    /// ```
    pub fn from_rows<R: AsRef<[f64]>>(rows: &[R]) -> Result<Self> {
        let columns = rows.first().map_or(0, |row| row.as_ref().len());
        let mut data = Vec::with_capacity(rows.len() * columns);
        for (idx, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != columns {
                return Err(LinalgError::shape(format!(
                    "inconsistent row length: row {} has {} values, expected {}",
                    idx,
                    row.len(),
                    columns
                )));
            }
            data.extend_from_slice(row);
        }
        Self::from_shape_vec((rows.len(), columns), data)
    }

    /// Column vector holding `values`.
    pub fn from_column(values: &[f64]) -> Self {
        let mut m = Self::column_vector(values.len());
        m.buffer.copy_prefix_from(values);
        m
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.columns)
    }

    pub fn size(&self) -> usize {
        self.rows * self.columns
    }

    pub fn capacity(&self) -> usize {
        self.buffer.capacity()
    }

    pub fn is_empty(&self) -> bool {
        self.rows == 0 && self.columns == 0
    }

    pub fn is_square(&self) -> bool {
        self.rows == self.columns
    }

    /// Address of the element buffer; null when nothing is allocated.
    pub fn as_ptr(&self) -> *const f64 {
        self.buffer.as_ptr()
    }

    /// Logical elements in row-major order.
    pub fn as_slice(&self) -> &[f64] {
        &self.buffer.as_slice()[..self.size()]
    }

    pub fn as_mut_slice(&mut self) -> &mut [f64] {
        let size = self.size();
        &mut self.buffer.as_mut_slice()[..size]
    }

    #[inline]
    fn offset(&self, row: usize, column: usize) -> usize {
        row * self.columns + column
    }

    fn check_index(&self, row: usize, column: usize) -> Result<usize> {
        if row >= self.rows || column >= self.columns {
            return Err(LinalgError::Index {
                row,
                column,
                rows: self.rows,
                columns: self.columns,
            });
        }
        Ok(self.offset(row, column))
    }

    pub fn get(&self, row: usize, column: usize) -> Result<f64> {
        let offset = self.check_index(row, column)?;
        Ok(self.buffer.as_slice()[offset])
    }

    pub fn get_mut(&mut self, row: usize, column: usize) -> Result<&mut f64> {
        let offset = self.check_index(row, column)?;
        Ok(&mut self.buffer.as_mut_slice()[offset])
    }

    pub fn set(&mut self, row: usize, column: usize, value: f64) -> Result<()> {
        *self.get_mut(row, column)? = value;
        Ok(())
    }

    /// Bounds-checked view of one row.
    pub fn row(&self, row: usize) -> Result<Row<'_>> {
        if row >= self.rows {
            return Err(LinalgError::Index {
                row,
                column: 0,
                rows: self.rows,
                columns: self.columns,
            });
        }
        Ok(Row::new(self.row_slice(row), row, self.rows))
    }

    pub fn row_mut(&mut self, row: usize) -> Result<RowMut<'_>> {
        if row >= self.rows {
            return Err(LinalgError::Index {
                row,
                column: 0,
                rows: self.rows,
                columns: self.columns,
            });
        }
        let rows = self.rows;
        let start = self.offset(row, 0);
        let end = start + self.columns;
        Ok(RowMut::new(&mut self.buffer.as_mut_slice()[start..end], row, rows))
    }

    pub fn row_slice(&self, row: usize) -> &[f64] {
        let start = self.offset(row, 0);
        &self.as_slice()[start..start + self.columns]
    }

    /// Copy of column `column` as a column vector.
    pub fn column(&self, column: usize) -> Result<Matrix> {
        if column >= self.columns {
            return Err(LinalgError::Index {
                row: 0,
                column,
                rows: self.rows,
                columns: self.columns,
            });
        }
        let values: Vec<f64> = (0..self.rows).map(|row| self[(row, column)]).collect();
        Ok(Matrix::from_column(&values))
    }

    pub fn map<F>(&self, mut f: F) -> Matrix
    where
        F: FnMut(f64) -> f64,
    {
        let data = self.as_slice().iter().map(|&v| f(v)).collect();
        Matrix {
            buffer: Buffer::from_vec(data),
            rows: self.rows,
            columns: self.columns,
        }
    }

    /// Copy whose capacity equals its size.
    pub fn to_compact(&self) -> Matrix {
        Matrix {
            buffer: Buffer::from_vec(self.as_slice().to_vec()),
            rows: self.rows,
            columns: self.columns,
        }
    }

    pub fn to_vec(&self) -> Vec<f64> {
        self.as_slice().to_vec()
    }

    /// Grow capacity to `capacity` elements, keeping contents and shape.
    /// Does nothing when the buffer is already large enough.
    pub fn reserve(&mut self, capacity: usize) {
        if capacity > self.capacity() {
            let size = self.size();
            self.buffer.reallocate(capacity, size);
        }
    }

    /// Change the logical shape. Reuses the buffer when it is large enough;
    /// otherwise reallocates to exactly `rows * columns`, keeping the
    /// currently valid elements and zero-filling the remainder.
    pub fn reshape(&mut self, rows: usize, columns: usize) {
        let (rows, columns) = normalize_shape(rows, columns);
        let required = rows * columns;
        if required > self.capacity() {
            let size = self.size();
            self.buffer.reallocate(required, size);
        }
        self.rows = rows;
        self.columns = columns;
    }

    /// Reduce capacity to exactly `size()`, releasing the buffer when empty.
    pub fn shrink_to_fit(&mut self) {
        let size = self.size();
        if size == 0 {
            self.buffer.release();
        } else if self.capacity() > size {
            self.buffer.reallocate(size, size);
        }
    }

    /// Reset the shape to `0x0`; the allocation is kept.
    pub fn clear(&mut self) {
        self.rows = 0;
        self.columns = 0;
    }

    pub fn swap(&mut self, other: &mut Matrix) {
        mem::swap(self, other);
    }

    /// Move the contents out, leaving `self` empty and unallocated.
    pub fn take(&mut self) -> Matrix {
        mem::take(self)
    }

    pub fn approx_eq(&self, other: &Matrix, tolerance: f64) -> bool {
        self.shape() == other.shape()
            && self
                .as_slice()
                .iter()
                .zip(other.as_slice())
                .all(|(a, b)| (a - b).abs() <= tolerance)
    }

    /// `approx_eq` using the configured `tolerance.equality`.
    pub fn approx_eq_with(&self, other: &Matrix, tolerance: &Tolerance) -> bool {
        self.approx_eq(other, tolerance.equality)
    }

    pub fn transpose(&self) -> Matrix {
        linalg::transpose(self)
    }

    pub fn trace(&self) -> Result<f64> {
        linalg::trace(self)
    }

    pub fn norm(&self) -> f64 {
        linalg::norm(self)
    }

    pub fn det(&self) -> Result<f64> {
        linalg::determinant(self)
    }

    pub fn rank(&self) -> usize {
        linalg::rank(self)
    }

    pub fn rank_with(&self, tolerance: &Tolerance) -> usize {
        linalg::rank_with(self, tolerance)
    }

    pub fn lu_decompose(&self) -> Result<(Matrix, Matrix)> {
        linalg::lu_decompose(self)
    }
}

impl Clone for Matrix {
    /// Deep copy with the same capacity as the source.
    fn clone(&self) -> Self {
        let mut buffer = Buffer::zeroed(self.capacity());
        buffer.copy_prefix_from(self.as_slice());
        Self {
            buffer,
            rows: self.rows,
            columns: self.columns,
        }
    }

    /// Assignment: the destination buffer is reused when it can hold the
    /// source's elements, otherwise replaced by one of exactly that size.
    fn clone_from(&mut self, source: &Self) {
        if self.capacity() < source.size() {
            self.buffer = Buffer::zeroed(source.size());
        }
        self.buffer.copy_prefix_from(source.as_slice());
        self.rows = source.rows;
        self.columns = source.columns;
    }
}

impl PartialEq for Matrix {
    fn eq(&self, other: &Self) -> bool {
        self.approx_eq(other, EQUALITY_TOLERANCE)
    }
}

impl Index<(usize, usize)> for Matrix {
    type Output = f64;

    fn index(&self, index: (usize, usize)) -> &Self::Output {
        match self.check_index(index.0, index.1) {
            Ok(offset) => &self.buffer.as_slice()[offset],
            Err(err) => panic!("{}", err),
        }
    }
}

impl IndexMut<(usize, usize)> for Matrix {
    fn index_mut(&mut self, index: (usize, usize)) -> &mut Self::Output {
        match self.check_index(index.0, index.1) {
            Ok(offset) => &mut self.buffer.as_mut_slice()[offset],
            Err(err) => panic!("{}", err),
        }
    }
}

impl From<Vec<f64>> for Matrix {
    fn from(values: Vec<f64>) -> Self {
        let len = values.len();
        let (rows, columns) = normalize_shape(len, 1);
        let buffer = if rows == 0 {
            Buffer::new()
        } else {
            Buffer::from_vec(values)
        };
        Matrix {
            buffer,
            rows,
            columns,
        }
    }
}

impl TryFrom<Vec<Vec<f64>>> for Matrix {
    type Error = LinalgError;

    fn try_from(rows: Vec<Vec<f64>>) -> Result<Self> {
        Matrix::from_rows(&rows)
    }
}
