//! Borrowed row views returned by `Matrix::row` and `Matrix::row_mut`.
//!
//! Column access through a view is bounds-checked the same way as
//! `Matrix::get`: the checked methods return `LinalgError::Index`, the
//! `Index` impls panic with that error's message.

use std::ops::{Index, IndexMut};
use std::slice::Iter;

use crate::error::{LinalgError, Result};

#[derive(Debug, Clone, Copy)]
pub struct Row<'a> {
    values: &'a [f64],
    row: usize,
    rows: usize,
}

impl<'a> Row<'a> {
    pub(crate) fn new(values: &'a [f64], row: usize, rows: usize) -> Self {
        Self { values, row, rows }
    }

    fn out_of_bounds(&self, column: usize) -> LinalgError {
        LinalgError::Index {
            row: self.row,
            column,
            rows: self.rows,
            columns: self.values.len(),
        }
    }

    pub fn get(&self, column: usize) -> Result<f64> {
        self.values
            .get(column)
            .copied()
            .ok_or_else(|| self.out_of_bounds(column))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> Iter<'a, f64> {
        self.values.iter()
    }

    pub fn as_slice(&self) -> &'a [f64] {
        self.values
    }
}

impl Index<usize> for Row<'_> {
    type Output = f64;

    fn index(&self, column: usize) -> &Self::Output {
        match self.values.get(column) {
            Some(value) => value,
            None => panic!("{}", self.out_of_bounds(column)),
        }
    }
}

#[derive(Debug)]
pub struct RowMut<'a> {
    values: &'a mut [f64],
    row: usize,
    rows: usize,
}

impl<'a> RowMut<'a> {
    pub(crate) fn new(values: &'a mut [f64], row: usize, rows: usize) -> Self {
        Self { values, row, rows }
    }

    fn out_of_bounds(&self, column: usize) -> LinalgError {
        LinalgError::Index {
            row: self.row,
            column,
            rows: self.rows,
            columns: self.values.len(),
        }
    }

    pub fn get(&self, column: usize) -> Result<f64> {
        self.values
            .get(column)
            .copied()
            .ok_or_else(|| self.out_of_bounds(column))
    }

    pub fn get_mut(&mut self, column: usize) -> Result<&mut f64> {
        let err = self.out_of_bounds(column);
        self.values.get_mut(column).ok_or(err)
    }

    pub fn set(&mut self, column: usize, value: f64) -> Result<()> {
        *self.get_mut(column)? = value;
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn as_slice(&self) -> &[f64] {
        &*self.values
    }

    pub fn as_mut_slice(&mut self) -> &mut [f64] {
        &mut *self.values
    }
}

impl Index<usize> for RowMut<'_> {
    type Output = f64;

    fn index(&self, column: usize) -> &Self::Output {
        match self.values.get(column) {
            Some(value) => value,
            None => panic!("{}", self.out_of_bounds(column)),
        }
    }
}

impl IndexMut<usize> for RowMut<'_> {
    fn index_mut(&mut self, column: usize) -> &mut Self::Output {
        let err = self.out_of_bounds(column);
        match self.values.get_mut(column) {
            Some(value) => value,
            None => panic!("{}", err),
        }
    }
}
