//! The dense matrix container.
//!
//! `Buffer` owns the raw element storage; `Matrix` lays a row-major
//! `rows x columns` view over it and tracks size separately from capacity.
//! `Row`/`RowMut` are the bounds-checked row views; `ops` holds the
//! arithmetic operators.
pub mod buffer;
pub mod matrix;
pub mod ops;
pub mod row;

pub use buffer::Buffer;
pub use matrix::Matrix;
pub use row::{Row, RowMut};
