//! dense-linalg: a dense `f64` matrix and the Gaussian-elimination toolkit
//! built on it.
//!
//! The crate is split into the matrix container (`math`: buffer, matrix,
//! row views, arithmetic), the algorithms (`linalg`: trace, norm,
//! determinant, rank, LU, solve, invert, power, concatenate, identity,
//! transpose), the pipe-delimited text format (`io`), and shared error and
//! configuration types.
//!
//! ```
//! use dense_linalg::{solve, Matrix};
//!
//! let a: Matrix = "| 2 1 | | 1 3 |".parse().unwrap();
//! let f = Matrix::from_column(&[3.0, 4.0]);
//! let x = solve(&a, &f).unwrap();
//! assert_eq!(x, Matrix::from_column(&[1.0, 1.0]));
//! ```
pub mod config;
pub mod error;
pub mod io;
pub mod linalg;
pub mod math;

pub use config::{load_config, FormatOptions, LinalgConfig, Tolerance};
pub use error::{LinalgError, Result};
pub use io::{
    parse_matrix, read_matrix, read_matrix_file, render_matrix, write_matrix, write_matrix_with,
};
pub use linalg::{
    concatenate, determinant, determinant_with, identity, invert, invert_with, lu_decompose,
    lu_decompose_with, norm, power, power_with, rank, rank_with, solve, solve_with, trace,
    transpose,
};
pub use math::{Matrix, Row, RowMut};
