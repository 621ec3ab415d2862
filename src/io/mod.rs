//! Text input/output for matrices.
pub mod pipe_text;

pub use pipe_text::{
    parse_matrix, read_matrix, read_matrix_file, render_matrix, write_matrix, write_matrix_with,
};
