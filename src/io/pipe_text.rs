//! Pipe-delimited matrix text format.
//!
//! ```text
//! | 1 2 |
//! | 3 4 |
//! ```
//!
//! Each row opens and closes with `|`; values are whitespace separated and
//! line breaks carry no meaning. Empty or whitespace-only input is the empty
//! matrix. The empty matrix renders as the empty string.

use std::fmt;
use std::io::{Read, Write};
use std::path::Path;
use std::str::FromStr;

use anyhow::{Context, Result as AnyResult};

use crate::config::FormatOptions;
use crate::error::{LinalgError, Result};
use crate::math::Matrix;

#[derive(Debug, Clone, Copy, PartialEq)]
enum Token<'a> {
    Pipe,
    Value(&'a str),
}

fn tokenize(text: &str) -> Vec<Token<'_>> {
    let mut tokens = Vec::new();
    for word in text.split_whitespace() {
        let mut rest = word;
        while let Some(idx) = rest.find('|') {
            if idx > 0 {
                tokens.push(Token::Value(&rest[..idx]));
            }
            tokens.push(Token::Pipe);
            rest = &rest[idx + 1..];
        }
        if !rest.is_empty() {
            tokens.push(Token::Value(rest));
        }
    }
    tokens
}

/// Parse pipe-delimited text into a matrix.
pub fn parse_matrix(text: &str) -> Result<Matrix> {
    let tokens = tokenize(text);
    let mut rows: Vec<Vec<f64>> = Vec::new();
    let mut current: Option<Vec<f64>> = None;

    for (position, token) in tokens.iter().enumerate() {
        match token {
            Token::Pipe => match current.take() {
                None => current = Some(Vec::new()),
                Some(row) => {
                    if row.is_empty() {
                        return Err(LinalgError::parse(position, "row has no values"));
                    }
                    if let Some(first) = rows.first() {
                        if first.len() != row.len() {
                            return Err(LinalgError::parse(
                                position,
                                format!(
                                    "row {} has {} values, expected {}",
                                    rows.len(),
                                    row.len(),
                                    first.len()
                                ),
                            ));
                        }
                    }
                    rows.push(row);
                }
            },
            Token::Value(raw) => {
                let row = current.as_mut().ok_or_else(|| {
                    LinalgError::parse(
                        position,
                        format!("value '{}' outside of a row; expected '|'", raw),
                    )
                })?;
                let value = raw.parse::<f64>().map_err(|_| {
                    LinalgError::parse(position, format!("'{}' is not a number", raw))
                })?;
                row.push(value);
            }
        }
    }

    if current.is_some() {
        return Err(LinalgError::parse(tokens.len(), "row is missing its closing '|'"));
    }

    let matrix = Matrix::from_rows(&rows)
        .map_err(|err| LinalgError::parse(tokens.len(), err.to_string()))?;
    log::debug!("parsed {}x{} matrix", matrix.rows(), matrix.columns());
    Ok(matrix)
}

fn write_value(out: &mut impl fmt::Write, value: f64, precision: Option<usize>) -> fmt::Result {
    match precision {
        Some(p) => write!(out, "{:.*}", p, value),
        None => write!(out, "{}", value),
    }
}

fn render_into(out: &mut impl fmt::Write, m: &Matrix, precision: Option<usize>) -> fmt::Result {
    for row in 0..m.rows() {
        if row > 0 {
            writeln!(out)?;
        }
        write!(out, "|")?;
        for &value in m.row_slice(row) {
            write!(out, " ")?;
            write_value(out, value, precision)?;
        }
        write!(out, " |")?;
    }
    Ok(())
}

/// Render `m` with explicit formatting options.
pub fn render_matrix(m: &Matrix, options: &FormatOptions) -> String {
    let mut out = String::with_capacity(m.size() * 4 + m.rows() * 4);
    // Writing into a String cannot fail.
    let _ = render_into(&mut out, m, options.precision);
    out
}

/// Read a whole stream and parse it.
pub fn read_matrix<R: Read>(mut reader: R) -> AnyResult<Matrix> {
    let mut text = String::new();
    reader
        .read_to_string(&mut text)
        .context("Failed to read matrix text")?;
    parse_matrix(&text).context("Failed to parse matrix text")
}

/// Read and parse a matrix file.
pub fn read_matrix_file<P: AsRef<Path>>(path: P) -> AnyResult<Matrix> {
    let text = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read matrix file: {}", path.as_ref().display()))?;
    parse_matrix(&text)
        .with_context(|| format!("Failed to parse matrix file: {}", path.as_ref().display()))
}

pub fn write_matrix<W: Write>(writer: W, m: &Matrix) -> std::io::Result<()> {
    write_matrix_with(writer, m, &FormatOptions::default())
}

pub fn write_matrix_with<W: Write>(
    mut writer: W,
    m: &Matrix,
    options: &FormatOptions,
) -> std::io::Result<()> {
    writer.write_all(render_matrix(m, options).as_bytes())
}

impl fmt::Display for Matrix {
    /// Honors a formatter precision, so `format!("{:.2}", m)` prints two
    /// decimals per value.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let precision = f.precision();
        render_into(f, self, precision)
    }
}

impl FromStr for Matrix {
    type Err = LinalgError;

    fn from_str(s: &str) -> Result<Self> {
        parse_matrix(s)
    }
}
