#![allow(dead_code)]

use dense_linalg::Matrix;

/// Route `log` output through the test harness; `RUST_LOG` selects the level.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub fn mat<R: AsRef<[f64]>>(rows: &[R]) -> Matrix {
    Matrix::from_rows(rows).expect("test literal must be rectangular")
}

pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() <= 1e-9,
        "expected {} to be within 1e-9 of {}",
        actual,
        expected
    );
}
