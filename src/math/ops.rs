//! Arithmetic on `Matrix`.
//!
//! The `checked_*` methods report shape mismatches as `LinalgError::Shape`.
//! The operator impls call them and panic with the same message, in the
//! same way slice-length mismatches panic elsewhere in the crate.

use std::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use crate::error::{LinalgError, Result};
use crate::math::Matrix;

fn require_same_shape(lhs: &Matrix, rhs: &Matrix, op: &str) -> Result<()> {
    if lhs.shape() != rhs.shape() {
        return Err(LinalgError::shape(format!(
            "{} requires equal shapes, got {}x{} and {}x{}",
            op,
            lhs.rows(),
            lhs.columns(),
            rhs.rows(),
            rhs.columns()
        )));
    }
    Ok(())
}

fn unwrap_or_panic<T>(result: Result<T>) -> T {
    match result {
        Ok(value) => value,
        Err(err) => panic!("{}", err),
    }
}

impl Matrix {
    pub fn checked_add(&self, rhs: &Matrix) -> Result<Matrix> {
        let mut out = self.to_compact();
        out.checked_add_assign(rhs)?;
        Ok(out)
    }

    pub fn checked_sub(&self, rhs: &Matrix) -> Result<Matrix> {
        let mut out = self.to_compact();
        out.checked_sub_assign(rhs)?;
        Ok(out)
    }

    pub fn checked_add_assign(&mut self, rhs: &Matrix) -> Result<()> {
        require_same_shape(self, rhs, "addition")?;
        for (a, b) in self.as_mut_slice().iter_mut().zip(rhs.as_slice()) {
            *a += b;
        }
        Ok(())
    }

    pub fn checked_sub_assign(&mut self, rhs: &Matrix) -> Result<()> {
        require_same_shape(self, rhs, "subtraction")?;
        for (a, b) in self.as_mut_slice().iter_mut().zip(rhs.as_slice()) {
            *a -= b;
        }
        Ok(())
    }

    /// Matrix product `self * rhs`; requires `self.columns() == rhs.rows()`.
    pub fn checked_mul(&self, rhs: &Matrix) -> Result<Matrix> {
        if self.columns() != rhs.rows() {
            return Err(LinalgError::shape(format!(
                "cannot multiply {}x{} by {}x{}",
                self.rows(),
                self.columns(),
                rhs.rows(),
                rhs.columns()
            )));
        }
        let (n, m, p) = (self.rows(), self.columns(), rhs.columns());
        let mut out = Matrix::zeros(n, p);
        let a = self.as_slice();
        let b = rhs.as_slice();
        let c = out.as_mut_slice();
        for i in 0..n {
            for k in 0..m {
                let a_ik = a[i * m + k];
                for j in 0..p {
                    c[i * p + j] += a_ik * b[k * p + j];
                }
            }
        }
        Ok(out)
    }

    pub fn scale(&self, scalar: f64) -> Matrix {
        self.map(|v| v * scalar)
    }
}

impl<'a, 'b> Add<&'b Matrix> for &'a Matrix {
    type Output = Matrix;

    fn add(self, rhs: &'b Matrix) -> Matrix {
        unwrap_or_panic(self.checked_add(rhs))
    }
}

impl Add for Matrix {
    type Output = Matrix;

    fn add(mut self, rhs: Matrix) -> Matrix {
        self += &rhs;
        self
    }
}

impl<'a, 'b> Sub<&'b Matrix> for &'a Matrix {
    type Output = Matrix;

    fn sub(self, rhs: &'b Matrix) -> Matrix {
        unwrap_or_panic(self.checked_sub(rhs))
    }
}

impl Sub for Matrix {
    type Output = Matrix;

    fn sub(mut self, rhs: Matrix) -> Matrix {
        self -= &rhs;
        self
    }
}

impl AddAssign<&Matrix> for Matrix {
    fn add_assign(&mut self, rhs: &Matrix) {
        unwrap_or_panic(self.checked_add_assign(rhs))
    }
}

impl SubAssign<&Matrix> for Matrix {
    fn sub_assign(&mut self, rhs: &Matrix) {
        unwrap_or_panic(self.checked_sub_assign(rhs))
    }
}

impl Neg for &Matrix {
    type Output = Matrix;

    fn neg(self) -> Matrix {
        self.map(|v| -v)
    }
}

impl Neg for Matrix {
    type Output = Matrix;

    fn neg(mut self) -> Matrix {
        for v in self.as_mut_slice() {
            *v = -*v;
        }
        self
    }
}

impl Mul<f64> for &Matrix {
    type Output = Matrix;

    fn mul(self, scalar: f64) -> Matrix {
        self.scale(scalar)
    }
}

impl Mul<f64> for Matrix {
    type Output = Matrix;

    fn mul(mut self, scalar: f64) -> Matrix {
        self *= scalar;
        self
    }
}

impl Mul<&Matrix> for f64 {
    type Output = Matrix;

    fn mul(self, rhs: &Matrix) -> Matrix {
        rhs.scale(self)
    }
}

impl Mul<Matrix> for f64 {
    type Output = Matrix;

    fn mul(self, rhs: Matrix) -> Matrix {
        rhs * self
    }
}

impl MulAssign<f64> for Matrix {
    fn mul_assign(&mut self, scalar: f64) {
        for v in self.as_mut_slice() {
            *v *= scalar;
        }
    }
}

impl<'a, 'b> Mul<&'b Matrix> for &'a Matrix {
    type Output = Matrix;

    fn mul(self, rhs: &'b Matrix) -> Matrix {
        unwrap_or_panic(self.checked_mul(rhs))
    }
}

impl Mul for Matrix {
    type Output = Matrix;

    fn mul(self, rhs: Matrix) -> Matrix {
        &self * &rhs
    }
}
