//! Complex numbers over the inexact reals.

use std::fmt::{self, Display};

use super::{Error, Real, Result, Sign};

/// A complex number with inexact real and imaginary parts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Complex {
    real: Real,
    imag: Real,
}

impl Complex {
    /// Builds `real + imag * i`.
    pub fn new(real: Real, imag: Real) -> Complex {
        Complex { real, imag }
    }

    /// The real part.
    pub fn real(&self) -> &Real {
        &self.real
    }

    /// The imaginary part.
    pub fn imag(&self) -> &Real {
        &self.imag
    }

    /// Returns true when both parts are zero.
    pub fn is_zero(&self) -> bool {
        self.real.is_zero() && self.imag.is_zero()
    }

    /// Sum of two complex numbers.
    pub fn add(&self, other: &Complex) -> Complex {
        Complex::new(self.real.add(&other.real), self.imag.add(&other.imag))
    }

    /// Product of two complex numbers.
    pub fn multiply(&self, other: &Complex) -> Complex {
        let real = self
            .real
            .multiply(&other.real)
            .add(&self.imag.multiply(&other.imag).negate());
        let imag = self
            .real
            .multiply(&other.imag)
            .add(&self.imag.multiply(&other.real));
        Complex::new(real, imag)
    }

    /// Additive inverse.
    pub fn negate(&self) -> Complex {
        Complex::new(self.real.negate(), self.imag.negate())
    }

    /// Multiplicative inverse, `conj(z) / |z|^2`; fails for zero.
    pub fn multiplicative_inverse(&self) -> Result<Complex> {
        if self.is_zero() {
            return Err(Error::DivisionByZero);
        }
        let norm = self
            .real
            .multiply(&self.real)
            .add(&self.imag.multiply(&self.imag))
            .multiplicative_inverse();
        Ok(Complex::new(
            self.real.multiply(&norm),
            self.imag.negate().multiply(&norm),
        ))
    }

    /// Component-wise approximate equality.
    pub fn equals(&self, other: &Complex) -> bool {
        self.real.equals(&other.real) && self.imag.equals(&other.imag)
    }
}

impl Display for Complex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.real.is_zero() {
            Display::fmt(&self.real, f)?;
            if self.imag.sign() == Sign::Plus && !self.imag.is_infinite() && !self.imag.is_nan()
            {
                f.write_str("+")?;
            }
        }
        write!(f, "{}i", self.imag)
    }
}
