// Polynomials with complex coefficients
//
// Coefficients are stored lowest power first so that
// P(z) = a0 + a1*z + a2*z^2 + ... + an*z^n

use std::fmt;
use std::io::{Error, ErrorKind};

use json::JsonValue;
use num::complex::Complex;

fn is_zero(z : &Complex<f64>) -> bool {
    z.re == 0.0 && z.im == 0.0
}

#[derive(Clone, Debug, PartialEq)]
pub struct ComplexPolynomial {
    coefficients : Vec<Complex<f64>>
}

impl ComplexPolynomial {
    // Trailing zero coefficients are dropped so the top one is non-zero,
    // unless everything is zero in which case we keep a single zero.
    pub fn new(coefficients : &[Complex<f64>]) -> ComplexPolynomial {
        let mut len = coefficients.len();
        while len > 1 && is_zero(&coefficients[len - 1]) {
            len -= 1;
        }
        if len == 0 || (len == 1 && is_zero(&coefficients[0])) {
            return ComplexPolynomial::zero();
        }
        ComplexPolynomial { coefficients: coefficients[..len].to_vec() }
    }

    pub fn zero() -> ComplexPolynomial {
        ComplexPolynomial { coefficients: vec![Complex::new(0.0, 0.0)] }
    }

    // Members are either a real number or a [re, im] pair, lowest power first
    pub fn from_json(input : &JsonValue) -> std::io::Result<ComplexPolynomial> {
        if !input.is_array() {
            return Err(Error::new(ErrorKind::InvalidData, "Missing coefficients"))
        }
        let coefficients = input.members().map(
            |member| parse_coefficient(member).ok_or_else(
                || Error::new(ErrorKind::InvalidData, format!("Bad coefficient: {}", member))
            )
        ).collect::<std::io::Result<Vec<Complex<f64>>>>()?;
        Ok(ComplexPolynomial::new(&coefficients))
    }

    pub fn degree(&self) -> usize {
        self.coefficients.len() - 1
    }

    #[cfg(test)]
    pub fn coefficients(&self) -> &[Complex<f64>] {
        &self.coefficients
    }

    pub fn differentiate(&self) -> ComplexPolynomial {
        let coefficients : Vec<Complex<f64>> = self.coefficients.iter().enumerate().skip(1).map(
            |(i, v)| *v * (i as f64)
        ).collect();
        ComplexPolynomial::new(&coefficients)
    }

    // Horner's scheme
    pub fn evaluate(&self, z : Complex<f64>) -> Complex<f64> {
        let mut coeffs = self.coefficients.iter().rev();
        let mut acc = *coeffs.next().unwrap_or(&Complex::new(0.0, 0.0));
        for coeff in coeffs {
            acc = acc * z + *coeff;
        }
        acc
    }
}

fn parse_coefficient(input : &JsonValue) -> Option<Complex<f64>> {
    if let Some(re) = input.as_f64() {
        return Some(Complex::new(re, 0.0));
    }
    if input.is_array() && input.len() == 2 {
        let re = input[0].as_f64()?;
        let im = input[1].as_f64()?;
        return Some(Complex::new(re, im));
    }
    None
}

impl fmt::Display for ComplexPolynomial {
    fn fmt(&self, f : &mut fmt::Formatter) -> fmt::Result {
        let mut first = true;
        for (i, coeff) in self.coefficients.iter().enumerate() {
            if is_zero(coeff) {
                continue;
            }
            if !first {
                write!(f, "+")?;
            }
            first = false;
            if i == 0 {
                write!(f, "({})", coeff)?;
            } else {
                write!(f, "({})x^{}", coeff, i)?;
            }
        }
        if first {
            write!(f, "0")?;
        }
        Ok(())
    }
}
