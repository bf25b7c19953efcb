// Newton-Raphson root finding for a single starting point
//
// z(n+1) = z(n) - f(z(n)) / f'(z(n)) until successive iterates are
// closer than the tolerance or the iteration budget runs out.

use num::complex::Complex;

use crate::newton_raphson::polynomial::ComplexPolynomial;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IterationStatus {
    Converged,
    // f'(z) was exactly zero at some step
    ZeroDerivative,
    MaxIterationsExceeded
}

// Outcome of iterating from one starting point
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Iteration {
    pub point : Complex<f64>,
    pub iterations : usize,
    pub status : IterationStatus
}

impl Iteration {
    pub fn root(&self) -> Option<Complex<f64>> {
        match self.status {
            IterationStatus::Converged => Some(self.point),
            _ => None
        }
    }
}

pub struct NewtonIterator {
    polynomial : ComplexPolynomial,
    differential : ComplexPolynomial,
    max_iterations : usize,
    tolerance : f64
}

impl NewtonIterator {
    pub fn new(polynomial : &ComplexPolynomial, max_iterations : usize, tolerance : f64) -> NewtonIterator {
        NewtonIterator {
            polynomial : polynomial.clone(),
            differential : polynomial.differentiate(),
            max_iterations,
            tolerance
        }
    }

    pub fn polynomial(&self) -> &ComplexPolynomial {
        &self.polynomial
    }

    pub fn differential(&self) -> &ComplexPolynomial {
        &self.differential
    }

    pub fn converge(&self, initial : Complex<f64>) -> Iteration {
        let mut z = initial;
        for i in 0..self.max_iterations {
            let eval = self.polynomial.evaluate(z);
            let diff = self.differential.evaluate(z);
            if diff.re == 0.0 && diff.im == 0.0 {
                return Iteration {
                    point : z,
                    iterations : i + 1,
                    status : IterationStatus::ZeroDerivative
                };
            }
            let next = z - (eval / diff);
            if (next - z).norm() < self.tolerance {
                return Iteration {
                    point : next,
                    iterations : i + 1,
                    status : IterationStatus::Converged
                };
            }
            z = next;
        }
        Iteration {
            point : z,
            iterations : self.max_iterations,
            status : IterationStatus::MaxIterationsExceeded
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c(re : f64, im : f64) -> Complex<f64> {
        Complex::new(re, im)
    }

    fn cube_minus_one() -> ComplexPolynomial {
        ComplexPolynomial::new(&[c(-1.0, 0.0), c(0.0, 0.0), c(0.0, 0.0), c(1.0, 0.0)])
    }

    #[test]
    fn test_cube_roots_of_unity() {
        let newton = NewtonIterator::new(&cube_minus_one(), 20, 1.0e-10);
        let result = newton.converge(c(1.0, 1.0));
        assert_eq!(result.status, IterationStatus::Converged);
        let root = result.root().unwrap();
        assert!(newton.polynomial().evaluate(root).norm() < 1e-8);
        let half_sqrt3 = 3.0_f64.sqrt() / 2.0;
        let unity = [c(1.0, 0.0), c(-0.5, half_sqrt3), c(-0.5, -half_sqrt3)];
        assert!(unity.iter().any(|u| (*u - root).norm() < 1e-10));
        assert!(result.iterations >= 1 && result.iterations <= 20);
    }

    #[test]
    fn test_zero_derivative_at_first_step() {
        // f(z) = z^3 - 1 has f'(0) = 0
        let newton = NewtonIterator::new(&cube_minus_one(), 20, 1.0e-10);
        let result = newton.converge(c(0.0, 0.0));
        assert_eq!(result.status, IterationStatus::ZeroDerivative);
        assert_eq!(result.iterations, 1);
        assert_eq!(result.root(), None);
    }

    #[test]
    fn test_constant_has_zero_derivative() {
        let newton = NewtonIterator::new(&ComplexPolynomial::new(&[c(2.0, 1.0)]), 20, 1.0e-10);
        let result = newton.converge(c(3.0, -4.0));
        assert_eq!(result.status, IterationStatus::ZeroDerivative);
        assert_eq!(result.iterations, 1);
    }

    #[test]
    fn test_max_iterations_exceeded() {
        // Newton on z^2 + 1 from a real start never leaves the real axis
        let p = ComplexPolynomial::new(&[c(1.0, 0.0), c(0.0, 0.0), c(1.0, 0.0)]);
        let newton = NewtonIterator::new(&p, 20, 1.0e-10);
        let result = newton.converge(c(0.5, 0.0));
        assert_eq!(result.status, IterationStatus::MaxIterationsExceeded);
        assert_eq!(result.iterations, 20);
        assert_eq!(result.root(), None);
    }

    #[test]
    fn test_calls_are_independent() {
        let newton = NewtonIterator::new(&cube_minus_one(), 20, 1.0e-10);
        let first = newton.converge(c(1.0, 1.0));
        let _ = newton.converge(c(0.0, 0.0));
        let again = newton.converge(c(1.0, 1.0));
        assert_eq!(first, again);
    }

    #[test]
    fn test_looser_tolerance_converges_sooner() {
        let strict = NewtonIterator::new(&cube_minus_one(), 20, 1.0e-10);
        let loose = NewtonIterator::new(&cube_minus_one(), 20, 1.0e-2);
        let start = c(2.0, 2.0);
        assert!(loose.converge(start).iterations < strict.converge(start).iterations);
    }
}
