// The distinct roots found so far, in the order they were found.
//
// Two points within the tolerance of each other count as the same root.
// The index of a root is its colour slot so the order matters.

use std::fmt;

use num::complex::Complex;

pub struct Roots {
    tol : f64,
    roots : Vec<Complex<f64>>
}

impl Roots {
    pub fn new(eps : f64) -> Roots {
        Roots { tol: eps, roots: Vec::new() }
    }

    pub fn find_root(&self, root : &Complex<f64>) -> Option<usize> {
        self.roots.iter().position(
            |z| (*root - *z).norm() < self.tol
        )
    }

    // Index of the matching root, registering it first if it is new
    pub fn add_root(&mut self, root : &Complex<f64>) -> usize {
        if let Some(index) = self.find_root(root) {
            return index;
        }
        self.roots.push(*root);
        self.roots.len() - 1
    }

    pub fn len(&self) -> usize {
        self.roots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }

    #[cfg(test)]
    pub fn as_slice(&self) -> &[Complex<f64>] {
        &self.roots
    }
}

impl fmt::Display for Roots {
    fn fmt(&self, f : &mut fmt::Formatter) -> fmt::Result {
        for (i, root) in self.roots.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{:.6}", root)?;
        }
        Ok(())
    }
}
