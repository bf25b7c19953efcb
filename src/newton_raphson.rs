// Make an image out of the newton raphson root finding for a complex polynomial
//
// For each pixel track the root converged to and the number of iterations
// taken, and use these to pick the colour and how dark it is. Pixels that
// never converge are left unset.

use std::io::{Error, ErrorKind};

use json::JsonValue;
use num::complex::Complex;
use image::{Rgb, RgbImage};
use log::{debug, info, warn};

mod colours;
mod iteration;
mod polynomial;
mod roots;

use colours::{BASE_COLOURS, base_colour, shade};
use iteration::{IterationStatus, NewtonIterator};
use polynomial::ComplexPolynomial;
use roots::Roots;

const MIN_DEGREE : usize = 3;
const MAX_DEGREE : usize = 5;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FractalConfig {
    // Width and height of the square grid
    pub pixels : usize,
    pub max_iterations : usize,
    // Used both for convergence and for telling roots apart
    pub tolerance : f64
}

impl Default for FractalConfig {
    fn default() -> FractalConfig {
        FractalConfig { pixels: 400, max_iterations: 20, tolerance: 1.0e-10 }
    }
}

impl FractalConfig {
    pub fn from_json(input : &JsonValue) -> FractalConfig {
        let default = FractalConfig::default();
        FractalConfig {
            pixels : input["pixels"].as_usize().unwrap_or(default.pixels),
            max_iterations : input["max_iterations"].as_usize().unwrap_or(default.max_iterations),
            tolerance : input["tolerance"].as_f64().unwrap_or(default.tolerance)
        }
    }
}

// One entry per pixel, None where the iteration failed to converge
pub struct ColourGrid {
    size : usize,
    pixels : Vec<Option<Rgb<u8>>>
}

impl ColourGrid {
    fn new(size : usize) -> ColourGrid {
        ColourGrid { size, pixels: vec![None; size * size] }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn get(&self, i : usize, j : usize) -> Option<Rgb<u8>> {
        self.pixels[j * self.size + i]
    }

    fn set(&mut self, i : usize, j : usize, colour : Rgb<u8>) {
        self.pixels[j * self.size + i] = Some(colour);
    }

    pub fn unset_count(&self) -> usize {
        self.pixels.iter().filter(|p| p.is_none()).count()
    }

    pub fn to_image(&self, background : Rgb<u8>) -> RgbImage {
        let size = self.size() as u32;
        RgbImage::from_fn(size, size,
            |i, j| self.get(i as usize, j as usize).unwrap_or(background)
        )
    }
}

pub struct NewtonFractal {
    iterator : NewtonIterator,
    // Top left corner of the square we sample
    origin : Complex<f64>,
    width : f64,
    config : FractalConfig,
    roots : Roots
}

impl NewtonFractal {
    pub fn new(
        polynomial : &ComplexPolynomial,
        origin : Complex<f64>,
        width : f64,
        config : FractalConfig
    ) -> std::io::Result<NewtonFractal> {
        let degree = polynomial.degree();
        if degree < MIN_DEGREE || degree > MAX_DEGREE {
            return Err(Error::new(
                ErrorKind::InvalidInput,
                format!("Degree of polynomial must be between {} and {} inclusive, got {}", MIN_DEGREE, MAX_DEGREE, degree)
            ))
        }
        if !(width.is_finite() && width > 0.0) {
            return Err(Error::new(ErrorKind::InvalidInput, "Width must be positive"))
        }
        if config.pixels == 0 || config.max_iterations == 0 || !(config.tolerance > 0.0) {
            return Err(Error::new(ErrorKind::InvalidInput, "Bad fractal configuration"))
        }
        Ok(NewtonFractal {
            iterator : NewtonIterator::new(polynomial, config.max_iterations, config.tolerance),
            origin,
            width,
            config,
            roots : Roots::new(config.tolerance)
        })
    }

    pub fn from_json(input : &JsonValue) -> std::io::Result<NewtonFractal> {
        let polynomial = ComplexPolynomial::from_json(&input["polynomial"])?;
        let origin_re = input["origin_re"].as_f64().unwrap_or(-4.0);
        let origin_im = input["origin_im"].as_f64().unwrap_or(4.0);
        let width = input["width"].as_f64().unwrap_or(8.0);
        let config = FractalConfig::from_json(input);
        NewtonFractal::new(&polynomial, Complex::new(origin_re, origin_im), width, config)
    }

    pub fn roots(&self) -> &Roots {
        &self.roots
    }

    pub fn find_root(&self, root : &Complex<f64>) -> Option<usize> {
        self.roots.find_root(root)
    }

    // Real part grows left to right, imaginary part shrinks top to bottom
    pub fn pixel_to_complex(&self, i : usize, j : usize) -> Complex<f64> {
        let dz = self.width / self.config.pixels as f64;
        Complex::new(
            self.origin.re + (i as f64) * dz,
            self.origin.im - (j as f64) * dz
        )
    }

    fn colour(&self, root_index : usize, iterations : usize, colour_iterations : bool) -> Rgb<u8> {
        let base = base_colour(root_index);
        if colour_iterations {
            shade(&base, iterations - 1, self.config.max_iterations)
        } else {
            base
        }
    }

    // Roots found by earlier calls keep their index so colours are stable
    // between renders of the same fractal.
    pub fn create_fractal(&mut self, colour_iterations : bool) -> ColourGrid {
        let size = self.config.pixels;
        let mut grid = ColourGrid::new(size);
        let mut zero_derivative = 0;
        for i in 0..size {
            for j in 0..size {
                let result = self.iterator.converge(self.pixel_to_complex(i, j));
                let root = match result.root() {
                    Some(root) => root,
                    None => {
                        if result.status == IterationStatus::ZeroDerivative {
                            zero_derivative += 1;
                        }
                        continue;
                    }
                };
                let root_index = match self.find_root(&root) {
                    Some(index) => index,
                    None => {
                        let index = self.roots.add_root(&root);
                        debug!("New root {} found at pixel ({}, {})", root, i, j);
                        if index >= BASE_COLOURS.len() {
                            warn!("More roots than colours, root {} reuses a colour", root);
                        }
                        index
                    }
                };
                grid.set(i, j, self.colour(root_index, result.iterations, colour_iterations));
            }
        }
        debug!(
            "{} of {} pixels unset ({} hit a zero derivative)",
            grid.unset_count(), size * size, zero_derivative
        );
        grid
    }
}

fn background_from_json(input : &JsonValue) -> Rgb<u8> {
    let channel = |i : usize| input[i].as_u8().unwrap_or(0);
    Rgb([channel(0), channel(1), channel(2)])
}

// One image per entry of "renders", each entry saying whether to darken
// by iteration count. All renders share the same roots and colours.
pub fn generate(input : &JsonValue) -> std::io::Result<Vec<RgbImage>> {
    info!("Generating newton raphson image");
    let mut fractal = NewtonFractal::from_json(input)?;
    info!("f(z) = {}", fractal.iterator.polynomial());
    info!("f'(z) = {}", fractal.iterator.differential());
    let background = background_from_json(&input["background"]);
    let renders : Vec<bool> = if input["renders"].is_array() {
        input["renders"].members().filter_map(|r| r.as_bool()).collect()
    } else {
        vec![false]
    };
    if renders.is_empty() {
        return Err(Error::new(ErrorKind::InvalidData, "No renders requested"))
    }
    let images = renders.iter().map(
        |&colour_iterations| {
            let grid = fractal.create_fractal(colour_iterations);
            if fractal.roots().is_empty() {
                warn!("No pixel converged to a root");
            } else {
                info!("Roots: {}", fractal.roots());
            }
            grid.to_image(background)
        }
    ).collect();
    Ok(images)
}
