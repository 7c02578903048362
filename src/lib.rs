#![deny(missing_docs)]
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Mandelbrot renderer
//!
//! The Mandelbrot set is the set of complex numbers c for which the
//! orbit of zero under f(z) = z² + c stays bounded.  We can't iterate
//! forever, so for every pixel of a square grid we map the pixel to a
//! point c, iterate until |z| reaches a bound or an iteration cap
//! runs out, and record how many steps that took.  Points that hit
//! the cap are probably in the set.  The grid of counts is then run
//! through a colour scale and written out as an image.
//!
//! The grid is indexed (row, column), that is (y, x): x walks the real
//! axis and y the imaginary axis.

extern crate crossbeam;
extern crate failure;
extern crate image;
extern crate itertools;
#[macro_use]
extern crate log;
extern crate num;

#[cfg(test)]
extern crate tempfile;

pub mod colormap;
pub mod config;
pub mod divergence;
pub mod errors;
pub mod grid;
pub mod output;
pub mod planes;

pub use colormap::{colorize, plasma};
pub use config::{ComplexWindow, Config};
pub use divergence::{estimate_divergence, estimate_divergence_default};
pub use errors::{MandelbrotError, Result};
pub use grid::{generate_grid, Grid, GridGenerator};
pub use output::write_image;
pub use planes::{Pixel, PlaneMapper};
