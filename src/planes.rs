//! Contains the PlaneMapper struct, which describes a relationship
//! between a square on the integral plane with an origin at 0,0 and a
//! rectangle on the complex plane.  Pixel 0,0 lands exactly on the
//! window's lower-left corner and pixel n-1,n-1 on its upper-right
//! corner: n samples per axis, both ends included.
use num::Complex;

use config::{check_resolution, ComplexWindow};
use errors::Result;

/// The x, y of a pixel in the grid.  x is the column, y the row.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Pixel(pub usize, pub usize);

/// Maps pixels of an n×n integral plane onto a window of the complex
/// plane.  x follows the real axis, y the imaginary axis.
#[derive(Debug)]
pub struct PlaneMapper {
    resolution: usize,
    /// The window being sampled.
    pub window: ComplexWindow,
    // Distance on the complex plane between two neighbouring pixels,
    // along the real and imaginary axis respectively.
    grid_factors: (f64, f64),
}

impl PlaneMapper {
    /// Build a mapper for an n×n grid over `window`.  Fails for grids
    /// smaller than 2×2, where the spacing between samples is
    /// undefined, and for grids too large to store.
    pub fn new(resolution: usize, window: ComplexWindow) -> Result<PlaneMapper> {
        check_resolution(resolution)?;

        let steps = (resolution - 1) as f64;
        let grid_factors = (window.width / steps, window.height / steps);
        debug!(
            "mapping {0}x{0} pixels onto {1} .. {2}, spacing {3:?}",
            resolution,
            window.origin,
            window.upper_corner(),
            grid_factors
        );

        Ok(PlaneMapper {
            resolution,
            window,
            grid_factors,
        })
    }

    /// Pixels per side.
    pub fn resolution(&self) -> usize {
        self.resolution
    }

    /// The total number of points in the integral grid.
    pub fn len(&self) -> usize {
        self.resolution * self.resolution
    }

    /// Always false for a mapper that was successfully built; kept for
    /// symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.resolution == 0
    }

    /// Given a pixel on the integral plane, return the point on the
    /// complex plane it samples.
    pub fn pixel_to_point(&self, pixel: &Pixel) -> Complex<f64> {
        Complex::new(
            self.grid_factors.0 * (pixel.0 as f64) + self.window.origin.re,
            self.grid_factors.1 * (pixel.1 as f64) + self.window.origin.im,
        )
    }

    /// Given a point on the complex plane, return the pixel whose
    /// sample lies closest to it, or None if the point is outside the
    /// grid by more than half a pixel.
    pub fn point_to_pixel(&self, point: &Complex<f64>) -> Option<Pixel> {
        let left = ((point.re - self.window.origin.re) / self.grid_factors.0).round();
        let top = ((point.im - self.window.origin.im) / self.grid_factors.1).round();
        let last = (self.resolution - 1) as f64;
        if left < 0.0 || left > last || top < 0.0 || top > last {
            return None;
        }
        Some(Pixel(left as usize, top as usize))
    }
}
