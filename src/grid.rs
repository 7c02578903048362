// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The grid of escape counts, and the generator that fills it.
//!
//! Cells are addressed as (row, column), which is (y, x): the pixel
//! at x, y is stored in row y, column x.  Renderers walk the grid row
//! by row, so row 0 (the bottom of the complex window) ends up as the
//! top line of the image.

use std::ops::Index;
use std::slice::Chunks;

use crossbeam;
use itertools::iproduct;

use config::{Config, DEFAULT_BOUND};
use divergence::estimate_divergence;
use errors::{MandelbrotError, Result};
use planes::{Pixel, PlaneMapper};

/// A square array of escape counts, stored row-major.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    dimension: usize,
    cells: Vec<usize>,
}

impl Grid {
    fn new(dimension: usize) -> Self {
        Grid {
            dimension,
            cells: vec![0; dimension * dimension],
        }
    }

    /// Cells per side.
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// The count at (row, column), if that cell exists.
    pub fn get(&self, row: usize, column: usize) -> Option<usize> {
        if row < self.dimension && column < self.dimension {
            Some(self.cells[row * self.dimension + column])
        } else {
            None
        }
    }

    /// One row of the grid: every x for a fixed y.
    ///
    /// # Panics
    ///
    /// Panics if `row` is not less than `dimension()`.
    pub fn row(&self, row: usize) -> &[usize] {
        assert!(
            row < self.dimension,
            "row {} out of range for a grid of {} rows",
            row,
            self.dimension
        );
        let start = row * self.dimension;
        &self.cells[start..start + self.dimension]
    }

    /// The rows, top to bottom.
    pub fn rows<'a>(&'a self) -> Chunks<'a, usize> {
        self.cells.chunks(self.dimension)
    }

    /// All cells, row-major.
    pub fn as_slice(&self) -> &[usize] {
        &self.cells
    }

    /// Smallest count in the grid.
    pub fn min(&self) -> usize {
        self.cells.iter().cloned().min().unwrap_or(0)
    }

    /// Largest count in the grid.
    pub fn max(&self) -> usize {
        self.cells.iter().cloned().max().unwrap_or(0)
    }
}

/// Indexed by (row, column), that is (y, x).
///
/// # Panics
///
/// Panics if either coordinate is not less than `dimension()`; use
/// `Grid::get` for a checked lookup.
impl Index<(usize, usize)> for Grid {
    type Output = usize;

    fn index(&self, (row, column): (usize, usize)) -> &usize {
        assert!(
            row < self.dimension && column < self.dimension,
            "cell ({}, {}) out of range for a {}x{} grid",
            row,
            column,
            self.dimension,
            self.dimension
        );
        &self.cells[row * self.dimension + column]
    }
}

/// Fills a grid with one escape count per pixel.  Once built the
/// parameters don't change.
pub struct GridGenerator {
    plane: PlaneMapper,
    max_steps: usize,
    bound: f64,
}

impl GridGenerator {
    /// Fails if the configured resolution can't be mapped.
    pub fn new(config: &Config) -> Result<Self> {
        config.validate()?;
        let plane = PlaneMapper::new(config.resolution, config.window)?;
        Ok(GridGenerator {
            plane,
            max_steps: config.max_steps,
            bound: config.bound,
        })
    }

    /// The mapper between pixels and the complex plane.
    pub fn plane(&self) -> &PlaneMapper {
        &self.plane
    }

    /// Escape count of a single pixel.
    pub fn pixel(&self, pixel: &Pixel) -> usize {
        estimate_divergence(self.plane.pixel_to_point(pixel), self.bound, self.max_steps)
    }

    /// Compute the rows `first_row..` that fit in `band`, which holds
    /// whole rows of the final grid.
    fn render_band(&self, band: &mut [usize], first_row: usize) {
        let n = self.plane.resolution();
        let rows = band.len() / n;
        for (x, y) in iproduct!(0..n, 0..rows) {
            band[y * n + x] = self.pixel(&Pixel(x, first_row + y));
        }
    }

    /// The single-threaded render.  Visits x in the outer loop and y
    /// in the inner loop, storing each count at row y, column x.
    pub fn generate(&self) -> Grid {
        let mut grid = Grid::new(self.plane.resolution());
        self.render_band(&mut grid.cells, 0);
        grid
    }

    /// The same grid as `generate`, with the rows split into one
    /// contiguous band per thread.  Every cell depends only on its own
    /// coordinates, so the result is identical to the sequential one.
    pub fn generate_threaded(&self, threads: usize) -> Result<Grid> {
        if threads == 0 {
            return Err(MandelbrotError::InvalidThreadCount { threads });
        }

        let n = self.plane.resolution();
        let rows_per_band = (n + threads - 1) / threads;
        debug!(
            "rendering {} rows in bands of {} on {} threads",
            n, rows_per_band, threads
        );

        let mut grid = Grid::new(n);
        {
            let bands: Vec<&mut [usize]> = grid.cells.chunks_mut(rows_per_band * n).collect();
            crossbeam::scope(|spawner| {
                for (i, band) in bands.into_iter().enumerate() {
                    spawner.spawn(move |_| self.render_band(band, i * rows_per_band));
                }
            })
            .map_err(|_| MandelbrotError::RenderFailed)?;
        }
        Ok(grid)
    }
}

/// Generate the n×n grid of escape counts over the default window,
/// with a bound of 4 and the given iteration cap.
///
/// The result is indexed `[(y, x)]`.  Fails with `InvalidResolution`
/// when n < 2.
pub fn generate_grid(n: usize, max_steps: usize) -> Result<Grid> {
    let config = Config::new(n).with_max_steps(max_steps).with_bound(DEFAULT_BOUND);
    Ok(GridGenerator::new(&config)?.generate())
}
