// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Writing the coloured grid to disk.  The format follows the file
//! extension; the command line tool always asks for PNG.

use std::path::Path;

use colormap::colorize;
use errors::{MandelbrotError, Result};
use grid::Grid;

/// Colour `grid` with the plasma scale and save it to `path`.
pub fn write_image<P: AsRef<Path>>(path: P, grid: &Grid) -> Result<()> {
    let path = path.as_ref();
    let failed = |reason: String| MandelbrotError::OutputWriteFailed {
        path: path.display().to_string(),
        reason,
    };

    let img = colorize(grid)?;
    img.save(path).map_err(|e| failed(e.to_string()))?;
    info!(
        "wrote {}x{} image to {}",
        grid.dimension(),
        grid.dimension(),
        path.display()
    );
    Ok(())
}
