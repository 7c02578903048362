// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Turns a grid of escape counts into colour.  Counts are spread
//! linearly between the smallest and largest count present, then run
//! through the "plasma" scale: fast escapes are deep blue, points that
//! hit the iteration cap are yellow.

use image::RgbImage;

use errors::{MandelbrotError, Result};
use grid::Grid;

/// Ten evenly spaced samples of matplotlib's plasma colour map.
pub const PLASMA: [[u8; 3]; 10] = [
    [0x0d, 0x08, 0x87],
    [0x46, 0x03, 0x9f],
    [0x72, 0x01, 0xa8],
    [0x9c, 0x17, 0x9e],
    [0xbd, 0x37, 0x86],
    [0xd8, 0x57, 0x6b],
    [0xed, 0x79, 0x53],
    [0xfb, 0x9f, 0x3a],
    [0xfd, 0xca, 0x26],
    [0xf0, 0xf9, 0x21],
];

/// The plasma colour at `t`, where 0 is the low end of the scale and
/// 1 the high end.  Values outside [0, 1] (and NaN) are clamped.
pub fn plasma(t: f64) -> [u8; 3] {
    let t = if t.is_nan() { 0.0 } else { t.max(0.0).min(1.0) };
    let scaled = t * (PLASMA.len() - 1) as f64;
    let idx = (scaled as usize).min(PLASMA.len() - 2);
    let frac = scaled - idx as f64;

    let (lo, hi) = (PLASMA[idx], PLASMA[idx + 1]);
    let mut rgb = [0u8; 3];
    for (channel, out) in rgb.iter_mut().enumerate() {
        let (a, b) = (f64::from(lo[channel]), f64::from(hi[channel]));
        *out = (a + (b - a) * frac).round() as u8;
    }
    rgb
}

/// Where `count` falls between `min` and `max`, as a fraction.  A
/// grid with a single value maps everything to the low end.
fn normalize(count: usize, min: usize, max: usize) -> f64 {
    if max <= min {
        return 0.0;
    }
    (count - min) as f64 / (max - min) as f64
}

/// One image pixel per grid cell, image row y taken from grid row y.
pub fn colorize(grid: &Grid) -> Result<RgbImage> {
    let (min, max) = (grid.min(), grid.max());
    let n = grid.dimension();
    let mut raw = Vec::with_capacity(3 * n * n);
    for &count in grid.as_slice() {
        raw.extend_from_slice(&plasma(normalize(count, min, max)));
    }
    RgbImage::from_raw(n as u32, n as u32, raw).ok_or(MandelbrotError::RenderFailed)
}
