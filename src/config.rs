// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The knobs of a render: how many pixels per side, how many
//! iterations before we give up on a point, how far out an orbit may
//! wander before we call it escaped, and which rectangle of the
//! complex plane gets sampled.

use num::Complex;

use errors::{MandelbrotError, Result};

/// Real part of the lower-left corner of the sampled window.
pub const WINDOW_ORIGIN_RE: f64 = -2.0;
/// Imaginary part of the lower-left corner of the sampled window.
pub const WINDOW_ORIGIN_IM: f64 = -1.13;
/// Extent of the window along the real axis (mapped to x).
pub const WINDOW_WIDTH: f64 = 2.48;
/// Extent of the window along the imaginary axis (mapped to y).
pub const WINDOW_HEIGHT: f64 = 2.26;

/// Orbit magnitude past which a point is considered escaped.
pub const DEFAULT_BOUND: f64 = 4.0;
/// Iteration cap used when nobody says otherwise.
pub const DEFAULT_MAX_STEPS: usize = 25;
/// Iteration cap the command line tool renders with.
pub const CLI_MAX_STEPS: usize = 100;
/// Name of the image the command line tool writes.
pub const DEFAULT_OUTPUT: &str = "mandelbrot.png";

/// The smallest grid whose scale factors are defined.
pub const MIN_RESOLUTION: usize = 2;
/// The largest grid an image can hold per side.
pub const MAX_RESOLUTION: usize = ::std::u32::MAX as usize;

/// Accepts n when an n×n grid can be mapped, addressed and stored as an
/// image: n of at least 2, at most `MAX_RESOLUTION`, and n×n cells
/// that fit in a `usize`.
pub fn check_resolution(resolution: usize) -> Result<()> {
    if resolution < MIN_RESOLUTION
        || resolution > MAX_RESOLUTION
        || resolution.checked_mul(resolution).is_none()
    {
        return Err(MandelbrotError::InvalidResolution { resolution });
    }
    Ok(())
}

/// A rectangle on the complex plane, described by its lower-left
/// corner and its extent along each axis.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ComplexWindow {
    /// Lower-left corner: smallest real and smallest imaginary part.
    pub origin: Complex<f64>,
    /// Extent along the real axis.
    pub width: f64,
    /// Extent along the imaginary axis.
    pub height: f64,
}

impl ComplexWindow {
    /// The opposite corner of the window, origin + (width, height).
    pub fn upper_corner(&self) -> Complex<f64> {
        Complex::new(self.origin.re + self.width, self.origin.im + self.height)
    }
}

impl Default for ComplexWindow {
    fn default() -> Self {
        ComplexWindow {
            origin: Complex::new(WINDOW_ORIGIN_RE, WINDOW_ORIGIN_IM),
            width: WINDOW_WIDTH,
            height: WINDOW_HEIGHT,
        }
    }
}

/// Everything the grid generator needs to know.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Config {
    /// Pixels per side; the grid is always square.
    pub resolution: usize,
    /// Iteration cap per pixel.
    pub max_steps: usize,
    /// Escape threshold on |z|.  Not squared.
    pub bound: f64,
    /// Part of the complex plane being sampled.
    pub window: ComplexWindow,
}

impl Config {
    /// A configuration for an n×n grid with the stock iteration cap,
    /// bound and window.
    pub fn new(resolution: usize) -> Self {
        Config {
            resolution,
            max_steps: DEFAULT_MAX_STEPS,
            bound: DEFAULT_BOUND,
            window: ComplexWindow::default(),
        }
    }

    /// Replace the iteration cap.  Zero and one are accepted and pin
    /// every pixel to 1.
    pub fn with_max_steps(mut self, max_steps: usize) -> Self {
        self.max_steps = max_steps;
        self
    }

    /// Replace the escape bound.  A non-positive bound is accepted and
    /// pins every pixel to 1.
    pub fn with_bound(mut self, bound: f64) -> Self {
        self.bound = bound;
        self
    }

    /// Sample a different rectangle of the plane.
    pub fn with_window(mut self, window: ComplexWindow) -> Self {
        self.window = window;
        self
    }

    /// Only the resolution is checked; degenerate iteration caps and
    /// bounds are allowed through.
    pub fn validate(&self) -> Result<()> {
        check_resolution(self.resolution)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_window_spans_the_classic_view() {
        let w = ComplexWindow::default();
        assert_eq!(w.origin, Complex::new(-2.0, -1.13));
        let upper = w.upper_corner();
        assert!((upper.re - 0.48).abs() < 1e-12);
        assert!((upper.im - 1.13).abs() < 1e-12);
    }

    #[test]
    fn new_fills_in_defaults() {
        let c = Config::new(10);
        assert_eq!(c.resolution, 10);
        assert_eq!(c.max_steps, 25);
        assert_eq!(c.bound, 4.0);
        assert_eq!(c.window, ComplexWindow::default());
    }

    #[test]
    fn builders_override_fields() {
        let c = Config::new(10).with_max_steps(100).with_bound(2.0);
        assert_eq!(c.max_steps, 100);
        assert_eq!(c.bound, 2.0);
    }

    #[test]
    fn validate_rejects_tiny_grids() {
        assert_eq!(
            Config::new(1).validate(),
            Err(MandelbrotError::InvalidResolution { resolution: 1 })
        );
        assert_eq!(
            Config::new(0).validate(),
            Err(MandelbrotError::InvalidResolution { resolution: 0 })
        );
        assert!(Config::new(2).validate().is_ok());
    }

    #[test]
    fn validate_rejects_grids_too_large_to_store() {
        assert_eq!(
            Config::new(::std::usize::MAX).validate(),
            Err(MandelbrotError::InvalidResolution {
                resolution: ::std::usize::MAX
            })
        );
        assert!(check_resolution(MAX_RESOLUTION.saturating_add(1)).is_err());
    }

    #[cfg(target_pointer_width = "64")]
    #[test]
    fn validate_rejects_one_past_the_image_limit() {
        assert_eq!(
            Config::new(1 << 32).validate(),
            Err(MandelbrotError::InvalidResolution { resolution: 1 << 32 })
        );
        assert!(check_resolution(MAX_RESOLUTION).is_ok());
    }

    #[test]
    fn validate_lets_degenerate_parameters_through() {
        let c = Config::new(4).with_max_steps(0).with_bound(-1.0);
        assert!(c.validate().is_ok());
    }
}
