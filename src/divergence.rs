// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The escape count for a single point.
//!
//! The orbit starts at z = c rather than z = 0.  Since 0² + c = c the
//! first term is the same, we just skip an iteration we already know
//! the answer to.  The counter starts at 1 to account for it.

use num::Complex;

use config::{DEFAULT_BOUND, DEFAULT_MAX_STEPS};

/// |z|, computed as sqrt(re² + im²).  `Complex::norm` goes through
/// `hypot`, which can round differently in the last place.
#[inline]
fn magnitude(z: Complex<f64>) -> f64 {
    (z.re * z.re + z.im * z.im).sqrt()
}

/// Iterate z ← z² + c from z = c and return the step at which |z|
/// first reached `bound`, or `max_steps` if it never did.
///
/// The magnitude is tested before each update, so the result is the
/// number of updates already applied plus one.  The result is in
/// `[1, max_steps]` for any `max_steps >= 1`; a cap of 0 or 1, or a
/// bound of zero or less, returns 1 without iterating.
pub fn estimate_divergence(c: Complex<f64>, bound: f64, max_steps: usize) -> usize {
    let mut z = c;
    let mut i = 1;
    while i < max_steps && magnitude(z) < bound {
        z = z * z + c;
        i += 1;
    }
    i
}

/// `estimate_divergence` with a bound of 4 and a cap of 25.
pub fn estimate_divergence_default(c: Complex<f64>) -> usize {
    estimate_divergence(c, DEFAULT_BOUND, DEFAULT_MAX_STEPS)
}
