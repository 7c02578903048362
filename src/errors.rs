// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Everything that can go wrong between asking for a grid and getting
//! a picture on disk.  The computation itself is total; only the
//! edges (a resolution too small to map, a worker thread dying, a
//! file that can't be written) fail.

use failure::Fail;

/// Errors surfaced by the grid generator and the image writer.
#[derive(Debug, Fail, PartialEq)]
pub enum MandelbrotError {
    /// The pixel grid needs at least two samples per side, otherwise
    /// the scale factors divide by zero, and no more than an image
    /// (and memory) can address.
    #[fail(
        display = "invalid resolution {}: the grid needs between 2 and 4294967295 pixels per side",
        resolution
    )]
    InvalidResolution {
        /// The rejected pixel count.
        resolution: usize,
    },

    /// A threaded render was asked to run on no threads at all.
    #[fail(display = "invalid thread count {}: at least one thread is required", threads)]
    InvalidThreadCount {
        /// The rejected thread count.
        threads: usize,
    },

    /// One of the render threads panicked.
    #[fail(display = "a render thread failed before finishing its band")]
    RenderFailed,

    /// The output image could not be encoded or written.
    #[fail(display = "could not write {}: {}", path, reason)]
    OutputWriteFailed {
        /// Where we tried to write.
        path: String,
        /// What the encoder or the filesystem had to say about it.
        reason: String,
    },
}

impl MandelbrotError {
    /// The process exit code the command line tool reports for this
    /// error.
    pub fn exit_code(&self) -> i32 {
        match *self {
            MandelbrotError::InvalidResolution { .. } => 2,
            MandelbrotError::OutputWriteFailed { .. } => 3,
            _ => 1,
        }
    }
}

/// Result type used throughout the crate.
pub type Result<T> = ::std::result::Result<T, MandelbrotError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes_are_distinct_per_failure() {
        assert_eq!(MandelbrotError::InvalidResolution { resolution: 1 }.exit_code(), 2);
        assert_eq!(
            MandelbrotError::OutputWriteFailed {
                path: "x.png".to_string(),
                reason: "nope".to_string()
            }
            .exit_code(),
            3
        );
        assert_eq!(MandelbrotError::RenderFailed.exit_code(), 1);
        assert_eq!(MandelbrotError::InvalidThreadCount { threads: 0 }.exit_code(), 1);
    }

    #[test]
    fn messages_name_the_offending_value() {
        let e = MandelbrotError::InvalidResolution { resolution: 1 };
        assert!(format!("{}", e).contains("invalid resolution 1"));
        let e = MandelbrotError::OutputWriteFailed {
            path: "/nowhere/mandelbrot.png".to_string(),
            reason: "No such file or directory".to_string(),
        };
        assert_eq!(
            format!("{}", e),
            "could not write /nowhere/mandelbrot.png: No such file or directory"
        );
    }
}
