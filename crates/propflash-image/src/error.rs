//! Error types for propflash-image
//!
//! Every failure in this crate is local and recoverable: operations report
//! a distinguished error and leave the image buffer untouched, so callers
//! decide whether to abort or prompt.

use thiserror::Error;

/// Image model error type - Copy for efficiency
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ImageError {
    /// Raw access does not fit within the current buffer.
    ///
    /// Writes past the end of the buffer are rejected rather than growing
    /// it; the image format assumes fixed pre-sized buffers.
    #[error("access of {len} bytes at offset {pos} is out of range for a {image_size}-byte image")]
    OutOfRange {
        /// Offset of the attempted access
        pos: usize,
        /// Width of the attempted access in bytes
        len: usize,
        /// Current buffer length
        image_size: usize,
    },

    /// Buffer is too short for a header-dependent operation
    #[error("image is {len} bytes but the operation needs at least {required}")]
    TooShort {
        /// Current buffer length
        len: usize,
        /// Minimum length the operation needs
        required: usize,
    },

    /// Clock mode byte is not present in the clock-mode table
    #[error("unrecognized clock mode 0x{value:02X}")]
    InvalidClockMode {
        /// The rejected clock mode byte
        value: u8,
    },
}

/// Result type alias using the crate error type
pub type Result<T> = core::result::Result<T, ImageError>;
