//! Fixed layout of the application image init header
//!
//! The first 16 bytes of every application image form the init header. It
//! carries the startup clock configuration, the additive checksum byte, and
//! the pointers from which the code, variable, and stack region boundaries
//! are derived.
//!
//! | data size | offset | description |
//! |-----------|--------|-------------|
//! | long      | 0      | clock frequency in Hz |
//! | byte      | 4      | clock mode |
//! | byte      | 5      | checksum |
//! | word      | 6      | start-of-code pointer (always 0x0010) |
//! | word      | 8      | start-of-variables pointer |
//! | word      | 10     | start-of-stack-space pointer |
//! | word      | 12     | current program pointer |
//! | word      | 14     | current stack space pointer |
//!
//! All multi-byte fields are little endian.

use zerocopy::byteorder::little_endian::{U16, U32};
use zerocopy::{FromBytes, Immutable, IntoBytes, KnownLayout, Unaligned};

/// Byte offsets of the init header fields
pub mod offsets {
    /// Clock frequency in Hz (long)
    pub const CLOCK_FREQUENCY: usize = 0;
    /// Clock mode (byte)
    pub const CLOCK_MODE: usize = 4;
    /// Additive checksum (byte)
    pub const CHECKSUM: usize = 5;
    /// Start-of-code pointer (word)
    pub const START_OF_CODE: usize = 6;
    /// Start-of-variables pointer (word)
    pub const START_OF_VARIABLES: usize = 8;
    /// Start-of-stack-space pointer (word)
    pub const START_OF_STACK_SPACE: usize = 10;
    /// Current program pointer (word), entry point of the first public method
    pub const CURRENT_PROGRAM: usize = 12;
    /// Current stack space pointer (word), first run-time usable stack slot
    pub const CURRENT_STACK: usize = 14;
}

/// Size of the init header in bytes.
///
/// Code starts immediately after the header, so this is also the value a
/// well-formed start-of-code pointer holds.
pub const HEADER_SIZE: usize = 16;

/// Total size of a full EEPROM image, including the zero-filled tail
pub const EEPROM_SIZE: usize = 32768;

/// The init header, viewed in place over the first 16 bytes of an image
#[repr(C)]
#[derive(Debug, FromBytes, IntoBytes, KnownLayout, Immutable, Unaligned)]
pub struct ImageHeader {
    /// Oscillator frequency in Hz
    pub clock_frequency: U32,
    /// Encoded oscillator/PLL configuration
    pub clock_mode: u8,
    /// Byte making the additive sum of the whole image 0 mod 256
    pub checksum: u8,
    /// Start of the code region
    pub start_of_code: U16,
    /// Boundary between code and variable space
    pub start_of_variables: U16,
    /// Boundary between variable and stack space
    pub start_of_stack_space: U16,
    /// Entry point of the first public method of the object
    pub current_program: U16,
    /// First run-time usable slot of the stack
    pub current_stack: U16,
}

const _: () = assert!(core::mem::size_of::<ImageHeader>() == HEADER_SIZE);
