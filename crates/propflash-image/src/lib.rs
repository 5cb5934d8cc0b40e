//! propflash-image - Application image model for the Propeller loader
//!
//! This crate models the binary application image format the loader
//! downloads to the target: a fixed 16-byte init header (clock settings,
//! checksum, region pointers) followed by code, variable, and stack space.
//! It parses a raw byte buffer into that structured view, verifies and
//! recomputes the additive checksum, derives region sizes from the header
//! pointers, and converts between the two recognized image kinds.
//!
//! File I/O and the download protocol are external collaborators: this
//! model only ever sees an owned byte buffer, and hands the mutated bytes
//! back through [`Image::data`].
//!
//! # Example
//!
//! ```ignore
//! use propflash_image::Image;
//!
//! fn inspect(bytes: Vec<u8>, path: &str) {
//!     let image = Image::with_source(bytes, path);
//!     if image.is_valid() {
//!         println!("{}: {} image, {} bytes", path, image.image_type_text(), image.image_size());
//!         println!("  clock: {} Hz ({})", image.clock_frequency().unwrap(), image.clock_mode_text().unwrap());
//!     } else {
//!         println!("{}: not a loadable image", path);
//!     }
//! }
//! ```

#![warn(missing_docs)]
#![warn(rust_2018_idioms)]

pub mod clock;
pub mod error;
pub mod header;
pub mod image;

pub use error::{ImageError, Result};
pub use header::{ImageHeader, EEPROM_SIZE, HEADER_SIZE};
pub use image::{Image, ImageType};
