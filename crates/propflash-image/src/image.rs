//! The application image model
//!
//! [`Image`] wraps the raw bytes of an application image and keeps them
//! self-consistent: header fields are read and written in place, region
//! sizes are derived from the header pointers, and the additive checksum
//! can be verified and recomputed at any time.
//!
//! The model never performs I/O. An external loader supplies the bytes and
//! an external writer persists them via [`Image::data`].

use zerocopy::FromBytes;

use crate::clock;
use crate::error::{ImageError, Result};
use crate::header::{offsets, ImageHeader, EEPROM_SIZE, HEADER_SIZE};

/// Image kinds recognized by the loader
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageType {
    /// Not a loadable image
    Invalid,
    /// Program-data-only image; the runtime zero-fills the remainder
    Binary,
    /// Complete 32 KB EEPROM image, including the zero-filled tail
    Eeprom,
}

impl ImageType {
    /// Static human-readable label for this image kind
    pub const fn text(self) -> &'static str {
        match self {
            ImageType::Invalid => "Invalid",
            ImageType::Binary => "Binary",
            ImageType::Eeprom => "EEPROM",
        }
    }
}

impl core::fmt::Display for ImageType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.text())
    }
}

/// An application image for the target microcontroller
///
/// Owns the raw image bytes plus an opaque source label carried for
/// diagnostics only. The classification returned by [`Image::image_type`]
/// is derived from the buffer on every call, so it never goes stale across
/// mutations.
///
/// Mutating accessors do not recompute the checksum; callers seal the image
/// with [`Image::recalculate_checksum`] once they are done editing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Image {
    data: Vec<u8>,
    source: String,
}

impl Image {
    /// Create an image over an owned byte buffer
    pub fn new(data: Vec<u8>) -> Self {
        Self {
            data,
            source: String::new(),
        }
    }

    /// Create an image carrying a source label (e.g. the path it was read
    /// from). The label is not validated or interpreted.
    pub fn with_source(data: Vec<u8>, source: impl Into<String>) -> Self {
        Self {
            data,
            source: source.into(),
        }
    }

    /// The raw image bytes, for an external writer to persist
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Replace the image bytes wholesale. This is the only way to reset an
    /// image; all derived state follows the new buffer.
    pub fn set_data(&mut self, data: Vec<u8>) {
        self.data = data;
    }

    /// Consume the image and return its buffer
    pub fn into_data(self) -> Vec<u8> {
        self.data
    }

    /// The opaque source label this image was constructed with
    pub fn source(&self) -> &str {
        &self.source
    }

    // ========================================================================
    // Low-level access
    // ========================================================================

    fn slice(&self, pos: usize, len: usize) -> Result<&[u8]> {
        pos.checked_add(len)
            .and_then(|end| self.data.get(pos..end))
            .ok_or(ImageError::OutOfRange {
                pos,
                len,
                image_size: self.data.len(),
            })
    }

    fn slice_mut(&mut self, pos: usize, len: usize) -> Result<&mut [u8]> {
        let image_size = self.data.len();
        pos.checked_add(len)
            .and_then(|end| self.data.get_mut(pos..end))
            .ok_or(ImageError::OutOfRange {
                pos,
                len,
                image_size,
            })
    }

    /// Read the byte at `pos`
    pub fn read_byte(&self, pos: usize) -> Result<u8> {
        Ok(self.slice(pos, 1)?[0])
    }

    /// Read a little-endian word (2 bytes) at `pos`
    pub fn read_word(&self, pos: usize) -> Result<u16> {
        Ok(u16::from_le_bytes(self.slice(pos, 2)?.try_into().unwrap()))
    }

    /// Read a little-endian long (4 bytes) at `pos`
    pub fn read_long(&self, pos: usize) -> Result<u32> {
        Ok(u32::from_le_bytes(self.slice(pos, 4)?.try_into().unwrap()))
    }

    /// Write the byte at `pos`.
    ///
    /// Writes past the current end of the buffer are rejected with
    /// [`ImageError::OutOfRange`]; the buffer never grows. The format
    /// assumes fixed pre-sized buffers, so a write that would extend the
    /// image is a caller bug, not a resize request.
    pub fn write_byte(&mut self, pos: usize, value: u8) -> Result<()> {
        self.slice_mut(pos, 1)?[0] = value;
        Ok(())
    }

    /// Write a little-endian word (2 bytes) at `pos`, bounds-checked like
    /// [`Image::write_byte`]
    pub fn write_word(&mut self, pos: usize, value: u16) -> Result<()> {
        self.slice_mut(pos, 2)?.copy_from_slice(&value.to_le_bytes());
        Ok(())
    }

    /// Write a little-endian long (4 bytes) at `pos`, bounds-checked like
    /// [`Image::write_byte`]
    pub fn write_long(&mut self, pos: usize, value: u32) -> Result<()> {
        self.slice_mut(pos, 4)?.copy_from_slice(&value.to_le_bytes());
        Ok(())
    }

    // ========================================================================
    // Header access
    // ========================================================================

    fn header(&self) -> Result<&ImageHeader> {
        ImageHeader::ref_from_prefix(&self.data)
            .map(|(header, _)| header)
            .map_err(|_| ImageError::TooShort {
                len: self.data.len(),
                required: HEADER_SIZE,
            })
    }

    fn header_mut(&mut self) -> Result<&mut ImageHeader> {
        let len = self.data.len();
        ImageHeader::mut_from_prefix(&mut self.data)
            .map(|(header, _)| header)
            .map_err(|_| ImageError::TooShort {
                len,
                required: HEADER_SIZE,
            })
    }

    /// Start-of-code pointer. Always `0x0010` in a well-formed image, since
    /// code begins immediately after the init header.
    pub fn start_of_code(&self) -> Result<u16> {
        Ok(self.header()?.start_of_code.get())
    }

    /// Start-of-variables pointer, the boundary between code and variable
    /// space
    pub fn start_of_variables(&self) -> Result<u16> {
        Ok(self.header()?.start_of_variables.get())
    }

    /// Start-of-stack-space pointer, the boundary between variable space
    /// and the stack
    pub fn start_of_stack_space(&self) -> Result<u16> {
        Ok(self.header()?.start_of_stack_space.get())
    }

    /// Current program pointer, the entry point of the first public method
    pub fn current_program(&self) -> Result<u16> {
        Ok(self.header()?.current_program.get())
    }

    /// Current stack space pointer, the first run-time usable stack slot
    pub fn current_stack_space(&self) -> Result<u16> {
        Ok(self.header()?.current_stack.get())
    }

    // ========================================================================
    // Validation
    // ========================================================================

    /// The byte that, stored at the checksum offset, makes the additive sum
    /// of the whole image 0 mod 256.
    ///
    /// Computed as the complement of every byte except the stored checksum
    /// itself, not read back from offset 5.
    pub fn checksum(&self) -> u8 {
        let sum = self
            .data
            .iter()
            .enumerate()
            .filter(|&(pos, _)| pos != offsets::CHECKSUM)
            .fold(0u8, |acc, (_, &byte)| acc.wrapping_add(byte));
        0u8.wrapping_sub(sum)
    }

    /// Whether the additive sum of all bytes currently in the buffer,
    /// including the stored checksum byte, is 0 mod 256
    pub fn checksum_is_valid(&self) -> bool {
        self.data.iter().fold(0u8, |acc, &byte| acc.wrapping_add(byte)) == 0
    }

    /// Recompute the checksum byte and store it at offset 5.
    ///
    /// Idempotent: a second call leaves the buffer unchanged. Fails with
    /// [`ImageError::TooShort`] when the buffer cannot hold the checksum
    /// byte.
    pub fn recalculate_checksum(&mut self) -> Result<()> {
        let value = self.checksum();
        self.write_byte(offsets::CHECKSUM, value)
            .map_err(|_| ImageError::TooShort {
                len: self.data.len(),
                required: offsets::CHECKSUM + 1,
            })
    }

    /// Whether the image is structurally and content valid: start-of-code
    /// is `0x0010`, the additive checksum sums to 0, and the buffer length
    /// fits one of the two recognized image kinds
    pub fn is_valid(&self) -> bool {
        let start_of_code = match self.start_of_code() {
            Ok(value) => value,
            Err(_) => return false,
        };
        if start_of_code != HEADER_SIZE as u16 {
            log::debug!(
                "start of code is 0x{:04X}, expected 0x{:04X}",
                start_of_code,
                HEADER_SIZE
            );
            return false;
        }
        if self.image_type() == ImageType::Invalid {
            log::debug!("length {} matches no image kind", self.data.len());
            return false;
        }
        if !self.checksum_is_valid() {
            log::debug!("additive checksum is not 0, image is corrupt");
            return false;
        }
        true
    }

    // ========================================================================
    // Type and size derivation
    // ========================================================================

    /// Classify the image from the buffer alone. Recomputed on every call
    /// so mutations can never leave a stale classification behind.
    pub fn image_type(&self) -> ImageType {
        let len = self.data.len();
        if len == EEPROM_SIZE {
            ImageType::Eeprom
        } else if len >= HEADER_SIZE
            && len < EEPROM_SIZE
            && self.start_of_code() == Ok(HEADER_SIZE as u16)
        {
            ImageType::Binary
        } else {
            ImageType::Invalid
        }
    }

    /// Human-readable label for [`Image::image_type`]
    pub fn image_type_text(&self) -> &'static str {
        self.image_type().text()
    }

    /// Total image length in bytes
    pub fn image_size(&self) -> usize {
        self.data.len()
    }

    /// Size of the code region, from start-of-code to start-of-variables.
    ///
    /// Header pointers that are out of order report zero rather than
    /// wrapping.
    pub fn program_size(&self) -> Result<usize> {
        let header = self.header()?;
        Ok(usize::from(header.start_of_variables.get())
            .saturating_sub(usize::from(header.start_of_code.get())))
    }

    /// Size of the variable region, from start-of-variables to
    /// start-of-stack-space
    pub fn variable_size(&self) -> Result<usize> {
        let header = self.header()?;
        Ok(usize::from(header.start_of_stack_space.get())
            .saturating_sub(usize::from(header.start_of_variables.get())))
    }

    /// Size of the stack and free space after start-of-stack-space.
    ///
    /// Only EEPROM images carry the zero-filled tail; binary images omit it
    /// and report zero.
    pub fn stack_size(&self) -> Result<usize> {
        let start = usize::from(self.start_of_stack_space()?);
        match self.image_type() {
            ImageType::Eeprom => Ok(self.data.len().saturating_sub(start)),
            _ => Ok(0),
        }
    }

    // ========================================================================
    // Clock settings
    // ========================================================================

    /// Clock frequency of the image, in Hz
    pub fn clock_frequency(&self) -> Result<u32> {
        Ok(self.header()?.clock_frequency.get())
    }

    /// Assign a new clock frequency to the image
    pub fn set_clock_frequency(&mut self, frequency: u32) -> Result<()> {
        self.header_mut()?.clock_frequency.set(frequency);
        Ok(())
    }

    /// The raw clock mode byte
    pub fn clock_mode(&self) -> Result<u8> {
        Ok(self.header()?.clock_mode)
    }

    /// Human-readable name of the stored clock mode, with the
    /// [`clock::INVALID_CLOCK_MODE_TEXT`] fallback for unrecognized bytes
    pub fn clock_mode_text(&self) -> Result<&'static str> {
        Ok(clock::mode_text(self.clock_mode()?))
    }

    /// Assign a new clock mode.
    ///
    /// Bytes outside the clock-mode table are rejected with
    /// [`ImageError::InvalidClockMode`] and the buffer is left untouched.
    pub fn set_clock_mode(&mut self, value: u8) -> Result<()> {
        if !clock::is_valid_mode(value) {
            log::debug!("rejecting unrecognized clock mode 0x{:02X}", value);
            return Err(ImageError::InvalidClockMode { value });
        }
        self.header_mut()?.clock_mode = value;
        Ok(())
    }

    // ========================================================================
    // Format conversion
    // ========================================================================

    /// Resize the image to the full EEPROM size.
    ///
    /// Short images are padded with zeros; a buffer longer than the EEPROM
    /// size is truncated to it. Zero padding does not change the additive
    /// sum, so a valid checksum stays valid.
    pub fn to_eeprom(&mut self) -> Result<()> {
        self.header()?;
        if self.data.len() != EEPROM_SIZE {
            log::debug!(
                "resizing {}-byte image to {} bytes",
                self.data.len(),
                EEPROM_SIZE
            );
            self.data.resize(EEPROM_SIZE, 0);
        }
        Ok(())
    }

    /// Truncate the image at the start-of-variables pointer, dropping the
    /// tail the runtime zero-fills on load.
    ///
    /// Never truncates below the header. The checksum only stays valid when
    /// the dropped tail summed to 0 mod 256; callers that cut a non-zero
    /// tail must call [`Image::recalculate_checksum`] afterwards.
    pub fn to_binary(&mut self) -> Result<()> {
        let end = usize::from(self.start_of_variables()?).max(HEADER_SIZE);
        if end < self.data.len() {
            log::debug!(
                "truncating {}-byte image to {} bytes",
                self.data.len(),
                end
            );
            self.data.truncate(end);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn init_logs() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    /// A well-formed image: 80 MHz XTAL1+PLL16X, 0xF0 bytes of code,
    /// 8 bytes of variables, checksum sealed.
    fn make_test_image(len: usize) -> Image {
        let mut image = Image::new(vec![0; len]);
        image.write_long(offsets::CLOCK_FREQUENCY, 80_000_000).unwrap();
        image.write_byte(offsets::CLOCK_MODE, 0x6F).unwrap();
        image.write_word(offsets::START_OF_CODE, 0x0010).unwrap();
        image.write_word(offsets::START_OF_VARIABLES, 0x0100).unwrap();
        image.write_word(offsets::START_OF_STACK_SPACE, 0x0108).unwrap();
        image.write_word(offsets::CURRENT_PROGRAM, 0x0018).unwrap();
        image.write_word(offsets::CURRENT_STACK, 0x0110).unwrap();
        image.recalculate_checksum().unwrap();
        image
    }

    #[test]
    fn test_empty_image() {
        let image = Image::default();
        assert_eq!(image.image_size(), 0);
        assert_eq!(image.image_type(), ImageType::Invalid);
        assert_eq!(image.source(), "");
        assert!(!image.is_valid());
    }

    #[test]
    fn test_source_label_is_opaque() {
        let image = Image::with_source(vec![0; 4], "blink.binary");
        assert_eq!(image.source(), "blink.binary");
        assert_eq!(image.data(), &[0; 4]);
    }

    #[test]
    fn test_set_data_replaces_buffer() {
        let mut image = make_test_image(0x200);
        image.set_data(vec![1, 2, 3]);
        assert_eq!(image.image_size(), 3);
        assert_eq!(image.image_type(), ImageType::Invalid);
        assert_eq!(image.into_data(), vec![1, 2, 3]);
    }

    #[test]
    fn test_read_write_roundtrip() {
        let mut image = Image::new(vec![0; 64]);

        image.write_byte(10, 0xAB).unwrap();
        assert_eq!(image.read_byte(10).unwrap(), 0xAB);

        image.write_word(20, 0xBEEF).unwrap();
        assert_eq!(image.read_word(20).unwrap(), 0xBEEF);
        assert_eq!(image.read_byte(20).unwrap(), 0xEF);
        assert_eq!(image.read_byte(21).unwrap(), 0xBE);

        image.write_long(40, 0xDEADBEEF).unwrap();
        assert_eq!(image.read_long(40).unwrap(), 0xDEADBEEF);
        assert_eq!(image.read_byte(40).unwrap(), 0xEF);
        assert_eq!(image.read_byte(43).unwrap(), 0xDE);
    }

    #[test]
    fn test_reads_are_bounds_checked() {
        let image = Image::new(vec![0; 8]);
        assert_eq!(image.read_byte(7).unwrap(), 0);
        assert_eq!(
            image.read_byte(8),
            Err(ImageError::OutOfRange {
                pos: 8,
                len: 1,
                image_size: 8
            })
        );
        assert!(image.read_word(7).is_err());
        assert!(image.read_long(5).is_err());
        assert!(image.read_long(usize::MAX - 2).is_err());
    }

    #[test]
    fn test_writes_past_end_are_rejected_not_grown() {
        let mut image = Image::new(vec![0; 8]);
        assert_eq!(
            image.write_byte(8, 0xFF),
            Err(ImageError::OutOfRange {
                pos: 8,
                len: 1,
                image_size: 8
            })
        );
        assert!(image.write_word(7, 0xFFFF).is_err());
        assert!(image.write_long(6, 0xFFFF_FFFF).is_err());
        assert_eq!(image.image_size(), 8);
        assert_eq!(image.data(), &[0; 8]);
    }

    #[test]
    fn test_header_accessors_on_short_buffer() {
        let image = Image::new(vec![0; 10]);
        fn too_short<T>() -> core::result::Result<T, ImageError> {
            Err(ImageError::TooShort {
                len: 10,
                required: HEADER_SIZE,
            })
        }
        assert_eq!(image.start_of_code(), too_short());
        assert_eq!(image.start_of_variables(), too_short());
        assert_eq!(image.start_of_stack_space(), too_short());
        assert_eq!(image.current_program(), too_short());
        assert_eq!(image.current_stack_space(), too_short());
        assert_eq!(image.clock_frequency(), too_short());
        assert_eq!(image.clock_mode(), too_short());
        assert_eq!(image.program_size(), too_short());
        assert_eq!(image.variable_size(), too_short());
        assert_eq!(image.stack_size(), too_short());
        assert_eq!(image.image_type(), ImageType::Invalid);
    }

    #[test]
    fn test_checksum_complements_image_sum() {
        let mut image = Image::new((0u8..64).map(|b| b.wrapping_mul(7)).collect());
        image.recalculate_checksum().unwrap();
        assert!(image.checksum_is_valid());

        let sum = image.data().iter().fold(0u8, |acc, &b| acc.wrapping_add(b));
        assert_eq!(sum, 0);
    }

    #[test]
    fn test_checksum_ignores_stored_byte() {
        let mut image = Image::new(vec![3; 32]);
        image.write_byte(offsets::CHECKSUM, 0x00).unwrap();
        let complement = image.checksum();
        image.write_byte(offsets::CHECKSUM, 0x5A).unwrap();
        assert_eq!(image.checksum(), complement);
    }

    #[test]
    fn test_recalculate_checksum_is_idempotent() {
        let mut image = make_test_image(0x200);
        let sealed = image.clone();
        image.recalculate_checksum().unwrap();
        assert_eq!(image, sealed);
    }

    #[test]
    fn test_recalculate_checksum_too_short() {
        let mut image = Image::new(vec![0; 5]);
        assert_eq!(
            image.recalculate_checksum(),
            Err(ImageError::TooShort {
                len: 5,
                required: 6
            })
        );
        let mut empty = Image::default();
        assert!(empty.recalculate_checksum().is_err());
    }

    #[test]
    fn test_image_type_classification() {
        init_logs();
        assert_eq!(Image::new(vec![0; 10]).image_type(), ImageType::Invalid);
        // Header-sized but start-of-code is zero
        assert_eq!(Image::new(vec![0; 64]).image_type(), ImageType::Invalid);
        assert_eq!(make_test_image(0x200).image_type(), ImageType::Binary);
        assert_eq!(make_test_image(EEPROM_SIZE - 1).image_type(), ImageType::Binary);
        // EEPROM classification is by length alone
        assert_eq!(Image::new(vec![0; EEPROM_SIZE]).image_type(), ImageType::Eeprom);
        assert_eq!(
            Image::new(vec![0; EEPROM_SIZE + 1]).image_type(),
            ImageType::Invalid
        );
    }

    #[test]
    fn test_image_type_text() {
        assert_eq!(Image::new(vec![0; 10]).image_type_text(), "Invalid");
        assert_eq!(make_test_image(0x200).image_type_text(), "Binary");
        assert_eq!(make_test_image(EEPROM_SIZE).image_type_text(), "EEPROM");
        assert_eq!(ImageType::Eeprom.to_string(), "EEPROM");
    }

    #[test]
    fn test_is_valid_requires_start_of_code_and_checksum() {
        init_logs();
        let mut image = make_test_image(0x200);
        assert!(image.is_valid());

        // Corrupt a code byte without resealing
        image.write_byte(0x20, 0x01).unwrap();
        assert!(!image.checksum_is_valid());
        assert!(!image.is_valid());
        image.recalculate_checksum().unwrap();
        assert!(image.is_valid());

        // EEPROM-sized image with a bad start-of-code pointer classifies
        // as Eeprom but never validates
        let mut eeprom = make_test_image(EEPROM_SIZE);
        eeprom.write_word(offsets::START_OF_CODE, 0x0020).unwrap();
        eeprom.recalculate_checksum().unwrap();
        assert_eq!(eeprom.image_type(), ImageType::Eeprom);
        assert!(!eeprom.is_valid());
    }

    #[test]
    fn test_eeprom_scenario() {
        // 32768 zero bytes with only the start-of-code pointer written
        let mut image = Image::new(vec![0; EEPROM_SIZE]);
        image.write_word(offsets::START_OF_CODE, 0x0010).unwrap();
        assert_eq!(image.image_type(), ImageType::Eeprom);
        assert_eq!(image.image_size(), EEPROM_SIZE);
        image.recalculate_checksum().unwrap();
        assert!(image.checksum_is_valid());
        assert!(image.is_valid());
    }

    #[test]
    fn test_derived_sizes() {
        let binary = make_test_image(0x200);
        assert_eq!(binary.program_size().unwrap(), 0x00F0);
        assert_eq!(binary.variable_size().unwrap(), 8);
        assert_eq!(binary.stack_size().unwrap(), 0);

        let eeprom = make_test_image(EEPROM_SIZE);
        assert_eq!(eeprom.program_size().unwrap(), 0x00F0);
        assert_eq!(eeprom.stack_size().unwrap(), EEPROM_SIZE - 0x0108);
    }

    #[test]
    fn test_out_of_order_pointers_saturate() {
        let mut image = make_test_image(0x200);
        image.write_word(offsets::START_OF_VARIABLES, 0x0008).unwrap();
        assert_eq!(image.program_size().unwrap(), 0);
        assert_eq!(image.variable_size().unwrap(), 0x0100);
    }

    #[test]
    fn test_clock_frequency_roundtrip() {
        let mut image = make_test_image(0x200);
        assert_eq!(image.clock_frequency().unwrap(), 80_000_000);
        image.set_clock_frequency(96_000_000).unwrap();
        assert_eq!(image.clock_frequency().unwrap(), 96_000_000);
        assert_eq!(image.read_long(offsets::CLOCK_FREQUENCY).unwrap(), 96_000_000);
    }

    #[test]
    fn test_set_clock_mode_validates() {
        init_logs();
        let mut image = make_test_image(0x200);
        assert_eq!(image.clock_mode().unwrap(), 0x6F);
        assert_eq!(image.clock_mode_text().unwrap(), "XTAL1+PLL16X");

        image.set_clock_mode(0x00).unwrap();
        assert_eq!(image.clock_mode().unwrap(), 0x00);
        assert_eq!(image.clock_mode_text().unwrap(), "RCFAST");

        assert_eq!(
            image.set_clock_mode(0x02),
            Err(ImageError::InvalidClockMode { value: 0x02 })
        );
        assert_eq!(image.clock_mode().unwrap(), 0x00);
    }

    #[test]
    fn test_clock_mode_text_fallback() {
        let mut image = make_test_image(0x200);
        // A junk mode can be present in an image read from storage
        image.write_byte(offsets::CLOCK_MODE, 0x55).unwrap();
        assert_eq!(image.clock_mode_text().unwrap(), "Invalid");
    }

    #[test]
    fn test_clock_settings_too_short() {
        let mut image = Image::new(vec![0; 4]);
        assert!(image.set_clock_frequency(80_000_000).is_err());
        assert!(matches!(
            image.set_clock_mode(0x6F),
            Err(ImageError::TooShort { .. })
        ));
        assert!(image.clock_mode_text().is_err());
    }

    #[test]
    fn test_binary_eeprom_conversion_roundtrip() {
        // Binary image cut exactly at start-of-variables
        let binary = make_test_image(0x0100);
        let mut image = binary.clone();

        image.to_eeprom().unwrap();
        assert_eq!(image.image_type(), ImageType::Eeprom);
        assert_eq!(image.image_size(), EEPROM_SIZE);
        assert!(image.checksum_is_valid());
        assert!(image.is_valid());

        image.to_binary().unwrap();
        assert_eq!(image, binary);
    }

    #[test]
    fn test_to_binary_never_cuts_the_header() {
        let mut image = make_test_image(0x200);
        image.write_word(offsets::START_OF_VARIABLES, 0x0004).unwrap();
        image.to_binary().unwrap();
        assert_eq!(image.image_size(), HEADER_SIZE);
    }

    #[test]
    fn test_conversion_requires_header() {
        let mut image = Image::new(vec![0; 10]);
        assert!(matches!(
            image.to_eeprom(),
            Err(ImageError::TooShort { .. })
        ));
        assert!(image.to_binary().is_err());
        assert_eq!(image.image_size(), 10);
    }
}
