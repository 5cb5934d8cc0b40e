//! Clock mode table
//!
//! The clock mode byte at offset 4 encodes the oscillator and PLL
//! configuration the chip boots with. Only the combinations below are
//! meaningful; anything else is rejected on write.

/// Fallback text for clock mode bytes not present in [`CLOCK_MODES`]
pub const INVALID_CLOCK_MODE_TEXT: &str = "Invalid";

/// Recognized clock mode bytes and their human-readable names
pub const CLOCK_MODES: &[(u8, &str)] = &[
    (0x00, "RCFAST"),
    (0x01, "RCSLOW"),
    (0x22, "XINPUT"),
    (0x2A, "XTAL1"),
    (0x32, "XTAL2"),
    (0x3A, "XTAL3"),
    (0x63, "XINPUT+PLL1X"),
    (0x64, "XINPUT+PLL2X"),
    (0x65, "XINPUT+PLL4X"),
    (0x66, "XINPUT+PLL8X"),
    (0x67, "XINPUT+PLL16X"),
    (0x6B, "XTAL1+PLL1X"),
    (0x6C, "XTAL1+PLL2X"),
    (0x6D, "XTAL1+PLL4X"),
    (0x6E, "XTAL1+PLL8X"),
    (0x6F, "XTAL1+PLL16X"),
    (0x73, "XTAL2+PLL1X"),
    (0x74, "XTAL2+PLL2X"),
    (0x75, "XTAL2+PLL4X"),
    (0x76, "XTAL2+PLL8X"),
    (0x77, "XTAL2+PLL16X"),
    (0x7B, "XTAL3+PLL1X"),
    (0x7C, "XTAL3+PLL2X"),
    (0x7D, "XTAL3+PLL4X"),
    (0x7E, "XTAL3+PLL8X"),
    (0x7F, "XTAL3+PLL16X"),
];

/// Look up the human-readable name of a clock mode byte.
///
/// Unknown values yield [`INVALID_CLOCK_MODE_TEXT`] rather than failing;
/// images in the wild do carry junk in this field.
pub fn mode_text(value: u8) -> &'static str {
    CLOCK_MODES
        .iter()
        .find(|(mode, _)| *mode == value)
        .map(|(_, text)| *text)
        .unwrap_or(INVALID_CLOCK_MODE_TEXT)
}

/// Check whether a byte is a recognized clock mode
pub fn is_valid_mode(value: u8) -> bool {
    CLOCK_MODES.iter().any(|(mode, _)| *mode == value)
}
