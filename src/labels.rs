//! Byte Label Table
//!
//! Maps every byte value to a short display mnemonic for the status
//! trace: control characters get their ASCII names, printable bytes are
//! shown literally, and bytes above 127 get a hex token.

use once_cell::sync::Lazy;

/// ASCII names for bytes 0-32, including "SP" for the space character.
const CONTROL_MNEMONICS: [&str; 33] = [
    "NUL", "SOH", "STX", "ETX", "EOT", "ENQ", "ACK", "BEL", "BS", "HT", "LF",
    "VT", "FF", "CR", "SO", "SI", "DLE", "DC1", "DC2", "DC3", "DC4", "NAK",
    "SYN", "ETB", "CAN", "EM", "SUB", "ESC", "FS", "GS", "RS", "US", "SP",
];

/// Precomputed labels for all 256 byte values, built on first use and
/// immutable afterwards.
static LABELS: Lazy<[String; 256]> = Lazy::new(|| {
    std::array::from_fn(|value| match value {
        0..=32 => CONTROL_MNEMONICS[value].to_string(),
        33..=126 => (value as u8 as char).to_string(),
        127 => "DEL".to_string(),
        _ => format!("x{:02X}", value),
    })
});

/// Look up the display mnemonic for a byte value.
///
/// Total over the full byte range: every value has a non-empty,
/// whitespace-free label, so labels can be joined with single spaces.
pub fn label(byte: u8) -> &'static str {
    LABELS[byte as usize].as_str()
}
