//! Small text helpers shared by the codecs.

/// Left-pads `value` with zeros to at least `width` characters.
///
/// Longer values are returned unchanged.
pub fn zero_pad(value: impl ToString, width: usize) -> String {
    let value = value.to_string();
    let missing = width.saturating_sub(value.chars().count());
    let mut padded = "0".repeat(missing);
    padded.push_str(&value);
    padded
}
