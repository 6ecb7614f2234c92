//! Bit-formatting helpers shared by every generator.
//!
//! All binary literals are zero-padded to their declared width and all
//! bit-range arithmetic is done in `i64` so that degenerate widths render as
//! the conventional empty descending range (`-1 downto 0`) instead of
//! wrapping.

/// Number of bits needed to represent `value` (0 needs 0 bits).
///
/// Same contract as Python's `int.bit_length()`: the width of an n-entry
/// address space is `bit_length(n - 1)`.
pub fn bit_length(value: u32) -> u32 {
    u32::BITS - value.leading_zeros()
}

/// Zero-padded binary digits of `value`, exactly `width` characters wide.
pub fn bin_literal(value: u32, width: u32) -> String {
    format!("{value:0width$b}", width = width as usize)
}

/// `width`-wide literal with exactly bit `bit` set.
pub fn one_hot_literal(bit: u32, width: u32) -> String {
    bin_literal(1 << bit, width)
}
