//! Constants for the UTF-8 bit layout.

/// A `(mask, value)` pair describing a byte prefix.
///
/// A byte matches the pattern when `byte & mask == value`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BitPattern {
    /// Bits that take part in the comparison.
    pub mask: u8,
    /// Expected value of the masked bits.
    pub value: u8,
}

impl BitPattern {
    /// Create a new pattern.
    #[inline]
    pub const fn new(mask: u8, value: u8) -> Self {
        Self { mask, value }
    }

    /// Returns true if `byte` carries this prefix.
    #[inline]
    pub const fn matches(self, byte: u8) -> bool {
        byte & self.mask == self.value
    }
}

/// Maximum encoded length of a single character in bytes.
pub const MAX_CHAR_LEN: usize = 4;

// Lead byte patterns
/// Single-byte (ASCII) character, `0xxxxxxx`.
pub const LEAD_1: BitPattern = BitPattern::new(0b1000_0000, 0b0000_0000);
/// Lead of a 2-byte character, `110xxxxx`.
pub const LEAD_2: BitPattern = BitPattern::new(0b1110_0000, 0b1100_0000);
/// Lead of a 3-byte character, `1110xxxx`.
pub const LEAD_3: BitPattern = BitPattern::new(0b1111_0000, 0b1110_0000);
/// Lead of a 4-byte character, `11110xxx`.
pub const LEAD_4: BitPattern = BitPattern::new(0b1111_1000, 0b1111_0000);

/// Continuation byte, `10xxxxxx`.
pub const CONTINUATION: BitPattern = BitPattern::new(0b1100_0000, 0b1000_0000);

/// Lead byte patterns in the order they are tested.
pub const LEAD_PATTERNS: [BitPattern; 4] = [LEAD_1, LEAD_4, LEAD_3, LEAD_2];
