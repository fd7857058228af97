//! Branchless decoding of a bit position. Given a word with at most one bit set, the
//! decoder reports which bit it is without loops, branches, or bit-scan intrinsics.
//!
//! The position is determined through a binary search over seven masks, each mask
//! answering one bit of the result in parallel:
//!
//! ```text
//! 0b01010101_01010101_01010101_01010101_01010101_01010101_01010101_01010101
//! 0b01100110_01100110_01100110_01100110_01100110_01100110_01100110_01100110
//! 0b01111000_01111000_01111000_01111000_01111000_01111000_01111000_01111000
//! 0b01111111_10000000_01111111_10000000_01111111_10000000_01111111_10000000
//! 0b01111111_11111111_10000000_00000000_01111111_11111111_10000000_00000000
//! 0b01111111_11111111_11111111_11111111_10000000_00000000_00000000_00000000
//! 0b10000000_00000000_00000000_00000000_00000000_00000000_00000000_00000000
//! ```
//!
//! The masks are stated for 64-bit operands; narrower operands use their truncation.
//! Supporting a wider operand type would require lengthening the masks and adding an
//! eighth one.

#[doc(hidden)]
#[macro_export]
macro_rules! __bitscan_locate_bit {
    ($t:ty, $x:expr) => {{
        let x: $t = $x;
        debug_assert!(
            (x & x.wrapping_sub(1)) == 0,
            "locate_bit requires an operand with at most one bit set"
        );
        // narrow operand types truncate the upper masks to zero, the full-width
        // type keeps them unchanged, and the first rung shifts by zero; all three
        // are spelled out to keep the ladder uniform
        #[allow(clippy::identity_op, clippy::erasing_op, clippy::unnecessary_cast)]
        let digit = ((((x & (0x5555_5555_5555_5555u64 as $t)) != 0) as u32) << 0)
            + ((((x & (0x6666_6666_6666_6666u64 as $t)) != 0) as u32) << 1)
            + ((((x & (0x7878_7878_7878_7878u64 as $t)) != 0) as u32) << 2)
            + ((((x & (0x7f80_7f80_7f80_7f80u64 as $t)) != 0) as u32) << 3)
            + ((((x & (0x7fff_8000_7fff_8000u64 as $t)) != 0) as u32) << 4)
            + ((((x & (0x7fff_ffff_8000_0000u64 as $t)) != 0) as u32) << 5)
            + ((((x & (0x8000_0000_0000_0000u64 as $t)) != 0) as u32) << 6);
        digit
    }};
}

/// Decoding of the position of an isolated bit.
pub trait LocateBit {
    /// Returns the 1-based position of the single set bit of the operand, counting
    /// from the least significant bit, or 0 if the operand is 0.
    ///
    /// The operand must have at most one bit set; for other operands the decoder
    /// reports an unspecified position.
    ///
    /// # Panics
    /// In debug builds, if more than one bit of the operand is set.
    ///
    /// # Example
    /// ```
    /// use bitscan::LocateBit;
    ///
    /// assert_eq!(0b0100u8.locate_bit(), 3);
    /// assert_eq!((1u64 << 63).locate_bit(), 64);
    /// assert_eq!(0u8.locate_bit(), 0);
    /// ```
    #[must_use]
    fn locate_bit(self) -> u32;
}

macro_rules! impl_locate {
    ($($t:ty),*) => {
        $(
            impl LocateBit for $t {
                #[inline(always)]
                fn locate_bit(self) -> u32 {
                    $crate::__bitscan_locate_bit!($t, self)
                }
            }
        )*
    };
}

impl_locate!(u8, u16, u32, u64, usize);
