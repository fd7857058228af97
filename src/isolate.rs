//! Branchless isolation of the most and least significant set bit of an integer.
//! Both primitives lower to a fixed ladder of shift and bitwise instructions, so their
//! execution time never depends on the operand value and no hardware bit-scan
//! intrinsics are involved.

// The ladders are spelled out as macros so that the function generators in `generate`
// can expand the exact same instruction sequence into foreign crates. The macros are
// exported for that reason only and are not part of the public API.
#[doc(hidden)]
#[macro_export]
macro_rules! __bitscan_preserve_msb {
    ($t:ty, $x:expr) => {{
        let mut x: $t = $x;
        let is_nonzero = (x != 0) as $t;
        x >>= 1;
        x |= x >> 1;
        x |= x >> 2;
        x |= x >> 4;
        // the upper rungs collapse to shifts by zero for operand types narrower
        // than the rung, and never shift by the full operand width
        x |= x >> (((<$t>::BITS > 8) as u32) << 3);
        x |= x >> (((<$t>::BITS > 16) as u32) << 4);
        x |= x >> (((<$t>::BITS > 32) as u32) << 5);
        x + is_nonzero
    }};
}

#[doc(hidden)]
#[macro_export]
macro_rules! __bitscan_preserve_lsb {
    ($t:ty, $x:expr) => {{
        let mut x: $t = $x;
        x |= x << 1;
        x |= x << 2;
        x |= x << 4;
        x |= x << (((<$t>::BITS > 8) as u32) << 3);
        x |= x << (((<$t>::BITS > 16) as u32) << 4);
        x |= x << (((<$t>::BITS > 32) as u32) << 5);
        let upper_filled = x;
        // cannot overflow: whenever 1 is added, the complement is not all ones
        x = !x + (upper_filled != 0) as $t;
        x & upper_filled
    }};
}

/// Isolation of the most significant set bit.
pub trait PreserveMsb {
    /// Returns the operand with only its most significant set bit remaining, or 0 if
    /// the operand is 0. Equivalently, rounds a nonzero operand down to the nearest
    /// power of two.
    ///
    /// # Example
    /// ```
    /// use bitscan::PreserveMsb;
    ///
    /// assert_eq!(0b0110_1001u8.preserve_msb(), 0b0100_0000);
    /// assert_eq!(1u64.preserve_msb(), 1);
    /// assert_eq!(0u32.preserve_msb(), 0);
    /// ```
    #[must_use]
    fn preserve_msb(self) -> Self;
}

/// Isolation of the least significant set bit.
pub trait PreserveLsb {
    /// Returns the operand with only its least significant set bit remaining, or 0 if
    /// the operand is 0.
    ///
    /// # Example
    /// ```
    /// use bitscan::PreserveLsb;
    ///
    /// assert_eq!(0b0110_1000u8.preserve_lsb(), 0b0000_1000);
    /// assert_eq!(0u32.preserve_lsb(), 0);
    /// ```
    #[must_use]
    fn preserve_lsb(self) -> Self;
}

/// Rounds `value` down to the largest power of two that does not exceed it.
/// Returns 0 for a zero input.
///
/// # Example
/// ```
/// use bitscan::rounddown_pow_of_two;
///
/// assert_eq!(rounddown_pow_of_two(100u32), 64);
/// assert_eq!(rounddown_pow_of_two(64u32), 64);
/// ```
#[must_use]
#[inline(always)]
pub fn rounddown_pow_of_two<T: PreserveMsb>(value: T) -> T {
    value.preserve_msb()
}

// Implement both traits for the unsigned integer types.
macro_rules! impl_isolate {
    ($($t:ty),*) => {
        $(
            impl PreserveMsb for $t {
                #[inline(always)]
                fn preserve_msb(self) -> Self {
                    $crate::__bitscan_preserve_msb!($t, self)
                }
            }

            impl PreserveLsb for $t {
                #[inline(always)]
                fn preserve_lsb(self) -> Self {
                    $crate::__bitscan_preserve_lsb!($t, self)
                }
            }
        )*
    };
}

impl_isolate!(u8, u16, u32, u64, usize);
