//! Ready-made branchless scan operations for the unsigned integer types.
//!
//! The six operations share one pair of conventions: bit positions are reported as
//! 1-based digits with 0 meaning "no such bit", and the zero-counting operations
//! report the full bit width for an all-zero operand. Functions with the other
//! conventions can be defined with the generator macros at the crate root.

use crate::{LocateBit, PreserveLsb, PreserveMsb};

/// Branchless bit-scan operations over an unsigned integer type.
///
/// Bit positions are 1-based: the least significant bit is digit 1 and a result of 0
/// means the searched bit does not occur in the operand. [`clz`](BitScan::clz) and
/// [`ctz`](BitScan::ctz) return the full bit width for a zero operand and therefore
/// agree with [`u32::leading_zeros`] and [`u32::trailing_zeros`] on every input.
///
/// For 0-based positions, or for a `clz`/`ctz` that reports 0 on a zero operand, or
/// for standalone `const fn`s, define functions with [`gen_fls!`](crate::gen_fls) and
/// the other generator macros instead.
pub trait BitScan: PreserveMsb + PreserveLsb + LocateBit {
    /// Finds the last set bit: returns the 1-based position of the most significant
    /// set bit of the operand, or 0 if the operand is 0.
    ///
    /// # Example
    /// ```
    /// use bitscan::BitScan;
    ///
    /// assert_eq!(0b0010_1000u8.fls(), 6);
    /// assert_eq!(1u64.fls(), 1);
    /// assert_eq!(0u32.fls(), 0);
    /// ```
    #[must_use]
    fn fls(self) -> u32;

    /// Finds the first set bit: returns the 1-based position of the least significant
    /// set bit of the operand, or 0 if the operand is 0.
    ///
    /// # Example
    /// ```
    /// use bitscan::BitScan;
    ///
    /// assert_eq!(0b0010_1000u8.ffs(), 4);
    /// assert_eq!(0u32.ffs(), 0);
    /// ```
    #[must_use]
    fn ffs(self) -> u32;

    /// Finds the last zero bit: returns the 1-based position of the most significant
    /// unset bit of the operand, or 0 if every bit is set.
    ///
    /// Identical to `fls` applied to the complement of the operand.
    #[must_use]
    fn flz(self) -> u32;

    /// Finds the first zero bit: returns the 1-based position of the least
    /// significant unset bit of the operand, or 0 if every bit is set.
    ///
    /// Identical to `ffs` applied to the complement of the operand.
    #[must_use]
    fn ffz(self) -> u32;

    /// Counts the zero bits above the most significant set bit. A zero operand yields
    /// the full bit width, so the result equals [`u32::leading_zeros`] for every
    /// input.
    ///
    /// # Example
    /// ```
    /// use bitscan::BitScan;
    ///
    /// assert_eq!(40u32.clz(), 26);
    /// assert_eq!(0u8.clz(), 8);
    /// ```
    #[must_use]
    fn clz(self) -> u32;

    /// Counts the zero bits below the least significant set bit. A zero operand
    /// yields the full bit width, so the result equals [`u32::trailing_zeros`] for
    /// every input.
    #[must_use]
    fn ctz(self) -> u32;
}

macro_rules! impl_bit_scan {
    ($($t:ty),*) => {
        $(
            impl BitScan for $t {
                #[inline(always)]
                fn fls(self) -> u32 {
                    self.preserve_msb().locate_bit()
                }

                #[inline(always)]
                fn ffs(self) -> u32 {
                    self.preserve_lsb().locate_bit()
                }

                #[inline(always)]
                fn flz(self) -> u32 {
                    (!self).fls()
                }

                #[inline(always)]
                fn ffz(self) -> u32 {
                    (!self).ffs()
                }

                #[inline(always)]
                fn clz(self) -> u32 {
                    <$t>::BITS - self.fls()
                }

                #[inline(always)]
                fn ctz(self) -> u32 {
                    let digit = self.ffs();
                    digit + <$t>::BITS * ((digit == 0) as u32) - ((digit != 0) as u32)
                }
            }
        )*
    };
}

impl_bit_scan!(u8, u16, u32, u64, usize);
