//! Generator macros that define standalone branchless scan functions.
//!
//! Each macro in this module expands to a single `const fn` with a caller-chosen
//! name, visibility, attributes, input type, output type, and convention flag. All
//! configuration is resolved during macro expansion: an unsupported flag value does
//! not match any rule and fails to compile, and a non-integer input type fails to
//! compile inside the expansion. The input type must be an unsigned integer of at
//! most 64 bits.
//!
//! The derived generators mint their own fixed-convention helper as a function item
//! nested inside the generated function body, so expansions never collide with each
//! other or with surrounding code, no matter how often they are repeated in one
//! scope.

/// Defines a branchless `fls` (find last set) function.
///
/// The generated `const fn` takes the given input type and returns the position of
/// the most significant set bit as the given output type.
///
/// `start_from` selects the position reported for the 2^0 bit and must be `0` or `1`.
/// With `start_from = 1`, positions are 1-based and a zero operand yields 0. With
/// `start_from = 0`, positions are 0-based and a zero operand still yields 0, which
/// makes it indistinguishable from an operand whose only set bit is the lowest.
///
/// # Example
/// ```
/// bitscan::gen_fls!(fn fls_u32(u32) -> u32, start_from = 1);
///
/// assert_eq!(fls_u32(0b0010_0000), 6);
/// assert_eq!(fls_u32(1), 1);
/// assert_eq!(fls_u32(0), 0);
/// ```
#[macro_export]
macro_rules! gen_fls {
    ($(#[$meta:meta])* $v:vis fn $name:ident($in:ty) -> $out:ty, start_from = 1 $(,)?) => {
        $(#[$meta])*
        $v const fn $name(x: $in) -> $out {
            let isolated = $crate::__bitscan_preserve_msb!($in, x);
            $crate::__bitscan_locate_bit!($in, isolated) as $out
        }
    };
    ($(#[$meta:meta])* $v:vis fn $name:ident($in:ty) -> $out:ty, start_from = 0 $(,)?) => {
        $(#[$meta])*
        $v const fn $name(x: $in) -> $out {
            let isolated = $crate::__bitscan_preserve_msb!($in, x);
            let digit = $crate::__bitscan_locate_bit!($in, isolated);
            (digit - ((digit != 0) as u32)) as $out
        }
    };
}

/// Defines a branchless `ffs` (find first set) function.
///
/// The generated `const fn` takes the given input type and returns the position of
/// the least significant set bit as the given output type.
///
/// `start_from` selects the position reported for the 2^0 bit and must be `0` or `1`,
/// as in [`gen_fls!`]. A zero operand yields 0 under both conventions.
///
/// # Example
/// ```
/// bitscan::gen_ffs!(fn ffs_u16(u16) -> u16, start_from = 0);
///
/// assert_eq!(ffs_u16(0b1100), 2);
/// assert_eq!(ffs_u16(0), 0);
/// ```
#[macro_export]
macro_rules! gen_ffs {
    ($(#[$meta:meta])* $v:vis fn $name:ident($in:ty) -> $out:ty, start_from = 1 $(,)?) => {
        $(#[$meta])*
        $v const fn $name(x: $in) -> $out {
            let isolated = $crate::__bitscan_preserve_lsb!($in, x);
            $crate::__bitscan_locate_bit!($in, isolated) as $out
        }
    };
    ($(#[$meta:meta])* $v:vis fn $name:ident($in:ty) -> $out:ty, start_from = 0 $(,)?) => {
        $(#[$meta])*
        $v const fn $name(x: $in) -> $out {
            let isolated = $crate::__bitscan_preserve_lsb!($in, x);
            let digit = $crate::__bitscan_locate_bit!($in, isolated);
            (digit - ((digit != 0) as u32)) as $out
        }
    };
}

/// Defines a branchless `flz` (find last zero) function: the position of the most
/// significant unset bit, or 0 if every bit is set.
///
/// The generated function applies an `fls` with the same `start_from` convention to
/// the complement of the operand, so an all-bits-set operand yields 0 and a zero
/// operand yields the position of the highest bit.
///
/// # Example
/// ```
/// bitscan::gen_flz!(fn flz_u8(u8) -> u32, start_from = 1);
///
/// assert_eq!(flz_u8(0b1011_1111), 7);
/// assert_eq!(flz_u8(u8::MAX), 0);
/// ```
#[macro_export]
macro_rules! gen_flz {
    ($(#[$meta:meta])* $v:vis fn $name:ident($in:ty) -> $out:ty, start_from = 1 $(,)?) => {
        $(#[$meta])*
        $v const fn $name(x: $in) -> $out {
            $crate::gen_fls!(fn last_set($in) -> $out, start_from = 1);
            last_set(!x)
        }
    };
    ($(#[$meta:meta])* $v:vis fn $name:ident($in:ty) -> $out:ty, start_from = 0 $(,)?) => {
        $(#[$meta])*
        $v const fn $name(x: $in) -> $out {
            $crate::gen_fls!(fn last_set($in) -> $out, start_from = 0);
            last_set(!x)
        }
    };
}

/// Defines a branchless `ffz` (find first zero) function: the position of the least
/// significant unset bit, or 0 if every bit is set.
///
/// The generated function applies an `ffs` with the same `start_from` convention to
/// the complement of the operand.
///
/// # Example
/// ```
/// bitscan::gen_ffz!(fn ffz_u8(u8) -> u32, start_from = 1);
///
/// assert_eq!(ffz_u8(0b0000_0111), 4);
/// assert_eq!(ffz_u8(u8::MAX), 0);
/// ```
#[macro_export]
macro_rules! gen_ffz {
    ($(#[$meta:meta])* $v:vis fn $name:ident($in:ty) -> $out:ty, start_from = 1 $(,)?) => {
        $(#[$meta])*
        $v const fn $name(x: $in) -> $out {
            $crate::gen_ffs!(fn first_set($in) -> $out, start_from = 1);
            first_set(!x)
        }
    };
    ($(#[$meta:meta])* $v:vis fn $name:ident($in:ty) -> $out:ty, start_from = 0 $(,)?) => {
        $(#[$meta])*
        $v const fn $name(x: $in) -> $out {
            $crate::gen_ffs!(fn first_set($in) -> $out, start_from = 0);
            first_set(!x)
        }
    };
}

/// Defines a branchless `clz` (count leading zeros) function.
///
/// `on_zero` selects the result for a zero operand and must be `width` or `zero`;
/// nonzero operands always yield the number of unset bits above the most significant
/// set bit. With `on_zero = width` the generated function agrees with
/// [`u32::leading_zeros`] on every input.
///
/// # Example
/// ```
/// bitscan::gen_clz!(fn clz_u64(u64) -> u32, on_zero = width);
///
/// assert_eq!(clz_u64(1), 63);
/// assert_eq!(clz_u64(0), 64);
/// ```
///
/// Flag values other than `width` and `zero` are rejected when the macro expands:
/// ```compile_fail
/// bitscan::gen_clz!(fn bad(u32) -> u32, on_zero = maybe);
/// ```
#[macro_export]
macro_rules! gen_clz {
    ($(#[$meta:meta])* $v:vis fn $name:ident($in:ty) -> $out:ty, on_zero = width $(,)?) => {
        $(#[$meta])*
        $v const fn $name(x: $in) -> $out {
            $crate::gen_fls!(fn last_set($in) -> u32, start_from = 1);
            (<$in>::BITS - last_set(x)) as $out
        }
    };
    ($(#[$meta:meta])* $v:vis fn $name:ident($in:ty) -> $out:ty, on_zero = zero $(,)?) => {
        $(#[$meta])*
        $v const fn $name(x: $in) -> $out {
            $crate::gen_fls!(fn last_set($in) -> u32, start_from = 1);
            let digit = last_set(x);
            ((<$in>::BITS * ((digit != 0) as u32)) - digit) as $out
        }
    };
}

/// Defines a branchless `ctz` (count trailing zeros) function.
///
/// `on_zero` selects the result for a zero operand and must be `width` or `zero`;
/// nonzero operands always yield the number of unset bits below the least
/// significant set bit. With `on_zero = width` the generated function agrees with
/// [`u32::trailing_zeros`] on every input.
///
/// # Example
/// ```
/// bitscan::gen_ctz!(fn ctz_u32(u32) -> u32, on_zero = zero);
///
/// assert_eq!(ctz_u32(40), 3);
/// assert_eq!(ctz_u32(0), 0);
/// ```
#[macro_export]
macro_rules! gen_ctz {
    ($(#[$meta:meta])* $v:vis fn $name:ident($in:ty) -> $out:ty, on_zero = width $(,)?) => {
        $(#[$meta])*
        $v const fn $name(x: $in) -> $out {
            $crate::gen_ffs!(fn first_set($in) -> u32, start_from = 1);
            let digit = first_set(x);
            (digit + (<$in>::BITS * ((digit == 0) as u32)) - ((digit != 0) as u32)) as $out
        }
    };
    ($(#[$meta:meta])* $v:vis fn $name:ident($in:ty) -> $out:ty, on_zero = zero $(,)?) => {
        $(#[$meta])*
        $v const fn $name(x: $in) -> $out {
            $crate::gen_ffs!(fn first_set($in) -> u32, start_from = 1);
            let digit = first_set(x);
            (digit - ((digit != 0) as u32)) as $out
        }
    };
}

#[cfg(test)]
mod tests;
