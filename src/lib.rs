#![no_std]
#![forbid(unsafe_code)]
#![warn(missing_docs)]

//! This crate provides branchless implementations of the classic bit-scan operations
//! over fixed-width unsigned integers: find first/last set bit, find first/last zero
//! bit, and count leading/trailing zeros. Every operation compiles to a fixed
//! sequence of shift, bitwise, and add instructions with no data-dependent branches,
//! no lookup tables, and no hardware bit-scan intrinsics, so execution time does not
//! depend on operand values and the code runs identically on any target.
//!
//! # Operations
//!  - [`BitScan`] provides `fls`, `ffs`, `flz`, `ffz`, `clz` and `ctz` for `u8`
//!    through `u64` and `usize`. Bit positions are 1-based digits with 0 meaning
//!    "no such bit"; `clz` and `ctz` report the full bit width for a zero operand
//!    and therefore agree with [`u32::leading_zeros`] and [`u32::trailing_zeros`]
//!    on every input.
//!  - [`PreserveMsb`] and [`PreserveLsb`] isolate the most or least significant set
//!    bit of an operand; [`rounddown_pow_of_two`] is the arithmetic reading of the
//!    former.
//!  - [`LocateBit`] decodes the position of an already isolated bit.
//!
//! # Generated functions
//! Where other conventions are needed, the [`gen_fls!`], [`gen_ffs!`], [`gen_flz!`],
//! [`gen_ffz!`], [`gen_clz!`] and [`gen_ctz!`] macros define standalone `const fn`s
//! with a caller-chosen name, input type, output type, and convention: 0-based or
//! 1-based bit digits for the find operations, and a width or zero result on zero
//! operands for the counting operations. All configuration is resolved while the
//! macro expands; an invalid flag value or a non-integer input type does not
//! compile. The generated functions are `const` and can initialize constants and
//! statics.
//!
//! # Safety
//! The crate is `no_std`, has no dependencies, and forbids unsafe code.

#[cfg(test)]
extern crate std;

pub use isolate::{rounddown_pow_of_two, PreserveLsb, PreserveMsb};
pub use locate::LocateBit;
pub use scan::BitScan;

pub mod isolate;
pub mod locate;
pub mod scan;

mod generate;
