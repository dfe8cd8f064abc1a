#![allow(clippy::inconsistent_digit_grouping)]

/// Width class bits, 0x07
pub(crate) const MASK_SIZE: u8 = 0b0_0_0_111;
/// Unsigned integer bit, 0x08
pub(crate) const UNSIGNED: u8 = 0b0_0_1_000;
/// Floating point bit, 0x10
pub(crate) const FLOAT: u8 = 0b0_1_0_000;
/// Ordered bit, 0x20
pub(crate) const ORDERED: u8 = 0b1_0_0_000;

pub(crate) const W8: u8 = 0b001;
pub(crate) const W16: u8 = 0b010;
pub(crate) const W32: u8 = 0b011;
pub(crate) const W64: u8 = 0b100;
pub(crate) const W128: u8 = 0b101;

/// Width class to bit count. Zero for the unused classes.
pub(crate) const BITMAP: [u32; 8] = [0, 8, 16, 32, 64, 128, 0, 0];

pub(crate) const INT8: u8 = ORDERED | W8;
pub(crate) const INT16: u8 = ORDERED | W16;
pub(crate) const INT32: u8 = ORDERED | W32;
pub(crate) const INT64: u8 = ORDERED | W64;
pub(crate) const INT128: u8 = ORDERED | W128;

pub(crate) const UINT8: u8 = ORDERED | UNSIGNED | W8;
pub(crate) const UINT16: u8 = ORDERED | UNSIGNED | W16;
pub(crate) const UINT32: u8 = ORDERED | UNSIGNED | W32;
pub(crate) const UINT64: u8 = ORDERED | UNSIGNED | W64;
pub(crate) const UINT128: u8 = ORDERED | UNSIGNED | W128;

pub(crate) const FLOAT32: u8 = ORDERED | FLOAT | W32;
pub(crate) const FLOAT64: u8 = ORDERED | FLOAT | W64;

pub(crate) const COMPLEX64: u8 = FLOAT | W64;
pub(crate) const COMPLEX128: u8 = FLOAT | W128;

/// Width class for a type of `bytes` bytes, or 0 if there is none.
pub(crate) const fn width_class(bytes: usize) -> u8 {
    match bytes {
        1 => W8,
        2 => W16,
        4 => W32,
        8 => W64,
        16 => W128,
        _ => 0,
    }
}

/// Width class of `isize` and `usize` on the target.
pub(crate) const WORD: u8 = width_class(std::mem::size_of::<usize>());
