use crate::BitScan;

crate::gen_fls!(fn fls_one_based(u32) -> u32, start_from = 1);
crate::gen_fls!(fn fls_zero_based(u32) -> u32, start_from = 0);
crate::gen_ffs!(fn ffs_one_based(u32) -> u32, start_from = 1);
crate::gen_ffs!(fn ffs_zero_based(u32) -> u32, start_from = 0);
crate::gen_flz!(fn flz_one_based(u8) -> u32, start_from = 1);
crate::gen_flz!(fn flz_zero_based(u8) -> u32, start_from = 0);
crate::gen_ffz!(fn ffz_one_based(u8) -> u32, start_from = 1);
crate::gen_ffz!(fn ffz_zero_based(u8) -> u32, start_from = 0);
crate::gen_clz!(fn clz_wide(u64) -> u32, on_zero = width);
crate::gen_clz!(fn clz_zero(u64) -> u32, on_zero = zero);
crate::gen_ctz!(fn ctz_wide(u16) -> u32, on_zero = width);
crate::gen_ctz!(fn ctz_zero(u16) -> u32, on_zero = zero);

// attributes, doc comments, visibility, and a trailing comma pass through
crate::gen_ffs!(
    /// First set bit of a byte, as a byte.
    #[inline]
    pub(crate) fn byte_ffs(u8) -> u8,
    start_from = 1,
);

#[test]
fn test_fls_conventions() {
    assert_eq!(fls_one_based(1), 1);
    assert_eq!(fls_one_based(0b100), 3);
    assert_eq!(fls_one_based(u32::MAX), 32);
    assert_eq!(fls_one_based(0), 0);

    assert_eq!(fls_zero_based(1), 0);
    assert_eq!(fls_zero_based(0x80), 7);
    assert_eq!(fls_zero_based(u32::MAX), 31);
    assert_eq!(fls_zero_based(0), 0);
}

#[test]
fn test_ffs_conventions() {
    assert_eq!(ffs_one_based(0b1100), 3);
    assert_eq!(ffs_one_based(1), 1);
    assert_eq!(ffs_one_based(1 << 31), 32);
    assert_eq!(ffs_one_based(0), 0);

    assert_eq!(ffs_zero_based(0b1100), 2);
    assert_eq!(ffs_zero_based(1), 0);
    assert_eq!(ffs_zero_based(1 << 31), 31);
    assert_eq!(ffs_zero_based(0), 0);
}

#[test]
fn test_zero_scans_match_complement_scans() {
    for x in 0..=u8::MAX {
        assert_eq!(flz_one_based(x), fls_one_based(u32::from(!x)), "{:#04x}", x);
        assert_eq!(ffz_one_based(x), x.ffz(), "{:#04x}", x);
        let expected_flz = fls_zero_based(u32::from(!x));
        assert_eq!(flz_zero_based(x), expected_flz, "{:#04x}", x);
        assert_eq!(ffz_zero_based(x), ffs_zero_based(u32::from(!x)), "{:#04x}", x);
    }
}

#[test]
fn test_clz_flag_flavors() {
    assert_eq!(clz_wide(0), 64);
    assert_eq!(clz_zero(0), 0);
    for x in [1u64, 2, 3, 40, 1 << 20, 1 << 63, u64::MAX] {
        assert_eq!(clz_wide(x), x.leading_zeros());
        assert_eq!(clz_zero(x), x.leading_zeros());
    }
}

#[test]
fn test_ctz_flag_flavors_exhaustive() {
    assert_eq!(ctz_wide(0), 16);
    assert_eq!(ctz_zero(0), 0);
    for x in 1..=u16::MAX {
        assert_eq!(ctz_wide(x), x.trailing_zeros(), "{:#06x}", x);
        assert_eq!(ctz_zero(x), x.trailing_zeros(), "{:#06x}", x);
    }
}

#[test]
fn test_generated_functions_match_trait_methods() {
    for x in [0u64, 1, 42, 0xdead_beef, 1 << 63, u64::MAX] {
        assert_eq!(clz_wide(x), x.clz());
    }
    for x in [0u16, 1, 40, 0x8000, u16::MAX] {
        assert_eq!(ctz_wide(x), x.ctz());
    }
    for x in 0..=u8::MAX {
        assert_eq!(flz_one_based(x), x.flz());
        assert_eq!(u32::from(byte_ffs(x)), x.ffs());
    }
}

#[test]
fn test_narrow_output_type() {
    assert_eq!(byte_ffs(0b1000), 4u8);
    crate::gen_clz!(fn clz_as_byte(u64) -> u8, on_zero = width);
    assert_eq!(clz_as_byte(0), 64);
    assert_eq!(clz_as_byte(1), 63);
    assert_eq!(clz_as_byte(u64::MAX), 0);
}

#[test]
fn test_const_evaluation() {
    crate::gen_fls!(fn page_digit(u64) -> u32, start_from = 1);
    const PAGE_BITS: u32 = page_digit(4096);
    assert_eq!(PAGE_BITS, 13);
}

#[test]
fn test_usize_instantiation() {
    crate::gen_ctz!(fn word_ctz(usize) -> u32, on_zero = width);
    assert_eq!(word_ctz(0), usize::BITS);
    assert_eq!(word_ctz(8), 3);
    assert_eq!(word_ctz(usize::MAX), 0);
}

#[test]
fn test_repeated_expansions_do_not_collide() {
    crate::gen_flz!(fn a(u32) -> u32, start_from = 1);
    crate::gen_flz!(fn b(u32) -> u32, start_from = 1);
    assert_eq!(a(u32::MAX - 1), b(u32::MAX - 1));

    // a generated name equal to the internal helper name must not change behavior
    crate::gen_flz!(fn last_set(u32) -> u32, start_from = 1);
    assert_eq!(last_set(u32::MAX - 1), 1);
}
