#[inline(always)]
fn get_mask(bit_count: u8, offset: u8) -> u32 {
    ((1u32 << bit_count) - 1) << offset
}

#[inline(always)]
pub fn set_bits(source: u32, value: u16, index: u8, bit_count: u8) -> u32 {
    let mask = get_mask(bit_count, index);
    (source & !mask) | (((value as u32) << index) & mask)
}

#[inline(always)]
pub fn get_bits(source: u32, index: u8, num_bits: u8) -> u16 {
    ((source >> index) & get_mask(num_bits, 0)) as u16
}

#[inline(always)]
pub fn get_flag(source: u32, index: u8) -> bool {
    get_bits(source, index, 1) != 0
}

#[inline(always)]
pub fn set_flag(source: u32, value: bool, index: u8) -> u32 {
    set_bits(source, value as u16, index, 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bits_do_not_bleed_into_neighbours() {
        let packed = set_bits(0, 0b1111, 4, 3);
        assert_eq!(packed, 0b111 << 4);
        assert_eq!(get_bits(packed, 4, 3), 0b111);
        assert_eq!(get_bits(packed, 0, 4), 0);
    }

    #[test]
    fn test_flags() {
        let packed = set_flag(set_flag(0, true, 0), true, 2);
        assert!(get_flag(packed, 0));
        assert!(!get_flag(packed, 1));
        assert!(get_flag(packed, 2));
        assert!(!get_flag(set_flag(packed, false, 2), 2));
    }
}
