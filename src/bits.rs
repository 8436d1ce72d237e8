//! Low-level mask utilities for 32-bit register values.
//!
//! Bits are numbered from the least significant end: bit 0 has value `1`.

/// Index of the lowest set bit of `mask`, or `None` when `mask` is zero.
pub fn lowest_set_bit(mask: u32) -> Option<u32> {
    if mask == 0 {
        return None;
    }

    Some(mask.trailing_zeros())
}

/// Keeps the bits of `raw` selected by `mask` and shifts them down by `shift`.
pub fn extract_bits(raw: u32, mask: u32, shift: u32) -> u32 {
    (raw & mask) >> shift
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_lowest_set_bit_zero() {
        assert_eq!(lowest_set_bit(0), None);
    }

    #[test]
    fn test_lowest_set_bit_bounds() {
        assert_eq!(lowest_set_bit(0x0000_0001), Some(0));
        assert_eq!(lowest_set_bit(0x8000_0000), Some(31));
        assert_eq!(lowest_set_bit(0b0110), Some(1));
        assert_eq!(lowest_set_bit(0xffff_ffff), Some(0));
    }

    #[test]
    fn test_extract_bits() {
        assert_eq!(extract_bits(0b101, 0b110, 1), 0b10);
        assert_eq!(extract_bits(0xdead_beef, 0xffff_0000, 16), 0xdead);
    }

    proptest! {
        #[test]
        fn prop_shift_lands_on_set_bit(mask in 1u32..) {
            let shift = lowest_set_bit(mask).unwrap();
            prop_assert_eq!((mask >> shift) & 1, 1);
            prop_assert_eq!(mask & ((1u64 << shift) as u32).wrapping_sub(1), 0);
        }

        #[test]
        fn prop_extracted_value_stays_within_mask(raw in any::<u32>(), mask in 1u32..) {
            let shift = lowest_set_bit(mask).unwrap();
            let value = extract_bits(raw, mask, shift);
            prop_assert!(value <= mask >> shift);
            prop_assert_eq!(value & !(mask >> shift), 0);
        }
    }
}
