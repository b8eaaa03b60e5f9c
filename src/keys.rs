use std::cmp::max;

use num_traits::PrimInt;

/// Bit-level access to a primitive integer used as a bitrie key.
///
/// Implemented for every `PrimInt`. Bit positions count from the least significant bit, so the
/// most significant bit of a `w`-bit key is at position `w - 1`.
pub trait BitKey: PrimInt {
    /// Width of the type in bits.
    const BITS: u32;

    /// Position of the highest set bit plus one. Zero has bit length 0.
    #[inline]
    fn bit_length(self) -> u32 {
        Self::BITS - self.leading_zeros()
    }

    /// The bit at `pos`, as a child slot index (0 or 1).
    #[inline]
    fn bit_at(self, pos: u32) -> usize {
        if ((self >> pos as usize) & Self::one()).is_zero() {
            0
        } else {
            1
        }
    }

    /// Appends `bit` below the current least significant bit.
    #[inline]
    fn push_bit(self, bit: usize) -> Self {
        let shifted = self << 1;
        if bit == 0 {
            shifted
        } else {
            shifted | Self::one()
        }
    }

    #[inline]
    fn is_negative(self) -> bool {
        self < Self::zero()
    }

    /// True if the value is non-negative and representable in `bit_width` bits.
    #[inline]
    fn fits(self, bit_width: u32) -> bool {
        !self.is_negative() && self.bit_length() <= bit_width
    }
}

impl<T: PrimInt> BitKey for T {
    const BITS: u32 = (std::mem::size_of::<T>() * 8) as u32;
}

/// Number of bits needed to place `max_value` in a bitrie: its bit length, but never less than 1
/// so that an all-zero input still yields one level below the root.
#[inline]
pub fn required_bit_width<K: BitKey>(max_value: K) -> u32 {
    max(1, max_value.bit_length())
}

#[cfg(test)]
mod tests {
    use super::{required_bit_width, BitKey};

    #[test]
    fn test_bit_length() {
        assert_eq!(0u32.bit_length(), 0);
        assert_eq!(1u32.bit_length(), 1);
        assert_eq!(7u8.bit_length(), 3);
        assert_eq!(128u8.bit_length(), 8);
        assert_eq!(u64::MAX.bit_length(), 64);
        assert_eq!(100i32.bit_length(), 7);
    }

    #[test]
    fn test_required_bit_width() {
        assert_eq!(required_bit_width(0u16), 1);
        assert_eq!(required_bit_width(1u16), 1);
        assert_eq!(required_bit_width(2u16), 2);
        assert_eq!(required_bit_width(100u64), 7);
        assert_eq!(required_bit_width(u128::MAX), 128);
    }

    #[test]
    fn test_bit_at() {
        let v = 0b1010_0110u8;
        let bits: Vec<usize> = (0..8).rev().map(|pos| v.bit_at(pos)).collect();
        assert_eq!(bits, vec![1, 0, 1, 0, 0, 1, 1, 0]);
        assert_eq!(u64::MAX.bit_at(63), 1);
    }

    #[test]
    fn test_push_bit_rebuilds_value() {
        let v = 0xdead_beefu32;
        let mut prefix = 0u32;
        for pos in (0..32).rev() {
            prefix = prefix.push_bit(v.bit_at(pos));
        }
        assert_eq!(prefix, v);
    }

    #[test]
    fn test_fits() {
        assert!(15u8.fits(4));
        assert!(!16u8.fits(4));
        assert!(u8::MAX.fits(8));
        assert!(0i64.fits(1));
        assert!(!(-1i64).fits(64));
    }
}
