//! The spatial signal bit: XOR of a byte's two least significant bits.

/// Reads and writes the signal bit of a carrier byte.
pub struct BitExtractor;

impl BitExtractor {
    #[inline(always)]
    pub fn signal_bit(byte: u8) -> bool {
        ((byte ^ (byte >> 1)) & 1) == 1
    }

    /// Returns `byte` with its signal bit set to `bit`.
    ///
    /// Unchanged if the signal already matches, otherwise only the least
    /// significant bit is flipped, never the second one.
    #[inline(always)]
    pub fn set_signal_bit(byte: u8, bit: bool) -> u8 {
        if Self::signal_bit(byte) == bit {
            byte
        } else {
            byte ^ 1
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signal_bit_is_xor_of_the_two_lowest_bits() {
        assert!(!BitExtractor::signal_bit(0b0000_0000));
        assert!(BitExtractor::signal_bit(0b0000_0001));
        assert!(BitExtractor::signal_bit(0b0000_0010));
        assert!(!BitExtractor::signal_bit(0b0000_0011));
        assert!(!BitExtractor::signal_bit(0b1111_1100));
        assert!(BitExtractor::signal_bit(0b1010_1110));
    }

    #[test]
    fn roundtrip_for_every_byte_and_bit() {
        for b in 0..=u8::MAX {
            for d in [false, true] {
                assert_eq!(
                    BitExtractor::signal_bit(BitExtractor::set_signal_bit(b, d)),
                    d,
                    "byte {b:#010b}, bit {d}"
                );
            }
        }
    }

    #[test]
    fn perturbation_is_at_most_one_level() {
        for b in 0..=u8::MAX {
            for d in [false, true] {
                let s = BitExtractor::set_signal_bit(b, d);
                assert!((s as i16 - b as i16).abs() <= 1, "byte {b} moved to {s}");
                if BitExtractor::signal_bit(b) == d {
                    assert_eq!(s, b, "byte {b} already carried {d}");
                }
            }
        }
    }

    #[test]
    fn only_the_least_significant_bit_is_ever_flipped() {
        for b in 0..=u8::MAX {
            for d in [false, true] {
                assert_eq!(BitExtractor::set_signal_bit(b, d) & !1, b & !1);
            }
        }
    }
}
