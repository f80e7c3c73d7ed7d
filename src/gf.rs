//! Phrase checksum over GF(2048).
//!
//! Each word of a phrase is an 11-bit symbol, so the checksum is computed in
//! the field GF(2^11) with reduction polynomial x^11 + x^2 + 1. The data
//! symbols are treated as polynomial coefficients and evaluated at x = 2;
//! the result is appended as the final word. Only word indices feed the
//! arithmetic, so the value is identical for every language's wordlist and a
//! single substituted symbol always changes it.

/// Symbol width in bits; wordlists hold 2^11 words
pub(crate) const GF_BITS: u32 = 11;

/// Field size (and wordlist size)
pub(crate) const GF_SIZE: u16 = 1 << GF_BITS;

/// x^11 + x^2 + 1
const GF_POLY: u16 = 0x805;

/// Multiply a field element by x
fn mul2(elem: u16) -> u16 {
    debug_assert!(elem < GF_SIZE);
    if elem & 0x400 != 0 {
        ((elem << 1) ^ GF_POLY) & (GF_SIZE - 1)
    } else {
        elem << 1
    }
}

/// Evaluate the symbol polynomial at x = 2 by Horner's rule.
/// `symbols[i]` is the coefficient of x^i.
pub(crate) fn checksum(symbols: &[u16]) -> u16 {
    let mut acc = 0u16;
    for &symbol in symbols.iter().rev() {
        debug_assert!(symbol < GF_SIZE);
        acc = mul2(acc) ^ symbol;
    }
    acc
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mul2_stays_in_field() {
        for elem in 0..GF_SIZE {
            assert!(mul2(elem) < GF_SIZE);
        }
    }

    #[test]
    fn mul2_known_values() {
        assert_eq!(mul2(0), 0);
        assert_eq!(mul2(1), 2);
        assert_eq!(mul2(0x400), 0x005);
        // (0x7ff << 1) reduced by x^11 + x^2 + 1
        assert_eq!(mul2(0x7ff), 0x7fb);
    }

    #[test]
    fn checksum_of_empty_and_constant() {
        assert_eq!(checksum(&[]), 0);
        assert_eq!(checksum(&[7]), 7);
        // c0 + c1 * 2
        assert_eq!(checksum(&[1, 1]), 3);
    }

    #[test]
    fn any_single_substitution_changes_checksum() {
        let symbols = [3u16, 1005, 2047, 0, 512, 77, 1024, 9, 600, 301, 42, 1999, 18, 250, 7];
        let reference = checksum(&symbols);
        for pos in 0..symbols.len() {
            for delta in [1u16, 0x3ff, 0x7ff] {
                let mut mutated = symbols;
                mutated[pos] ^= delta;
                assert_ne!(checksum(&mutated), reference, "pos {pos} delta {delta:#x}");
            }
        }
    }

    #[test]
    fn transposition_of_distinct_symbols_detected() {
        let symbols = [10u16, 20, 30, 40, 50];
        let reference = checksum(&symbols);
        let mut swapped = symbols;
        swapped.swap(1, 3);
        assert_ne!(checksum(&swapped), reference);
    }
}
