//======================================================================
// src/ct.rs
// Constant-time helpers for tag checks.
//======================================================================

use subtle::{Choice, ConditionallySelectable, ConstantTimeEq};

/// Compares a computed tag with a received one without an early exit.
/// Lengths are public; unequal lengths never match.
#[inline]
pub(crate) fn tags_match(computed: &[u8], received: &[u8]) -> Choice {
    computed.ct_eq(received)
}

/// Zeroes `buf` when `wipe` is set. Every byte is written either way.
#[inline]
pub(crate) fn wipe_if(buf: &mut [u8], wipe: Choice) {
    for b in buf.iter_mut() {
        b.conditional_assign(&0, wipe);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tags_match_exact_only() {
        let a = [7u8; 16];
        let mut b = a;
        assert!(bool::from(tags_match(&a, &b)));
        b[15] ^= 1;
        assert!(!bool::from(tags_match(&a, &b)));
        assert!(!bool::from(tags_match(&a, &a[..15])));
    }

    #[test]
    fn wipe_if_is_masked() {
        let mut buf = [0xa5u8; 9];
        wipe_if(&mut buf, Choice::from(0));
        assert_eq!(buf, [0xa5; 9]);
        wipe_if(&mut buf, Choice::from(1));
        assert_eq!(buf, [0; 9]);
    }
}
