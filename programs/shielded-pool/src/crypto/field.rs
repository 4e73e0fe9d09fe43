//! BN254 scalar field encoding
//!
//! Public inputs reach the verifier as 32-byte big-endian elements of the
//! BN254 scalar field `r`.

use num_bigint::BigUint;

/// BN254 scalar field modulus (r), big-endian.
/// r = 21888242871839275222246405745257275088548364400416034343698204186575808495617
pub const BN254_SCALAR_MODULUS_BE: [u8; 32] = [
    0x30, 0x64, 0x4e, 0x72, 0xe1, 0x31, 0xa0, 0x29, 0xb8, 0x50, 0x45, 0xb6, 0x81, 0x81, 0x58, 0x5d,
    0x28, 0x33, 0xe8, 0x48, 0x79, 0xb9, 0x70, 0x91, 0x43, 0xe1, 0xf5, 0x93, 0xf0, 0x00, 0x00, 0x01,
];

/// Scalar field element (32 bytes, big-endian).
pub type ScalarField = [u8; 32];

fn modulus() -> BigUint {
    BigUint::from_bytes_be(&BN254_SCALAR_MODULUS_BE)
}

/// Check that `bytes` is already reduced, i.e. `bytes < r`.
pub fn is_canonical_scalar(bytes: &[u8; 32]) -> bool {
    BigUint::from_bytes_be(bytes) < modulus()
}

/// Reduce an arbitrary 32-byte big-endian value modulo `r`.
pub fn reduce_to_scalar(bytes: &[u8; 32]) -> ScalarField {
    let reduced = BigUint::from_bytes_be(bytes) % modulus();
    let digits = reduced.to_bytes_be();

    let mut scalar = [0u8; 32];
    scalar[32 - digits.len()..].copy_from_slice(&digits);
    scalar
}

/// Convert u64 to scalar field element.
///
/// Places the 8-byte big-endian value in the last 8 bytes.
#[inline]
pub fn u64_to_scalar(value: u64) -> ScalarField {
    let mut scalar = [0u8; 32];
    scalar[24..].copy_from_slice(&value.to_be_bytes());
    scalar
}

#[cfg(test)]
mod tests {
    use super::*;

    fn modulus_plus(n: u8) -> [u8; 32] {
        let mut bytes = BN254_SCALAR_MODULUS_BE;
        bytes[31] += n;
        bytes
    }

    #[test]
    fn test_small_values_are_canonical() {
        assert!(is_canonical_scalar(&[0u8; 32]));
        assert!(is_canonical_scalar(&u64_to_scalar(12345)));
    }

    #[test]
    fn test_modulus_is_not_canonical() {
        assert!(!is_canonical_scalar(&BN254_SCALAR_MODULUS_BE));
        assert!(!is_canonical_scalar(&[0xffu8; 32]));

        let mut below = BN254_SCALAR_MODULUS_BE;
        below[31] = 0x00;
        assert!(is_canonical_scalar(&below));
    }

    #[test]
    fn test_reduce_wraps_modulus() {
        assert_eq!(reduce_to_scalar(&BN254_SCALAR_MODULUS_BE), [0u8; 32]);
        assert_eq!(reduce_to_scalar(&modulus_plus(5)), u64_to_scalar(5));
    }

    #[test]
    fn test_reduce_keeps_canonical_values() {
        let value = u64_to_scalar(0x0102030405060708);
        assert_eq!(reduce_to_scalar(&value), value);
    }

    #[test]
    fn test_u64_to_scalar_big_endian() {
        let scalar = u64_to_scalar(0x0102030405060708);
        assert!(scalar[..24].iter().all(|&b| b == 0));
        assert_eq!(&scalar[24..], &[0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08]);
    }
}
