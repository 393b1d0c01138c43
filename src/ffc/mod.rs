// crypto-rs: cryptography primitives and wrappers
// Copyright 2026 Dark Bio AG. All rights reserved.
//
// Use of this source code is governed by a BSD-style
// license that can be found in the LICENSE file.

//! Finite field public key handling shared by DH and DSA.
//!
//! Both families carry their public key as a single integer `y` in the
//! multiplicative group modulo `p`. The encoded form is the unsigned big-endian
//! value, at most as wide as the modulus. The DER form is a bare INTEGER.

use crate::error::{Error, Result};
use der::asn1::UintRef;
use der::{Decode, Encode};
use num_bigint::BigUint;
use num_traits::One;

/// byte_len returns the number of bytes needed to hold the modulus.
pub(crate) fn byte_len(p: &BigUint) -> usize {
    p.bits().div_ceil(8) as usize
}

/// decode_integer parses one DER INTEGER into an unsigned big integer. The DER
/// rules (minimal encoding, non-negative) are enforced by the decoder.
pub(crate) fn decode_integer(int: UintRef<'_>) -> BigUint {
    BigUint::from_bytes_be(int.as_bytes())
}

/// public_key_from_octets parses a raw big-endian public key and validates it
/// against the domain.
pub(crate) fn public_key_from_octets(
    p: &BigUint,
    q: Option<&BigUint>,
    octets: &[u8],
) -> Result<BigUint> {
    if octets.is_empty() {
        return Err(Error::InvalidKeyEncoding {
            reason: "empty public key",
        });
    }
    // A value wider than the modulus can never be a group element, and also
    // catches callers handing over some unrelated structure (e.g. parameters)
    if octets.len() > byte_len(p) {
        return Err(Error::InvalidKeyEncoding {
            reason: "public key wider than the modulus",
        });
    }
    let y = BigUint::from_bytes_be(octets);
    validate_public_key(p, q, &y)?;
    Ok(y)
}

/// public_key_from_der parses a DER INTEGER public key and validates it against
/// the domain.
pub(crate) fn public_key_from_der(p: &BigUint, q: Option<&BigUint>, der: &[u8]) -> Result<BigUint> {
    let int = UintRef::from_der(der).map_err(|_| Error::InvalidKeyEncoding {
        reason: "public key is not a single DER INTEGER",
    })?;
    let y = decode_integer(int);
    validate_public_key(p, q, &y)?;
    Ok(y)
}

/// validate_public_key checks that `1 < y < p-1` and, if the subgroup order is
/// known, that `y^q = 1 mod p`.
pub(crate) fn validate_public_key(p: &BigUint, q: Option<&BigUint>, y: &BigUint) -> Result<()> {
    let one = BigUint::one();
    if *y <= one {
        return Err(Error::InvalidDomainRange {
            reason: "public key must be greater than 1",
        });
    }
    if *p <= one || *y >= p - &one {
        return Err(Error::InvalidDomainRange {
            reason: "public key must be less than p-1",
        });
    }
    if let Some(q) = q {
        // Any y would pass the subgroup check with q = 0 or q = 1
        if *q <= one {
            return Err(Error::InvalidDomainRange {
                reason: "subgroup order must be greater than 1",
            });
        }
        if y.modpow(q, p) != one {
            return Err(Error::InvalidDomainRange {
                reason: "public key is not in the prime order subgroup",
            });
        }
    }
    Ok(())
}

/// public_key_to_octets serializes `y` as big-endian bytes, left padded to the
/// width of the modulus.
pub(crate) fn public_key_to_octets(p: &BigUint, y: &BigUint) -> Vec<u8> {
    let raw = y.to_bytes_be();
    let mut out = vec![0u8; byte_len(p).max(raw.len())];
    let offset = out.len() - raw.len();
    out[offset..].copy_from_slice(&raw);
    out
}

/// public_key_to_der serializes `y` as a bare DER INTEGER.
pub(crate) fn public_key_to_der(y: &BigUint) -> Vec<u8> {
    let raw = y.to_bytes_be();
    UintRef::new(&raw)
        .and_then(|int| int.to_der())
        .expect("public key integer always encodes")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_domain() -> (BigUint, BigUint) {
        // p = 23 = 2*11 + 1, q = 11
        (BigUint::from(23u32), BigUint::from(11u32))
    }

    // Tests the range boundaries of the public key check on a toy group.
    #[test]
    fn test_validate_range() {
        let (p, _) = small_domain();

        for y in [0u32, 1, 22, 23, 40] {
            let err = validate_public_key(&p, None, &BigUint::from(y)).unwrap_err();
            assert!(matches!(err, Error::InvalidDomainRange { .. }), "y={y}");
        }
        for y in [2u32, 3, 21] {
            validate_public_key(&p, None, &BigUint::from(y)).unwrap();
        }
    }

    // Tests that the subgroup check rejects elements outside the order-q group.
    #[test]
    fn test_validate_subgroup() {
        let (p, q) = small_domain();

        // Quadratic residues mod 23 form the order 11 subgroup
        validate_public_key(&p, Some(&q), &BigUint::from(4u32)).unwrap();
        validate_public_key(&p, Some(&q), &BigUint::from(2u32)).unwrap();

        let err = validate_public_key(&p, Some(&q), &BigUint::from(5u32)).unwrap_err();
        assert!(matches!(err, Error::InvalidDomainRange { .. }));
    }

    // Tests that degenerate subgroup orders reject every key instead of
    // letting all of them through.
    #[test]
    fn test_validate_degenerate_order() {
        let (p, _) = small_domain();

        for q in [0u32, 1] {
            for y in [2u32, 4, 5] {
                let err =
                    validate_public_key(&p, Some(&BigUint::from(q)), &BigUint::from(y)).unwrap_err();
                assert!(matches!(err, Error::InvalidDomainRange { .. }), "q={q} y={y}");
            }
        }
    }

    // Tests the raw octet grammar: non-empty, no wider than the modulus.
    #[test]
    fn test_octets_grammar() {
        let (p, _) = small_domain();

        let err = public_key_from_octets(&p, None, &[]).unwrap_err();
        assert!(matches!(err, Error::InvalidKeyEncoding { .. }));

        let err = public_key_from_octets(&p, None, &[0x00, 0x05]).unwrap_err();
        assert!(matches!(err, Error::InvalidKeyEncoding { .. }));

        let y = public_key_from_octets(&p, None, &[0x05]).unwrap();
        assert_eq!(y, BigUint::from(5u32));
        assert_eq!(public_key_to_octets(&p, &y), vec![0x05]);
    }

    // Tests the DER INTEGER grammar, including rejection of non-integers and
    // of non-minimal or negative encodings.
    #[test]
    fn test_der_grammar() {
        let (p, _) = small_domain();

        let y = public_key_from_der(&p, None, &[0x02, 0x01, 0x05]).unwrap();
        assert_eq!(y, BigUint::from(5u32));
        assert_eq!(public_key_to_der(&y), vec![0x02, 0x01, 0x05]);

        for bad in [
            &[][..],
            &[0x30, 0x03, 0x02, 0x01, 0x05][..],
            &[0x02, 0x02, 0x00, 0x05][..],
            &[0x02, 0x01, 0x85][..],
            &[0x02, 0x01, 0x05, 0x00][..],
            &[0x02, 0x02, 0x05][..],
        ] {
            let err = public_key_from_der(&p, None, bad).unwrap_err();
            assert!(matches!(err, Error::InvalidKeyEncoding { .. }), "{bad:02x?}");
        }
        let err = public_key_from_der(&p, None, &[0x02, 0x01, 0x01]).unwrap_err();
        assert!(matches!(err, Error::InvalidDomainRange { .. }));
    }
}
