// crypto-rs: cryptography primitives and wrappers
// Copyright 2026 Dark Bio AG. All rights reserved.
//
// Use of this source code is governed by a BSD-style
// license that can be found in the LICENSE file.

//! DSA domain parameters and signature algorithm identifiers.
//!
//! https://datatracker.ietf.org/doc/html/rfc3279#section-2.3.2
//!
//! ```text
//! Dss-Parms ::= SEQUENCE {
//!   p INTEGER,
//!   q INTEGER,
//!   g INTEGER
//! }
//! ```

use crate::error::{Error, Result};
use crate::ffc;
use const_oid::ObjectIdentifier;
use der::asn1::UintRef;
use der::{Decode, Encode, Sequence};
use num_bigint::BigUint;
use spki::AlgorithmIdentifierOwned;

/// Wire form of the DSA domain parameters.
#[derive(Sequence)]
struct DssParms<'a> {
    p: UintRef<'a>,
    q: UintRef<'a>,
    g: UintRef<'a>,
}

/// Params contains a DSA finite field domain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Params {
    p: BigUint,
    q: BigUint,
    g: BigUint,
}

impl Params {
    /// new assembles a domain from its components.
    pub fn new(p: BigUint, q: BigUint, g: BigUint) -> Self {
        Self { p, q, g }
    }

    /// from_der parses a DER encoded Dss-Parms sequence.
    pub fn from_der(der: &[u8]) -> Result<Self> {
        let raw = DssParms::from_der(der)?;
        Ok(Self {
            p: ffc::decode_integer(raw.p),
            q: ffc::decode_integer(raw.q),
            g: ffc::decode_integer(raw.g),
        })
    }

    /// to_der serializes the domain into its canonical DER encoding.
    pub fn to_der(&self) -> Vec<u8> {
        let p = self.p.to_bytes_be();
        let q = self.q.to_bytes_be();
        let g = self.g.to_bytes_be();

        let raw = DssParms {
            p: UintRef::new(&p).expect("DSA prime fits in DER"),
            q: UintRef::new(&q).expect("DSA subprime fits in DER"),
            g: UintRef::new(&g).expect("DSA generator fits in DER"),
        };
        raw.to_der().expect("DSA parameters always encode")
    }

    /// p returns the prime modulus.
    pub fn p(&self) -> &BigUint {
        &self.p
    }

    /// q returns the prime subgroup order.
    pub fn q(&self) -> &BigUint {
        &self.q
    }

    /// g returns the subgroup generator.
    pub fn g(&self) -> &BigUint {
        &self.g
    }

    /// bits returns the size of the prime modulus in bits.
    pub fn bits(&self) -> u64 {
        self.p.bits()
    }

    /// public_key_from_octets decodes and validates a raw big-endian public key.
    pub(crate) fn public_key_from_octets(&self, octets: &[u8]) -> Result<BigUint> {
        ffc::public_key_from_octets(&self.p, Some(&self.q), octets)
    }

    /// public_key_from_der decodes and validates a DER INTEGER public key.
    pub(crate) fn public_key_from_der(&self, der: &[u8]) -> Result<BigUint> {
        ffc::public_key_from_der(&self.p, Some(&self.q), der)
    }
}

/// Digest is a hash function DSA signatures can be paired with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Digest {
    Sha,
    Sha1,
    Sha224,
    Sha256,
    Sha384,
    Sha512,
    Sha3_224,
    Sha3_256,
    Sha3_384,
    Sha3_512,
}

impl Digest {
    /// All digests with a registered DSA signature algorithm.
    pub const ALL: [Digest; 10] = [
        Digest::Sha,
        Digest::Sha1,
        Digest::Sha224,
        Digest::Sha256,
        Digest::Sha384,
        Digest::Sha512,
        Digest::Sha3_224,
        Digest::Sha3_256,
        Digest::Sha3_384,
        Digest::Sha3_512,
    ];

    /// signature_oid returns the dsaWith* signature algorithm identifier.
    pub fn signature_oid(self) -> ObjectIdentifier {
        match self {
            // OIW secsig arcs
            Digest::Sha => ObjectIdentifier::new_unwrap("1.3.14.3.2.13"),
            Digest::Sha1 => ObjectIdentifier::new_unwrap("1.3.14.3.2.27"),
            // NIST sigAlgs arcs
            Digest::Sha224 => ObjectIdentifier::new_unwrap("2.16.840.1.101.3.4.3.1"),
            Digest::Sha256 => ObjectIdentifier::new_unwrap("2.16.840.1.101.3.4.3.2"),
            Digest::Sha384 => ObjectIdentifier::new_unwrap("2.16.840.1.101.3.4.3.3"),
            Digest::Sha512 => ObjectIdentifier::new_unwrap("2.16.840.1.101.3.4.3.4"),
            Digest::Sha3_224 => ObjectIdentifier::new_unwrap("2.16.840.1.101.3.4.3.5"),
            Digest::Sha3_256 => ObjectIdentifier::new_unwrap("2.16.840.1.101.3.4.3.6"),
            Digest::Sha3_384 => ObjectIdentifier::new_unwrap("2.16.840.1.101.3.4.3.7"),
            Digest::Sha3_512 => ObjectIdentifier::new_unwrap("2.16.840.1.101.3.4.3.8"),
        }
    }

    /// algorithm_identifier returns the DER AlgorithmIdentifier of the DSA
    /// signature scheme using this digest. Parameters are absent.
    pub fn algorithm_identifier(self) -> Vec<u8> {
        AlgorithmIdentifierOwned {
            oid: self.signature_oid(),
            parameters: None,
        }
        .to_der()
        .expect("algorithm identifier always encodes")
    }

    /// from_algorithm_identifier resolves a DER AlgorithmIdentifier back to the
    /// digest of a DSA signature scheme.
    pub fn from_algorithm_identifier(der: &[u8]) -> Result<Self> {
        let aid = AlgorithmIdentifierOwned::from_der(der)?;
        if aid.parameters.is_some() {
            return Err(Error::MalformedEncoding {
                details: "DSA signature algorithm parameters must be absent".into(),
            });
        }
        Digest::ALL
            .into_iter()
            .find(|digest| digest.signature_oid() == aid.oid)
            .ok_or_else(|| Error::UnsupportedAlgorithm {
                name: format!("DSA signature algorithm {}", aid.oid),
            })
    }
}
