// crypto-rs: cryptography primitives and wrappers
// Copyright 2026 Dark Bio AG. All rights reserved.
//
// Use of this source code is governed by a BSD-style
// license that can be found in the LICENSE file.

//! Diffie-Hellman domain parameters.
//!
//! ```text
//! DHParameter ::= SEQUENCE {
//!   prime     INTEGER, -- p
//!   base      INTEGER, -- g
//!   order     INTEGER OPTIONAL -- q
//! }
//! ```

use crate::error::Result;
use crate::ffc;
use der::asn1::UintRef;
use der::{Decode, Encode, Sequence};
use num_bigint::BigUint;

/// Wire form of the DH domain parameters.
#[derive(Sequence)]
struct DhParameter<'a> {
    p: UintRef<'a>,
    g: UintRef<'a>,
    q: Option<UintRef<'a>>,
}

/// Params contains a Diffie-Hellman finite field domain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Params {
    p: BigUint,
    g: BigUint,
    q: Option<BigUint>,
}

impl Params {
    /// new assembles a domain from its components.
    pub fn new(p: BigUint, g: BigUint, q: Option<BigUint>) -> Self {
        Self { p, g, q }
    }

    /// from_der parses a DER encoded DHParameter sequence.
    pub fn from_der(der: &[u8]) -> Result<Self> {
        let raw = DhParameter::from_der(der)?;
        Ok(Self {
            p: ffc::decode_integer(raw.p),
            g: ffc::decode_integer(raw.g),
            q: raw.q.map(ffc::decode_integer),
        })
    }

    /// to_der serializes the domain into its canonical DER encoding.
    pub fn to_der(&self) -> Vec<u8> {
        let p = self.p.to_bytes_be();
        let g = self.g.to_bytes_be();
        let q = self.q.as_ref().map(BigUint::to_bytes_be);

        // UintRef only fails on lengths beyond what DER can express at all
        let raw = DhParameter {
            p: UintRef::new(&p).expect("DH prime fits in DER"),
            g: UintRef::new(&g).expect("DH generator fits in DER"),
            q: q.as_deref().map(|q| UintRef::new(q).expect("DH order fits in DER")),
        };
        raw.to_der().expect("DH parameters always encode")
    }

    /// p returns the prime modulus.
    pub fn p(&self) -> &BigUint {
        &self.p
    }

    /// g returns the generator.
    pub fn g(&self) -> &BigUint {
        &self.g
    }

    /// q returns the subgroup order, if the parameters carried one.
    pub fn q(&self) -> Option<&BigUint> {
        self.q.as_ref()
    }

    /// bits returns the size of the prime modulus in bits.
    pub fn bits(&self) -> u64 {
        self.p.bits()
    }

    /// public_key_from_octets decodes and validates a raw big-endian public key.
    pub(crate) fn public_key_from_octets(&self, octets: &[u8]) -> Result<BigUint> {
        ffc::public_key_from_octets(&self.p, self.q.as_ref(), octets)
    }

    /// public_key_from_der decodes and validates a DER INTEGER public key.
    pub(crate) fn public_key_from_der(&self, der: &[u8]) -> Result<BigUint> {
        ffc::public_key_from_der(&self.p, self.q.as_ref(), der)
    }
}
