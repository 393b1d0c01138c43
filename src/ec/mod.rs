// crypto-rs: cryptography primitives and wrappers
// Copyright 2026 Dark Bio AG. All rights reserved.
//
// Use of this source code is governed by a BSD-style
// license that can be found in the LICENSE file.

//! Elliptic curve domain parameters and public points.
//!
//! Only the namedCurve form of ECParameters is supported:
//!
//! ```text
//! ECParameters ::= CHOICE {
//!   namedCurve OBJECT IDENTIFIER
//! }
//! ```
//!
//! Public keys use the SEC 1 uncompressed point encoding `0x04 || X || Y`.

mod curves;

pub use curves::{Curve, Domain, OID_P256, OID_P384, OID_P521, OID_SECP256K1};

use crate::error::{Error, Result};
use const_oid::ObjectIdentifier;
use der::asn1::{AnyRef, OctetStringRef};
use der::{Decode, Encode, Tag, Tagged};
use num_bigint::BigUint;

/// Leading byte of an uncompressed SEC 1 point.
const UNCOMPRESSED_TAG: u8 = 0x04;

/// Params contains a named elliptic curve domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Params {
    curve: Curve,
}

impl Params {
    /// new creates the parameters for a named curve.
    pub fn new(curve: Curve) -> Self {
        Self { curve }
    }

    /// from_der parses a DER encoded namedCurve object identifier.
    pub fn from_der(der: &[u8]) -> Result<Self> {
        let any = AnyRef::from_der(der)?;
        any.tag().assert_eq(Tag::ObjectIdentifier)?;

        // Identifiers too short or too long to be held in an ObjectIdentifier
        // can still be well formed, they just never name a known curve
        let body = any.value();
        if !(3..=ObjectIdentifier::MAX_SIZE).contains(&body.len()) && arcs_well_formed(body) {
            return Err(Error::UnsupportedAlgorithm {
                name: format!("named curve with a {}-byte identifier", body.len()),
            });
        }
        let oid = ObjectIdentifier::from_bytes(body).map_err(der::Error::from)?;
        let curve = Curve::from_oid(&oid).ok_or_else(|| Error::UnsupportedAlgorithm {
            name: format!("named curve {oid}"),
        })?;
        Ok(Self { curve })
    }

    /// to_der serializes the parameters into their canonical DER encoding.
    pub fn to_der(&self) -> Vec<u8> {
        self.curve
            .oid()
            .to_der()
            .expect("named curve OID always encodes")
    }

    /// curve returns the named curve.
    pub fn curve(&self) -> Curve {
        self.curve
    }

    /// domain returns the curve's domain parameters.
    pub fn domain(&self) -> &'static Domain {
        self.curve.domain()
    }

    /// bits returns the size of the field prime in bits.
    pub fn bits(&self) -> u64 {
        self.domain().bits()
    }

    /// point_from_octets decodes and validates an uncompressed SEC 1 point.
    pub(crate) fn point_from_octets(&self, octets: &[u8]) -> Result<Point> {
        let domain = self.domain();

        let Some((&tag, coords)) = octets.split_first() else {
            return Err(Error::InvalidKeyEncoding {
                reason: "empty public key",
            });
        };
        match tag {
            UNCOMPRESSED_TAG => {}
            0x00 => {
                return Err(Error::InvalidKeyEncoding {
                    reason: "point at infinity is not a valid public key",
                });
            }
            0x02 | 0x03 => {
                return Err(Error::InvalidKeyEncoding {
                    reason: "compressed points are not supported",
                });
            }
            _ => {
                return Err(Error::InvalidKeyEncoding {
                    reason: "unknown point encoding",
                });
            }
        }
        // Both truncated and over-long encodings are rejected here
        let field_len = domain.field_len();
        if coords.len() != 2 * field_len {
            return Err(Error::InvalidKeyEncoding {
                reason: "point length does not match the curve",
            });
        }
        let (x, y) = coords.split_at(field_len);
        let point = Point {
            curve: self.curve,
            x: BigUint::from_bytes_be(x),
            y: BigUint::from_bytes_be(y),
        };
        if point.x >= *domain.p() || point.y >= *domain.p() {
            return Err(Error::InvalidDomainRange {
                reason: "point coordinate is not a field element",
            });
        }
        if !domain.contains(&point.x, &point.y) {
            return Err(Error::PointNotOnCurve {
                curve: self.curve.name(),
            });
        }
        Ok(point)
    }

    /// point_from_der decodes an ECPoint OCTET STRING wrapping an uncompressed
    /// SEC 1 point.
    pub(crate) fn point_from_der(&self, der: &[u8]) -> Result<Point> {
        let octets = OctetStringRef::from_der(der).map_err(|_| Error::InvalidKeyEncoding {
            reason: "public key is not a single DER OCTET STRING",
        })?;
        self.point_from_octets(octets.as_bytes())
    }

    /// generator returns the base point of the curve.
    pub fn generator(&self) -> Point {
        let (x, y) = self.domain().generator();
        Point {
            curve: self.curve,
            x: x.clone(),
            y: y.clone(),
        }
    }
}

/// arcs_well_formed checks the base-128 arc structure of an OID body: every
/// arc is minimally encoded and the last one is terminated.
fn arcs_well_formed(body: &[u8]) -> bool {
    let Some(last) = body.last() else {
        return false;
    };
    if last & 0x80 != 0 {
        return false;
    }
    let mut arc_start = true;
    for &byte in body {
        if arc_start && byte == 0x80 {
            return false;
        }
        arc_start = byte & 0x80 == 0;
    }
    true
}

/// Point is an affine point on a named curve, validated at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Point {
    curve: Curve,
    x: BigUint,
    y: BigUint,
}

impl Point {
    /// curve returns the named curve the point was validated against.
    pub fn curve(&self) -> Curve {
        self.curve
    }

    /// x returns the affine x coordinate.
    pub fn x(&self) -> &BigUint {
        &self.x
    }

    /// y returns the affine y coordinate.
    pub fn y(&self) -> &BigUint {
        &self.y
    }

    /// to_uncompressed serializes the point as `0x04 || X || Y` with both
    /// coordinates padded to the field width of its curve.
    pub fn to_uncompressed(&self) -> Vec<u8> {
        let field_len = self.curve.domain().field_len();

        let mut out = vec![0u8; 1 + 2 * field_len];
        out[0] = UNCOMPRESSED_TAG;

        let x = self.x.to_bytes_be();
        out[1 + field_len - x.len()..1 + field_len].copy_from_slice(&x);

        let y = self.y.to_bytes_be();
        out[1 + 2 * field_len - y.len()..].copy_from_slice(&y);

        out
    }

    /// to_der serializes the point as an ECPoint OCTET STRING.
    pub fn to_der(&self) -> Vec<u8> {
        let octets = self.to_uncompressed();
        OctetStringRef::new(&octets)
            .and_then(|os| os.to_der())
            .expect("EC point always encodes")
    }
}
