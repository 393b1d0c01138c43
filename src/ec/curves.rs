// crypto-rs: cryptography primitives and wrappers
// Copyright 2026 Dark Bio AG. All rights reserved.
//
// Use of this source code is governed by a BSD-style
// license that can be found in the LICENSE file.

//! Named curve table.
//!
//! https://www.secg.org/sec2-v2.pdf

use const_oid::ObjectIdentifier;
use hex_literal::hex;
use num_bigint::BigUint;
use std::fmt;
use std::sync::LazyLock;

/// Object Identifier for NIST P-256 (prime256v1).
pub const OID_P256: ObjectIdentifier = ObjectIdentifier::new_unwrap("1.2.840.10045.3.1.7");

/// Object Identifier for NIST P-384 (secp384r1).
pub const OID_P384: ObjectIdentifier = ObjectIdentifier::new_unwrap("1.3.132.0.34");

/// Object Identifier for NIST P-521 (secp521r1).
pub const OID_P521: ObjectIdentifier = ObjectIdentifier::new_unwrap("1.3.132.0.35");

/// Object Identifier for secp256k1.
pub const OID_SECP256K1: ObjectIdentifier = ObjectIdentifier::new_unwrap("1.3.132.0.10");

/// Curve is one of the supported named curves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Curve {
    P256,
    P384,
    P521,
    Secp256k1,
}

impl Curve {
    /// All supported curves, in table order.
    pub const ALL: [Curve; 4] = [Curve::P256, Curve::P384, Curve::P521, Curve::Secp256k1];

    /// name returns the SEC 2 / NIST name of the curve.
    pub fn name(self) -> &'static str {
        match self {
            Curve::P256 => "P-256",
            Curve::P384 => "P-384",
            Curve::P521 => "P-521",
            Curve::Secp256k1 => "secp256k1",
        }
    }

    /// oid returns the namedCurve object identifier.
    pub fn oid(self) -> ObjectIdentifier {
        match self {
            Curve::P256 => OID_P256,
            Curve::P384 => OID_P384,
            Curve::P521 => OID_P521,
            Curve::Secp256k1 => OID_SECP256K1,
        }
    }

    /// from_oid resolves a namedCurve object identifier.
    pub fn from_oid(oid: &ObjectIdentifier) -> Option<Curve> {
        Curve::ALL.into_iter().find(|curve| curve.oid() == *oid)
    }

    /// domain returns the curve's domain parameters.
    pub fn domain(self) -> &'static Domain {
        &DOMAINS[self as usize]
    }
}

impl fmt::Display for Curve {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Domain holds the short Weierstrass parameters `y^2 = x^3 + ax + b` of a
/// prime field curve.
#[derive(Debug)]
pub struct Domain {
    curve: Curve,
    p: BigUint,
    a: BigUint,
    b: BigUint,
    gx: BigUint,
    gy: BigUint,
    n: BigUint,
    h: BigUint,
    field_len: usize,
}

impl Domain {
    /// curve returns the curve this domain belongs to.
    pub fn curve(&self) -> Curve {
        self.curve
    }

    /// p returns the field prime.
    pub fn p(&self) -> &BigUint {
        &self.p
    }

    /// a returns the linear coefficient of the curve equation.
    pub fn a(&self) -> &BigUint {
        &self.a
    }

    /// b returns the constant coefficient of the curve equation.
    pub fn b(&self) -> &BigUint {
        &self.b
    }

    /// generator returns the affine coordinates of the base point.
    pub fn generator(&self) -> (&BigUint, &BigUint) {
        (&self.gx, &self.gy)
    }

    /// order returns the order of the base point.
    pub fn order(&self) -> &BigUint {
        &self.n
    }

    /// cofactor returns the cofactor of the curve.
    pub fn cofactor(&self) -> &BigUint {
        &self.h
    }

    /// field_len returns the width of a field element in bytes.
    pub fn field_len(&self) -> usize {
        self.field_len
    }

    /// bits returns the size of the field prime in bits.
    pub fn bits(&self) -> u64 {
        self.p.bits()
    }

    /// contains checks whether the affine point satisfies the curve equation.
    /// Coordinates are expected to be reduced field elements.
    pub fn contains(&self, x: &BigUint, y: &BigUint) -> bool {
        let lhs = (y * y) % &self.p;
        let rhs = (x * x * x + &self.a * x + &self.b) % &self.p;
        lhs == rhs
    }
}

struct Constants {
    p: &'static [u8],
    a: &'static [u8],
    b: &'static [u8],
    gx: &'static [u8],
    gy: &'static [u8],
    n: &'static [u8],
    h: u32,
}

const P256: Constants = Constants {
    p: &hex!("ffffffff00000001000000000000000000000000ffffffffffffffffffffffff"),
    a: &hex!("ffffffff00000001000000000000000000000000fffffffffffffffffffffffc"),
    b: &hex!("5ac635d8aa3a93e7b3ebbd55769886bc651d06b0cc53b0f63bce3c3e27d2604b"),
    gx: &hex!("6b17d1f2e12c4247f8bce6e563a440f277037d812deb33a0f4a13945d898c296"),
    gy: &hex!("4fe342e2fe1a7f9b8ee7eb4a7c0f9e162bce33576b315ececbb6406837bf51f5"),
    n: &hex!("ffffffff00000000ffffffffffffffffbce6faada7179e84f3b9cac2fc632551"),
    h: 1,
};

const P384: Constants = Constants {
    p: &hex!(
        "fffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffe"
        "ffffffff0000000000000000ffffffff"
    ),
    a: &hex!(
        "fffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffe"
        "ffffffff0000000000000000fffffffc"
    ),
    b: &hex!(
        "b3312fa7e23ee7e4988e056be3f82d19181d9c6efe8141120314088f5013875a"
        "c656398d8a2ed19d2a85c8edd3ec2aef"
    ),
    gx: &hex!(
        "aa87ca22be8b05378eb1c71ef320ad746e1d3b628ba79b9859f741e082542a38"
        "5502f25dbf55296c3a545e3872760ab7"
    ),
    gy: &hex!(
        "3617de4a96262c6f5d9e98bf9292dc29f8f41dbd289a147ce9da3113b5f0b8c0"
        "0a60b1ce1d7e819d7a431d7c90ea0e5f"
    ),
    n: &hex!(
        "ffffffffffffffffffffffffffffffffffffffffffffffffc7634d81f4372ddf"
        "581a0db248b0a77aecec196accc52973"
    ),
    h: 1,
};

const P521: Constants = Constants {
    p: &hex!(
        "01ffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffff"
        "ffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffff"
        "ffff"
    ),
    a: &hex!(
        "01ffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffff"
        "ffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffff"
        "fffc"
    ),
    b: &hex!(
        "0051953eb9618e1c9a1f929a21a0b68540eea2da725b99b315f3b8b489918ef1"
        "09e156193951ec7e937b1652c0bd3bb1bf073573df883d2c34f1ef451fd46b50"
        "3f00"
    ),
    gx: &hex!(
        "00c6858e06b70404e9cd9e3ecb662395b4429c648139053fb521f828af606b4d"
        "3dbaa14b5e77efe75928fe1dc127a2ffa8de3348b3c1856a429bf97e7e31c2e5"
        "bd66"
    ),
    gy: &hex!(
        "011839296a789a3bc0045c8a5fb42c7d1bd998f54449579b446817afbd17273e"
        "662c97ee72995ef42640c550b9013fad0761353c7086a272c24088be94769fd1"
        "6650"
    ),
    n: &hex!(
        "01ffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffff"
        "fffa51868783bf2f966b7fcc0148f709a5d03bb5c9b8899c47aebb6fb71e9138"
        "6409"
    ),
    h: 1,
};

const SECP256K1: Constants = Constants {
    p: &hex!("fffffffffffffffffffffffffffffffffffffffffffffffffffffffefffffc2f"),
    a: &hex!("0000000000000000000000000000000000000000000000000000000000000000"),
    b: &hex!("0000000000000000000000000000000000000000000000000000000000000007"),
    gx: &hex!("79be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798"),
    gy: &hex!("483ada7726a3c4655da4fbfc0e1108a8fd17b448a68554199c47d08ffb10d4b8"),
    n: &hex!("fffffffffffffffffffffffffffffffebaaedce6af48a03bbfd25e8cd0364141"),
    h: 1,
};

// Indexed by `Curve as usize`, must follow the enum declaration order.
static DOMAINS: LazyLock<[Domain; 4]> = LazyLock::new(|| {
    [
        expand(Curve::P256, &P256),
        expand(Curve::P384, &P384),
        expand(Curve::P521, &P521),
        expand(Curve::Secp256k1, &SECP256K1),
    ]
});

fn expand(curve: Curve, c: &Constants) -> Domain {
    Domain {
        curve,
        p: BigUint::from_bytes_be(c.p),
        a: BigUint::from_bytes_be(c.a),
        b: BigUint::from_bytes_be(c.b),
        gx: BigUint::from_bytes_be(c.gx),
        gy: BigUint::from_bytes_be(c.gy),
        n: BigUint::from_bytes_be(c.n),
        h: BigUint::from(c.h),
        field_len: c.p.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use der::Encode;

    // Tests that the table is laid out in enum order and every base point
    // satisfies its own curve equation.
    #[test]
    fn test_domains_consistent() {
        for curve in Curve::ALL {
            let domain = curve.domain();
            assert_eq!(domain.curve(), curve);

            let (gx, gy) = domain.generator();
            assert!(domain.contains(gx, gy), "{curve}: generator off curve");
            assert!(!domain.contains(gx, &(gy + 1u32)), "{curve}: tweaked generator on curve");
            assert_eq!(domain.field_len(), (domain.bits() as usize).div_ceil(8));
        }
        assert_eq!(Curve::P256.domain().bits(), 256);
        assert_eq!(Curve::P384.domain().bits(), 384);
        assert_eq!(Curve::P521.domain().bits(), 521);
        assert_eq!(Curve::P521.domain().field_len(), 66);
    }

    // Tests the P-256 group order and cofactor against SEC 2.
    #[test]
    fn test_p256_group() {
        let domain = Curve::P256.domain();
        assert_eq!(
            hex::encode(domain.order().to_bytes_be()),
            "ffffffff00000000ffffffffffffffffbce6faada7179e84f3b9cac2fc632551"
        );
        assert_eq!(*domain.cofactor(), BigUint::from(1u32));

        for curve in Curve::ALL {
            let domain = curve.domain();
            assert!(domain.order() < &(domain.p() + domain.p()), "{curve}: order too large");
            assert_eq!(*domain.cofactor(), BigUint::from(1u32), "{curve}: cofactor");
        }
    }

    // Tests the namedCurve OID encodings against their well known DER bytes.
    #[test]
    fn test_curve_oids() {
        let tests = [
            (Curve::P256, "06082a8648ce3d030107"),
            (Curve::P384, "06052b81040022"),
            (Curve::P521, "06052b81040023"),
            (Curve::Secp256k1, "06052b8104000a"),
        ];
        for (curve, want) in tests {
            assert_eq!(hex::encode(curve.oid().to_der().unwrap()), want);
            assert_eq!(Curve::from_oid(&curve.oid()), Some(curve));
        }
        let unknown = ObjectIdentifier::new_unwrap("1.3.132.0.33");
        assert_eq!(Curve::from_oid(&unknown), None);
    }
}
