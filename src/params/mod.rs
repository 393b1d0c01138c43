// crypto-rs: cryptography primitives and wrappers
// Copyright 2026 Dark Bio AG. All rights reserved.
//
// Use of this source code is governed by a BSD-style
// license that can be found in the LICENSE file.

//! Algorithm agnostic key parameters with an optionally attached public key.
//!
//! This is the front door of the crate: parameters are decoded from DER for a
//! given algorithm family, after which encoded public keys can be imported and
//! validated against them. Imports are atomic: a rejected key leaves any prior
//! key in place.

use crate::error::{Error, Result};
use sha2::{Digest, Sha256};
use std::fmt;

#[cfg(any(feature = "dh", feature = "dsa"))]
use crate::ffc;
#[cfg(any(feature = "dh", feature = "dsa"))]
use num_bigint::BigUint;

#[cfg(feature = "dh")]
use crate::dh;
#[cfg(feature = "dsa")]
use crate::dsa;
#[cfg(feature = "ec")]
use crate::ec;

#[cfg(feature = "pem")]
use crate::pem;
#[cfg(feature = "pem")]
use serde::{Deserialize, Deserializer, Serialize, Serializer, de};

/// Size of a parameter fingerprint in bytes.
pub const FINGERPRINT_SIZE: usize = 32;

/// Family is an algorithm family with its own parameter format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Family {
    Dh,
    Dsa,
    Ec,
}

impl Family {
    /// All families, whether compiled in or not.
    pub const ALL: [Family; 3] = [Family::Dh, Family::Dsa, Family::Ec];

    /// name returns the short human readable name of the family.
    pub fn name(self) -> &'static str {
        match self {
            Family::Dh => "DH",
            Family::Dsa => "DSA",
            Family::Ec => "EC",
        }
    }

    /// pem_label returns the PEM block label of the family's parameters.
    pub fn pem_label(self) -> &'static str {
        match self {
            Family::Dh => "DH PARAMETERS",
            Family::Dsa => "DSA PARAMETERS",
            Family::Ec => "EC PARAMETERS",
        }
    }

    /// from_pem_label resolves a PEM block label back to its family.
    pub fn from_pem_label(label: &str) -> Option<Family> {
        Family::ALL.into_iter().find(|family| family.pem_label() == label)
    }

    /// enabled reports whether support for the family is compiled in.
    pub fn enabled(self) -> bool {
        match self {
            Family::Dh => cfg!(feature = "dh"),
            Family::Dsa => cfg!(feature = "dsa"),
            Family::Ec => cfg!(feature = "ec"),
        }
    }
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Domain is the decoded parameter set of one of the algorithm families.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Domain {
    #[cfg(feature = "dh")]
    Dh(dh::Params),
    #[cfg(feature = "dsa")]
    Dsa(dsa::Params),
    #[cfg(feature = "ec")]
    Ec(ec::Params),
}

impl Domain {
    /// from_der parses the DER parameters of the given family.
    pub fn from_der(family: Family, der: &[u8]) -> Result<Self> {
        let domain = match family {
            #[cfg(feature = "dh")]
            Family::Dh => Domain::Dh(dh::Params::from_der(der)?),
            #[cfg(feature = "dsa")]
            Family::Dsa => Domain::Dsa(dsa::Params::from_der(der)?),
            #[cfg(feature = "ec")]
            Family::Ec => Domain::Ec(ec::Params::from_der(der)?),
            #[allow(unreachable_patterns)]
            _ => {
                return Err(Error::UnsupportedAlgorithm {
                    name: format!("{family} (support not compiled in)"),
                });
            }
        };
        Ok(domain)
    }

    /// to_der serializes the parameters into their canonical DER encoding.
    pub fn to_der(&self) -> Vec<u8> {
        match self {
            #[cfg(feature = "dh")]
            Domain::Dh(params) => params.to_der(),
            #[cfg(feature = "dsa")]
            Domain::Dsa(params) => params.to_der(),
            #[cfg(feature = "ec")]
            Domain::Ec(params) => params.to_der(),
        }
    }

    /// family returns the algorithm family of the parameters.
    pub fn family(&self) -> Family {
        match self {
            #[cfg(feature = "dh")]
            Domain::Dh(_) => Family::Dh,
            #[cfg(feature = "dsa")]
            Domain::Dsa(_) => Family::Dsa,
            #[cfg(feature = "ec")]
            Domain::Ec(_) => Family::Ec,
        }
    }

    /// bits returns the size of the modulus (DH, DSA) or of the field prime
    /// (EC) in bits.
    pub fn bits(&self) -> u64 {
        match self {
            #[cfg(feature = "dh")]
            Domain::Dh(params) => params.bits(),
            #[cfg(feature = "dsa")]
            Domain::Dsa(params) => params.bits(),
            #[cfg(feature = "ec")]
            Domain::Ec(params) => params.bits(),
        }
    }

    fn public_key_from_octets(&self, octets: &[u8]) -> Result<PublicKey> {
        match self {
            #[cfg(feature = "dh")]
            Domain::Dh(params) => params.public_key_from_octets(octets).map(PublicKey::Ffc),
            #[cfg(feature = "dsa")]
            Domain::Dsa(params) => params.public_key_from_octets(octets).map(PublicKey::Ffc),
            #[cfg(feature = "ec")]
            Domain::Ec(params) => params.point_from_octets(octets).map(PublicKey::Ec),
        }
    }

    fn public_key_from_der(&self, der: &[u8]) -> Result<PublicKey> {
        match self {
            #[cfg(feature = "dh")]
            Domain::Dh(params) => params.public_key_from_der(der).map(PublicKey::Ffc),
            #[cfg(feature = "dsa")]
            Domain::Dsa(params) => params.public_key_from_der(der).map(PublicKey::Ffc),
            #[cfg(feature = "ec")]
            Domain::Ec(params) => params.point_from_der(der).map(PublicKey::Ec),
        }
    }

    // Keys are only ever attached by importing them through the same domain,
    // so the variants always pair up.
    fn public_key_to_octets(&self, key: &PublicKey) -> Vec<u8> {
        match (self, key) {
            #[cfg(feature = "dh")]
            (Domain::Dh(params), PublicKey::Ffc(y)) => ffc::public_key_to_octets(params.p(), y),
            #[cfg(feature = "dsa")]
            (Domain::Dsa(params), PublicKey::Ffc(y)) => ffc::public_key_to_octets(params.p(), y),
            #[cfg(feature = "ec")]
            (Domain::Ec(_), PublicKey::Ec(point)) => point.to_uncompressed(),
            #[allow(unreachable_patterns)]
            _ => unreachable!("public key attached to a foreign domain"),
        }
    }

    fn public_key_to_der(&self, key: &PublicKey) -> Vec<u8> {
        match (self, key) {
            #[cfg(any(feature = "dh", feature = "dsa"))]
            (_, PublicKey::Ffc(y)) => ffc::public_key_to_der(y),
            #[cfg(feature = "ec")]
            (Domain::Ec(_), PublicKey::Ec(point)) => point.to_der(),
            #[allow(unreachable_patterns)]
            _ => unreachable!("public key attached to a foreign domain"),
        }
    }
}

/// PublicKey is a validated public key belonging to a parameter set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PublicKey {
    /// Finite field group element `y` of a DH or DSA domain.
    #[cfg(any(feature = "dh", feature = "dsa"))]
    Ffc(BigUint),
    /// Affine point of a named curve.
    #[cfg(feature = "ec")]
    Ec(ec::Point),
}

/// Fingerprint is the SHA256 hash of the canonical DER parameter encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Fingerprint([u8; FINGERPRINT_SIZE]);

impl Fingerprint {
    /// from_bytes wraps a raw 32-byte fingerprint.
    pub fn from_bytes(bytes: &[u8; FINGERPRINT_SIZE]) -> Self {
        Self(*bytes)
    }

    /// to_bytes returns the raw 32-byte fingerprint.
    pub fn to_bytes(&self) -> [u8; FINGERPRINT_SIZE] {
        self.0
    }
}

/// KeyParameters is a decoded parameter set, together with the public key
/// imported into it, if any.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyParameters {
    domain: Domain,
    public_key: Option<PublicKey>,
}

impl KeyParameters {
    /// new wraps a domain without any public key attached.
    pub fn new(domain: Domain) -> Self {
        Self {
            domain,
            public_key: None,
        }
    }

    /// from_der parses the DER parameters of the given family. An algorithm
    /// family compiled out of the build is reported as unsupported.
    pub fn from_der(family: Family, der: &[u8]) -> Result<Self> {
        let domain = Domain::from_der(family, der)?;
        tracing::debug!(%family, bits = domain.bits(), "decoded key parameters");
        Ok(Self::new(domain))
    }

    /// to_der serializes the parameters (never the public key) into their
    /// canonical DER encoding.
    pub fn to_der(&self) -> Vec<u8> {
        self.domain.to_der()
    }

    /// family returns the algorithm family of the parameters.
    pub fn family(&self) -> Family {
        self.domain.family()
    }

    /// domain returns the decoded parameter set.
    pub fn domain(&self) -> &Domain {
        &self.domain
    }

    /// bits returns the size of the modulus or field prime in bits.
    pub fn bits(&self) -> u64 {
        self.domain.bits()
    }

    /// fingerprint returns a 256bit unique identifier for the parameters: the
    /// SHA256 hash of their canonical DER encoding.
    pub fn fingerprint(&self) -> Fingerprint {
        let mut hasher = Sha256::new();
        hasher.update(self.to_der());
        Fingerprint(hasher.finalize().into())
    }

    /// set_encoded_public_key validates an encoded public key against the
    /// parameters and attaches it, replacing any previous key.
    ///
    /// DH and DSA keys are the unsigned big-endian `y`, at most as wide as `p`.
    /// EC keys are uncompressed points `0x04 || X || Y`.
    pub fn set_encoded_public_key(&mut self, encoded: &[u8]) -> Result<&PublicKey> {
        let key = self.domain.public_key_from_octets(encoded);
        self.attach(key)
    }

    /// set_public_key_der validates a DER public key against the parameters and
    /// attaches it, replacing any previous key.
    ///
    /// DH and DSA keys are a bare INTEGER, EC keys an ECPoint OCTET STRING.
    pub fn set_public_key_der(&mut self, der: &[u8]) -> Result<&PublicKey> {
        let key = self.domain.public_key_from_der(der);
        self.attach(key)
    }

    fn attach(&mut self, key: Result<PublicKey>) -> Result<&PublicKey> {
        match key {
            Ok(key) => {
                tracing::debug!(family = %self.family(), "imported public key");
                Ok(&*self.public_key.insert(key))
            }
            Err(err) => {
                tracing::warn!(family = %self.family(), %err, "rejected public key");
                Err(err)
            }
        }
    }

    /// public_key returns the attached public key, if any.
    pub fn public_key(&self) -> Option<&PublicKey> {
        self.public_key.as_ref()
    }

    /// encoded_public_key serializes the attached public key in the form the
    /// importer accepts. DH and DSA keys are padded to the width of `p`.
    pub fn encoded_public_key(&self) -> Result<Vec<u8>> {
        let key = self.public_key.as_ref().ok_or(Error::MissingPublicKey)?;
        Ok(self.domain.public_key_to_octets(key))
    }

    /// public_key_der serializes the attached public key into DER.
    pub fn public_key_der(&self) -> Result<Vec<u8>> {
        let key = self.public_key.as_ref().ok_or(Error::MissingPublicKey)?;
        Ok(self.domain.public_key_to_der(key))
    }

    /// from_pem parses PEM armored parameters, inferring the family from the
    /// block label.
    #[cfg(feature = "pem")]
    pub fn from_pem(pem_str: &str) -> Result<Self> {
        let (label, data) = pem::decode(pem_str)?;
        let family = Family::from_pem_label(&label).ok_or_else(|| Error::UnsupportedAlgorithm {
            name: format!("PEM block {label}"),
        })?;
        Self::from_der(family, &data)
    }

    /// to_pem serializes the parameters into a PEM block.
    #[cfg(feature = "pem")]
    pub fn to_pem(&self) -> String {
        pem::encode(self.family().pem_label(), &self.to_der())
    }
}

#[cfg(feature = "pem")]
impl Serialize for KeyParameters {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_pem())
    }
}

#[cfg(feature = "pem")]
impl<'de> Deserialize<'de> for KeyParameters {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        KeyParameters::from_pem(&s).map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;
    use crate::testing::init_tracing;

    // Tests every known-answer domain: the parameters must round trip, good
    // keys must import and re-export, bad keys must be refused.
    #[test]
    fn test_known_answers() {
        init_tracing();

        for kat in fixtures::KNOWN_ANSWERS {
            let mut params = KeyParameters::from_der(kat.family, kat.params).unwrap();
            assert_eq!(params.family(), kat.family);
            assert_eq!(params.to_der(), kat.params);

            for key in kat.keys {
                let res = params.set_encoded_public_key(key.encoded).cloned();
                match (key.bad, res) {
                    (false, Ok(imported)) => {
                        let exported = params.encoded_public_key().unwrap();
                        let mut other = KeyParameters::from_der(kat.family, kat.params).unwrap();
                        assert_eq!(*other.set_encoded_public_key(&exported).unwrap(), imported);
                    }
                    (true, Err(_)) => {}
                    (bad, res) => panic!("{} {}: bad={bad}, got {res:?}", kat.family, key.name),
                }
            }
        }
    }

    // Tests the exact error kinds of the DH vectors, and that a failed import
    // after a good one leaves the good key in place.
    #[cfg(feature = "dh")]
    #[test]
    fn test_dh_import_atomic() {
        init_tracing();

        let mut params = KeyParameters::from_der(Family::Dh, fixtures::DH_PARAMS).unwrap();
        assert!(matches!(params.encoded_public_key(), Err(Error::MissingPublicKey)));

        params.set_encoded_public_key(fixtures::DH_KEY_1).unwrap();
        let good = params.public_key().cloned();

        assert!(matches!(
            params.set_encoded_public_key(fixtures::DH_KEY_3),
            Err(Error::InvalidDomainRange { .. })
        ));
        assert!(matches!(
            params.set_encoded_public_key(fixtures::DH_PARAMS),
            Err(Error::InvalidKeyEncoding { .. })
        ));
        assert!(matches!(
            params.set_encoded_public_key(&[]),
            Err(Error::InvalidKeyEncoding { .. })
        ));
        assert_eq!(params.public_key().cloned(), good);
        assert_eq!(params.encoded_public_key().unwrap(), fixtures::DH_KEY_1);

        // A later good import replaces the key, short keys export padded
        params.set_encoded_public_key(fixtures::DH_KEY_2).unwrap();
        let exported = params.encoded_public_key().unwrap();
        assert_eq!(exported.len(), fixtures::DH_KEY_1.len());
        assert_eq!(exported[0], 0);
        assert_eq!(&exported[1..], fixtures::DH_KEY_2);
    }

    // Tests the exact error kinds of the EC vectors, and that a failed import
    // after a good one leaves the good key in place.
    #[cfg(feature = "ec")]
    #[test]
    fn test_ec_import_atomic() {
        init_tracing();

        let mut params = KeyParameters::from_der(Family::Ec, fixtures::EC_PARAMS).unwrap();
        params.set_encoded_public_key(fixtures::EC_KEY_1).unwrap();

        assert!(matches!(
            params.set_encoded_public_key(fixtures::EC_KEY_2),
            Err(Error::PointNotOnCurve { .. })
        ));
        assert!(matches!(
            params.set_encoded_public_key(fixtures::EC_KEY_3),
            Err(Error::InvalidKeyEncoding { .. })
        ));
        let truncated = &fixtures::EC_KEY_1[..fixtures::EC_KEY_1.len() - 1];
        assert!(matches!(
            params.set_encoded_public_key(truncated),
            Err(Error::InvalidKeyEncoding { .. })
        ));
        assert_eq!(params.encoded_public_key().unwrap(), fixtures::EC_KEY_1);
    }

    // Tests the DER public key forms against the raw octet forms.
    #[test]
    fn test_public_key_der() {
        init_tracing();

        for kat in fixtures::KNOWN_ANSWERS {
            let good = kat.keys.iter().find(|key| !key.bad).unwrap();

            let mut params = KeyParameters::from_der(kat.family, kat.params).unwrap();
            assert!(matches!(params.public_key_der(), Err(Error::MissingPublicKey)));

            params.set_encoded_public_key(good.encoded).unwrap();
            let der = params.public_key_der().unwrap();

            let mut other = KeyParameters::from_der(kat.family, kat.params).unwrap();
            other.set_public_key_der(&der).unwrap();
            assert_eq!(other, params);

            // The raw octets are never a valid DER public key
            assert!(matches!(
                other.set_public_key_der(good.encoded),
                Err(Error::InvalidKeyEncoding { .. })
            ));
            assert_eq!(other, params);
        }
    }

    // Tests that parameter blobs of one family never decode as another.
    #[cfg(all(feature = "dh", feature = "ec"))]
    #[test]
    fn test_algorithm_isolation() {
        assert!(matches!(
            KeyParameters::from_der(Family::Dh, fixtures::EC_PARAMS),
            Err(Error::MalformedEncoding { .. })
        ));
        assert!(matches!(
            KeyParameters::from_der(Family::Ec, fixtures::DH_PARAMS),
            Err(Error::MalformedEncoding { .. })
        ));
        // A group element is not a point either
        let mut params = KeyParameters::from_der(Family::Ec, fixtures::EC_PARAMS).unwrap();
        assert!(params.set_encoded_public_key(fixtures::DH_KEY_1).is_err());
        assert!(params.public_key().is_none());
    }

    // Tests that families compiled out of the build are reported as such.
    #[test]
    fn test_disabled_families() {
        for family in Family::ALL.into_iter().filter(|family| !family.enabled()) {
            assert!(matches!(
                KeyParameters::from_der(family, &[0x30, 0x00]),
                Err(Error::UnsupportedAlgorithm { .. })
            ));
        }
    }

    // Tests the fingerprint against a precomputed hash of the P-256 parameters.
    #[cfg(feature = "ec")]
    #[test]
    fn test_fingerprint() {
        let params = KeyParameters::from_der(Family::Ec, fixtures::EC_PARAMS).unwrap();
        assert_eq!(
            hex::encode(params.fingerprint().to_bytes()),
            "5ac7d2549552a181a460cff4df2bb000c0723e7eadf4f5c26aa506adf0649c24"
        );
        let fingerprint = params.fingerprint();
        assert_eq!(Fingerprint::from_bytes(&fingerprint.to_bytes()), fingerprint);
        assert_ne!(Fingerprint::from_bytes(&[0u8; FINGERPRINT_SIZE]), fingerprint);
    }

    // Tests that PEM armored parameters carry their family in the label.
    #[cfg(feature = "pem")]
    #[test]
    fn test_pem_codec() {
        for kat in fixtures::KNOWN_ANSWERS {
            let params = KeyParameters::from_der(kat.family, kat.params).unwrap();
            let pem = params.to_pem();
            assert!(pem.starts_with(&format!("-----BEGIN {}-----\n", kat.family.pem_label())));

            let parsed = KeyParameters::from_pem(&pem).unwrap();
            assert_eq!(parsed.family(), kat.family);
            assert_eq!(parsed.to_der(), kat.params);
        }
        let pem = crate::pem::encode("PRIVATE KEY", &[0x30, 0x00]);
        assert!(matches!(
            KeyParameters::from_pem(&pem),
            Err(Error::UnsupportedAlgorithm { .. })
        ));
    }

    // Tests that serde serializes the parameters as a PEM string, dropping the
    // public key.
    #[cfg(all(feature = "pem", feature = "ec"))]
    #[test]
    fn test_serde() {
        let mut params = KeyParameters::from_der(Family::Ec, fixtures::EC_PARAMS).unwrap();
        let json = serde_json::to_string(&params).unwrap();
        assert_eq!(
            json,
            r#""-----BEGIN EC PARAMETERS-----\nBggqhkjOPQMBBw==\n-----END EC PARAMETERS-----\n""#
        );
        let parsed: KeyParameters = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, params);

        params.set_encoded_public_key(fixtures::EC_KEY_1).unwrap();
        let parsed: KeyParameters = serde_json::from_str(&serde_json::to_string(&params).unwrap()).unwrap();
        assert!(parsed.public_key().is_none());
        assert_eq!(parsed.domain(), params.domain());

        assert!(serde_json::from_str::<KeyParameters>(r#""not a pem""#).is_err());
    }
}
