// crypto-rs: cryptography primitives and wrappers
// Copyright 2026 Dark Bio AG. All rights reserved.
//
// Use of this source code is governed by a BSD-style
// license that can be found in the LICENSE file.

use thiserror::Error;

/// Result type used by the key parameter APIs.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type used by the key parameter APIs.
#[derive(Debug, Error)]
pub enum Error {
    #[error("malformed DER encoding: {details}")]
    MalformedEncoding { details: String },
    #[error("unsupported algorithm: {name}")]
    UnsupportedAlgorithm { name: String },
    #[error("invalid public key encoding: {reason}")]
    InvalidKeyEncoding { reason: &'static str },
    #[error("public key outside of the domain range: {reason}")]
    InvalidDomainRange { reason: &'static str },
    #[error("public key point is not on curve {curve}")]
    PointNotOnCurve { curve: &'static str },
    #[error("key parameters have no public key attached")]
    MissingPublicKey,
    #[error("PEM encoding error: {details}")]
    Pem { details: String },
}

impl From<der::Error> for Error {
    fn from(err: der::Error) -> Self {
        Error::MalformedEncoding {
            details: err.to_string(),
        }
    }
}
