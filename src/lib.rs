// crypto-rs: cryptography primitives and wrappers
// Copyright 2026 Dark Bio AG. All rights reserved.
//
// Use of this source code is governed by a BSD-style
// license that can be found in the LICENSE file.

//! DER key parameter codecs and encoded public key import for DH, DSA and EC.

#[cfg(not(any(feature = "dh", feature = "dsa", feature = "ec")))]
compile_error!("at least one of the `dh`, `dsa` or `ec` features must be enabled");

pub mod error;
pub mod params;
pub mod selftest;

#[cfg(feature = "dh")]
pub mod dh;
#[cfg(feature = "dsa")]
pub mod dsa;
#[cfg(feature = "ec")]
pub mod ec;
#[cfg(feature = "pem")]
pub mod pem;

#[cfg(any(feature = "dh", feature = "dsa"))]
mod ffc;

mod fixtures;

#[cfg(test)]
mod testing;

pub use error::{Error, Result};
pub use params::{Domain, Family, Fingerprint, KeyParameters, PublicKey};
