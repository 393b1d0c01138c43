// crypto-rs: cryptography primitives and wrappers
// Copyright 2026 Dark Bio AG. All rights reserved.
//
// Use of this source code is governed by a BSD-style
// license that can be found in the LICENSE file.

#![no_main]

use darkbio_keyparams::{Family, KeyParameters};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Split the input into a parameter blob and a public key candidate
    let split = data.first().map_or(0, |&b| b as usize).min(data.len().saturating_sub(1));
    let (der, key) = data.get(1..).unwrap_or_default().split_at(split);

    for family in Family::ALL {
        let Ok(mut params) = KeyParameters::from_der(family, der) else {
            continue;
        };
        // Anything that decodes must re-encode to the exact same bytes
        assert_eq!(params.to_der(), der, "{family} round trip mismatch");

        let before = params.clone();
        if params.set_encoded_public_key(key).is_ok() {
            let exported = params.encoded_public_key().unwrap();
            let mut again = before.clone();
            again.set_encoded_public_key(&exported).unwrap();
            assert_eq!(again, params, "{family} public key round trip mismatch");

            let der = params.public_key_der().unwrap();
            let mut again = before.clone();
            again.set_public_key_der(&der).unwrap();
            assert_eq!(again, params, "{family} DER public key round trip mismatch");
        } else {
            assert_eq!(params, before, "{family} failed import mutated parameters");
        }
        let prior = params.clone();
        if params.set_public_key_der(key).is_err() {
            assert_eq!(params, prior, "{family} failed DER import mutated parameters");
        }
    }
    if let Ok(text) = std::str::from_utf8(data) {
        if let Ok(params) = KeyParameters::from_pem(text) {
            assert_eq!(KeyParameters::from_pem(&params.to_pem()).unwrap(), params);
        }
    }
});
