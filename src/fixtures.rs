// crypto-rs: cryptography primitives and wrappers
// Copyright 2026 Dark Bio AG. All rights reserved.
//
// Use of this source code is governed by a BSD-style
// license that can be found in the LICENSE file.

//! Known-answer vectors for the key parameter codecs.
//!
//! The DH and EC vectors come from OpenSSL's `evp_pkey_dparams_test`. The DSA
//! public key was computed offline as `g^x mod p` over the DSA domain.

use crate::params::Family;
use hex_literal::hex;

/// KeyVector is an encoded public key to import into a known-answer domain.
pub(crate) struct KeyVector {
    pub(crate) name: &'static str,
    pub(crate) bad: bool,
    pub(crate) encoded: &'static [u8],
}

/// KnownAnswer is a DER parameter blob along with public keys to import.
pub(crate) struct KnownAnswer {
    pub(crate) family: Family,
    pub(crate) params: &'static [u8],
    pub(crate) keys: &'static [KeyVector],
}

/// KNOWN_ANSWERS is the table replayed by the self test and the unit tests.
pub(crate) const KNOWN_ANSWERS: &[KnownAnswer] = &[
    #[cfg(feature = "dh")]
    KnownAnswer {
        family: Family::Dh,
        params: DH_PARAMS,
        keys: &[
            KeyVector { name: "full width key", bad: false, encoded: DH_KEY_1 },
            KeyVector { name: "short key", bad: false, encoded: DH_KEY_2 },
            KeyVector { name: "key of one", bad: true, encoded: DH_KEY_3 },
            KeyVector { name: "empty key", bad: true, encoded: &[] },
            KeyVector { name: "parameters as key", bad: true, encoded: DH_PARAMS },
        ],
    },
    #[cfg(feature = "dsa")]
    KnownAnswer {
        family: Family::Dsa,
        params: DSA_PARAMS,
        keys: &[
            KeyVector { name: "full width key", bad: false, encoded: DSA_KEY },
            KeyVector { name: "key outside subgroup", bad: true, encoded: &[0x02] },
            KeyVector { name: "empty key", bad: true, encoded: &[] },
            KeyVector { name: "parameters as key", bad: true, encoded: DSA_PARAMS },
        ],
    },
    #[cfg(feature = "ec")]
    KnownAnswer {
        family: Family::Ec,
        params: EC_PARAMS,
        keys: &[
            KeyVector { name: "uncompressed point", bad: false, encoded: EC_KEY_1 },
            KeyVector { name: "flipped bit", bad: true, encoded: EC_KEY_2 },
            KeyVector { name: "trailing byte", bad: true, encoded: EC_KEY_3 },
            KeyVector { name: "empty key", bad: true, encoded: &[] },
            KeyVector { name: "truncated point", bad: true, encoded: EC_KEY_1.split_at(64).0 },
        ],
    },
];

/// Diffie-Hellman 2048-bit domain (p, g = 2), no subgroup order.
#[cfg(feature = "dh")]
pub(crate) const DH_PARAMS: &[u8] = &hex!(
    "308201080282010100c0d12e1418bd03fd39e199f493062d49c6b5b9f091cb2f"
    "4854797dc4651155f799de428384c0f88889a0ffff7de8ef9ebcf71d706d3a33"
    "4928a1a3e141c48b91f9f2b6e27779387d21b3df799c5e6516001682b2364621"
    "acaf86c7e3104448fbbdad4e11734c25b08c1c1e8e58505e4389e4d934f83bcc"
    "362c1bb3b2770ca596c18a38d4e39c2ade4946c7d4a247c90abd84d41cbcb619"
    "049464fa8a119c5f4a4c0f588102bfcf87272bae8ee2617adbba23392544dc22"
    "75c328d912338432d45dd977f80490380aec849343cee707427d2de0213b1922"
    "a78f5031dad00dd30bdbaded9492ff83067f7fd77b425bba937aeb435fce5926"
    "e876dceee2be367a83020102"
);

/// Valid full width DH public key.
#[cfg(feature = "dh")]
pub(crate) const DH_KEY_1: &[u8] = &hex!(
    "7a49cbc325677a61d060810ff6bd3882e7388ce9d10433bf8a0363b30504b51f"
    "ba9f1a5f313e9679887d3f596d3bf32ff2a64348645a6a321f243762543a7dab"
    "26777cec573ca4bd969daa3b0e9a557e1db4475bea203c6dbed6707da89e84b4"
    "0352f2084c98d34f58b3dfb4e6dc2c4355d1ce2ab3fce02997d8d862c6870a1b"
    "fd7274e0a9fbfa91f2c10993ea63f69a4bdf4edf6bf9ebf6663cfd6f68cbdb6e"
    "4065f7f246e50d9ad96fcf28228fca0b30a09ea513ba727f853d029c978e6fea"
    "6d354ed1787d736092a912f42aac1797f37b790869d19eb5f82a0a2b007b168d"
    "41823a7258578065ae17bc3a5b7e5c2daeb2c226209aaa574b7d4341963ff00d"
);

/// Valid DH public key one byte shorter than the modulus.
#[cfg(feature = "dh")]
pub(crate) const DH_KEY_2: &[u8] = &hex!(
    "73b2229127b945b0fd1766799b327192971d700237707963ed1122e9e6f8ebd7"
    "9000e65c4702fb13ca29141ef46158f6aabbcfa7829a9e7c4a0542ed55d80837"
    "06499bdab3b9c9c05626da601dbc060bb0944b4e95f9b42f4eadf8ab2d19a2e6"
    "6d11fd9b5a2ab081424d8676d59eaff96f79ab1dfed8c8bab6ce03614853d80b"
    "83f0b046a0ea46607a394e466abb076c8c7db77d5be524a5ab418ac463f9ce20"
    "6f584f0e42829e1753a6d6423e80666f2a1c300801995a4f7216edb0d68cf07a"
    "3315c49565ba1137a0cce745654f170a2c62c0653b652a56f7298a9b1bbb0c40"
    "cd664b4f2fbadb59936d34f38dde689978fcac95d9a374e62496986f647176"
);

/// DH public key of value 1, outside of the valid range.
#[cfg(feature = "dh")]
pub(crate) const DH_KEY_3: &[u8] = &hex!("01");

/// DSA 2048/224 domain (p, q, g).
#[cfg(feature = "dsa")]
pub(crate) const DSA_PARAMS: &[u8] = &hex!(
    "308202280282010100f28501a5b9566519ff9a7df990d6aa73acf794fa8a646d"
    "a00142e545fc5372b07ce63bfb09334127bd00b5188762a82bfcd0524a142daa"
    "36c6f3a9e3901b74df0a6d33baf4326dba36681d833650c662c040670ef62200"
    "621b7672625fa0df38b11d26709b8464bb1615c266b997d007f14b700203f1d2"
    "03db788bb4da6f3ce231a81c99ea9c752896821677ac79326187ecb7b4c3ea12"
    "621f08b816abccef28df0607beb0dc78838a708034e691e3d392d9f4565352b7"
    "35f62aec4bcba23cc30c94a74e1c429c7299608cfefb605775f5231112ba97cd"
    "ad5a0ba61f6a482e8dda95c60e14def72255a86b25dfa2ab336556fc784f62df"
    "48ddce8be176f4f67f021d00acb0b8923b6b61cf366df21e5de07bf57348a38b"
    "869e88ce40f8276d02820100776b89d68f3dce523074b2a11396d592f2f16b10"
    "310bf369aabf4b6ccb3f6d58764409f928efa0e4557757e0fbcc9a6a2c90ec72"
    "240b43c5bc31ed1a462c76429ec082fcfff97ee21f39f33bdb2736e7f53bc223"
    "b6d0cf5b852e1b005b31aa728f37ee5671c4fd3c8dfa5babb1a95276a0e4e378"
    "83645dd76cec9b4065e20a111960ddce299fc61d0aab8e5925c50b9c0245ba99"
    "74221dc157ca508c5edfd85d43ae06282982f65aa951a2041dbf881598ce8ab4"
    "3be53029ce0c9bf8dbbf069fd05918d40b94bfe9676b9ef072c6bf798f1ea395"
    "24e3cb58b567d3ae79b0289c9ad0a4e72215c18b04b98aa8b71b6244c6ef4b74"
    "d0fda9b44edd7d3860d140cd"
);

/// Valid DSA public key, g^x mod p for a fixed x.
#[cfg(feature = "dsa")]
pub(crate) const DSA_KEY: &[u8] = &hex!(
    "1831d06e53a242fc5b3f629c2c768d6e1bcadad6a7fcd42653c4d1174cae06e7"
    "0c4471cfba2aa9f65ac9a6305e9456b5cce7df8dc63565ee0f4c298133397e21"
    "da2c55f01a116fdfdcf2641dee52fbcc2acb060d36ce743d2c961b27cc714c32"
    "47594a5791aaecd886f6d59cb94436d6c44f8ef8eafd8d4db79f167e4b96516a"
    "a6a747632d2fc4e837b2057b8d6f03a948cbcbaf60be533c1dec79a8078e59bc"
    "86274d32fc2dc622302e56da3b0fad0c2b289c705991ef6ff97be35052de3ac9"
    "d7bd63a3a8733e9eeb68717860d4be1e029c2cfd002171834e956c4aba628500"
    "e6618e2a3530e718ff93aa556d80b2fe0d0934ddaa59339130db7abf39834c67"
);

/// Named curve parameters for P-256.
#[cfg(feature = "ec")]
pub(crate) const EC_PARAMS: &[u8] = &hex!("06082a8648ce3d030107");

/// Valid uncompressed P-256 point.
#[cfg(feature = "ec")]
pub(crate) const EC_KEY_1: &[u8] = &hex!(
    "04c865456373e50a611dcf60762ce7360b76c292fca456eec262050080e44f07"
    "3bf459b8c3b31f7736164c722ac08989d61614ee2f5ade9e83c578d00b69b4b9"
    "f1"
);

/// EC_KEY_1 with a single bit of x flipped.
#[cfg(feature = "ec")]
pub(crate) const EC_KEY_2: &[u8] = &hex!(
    "04c865456373e50a611dcf60762ce7360b77c292fca456eec262050080e44f07"
    "3bf459b8c3b31f7736164c722ac08989d61614ee2f5ade9e83c578d00b69b4b9"
    "f1"
);

/// EC_KEY_1 with an extra trailing byte.
#[cfg(feature = "ec")]
pub(crate) const EC_KEY_3: &[u8] = &hex!(
    "04c865456373e50a611dcf60762ce7360b76c292fca456eec262050080e44f07"
    "3bf459b8c3b31f7736164c722ac08989d61614ee2f5ade9e83c578d00b69b4b9"
    "f1aa"
);
