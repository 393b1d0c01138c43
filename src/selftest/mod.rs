// crypto-rs: cryptography primitives and wrappers
// Copyright 2026 Dark Bio AG. All rights reserved.
//
// Use of this source code is governed by a BSD-style
// license that can be found in the LICENSE file.

//! Known-answer self test over the embedded parameter and key vectors.
//!
//! Every case is announced to a caller supplied callback. Cases producing
//! output (parameter round trips and accepted key re-exports) additionally
//! raise a `Corrupt` event: if the callback answers `false`, the first byte of
//! the output is flipped before it is checked, which must make the case fail.

use crate::fixtures::{self, KnownAnswer};
use crate::params::KeyParameters;
use std::fmt;

/// Phase is the stage of a self test case an event reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Start,
    Corrupt,
    Pass,
    Fail,
}

/// Kind is the category of a self test case.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    /// DER parameter decode and re-encode.
    Parameters,
    /// Encoded public key import, expected to succeed or to be refused.
    PublicKey,
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Kind::Parameters => f.write_str("parameters"),
            Kind::PublicKey => f.write_str("public key"),
        }
    }
}

/// Event is a progress notification for a single self test case.
#[derive(Debug, Clone, Copy)]
pub struct Event<'a> {
    pub phase: Phase,
    pub kind: Kind,
    pub desc: &'a str,
}

/// Report collects the outcome of a self test run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report {
    pub passed: Vec<String>,
    pub failed: Vec<String>,
}

impl Report {
    /// ok reports whether every case passed.
    pub fn ok(&self) -> bool {
        self.failed.is_empty()
    }
}

/// run replays every compiled in known-answer vector, reporting progress to
/// the callback. The callback's return value only matters for `Corrupt`
/// events.
pub fn run<F>(callback: F) -> Report
where
    F: FnMut(&Event<'_>) -> bool,
{
    let mut runner = Runner {
        callback,
        report: Report::default(),
    };
    for kat in fixtures::KNOWN_ANSWERS {
        runner.known_answer(kat);
    }
    runner.report
}

struct Runner<F> {
    callback: F,
    report: Report,
}

impl<F> Runner<F>
where
    F: FnMut(&Event<'_>) -> bool,
{
    fn emit(&mut self, phase: Phase, kind: Kind, desc: &str) -> bool {
        (self.callback)(&Event { phase, kind, desc })
    }

    fn corrupt(&mut self, kind: Kind, desc: &str, output: &mut [u8]) {
        if !self.emit(Phase::Corrupt, kind, desc) {
            if let Some(byte) = output.first_mut() {
                *byte ^= 0x01;
            }
        }
    }

    fn finish(&mut self, kind: Kind, desc: String, ok: bool) {
        if ok {
            tracing::info!(%kind, desc = %desc, "self test passed");
            self.emit(Phase::Pass, kind, &desc);
            self.report.passed.push(desc);
        } else {
            tracing::error!(%kind, desc = %desc, "self test failed");
            self.emit(Phase::Fail, kind, &desc);
            self.report.failed.push(desc);
        }
    }

    fn known_answer(&mut self, kat: &KnownAnswer) {
        let desc = format!("{} parameters", kat.family);
        self.emit(Phase::Start, Kind::Parameters, &desc);

        let params = match KeyParameters::from_der(kat.family, kat.params) {
            Ok(params) => params,
            Err(err) => {
                tracing::error!(family = %kat.family, %err, "known-answer parameters rejected");
                self.finish(Kind::Parameters, desc, false);
                for key in kat.keys {
                    let desc = format!("{} {}", kat.family, key.name);
                    self.emit(Phase::Start, Kind::PublicKey, &desc);
                    self.finish(Kind::PublicKey, desc, false);
                }
                return;
            }
        };
        let mut output = params.to_der();
        self.corrupt(Kind::Parameters, &desc, &mut output);
        self.finish(Kind::Parameters, desc, output == kat.params);

        for key in kat.keys {
            let desc = format!("{} {}", kat.family, key.name);
            self.emit(Phase::Start, Kind::PublicKey, &desc);

            let mut imported = params.clone();
            let accepted = imported.set_encoded_public_key(key.encoded).is_ok();
            let ok = match (key.bad, accepted) {
                (true, accepted) => !accepted,
                (false, false) => false,
                (false, true) => self.reimport(&params, &imported, &desc),
            };
            self.finish(Kind::PublicKey, desc, ok);
        }
    }

    // Checks that the exported form of an imported key imports back into the
    // very same key.
    fn reimport(&mut self, params: &KeyParameters, imported: &KeyParameters, desc: &str) -> bool {
        let Ok(mut output) = imported.encoded_public_key() else {
            return false;
        };
        self.corrupt(Kind::PublicKey, desc, &mut output);

        let mut check = params.clone();
        match check.set_encoded_public_key(&output) {
            Ok(key) => Some(key) == imported.public_key(),
            Err(_) => false,
        }
    }
}
