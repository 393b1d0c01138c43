// crypto-rs: cryptography primitives and wrappers
// Copyright 2025 Dark Bio AG. All rights reserved.
//
// Use of this source code is governed by a BSD-style
// license that can be found in the LICENSE file.

//! Strict PEM armor for key parameter blocks.
//!
//! Decoding rules:
//!   - The header starts at byte 0 (no leading whitespace)
//!   - Line endings are consistent (\n or \r\n throughout)
//!   - The footer label matches the header label
//!   - At most one line ending follows the footer
//!   - The base64 body is strictly decoded (canonical padding, no stray bytes)

use crate::error::{Error, Result};
use base64::Engine;
use base64::engine::general_purpose::STANDARD;

const BEGIN: &str = "-----BEGIN ";
const END: &str = "-----END ";
const DASHES: &str = "-----";

/// Number of base64 characters per emitted body line.
const LINE_WIDTH: usize = 64;

fn fail(details: impl Into<String>) -> Error {
    Error::Pem {
        details: details.into(),
    }
}

/// decode parses a single PEM block, returning its label and binary payload.
pub fn decode(data: &str) -> Result<(String, Vec<u8>)> {
    if !data.starts_with(BEGIN) {
        return Err(fail("missing PEM header"));
    }
    let (header, rest) = data
        .split_once('\n')
        .ok_or_else(|| fail("incomplete PEM header"))?;

    // The header line decides the line ending for the whole block
    let (header, crlf) = match header.strip_suffix('\r') {
        Some(header) => (header, true),
        None => (header, false),
    };
    let label = header[BEGIN.len()..]
        .strip_suffix(DASHES)
        .ok_or_else(|| fail("malformed PEM header"))?;
    if label.is_empty() {
        return Err(fail("empty PEM label"));
    }
    let footer = format!("{END}{label}{DASHES}");
    let footer_at = rest
        .find(&footer)
        .ok_or_else(|| fail("missing PEM footer"))?;

    let trailer = &rest[footer_at + footer.len()..];
    let eol = if crlf { "\r\n" } else { "\n" };
    if !trailer.is_empty() && trailer != eol {
        return Err(fail("trailing data after PEM block"));
    }
    let body = rest[..footer_at]
        .strip_suffix(eol)
        .ok_or_else(|| fail("PEM body must end with a line break before the footer"))?;
    if body.is_empty() {
        return Err(fail("empty PEM body"));
    }
    let mut b64 = String::with_capacity(body.len());
    for line in body.split(eol) {
        if line.contains(['\r', '\n']) {
            return Err(fail("inconsistent PEM line endings"));
        }
        b64.push_str(line);
    }
    let payload = STANDARD
        .decode(b64.as_bytes())
        .map_err(|err| fail(format!("invalid base64 body: {err}")))?;

    Ok((label.to_string(), payload))
}

/// encode wraps the payload into a PEM block with the given label, using
/// 64 column base64 lines and \n line endings.
pub fn encode(label: &str, data: &[u8]) -> String {
    let b64 = STANDARD.encode(data);

    let mut out = String::with_capacity(b64.len() + b64.len() / LINE_WIDTH + 2 * label.len() + 40);
    out.push_str(BEGIN);
    out.push_str(label);
    out.push_str(DASHES);
    out.push('\n');

    // Base64 output is pure ASCII, so byte offsets are char boundaries
    let mut line = b64.as_str();
    while !line.is_empty() {
        let (head, tail) = line.split_at(line.len().min(LINE_WIDTH));
        out.push_str(head);
        out.push('\n');
        line = tail;
    }
    out.push_str(END);
    out.push_str(label);
    out.push_str(DASHES);
    out.push('\n');
    out
}
