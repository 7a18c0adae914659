//! PEM armoring of bare base64 key payloads.
//!
//! Payment gateways usually hand out keys as a single base64 line with the
//! PEM boundaries stripped. [`armor`] puts them back:
//!
//! ```
//! use gateway_rsa::armor::{armor, unarmor, KeyKind};
//!
//! let pem = armor("MIIBCgKCAQEA", KeyKind::Public);
//! assert_eq!(pem, "-----BEGIN PUBLIC KEY-----\nMIIBCgKCAQEA\n-----END PUBLIC KEY-----\n");
//! assert_eq!(unarmor(&pem), "MIIBCgKCAQEA");
//! ```

use alloc::string::String;

/// Number of base64 characters per encapsulated line.
pub const LINE_WIDTH: usize = 64;

const BOUNDARY_DASHES: &str = "-----";

/// Selects the boundary label written by [`armor`].
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum KeyKind {
    /// `RSA PRIVATE KEY`
    Private,
    /// `PUBLIC KEY`
    Public,
}

impl KeyKind {
    /// PEM label for this kind of key.
    pub const fn label(self) -> &'static str {
        match self {
            KeyKind::Private => "RSA PRIVATE KEY",
            KeyKind::Public => "PUBLIC KEY",
        }
    }
}

/// Wrap `raw_base64` in the PEM boundaries for `kind`.
pub fn armor(raw_base64: &str, kind: KeyKind) -> String {
    armor_with_label(raw_base64, kind.label())
}

/// Wrap `raw_base64` in `-----BEGIN {label}-----` / `-----END {label}-----`.
///
/// The body is broken into lines of [`LINE_WIDTH`] characters, the last one
/// holding the remainder. Every line, footer included, ends with `\n`.
pub fn armor_with_label(raw_base64: &str, label: &str) -> String {
    let boundary_len = 2 * (BOUNDARY_DASHES.len() * 2 + label.len()) + "BEGIN END \n\n".len();
    let body_len = raw_base64.len() + raw_base64.len() / LINE_WIDTH + 1;
    let mut out = String::with_capacity(boundary_len + body_len);

    push_boundary(&mut out, "BEGIN", label);

    let mut rest = raw_base64;
    while !rest.is_empty() {
        let split = rest
            .char_indices()
            .nth(LINE_WIDTH)
            .map_or(rest.len(), |(idx, _)| idx);
        let (line, tail) = rest.split_at(split);
        out.push_str(line);
        out.push('\n');
        rest = tail;
    }

    push_boundary(&mut out, "END", label);
    out
}

/// Shorthand for `armor(raw_base64, KeyKind::Private)`.
pub fn format_private_key(raw_base64: &str) -> String {
    armor(raw_base64, KeyKind::Private)
}

/// Shorthand for `armor(raw_base64, KeyKind::Public)`.
pub fn format_public_key(raw_base64: &str) -> String {
    armor(raw_base64, KeyKind::Public)
}

/// Strip PEM boundary lines and whitespace, leaving the base64 body.
///
/// Boundary lines of any label are dropped, so this also accepts text that
/// was never armored.
pub fn unarmor(text: &str) -> String {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.starts_with(BOUNDARY_DASHES))
        .flat_map(str::chars)
        .filter(|c| !c.is_ascii_whitespace())
        .collect()
}

fn push_boundary(out: &mut String, kind: &str, label: &str) {
    out.push_str(BOUNDARY_DASHES);
    out.push_str(kind);
    out.push(' ');
    out.push_str(label);
    out.push_str(BOUNDARY_DASHES);
    out.push('\n');
}
