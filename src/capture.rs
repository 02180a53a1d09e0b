//! Accessors for the URI segments captured by the pattern. The pattern uses numbered
//! groups, so each segment is addressed by its group index.

use crate::pattern::SIP_URI;

const DISPLAY_NAME: usize = 1;
const SCHEME: usize = 2;
const USER_INFO: usize = 4;
const HOST: usize = 5;
const PORT: usize = 6;
const PARAMS: usize = 7;

/// The unquoted display name, if the URI carries one.
pub fn display_name(s: &str) -> Option<&str> {
    group(s, DISPLAY_NAME)
}

/// The URI scheme: sip, tel or sips.
pub fn scheme(s: &str) -> Option<&str> {
    group(s, SCHEME)
}

pub fn user_info(s: &str) -> Option<&str> {
    group(s, USER_INFO)
}

/// The host, either a name, an address, or a bracketed IPv6 literal.
pub fn host(s: &str) -> Option<&str> {
    group(s, HOST)
}

pub fn port(s: &str) -> Option<&str> {
    group(s, PORT)
}

/// The trailing parameter suffix, leading semicolon included.
pub fn params(s: &str) -> Option<&str> {
    group(s, PARAMS)
}

// An optional segment that doesn't occur in the input still participates as an empty
// submatch under this pattern, so empty captures are reported as absent.
fn group(s: &str, ix: usize) -> Option<&str> {
    SIP_URI
        .captures(s)?
        .get(ix)
        .map(|m| m.as_str())
        .filter(|text| !text.is_empty())
}
