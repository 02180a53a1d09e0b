//! This module holds the SIP URI pattern source and its two compiled forms, one per regex
//! engine. The matchers are built once, on first use, so compilation cost stays out of any
//! measured interval.

use once_cell::sync::Lazy;
use regex::Regex;

/// Matches a SIP/tel/sips URI: an optional quoted display name, the scheme, optional
/// user-info, a host or bracketed IPv6 literal, an optional port, and a trailing parameter
/// suffix. Groups: 1 display name, 2 scheme, 4 user-info, 5 host, 6 port, 7 suffix.
pub const SIP_URI_PATTERN: &str = r#"^["]{0,1}([^"]*)["]{0,1}[ ]*<(sip|tel|sips):(([^@]*)@){0,1}([^>^:]*|\[[a-fA-F0-9:]*\]):{0,1}([0-9]*){0,1}>(;.*){0,1}$"#;

/// The pattern as compiled by the automata-based engine.
pub static SIP_URI: Lazy<Regex> = Lazy::new(|| Regex::new(SIP_URI_PATTERN).unwrap());

/// The pattern as compiled by the backtracking engine.
pub static SIP_URI_FANCY: Lazy<fancy_regex::Regex> =
    Lazy::new(|| fancy_regex::Regex::new(SIP_URI_PATTERN).unwrap());

/// Compiles a fresh matcher with the automata-based engine.
pub fn compile_regex() -> Result<Regex, regex::Error> {
    Regex::new(SIP_URI_PATTERN)
}

/// Compiles a fresh matcher with the backtracking engine.
pub fn compile_fancy() -> Result<fancy_regex::Regex, fancy_regex::Error> {
    fancy_regex::Regex::new(SIP_URI_PATTERN)
}
