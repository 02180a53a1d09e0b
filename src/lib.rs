mod capture;
mod corpus;
mod exercise;
mod pattern;

pub use capture::{display_name, host, params, port, scheme, user_info};
pub use corpus::TEST_STRINGS;
pub use exercise::{exec_fancy, exec_regex};
pub use pattern::{compile_fancy, compile_regex, SIP_URI_PATTERN};

/// Matches s against the SIP URI pattern with the automata-based engine. The matcher is
/// compiled once, on first use, so repeated calls only pay for the match itself.
pub fn match_sip(s: &str) -> bool {
    pattern::SIP_URI.is_match(s)
}

/// Matches s with the backtracking engine. That engine can fail at match time (e.g. when
/// it exceeds its internal backtracking limit), so the outcome is a Result.
pub fn match_sip_fancy(s: &str) -> Result<bool, fancy_regex::Error> {
    pattern::SIP_URI_FANCY.is_match(s)
}
