//! The fixed input corpus. The five strings exercise the pattern's branches: quoted and
//! absent display names, user-info, port, an IPv6 literal host, and trailing parameters.

pub const TEST_STRINGS: &[&str] = &[
    "\"display_name\"<sip:0312341234@10.0.0.1:5060>;user=phone;hogehoge",
    "<sip:0312341234@10.0.0.1>",
    "\"display_name\"<sip:0312341234@10.0.0.1>",
    "<sip:whois.this>;user=phone",
    "\"0333334444\"<sip:[2001:30:fe::4:123]>;user=phone",
];
