//! # Address Literal Validation
//!
//! Decides whether free-form user input is an IPv4 or IPv6 literal.
//!
//! Both checks are purely syntactic. Nothing is normalized, so `"010.0.0.1"`
//! passes as IPv4 and `"fe80::1%eth0"` passes as IPv6 with its zone intact.
//! The standard library parsers are deliberately not used here: they reject
//! leading zeros and zone ids that the lookup form has always accepted.

use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

use crate::messages;

static IPV4_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([0-9]{1,3}\.){3}[0-9]{1,3}$").expect("valid IPv4 grammar"));

const H16: &str = "[a-fA-F0-9]";
const DEC_OCTET: &str = r"(?:25[0-5]|(?:2[0-4]|1{0,1}[0-9]){0,1}[0-9])";

static IPV6_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    let ipv4 = format!(r"(?:{DEC_OCTET}\.){{3,3}}{DEC_OCTET}");
    let alternatives = [
        // 1:2:3:4:5:6:7:8
        format!("(?:{H16}{{1,4}}:){{7}}{H16}{{1,4}}"),
        // 1::  ..  1:2:3:4:5:6:7::
        format!("(?:{H16}{{1,4}}:){{1,7}}:"),
        // 1::8  ..  1:2:3:4:5:6::8
        format!("(?:{H16}{{1,4}}:){{1,6}}:{H16}{{1,4}}"),
        format!("(?:{H16}{{1,4}}:){{1,5}}(?::{H16}{{1,4}}){{1,2}}"),
        format!("(?:{H16}{{1,4}}:){{1,4}}(?::{H16}{{1,4}}){{1,3}}"),
        format!("(?:{H16}{{1,4}}:){{1,3}}(?::{H16}{{1,4}}){{1,4}}"),
        format!("(?:{H16}{{1,4}}:){{1,2}}(?::{H16}{{1,4}}){{1,5}}"),
        format!("{H16}{{1,4}}:(?:(?::{H16}{{1,4}}){{1,6}})"),
        // ::2:3:4:5:6:7:8, ::8, ::
        format!(":(?:(?::{H16}{{1,4}}){{1,7}}|:)"),
        // link-local with zone index
        format!("fe80:(?::{H16}{{0,4}}){{0,4}}%[0-9a-zA-Z]{{1,}}"),
        // ::255.255.255.255, ::ffff:255.255.255.255, ::ffff:0:255.255.255.255
        format!("::(?:ffff(?::0{{1,4}}){{0,1}}:){{0,1}}{ipv4}"),
        // 2001:db8:3:4::192.0.2.33
        format!("(?:{H16}{{1,4}}:){{1,4}}:{ipv4}"),
    ];
    let pattern = format!("^(?:{})$", alternatives.join("|"));
    Regex::new(&pattern).expect("valid IPv6 grammar")
});

/// Which grammar an accepted literal matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressKind {
    V4,
    V6,
}

/// Why an address was rejected. `Display` yields the text shown under the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{}", messages::ADDRESS_REQUIRED)]
    Required,
    #[error("{}", messages::ADDRESS_BAD_FORMAT)]
    BadFormat,
}

/// Dotted-quad check: four groups of one to three digits, each at most 255.
pub fn is_valid_ipv4(value: &str) -> bool {
    if !IPV4_PATTERN.is_match(value) {
        return false;
    }
    value
        .split('.')
        .all(|group| group.parse::<u16>().is_ok_and(|octet| octet <= 255))
}

/// Full IPv6 textual grammar, including `::` compression, zone ids and
/// embedded dotted quads.
pub fn is_valid_ipv6(value: &str) -> bool {
    IPV6_PATTERN.is_match(value)
}

/// Classifies `value`, reporting empty input separately from malformed input.
pub fn validate(value: &str) -> Result<AddressKind, ValidationError> {
    if value.is_empty() {
        return Err(ValidationError::Required);
    }
    if is_valid_ipv4(value) {
        return Ok(AddressKind::V4);
    }
    if is_valid_ipv6(value) {
        return Ok(AddressKind::V6);
    }
    Err(ValidationError::BadFormat)
}
