use crate::terminal::colors;
use colored::*;
use ipterm_common::network::address::AddressKind;
use ipterm_common::network::record::LookupRecord;

pub fn kind_label(kind: AddressKind) -> &'static str {
    match kind {
        AddressKind::V4 => "IPv4",
        AddressKind::V6 => "IPv6",
    }
}

pub fn colored_address(address: &str, kind: AddressKind) -> ColoredString {
    match kind {
        AddressKind::V4 => address.color(colors::IPV4_ADDR),
        AddressKind::V6 => address.color(colors::IPV6_ADDR),
    }
}

/// Rows ready for aligned printing, plus the widest label.
pub fn record_rows(record: &LookupRecord) -> (Vec<(String, String)>, usize) {
    let rows = record.rows();
    let width = rows.iter().map(|(key, _)| key.len()).max().unwrap_or(0);
    (rows, width)
}
