use ipterm_common::network::address;

use crate::terminal::{format, print};

/// Prints which grammar `input` matched, or why it matched neither.
pub fn check(input: &str) {
    match address::validate(input) {
        Ok(kind) => {
            print::GLOBAL_KEY_WIDTH.set(4);
            print::aligned_line(format::kind_label(kind), format::colored_address(input, kind));
        }
        Err(err) => print::validation_error(&err.to_string()),
    }
}
