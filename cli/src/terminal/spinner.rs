use std::time::Duration;

use colored::*;
use indicatif::{ProgressBar, ProgressStyle};
use ipterm_common::messages;
use ipterm_core::session::COUNTDOWN_START;

use crate::terminal::colors;

const TICK_STRINGS: &[&str] = &[
    "▁▁▁▁▁",
    "▁▂▂▂▁",
    "▁▄▂▄▁",
    "▂▄▆▄▂",
    "▄▆█▆▄",
    "▂▄▆▄▂",
    "▁▄▂▄▁",
    "▁▂▂▂▁",
];

/// Spinner shown while a lookup is in flight. Hidden at `-qq`.
pub fn start_lookup_spinner(address: &str, q_level: u8) -> ProgressBar {
    if q_level > 1 {
        return ProgressBar::hidden();
    }

    let pb: ProgressBar = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::with_template("{spinner:.green} {msg}") {
        pb.set_style(style.tick_strings(TICK_STRINGS));
    }
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_message(countdown_message(address, COUNTDOWN_START));
    pb
}

pub fn report_countdown(pb: &ProgressBar, address: &str, left: u8) {
    pb.set_message(countdown_message(address, left));
}

fn countdown_message(address: &str, left: u8) -> String {
    format!(
        "{} {} {}",
        messages::PROCESSING.color(colors::TEXT_DEFAULT),
        address.color(colors::PRIMARY),
        left.to_string().color(colors::BUSY).bold()
    )
}
