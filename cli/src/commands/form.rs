use std::future;
use std::io::{self, Write};
use std::sync::Arc;

use colored::*;
use crossterm::{
    cursor::MoveToColumn,
    queue,
    style::Print,
    terminal::{Clear, ClearType},
};
use ipterm_common::config::Config;
use ipterm_common::messages;
use ipterm_core::controller::{LookupController, LookupEvent, PendingLookup};
use ipterm_core::lookup::IpApiClient;
use ipterm_core::session::Session;
use unicode_width::UnicodeWidthStr;

use super::lookup;
use crate::terminal::colors;
use crate::terminal::input::{FormKey, InputHandle};
use crate::terminal::print;

const PROMPT: &str = ">";

enum FormEvent {
    Key(Option<FormKey>),
    Lookup(LookupEvent),
}

/// Interactive single-line form: every key press edits the address and
/// re-validates it, Enter submits, Esc or Ctrl-C leaves.
pub async fn form(cfg: &Config) -> anyhow::Result<()> {
    let client = IpApiClient::new(&cfg.endpoint)?;
    let mut controller = LookupController::new(Arc::new(client));

    if cfg.quiet == 0 {
        print::print_status(format!(
            "{} {}  {} {}",
            "[Enter]".color(colors::ACCENT),
            messages::SUBMIT,
            "[Esc]".color(colors::ACCENT),
            "quit"
        ));
    }

    let mut input = InputHandle::start()?;
    let mut pending: Option<PendingLookup> = None;
    draw_prompt(controller.session())?;

    loop {
        let event = tokio::select! {
            key = input.next_key() => FormEvent::Key(key),
            event = next_lookup_event(&mut pending) => FormEvent::Lookup(event),
        };

        match event {
            FormEvent::Key(None) | FormEvent::Key(Some(FormKey::Quit)) => break,
            FormEvent::Key(Some(FormKey::Submit)) => {
                // begin() logs, so it runs with line output restored
                clear_prompt()?;
                if let Some(started) = input.suspend(|| controller.begin()) {
                    pending = Some(started);
                }
            }
            FormEvent::Key(Some(key)) => edit_with_key(&mut controller, key),
            FormEvent::Lookup(LookupEvent::Tick(_)) => controller.tick(),
            FormEvent::Lookup(LookupEvent::Finished(outcome)) => {
                pending = None;
                clear_prompt()?;
                input.suspend(|| {
                    controller.finish(outcome);
                    lookup::show_outcome(controller.session(), cfg);
                });
            }
        }

        draw_prompt(controller.session())?;
    }

    clear_prompt()?;
    Ok(())
}

fn edit_with_key(controller: &mut LookupController, key: FormKey) {
    match key {
        FormKey::Char(c) => {
            let mut value = controller.session().address().to_string();
            value.push(c);
            controller.edit(value);
        }
        FormKey::Backspace => {
            let mut value = controller.session().address().to_string();
            value.pop();
            controller.edit(value);
        }
        FormKey::ClearLine => controller.edit(""),
        FormKey::Submit | FormKey::Quit => {}
    }
}

async fn next_lookup_event(pending: &mut Option<PendingLookup>) -> LookupEvent {
    match pending {
        Some(request) => request.next_event().await,
        None => future::pending().await,
    }
}

fn status_line(session: &Session) -> ColoredString {
    if session.is_busy() {
        format!("{} {}", messages::PROCESSING, session.countdown())
            .color(colors::BUSY)
            .bold()
    } else if let Some(err) = session.validation_error() {
        err.to_string().color(colors::ERROR)
    } else if session.can_submit() {
        format!("[Enter] {}", messages::SUBMIT).color(colors::ACCENT)
    } else {
        "".normal()
    }
}

fn draw_prompt(session: &Session) -> io::Result<()> {
    let address = session.address();
    let shown = if address.is_empty() {
        messages::PLACEHOLDER.dimmed()
    } else {
        address.color(colors::PRIMARY)
    };

    let mut stderr = io::stderr();
    queue!(
        stderr,
        MoveToColumn(0),
        Clear(ClearType::CurrentLine),
        Print(format!(
            "{} {}  {}",
            PROMPT.color(colors::SEPARATOR),
            shown,
            status_line(session)
        )),
        MoveToColumn(cursor_column(address)),
    )?;
    stderr.flush()
}

fn clear_prompt() -> io::Result<()> {
    let mut stderr = io::stderr();
    queue!(stderr, MoveToColumn(0), Clear(ClearType::CurrentLine))?;
    stderr.flush()
}

fn cursor_column(address: &str) -> u16 {
    let width = PROMPT.width() + 1 + address.width();
    u16::try_from(width).unwrap_or(u16::MAX)
}
