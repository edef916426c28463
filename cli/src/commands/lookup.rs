use std::sync::Arc;

use ipterm_common::config::Config;
use ipterm_common::messages;
use ipterm_common::network::record::LookupRecord;
use ipterm_common::success;
use ipterm_core::controller::LookupController;
use ipterm_core::lookup::IpApiClient;
use ipterm_core::session::{Phase, Session};

use crate::iprint;
use crate::terminal::{format, print, spinner};

pub async fn lookup(address: &str, json: bool, cfg: &Config) -> anyhow::Result<()> {
    let client = IpApiClient::new(&cfg.endpoint)?;
    let mut controller = LookupController::new(Arc::new(client));
    controller.edit(address);

    let pb = controller
        .session()
        .can_submit()
        .then(|| spinner::start_lookup_spinner(address, cfg.quiet));

    let phase = controller
        .submit(|left| {
            if let Some(pb) = &pb {
                spinner::report_countdown(pb, address, left);
            }
        })
        .await;

    if let Some(pb) = pb {
        pb.finish_and_clear();
    }

    if json && phase == Phase::Displaying {
        if let Some(record) = controller.session().record() {
            println!("{}", serde_json::to_string_pretty(record)?);
        }
        return Ok(());
    }

    show_outcome(controller.session(), cfg);
    Ok(())
}

/// Renders whatever the session ended with: the validation message, the
/// error banner, or the record.
pub fn show_outcome(session: &Session, cfg: &Config) {
    match session.phase() {
        Phase::Invalid => {
            if let Some(err) = session.validation_error() {
                print::validation_error(&err.to_string());
            }
        }
        Phase::ErrorDisplayed => {
            if let Some(msg) = session.request_error() {
                print::error_banner(msg);
            }
        }
        Phase::Displaying => {
            if let Some(record) = session.record() {
                print_record(record, cfg);
            }
        }
        Phase::Idle | Phase::Requesting => {}
    }
}

pub fn print_record(record: &LookupRecord, cfg: &Config) {
    if cfg.quiet == 0 {
        success!("{}", messages::RESULTS_HEADING);
        iprint!();
    }

    let (rows, width) = format::record_rows(record);
    print::GLOBAL_KEY_WIDTH.set(width);
    for (key, value) in rows {
        print::aligned_line(&key, value);
    }

    print::footer(cfg.quiet);
}
