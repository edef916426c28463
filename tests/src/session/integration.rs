#![cfg(test)]
use std::sync::Arc;
use std::time::Duration;

use ipterm_common::messages;
use ipterm_common::network::address::ValidationError;
use ipterm_common::network::record::FIELDS;
use ipterm_core::controller::{LookupController, LookupEvent};
use ipterm_core::lookup::IpApiClient;
use ipterm_core::session::{COUNTDOWN_START, Phase};
use ipterm_integration_tests::{fail_body, google_dns_body, mount_lookup};
use wiremock::{MockServer, ResponseTemplate};

fn controller_for(server: &MockServer) -> LookupController {
    let client = IpApiClient::new(&server.uri()).unwrap();
    LookupController::new(Arc::new(client))
}

#[tokio::test]
async fn submit_displays_every_field() {
    let server = MockServer::start().await;
    mount_lookup(
        &server,
        "8.8.8.8",
        ResponseTemplate::new(200).set_body_json(google_dns_body()),
        1,
    )
    .await;

    let mut controller = controller_for(&server);
    controller.edit("8.8.8.8");
    let phase = controller.submit(|_| {}).await;

    assert_eq!(phase, Phase::Displaying);
    let session = controller.session();
    assert!(!session.is_busy());
    assert_eq!(session.countdown(), 0);
    assert!(session.request_error().is_none());

    let rows = session.record().unwrap().rows();
    let labels: Vec<&str> = rows.iter().map(|(k, _)| k.as_str()).collect();
    let expected: Vec<&str> = FIELDS.iter().copied().filter(|f| *f != "message").collect();
    assert_eq!(labels, expected);
}

#[tokio::test]
async fn invalid_input_never_reaches_service() {
    let server = MockServer::start().await;
    mount_lookup(
        &server,
        "256.1.1.1",
        ResponseTemplate::new(200).set_body_json(google_dns_body()),
        0,
    )
    .await;

    let mut controller = controller_for(&server);

    assert_eq!(controller.submit(|_| {}).await, Phase::Invalid);
    assert_eq!(
        controller.session().validation_error(),
        Some(ValidationError::Required)
    );

    controller.edit("256.1.1.1");
    assert!(!controller.session().can_submit());
    assert_eq!(controller.submit(|_| {}).await, Phase::Invalid);
    assert_eq!(
        controller.session().validation_error(),
        Some(ValidationError::BadFormat)
    );
}

#[tokio::test]
async fn failure_replaces_previous_record() {
    let server = MockServer::start().await;
    mount_lookup(
        &server,
        "8.8.8.8",
        ResponseTemplate::new(200).set_body_json(google_dns_body()),
        1,
    )
    .await;
    mount_lookup(
        &server,
        "192.168.1.1",
        ResponseTemplate::new(200).set_body_json(fail_body(None)),
        1,
    )
    .await;

    let mut controller = controller_for(&server);
    controller.edit("8.8.8.8");
    assert_eq!(controller.submit(|_| {}).await, Phase::Displaying);

    controller.edit("192.168.1.1");
    assert_eq!(controller.submit(|_| {}).await, Phase::ErrorDisplayed);

    let session = controller.session();
    assert_eq!(session.request_error(), Some(messages::LOOKUP_FAILED));
    assert!(session.record().is_none());
}

#[tokio::test]
async fn in_flight_request_blocks_second_submit() {
    let server = MockServer::start().await;
    mount_lookup(
        &server,
        "1.1.1.1",
        ResponseTemplate::new(200)
            .set_body_json(google_dns_body())
            .set_delay(Duration::from_millis(1500)),
        1,
    )
    .await;

    let mut controller = controller_for(&server);
    controller.edit("1.1.1.1");

    let mut pending = controller.begin().expect("valid address is submitted");
    assert!(controller.session().is_busy());
    assert_eq!(controller.session().countdown(), COUNTDOWN_START);
    assert!(controller.begin().is_none());

    // editing during the request keeps it running
    controller.edit("1.1.1.");
    assert_eq!(controller.session().phase(), Phase::Requesting);

    let mut ticks = 0;
    let outcome = loop {
        match pending.next_event().await {
            LookupEvent::Tick(_) => {
                ticks += 1;
                controller.tick();
            }
            LookupEvent::Finished(outcome) => break outcome,
        }
    };
    drop(pending);
    controller.finish(outcome);

    assert!(ticks >= 1);
    let session = controller.session();
    assert_eq!(session.phase(), Phase::Displaying);
    assert!(!session.is_busy());
    assert_eq!(session.countdown(), 0);
}
