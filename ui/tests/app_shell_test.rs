//! Full app-shell test: the frame loop fetches on its own and the panels
//! render the result.

mod common;

use common::yield_wait_for_network;
use egui_kittest::Harness;
use kittest::Queryable;
use watchstamps_ui::{WatchstampsApp, state::State};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn frame_loop_fetches_and_renders_users() {
    let _ = env_logger::builder().is_test(true).try_init();
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/watchstamps"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(common::success_body(common::sample_users())),
        )
        .mount(&mock_server)
        .await;

    let app = WatchstampsApp::new(State::test(mock_server.uri()));
    let mut harness = Harness::new_eframe(|_| app);

    // First frame dispatches the fetch.
    harness.step();
    yield_wait_for_network(50).await;
    // Next frame applies the response and renders the rows.
    harness.step();

    assert!(harness.query_by_label("Watchstamps").is_some());
    assert!(harness.query_by_label_contains("User count : 2").is_some());
    assert!(harness.query_by_label("alice").is_some());
    assert!(harness.query_by_label("bob").is_some());
    // Environment picker and the env:version label are in the top bar.
    assert!(harness.query_by_label("Production").is_some());
    assert!(harness.query_by_label_contains("prod:").is_some());

    let request_count = mock_server
        .received_requests()
        .await
        .map(|r| r.len())
        .unwrap_or(0);
    assert_eq!(request_count, 1, "one fetch for the initial load");
}
