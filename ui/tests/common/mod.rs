use egui_kittest::Harness;
use watchstamps_ui::state::State;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Test context that exposes the mock server for request verification.
pub struct TestCtx<'a> {
    mock_server: MockServer,
    harness: Harness<'a, State>,
}

impl<'a> TestCtx<'a> {
    /// Start a mock backend serving `body` from `GET /watchstamps` and build
    /// an app state pointed at it. Time does not auto-advance.
    pub async fn new(body: serde_json::Value) -> Self {
        Self::with_response(ResponseTemplate::new(200).set_body_json(body)).await
    }

    #[allow(unused)]
    pub async fn with_status(status_code: u16) -> Self {
        Self::with_response(ResponseTemplate::new(status_code)).await
    }

    pub async fn with_response(response: ResponseTemplate) -> Self {
        let _ = env_logger::builder().is_test(true).try_init();
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/watchstamps"))
            .respond_with(response)
            .mount(&mock_server)
            .await;

        let state = State::test(mock_server.uri());
        let harness = Harness::new_ui_state(|_ui, _state| {}, state);

        Self {
            mock_server,
            harness,
        }
    }

    pub fn harness_mut(&mut self) -> &mut Harness<'a, State> {
        &mut self.harness
    }

    #[allow(unused)]
    pub fn harness(&self) -> &Harness<'a, State> {
        &self.harness
    }

    pub fn mock_server(&self) -> &MockServer {
        &self.mock_server
    }
}

/// Wait for the async HTTP response to land.
pub async fn yield_wait_for_network(ms: u64) {
    tokio::time::sleep(std::time::Duration::from_millis(ms)).await;
}

/// One frame-loop fetch cycle: interval check, dispatch if due, wait for the
/// network, apply the result.
pub async fn run_fetch_cycle(harness: &mut Harness<'_, State>) {
    watchstamps_ui::app::maybe_fetch(&mut harness.state_mut().ctx);
    yield_wait_for_network(50).await;
    harness.state_mut().ctx.sync_computes();
}

/// Advance the mockable Time state.
#[allow(unused)]
pub fn advance_time_by_millis(harness: &mut Harness<'_, State>, millis: i64) {
    harness.state_mut().ctx.update::<watchstamps_states::Time>(|t| {
        *t.as_mut() = *t.as_ref() + chrono::Duration::milliseconds(millis);
    });
}

/// Count requests the mock server received for one method/path pair.
pub async fn count_requests(mock_server: &MockServer, http_method: &str, url_path: &str) -> usize {
    mock_server
        .received_requests()
        .await
        .map(|requests| {
            requests
                .iter()
                .filter(|r| r.method.as_str() == http_method && r.url.path() == url_path)
                .count()
        })
        .unwrap_or(0)
}

/// A successful `GET /watchstamps` payload wrapping `users`.
pub fn success_body(users: serde_json::Value) -> serde_json::Value {
    let user_count = users.as_array().map(|a| a.len()).unwrap_or(0);
    serde_json::json!({
        "isSuccess": true,
        "result": { "users": users, "userCount": user_count }
    })
}

/// Two users; alice was seen most recently and has one session.
#[allow(unused)]
pub fn sample_users() -> serde_json::Value {
    serde_json::json!([
        {
            "id": "rec-alice",
            "userId": "alice",
            "createdAt": "2024-01-01T00:00:00Z",
            "lastSeenAt": "2024-06-01T00:00:00Z",
            "totalTimeSpent": 3661,
            "sessionsCount": 1,
            "sessions": [
                {
                    "id": "rec-s-alice",
                    "sessionId": "sess-alice",
                    "userId": "alice",
                    "sessionStartedAt": "2024-05-31T08:00:00Z",
                    "sessionEndedAt": "2024-05-31T09:00:00Z",
                    "sessionDuration": 3600,
                    "timeStampsCount": 4
                }
            ]
        },
        {
            "id": "rec-bob",
            "userId": "bob",
            "createdAt": "2024-02-01T00:00:00Z",
            "lastSeenAt": "2024-03-01T00:00:00Z",
            "totalTimeSpent": 120,
            "sessionsCount": 0
        }
    ])
}
