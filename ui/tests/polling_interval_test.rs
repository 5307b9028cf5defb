//! Integration tests for the poll scheduling: one fetch per interval, no
//! overlap, exactly one fetch when polling is off.

mod common;

use common::{
    TestCtx, advance_time_by_millis, count_requests, run_fetch_cycle, sample_users, success_body,
    yield_wait_for_network,
};
use watchstamps_business::{DashboardConfig, WatchstampsCache};

async fn count_fetches(ctx: &TestCtx<'_>) -> usize {
    count_requests(ctx.mock_server(), "GET", "/watchstamps").await
}

#[tokio::test]
async fn first_fetch_fires_immediately() {
    let mut ctx = TestCtx::new(success_body(sample_users())).await;

    run_fetch_cycle(ctx.harness_mut()).await;

    assert_eq!(count_fetches(&ctx).await, 1);
}

#[tokio::test]
async fn no_refetch_before_the_interval() {
    let mut ctx = TestCtx::new(success_body(sample_users())).await;

    run_fetch_cycle(ctx.harness_mut()).await;

    // Many frames inside the 10s window must not add requests.
    for _ in 0..5 {
        advance_time_by_millis(ctx.harness_mut(), 1_000);
        run_fetch_cycle(ctx.harness_mut()).await;
    }

    assert_eq!(
        count_fetches(&ctx).await,
        1,
        "frames inside the interval must not refetch"
    );
}

#[tokio::test]
async fn refetches_once_the_interval_elapsed() {
    let mut ctx = TestCtx::new(success_body(sample_users())).await;

    run_fetch_cycle(ctx.harness_mut()).await;

    advance_time_by_millis(ctx.harness_mut(), 9_999);
    run_fetch_cycle(ctx.harness_mut()).await;
    assert_eq!(count_fetches(&ctx).await, 1, "9.999s is inside the window");

    advance_time_by_millis(ctx.harness_mut(), 1);
    run_fetch_cycle(ctx.harness_mut()).await;
    assert_eq!(count_fetches(&ctx).await, 2, "10s is due");

    advance_time_by_millis(ctx.harness_mut(), 10_000);
    run_fetch_cycle(ctx.harness_mut()).await;
    assert_eq!(count_fetches(&ctx).await, 3);
}

#[tokio::test]
async fn polling_disabled_fetches_exactly_once() {
    let mut ctx = TestCtx::new(success_body(sample_users())).await;
    ctx.harness_mut()
        .state_mut()
        .ctx
        .update::<DashboardConfig>(|config| config.poll = false);

    run_fetch_cycle(ctx.harness_mut()).await;

    for _ in 0..3 {
        advance_time_by_millis(ctx.harness_mut(), 60_000);
        run_fetch_cycle(ctx.harness_mut()).await;
    }

    assert_eq!(
        count_fetches(&ctx).await,
        1,
        "with polling off only the initial fetch fires"
    );
}

#[tokio::test]
async fn no_overlapping_requests_while_in_flight() {
    // Slow the backend down so the first request is still in flight while
    // later frames run.
    let response = wiremock::ResponseTemplate::new(200)
        .set_body_json(success_body(sample_users()))
        .set_delay(std::time::Duration::from_millis(200));
    let mut ctx = TestCtx::with_response(response).await;

    // Dispatch without waiting for the response; the command publishes
    // Pending synchronously and the next frame's sync applies it.
    watchstamps_ui::app::maybe_fetch(&mut ctx.harness_mut().state_mut().ctx);
    ctx.harness_mut().state_mut().ctx.sync_computes();
    assert!(
        ctx.harness()
            .state()
            .ctx
            .cached::<WatchstampsCache>()
            .is_some_and(WatchstampsCache::is_loading)
    );

    // Frames during the in-flight window, even past the interval.
    advance_time_by_millis(ctx.harness_mut(), 60_000);
    watchstamps_ui::app::maybe_fetch(&mut ctx.harness_mut().state_mut().ctx);
    watchstamps_ui::app::maybe_fetch(&mut ctx.harness_mut().state_mut().ctx);

    yield_wait_for_network(300).await;
    ctx.harness_mut().state_mut().ctx.sync_computes();

    assert_eq!(
        count_fetches(&ctx).await,
        1,
        "a pending fetch blocks further dispatches"
    );
}

#[tokio::test]
async fn stale_response_does_not_clobber_a_newer_one() {
    let mut ctx = TestCtx::new(success_body(sample_users())).await;

    run_fetch_cycle(ctx.harness_mut()).await;
    let generation_after_first = ctx
        .harness()
        .state()
        .ctx
        .cached::<WatchstampsCache>()
        .map(WatchstampsCache::generation)
        .unwrap_or_default();

    advance_time_by_millis(ctx.harness_mut(), 10_000);
    run_fetch_cycle(ctx.harness_mut()).await;

    let cache = ctx
        .harness()
        .state()
        .ctx
        .cached::<WatchstampsCache>()
        .expect("cache is recorded");
    assert!(
        cache.generation() > generation_after_first,
        "each dispatch stamps a newer generation"
    );
    assert_eq!(cache.users().len(), 2);
}
