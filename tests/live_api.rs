//! Integration tests against a running price backend.
//!
//! All tests are `#[ignore]` because they require network access. The
//! backend URL is read from `SJC_API_URL` (a `.env` file works), falling
//! back to `http://localhost:3000`.
//!
//! Run with:
//! ```bash
//! cargo test --test live_api -- --ignored
//! ```

#![cfg(feature = "http")]

use std::time::Duration;

use tokio::time::timeout;

use sjc_chart::client::SjcClient;
use sjc_chart::network::DEFAULT_API_URL;
use sjc_chart::shared::{Mode, RequestParams};

const TEST_TIMEOUT: Duration = Duration::from_secs(15);

fn client() -> SjcClient {
    let _ = dotenvy::dotenv();
    let url = std::env::var("SJC_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());
    SjcClient::builder()
        .base_url(&url)
        .build()
        .expect("client should build")
}

#[tokio::test]
#[ignore]
async fn test_prices_are_sorted_for_every_mode() {
    let client = client();
    for mode in [Mode::Today, Mode::SevenDay, Mode::ThirtyDay] {
        let params = RequestParams::new(mode, mode.default_limit());
        let points = timeout(TEST_TIMEOUT, client.prices().get(params))
            .await
            .expect("timed out")
            .expect("price query should succeed");

        assert!(
            points.windows(2).all(|w| w[0].timestamp <= w[1].timestamp),
            "{mode} points out of order"
        );
    }
}

#[tokio::test]
#[ignore]
async fn test_fetch_history_reports_inserted_count() {
    let client = client();
    let report = timeout(TEST_TIMEOUT * 4, client.history().fetch(1))
        .await
        .expect("timed out")
        .expect("history fetch should succeed");

    assert_eq!(report.days, 1);
    println!("{}", report.message());
}
