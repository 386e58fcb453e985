use std::time::Duration;

/// Creates the HTTP client for provider verification calls.
///
/// The timeout comes from [`crate::Configuration::request_timeout`]; a request
/// thread waits on this single round trip, so it must not hang indefinitely.
pub(super) fn get_client(timeout: Duration) -> reqwest::Client {
    reqwest::Client::builder()
        .timeout(timeout)
        .pool_idle_timeout(Duration::from_secs(90))
        .build()
        .expect("Failed to create reqwest client")
}
