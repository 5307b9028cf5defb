use std::any::Any;

use ustr::Ustr;

use watchstamps_states::{State, state_assign_impl};

/// Default poll interval, matching the original dashboard's 10s tick.
pub const DEFAULT_POLL_INTERVAL_MS: u64 = 10_000;

#[derive(Debug, Clone)]
pub struct DashboardConfig {
    pub api_base_url: String,
    /// Re-fetch on a fixed interval. When false, exactly one fetch fires.
    pub poll: bool,
    pub poll_interval_ms: u64,
}

impl DashboardConfig {
    pub fn new(base_url: String) -> Self {
        Self {
            api_base_url: base_url,
            poll: true,
            poll_interval_ms: DEFAULT_POLL_INTERVAL_MS,
        }
    }

    /// Base URL as an interned string, without a trailing slash.
    pub fn api_url(&self) -> Ustr {
        Ustr::from(self.api_base_url.trim_end_matches('/'))
    }
}

impl Default for DashboardConfig {
    fn default() -> Self {
        // `API_ENDPOINT` supplies the backend base URL, as in the original
        // deployment. An empty value leaves relative URLs, which only makes
        // sense behind a proxy; log so misconfiguration is visible.
        let api_base_url = std::env::var("API_ENDPOINT").unwrap_or_else(|_| {
            log::warn!("API_ENDPOINT is not set; falling back to relative URLs");
            String::new()
        });
        Self::new(api_base_url)
    }
}

impl State for DashboardConfig {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn assign_box(&mut self, new_self: Box<dyn Any + Send>) {
        state_assign_impl(self, new_self);
    }
}
