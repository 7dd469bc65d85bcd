//! HTTP reachability prober.

use async_trait::async_trait;
use std::time::Duration;

use dealfinder_core::traits::{IUrlProber, ProbeVerdict};

/// HEAD-request prober with a bounded per-probe timeout. Redirects are
/// followed by the underlying client.
pub struct HttpProber {
    client: reqwest::Client,
    timeout: Duration,
}

impl HttpProber {
    pub fn new(timeout_secs: u64) -> Self {
        Self {
            client: reqwest::Client::new(),
            timeout: Duration::from_secs(timeout_secs.max(1)),
        }
    }
}

#[async_trait]
impl IUrlProber for HttpProber {
    async fn probe(&self, url: &str) -> ProbeVerdict {
        let response = self.client.head(url).timeout(self.timeout).send().await;

        match response {
            Ok(resp) => {
                let status = resp.status();
                if status.as_u16() == 200 {
                    ProbeVerdict::valid("URL accessible")
                } else if status.as_u16() == 404 {
                    ProbeVerdict::invalid("Page not found (404)")
                } else if status.is_server_error() {
                    ProbeVerdict::invalid(format!("Server error ({})", status.as_u16()))
                } else {
                    ProbeVerdict::valid(format!("Accessible with status {}", status.as_u16()))
                }
            }
            Err(err) if err.is_timeout() => ProbeVerdict::invalid("Request timeout"),
            Err(err) if err.is_connect() => ProbeVerdict::invalid("Connection failed"),
            Err(err) => {
                let reason: String = err.to_string().chars().take(50).collect();
                ProbeVerdict::invalid(format!("Error: {reason}"))
            }
        }
    }
}
