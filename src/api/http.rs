use std::time::Duration;

use reqwest::{Client, StatusCode, Url};
use tracing::debug;

use super::*;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Talks to the real API over HTTP.
pub struct HttpUpstream {
    client: Client,
}

impl HttpUpstream {
    pub fn new() -> ApiResult<Self> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .user_agent(concat!("keymash_web/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { client })
    }
}

#[rocket::async_trait]
impl Upstream for HttpUpstream {
    async fn get(&self, url: &Url) -> ApiResult<String> {
        debug!(%url, "GET");
        let response = self.client.get(url.clone()).send().await?;

        match response.status() {
            StatusCode::NOT_FOUND => Err(ApiError::NotFound),
            status if !status.is_success() => Err(ApiError::Status(status.as_u16())),
            _ => Ok(response.text().await?),
        }
    }
}
