use std::path::PathBuf;

use log::{debug, info, warn};
use tokio::fs;

use crate::config::Config;
use crate::error::LoadError;

/// Reads the schedule page from the cache file if there is one, no matter
/// how old, and fetches and caches it otherwise.
pub struct Loader {
    url: String,
    cache_path: PathBuf,
    client: reqwest::Client,
}

impl Loader {
    pub fn new(config: &Config) -> Result<Self, LoadError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            url: config.url.clone(),
            cache_path: config.cache_path.clone(),
            client: builder.build()?,
        })
    }

    pub async fn load(&self) -> Result<String, LoadError> {
        if fs::try_exists(&self.cache_path).await? {
            info!("Reading cached schedule {}", self.cache_path.display());
            let bytes = fs::read(&self.cache_path).await?;
            return Ok(match String::from_utf8(bytes) {
                Ok(html) => html,
                Err(err) => {
                    warn!(
                        "{} is not valid UTF-8 ({}), replacing invalid bytes",
                        self.cache_path.display(),
                        err.utf8_error()
                    );
                    String::from_utf8_lossy(err.as_bytes()).into_owned()
                }
            });
        }

        info!("Fetching schedule from {}", self.url);
        let response = self.client.get(&self.url).send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(LoadError::Fetch {
                status: status.as_u16(),
                body,
            });
        }

        fs::write(&self.cache_path, &body).await?;
        debug!(
            "Cached {} bytes at {}",
            body.len(),
            self.cache_path.display()
        );

        Ok(body)
    }
}
