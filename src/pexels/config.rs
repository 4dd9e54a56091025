use std::time::Duration;

use serde::{Deserialize, Serialize};

pub const PHOTO_API: &str = "https://api.pexels.com/v1";
pub const VIDEO_API: &str = "https://api.pexels.com/videos";

/// Endpoints and transport settings used by [`Client`](super::Client).
///
/// A `timeout_secs` of 0 disables the request timeout.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub photo_api: String,
    pub video_api: String,
    pub timeout_secs: u64,
}

impl Config {
    pub fn timeout(&self) -> Option<Duration> {
        (self.timeout_secs > 0).then(|| Duration::from_secs(self.timeout_secs))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            photo_api: PHOTO_API.to_owned(),
            video_api: VIDEO_API.to_owned(),
            timeout_secs: 30,
        }
    }
}
