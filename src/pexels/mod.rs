use std::sync::{
    Arc,
    atomic::{AtomicU64, Ordering},
};

use rand::Rng;
use reqwest::{
    Client as HttpClient, RequestBuilder, Response,
    header::{AUTHORIZATION, HeaderMap, HeaderValue},
};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

pub mod config;
pub mod error;
pub mod models;
pub mod result;

pub use config::Config;
pub use error::Error;
pub use models::*;
pub use result::Result;

pub const API_KEY_VAR: &str = "PEXELS_API_KEY";
pub const RATE_LIMIT_REMAINING: &str = "x-ratelimit-remaining";

const RANDOM_PAGE_MAX: u32 = 1000;

macro_rules! pexels_api {
    ($base:expr, $end_point:expr) => {
        format!(concat!("{}", $end_point), $base)
    };

    ($base:expr, $end_point:expr, $($arg:expr),+) => {
        format!(concat!("{}", $end_point), $base, $($arg),+)
    };
}

macro_rules! query_params {
    ($($key:expr => $value:expr),+ $(,)?) => {
        &[
            $(($key, $value.to_string())),+
        ]
    };
}

/// Pexels API client.
///
/// Clones share the connection pool and the rate-limit counter.
#[derive(Clone)]
pub struct Client {
    http: HttpClient,
    config: Arc<Config>,
    remaining: Arc<AtomicU64>,
}

impl Client {
    pub fn new<T: AsRef<str>>(api_key: T) -> Result<Self> {
        Self::with_config(api_key, Config::default())
    }

    pub fn with_config<T: AsRef<str>>(api_key: T, config: Config) -> Result<Self> {
        let api_key = api_key.as_ref().trim();
        if api_key.is_empty() {
            return Err(Error::InvalidApiKey);
        }

        let mut auth = HeaderValue::from_str(api_key).map_err(|_| Error::InvalidApiKey)?;
        auth.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, auth);

        let mut builder = HttpClient::builder().default_headers(headers);
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }

        let http = builder.build().map_err(Error::Client)?;

        Ok(Self {
            http,
            config: Arc::new(config),
            remaining: Arc::new(AtomicU64::new(0)),
        })
    }

    /// Reads the access key from `PEXELS_API_KEY`.
    pub fn new_from_env() -> Result<Self> {
        let api_key = std::env::var(API_KEY_VAR).map_err(|_| Error::MissingApiKey)?;

        Self::new(api_key)
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Requests left in the current window, as reported by the last response that carried the header.
    pub fn remaining_quota_this_month(&self) -> u64 {
        self.remaining.load(Ordering::Relaxed)
    }

    pub async fn search_photos<T: AsRef<str>>(
        &self,
        query: T,
        per_page: u32,
        page: u32,
    ) -> Result<SearchResult> {
        let query = query.as_ref();
        check_query(query)?;
        check_paging(per_page, page)?;

        let request = self
            .http
            .get(pexels_api!(self.config.photo_api, "/search"))
            .query(query_params!(
                "query" => query,
                "per_page" => per_page,
                "page" => page,
            ));

        let result: SearchResult = self.fetch(request).await?;
        check_page_len(per_page, result.photos().len())?;

        Ok(result)
    }

    pub async fn curated_photos(&self, per_page: u32, page: u32) -> Result<CuratedPhotos> {
        check_paging(per_page, page)?;

        let request = self
            .http
            .get(pexels_api!(self.config.photo_api, "/curated"))
            .query(query_params!(
                "per_page" => per_page,
                "page" => page,
            ));

        let result: CuratedPhotos = self.fetch(request).await?;
        check_page_len(per_page, result.photos().len())?;

        Ok(result)
    }

    pub async fn get_photo(&self, id: u64) -> Result<Photo> {
        if id == 0 {
            return Err(Error::InvalidArgument("photo id must be positive"));
        }

        let request = self
            .http
            .get(pexels_api!(self.config.photo_api, "/photos/{}", id));

        self.fetch(request).await
    }

    /// Picks one curated photo from a random page.
    pub async fn get_random_photo(&self) -> Result<Photo> {
        let page = random_page();
        debug!(page, "picking random curated photo");

        let photos = self.curated_photos(1, page).await?.into_photos();

        single(photos)
    }

    pub async fn search_videos<T: AsRef<str>>(
        &self,
        query: T,
        per_page: u32,
        page: u32,
    ) -> Result<VideoSearchResult> {
        let query = query.as_ref();
        check_query(query)?;
        check_paging(per_page, page)?;

        let request = self
            .http
            .get(pexels_api!(self.config.video_api, "/search"))
            .query(query_params!(
                "query" => query,
                "per_page" => per_page,
                "page" => page,
            ));

        let result: VideoSearchResult = self.fetch(request).await?;
        check_page_len(per_page, result.videos().len())?;

        Ok(result)
    }

    pub async fn popular_videos(&self, per_page: u32, page: u32) -> Result<PopularVideos> {
        check_paging(per_page, page)?;

        let request = self
            .http
            .get(pexels_api!(self.config.video_api, "/popular"))
            .query(query_params!(
                "per_page" => per_page,
                "page" => page,
            ));

        let result: PopularVideos = self.fetch(request).await?;
        check_page_len(per_page, result.videos().len())?;

        Ok(result)
    }

    /// Picks one popular video from a random page.
    pub async fn get_random_video(&self) -> Result<Video> {
        let page = random_page();
        debug!(page, "picking random popular video");

        let videos = self.popular_videos(1, page).await?.into_videos();

        single(videos)
    }

    async fn fetch<R: DeserializeOwned>(&self, request: RequestBuilder) -> Result<R> {
        let response = self.send_request(request).await?;
        let body = response.bytes().await?;

        Ok(serde_json::from_slice(&body)?)
    }

    async fn send_request(&self, request: RequestBuilder) -> Result<Response> {
        let response = request.send().await?;
        debug!(url = %response.url(), status = %response.status(), "pexels response");

        self.record_quota(response.headers());

        if !response.status().is_success() {
            warn!(url = %response.url(), status = %response.status(), "pexels request failed");
            return Err(Error::Status(response.status()));
        }

        Ok(response)
    }

    fn record_quota(&self, headers: &HeaderMap) {
        match remaining_from_headers(headers) {
            Some(remaining) => {
                self.remaining.store(remaining, Ordering::Relaxed);
                debug!(remaining, "rate limit updated");
            }

            None => debug!("response carried no usable rate limit header"),
        }
    }
}

fn remaining_from_headers(headers: &HeaderMap) -> Option<u64> {
    headers
        .get(RATE_LIMIT_REMAINING)?
        .to_str()
        .ok()?
        .trim()
        .parse()
        .ok()
}

fn random_page() -> u32 {
    rand::rng().random_range(1..=RANDOM_PAGE_MAX)
}

fn single<T>(items: Vec<T>) -> Result<T> {
    let mut items = items.into_iter();

    match (items.next(), items.next()) {
        (Some(item), None) => Ok(item),
        _ => Err(Error::NoResults),
    }
}

fn check_query(query: &str) -> Result<()> {
    if query.trim().is_empty() {
        return Err(Error::InvalidArgument("query must not be empty"));
    }

    Ok(())
}

fn check_paging(per_page: u32, page: u32) -> Result<()> {
    if per_page == 0 {
        return Err(Error::InvalidArgument("per_page must be positive"));
    }

    if page == 0 {
        return Err(Error::InvalidArgument("page must be positive"));
    }

    Ok(())
}

fn check_page_len(per_page: u32, items: usize) -> Result<()> {
    if items > per_page as usize {
        return Err(Error::PageOverflow { per_page, items });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headers(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(RATE_LIMIT_REMAINING, HeaderValue::from_str(value).unwrap());
        headers
    }

    #[test]
    fn reads_numeric_rate_limit() {
        assert_eq!(remaining_from_headers(&headers("19684")), Some(19684));
        assert_eq!(remaining_from_headers(&headers(" 7 ")), Some(7));
    }

    #[test]
    fn ignores_bad_rate_limit() {
        assert_eq!(remaining_from_headers(&headers("lots")), None);
        assert_eq!(remaining_from_headers(&headers("-1")), None);
        assert_eq!(remaining_from_headers(&HeaderMap::new()), None);
    }

    #[test]
    fn quota_is_shared_between_clones() {
        let client = Client::new("key").unwrap();
        let clone = client.clone();

        assert_eq!(client.remaining_quota_this_month(), 0);

        clone.record_quota(&headers("42"));
        client.record_quota(&headers("not a number"));

        assert_eq!(client.remaining_quota_this_month(), 42);
    }

    #[test]
    fn rejects_blank_api_key() {
        assert!(matches!(Client::new("  "), Err(Error::InvalidApiKey)));
        assert!(matches!(Client::new("bad\nkey"), Err(Error::InvalidApiKey)));
    }

    #[test]
    fn random_page_stays_in_range() {
        for _ in 0..1000 {
            let page = random_page();
            assert!((1..=RANDOM_PAGE_MAX).contains(&page));
        }
    }

    #[test]
    fn single_requires_exactly_one() {
        assert_eq!(single(vec![3]).unwrap(), 3);
        assert!(matches!(single(Vec::<u8>::new()), Err(Error::NoResults)));
        assert!(matches!(single(vec![1, 2]), Err(Error::NoResults)));
    }

    #[test]
    fn validates_arguments() {
        assert!(check_query("waves").is_ok());
        assert!(matches!(check_query(" "), Err(Error::InvalidArgument(_))));
        assert!(matches!(check_paging(0, 1), Err(Error::InvalidArgument(_))));
        assert!(matches!(check_paging(15, 0), Err(Error::InvalidArgument(_))));
        assert!(matches!(
            check_page_len(1, 2),
            Err(Error::PageOverflow { per_page: 1, items: 2 })
        ));
    }

    #[test]
    fn builds_endpoints() {
        let config = Config::default();

        assert_eq!(
            pexels_api!(config.photo_api, "/photos/{}", 2014422),
            "https://api.pexels.com/v1/photos/2014422"
        );
        assert_eq!(
            pexels_api!(config.video_api, "/popular"),
            "https://api.pexels.com/videos/popular"
        );
    }
}
