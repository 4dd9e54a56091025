use serde::{Deserialize, Serialize};

/// Paging envelope returned by the photo search and curated endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PhotoPage {
    page: u32,
    per_page: u32,
    #[serde(default)]
    total_results: Option<u64>,
    #[serde(default)]
    next_page: Option<String>,
    #[serde(default)]
    prev_page: Option<String>,
    photos: Vec<Photo>,
}

pub type SearchResult = PhotoPage;
pub type CuratedPhotos = PhotoPage;

impl PhotoPage {
    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn per_page(&self) -> u32 {
        self.per_page
    }

    pub fn total_results(&self) -> Option<u64> {
        self.total_results
    }

    pub fn next_page(&self) -> Option<&str> {
        self.next_page.as_deref()
    }

    pub fn prev_page(&self) -> Option<&str> {
        self.prev_page.as_deref()
    }

    pub fn photos(&self) -> &[Photo] {
        &self.photos
    }

    pub fn into_photos(self) -> Vec<Photo> {
        self.photos
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Photo {
    id: u64,
    width: u32,
    height: u32,
    #[serde(default)]
    url: Option<String>,
    #[serde(default)]
    photographer: Option<String>,
    #[serde(default)]
    photographer_url: Option<String>,
    #[serde(default)]
    avg_color: Option<String>,
    #[serde(default)]
    alt: Option<String>,
    src: PhotoSource,
}

impl Photo {
    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Pexels page of the photo, not the image file.
    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }

    pub fn photographer(&self) -> Option<&str> {
        self.photographer.as_deref()
    }

    pub fn photographer_url(&self) -> Option<&str> {
        self.photographer_url.as_deref()
    }

    pub fn avg_color(&self) -> Option<&str> {
        self.avg_color.as_deref()
    }

    pub fn alt(&self) -> Option<&str> {
        self.alt.as_deref()
    }

    pub fn src(&self) -> &PhotoSource {
        &self.src
    }
}

/// Image file URLs for each size Pexels renders.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PhotoSource {
    pub original: String,
    pub large: String,
    pub large2x: String,
    pub medium: String,
    pub small: String,
    pub portrait: String,
    #[serde(default)]
    pub square: String,
    pub landscape: String,
    pub tiny: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn source(id: u64) -> String {
        let base = format!("https://images.pexels.com/photos/{id}/pexels-photo-{id}.jpeg");
        format!(
            r#"{{
                "original": "{base}",
                "large2x": "{base}?h=650&dpr=2",
                "large": "{base}?h=650",
                "medium": "{base}?h=350",
                "small": "{base}?h=130",
                "portrait": "{base}?fit=crop&h=1200&w=800",
                "landscape": "{base}?fit=crop&h=627&w=1200",
                "tiny": "{base}?fit=crop&h=200&w=280"
            }}"#
        )
    }

    fn photo(id: u64) -> String {
        format!(
            r##"{{
                "id": {id},
                "width": 3066,
                "height": 3968,
                "url": "https://www.pexels.com/photo/{id}/",
                "photographer": "Jane Doe",
                "photographer_url": "https://www.pexels.com/@jane",
                "photographer_id": 680589,
                "avg_color": "#978E82",
                "liked": false,
                "alt": "Waves crashing on rocks",
                "src": {}
            }}"##,
            source(id)
        )
    }

    #[test]
    fn decodes_search_envelope() {
        let body = format!(
            r#"{{
                "total_results": 10000,
                "page": 1,
                "per_page": 15,
                "photos": [{}, {}],
                "next_page": "https://api.pexels.com/v1/search/?page=2&per_page=15&query=waves"
            }}"#,
            photo(2014422),
            photo(1563356)
        );

        let result: SearchResult = serde_json::from_str(&body).unwrap();

        assert_eq!(result.page(), 1);
        assert_eq!(result.per_page(), 15);
        assert_eq!(result.total_results(), Some(10000));
        assert_eq!(result.photos().len(), 2);
        assert!(result.prev_page().is_none());
        assert!(result.next_page().unwrap().contains("page=2"));

        let first = &result.photos()[0];
        assert_eq!(first.id(), 2014422);
        assert_eq!(first.photographer(), Some("Jane Doe"));
        assert!(first.src().original.ends_with("pexels-photo-2014422.jpeg"));
        assert!(first.src().square.is_empty());
    }

    #[test]
    fn last_page_has_no_next_page() {
        let body = r#"{ "page": 7, "per_page": 80, "photos": [] }"#;

        let result: CuratedPhotos = serde_json::from_str(body).unwrap();

        assert!(result.next_page().is_none());
        assert!(result.total_results().is_none());
        assert!(result.photos().is_empty());
    }

    #[test]
    fn missing_source_is_rejected() {
        let body = r#"{ "id": 1, "width": 10, "height": 10 }"#;

        assert!(serde_json::from_str::<Photo>(body).is_err());
    }
}
