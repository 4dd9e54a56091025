use serde::{Deserialize, Serialize};

/// Paging envelope returned by the video search and popular endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VideoPage {
    page: u32,
    per_page: u32,
    #[serde(default)]
    total_results: Option<u64>,
    #[serde(default)]
    next_page: Option<String>,
    #[serde(default)]
    prev_page: Option<String>,
    videos: Vec<Video>,
}

pub type VideoSearchResult = VideoPage;
pub type PopularVideos = VideoPage;

impl VideoPage {
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

    pub fn videos(&self) -> &[Video] {
        &self.videos
    }

    pub fn into_videos(self) -> Vec<Video> {
        self.videos
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Video {
    id: u64,
    width: u32,
    height: u32,
    url: String,
    image: String,
    duration: u32,
    video_files: Vec<VideoFile>,
    video_pictures: Vec<VideoPicture>,
}

impl Video {
    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn preview_image(&self) -> &str {
        &self.image
    }

    /// Length in seconds.
    pub fn duration(&self) -> u32 {
        self.duration
    }

    pub fn files(&self) -> &[VideoFile] {
        &self.video_files
    }

    pub fn pictures(&self) -> &[VideoPicture] {
        &self.video_pictures
    }
}

/// One rendition of a video. Pexels leaves quality and size null for some HLS entries.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VideoFile {
    pub id: u64,
    #[serde(default)]
    pub quality: Option<String>,
    pub file_type: String,
    #[serde(default)]
    pub width: Option<u32>,
    #[serde(default)]
    pub height: Option<u32>,
    pub link: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VideoPicture {
    pub id: u64,
    pub picture: String,
    pub nr: u32,
}
