mod photo;
mod video;

pub use photo::{CuratedPhotos, Photo, PhotoPage, PhotoSource, SearchResult};
pub use video::{PopularVideos, Video, VideoFile, VideoPage, VideoPicture, VideoSearchResult};
