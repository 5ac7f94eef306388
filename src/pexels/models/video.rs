use serde::{Deserialize, Serialize};

/// The videographer who shot a video.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    id: u64,
    name: String,
    url: String,
}

impl User {
    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

/// One rendition of a video.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoFile {
    id: u64,
    #[serde(deserialize_with = "super::nullable")]
    quality: String,
    file_type: String,
    #[serde(deserialize_with = "super::nullable")]
    width: Option<u32>,
    #[serde(deserialize_with = "super::nullable")]
    height: Option<u32>,
    link: String,
}

impl VideoFile {
    pub fn id(&self) -> u64 {
        self.id
    }

    /// `hd`, `sd`, `uhd`... Empty for adaptive (HLS) renditions.
    pub fn quality(&self) -> &str {
        &self.quality
    }

    /// MIME type, e.g. `video/mp4`.
    pub fn file_type(&self) -> &str {
        &self.file_type
    }

    /// Unknown for adaptive (HLS) renditions.
    pub fn width(&self) -> Option<u32> {
        self.width
    }

    pub fn height(&self) -> Option<u32> {
        self.height
    }

    pub fn link(&self) -> &str {
        &self.link
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoPicture {
    id: u64,
    picture: String,
    nr: u32,
}

impl VideoPicture {
    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn picture(&self) -> &str {
        &self.picture
    }

    pub fn nr(&self) -> u32 {
        self.nr
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Video {
    id: u64,
    width: u32,
    height: u32,
    url: String,
    image: String,
    duration: u32,
    user: User,
    video_files: Vec<VideoFile>,
    video_pictures: Vec<VideoPicture>,
}

impl Video {
    pub const TYPE: &'static str = "Video";

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

    /// Screenshot of the video.
    pub fn image(&self) -> &str {
        &self.image
    }

    /// Seconds.
    pub fn duration(&self) -> u32 {
        self.duration
    }

    pub fn user(&self) -> &User {
        &self.user
    }

    pub fn video_files(&self) -> &[VideoFile] {
        &self.video_files
    }

    pub fn video_pictures(&self) -> &[VideoPicture] {
        &self.video_pictures
    }

    pub fn media_type(&self) -> &'static str {
        Self::TYPE
    }
}
