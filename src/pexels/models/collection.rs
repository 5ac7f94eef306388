use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Collection {
    id: String,
    title: String,
    #[serde(deserialize_with = "super::nullable")]
    description: String,
    private: bool,
    media_count: u32,
    photos_count: u32,
    videos_count: u32,
}

impl Collection {
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn is_private(&self) -> bool {
        self.private
    }

    pub fn media_count(&self) -> u32 {
        self.media_count
    }

    pub fn photos_count(&self) -> u32 {
        self.photos_count
    }

    pub fn videos_count(&self) -> u32 {
        self.videos_count
    }
}
