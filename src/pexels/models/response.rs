use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::warn;

use super::{Collection, Media, Photo, Video};
use crate::pexels::Error;

/// Pagination block shared by every listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page {
    page: u32,
    per_page: u32,
    total_results: u64,
    /// Empty when there is no previous page.
    #[serde(default)]
    prev_page: String,
    /// Empty when there is no next page.
    #[serde(default)]
    next_page: String,
}

impl Page {
    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn per_page(&self) -> u32 {
        self.per_page
    }

    pub fn total_results(&self) -> u64 {
        self.total_results
    }

    pub fn prev_page(&self) -> &str {
        &self.prev_page
    }

    pub fn next_page(&self) -> &str {
        &self.next_page
    }

    pub fn has_prev_page(&self) -> bool {
        !self.prev_page.is_empty()
    }

    pub fn has_next_page(&self) -> bool {
        !self.next_page.is_empty()
    }

    pub(crate) fn check(&self, items: usize) -> Result<(), String> {
        if self.page == 0 {
            return Err("page starts at 1".to_owned());
        }

        if items > self.per_page as usize {
            return Err(format!(
                "{items} items returned for a page of {}",
                self.per_page
            ));
        }

        Ok(())
    }
}

macro_rules! listing {
    ($name:ident, $items:ident: $item:ty) => {
        impl $name {
            pub fn $items(&self) -> &[$item] {
                &self.$items
            }

            pub fn pagination(&self) -> &Page {
                &self.page
            }
        }

        impl std::ops::Deref for $name {
            type Target = Page;

            fn deref(&self) -> &Page {
                &self.page
            }
        }

        impl super::Decode for $name {
            fn check(&self) -> crate::pexels::Result<()> {
                self.page
                    .check(self.$items.len())
                    .map_err(Error::MalformedResponse)
            }
        }
    };
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhotoResponse {
    photos: Vec<Photo>,
    #[serde(flatten)]
    page: Page,
}

listing!(PhotoResponse, photos: Photo);

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoResponse {
    videos: Vec<Video>,
    /// Pexels page of the query, when given.
    #[serde(default)]
    url: String,
    #[serde(flatten)]
    page: Page,
}

listing!(VideoResponse, videos: Video);

impl VideoResponse {
    pub fn url(&self) -> &str {
        &self.url
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollectionResponse {
    collections: Vec<Collection>,
    #[serde(flatten)]
    page: Page,
}

listing!(CollectionResponse, collections: Collection);

#[derive(Deserialize)]
struct RawCollectionMediaResponse {
    id: String,
    media: Vec<Value>,
    #[serde(flatten)]
    page: Page,
}

/// Items of a collection. Items with an unrecognized `type` tag are dropped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawCollectionMediaResponse")]
pub struct CollectionMediaResponse {
    id: String,
    media: Vec<Media>,
    #[serde(flatten)]
    page: Page,
}

listing!(CollectionMediaResponse, media: Media);

impl CollectionMediaResponse {
    /// Id of the collection.
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn photos(&self) -> impl Iterator<Item = &Photo> {
        self.media.iter().filter_map(Media::as_photo)
    }

    pub fn videos(&self) -> impl Iterator<Item = &Video> {
        self.media.iter().filter_map(Media::as_video)
    }
}

impl TryFrom<RawCollectionMediaResponse> for CollectionMediaResponse {
    type Error = Error;

    fn try_from(raw: RawCollectionMediaResponse) -> Result<Self, Self::Error> {
        let mut media = Vec::with_capacity(raw.media.len());
        for item in raw.media {
            let tag = item.get("type").cloned();

            match Media::from_value(item)? {
                Some(item) => media.push(item),
                None => warn!(collection = %raw.id, ?tag, "dropping media item with unknown type"),
            }
        }

        Ok(Self {
            id: raw.id,
            media,
            page: raw.page,
        })
    }
}
