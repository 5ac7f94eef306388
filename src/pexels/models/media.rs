use serde::Serialize;
use serde_json::Value;

use super::{Photo, Video};
use crate::pexels::{Error, Result};

/// An item of a collection. Serialized with its `type` tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type")]
pub enum Media {
    Photo(Photo),
    Video(Video),
}

impl Media {
    /// Decodes an item according to its `type` tag.
    ///
    /// Returns `Ok(None)` when the tag is missing or unrecognized. A recognized
    /// tag with an incomplete body is an error.
    pub fn from_value(value: Value) -> Result<Option<Self>> {
        let media = match value.get("type").and_then(Value::as_str) {
            Some(Photo::TYPE) => {
                Self::Photo(serde_json::from_value(value).map_err(Error::malformed)?)
            }
            Some(Video::TYPE) => {
                Self::Video(serde_json::from_value(value).map_err(Error::malformed)?)
            }
            _ => return Ok(None),
        };

        Ok(Some(media))
    }

    pub fn media_type(&self) -> &'static str {
        match self {
            Self::Photo(_) => Photo::TYPE,
            Self::Video(_) => Video::TYPE,
        }
    }

    pub fn as_photo(&self) -> Option<&Photo> {
        match self {
            Self::Photo(photo) => Some(photo),
            Self::Video(_) => None,
        }
    }

    pub fn as_video(&self) -> Option<&Video> {
        match self {
            Self::Video(video) => Some(video),
            Self::Photo(_) => None,
        }
    }
}
