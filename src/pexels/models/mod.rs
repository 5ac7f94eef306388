//! Typed API responses.
//!
//! Unknown JSON fields are ignored. A missing required field fails the decode
//! with [`Error::MalformedResponse`].

use serde::{Deserialize, Deserializer, de::DeserializeOwned};
use serde_json::Value;

use super::{Error, Result};

mod collection;
mod media;
mod photo;
mod response;
mod video;

pub use collection::Collection;
pub use media::Media;
pub use photo::{Photo, Src, SrcSize};
pub use response::{
    CollectionMediaResponse, CollectionResponse, Page, PhotoResponse, VideoResponse,
};
pub use video::{User, Video, VideoFile, VideoPicture};

/// A type that can be built from a response body.
pub trait Decode: DeserializeOwned {
    /// Checks that hold after deserialization.
    fn check(&self) -> Result<()> {
        Ok(())
    }
}

impl Decode for Photo {}

impl Decode for Video {}

/// Reads `null` as the default value. The key itself stays required.
pub(crate) fn nullable<'de, D, T>(deserializer: D) -> core::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

pub fn from_value<T: Decode>(value: Value) -> Result<T> {
    let decoded: T = serde_json::from_value(value).map_err(Error::malformed)?;
    decoded.check()?;

    Ok(decoded)
}

pub fn from_str<T: Decode>(json: &str) -> Result<T> {
    let decoded: T = serde_json::from_str(json).map_err(Error::malformed)?;
    decoded.check()?;

    Ok(decoded)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    fn photo_json(id: u64) -> Value {
        json!({
            "id": id,
            "width": 3066,
            "height": 3968,
            "url": format!("https://www.pexels.com/photo/{id}/"),
            "photographer": "Andrea Piacquadio",
            "photographer_url": "https://www.pexels.com/@olly",
            "photographer_id": 3149039,
            "avg_color": "#978E82",
            "src": {
                "original": "https://images.pexels.com/photos/original.jpeg",
                "large": "https://images.pexels.com/photos/large.jpeg",
                "large2x": "https://images.pexels.com/photos/large2x.jpeg",
                "medium": "https://images.pexels.com/photos/medium.jpeg",
                "small": "https://images.pexels.com/photos/small.jpeg",
                "portrait": "https://images.pexels.com/photos/portrait.jpeg",
                "landscape": "https://images.pexels.com/photos/landscape.jpeg",
                "tiny": "https://images.pexels.com/photos/tiny.jpeg"
            },
            "liked": false,
            "alt": "Brown Rocks During Golden Hour"
        })
    }

    fn video_json(id: u64) -> Value {
        json!({
            "id": id,
            "width": 1920,
            "height": 1080,
            "url": format!("https://www.pexels.com/video/{id}/"),
            "image": "https://images.pexels.com/videos/preview.jpeg",
            "duration": 8,
            "user": { "id": 680589, "name": "Joey Farina", "url": "https://www.pexels.com/@joey" },
            "video_files": [
                { "id": 9581, "quality": "hd", "file_type": "video/mp4", "width": 1920, "height": 1080, "fps": 29.97, "link": "https://player.vimeo.com/9581" },
                { "id": 9582, "quality": "sd", "file_type": "video/mp4", "width": 640, "height": 360, "link": "https://player.vimeo.com/9582" }
            ],
            "video_pictures": [
                { "id": 308178, "picture": "https://static-videos.pexels.com/0.jpg", "nr": 0 },
                { "id": 308179, "picture": "https://static-videos.pexels.com/1.jpg", "nr": 1 }
            ]
        })
    }

    #[test]
    fn photo_ignores_unknown_fields() {
        let photo: Photo = from_value(photo_json(2014422)).unwrap();

        assert_eq!(photo.id(), 2014422);
        assert_eq!(photo.photographer_id(), 3149039);
        assert_eq!(photo.src().get(SrcSize::Tiny), photo.src().tiny());
        assert_eq!(photo.src().large2x(), "https://images.pexels.com/photos/large2x.jpeg");
        assert_eq!(photo.media_type(), "Photo");
    }

    #[test]
    fn missing_required_field_is_malformed() {
        let mut json = photo_json(1);
        json["src"].as_object_mut().unwrap().remove("tiny");

        let result = from_value::<Photo>(json);
        assert!(matches!(result, Err(Error::MalformedResponse(_))), "{result:?}");

        let mut json = video_json(1);
        json.as_object_mut().unwrap().remove("user");
        assert!(matches!(from_value::<Video>(json), Err(Error::MalformedResponse(_))));
    }

    #[test]
    fn photo_with_null_color_and_alt() {
        let mut json = photo_json(3);
        json["avg_color"] = Value::Null;
        json["alt"] = Value::Null;

        let photo: Photo = from_value(json).unwrap();
        assert_eq!(photo.avg_color(), "");
        assert_eq!(photo.alt(), "");

        let mut json = photo_json(3);
        json.as_object_mut().unwrap().remove("alt");
        assert!(matches!(from_value::<Photo>(json), Err(Error::MalformedResponse(_))));
    }

    #[test]
    fn video_with_hls_rendition() {
        let mut json = video_json(4);
        json["video_files"]
            .as_array_mut()
            .unwrap()
            .push(json!({
                "id": 9583,
                "quality": null,
                "file_type": "video/mp4",
                "width": null,
                "height": null,
                "fps": null,
                "link": "https://player.vimeo.com/external/hls.m3u8"
            }));

        let video: Video = from_value(json).unwrap();
        let hls = &video.video_files()[2];
        assert_eq!(hls.quality(), "");
        assert_eq!(hls.width(), None);
        assert_eq!(hls.height(), None);
        assert_eq!(video.video_files()[0].width(), Some(1920));
    }

    #[test]
    fn video_nested_lists() {
        let video: Video = from_value(video_json(857251)).unwrap();

        assert_eq!(video.user().name(), "Joey Farina");
        assert_eq!(video.video_files().len(), 2);
        assert_eq!(video.video_files()[1].quality(), "sd");
        assert_eq!(video.video_pictures()[1].nr(), 1);
        assert_eq!(video.media_type(), "Video");
    }

    #[test]
    fn empty_photo_response() {
        let response: PhotoResponse =
            from_str(r#"{ "photos": [], "page": 1, "per_page": 15, "total_results": 0 }"#).unwrap();

        assert!(response.photos().is_empty());
        assert_eq!(response.page(), 1);
        assert_eq!(response.per_page(), 15);
        assert_eq!(response.total_results(), 0);
        assert_eq!(response.prev_page(), "");
        assert_eq!(response.next_page(), "");
        assert!(!response.has_next_page());
    }

    #[test]
    fn listing_larger_than_page_is_malformed() {
        let json = json!({
            "photos": [photo_json(1), photo_json(2)],
            "page": 1,
            "per_page": 1,
            "total_results": 2,
            "next_page": "https://api.pexels.com/v1/search?page=2&per_page=1&query=nature"
        });

        assert!(matches!(from_value::<PhotoResponse>(json), Err(Error::MalformedResponse(_))));
    }

    #[test]
    fn page_zero_is_malformed() {
        let result = from_str::<PhotoResponse>(
            r#"{ "photos": [], "page": 0, "per_page": 15, "total_results": 0 }"#,
        );

        assert!(matches!(result, Err(Error::MalformedResponse(_))), "{result:?}");
    }

    #[test]
    fn video_response_url_is_optional() {
        let json = json!({
            "videos": [video_json(1)],
            "page": 2,
            "per_page": 15,
            "total_results": 40,
            "prev_page": "https://api.pexels.com/videos/popular?page=1&per_page=15"
        });

        let response: VideoResponse = from_value(json).unwrap();
        assert_eq!(response.url(), "");
        assert!(response.has_prev_page());
        assert_eq!(response.videos()[0].id(), 1);
    }

    #[test]
    fn collection_response() {
        let json = json!({
            "collections": [{
                "id": "9mp14cx",
                "title": "Cool Cats",
                "description": null,
                "private": false,
                "media_count": 6,
                "photos_count": 5,
                "videos_count": 1
            }],
            "page": 1,
            "per_page": 1,
            "total_results": 5
        });

        let response: CollectionResponse = from_value(json.clone()).unwrap();
        assert_eq!(response.collections()[0].description(), "");

        // `description` may be null but not absent.
        let mut json = json;
        json["collections"][0]
            .as_object_mut()
            .unwrap()
            .remove("description");
        assert!(matches!(
            from_value::<CollectionResponse>(json),
            Err(Error::MalformedResponse(_))
        ));

        assert_eq!(response.collections()[0].id(), "9mp14cx");
        assert_eq!(response.collections()[0].videos_count(), 1);
        assert!(!response.collections()[0].is_private());
    }

    #[test]
    fn collection_media_drops_unknown_items() {
        let mut photo = photo_json(10);
        photo["type"] = json!("Photo");

        let json = json!({
            "id": "8xntbhr",
            "media": [photo, { "type": "Unknown", "id": 11 }],
            "page": 1,
            "per_page": 15,
            "total_results": 2
        });

        let response: CollectionMediaResponse = from_value(json).unwrap();
        assert_eq!(response.id(), "8xntbhr");
        assert_eq!(response.media().len(), 1);
        assert_eq!(response.media()[0].media_type(), "Photo");
        assert_eq!(response.photos().next().map(Photo::id), Some(10));
    }

    #[test]
    fn collection_media_mixed() {
        let mut photo = photo_json(10);
        photo["type"] = json!("Photo");
        let mut video = video_json(20);
        video["type"] = json!("Video");

        let json = json!({
            "id": "8xntbhr",
            "media": [video, { "id": 30 }, photo],
            "page": 1,
            "per_page": 15,
            "total_results": 3
        });

        let response: CollectionMediaResponse = from_value(json).unwrap();
        let types: Vec<_> = response.media().iter().map(Media::media_type).collect();
        assert_eq!(types, vec!["Video", "Photo"]);
        assert_eq!(response.videos().count(), 1);
    }

    #[test]
    fn collection_media_incomplete_known_item_fails() {
        let json = json!({
            "id": "8xntbhr",
            "media": [{ "type": "Video", "id": 1 }],
            "page": 1,
            "per_page": 15,
            "total_results": 1
        });

        assert!(matches!(
            from_value::<CollectionMediaResponse>(json),
            Err(Error::MalformedResponse(_))
        ));
    }

    #[test]
    fn media_serializes_with_tag() {
        let media = Media::from_value({
            let mut photo = photo_json(5);
            photo["type"] = json!("Photo");
            photo
        })
        .unwrap()
        .unwrap();

        let value = serde_json::to_value(&media).unwrap();
        assert_eq!(value["type"], "Photo");
        assert_eq!(value["id"], 5);
    }
}
