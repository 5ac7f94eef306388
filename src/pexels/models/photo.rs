use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::pexels::Error;

/// One of the renditions listed in [`Src`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SrcSize {
    #[default]
    Original,
    Large,
    Large2x,
    Medium,
    Small,
    Portrait,
    Landscape,
    Tiny,
}

impl FromStr for SrcSize {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "original" => Ok(Self::Original),
            "large" => Ok(Self::Large),
            "large2x" => Ok(Self::Large2x),
            "medium" => Ok(Self::Medium),
            "small" => Ok(Self::Small),
            "portrait" => Ok(Self::Portrait),
            "landscape" => Ok(Self::Landscape),
            "tiny" => Ok(Self::Tiny),
            _ => Err(Error::invalid(format!("unknown image size {s:?}"))),
        }
    }
}

/// Image URLs of a photo at different sizes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Src {
    original: String,
    large: String,
    large2x: String,
    medium: String,
    small: String,
    portrait: String,
    landscape: String,
    tiny: String,
}

impl Src {
    /// Same size as the photo itself.
    pub fn original(&self) -> &str {
        &self.original
    }

    /// W 940px X H 650px, DPR 1.
    pub fn large(&self) -> &str {
        &self.large
    }

    /// W 940px X H 650px, DPR 2.
    pub fn large2x(&self) -> &str {
        &self.large2x
    }

    /// Height 350px.
    pub fn medium(&self) -> &str {
        &self.medium
    }

    /// Height 130px.
    pub fn small(&self) -> &str {
        &self.small
    }

    /// Cropped to W 800px X H 1200px.
    pub fn portrait(&self) -> &str {
        &self.portrait
    }

    /// Cropped to W 1200px X H 627px.
    pub fn landscape(&self) -> &str {
        &self.landscape
    }

    /// Cropped to W 280px X H 200px.
    pub fn tiny(&self) -> &str {
        &self.tiny
    }

    pub fn get(&self, size: SrcSize) -> &str {
        match size {
            SrcSize::Original => &self.original,
            SrcSize::Large => &self.large,
            SrcSize::Large2x => &self.large2x,
            SrcSize::Medium => &self.medium,
            SrcSize::Small => &self.small,
            SrcSize::Portrait => &self.portrait,
            SrcSize::Landscape => &self.landscape,
            SrcSize::Tiny => &self.tiny,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Photo {
    id: u64,
    width: u32,
    height: u32,
    url: String,
    photographer: String,
    photographer_url: String,
    photographer_id: u64,
    #[serde(deserialize_with = "super::nullable")]
    avg_color: String,
    src: Src,
    #[serde(deserialize_with = "super::nullable")]
    alt: String,
}

impl Photo {
    pub const TYPE: &'static str = "Photo";

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Pexels page of the photo.
    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn photographer(&self) -> &str {
        &self.photographer
    }

    pub fn photographer_url(&self) -> &str {
        &self.photographer_url
    }

    pub fn photographer_id(&self) -> u64 {
        self.photographer_id
    }

    /// Useful as a placeholder while the image loads. Empty when unknown.
    pub fn avg_color(&self) -> &str {
        &self.avg_color
    }

    pub fn src(&self) -> &Src {
        &self.src
    }

    pub fn alt(&self) -> &str {
        &self.alt
    }

    pub fn media_type(&self) -> &'static str {
        Self::TYPE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn src_size_from_str() {
        assert_eq!("large2x".parse::<SrcSize>().unwrap(), SrcSize::Large2x);
        assert_eq!("tiny".parse::<SrcSize>().unwrap(), SrcSize::Tiny);
        assert!(matches!(
            "huge".parse::<SrcSize>(),
            Err(Error::InvalidArgument(_))
        ));
    }
}
