//! Values accepted by the search endpoints.

use std::sync::LazyLock;

use regex::Regex;

/// Desired photo or video orientation.
pub const ORIENTATIONS: &[&str] = &["landscape", "portrait", "square"];

/// Minimum photo or video size.
pub const SIZES: &[&str] = &["large", "medium", "small"];

/// Named photo colors. Hexadecimal codes such as `#ffffff` are accepted as well.
pub const COLORS: &[&str] = &[
    "red",
    "orange",
    "yellow",
    "green",
    "turquoise",
    "blue",
    "violet",
    "pink",
    "brown",
    "black",
    "gray",
    "white",
];

/// Locales a search may be performed in.
pub const LOCALES: &[&str] = &[
    "en-US", "pt-BR", "es-ES", "ca-ES", "de-DE", "it-IT", "fr-FR", "sv-SE", "id-ID", "pl-PL",
    "ja-JP", "zh-TW", "zh-CN", "ko-KR", "th-TH", "nl-NL", "hu-HU", "vi-VN", "cs-CZ", "da-DK",
    "fi-FI", "uk-UA", "el-GR", "ro-RO", "nb-NO", "sk-SK", "tr-TR", "ru-RU",
];

/// Media filter for collection listings.
pub const MEDIA_TYPES: &[&str] = &["photos", "videos"];

/// Largest page the API serves.
pub const MAX_PER_PAGE: u32 = 80;

pub const DEFAULT_PER_PAGE: u32 = 15;

static HEX_COLOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#(?:[0-9a-fA-F]{3}){1,2}$").expect("hex color pattern"));

pub fn is_hex_color(value: &str) -> bool {
    HEX_COLOR.is_match(value)
}

pub fn is_valid_color(value: &str) -> bool {
    value.is_empty() || COLORS.contains(&value) || is_hex_color(value)
}

/// Empty values are always accepted and mean "let the API decide".
pub(crate) fn is_unset_or_one_of(value: &str, accepted: &[&str]) -> bool {
    value.is_empty() || accepted.contains(&value)
}
