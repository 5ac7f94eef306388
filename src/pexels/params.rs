//! Search parameters for the paginated endpoints.
//!
//! Every parameter set is validated locally before a request is sent, so a bad
//! value never costs a round trip.

use serde::{Deserialize, Serialize};

use super::{
    constants::{
        DEFAULT_PER_PAGE, LOCALES, MAX_PER_PAGE, MEDIA_TYPES, ORIENTATIONS, SIZES,
        is_unset_or_one_of, is_valid_color,
    },
    Error, Result,
};

pub(crate) type Query = Vec<(String, String)>;

/// Parameters the API accepts that have no typed field here.
pub type Extra = Vec<(String, String)>;

fn push_str(query: &mut Query, key: &str, value: &str) {
    if !value.is_empty() {
        query.push((key.to_owned(), value.to_owned()));
    }
}

fn push_opt(query: &mut Query, key: &str, value: Option<u32>) {
    if let Some(value) = value {
        query.push((key.to_owned(), value.to_string()));
    }
}

fn check_query(query: &str) -> Result<()> {
    if query.trim().is_empty() {
        return Err(Error::invalid("query can not be empty"));
    }

    Ok(())
}

fn check_orientation(orientation: &str) -> Result<()> {
    if !is_unset_or_one_of(orientation, ORIENTATIONS) {
        return Err(Error::invalid(format!(
            "invalid orientation {orientation:?}, supported ones are landscape, portrait and square"
        )));
    }

    Ok(())
}

fn check_size(size: &str) -> Result<()> {
    if !is_unset_or_one_of(size, SIZES) {
        return Err(Error::invalid(format!(
            "invalid size {size:?}, supported ones are large, medium and small"
        )));
    }

    Ok(())
}

fn check_locale(locale: &str) -> Result<()> {
    if !is_unset_or_one_of(locale, LOCALES) {
        return Err(Error::invalid(format!("invalid locale {locale:?}")));
    }

    Ok(())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Pagination {
    pub page: u32,
    pub per_page: u32,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: 1,
            per_page: DEFAULT_PER_PAGE,
        }
    }
}

impl Pagination {
    pub fn new(page: u32, per_page: u32) -> Self {
        Self { page, per_page }
    }

    pub fn validate(&self) -> Result<()> {
        if self.page == 0 {
            return Err(Error::invalid("page starts at 1"));
        }

        if self.per_page > MAX_PER_PAGE {
            return Err(Error::invalid(format!(
                "per_page can not be more than {MAX_PER_PAGE}"
            )));
        }

        if self.per_page == 0 {
            return Err(Error::invalid("per_page must be at least 1"));
        }

        Ok(())
    }

    pub(crate) fn extend_query(&self, query: &mut Query) {
        query.push(("page".to_owned(), self.page.to_string()));
        query.push(("per_page".to_owned(), self.per_page.to_string()));
    }

    pub(crate) fn query(&self) -> Query {
        let mut query = Query::new();
        self.extend_query(&mut query);
        query
    }
}

macro_rules! pagination_setters {
    () => {
        pub fn page(mut self, page: u32) -> Self {
            self.pagination.page = page;
            self
        }

        pub fn per_page(mut self, per_page: u32) -> Self {
            self.pagination.per_page = per_page;
            self
        }
    };
}

macro_rules! extra_setter {
    () => {
        /// Sends `key=value` as is, after the typed parameters. Not validated.
        pub fn param<K: Into<String>, V: ToString>(mut self, key: K, value: V) -> Self {
            self.extra.push((key.into(), value.to_string()));
            self
        }
    };
}

macro_rules! string_setters {
    ($($field:ident),+ $(,)?) => {
        $(
            pub fn $field<T: Into<String>>(mut self, $field: T) -> Self {
                self.$field = $field.into();
                self
            }
        )+
    };
}

/// Parameters of `GET /v1/search`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhotoSearch {
    pub query: String,
    pub orientation: String,
    pub size: String,
    /// One of [`COLORS`](super::constants::COLORS) or a `#rgb`/`#rrggbb` code.
    pub color: String,
    pub locale: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub extra: Extra,
    #[serde(flatten)]
    pub pagination: Pagination,
}

impl PhotoSearch {
    pub fn new<T: Into<String>>(query: T) -> Self {
        Self {
            query: query.into(),
            ..Default::default()
        }
    }

    string_setters!(orientation, size, color, locale);
    pagination_setters!();
    extra_setter!();

    pub fn validate(&self) -> Result<()> {
        check_query(&self.query)?;
        check_orientation(&self.orientation)?;

        if !is_valid_color(&self.color) {
            return Err(Error::invalid(format!(
                "invalid color name or hexadecimal code {:?}",
                self.color
            )));
        }

        check_size(&self.size)?;
        check_locale(&self.locale)?;
        self.pagination.validate()
    }

    pub(crate) fn query(&self) -> Query {
        let mut query = vec![("query".to_owned(), self.query.clone())];
        push_str(&mut query, "orientation", &self.orientation);
        push_str(&mut query, "size", &self.size);
        push_str(&mut query, "color", &self.color);
        push_str(&mut query, "locale", &self.locale);
        self.pagination.extend_query(&mut query);
        query.extend(self.extra.iter().cloned());
        query
    }
}

/// Parameters of `GET /videos/search`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VideoSearch {
    pub query: String,
    pub orientation: String,
    pub size: String,
    pub locale: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub extra: Extra,
    #[serde(flatten)]
    pub pagination: Pagination,
}

impl VideoSearch {
    pub fn new<T: Into<String>>(query: T) -> Self {
        Self {
            query: query.into(),
            ..Default::default()
        }
    }

    string_setters!(orientation, size, locale);
    pagination_setters!();
    extra_setter!();

    pub fn validate(&self) -> Result<()> {
        check_query(&self.query)?;
        check_orientation(&self.orientation)?;
        check_size(&self.size)?;
        check_locale(&self.locale)?;
        self.pagination.validate()
    }

    pub(crate) fn query(&self) -> Query {
        let mut query = vec![("query".to_owned(), self.query.clone())];
        push_str(&mut query, "orientation", &self.orientation);
        push_str(&mut query, "size", &self.size);
        push_str(&mut query, "locale", &self.locale);
        self.pagination.extend_query(&mut query);
        query.extend(self.extra.iter().cloned());
        query
    }
}

/// Parameters of `GET /videos/popular`. Unset filters are left to the API.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PopularVideos {
    pub min_width: Option<u32>,
    pub min_height: Option<u32>,
    /// Seconds.
    pub min_duration: Option<u32>,
    /// Seconds.
    pub max_duration: Option<u32>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub extra: Extra,
    #[serde(flatten)]
    pub pagination: Pagination,
}

impl PopularVideos {
    pub fn min_width(mut self, min_width: u32) -> Self {
        self.min_width = Some(min_width);
        self
    }

    pub fn min_height(mut self, min_height: u32) -> Self {
        self.min_height = Some(min_height);
        self
    }

    pub fn min_duration(mut self, min_duration: u32) -> Self {
        self.min_duration = Some(min_duration);
        self
    }

    pub fn max_duration(mut self, max_duration: u32) -> Self {
        self.max_duration = Some(max_duration);
        self
    }

    pagination_setters!();
    extra_setter!();

    pub fn validate(&self) -> Result<()> {
        self.pagination.validate()
    }

    pub(crate) fn query(&self) -> Query {
        let mut query = Query::new();
        push_opt(&mut query, "min_width", self.min_width);
        push_opt(&mut query, "min_height", self.min_height);
        push_opt(&mut query, "min_duration", self.min_duration);
        push_opt(&mut query, "max_duration", self.max_duration);
        self.pagination.extend_query(&mut query);
        query.extend(self.extra.iter().cloned());
        query
    }
}

/// Parameters of `GET /v1/collections/{id}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CollectionMediaQuery {
    /// `photos`, `videos`, or empty for both.
    #[serde(rename = "type")]
    pub media_type: String,
    #[serde(flatten)]
    pub pagination: Pagination,
}

impl CollectionMediaQuery {
    string_setters!(media_type);
    pagination_setters!();

    pub fn validate(&self) -> Result<()> {
        if !is_unset_or_one_of(&self.media_type, MEDIA_TYPES) {
            return Err(Error::invalid(format!(
                "invalid media type {:?}, supported ones are photos and videos",
                self.media_type
            )));
        }

        self.pagination.validate()
    }

    pub(crate) fn query(&self) -> Query {
        let mut query = Query::new();
        push_str(&mut query, "type", &self.media_type);
        self.pagination.extend_query(&mut query);
        query
    }
}
