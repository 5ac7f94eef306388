use std::{str::FromStr, time::Duration};

use bytes::Bytes;
use reqwest::{
    Client as HttpClient, Method, RequestBuilder, Response, StatusCode,
    header::{AUTHORIZATION, HeaderMap, HeaderValue},
};
use serde_json::Value;
use tracing::{debug, warn};

pub mod constants;
pub mod error;
pub mod models;
pub mod params;
pub mod result;

pub use error::Error;
pub use models::{
    Collection, CollectionMediaResponse, CollectionResponse, Media, Page, Photo, PhotoResponse,
    Src, SrcSize, User, Video, VideoFile, VideoPicture, VideoResponse,
};
pub use params::{
    CollectionMediaQuery, Extra, Pagination, PhotoSearch, PopularVideos, VideoSearch,
};
pub use result::Result;

use models::Decode;

pub const PHOTO_ENDPOINT: &str = "https://api.pexels.com/v1";
pub const VIDEO_ENDPOINT: &str = "https://api.pexels.com/videos";

/// Environment variable read by [`Client::new_from_env`].
pub const API_KEY_VAR: &str = "PEXELS_API_KEY";

/// Selects the base URL a request is sent to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceKind {
    Photo,
    Video,
}

impl FromStr for ResourceKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "photo" => Ok(Self::Photo),
            "video" => Ok(Self::Video),
            _ => Err(Error::invalid(format!("invalid resource kind {s:?}"))),
        }
    }
}

/// Per-request settings on top of the client defaults.
#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    pub timeout: Option<Duration>,
}

/// A successful response body.
#[derive(Debug, Clone, PartialEq)]
pub enum Body {
    Json(Value),
    /// The body was not valid JSON.
    Text(String),
}

impl Body {
    pub fn decode<T: Decode>(self) -> Result<T> {
        match self {
            Self::Json(value) => models::from_value(value),
            Self::Text(_) => Err(Error::MalformedResponse("expected a JSON body".to_owned())),
        }
    }
}

pub struct ClientBuilder {
    api_key: String,
    photo_endpoint: String,
    video_endpoint: String,
    timeout: Option<Duration>,
}

impl ClientBuilder {
    pub fn photo_endpoint<T: Into<String>>(mut self, endpoint: T) -> Self {
        self.photo_endpoint = endpoint.into();
        self
    }

    pub fn video_endpoint<T: Into<String>>(mut self, endpoint: T) -> Self {
        self.video_endpoint = endpoint.into();
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn build(self) -> Result<Client> {
        let mut auth = HeaderValue::from_str(&self.api_key).map_err(|_| Error::InvalidApiKey)?;
        auth.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, auth);

        let mut http = HttpClient::builder().default_headers(headers);
        if let Some(timeout) = self.timeout {
            http = http.timeout(timeout);
        }

        Ok(Client {
            http: http.build()?,
            photo_endpoint: self.photo_endpoint.trim_end_matches('/').to_owned(),
            video_endpoint: self.video_endpoint.trim_end_matches('/').to_owned(),
        })
    }
}

/// Pexels API client.
///
/// Cloning is cheap and clones share one connection pool.
#[derive(Debug, Clone)]
pub struct Client {
    http: HttpClient,
    photo_endpoint: String,
    video_endpoint: String,
}

impl Client {
    pub fn new<T: AsRef<str>>(api_key: T) -> Result<Self> {
        Self::builder(api_key).build()
    }

    pub fn new_from_env() -> Result<Self> {
        let api_key = std::env::var(API_KEY_VAR).map_err(|_| Error::InvalidApiKey)?;

        Self::new(api_key)
    }

    pub fn builder<T: AsRef<str>>(api_key: T) -> ClientBuilder {
        ClientBuilder {
            api_key: api_key.as_ref().to_owned(),
            photo_endpoint: PHOTO_ENDPOINT.to_owned(),
            video_endpoint: VIDEO_ENDPOINT.to_owned(),
            timeout: None,
        }
    }

    pub async fn search_photos(&self, search: &PhotoSearch) -> Result<PhotoResponse> {
        search.validate()?;

        self.get("search", ResourceKind::Photo, &search.query()).await
    }

    pub async fn curated_photos(&self, pagination: &Pagination) -> Result<PhotoResponse> {
        pagination.validate()?;

        self.get("curated", ResourceKind::Photo, &pagination.query()).await
    }

    pub async fn photo(&self, id: u64) -> Result<Photo> {
        self.get(&format!("photos/{id}"), ResourceKind::Photo, &[]).await
    }

    pub async fn search_videos(&self, search: &VideoSearch) -> Result<VideoResponse> {
        search.validate()?;

        self.get("search", ResourceKind::Video, &search.query()).await
    }

    pub async fn popular_videos(&self, popular: &PopularVideos) -> Result<VideoResponse> {
        popular.validate()?;

        self.get("popular", ResourceKind::Video, &popular.query()).await
    }

    pub async fn video(&self, id: u64) -> Result<Video> {
        self.get(&format!("videos/{id}"), ResourceKind::Video, &[]).await
    }

    pub async fn featured_collections(
        &self,
        pagination: &Pagination,
    ) -> Result<CollectionResponse> {
        pagination.validate()?;

        let query = pagination.query();
        self.get("collections/featured", ResourceKind::Photo, &query).await
    }

    /// Collections of the owner of the API key.
    pub async fn my_collections(&self, pagination: &Pagination) -> Result<CollectionResponse> {
        pagination.validate()?;

        self.get("collections", ResourceKind::Photo, &pagination.query()).await
    }

    pub async fn collection_media<T: AsRef<str>>(
        &self,
        id: T,
        query: &CollectionMediaQuery,
    ) -> Result<CollectionMediaResponse> {
        let id = id.as_ref();
        if id.is_empty() {
            return Err(Error::invalid("collection id can not be empty"));
        }

        query.validate()?;

        self.get(&format!("collections/{id}"), ResourceKind::Photo, &query.query()).await
    }

    /// Downloads a media file, e.g. one of the [`Src`] URLs of a photo.
    pub async fn download<T: AsRef<str>>(&self, url: T) -> Result<Bytes> {
        let request = self.http.get(url.as_ref());

        let response = Self::send_request(request).await?;
        let data = response.bytes().await?;

        Ok(data)
    }

    /// Sends one request to the API and classifies the response.
    ///
    /// `path` is relative to the base URL selected by `kind`.
    pub async fn request<Q>(
        &self,
        path: &str,
        kind: ResourceKind,
        method: Method,
        query: &Q,
        options: &RequestOptions,
    ) -> Result<Body>
    where
        Q: serde::Serialize + ?Sized,
    {
        let endpoint = match kind {
            ResourceKind::Photo => &self.photo_endpoint,
            ResourceKind::Video => &self.video_endpoint,
        };
        let url = format!("{endpoint}/{}", path.trim_start_matches('/'));

        let mut request = self.http.request(method.clone(), &url).query(query);
        if let Some(timeout) = options.timeout {
            request = request.timeout(timeout);
        }

        debug!(%method, %url, "sending request");
        let response = Self::send_request(request).await?;
        let text = response.text().await?;

        match serde_json::from_str(&text) {
            Ok(value) => Ok(Body::Json(value)),

            Err(err) => {
                warn!(%url, %err, "response body is not JSON");

                Ok(Body::Text(text))
            }
        }
    }

    async fn get<T: Decode>(
        &self,
        path: &str,
        kind: ResourceKind,
        query: &[(String, String)],
    ) -> Result<T> {
        self.request(path, kind, Method::GET, query, &RequestOptions::default())
            .await?
            .decode()
    }

    async fn send_request(request: RequestBuilder) -> Result<Response> {
        let response = request.send().await?;
        let status = response.status();

        debug!(%status, url = %response.url(), "received response");

        match status {
            StatusCode::OK | StatusCode::CREATED => Ok(response),
            StatusCode::BAD_REQUEST => Err(Error::BadRequest),
            StatusCode::TOO_MANY_REQUESTS => Err(Error::QuotaExceeded),
            _ => Err(Error::Api {
                status,
                reason: status.canonical_reason().unwrap_or_default().to_owned(),
            }),
        }
    }
}
