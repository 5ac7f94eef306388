//! Client for the Pexels photo and video API.
//!
//! ```no_run
//! # async fn run() -> pexels_search::Result<()> {
//! use pexels_search::{Client, PhotoSearch};
//!
//! let client = Client::new_from_env()?;
//! let photos = client
//!     .search_photos(&PhotoSearch::new("nature").orientation("landscape"))
//!     .await?;
//!
//! for photo in photos.photos() {
//!     println!("Photo by {} on Pexels: {}", photo.photographer(), photo.url());
//! }
//! # Ok(())
//! # }
//! ```

pub mod pexels;

pub use pexels::{
    Body, Client, ClientBuilder, Collection, CollectionMediaQuery, CollectionMediaResponse,
    CollectionResponse, Error, Media, Page, Pagination, Photo, PhotoResponse, PhotoSearch,
    PopularVideos, RequestOptions, ResourceKind, Result, Src, SrcSize, User, Video, VideoFile,
    VideoPicture, VideoResponse, VideoSearch,
};
