//! Searches Pexels for photos and saves them to a folder.

use std::{fs, io, path::PathBuf};

use bytes::Bytes;
use clap::Parser;
use thiserror::Error;
use tokio::task::JoinSet;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use pexels_search::{Client, Photo, PhotoSearch, SrcSize, pexels};

#[derive(Debug, Error)]
enum Error {
    #[error("{0}")]
    Io(#[from] io::Error),

    #[error("{0}")]
    Pexels(#[from] pexels::Error),

    #[error("Could not locate the pictures folder, pass --output")]
    MissingFolder,
}

type Result<T> = core::result::Result<T, Error>;

/// Search Pexels and download the matching photos
#[derive(Parser, Debug)]
#[command(name = "pexels-fetch")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Search query
    query: String,

    /// API key, read from `.env` when not set
    #[arg(long, env = pexels::API_KEY_VAR, hide_env_values = true)]
    api_key: String,

    /// landscape, portrait or square
    #[arg(long, default_value = "")]
    orientation: String,

    /// Minimum photo size (large, medium, small)
    #[arg(long, default_value = "")]
    size: String,

    /// Color name or hexadecimal code
    #[arg(long, default_value = "")]
    color: String,

    #[arg(long, default_value = "")]
    locale: String,

    #[arg(short, long, default_value_t = 1)]
    page: u32,

    #[arg(short = 'n', long, default_value_t = 15)]
    per_page: u32,

    /// Extra API parameter as key=value, may be repeated
    #[arg(long = "param", value_parser = parse_param)]
    params: Vec<(String, String)>,

    /// Image size to download
    #[arg(short, long, default_value = "large2x")]
    rendition: SrcSize,

    /// Output directory, defaults to <pictures>/Pexels
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Only print the results
    #[arg(long)]
    dry_run: bool,
}

fn parse_param(param: &str) -> core::result::Result<(String, String), String> {
    match param.split_once('=') {
        Some((key, value)) if !key.is_empty() => Ok((key.to_owned(), value.to_owned())),
        _ => Err(format!("expected key=value, got {param:?}")),
    }
}

impl Args {
    fn search(&self) -> PhotoSearch {
        let mut search = PhotoSearch::new(&self.query)
            .orientation(&self.orientation)
            .size(&self.size)
            .color(&self.color)
            .locale(&self.locale)
            .page(self.page)
            .per_page(self.per_page);
        search.extra = self.params.clone();

        search
    }

    fn output(&self) -> Result<PathBuf> {
        match &self.output {
            Some(output) => Ok(output.clone()),
            None => dirs::picture_dir()
                .map(|pictures| pictures.join("Pexels"))
                .ok_or(Error::MissingFolder),
        }
    }
}

/// `<id>-<rendition>.<ext>`, taking the extension from the image URL.
fn file_name(photo: &Photo, rendition: SrcSize) -> String {
    let url = photo.src().get(rendition);
    let path = url.split(['?', '#']).next().unwrap_or_default();
    let extension = path
        .rsplit_once('/')
        .map_or(path, |(_, name)| name)
        .rsplit_once('.')
        .map(|(_, extension)| extension)
        .filter(|extension| !extension.is_empty())
        .unwrap_or("jpg");

    let rendition = serde_json::to_value(rendition)
        .ok()
        .and_then(|value| value.as_str().map(str::to_owned))
        .unwrap_or_default();

    format!("{}-{rendition}.{extension}", photo.id())
}

async fn fetch(args: &Args) -> Result<()> {
    let client = Client::new(&args.api_key)?;

    let response = client.search_photos(&args.search()).await?;
    info!(
        total = response.total_results(),
        count = response.photos().len(),
        "found photos"
    );

    for photo in response.photos() {
        println!("Photo by {} on Pexels: {}", photo.photographer(), photo.url());
    }

    if args.dry_run {
        return Ok(());
    }

    let output = args.output()?;
    fs::create_dir_all(&output)?;

    let mut downloads = JoinSet::<pexels::Result<(Photo, Bytes)>>::new();
    for photo in response.photos().iter().cloned() {
        let client = client.clone();
        let rendition = args.rendition;

        downloads.spawn(async move {
            let data = client.download(photo.src().get(rendition)).await?;

            Ok((photo, data))
        });
    }

    for download in downloads.join_all().await {
        let (photo, data) = download?;

        let path = output.join(file_name(&photo, args.rendition));
        debug!(path = %path.display(), bytes = data.len(), "writing photo");

        fs::write(&path, &data)?;
    }

    if response.has_next_page() {
        info!(next = response.next_page(), "more results available");
    }

    Ok(())
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let args = Args::parse();

    if let Err(e) = fetch(&args).await {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}
