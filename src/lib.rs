use crate::{models::PostSummary, utility::reddit::RedditError};

pub mod config;
pub mod models;
pub mod utility;

pub use utility::reddit::get_post_data;

pub struct Env {
    pub client: reqwest::Client,
}

impl Env {
    pub fn new() -> Self {
        Env {
            client: reqwest::Client::new(),
        }
    }
}

impl Default for Env {
    fn default() -> Self {
        Self::new()
    }
}

/// Scrapes a post from a post link as pasted from a browser or app: share links
/// are followed and tracking query strings dropped before fetching.
pub async fn scrape_post(env: &Env, url: &str) -> Result<PostSummary, RedditError> {
    log::info!["scrape_post({url})"];

    let post_url = utility::reddit::resolve_share_link(env, url).await?;
    get_post_data(env, &utility::reddit::without_query(&post_url)).await
}
