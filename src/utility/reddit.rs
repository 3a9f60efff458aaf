//! Fetches posts from [Reddit](https://www.reddit.com) through the public
//! `.json` view of a post page.
use crate::{Env, config, models::PostSummary};
use hyper::ext::ReasonPhrase;
use reqwest::{Response, header};
use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;
use url::Url;

#[derive(Debug, Error)]
pub enum RedditError {
    /// Transport failure or a non-success status.
    #[error("Failed to fetch: {0}")]
    Fetch(String),
    /// The body did not have the `[0].data.children[0].data` shape.
    #[error("Malformed response: {0}")]
    MalformedResponse(String),
}

impl From<reqwest::Error> for RedditError {
    fn from(err: reqwest::Error) -> Self {
        RedditError::Fetch(err.to_string())
    }
}

/// The `data` object of the first child of the first listing.
#[derive(Debug, Clone, Deserialize)]
pub struct RedditPost {
    pub title: String,
    pub author: String,
    pub selftext: String,
    pub created_utc: f64,
    pub permalink: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PostLink {
    /// `/r/<sub>/comments/<id>/...` or `/user/<name>/comments/<id>/...`
    Comments { id: String },
    /// `/r/<sub>/s/<code>` or `/u/<name>/s/<code>`, which redirects to a comments link.
    Share,
}

pub fn api_url(post_url: &str) -> String {
    let trimmed = post_url.strip_suffix('/').unwrap_or(post_url);
    format!("{trimmed}{}", config::JSON_SUFFIX)
}

pub async fn get_post_data(env: &Env, post_url: &str) -> Result<PostSummary, RedditError> {
    log::info!["get_post_data({post_url})"];

    let listings = fetch_listings(env, &api_url(post_url)).await?;
    let post = extract_post(&listings)?;
    PostSummary::from_reddit_post(post)
}

async fn fetch_listings(env: &Env, api_url: &str) -> Result<Value, RedditError> {
    let response = env
        .client
        .get(api_url)
        .header(header::USER_AGENT, config::USER_AGENT)
        .send()
        .await?;

    let status = response.status();
    if !status.is_success() {
        log::error!["{api_url} responded with {status}"];
        return Err(RedditError::Fetch(reason_phrase(&response)));
    }

    let bytes = response.bytes().await?;
    serde_json::from_slice(&bytes)
        .map_err(|e| RedditError::MalformedResponse(format!("body is not valid JSON: {e}")))
}

pub fn extract_post(listings: &Value) -> Result<RedditPost, RedditError> {
    let missing = |path: &str| RedditError::MalformedResponse(format!("missing {path}"));

    let data = listings
        .get(0)
        .ok_or_else(|| missing("[0]"))?
        .get("data")
        .ok_or_else(|| missing("[0].data"))?
        .get("children")
        .ok_or_else(|| missing("[0].data.children"))?
        .get(0)
        .ok_or_else(|| missing("[0].data.children[0]"))?
        .get("data")
        .ok_or_else(|| missing("[0].data.children[0].data"))?;

    RedditPost::deserialize(data)
        .map_err(|e| RedditError::MalformedResponse(format!("[0].data.children[0].data: {e}")))
}

pub fn classify_post_url(url: &str) -> Option<PostLink> {
    let parsed = Url::parse(url).ok()?;
    let segments: Vec<&str> = parsed.path_segments()?.filter(|s| !s.is_empty()).collect();

    match segments.as_slice() {
        [scope, _, kind, id] | [scope, _, kind, id, _]
            if (segment_is(scope, "r") || segment_is(scope, "user"))
                && segment_is(kind, "comments")
                && id.chars().all(|c| c.is_ascii_alphanumeric()) =>
        {
            Some(PostLink::Comments { id: id.to_string() })
        }
        [scope, _, kind, code]
            if (segment_is(scope, "r") || segment_is(scope, "u"))
                && segment_is(kind, "s")
                && code
                    .chars()
                    .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-') =>
        {
            Some(PostLink::Share)
        }
        _ => None,
    }
}

pub fn post_id_from_url(url: &str) -> Option<String> {
    match classify_post_url(url)? {
        PostLink::Comments { id } => Some(id),
        PostLink::Share => None,
    }
}

/// Follows the redirect behind a share link. Any other URL comes back untouched.
pub async fn resolve_share_link(env: &Env, url: &str) -> Result<String, RedditError> {
    if classify_post_url(url) != Some(PostLink::Share) {
        return Ok(url.to_owned());
    }

    log::info!["resolve_share_link({url})"];

    let response = env
        .client
        .head(url)
        .header(header::USER_AGENT, config::USER_AGENT)
        .send()
        .await?;

    let status = response.status();
    if !status.is_success() {
        log::error!["{url} responded with {status}"];
        return Err(RedditError::Fetch(reason_phrase(&response)));
    }

    let mut resolved = response.url().clone();
    clear_query(&mut resolved);
    let resolved = String::from(resolved);
    log::debug!["{url} resolved to {resolved}"];
    Ok(resolved)
}

/// Drops the query string and fragment of a post URL, since `.json` has to
/// follow the path. URLs without either come back untouched.
pub fn without_query(url: &str) -> String {
    match Url::parse(url) {
        Ok(mut parsed) if parsed.query().is_some() || parsed.fragment().is_some() => {
            clear_query(&mut parsed);
            parsed.into()
        }
        _ => url.to_owned(),
    }
}

fn clear_query(url: &mut Url) {
    url.set_query(None);
    url.set_fragment(None);
}

/// The server's own reason phrase when it sent a non-standard one, else the
/// canonical phrase for the status code.
fn reason_phrase(response: &Response) -> String {
    if let Some(reason) = response.extensions().get::<ReasonPhrase>() {
        return String::from_utf8_lossy(reason.as_bytes()).into_owned();
    }
    let status = response.status();
    status
        .canonical_reason()
        .unwrap_or(status.as_str())
        .to_owned()
}

fn segment_is(segment: &str, expected: &str) -> bool {
    segment.eq_ignore_ascii_case(expected)
}
