use crate::{
    config,
    utility::{self, reddit::RedditError, reddit::RedditPost},
};
use serde::{Deserialize, Serialize};

/// The fields of a Reddit post worth keeping around.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostSummary {
    pub title: String,
    pub author: String,
    pub text: String,
    #[serde(rename = "publishDate")]
    pub publish_date: String,
    pub url: String,
}

impl PostSummary {
    pub fn from_reddit_post(post: RedditPost) -> Result<Self, RedditError> {
        let publish_date = utility::format_utc_timestamp(post.created_utc).ok_or_else(|| {
            RedditError::MalformedResponse(format!(
                "created_utc is not a valid timestamp: {}",
                post.created_utc
            ))
        })?;

        Ok(PostSummary {
            title: post.title,
            author: post.author,
            text: post.selftext,
            publish_date,
            url: format!("{}{}", config::SITE_ORIGIN, post.permalink),
        })
    }
}
