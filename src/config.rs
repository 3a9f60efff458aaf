pub const USER_AGENT: &str = "reddit-post-scraper/1.0";
pub const SITE_ORIGIN: &str = "https://reddit.com";
pub const JSON_SUFFIX: &str = ".json";
pub const EXAMPLE_POST_URL: &str = "https://www.reddit.com/r/LocalLLaMA/comments/15sgg4m/what_modules_should_i_target_when_training_using/";
pub const PUBLISH_DATE_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";
pub const PUBLISH_DATE_FORMAT_FRACTIONAL: &str = "%Y-%m-%dT%H:%M:%S%.6fZ";
