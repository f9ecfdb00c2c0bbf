//! Display fields derived from post content.

use once_cell::sync::Lazy;
use regex::Regex;

static IMAGE_URL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"https?://\S+\.(jpg|jpeg|png|gif|webp)(\?\S+)?").expect("image url pattern")
});

const INFRASTRUCTURE_KEYWORDS: &[&str] = &[
    "architecture",
    "diagram",
    "server",
    "microservice",
    "infrastructure",
    "system design",
];

/// Image links embedded in `content`, in order of appearance.
///
/// Only `jpg`, `jpeg`, `png`, `gif` and `webp` count; a trailing query string
/// is kept as part of the link.
pub fn image_urls(content: &str) -> Vec<String> {
    IMAGE_URL
        .find_iter(content)
        .map(|m| m.as_str().to_string())
        .collect()
}

pub fn contains_images(content: &str) -> bool {
    IMAGE_URL.is_match(content)
}

/// Case-insensitive keyword check for infrastructure / architecture talk.
pub fn is_infrastructure_related(content: &str) -> bool {
    let lower = content.to_lowercase();
    INFRASTRUCTURE_KEYWORDS
        .iter()
        .any(|keyword| lower.contains(keyword))
}
