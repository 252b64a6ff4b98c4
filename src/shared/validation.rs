use std::borrow::Cow;

use lazy_static::lazy_static;
use regex::Regex;
use validator::ValidationError;

use crate::shared::constants::{MAX_KEYWORDS, MAX_KEYWORD_LEN};

lazy_static! {
    /// Regex for dotted numeric app versions (1 to 4 components)
    /// - Valid: "2", "2.2", "2.2.0", "1.0.0.15"
    /// - Invalid: "v2.2", "2..0", "2.2.0-beta", ""
    pub static ref VERSION_REGEX: Regex = Regex::new(r"^\d+(\.\d+){0,3}$").unwrap();
}

/// Keyword list limits: at most `MAX_KEYWORDS` entries of at most `MAX_KEYWORD_LEN` chars
pub fn validate_keywords(keywords: &[String]) -> Result<(), ValidationError> {
    if keywords.len() > MAX_KEYWORDS {
        return Err(ValidationError::new("keywords_count").with_message(Cow::Owned(format!(
            "At most {} keywords are allowed",
            MAX_KEYWORDS
        ))));
    }

    if let Some(keyword) = keywords
        .iter()
        .find(|k| k.chars().count() > MAX_KEYWORD_LEN)
    {
        return Err(
            ValidationError::new("keyword_length").with_message(Cow::Owned(format!(
                "Keyword '{}' exceeds {} characters",
                keyword, MAX_KEYWORD_LEN
            ))),
        );
    }

    Ok(())
}

/// Image URLs must be fetchable by the apps, so only http(s) is accepted
pub fn validate_http_url(url: &str) -> Result<(), ValidationError> {
    let lower = url.to_ascii_lowercase();
    if lower.starts_with("https://") || lower.starts_with("http://") {
        Ok(())
    } else {
        Err(ValidationError::new("url_scheme")
            .with_message(Cow::Borrowed("imageUrl must use http or https")))
    }
}

/// Split free-text keyword input on commas, trim, drop empties and
/// case-insensitive duplicates (first spelling wins).
pub fn normalize_keywords<I, S>(raw: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut seen = std::collections::HashSet::new();
    raw.into_iter()
        .flat_map(|entry| {
            entry
                .as_ref()
                .split(',')
                .map(|k| k.trim().to_string())
                .collect::<Vec<_>>()
        })
        .filter(|k| !k.is_empty())
        .filter(|k| seen.insert(k.to_lowercase()))
        .collect()
}
