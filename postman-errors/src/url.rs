use crate::variables::WILDCARD;
use lazy_static::lazy_static;
use regex::Regex;
use tracing::debug;

lazy_static! {
    static ref PATH_PARAM_REGEX: Regex = Regex::new(r":[^/]+").unwrap();
}

/// Replaces every `:param` path segment with a wildcard.
pub fn normalize_url(url: &str) -> String {
    let replaced = PATH_PARAM_REGEX.replace_all(url, WILDCARD).into_owned();
    debug!("Replaced url params {} => {}", url, replaced);
    replaced
}

/// Longest leading substring shared by all `urls`, compared character by character.
pub fn longest_common_prefix<'a, I: IntoIterator<Item = &'a str>>(urls: I) -> Option<String> {
    let mut urls = urls.into_iter();
    let mut prefix = urls.next()?;

    for url in urls {
        let shared = prefix
            .char_indices()
            .zip(url.chars())
            .find(|((_, lhs), rhs)| lhs != rhs)
            .map(|((index, _), _)| index)
            .unwrap_or_else(|| prefix.len().min(url.len()));
        prefix = &prefix[..shared];
    }

    Some(String::from(prefix))
}
