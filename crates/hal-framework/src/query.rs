//! # Query Parameter Rewriting
//!
//! Small helpers that rewrite one query parameter of a URL the caller handed
//! over. They never decode the URL: existing pairs are compared by their raw
//! key and left byte-for-byte intact, as is the fragment. The key and value
//! written by [`replace_query_param`] are form-urlencoded.

struct SplitUrl<'a> {
    base: &'a str,
    pairs: Vec<&'a str>,
    fragment: Option<&'a str>,
}

fn split(url: &str) -> SplitUrl<'_> {
    let (rest, fragment) = match url.split_once('#') {
        Some((rest, fragment)) => (rest, Some(fragment)),
        None => (url, None),
    };
    let (base, query) = match rest.split_once('?') {
        Some((base, query)) => (base, query),
        None => (rest, ""),
    };
    SplitUrl {
        base,
        pairs: query.split('&').filter(|pair| !pair.is_empty()).collect(),
        fragment,
    }
}

fn key_of(pair: &str) -> &str {
    pair.split_once('=').map_or(pair, |(key, _)| key)
}

fn encode(raw: &str) -> String {
    form_urlencoded::byte_serialize(raw.as_bytes()).collect()
}

fn join(base: &str, pairs: &[String], template: Option<String>, fragment: Option<&str>) -> String {
    let mut url = base.to_string();
    if !pairs.is_empty() {
        url.push('?');
        url.push_str(&pairs.join("&"));
    }
    if let Some(template) = template {
        url.push_str(&template);
    }
    if let Some(fragment) = fragment {
        url.push('#');
        url.push_str(fragment);
    }
    url
}

/// Sets `key` to `value`, replacing the first occurrence in place and
/// dropping any repeats. A missing key is appended. Both `key` and `value`
/// are form-urlencoded, so an opaque value such as a cursor survives intact.
///
/// ```rust
/// use hal_framework::query::replace_query_param;
///
/// assert_eq!(replace_query_param("/users?page=2&q=a", "page", "3"), "/users?page=3&q=a");
/// assert_eq!(replace_query_param("/users", "page", "2"), "/users?page=2");
/// assert_eq!(replace_query_param("/users", "cursor", "a=b"), "/users?cursor=a%3Db");
/// ```
pub fn replace_query_param(url: &str, key: &str, value: impl ToString) -> String {
    let split = split(url);
    let key = encode(key);
    let replacement = format!("{}={}", key, encode(&value.to_string()));
    let mut pairs = Vec::with_capacity(split.pairs.len() + 1);
    let mut replaced = false;
    for pair in split.pairs {
        if key_of(pair) == key.as_str() {
            if !replaced {
                pairs.push(replacement.clone());
                replaced = true;
            }
        } else {
            pairs.push(pair.to_string());
        }
    }
    if !replaced {
        pairs.push(replacement);
    }
    join(split.base, &pairs, None, split.fragment)
}

/// Removes every occurrence of `key`.
pub fn remove_query_param(url: &str, key: &str) -> String {
    let split = split(url);
    let pairs: Vec<String> = split
        .pairs
        .into_iter()
        .filter(|pair| key_of(pair) != key)
        .map(str::to_string)
        .collect();
    join(split.base, &pairs, None, split.fragment)
}

/// Replaces `key` with an RFC 6570 query expansion: `{?key}` when no other
/// parameter remains, `{&key}` otherwise.
///
/// ```rust
/// use hal_framework::query::template_query_param;
///
/// assert_eq!(template_query_param("/users?page=2", "page"), "/users{?page}");
/// assert_eq!(template_query_param("/users?q=a&page=2", "page"), "/users?q=a{&page}");
/// ```
pub fn template_query_param(url: &str, key: &str) -> String {
    let split = split(url);
    let pairs: Vec<String> = split
        .pairs
        .into_iter()
        .filter(|pair| key_of(pair) != key)
        .map(str::to_string)
        .collect();
    let operator = if pairs.is_empty() { '?' } else { '&' };
    let template = format!("{{{}{}}}", operator, key);
    join(split.base, &pairs, Some(template), split.fragment)
}
