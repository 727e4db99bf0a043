use std::borrow::Cow;

use crate::encoder;
use crate::error::Result;
use crate::parameters::ParameterSet;

const DEFAULT_SCHEME: &str = "http";

/// Split a target URL into its normalized endpoint and decoded query parameters.
///
/// The endpoint is `scheme://host[:port]path` with the host lowercased, the
/// port dropped when it is the scheme's default, and query and fragment
/// removed. A URL without a scheme is treated as `http`; one without a path
/// keeps an empty path.
pub fn url_to_endpoint_and_queries(raw: &str) -> Result<(String, ParameterSet)> {
    let raw = with_default_scheme(raw);
    let url = url::Url::parse(&raw)?;

    let scheme = url.scheme();
    let mut host = url.host_str().unwrap_or("").to_ascii_lowercase();
    match (scheme, url.port_or_known_default()) {
        ("http", Some(port)) if port != 80 => host = format!("{}:{}", host, port),
        ("https", Some(port)) if port != 443 => host = format!("{}:{}", host, port),
        _ => {}
    }

    let endpoint = format!("{}://{}{}", scheme, host, raw_path(&raw));
    let queries = url.query().map(parse_query).unwrap_or_default();
    Ok((endpoint, queries))
}

/// Prefix `http://` when `raw` carries no scheme.
pub(crate) fn with_default_scheme(raw: &str) -> Cow<'_, str> {
    if has_scheme(raw) {
        Cow::Borrowed(raw)
    } else {
        Cow::Owned(format!("{}://{}", DEFAULT_SCHEME, raw))
    }
}

// `scheme://` counts only ahead of the first '/', '?' or '#'.
fn has_scheme(raw: &str) -> bool {
    match raw.find("://") {
        Some(i) => {
            let scheme = &raw[..i];
            scheme.starts_with(|c: char| c.is_ascii_alphabetic())
                && scheme
                    .chars()
                    .all(|c| c.is_ascii_alphanumeric() || c == '+' || c == '-' || c == '.')
        }
        None => false,
    }
}

// The path exactly as written: `url` would percent-encode it and resolve
// dot segments.
fn raw_path(raw: &str) -> &str {
    let after_scheme = raw.split_once("://").map(|(_, rest)| rest).unwrap_or(raw);
    let rest = match after_scheme.find(&['/', '?', '#'][..]) {
        Some(i) => &after_scheme[i..],
        None => "",
    };
    let end = rest.find(&['?', '#'][..]).unwrap_or(rest.len());
    &rest[..end]
}

/// Parse a query string into decoded parameters.
///
/// Each pair is split on the first `=` only; a pair without `=` gets an empty
/// value, and an empty segment (`a=1&&b=2`, a trailing `&`) becomes an empty
/// name with an empty value. Repeated names collect their values in order of
/// appearance.
pub fn parse_query(query: &str) -> ParameterSet {
    let mut params = ParameterSet::new();
    let query = query.trim_start_matches('?');
    if query.is_empty() {
        return params;
    }
    for pair in query.split('&') {
        let mut parts = pair.splitn(2, '=');
        let key = encoder::decode(parts.next().unwrap_or(""));
        let value = parts.next().map(encoder::decode).unwrap_or_default();
        params.append(key, value);
    }
    params
}

/// Join a base URL and a relative path with exactly one `/` between them.
///
/// Paths that are already absolute URLs are returned unchanged.
pub fn join_url(base: &str, path: &str) -> String {
    if base.is_empty() || has_scheme(path) {
        return path.to_string();
    }
    let path = path.trim_start_matches('/');
    if base.ends_with('/') {
        format!("{}{}", base, path)
    } else if path.is_empty() {
        base.to_string()
    } else {
        format!("{}/{}", base, path)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::parameters::ParameterValue;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_url_to_endpoint_and_queries() {
        let (endpoint, map) =
            url_to_endpoint_and_queries("http://api.example.com/resource?x=1&y=a+b").unwrap();
        assert_eq!(endpoint, "http://api.example.com/resource");
        assert_eq!(map.get("x"), Some(&ParameterValue::Single("1".into())));
        assert_eq!(map.get("y"), Some(&ParameterValue::Single("a b".into())));

        let (endpoint, map) = url_to_endpoint_and_queries("https://example.com/").unwrap();
        assert_eq!(endpoint, "https://example.com/");
        assert!(map.is_empty());
    }

    #[test]
    fn test_normalize_default_ports() {
        let endpoint = |u| url_to_endpoint_and_queries(u).unwrap().0;
        assert_eq!(endpoint("http://Example.com:80/x"), "http://example.com/x");
        assert_eq!(endpoint("https://example.com:443/x"), "https://example.com/x");
        assert_eq!(endpoint("https://example.com:8443/x"), "https://example.com:8443/x");
        assert_eq!(endpoint("http://example.com:443/x"), "http://example.com:443/x");
        assert_eq!(endpoint("HTTP://EXAMPLE.COM/Mixed/Case"), "http://example.com/Mixed/Case");
    }

    #[test]
    fn test_normalize_drops_query_and_fragment() {
        let (endpoint, map) =
            url_to_endpoint_and_queries("http://example.com/a/b?c=d#frag").unwrap();
        assert_eq!(endpoint, "http://example.com/a/b");
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn test_normalize_defaults() {
        let (endpoint, _) = url_to_endpoint_and_queries("example.com/x?y=1").unwrap();
        assert_eq!(endpoint, "http://example.com/x");
        let (endpoint, map) = url_to_endpoint_and_queries("http://example.com?y=1").unwrap();
        assert_eq!(endpoint, "http://example.com");
        assert_eq!(map.len(), 1);
        let (endpoint, _) = url_to_endpoint_and_queries("https://example.com").unwrap();
        assert_eq!(endpoint, "https://example.com");
    }

    #[test]
    fn test_path_kept_as_written() {
        let endpoint = |u| url_to_endpoint_and_queries(u).unwrap().0;
        assert_eq!(endpoint("http://example.com/a b/./c"), "http://example.com/a b/./c");
        assert_eq!(endpoint("http://example.com/café"), "http://example.com/café");
        assert_eq!(endpoint("http://example.com/a/../b?x=1"), "http://example.com/a/../b");
        assert_eq!(endpoint("http://example.com:8080/p%20q#f"), "http://example.com:8080/p%20q");
    }

    #[test]
    fn test_url_in_query_is_not_a_scheme() {
        let (endpoint, map) =
            url_to_endpoint_and_queries("example.com/share?target=http://x.com/a").unwrap();
        assert_eq!(endpoint, "http://example.com/share");
        assert_eq!(map.get("target").and_then(|v| v.as_single()), Some("http://x.com/a"));
    }

    #[test]
    fn test_invalid_url() {
        assert!(url_to_endpoint_and_queries("http://exa mple.com/").is_err());
    }

    #[test]
    fn test_parse_query() {
        let map = parse_query("parameter=value&!%40%23%24%25^%26*()_%2B=!%40%23%24%25^%26*()_%2B%3D");
        assert_eq!(map.len(), 2);
        assert_eq!(map.get("parameter").and_then(|v| v.as_single()), Some("value"));
        assert_eq!(map.get("!@#$%^&*()_+").and_then(|v| v.as_single()), Some("!@#$%^&*()_+="));

        let map2 = parse_query("quever?=salting=parsing&&&&&vir!@$========%^&flag");
        assert_eq!(map2.len(), 4);
        assert_eq!(
            map2.get(""),
            Some(&ParameterValue::Multi(vec!["".into(), "".into(), "".into(), "".into()]))
        );
        assert_eq!(map2.get("quever?").and_then(|v| v.as_single()), Some("salting=parsing"));
        assert_eq!(map2.get("vir!@$").and_then(|v| v.as_single()), Some("=======%^"));
        assert_eq!(map2.get("flag").and_then(|v| v.as_single()), Some(""));

        assert!(parse_query("").is_empty());
        assert!(parse_query("?").is_empty());
    }

    #[test]
    fn test_parse_query_trailing_ampersand() {
        let map = parse_query("a=1&");
        assert_eq!(map.len(), 2);
        assert_eq!(map.get("").and_then(|v| v.as_single()), Some(""));
        assert_eq!(map.encoded().to_signable_string(), "=&a=1");
    }

    #[test]
    fn test_parse_query_repeated_keys() {
        let map = parse_query("tag=b&page=2&tag=a&tag=c");
        assert_eq!(
            map.get("tag"),
            Some(&ParameterValue::Multi(vec!["b".into(), "a".into(), "c".into()]))
        );
        assert_eq!(map.get("page").and_then(|v| v.as_single()), Some("2"));
    }

    #[test]
    fn test_join_url() {
        assert_eq!(join_url("http://api.recapd.com/", "/v1/videos"), "http://api.recapd.com/v1/videos");
        assert_eq!(join_url("http://api.recapd.com", "v1/videos"), "http://api.recapd.com/v1/videos");
        assert_eq!(join_url("http://api.recapd.com/", ""), "http://api.recapd.com/");
        assert_eq!(join_url("http://api.recapd.com", ""), "http://api.recapd.com");
        assert_eq!(join_url("", "http://other.com/x"), "http://other.com/x");
        assert_eq!(join_url("http://api.recapd.com/", "https://other.com/x"), "https://other.com/x");
        assert_eq!(
            join_url("http://api.recapd.com/", "/v1/share?target=http://x.com/a"),
            "http://api.recapd.com/v1/share?target=http://x.com/a"
        );
        assert_eq!(
            join_url("http://api.recapd.com", "v1/share#http://x.com"),
            "http://api.recapd.com/v1/share#http://x.com"
        );
    }
}
