use reqwest::Url;

/// `host[:port]` of the admin API, shown in the page header.
///
/// Only http(s) URLs are accepted; anything else yields an empty string.
pub fn hostname_from_url(raw: &str) -> String {
    let Ok(url) = Url::parse(raw.trim()) else {
        return String::new();
    };
    if !matches!(url.scheme(), "http" | "https") {
        return String::new();
    }
    match (url.host_str(), url.port()) {
        (Some(host), Some(port)) => format!("{}:{}", host, port),
        (Some(host), None) => host.to_string(),
        (None, _) => String::new(),
    }
}
