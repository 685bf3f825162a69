use reqwest::Url;

/// Resolve a redirect target against the admin API origin.
///
/// `path` may be absolute (`/dashboard`), relative, or a full http(s) URL.
/// When the base cannot be parsed the path is returned as given.
pub fn absolute_url(base_url: &str, path: &str) -> String {
    let base = match Url::parse(base_url) {
        Ok(u) => u,
        Err(e) => {
            tracing::warn!(%e, base_url, "Unparseable API base URL; using redirect path as-is");
            return path.to_string();
        }
    };
    match base.join(path) {
        Ok(url) if matches!(url.scheme(), "http" | "https") => url.to_string(),
        Ok(url) => {
            tracing::warn!(%url, "Refusing non-http redirect target");
            base.join("/").map(|u| u.to_string()).unwrap_or_else(|_| base_url.to_string())
        }
        Err(_) => path.to_string(),
    }
}
