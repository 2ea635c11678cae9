//! Navigation allow-list.
//!
//! The page may only navigate within the bridge's own origins and, in
//! development, the dev server. Everything else is blocked.

/// Scheme prefixes that are always allowed.
/// - `porthole://`: custom protocol for the bundled front-end
const ALLOWED_SCHEMES: &[&str] = &["porthole://"];

/// Origins that are always allowed.
/// - WebView2 rewrites `porthole://localhost/…` to `http://porthole.localhost/…`
/// - `about:blank` is the initial empty page
const ALLOWED_ORIGINS: &[&str] = &["http://porthole.localhost", "about:blank"];

/// Navigation allow-list for one WebView.
#[derive(Debug, Clone, Default)]
pub struct NavigationPolicy {
    extra_origins: Vec<String>,
}

impl NavigationPolicy {
    /// Built-in origins only.
    pub fn new() -> Self {
        Self::default()
    }

    /// Also allow the origin of `dev_url` (scheme, host and port).
    pub fn with_dev_server(mut self, dev_url: &str) -> Self {
        match origin_of(dev_url) {
            Some(origin) => self.extra_origins.push(origin.to_string()),
            None => tracing::warn!(url = dev_url, "dev server URL has no origin, not allow-listed"),
        }
        self
    }

    pub fn is_allowed(&self, url: &str) -> bool {
        ALLOWED_SCHEMES.iter().any(|scheme| url.starts_with(scheme))
            || ALLOWED_ORIGINS
                .iter()
                .copied()
                .chain(self.extra_origins.iter().map(String::as_str))
                .any(|origin| within_origin(url, origin))
    }
}

/// `url` is `origin` itself or a path, query or fragment under it.
fn within_origin(url: &str, origin: &str) -> bool {
    match url.strip_prefix(origin) {
        Some(rest) => rest.is_empty() || rest.starts_with(['/', '?', '#']),
        None => false,
    }
}

/// `scheme://authority` part of a URL.
fn origin_of(url: &str) -> Option<&str> {
    let scheme_end = url.find("://")?;
    let authority_start = scheme_end + 3;
    let authority_len = url[authority_start..]
        .find(['/', '?', '#'])
        .unwrap_or(url.len() - authority_start);
    if authority_len == 0 {
        return None;
    }
    Some(&url[..authority_start + authority_len])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dev_policy() -> NavigationPolicy {
        NavigationPolicy::new().with_dev_server("http://localhost:8080/")
    }

    // -- Allowed URLs --

    #[test]
    fn allows_porthole_protocol() {
        let policy = NavigationPolicy::new();
        assert!(policy.is_allowed("porthole://localhost/index.html"));
        assert!(policy.is_allowed("porthole://localhost/js/app.js"));
    }

    #[test]
    fn allows_webview2_rewritten_custom_protocol() {
        let policy = NavigationPolicy::new();
        assert!(policy.is_allowed("http://porthole.localhost/index.html"));
        assert!(policy.is_allowed("http://porthole.localhost"));
    }

    #[test]
    fn allows_about_blank() {
        assert!(NavigationPolicy::new().is_allowed("about:blank"));
    }

    #[test]
    fn allows_dev_server_when_configured() {
        let policy = dev_policy();
        assert!(policy.is_allowed("http://localhost:8080"));
        assert!(policy.is_allowed("http://localhost:8080/index.html"));
        assert!(policy.is_allowed("http://localhost:8080/?hmr=1"));
    }

    // -- Blocked URLs --

    #[test]
    fn blocks_dev_server_without_dev_mode() {
        assert!(!NavigationPolicy::new().is_allowed("http://localhost:8080/"));
    }

    #[test]
    fn blocks_lookalike_hosts() {
        let policy = dev_policy();
        assert!(!policy.is_allowed("http://localhost:8080.evil.com/"));
        assert!(!policy.is_allowed("http://localhost:80801/"));
        assert!(!policy.is_allowed("http://porthole.localhost.evil.com/"));
        assert!(!policy.is_allowed("about:blanket"));
    }

    #[test]
    fn blocks_arbitrary_https() {
        let policy = dev_policy();
        assert!(!policy.is_allowed("https://evil.com"));
        assert!(!policy.is_allowed("https://example.com/phishing"));
    }

    #[test]
    fn blocks_file_protocol() {
        assert!(!NavigationPolicy::new().is_allowed("file:///etc/passwd"));
    }

    #[test]
    fn blocks_javascript_and_data() {
        let policy = NavigationPolicy::new();
        assert!(!policy.is_allowed("javascript:alert(1)"));
        assert!(!policy.is_allowed("data:text/html,<h1>XSS</h1>"));
    }

    #[test]
    fn blocks_empty_and_garbage() {
        let policy = NavigationPolicy::new();
        assert!(!policy.is_allowed(""));
        assert!(!policy.is_allowed("   "));
        assert!(!policy.is_allowed("not-a-url"));
    }

    // -- Origin extraction --

    #[test]
    fn origin_of_strips_path() {
        assert_eq!(
            origin_of("http://localhost:8080/app/index.html"),
            Some("http://localhost:8080")
        );
        assert_eq!(origin_of("https://dev.local"), Some("https://dev.local"));
        assert_eq!(origin_of("http://host?x=1"), Some("http://host"));
        assert_eq!(origin_of("localhost:8080"), None);
        assert_eq!(origin_of("http:///path"), None);
    }

    #[test]
    fn bad_dev_url_adds_nothing() {
        let policy = NavigationPolicy::new().with_dev_server("localhost");
        assert!(!policy.is_allowed("localhost"));
    }
}
