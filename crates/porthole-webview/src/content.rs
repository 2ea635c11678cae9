//! Bundled content served over the `porthole://` custom protocol.
//!
//! In packaged mode the page is loaded from a directory on disk without a
//! local HTTP server. A request for `porthole://localhost/app.js` resolves
//! to `{base_dir}/app.js`.

use std::borrow::Cow;
use std::path::{Path, PathBuf};

use wry::http::header::{HeaderValue, ACCESS_CONTROL_ALLOW_ORIGIN, CONTENT_TYPE};
use wry::http::{Request, Response, StatusCode};

/// Serves files from a base directory.
pub struct ContentProvider {
    base_dir: PathBuf,
    /// Served for the empty path (`porthole://localhost/`).
    entry: String,
}

impl ContentProvider {
    pub fn new(base_dir: impl Into<PathBuf>, entry: impl Into<String>) -> Self {
        Self {
            base_dir: base_dir.into(),
            entry: entry.into(),
        }
    }

    /// Resolve a request path to MIME type and bytes.
    ///
    /// Returns `None` for missing files and for anything that escapes
    /// `base_dir`, including through symlinks.
    pub fn resolve(&self, path: &str) -> Option<(&'static str, Vec<u8>)> {
        let clean = path
            .split(['?', '#'])
            .next()
            .unwrap_or_default()
            .trim_start_matches('/');
        let clean = if clean.is_empty() {
            self.entry.as_str()
        } else {
            clean
        };

        let file_path = self.base_dir.join(clean);

        let canonical_base = std::fs::canonicalize(&self.base_dir).ok()?;
        let canonical_file = std::fs::canonicalize(&file_path).ok()?;
        if !canonical_file.starts_with(&canonical_base) || !canonical_file.is_file() {
            return None;
        }

        let data = std::fs::read(&canonical_file).ok()?;
        Some((mime_from_extension(&canonical_file), data))
    }

    /// Answer a custom-protocol request.
    pub fn respond(&self, request: &Request<Vec<u8>>) -> Response<Cow<'static, [u8]>> {
        let uri = request.uri();
        let path = uri.path();

        match self.resolve(path) {
            Some((mime, data)) => {
                tracing::debug!(path, mime, body_len = data.len(), "bundle asset served");
                let mut response = Response::new(Cow::Owned(data));
                let headers = response.headers_mut();
                headers.insert(CONTENT_TYPE, HeaderValue::from_static(mime));
                headers.insert(
                    ACCESS_CONTROL_ALLOW_ORIGIN,
                    HeaderValue::from_static("porthole://localhost"),
                );
                response
            }
            None => {
                tracing::warn!(path, "bundle asset not found");
                let mut response = Response::new(Cow::Borrowed(&b"Not Found"[..]));
                *response.status_mut() = StatusCode::NOT_FOUND;
                response
            }
        }
    }
}

/// Guess MIME type from file extension.
fn mime_from_extension(path: &Path) -> &'static str {
    match path.extension().and_then(|e| e.to_str()) {
        Some("html") | Some("htm") => "text/html",
        Some("css") => "text/css",
        Some("js") | Some("mjs") => "application/javascript",
        Some("json") | Some("map") => "application/json",
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("svg") => "image/svg+xml",
        Some("wasm") => "application/wasm",
        Some("ico") => "image/x-icon",
        Some("woff") => "font/woff",
        Some("woff2") => "font/woff2",
        Some("ttf") => "font/ttf",
        Some("webp") => "image/webp",
        Some("txt") => "text/plain",
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bundle() -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("index.html"), "<h1>Porthole</h1>").unwrap();
        std::fs::create_dir(dir.path().join("js")).unwrap();
        std::fs::write(dir.path().join("js/app.js"), "console.log(1)").unwrap();
        std::fs::write(dir.path().join("style.css"), "body{}").unwrap();
        dir
    }

    #[test]
    fn empty_path_serves_entry() {
        let dir = bundle();
        let cp = ContentProvider::new(dir.path(), "index.html");
        let (mime, data) = cp.resolve("/").unwrap();
        assert_eq!(mime, "text/html");
        assert_eq!(data, b"<h1>Porthole</h1>");
        assert!(cp.resolve("").is_some());
    }

    #[test]
    fn nested_assets_resolve_with_mime() {
        let dir = bundle();
        let cp = ContentProvider::new(dir.path(), "index.html");
        assert_eq!(cp.resolve("/js/app.js").unwrap().0, "application/javascript");
        assert_eq!(cp.resolve("style.css").unwrap().0, "text/css");
    }

    #[test]
    fn query_and_fragment_ignored() {
        let dir = bundle();
        let cp = ContentProvider::new(dir.path(), "index.html");
        assert!(cp.resolve("/style.css?v=3").is_some());
        assert!(cp.resolve("/index.html#top").is_some());
    }

    #[test]
    fn missing_file_is_none() {
        let dir = bundle();
        let cp = ContentProvider::new(dir.path(), "index.html");
        assert!(cp.resolve("/nope.html").is_none());
    }

    #[test]
    fn directory_is_not_served() {
        let dir = bundle();
        let cp = ContentProvider::new(dir.path(), "index.html");
        assert!(cp.resolve("/js").is_none());
    }

    #[test]
    fn traversal_is_blocked() {
        let outer = tempfile::tempdir().unwrap();
        std::fs::write(outer.path().join("secret.txt"), "secret").unwrap();
        let bundle_dir = outer.path().join("bundle");
        std::fs::create_dir(&bundle_dir).unwrap();
        std::fs::write(bundle_dir.join("index.html"), "ok").unwrap();

        let cp = ContentProvider::new(&bundle_dir, "index.html");
        assert!(cp.resolve("../secret.txt").is_none());
        assert!(cp.resolve("/../secret.txt").is_none());
        assert!(cp.resolve("js/../../secret.txt").is_none());
    }

    #[cfg(unix)]
    #[test]
    fn symlink_escape_is_blocked() {
        let outer = tempfile::tempdir().unwrap();
        std::fs::write(outer.path().join("secret.txt"), "secret").unwrap();
        let bundle_dir = outer.path().join("bundle");
        std::fs::create_dir(&bundle_dir).unwrap();
        std::os::unix::fs::symlink(outer.path().join("secret.txt"), bundle_dir.join("link.txt"))
            .unwrap();

        let cp = ContentProvider::new(&bundle_dir, "index.html");
        assert!(cp.resolve("link.txt").is_none());
    }

    #[test]
    fn respond_sets_status_and_type() {
        let dir = bundle();
        let cp = ContentProvider::new(dir.path(), "index.html");

        let ok = Request::builder()
            .uri("porthole://localhost/style.css")
            .body(Vec::new())
            .unwrap();
        let response = cp.respond(&ok);
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[CONTENT_TYPE], "text/css");
        assert_eq!(&response.body()[..], b"body{}");

        let missing = Request::builder()
            .uri("porthole://localhost/missing.js")
            .body(Vec::new())
            .unwrap();
        assert_eq!(cp.respond(&missing).status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn mime_fallback() {
        assert_eq!(mime_from_extension(Path::new("a.bin")), "application/octet-stream");
        assert_eq!(mime_from_extension(Path::new("noext")), "application/octet-stream");
    }
}
