//! Serves the compiled frontend embedded at build time.
//!
//! Unknown paths fall back to `index.html` so the single-page client can be
//! reloaded on any URL.

use actix_web::{HttpRequest, HttpResponse};
use include_dir::{include_dir, Dir};
use mime_guess::from_path;

static STATIC_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/static/dist");

pub async fn serve_embedded(req: HttpRequest) -> HttpResponse {
    match resolve(&STATIC_DIR, req.path()) {
        Some((contents, mime)) => HttpResponse::Ok().content_type(mime).body(contents.to_vec()),
        None => HttpResponse::NotFound().body("Not Found"),
    }
}

/// Finds the embedded file for `request_path` and its content type.
pub(crate) fn resolve(dir: &'static Dir<'static>, request_path: &str) -> Option<(&'static [u8], String)> {
    let path = request_path.trim_start_matches('/');
    let file_path = if path.is_empty() { "index.html" } else { path };

    match dir.get_file(file_path) {
        Some(file) => {
            let mime = from_path(file_path).first_or_octet_stream();
            Some((file.contents(), mime.to_string()))
        }
        None => dir
            .get_file("index.html")
            .map(|index| (index.contents(), "text/html; charset=utf-8".to_string())),
    }
}
