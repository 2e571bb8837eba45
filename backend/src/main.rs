mod config;

use crate::config::ServerConfig;
use actix_web::{web, App, HttpRequest, HttpResponse, HttpServer};
use env_logger::Env;
use include_dir::{include_dir, Dir};
use log::{debug, error, info, warn};
use mime_guess::from_path;
use std::thread;
use std::time::Duration;

static STATIC_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/static/dist");

/// Maps a request path to a file name inside the bundle.
fn resolve_path(path: &str) -> &str {
    let path = path.trim_start_matches('/');
    if path.is_empty() {
        "index.html"
    } else {
        path
    }
}

fn embedded_response(dir: &Dir<'_>, request_path: &str) -> HttpResponse {
    let file_path = resolve_path(request_path);

    match dir.get_file(file_path) {
        Some(file) => {
            let mime = from_path(file_path).first_or_octet_stream();
            HttpResponse::Ok()
                .content_type(mime.as_ref())
                .body(file.contents().to_vec())
        }
        // Unknown paths fall back to the single page.
        None => match dir.get_file("index.html") {
            Some(index) => {
                debug!("{file_path} not bundled, serving index.html");
                HttpResponse::Ok()
                    .content_type("text/html; charset=utf-8")
                    .body(index.contents().to_vec())
            }
            None => HttpResponse::NotFound().body("Not Found"),
        },
    }
}

async fn serve_embedded(req: HttpRequest) -> HttpResponse {
    embedded_response(&STATIC_DIR, req.path())
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    let config = ServerConfig::from_env().unwrap_or_else(|err| {
        warn!("{err}; using defaults");
        ServerConfig::default()
    });
    let url = config.url();
    info!("Configuration: {config:?}");

    if STATIC_DIR.get_file("index.html").is_none() {
        warn!("No frontend bundle embedded; build the frontend with trunk first");
    }

    if config.open_browser {
        let url = url.clone();
        thread::spawn(move || {
            thread::sleep(Duration::from_millis(500));
            if let Err(err) = webbrowser::open(&url) {
                error!("Could not open browser: {err}");
            }
        });
    }

    info!("Server running at {}", url);

    HttpServer::new(|| App::new().default_service(web::route().to(serve_embedded)))
        .bind((config.host.as_str(), config.port))?
        .run()
        .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;
    use actix_web::http::StatusCode;
    use actix_web::test::{call_service, init_service, TestRequest};

    static FIXTURE: Dir = include_dir!("$CARGO_MANIFEST_DIR/tests/fixtures/site");

    #[actix_web::test]
    async fn root_serves_index() {
        let resp = embedded_response(&FIXTURE, "/");
        assert_eq!(resp.status(), StatusCode::OK);
        let body = to_bytes(resp.into_body()).await.unwrap();
        assert!(std::str::from_utf8(&body).unwrap().contains("profile-root"));
    }

    #[actix_web::test]
    async fn assets_get_their_mime_type() {
        let resp = embedded_response(&FIXTURE, "/styles.css");
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(resp.headers().get("content-type").unwrap(), "text/css");
    }

    #[actix_web::test]
    async fn unknown_paths_fall_back_to_index() {
        let resp = embedded_response(&FIXTURE, "/guestbook/entry/7");
        assert_eq!(resp.status(), StatusCode::OK);
        let body = to_bytes(resp.into_body()).await.unwrap();
        assert!(std::str::from_utf8(&body).unwrap().contains("profile-root"));
    }

    #[actix_web::test]
    async fn missing_bundle_is_not_found() {
        static EMPTY: Dir = Dir::new("", &[]);
        let resp = embedded_response(&EMPTY, "/anything");
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn default_service_uses_the_handler() {
        let app = init_service(App::new().default_service(web::route().to(serve_embedded))).await;
        let root = call_service(&app, TestRequest::get().uri("/").to_request()).await;
        let other = call_service(&app, TestRequest::get().uri("/no/such/page").to_request()).await;
        assert_eq!(root.status(), other.status());
    }

    #[test]
    fn resolves_paths() {
        assert_eq!(resolve_path("/"), "index.html");
        assert_eq!(resolve_path(""), "index.html");
        assert_eq!(resolve_path("/assets/images/dog.jpg"), "assets/images/dog.jpg");
    }
}
