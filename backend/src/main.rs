mod config;
mod error;
mod services;
mod upstream;

use crate::config::Config;
use crate::upstream::Upstream;
use actix_web::{web, App, HttpRequest, HttpResponse, HttpServer};
use env_logger::Env;
use include_dir::{include_dir, Dir};
use log::{error, info};
use mime_guess::from_path;
use serde_json::json;
use std::thread;
use std::time::Duration;

static STATIC_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/static/dist");

/// Serves the embedded dashboard bundle. Paths that are not files fall back
/// to `index.html` so client-side routes survive a reload; unknown `/api`
/// paths stay JSON 404s.
async fn serve_embedded(req: HttpRequest) -> HttpResponse {
    let path = req.path().trim_start_matches('/');
    if path.starts_with("api/") {
        return HttpResponse::NotFound().json(json!({ "detail": "Not Found" }));
    }
    let file_path = if path.is_empty() { "index.html" } else { path };

    match STATIC_DIR.get_file(file_path) {
        Some(file) => {
            let mime = from_path(file_path).first_or_octet_stream();
            HttpResponse::Ok()
                .content_type(mime.as_ref())
                .body(file.contents().to_vec())
        }
        None => match STATIC_DIR.get_file("index.html") {
            Some(index) => HttpResponse::Ok()
                .content_type("text/html; charset=utf-8")
                .body(index.contents().to_vec()),
            None => HttpResponse::NotFound().body("Not Found"),
        },
    }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    let config = Config::from_env().map_err(|e| {
        error!("invalid configuration: {}", e);
        std::io::Error::new(std::io::ErrorKind::InvalidInput, e)
    })?;
    let upstream = Upstream::new(&config).map_err(|e| {
        error!("cannot build the loyalty API client: {}", e);
        std::io::Error::other(e)
    })?;
    let url = config.public_url();

    if config.open_browser {
        let url = url.clone();
        thread::spawn(move || {
            thread::sleep(Duration::from_millis(500));
            let _ = webbrowser::open(&url);
        });
    }

    info!("Dashboard running at {}", url);
    info!(
        "Loyalty API at {} (fallback: {})",
        config.upstream_url,
        config.fallback_url.as_deref().unwrap_or("none")
    );

    let bind = (config.host.clone(), config.port);
    let upstream = web::Data::new(upstream);
    let config = web::Data::new(config);

    HttpServer::new(move || {
        App::new()
            .app_data(upstream.clone())
            .app_data(config.clone())
            .configure(services::configure)
            .default_service(web::route().to(serve_embedded))
    })
    .bind(bind)?
    .run()
    .await
}
