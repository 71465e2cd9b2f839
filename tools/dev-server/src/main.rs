//! Development Server for Folio
//!
//! Serves the built `web/` directory with correct MIME types for the
//! wasm-bindgen output.

use axum::{
    body::Body,
    http::{header, HeaderValue, Request, StatusCode},
    response::Response,
    routing::get_service,
    Router,
};
use std::net::SocketAddr;
use tower::ServiceBuilder;
use tower_http::services::ServeDir;

const DEFAULT_PORT: u16 = 8080;

#[tokio::main]
async fn main() -> std::io::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let port: u16 = match std::env::var("PORT") {
        Ok(raw) => raw.parse().unwrap_or_else(|_| {
            log::warn!("ignoring invalid PORT {:?}, using {}", raw, DEFAULT_PORT);
            DEFAULT_PORT
        }),
        Err(_) => DEFAULT_PORT,
    };
    let root = std::env::var("FOLIO_WEB_DIR").unwrap_or_else(|_| "web".to_string());

    let addr = SocketAddr::from(([127, 0, 0, 1], port));

    let serve_dir = ServeDir::new(&root)
        .append_index_html_on_directories(true)
        .precompressed_gzip()
        .precompressed_br();

    let app = Router::new()
        .fallback_service(get_service(serve_dir).handle_error(|err| async move {
            log::error!("static file error: {}", err);
            (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
        }))
        .layer(ServiceBuilder::new().layer(axum::middleware::from_fn(fix_headers)));

    println!("╔═══════════════════════════════════════════════════╗");
    println!("║          Folio Portfolio Development Server       ║");
    println!("╠═══════════════════════════════════════════════════╣");
    println!("║  URL: http://localhost:{:<27}║", port);
    println!("║  Root: {:<43}║", root);
    println!("║  Press Ctrl+C to stop                             ║");
    println!("╚═══════════════════════════════════════════════════╝");
    println!();

    let listener = tokio::net::TcpListener::bind(addr).await?;
    log::info!("listening on {}", addr);
    axum::serve(listener, app).await
}

/// Content type for the extensions the bundle ships
fn content_type_for(path: &str) -> Option<&'static str> {
    let ext = path.rsplit_once('.').map(|(_, ext)| ext)?;
    match ext {
        "js" | "mjs" => Some("application/javascript; charset=utf-8"),
        "wasm" => Some("application/wasm"),
        "css" => Some("text/css; charset=utf-8"),
        "html" => Some("text/html; charset=utf-8"),
        "json" => Some("application/json; charset=utf-8"),
        "pdf" => Some("application/pdf"),
        "svg" => Some("image/svg+xml"),
        _ => None,
    }
}

/// Fix MIME types and disable caching of dev builds
async fn fix_headers(request: Request<Body>, next: axum::middleware::Next) -> Response<Body> {
    let path = request.uri().path().to_string();
    let method = request.method().clone();

    let mut response = next.run(request).await;
    log::debug!("{} {} -> {}", method, path, response.status());

    let headers = response.headers_mut();
    headers.insert(header::CACHE_CONTROL, HeaderValue::from_static("no-store"));

    if let Some(content_type) = content_type_for(&path) {
        headers.insert(header::CONTENT_TYPE, HeaderValue::from_static(content_type));
    }

    response
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_types() {
        assert_eq!(content_type_for("/pkg/folio_web_bg.wasm"), Some("application/wasm"));
        assert_eq!(
            content_type_for("/pkg/folio_web.js"),
            Some("application/javascript; charset=utf-8")
        );
        assert_eq!(content_type_for("/resume.pdf"), Some("application/pdf"));
        assert_eq!(content_type_for("/"), None);
        assert_eq!(content_type_for("/favicon.ico"), None);
    }
}
