//! Static pages and browser assets
//!
//! Everything is compiled into the binary; the server has no document root.

use axum::{
    extract::Path,
    http::{StatusCode, header::CONTENT_TYPE},
    response::{Html, IntoResponse, Response},
};

const INDEX_HTML: &str = include_str!("../../static/index.html");
const PROFILE_HTML: &str = include_str!("../../static/profile.html");
const APP_JS: &str = include_str!("../../static/app.js");
const PROFILE_JS: &str = include_str!("../../static/profile.js");
const STYLE_CSS: &str = include_str!("../../static/style.css");

/// `GET /`
pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

/// `GET /profile`
pub async fn profile_page() -> Html<&'static str> {
    Html(PROFILE_HTML)
}

/// `GET /assets/{file}`
pub async fn asset(Path(file): Path<String>) -> Response {
    let (content_type, body) = match file.as_str() {
        "app.js" => ("text/javascript; charset=utf-8", APP_JS),
        "profile.js" => ("text/javascript; charset=utf-8", PROFILE_JS),
        "style.css" => ("text/css; charset=utf-8", STYLE_CSS),
        _ => return StatusCode::NOT_FOUND.into_response(),
    };

    ([(CONTENT_TYPE, content_type)], body).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_known_asset_content_type() {
        let response = asset(Path("style.css".to_string())).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[CONTENT_TYPE], "text/css; charset=utf-8");
    }

    #[tokio::test]
    async fn test_unknown_asset_not_found() {
        let response = asset(Path("../Cargo.toml".to_string())).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_pages_reference_assets() {
        assert!(INDEX_HTML.contains("/assets/app.js"));
        assert!(PROFILE_HTML.contains("/assets/profile.js"));
    }
}
