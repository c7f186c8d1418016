/* This file is part of the Playlist Browser project
*
*  Copyright (C) 2025 the Playlist Browser contributors
*  
*  This program is free software: you can redistribute it and/or modify
*  it under the terms of the GNU Affero General Public License as published by
*  the Free Software Foundation, either version 3 of the License, or
*  (at your option) any later version.
*
*  This program is distributed in the hope that it will be useful,
*  but WITHOUT ANY WARRANTY; without even the implied warranty of
*  MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
*  GNU Affero General Public License for more details.
*
*  You should have received a copy of the GNU Affero General Public License
*  along with this program.  If not, see <https://www.gnu.org/licenses/>.
*/

//! Serves the frontend with the YouTube credentials filled into its root document

use actix_files::Files;
use actix_web::{dev::{fn_service, ServiceRequest, ServiceResponse}, http::header::{CacheControl, CacheDirective, ContentType}, web, HttpResponse};
use cloneable_errors::{ErrorContext, ResContext};
use log::warn;
use playlist_browser_fetch::{constants::API_KEY_PLACEHOLDER, ClientConfig};

use crate::state::AppConfig;

pub const API_KEY_MARKER: &str = "{{YOUTUBE_API_KEY}}";
pub const CHANNEL_ID_MARKER: &str = "{{YOUTUBE_CHANNEL_ID}}";

pub fn configure(app_config: web::Data<AppConfig>) -> impl FnOnce(&mut web::ServiceConfig) {
    move |cfg| {
        let fallback_config = app_config.clone();
        cfg.route("/", web::get().to(get_index))
           .route("/index.html", web::get().to(get_index))
           .service(
               Files::new("/", app_config.static_content_path.as_path())
                   .default_handler(fn_service(move |req: ServiceRequest| {
                       let config = fallback_config.clone();
                       async move {
                           let (req, _) = req.into_parts();
                           let resp = render_index(&config).await;
                           Ok::<_, actix_web::Error>(ServiceResponse::new(req, resp))
                       }
                   }))
           );
    }
}

/// Replaces every occurrence of the credential markers
pub fn inject_config(html: &str, config: &ClientConfig) -> String {
    html.replace(API_KEY_MARKER, &config.api_key)
        .replace(CHANNEL_ID_MARKER, &config.channel_id)
}

fn escape_html(s: &str) -> String {
    let mut escaped = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            c => escaped.push(c),
        }
    }
    escaped
}

fn yes_no(b: bool) -> &'static str {
    if b { "YES" } else { "NO" }
}

/// Page shown when index.html can't be read. Never includes the key itself.
pub fn diagnostic_page(config: &ClientConfig) -> String {
    let key = config.api_key.trim();
    format!(
r#"<!DOCTYPE html>
<html>
<head>
    <title>Playlist Browser</title>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
</head>
<body>
    <h1>Configuration status</h1>
    <p>API Key Set: {}</p>
    <p>API Key Length: {}</p>
    <p>Is Placeholder: {}</p>
    <p>Channel ID: {}</p>
</body>
</html>
"#,
        yes_no(config.api_key_configured()),
        key.len(),
        yes_no(key == API_KEY_PLACEHOLDER),
        if config.channel_id_configured() { escape_html(&config.channel_id) } else { "NOT SET".to_owned() },
    )
}

async fn read_index(config: &AppConfig) -> Result<String, ErrorContext> {
    let path = config.static_content_path.join("index.html");
    tokio::fs::read_to_string(&path).await
        .with_context(|| format!("Failed to read {}", path.display()))
}

async fn render_index(config: &AppConfig) -> HttpResponse {
    let body = match read_index(config).await {
        Ok(html) => inject_config(&html, &config.youtube),
        Err(err) => {
            warn!("Serving the configuration status page instead of index.html: {err:?}");
            diagnostic_page(&config.youtube)
        },
    };
    HttpResponse::Ok()
        .insert_header(ContentType::html())
        .insert_header(CacheControl(vec![CacheDirective::NoCache]))
        .body(body)
}

async fn get_index(config: web::Data<AppConfig>) -> HttpResponse {
    render_index(&config).await
}

#[cfg(test)]
mod tests {
    use std::{fs, path::PathBuf};

    use actix_web::{http::{header, StatusCode}, test, App};

    use super::*;

    fn config(api_key: &str, channel_id: &str) -> ClientConfig {
        ClientConfig {
            api_key: api_key.to_owned(),
            channel_id: channel_id.to_owned(),
        }
    }

    fn static_dir(name: &str, files: &[(&str, &str)]) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("playlist-browser-index-{}-{name}", std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        for (file, contents) in files {
            fs::write(dir.join(file), contents).unwrap();
        }
        dir
    }

    fn app_config(static_content_path: PathBuf) -> web::Data<AppConfig> {
        web::Data::new(AppConfig {
            static_content_path,
            youtube: config("AIzaSecretKey", "UCchannel"),
            ..AppConfig::default()
        })
    }

    const INDEX: &str = r#"<script>const key = "{{YOUTUBE_API_KEY}}"; const channel = "{{YOUTUBE_CHANNEL_ID}}"; const again = "{{YOUTUBE_API_KEY}}";</script>"#;

    #[core::prelude::v1::test]
    fn replaces_every_marker() {
        let html = inject_config(INDEX, &config("abc", "UC1"));
        assert_eq!(html, r#"<script>const key = "abc"; const channel = "UC1"; const again = "abc";</script>"#);
    }

    #[core::prelude::v1::test]
    fn unset_values_inject_placeholders() {
        let html = inject_config(INDEX, &ClientConfig::default());
        assert!(html.contains("your_youtube_api_key_here"));
        assert!(html.contains("your_channel_id_here"));
        assert!(!html.contains("{{"));
    }

    #[core::prelude::v1::test]
    fn diagnostic_page_hides_the_key() {
        let page = diagnostic_page(&config("AIzaSecretKey", "UC<b>"));
        assert!(!page.contains("AIzaSecretKey"));
        assert!(page.contains("API Key Set: YES"));
        assert!(page.contains("API Key Length: 13"));
        assert!(page.contains("Is Placeholder: NO"));
        assert!(page.contains("Channel ID: UC&lt;b&gt;"));

        let page = diagnostic_page(&ClientConfig::default());
        assert!(page.contains("API Key Set: NO"));
        assert!(page.contains("Is Placeholder: YES"));
        assert!(page.contains("Channel ID: NOT SET"));
    }

    #[actix_web::test]
    async fn root_document_is_injected() {
        let dir = static_dir("root", &[("index.html", INDEX)]);
        let cfg = app_config(dir);
        let app = test::init_service(App::new().app_data(cfg.clone()).configure(configure(cfg))).await;

        for uri in ["/", "/index.html"] {
            let resp = test::call_service(&app, test::TestRequest::get().uri(uri).to_request()).await;
            assert_eq!(resp.status(), StatusCode::OK);
            assert_eq!(resp.headers().get(header::CACHE_CONTROL).unwrap(), "no-cache");
            assert!(resp.headers().get(header::CONTENT_TYPE).unwrap().to_str().unwrap().starts_with("text/html"));
            let body = test::read_body(resp).await;
            let body = std::str::from_utf8(&body).unwrap();
            assert_eq!(body.matches("AIzaSecretKey").count(), 2);
            assert!(body.contains("UCchannel"));
        }
    }

    #[actix_web::test]
    async fn static_files_and_unknown_paths() {
        let dir = static_dir("static", &[("index.html", INDEX), ("style.css", "body { color: red; }")]);
        let cfg = app_config(dir);
        let app = test::init_service(App::new().app_data(cfg.clone()).configure(configure(cfg))).await;

        let body = test::call_and_read_body(&app, test::TestRequest::get().uri("/style.css").to_request()).await;
        assert_eq!(&body[..], b"body { color: red; }");

        let resp = test::call_service(&app, test::TestRequest::get().uri("/playlist/PL123").to_request()).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body = test::read_body(resp).await;
        assert!(std::str::from_utf8(&body).unwrap().contains("AIzaSecretKey"));
    }

    #[actix_web::test]
    async fn missing_index_serves_diagnostics() {
        let dir = static_dir("missing", &[]);
        let cfg = app_config(dir);
        let app = test::init_service(App::new().app_data(cfg.clone()).configure(configure(cfg))).await;

        let resp = test::call_service(&app, test::TestRequest::get().uri("/").to_request()).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body = test::read_body(resp).await;
        let body = std::str::from_utf8(&body).unwrap();
        assert!(body.contains("Configuration status"));
        assert!(!body.contains("AIzaSecretKey"));
    }
}
