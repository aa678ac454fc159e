//! Response builders for the quote server.
//!
//! The homepage is an opaque static asset embedded at compile time; it is
//! served byte-identical on every request. Quote payloads go through
//! `serde_json` so embedded quotes, backslashes and control characters can
//! never corrupt the JSON body.

use crate::config::HttpConfig;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;

/// The quote viewer page: slideshow background, quote overlay, refresh
/// button. Fetches `/api/quote` on load, every 10 seconds, and on click.
const QUOTE_PAGE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Dynamic Quote Viewer</title>
    <style>
        body, html {
            margin: 0;
            padding: 0;
            height: 100%;
            overflow: hidden;
            font-family: 'Segoe UI', sans-serif;
            color: white;
            display: flex;
            justify-content: center;
            align-items: center;
        }

        .background {
            position: fixed;
            top: 0;
            left: 0;
            width: 100%;
            height: 100%;
            background-size: cover;
            background-position: center;
            animation: slideShow 30s infinite;
            z-index: -1;
        }

        @keyframes slideShow {
            0% { background-image: url('https://source.unsplash.com/1920x1080/?nature'); }
            25% { background-image: url('https://source.unsplash.com/1920x1080/?animals'); }
            50% { background-image: url('https://source.unsplash.com/1920x1080/?city,buildings'); }
            75% { background-image: url('https://source.unsplash.com/1920x1080/?mountains,forest'); }
            100% { background-image: url('https://source.unsplash.com/1920x1080/?sea,sky'); }
        }

        .quote-box {
            text-align: center;
            background: rgba(0, 0, 0, 0.4);
            padding: 40px 60px;
            border-radius: 20px;
            box-shadow: 0 4px 30px rgba(0,0,0,0.5);
            max-width: 800px;
            animation: fadeIn 2s;
        }

        @keyframes fadeIn {
            from { opacity: 0; }
            to { opacity: 1; }
        }

        h1 {
            font-size: 2rem;
            line-height: 1.5;
            font-style: italic;
        }

        .refresh {
            margin-top: 20px;
            padding: 10px 20px;
            border: none;
            border-radius: 10px;
            background: #ffffff88;
            color: #000;
            font-weight: bold;
            cursor: pointer;
            transition: background 0.3s;
        }

        .refresh:hover {
            background: #ffffffcc;
        }
    </style>
</head>
<body>
    <div class="background"></div>
    <div class="quote-box">
        <h1 id="quote">Loading quote...</h1>
        <button class="refresh" onclick="loadQuote()">New Quote</button>
    </div>

    <script>
        async function loadQuote() {
            const res = await fetch('/api/quote');
            const data = await res.json();
            document.getElementById('quote').innerText = data.quote;
        }

        // Auto-load and refresh every 10 seconds
        loadQuote();
        setInterval(loadQuote, 10000);
    </script>
</body>
</html>
"#;

/// Build a response with the given status, content type and body.
///
/// For HEAD requests the body is dropped but Content-Length still reports
/// the size a GET would have returned.
fn build_response(
    status: u16,
    content_type: &str,
    server_name: Option<&str>,
    body: Bytes,
    is_head: bool,
) -> Response<Full<Bytes>> {
    let mut builder = Response::builder()
        .status(status)
        .header("Content-Type", content_type)
        .header("Content-Length", body.len());

    if let Some(name) = server_name {
        builder = builder.header("Server", name);
    }

    let body = if is_head { Bytes::new() } else { body };
    builder
        .body(Full::new(body))
        .expect("Failed to build response")
}

pub fn build_page_response(http_config: &HttpConfig, is_head: bool) -> Response<Full<Bytes>> {
    build_response(
        200,
        "text/html; charset=utf-8",
        Some(&http_config.server_name),
        Bytes::from_static(QUOTE_PAGE.as_bytes()),
        is_head,
    )
}

pub fn build_quote_response(
    quote: &str,
    http_config: &HttpConfig,
    is_head: bool,
) -> Response<Full<Bytes>> {
    let json = serde_json::json!({ "quote": quote }).to_string();
    build_response(
        200,
        "application/json; charset=utf-8",
        Some(&http_config.server_name),
        Bytes::from(json),
        is_head,
    )
}

pub fn build_404_response() -> Response<Full<Bytes>> {
    build_response(404, "text/plain", None, Bytes::from_static(b"Not Found"), false)
}

pub fn build_405_response() -> Response<Full<Bytes>> {
    build_response(
        405,
        "text/plain",
        None,
        Bytes::from_static(b"Method Not Allowed"),
        false,
    )
}

pub fn build_500_response() -> Response<Full<Bytes>> {
    build_response(
        500,
        "application/json; charset=utf-8",
        None,
        Bytes::from_static(br#"{"error":"Internal server error"}"#),
        false,
    )
}
