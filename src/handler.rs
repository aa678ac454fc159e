use crate::config::AppState;
use crate::logger;
use crate::response;
use http_body_util::Full;
use hyper::body::{Body, Bytes};
use hyper::{Method, Request, Response};
use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::Arc;

/// Check HTTP method and return an early response for anything but GET/HEAD.
fn check_http_method(method: &Method) -> Option<Response<Full<Bytes>>> {
    match *method {
        Method::GET | Method::HEAD => None,
        _ => {
            logger::log_warning(&format!("Method not allowed: {method}"));
            Some(response::build_405_response())
        }
    }
}

/// Route the request by exact path.
fn route_request(path: &str, is_head: bool, state: &AppState) -> Response<Full<Bytes>> {
    match path {
        "/" => response::build_page_response(&state.config.http, is_head),
        "/api/quote" => match state.quotes.pick_random() {
            Ok(quote) => response::build_quote_response(quote, &state.config.http, is_head),
            // Unreachable while the startup guard holds, but never panic on it
            Err(e) => {
                logger::log_error(&format!("Quote selection failed: {e}"));
                response::build_500_response()
            }
        },
        _ => response::build_404_response(),
    }
}

pub async fn handle_request(
    req: Request<hyper::body::Incoming>,
    peer_addr: SocketAddr,
    state: Arc<AppState>,
) -> Result<Response<Full<Bytes>>, Infallible> {
    let method = req.method().clone();
    let path = req.uri().path().to_string();
    let is_head = method == Method::HEAD;

    let resp = match check_http_method(&method) {
        Some(early) => early,
        None => route_request(&path, is_head, &state),
    };

    if state.config.logging.access_log {
        let body_bytes = resp.body().size_hint().exact().unwrap_or(0);
        logger::log_access(
            &peer_addr,
            method.as_str(),
            &path,
            resp.status().as_u16(),
            body_bytes,
        );
    }

    Ok(resp)
}
