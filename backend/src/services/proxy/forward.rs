use actix_web::http::StatusCode;
use actix_web::{web, HttpRequest, HttpResponse};
use common::requests::ErrorBody;
use log::{debug, warn};
use thiserror::Error;

/// The export service requests are relayed to.
#[derive(Clone, Debug)]
pub struct Upstream {
    base: String,
    client: reqwest::Client,
}

#[derive(Debug, Error)]
pub enum ProxyError {
    #[error("unsupported method {0}")]
    Method(String),

    #[error("export service unreachable: {0}")]
    Upstream(#[from] reqwest::Error),
}

impl Upstream {
    pub fn new(base: &str) -> Self {
        Self {
            base: base.trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
        }
    }

    /// Upstream URL for an incoming path and raw query string.
    pub(crate) fn url_for(&self, path: &str, query: &str) -> String {
        if query.is_empty() {
            format!("{}{}", self.base, path)
        } else {
            format!("{}{}?{}", self.base, path, query)
        }
    }
}

pub(crate) async fn process(
    req: HttpRequest,
    body: web::Bytes,
    upstream: web::Data<Upstream>,
) -> HttpResponse {
    match forward(&req, body, &upstream).await {
        Ok(response) => response,
        Err(e) => {
            warn!("{} {} failed: {}", req.method(), req.path(), e);
            HttpResponse::BadGateway().json(ErrorBody {
                error: Some(e.to_string()),
            })
        }
    }
}

/// Per-connection headers that must not cross the relay.
const HOP_BY_HOP: [&str; 10] = [
    "connection",
    "keep-alive",
    "proxy-authenticate",
    "proxy-authorization",
    "te",
    "trailer",
    "transfer-encoding",
    "upgrade",
    "host",
    "content-length",
];

fn is_end_to_end(name: &str) -> bool {
    !HOP_BY_HOP.iter().any(|h| name.eq_ignore_ascii_case(h))
}

async fn forward(
    req: &HttpRequest,
    body: web::Bytes,
    upstream: &Upstream,
) -> Result<HttpResponse, ProxyError> {
    let url = upstream.url_for(req.path(), req.query_string());
    let method = reqwest::Method::from_bytes(req.method().as_str().as_bytes())
        .map_err(|_| ProxyError::Method(req.method().to_string()))?;
    debug!("{} {}", method, url);

    let mut request = upstream.client.request(method, url).body(body.to_vec());
    for (name, value) in req.headers().iter() {
        if is_end_to_end(name.as_str()) {
            request = request.header(name.as_str(), value.as_bytes());
        }
    }

    let response = request.send().await?;
    let status =
        StatusCode::from_u16(response.status().as_u16()).unwrap_or(StatusCode::BAD_GATEWAY);
    let headers: Vec<(String, Vec<u8>)> = response
        .headers()
        .iter()
        .filter(|(name, _)| is_end_to_end(name.as_str()))
        .map(|(name, value)| (name.as_str().to_string(), value.as_bytes().to_vec()))
        .collect();
    let bytes = response.bytes().await?;

    let mut builder = HttpResponse::build(status);
    for (name, value) in headers {
        builder.append_header((name, web::Bytes::from(value)));
    }
    Ok(builder.body(bytes.to_vec()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test as actix_test;
    use actix_web::{App, HttpServer};
    use std::net::SocketAddr;

    /// Echoes the incoming `Cookie` and opens a session of its own.
    async fn session_echo(req: HttpRequest) -> HttpResponse {
        let cookie = req
            .headers()
            .get("cookie")
            .and_then(|v| v.to_str().ok())
            .unwrap_or("<none>")
            .to_string();
        HttpResponse::Ok()
            .append_header(("set-cookie", "sid=abc; Path=/"))
            .append_header(("set-cookie", "theme=dark; Path=/"))
            .append_header(("x-export-trace", "t-1"))
            .json(serde_json::json!({ "tables": [cookie] }))
    }

    fn start_upstream() -> SocketAddr {
        let server = HttpServer::new(|| {
            App::new().route("/api/discover-schema", web::get().to(session_echo))
        })
        .workers(1)
        .bind(("127.0.0.1", 0))
        .unwrap();
        let addr = server.addrs()[0];
        actix_web::rt::spawn(server.run());
        addr
    }

    #[test]
    fn url_keeps_path_and_query() {
        let upstream = Upstream::new("http://export:9090/");
        assert_eq!(
            upstream.url_for("/api/discover-schema", "table=orders"),
            "http://export:9090/api/discover-schema?table=orders"
        );
        assert_eq!(
            upstream.url_for("/api/transfer", ""),
            "http://export:9090/api/transfer"
        );
    }

    #[test]
    fn hop_by_hop_headers_are_not_relayed() {
        assert!(!is_end_to_end("Connection"));
        assert!(!is_end_to_end("transfer-encoding"));
        assert!(!is_end_to_end("Host"));
        assert!(is_end_to_end("cookie"));
        assert!(is_end_to_end("Set-Cookie"));
        assert!(is_end_to_end("authorization"));
    }

    #[actix_web::test]
    async fn session_cookies_cross_the_relay_both_ways() {
        let addr = start_upstream();
        let app = actix_test::init_service(
            App::new()
                .app_data(web::Data::new(Upstream::new(&format!("http://{}", addr))))
                .service(crate::services::proxy::configure_routes()),
        )
        .await;

        let req = actix_test::TestRequest::get()
            .uri("/api/discover-schema")
            .insert_header(("cookie", "sid=abc"))
            .to_request();
        let resp = actix_test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let cookies: Vec<_> = resp
            .headers()
            .get_all("set-cookie")
            .filter_map(|v| v.to_str().ok())
            .map(str::to_string)
            .collect();
        assert_eq!(cookies, vec!["sid=abc; Path=/", "theme=dark; Path=/"]);
        assert_eq!(
            resp.headers().get("x-export-trace").and_then(|v| v.to_str().ok()),
            Some("t-1")
        );
        assert!(resp
            .headers()
            .get("content-type")
            .and_then(|v| v.to_str().ok())
            .is_some_and(|ct| ct.starts_with("application/json")));

        let body: common::requests::TablesResponse = actix_test::read_body_json(resp).await;
        assert_eq!(body.tables, vec!["sid=abc"]);
    }

    #[actix_web::test]
    async fn unreachable_upstream_answers_with_error_body() {
        let app = actix_test::init_service(
            App::new()
                .app_data(web::Data::new(Upstream::new("http://127.0.0.1:1")))
                .service(crate::services::proxy::configure_routes()),
        )
        .await;

        let req = actix_test::TestRequest::post()
            .uri("/api/connect")
            .set_json(serde_json::json!({ "host": "", "secure": false }))
            .to_request();
        let resp = actix_test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);

        let body: ErrorBody = actix_test::read_body_json(resp).await;
        let message = body.error.unwrap();
        assert!(message.starts_with("export service unreachable"));
    }
}
