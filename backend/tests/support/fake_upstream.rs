//! Scripted stand-in for the upstream travel API.
//!
//! Each route is keyed by `"METHOD /path"` and answers with a canned status
//! and JSON body. Every request is recorded so tests can assert on what the
//! front end actually sent.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use actix_web::dev::ServerHandle;
use actix_web::http::StatusCode;
use actix_web::{App, HttpRequest, HttpResponse, HttpServer, web};
use serde_json::Value;
use url::Url;

/// One request observed by the fake upstream.
#[derive(Debug, Clone)]
pub struct Recorded {
    pub route: String,
    pub query: String,
    pub authorization: Option<String>,
    pub body: Value,
}

#[derive(Debug, Clone, Default)]
pub struct Script {
    routes: HashMap<String, (u16, Value)>,
    seen: Arc<Mutex<Vec<Recorded>>>,
}

impl Script {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer `route` (for example `"GET /app/Users/profile"`) with `status`
    /// and `body`.
    pub fn on(mut self, route: &str, status: u16, body: Value) -> Self {
        self.routes.insert(route.to_owned(), (status, body));
        self
    }

    /// Requests recorded so far for `route`.
    pub fn hits(&self, route: &str) -> Vec<Recorded> {
        self.seen
            .lock()
            .expect("recorder lock")
            .iter()
            .filter(|recorded| recorded.route == route)
            .cloned()
            .collect()
    }
}

/// A running fake upstream; stops when dropped.
pub struct FakeUpstream {
    pub base_url: Url,
    pub script: Script,
    handle: ServerHandle,
}

impl FakeUpstream {
    /// Bind to an ephemeral port and serve `script` on the current system.
    pub fn start(script: Script) -> Self {
        let data = web::Data::new(script.clone());
        let server = HttpServer::new(move || {
            App::new()
                .app_data(data.clone())
                .default_service(web::to(respond))
        })
        .workers(1)
        .bind(("127.0.0.1", 0))
        .expect("bind fake upstream");
        let addr = *server.addrs().first().expect("bound address");
        let server = server.run();
        let handle = server.handle();
        actix_rt::spawn(server);

        Self {
            base_url: Url::parse(&format!("http://{addr}/")).expect("fake upstream url"),
            script,
            handle,
        }
    }
}

impl Drop for FakeUpstream {
    fn drop(&mut self) {
        drop(self.handle.stop(false));
    }
}

async fn respond(req: HttpRequest, body: web::Bytes, script: web::Data<Script>) -> HttpResponse {
    let route = format!("{} {}", req.method(), req.path());
    let authorization = req
        .headers()
        .get("authorization")
        .and_then(|value| value.to_str().ok())
        .map(str::to_owned);
    script.seen.lock().expect("recorder lock").push(Recorded {
        route: route.clone(),
        query: req.query_string().to_owned(),
        authorization,
        body: serde_json::from_slice(&body).unwrap_or(Value::Null),
    });

    match script.routes.get(&route) {
        Some((status, payload)) => {
            let status = StatusCode::from_u16(*status).expect("scripted status");
            HttpResponse::build(status).json(payload)
        }
        None => HttpResponse::NotFound().json(serde_json::json!({
            "message": format!("no script for {route}")
        })),
    }
}
