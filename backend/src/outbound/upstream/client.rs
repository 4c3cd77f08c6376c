//! Reqwest transport for the upstream travel API.
//!
//! This type owns transport details only: URL resolution, the JSON and bearer
//! headers, the per-call deadline, the bounded retry, and mapping of transport
//! failures and non-2xx statuses into [`GatewayError`].

use std::time::Duration;

use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Client, Method, StatusCode, Url};
use serde::Serialize;
use tracing::{debug, error, warn};

use crate::domain::ports::GatewayError;
use crate::domain::{BearerToken, UpstreamErrorBody};

/// Upper bound for [`UpstreamClient::retries`].
pub const MAX_RETRIES: u8 = 1;

/// One upstream call.
pub(super) struct UpstreamCall<'a> {
    pub(super) method: Method,
    pub(super) path: &'static str,
    pub(super) token: Option<&'a BearerToken>,
    pub(super) query: &'a [(&'static str, &'a str)],
    pub(super) body: Option<Vec<u8>>,
}

impl<'a> UpstreamCall<'a> {
    pub(super) fn new(method: Method, path: &'static str) -> Self {
        Self {
            method,
            path,
            token: None,
            query: &[],
            body: None,
        }
    }

    pub(super) fn bearer(mut self, token: &'a BearerToken) -> Self {
        self.token = Some(token);
        self
    }

    pub(super) fn query(mut self, query: &'a [(&'static str, &'a str)]) -> Self {
        self.query = query;
        self
    }

    pub(super) fn json<B: Serialize>(mut self, body: &B) -> Result<Self, GatewayError> {
        let encoded = serde_json::to_vec(body).map_err(|err| {
            GatewayError::validation_failed("request body", err.to_string())
        })?;
        self.body = Some(encoded);
        Ok(self)
    }
}

enum AttemptError {
    Transport(reqwest::Error),
    Gateway(GatewayError),
}

impl AttemptError {
    /// Connection failures never reached upstream, so any method may retry.
    /// A timeout may have been processed, so only idempotent methods retry.
    fn is_retryable(&self, method: &Method) -> bool {
        match self {
            Self::Transport(err) if err.is_connect() => true,
            Self::Transport(err) if err.is_timeout() => method.is_idempotent(),
            Self::Transport(_) | Self::Gateway(_) => false,
        }
    }

    fn into_gateway_error(self) -> GatewayError {
        match self {
            Self::Transport(err) => map_transport_error(&err),
            Self::Gateway(err) => err,
        }
    }
}

/// HTTP client bound to one upstream base URL.
#[derive(Debug, Clone)]
pub struct UpstreamClient {
    client: Client,
    base: Url,
    retries: u8,
}

impl UpstreamClient {
    /// Build a client whose calls each carry `timeout` as their deadline.
    ///
    /// `retries` is clamped to [`MAX_RETRIES`].
    ///
    /// # Errors
    ///
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn new(base: Url, timeout: Duration, retries: u8) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base,
            retries: retries.min(MAX_RETRIES),
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base
    }

    pub fn retries(&self) -> u8 {
        self.retries
    }

    /// Perform `call` and return the body of a 2xx response.
    pub(super) async fn send(&self, call: UpstreamCall<'_>) -> Result<Vec<u8>, GatewayError> {
        let url = self.resolve(call.path, call.query)?;
        let mut attempt: u8 = 0;
        loop {
            match self.attempt(&call, &url).await {
                Ok(body) => return Ok(body),
                Err(err) if attempt < self.retries && err.is_retryable(&call.method) => {
                    attempt += 1;
                    if let AttemptError::Transport(cause) = &err {
                        warn!(method = %call.method, path = call.path, attempt, error = %cause, "retrying upstream call");
                    }
                }
                Err(err) => {
                    let err = err.into_gateway_error();
                    if err.is_transport() {
                        error!(method = %call.method, path = call.path, error = %err, "upstream call failed");
                    }
                    return Err(err);
                }
            }
        }
    }

    async fn attempt(&self, call: &UpstreamCall<'_>, url: &Url) -> Result<Vec<u8>, AttemptError> {
        debug!(method = %call.method, path = call.path, "calling upstream");
        let mut request = self
            .client
            .request(call.method.clone(), url.clone())
            .header(CONTENT_TYPE, "application/json");
        if let Some(token) = call.token {
            request = request.header(AUTHORIZATION, token.authorization());
        }
        if let Some(body) = &call.body {
            request = request.body(body.clone());
        }

        let response = request.send().await.map_err(AttemptError::Transport)?;
        let status = response.status();
        let body = response.bytes().await.map_err(AttemptError::Transport)?;
        if !status.is_success() {
            return Err(AttemptError::Gateway(map_status_error(
                call.path,
                status,
                body.as_ref(),
            )));
        }
        Ok(body.to_vec())
    }

    /// Resolve `path` against the base URL the way a browser resolves a
    /// relative reference, then append `query`.
    fn resolve(&self, path: &str, query: &[(&str, &str)]) -> Result<Url, GatewayError> {
        let mut url = self.base.join(path).map_err(|err| {
            GatewayError::unreachable(format!("invalid upstream url for {path}: {err}"))
        })?;
        if !query.is_empty() {
            url.query_pairs_mut().extend_pairs(query.iter().copied());
        }
        Ok(url)
    }
}

fn map_transport_error(err: &reqwest::Error) -> GatewayError {
    if err.is_timeout() {
        GatewayError::timeout(err.to_string())
    } else {
        GatewayError::unreachable(err.to_string())
    }
}

fn map_status_error(path: &str, status: StatusCode, body: &[u8]) -> GatewayError {
    let decoded = UpstreamErrorBody::decode(body);
    warn!(path, status = status.as_u16(), "upstream rejected request");
    GatewayError::rejected(status.as_u16(), decoded)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::ErrorKind;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use rstest::rstest;
    use tokio::net::{TcpListener, TcpStream};

    fn client(base: &str) -> UpstreamClient {
        let base = Url::parse(base).expect("base url");
        UpstreamClient::new(base, Duration::from_secs(1), 5).expect("client")
    }

    #[rstest]
    #[case("https://api.example.com", "https://api.example.com/app/Users/login")]
    #[case("https://api.example.com/v1/", "https://api.example.com/app/Users/login")]
    fn absolute_paths_replace_the_base_path(#[case] base: &str, #[case] expected: &str) {
        let url = client(base)
            .resolve("/app/Users/login", &[])
            .expect("url");
        assert_eq!(url.as_str(), expected);
    }

    #[rstest]
    fn query_pairs_are_encoded() {
        let url = client("https://api.example.com")
            .resolve("/app/Members/acceptInvite", &[
                ("memberIdMagic", "a b"),
                ("tripIdMagic", "t&1"),
            ])
            .expect("url");
        assert_eq!(
            url.as_str(),
            "https://api.example.com/app/Members/acceptInvite?memberIdMagic=a+b&tripIdMagic=t%261"
        );
    }

    #[rstest]
    fn retries_are_clamped() {
        assert_eq!(client("https://api.example.com").retries(), MAX_RETRIES);
    }

    #[rstest]
    fn status_errors_carry_decoded_payload() {
        let err = map_status_error(
            "/app/Trips/delete",
            StatusCode::NOT_FOUND,
            br#"{"message":"not found"}"#,
        );
        assert_eq!(
            err,
            GatewayError::rejected(404_u16, UpstreamErrorBody::Message("not found".into()))
        );
    }

    /// Local listener counting accepted connections. Without a canned reply
    /// it holds every connection open and never answers.
    struct CountingListener {
        base: String,
        accepted: Arc<AtomicUsize>,
    }

    impl CountingListener {
        async fn start(reply: Option<&'static str>) -> Self {
            let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind listener");
            let addr = listener.local_addr().expect("listener address");
            let accepted = Arc::new(AtomicUsize::new(0));
            let counter = Arc::clone(&accepted);
            tokio::spawn(async move {
                let mut held = Vec::new();
                while let Ok((stream, _)) = listener.accept().await {
                    counter.fetch_add(1, Ordering::SeqCst);
                    match reply {
                        Some(response) => {
                            tokio::spawn(answer(stream, response));
                        }
                        None => held.push(stream),
                    }
                }
            });
            Self {
                base: format!("http://{addr}/"),
                accepted,
            }
        }

        fn client(&self) -> UpstreamClient {
            let base = Url::parse(&self.base).expect("listener url");
            UpstreamClient::new(base, Duration::from_millis(200), MAX_RETRIES).expect("client")
        }

        fn attempts(&self) -> usize {
            self.accepted.load(Ordering::SeqCst)
        }
    }

    /// Read one request head, then write `response` verbatim.
    async fn answer(stream: TcpStream, response: &'static str) {
        let mut head = Vec::new();
        let mut buf = [0_u8; 1024];
        while !head.windows(4).any(|window| window == b"\r\n\r\n") {
            if stream.readable().await.is_err() {
                return;
            }
            match stream.try_read(&mut buf) {
                Ok(0) => return,
                Ok(read) => head.extend_from_slice(&buf[..read]),
                Err(err) if err.kind() == ErrorKind::WouldBlock => {}
                Err(_) => return,
            }
        }
        let mut remaining = response.as_bytes();
        while !remaining.is_empty() {
            if stream.writable().await.is_err() {
                return;
            }
            match stream.try_write(remaining) {
                Ok(written) => remaining = &remaining[written..],
                Err(err) if err.kind() == ErrorKind::WouldBlock => {}
                Err(_) => return,
            }
        }
    }

    #[rstest]
    #[case::idempotent_get_retries_once(Method::GET, 2)]
    #[case::post_is_not_retried(Method::POST, 1)]
    #[tokio::test]
    async fn timeouts_retry_only_idempotent_methods(
        #[case] method: Method,
        #[case] expected_attempts: usize,
    ) {
        let listener = CountingListener::start(None).await;
        let body = serde_json::json!({ "title": "Lisbon" });
        let call = UpstreamCall::new(method, "/app/Trips/create")
            .json(&body)
            .expect("body");

        let err = listener.client().send(call).await.expect_err("deadline should pass");

        assert!(matches!(err, GatewayError::Timeout { .. }), "got {err:?}");
        assert_eq!(listener.attempts(), expected_attempts);
    }

    #[rstest]
    #[case::client_error(
        "HTTP/1.1 404 Not Found\r\nContent-Type: application/json\r\nContent-Length: 23\r\nConnection: close\r\n\r\n{\"message\":\"not found\"}",
        404
    )]
    #[case::server_error(
        "HTTP/1.1 500 Internal Server Error\r\nContent-Length: 0\r\nConnection: close\r\n\r\n",
        500
    )]
    #[tokio::test]
    async fn statuses_are_never_retried(#[case] response: &'static str, #[case] status: u16) {
        let listener = CountingListener::start(Some(response)).await;
        let call = UpstreamCall::new(Method::GET, "/app/Trips/listTrips");

        let err = listener.client().send(call).await.expect_err("status is an error");

        assert_eq!(err.status(), Some(status));
        assert_eq!(listener.attempts(), 1);
    }
}
