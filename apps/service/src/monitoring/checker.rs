use anyhow::Result;
use std::time::Duration;

use super::types::CheckOutcome;

/// Checker trait so tests can substitute a recording implementation
#[async_trait::async_trait]
pub trait Checker: Send + Sync {
    /// Perform one availability check against the target URL
    ///
    /// Infallible by contract: network failures come back as
    /// [`CheckOutcome::Unreachable`], never as an error.
    async fn check(&self, url: &str) -> CheckOutcome;
}

/// HTTP/HTTPS checker backed by a shared client
pub struct HttpChecker {
    client: reqwest::Client,
}

impl HttpChecker {
    /// Build a checker with a bounded per-request timeout
    ///
    /// The timeout keeps a stalled probe from holding up its check task
    /// past one tick.
    pub fn new(timeout_seconds: u64) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_seconds))
            .redirect(reqwest::redirect::Policy::limited(10))
            .build()?;

        Ok(Self { client })
    }
}

#[async_trait::async_trait]
impl Checker for HttpChecker {
    async fn check(&self, url: &str) -> CheckOutcome {
        // HEAD is enough to classify availability; redirects are followed
        match self.client.head(url).send().await {
            Ok(response) => classify_status(response.status()),
            Err(e) => CheckOutcome::Unreachable(e.to_string()),
        }
    }
}

fn classify_status(status: reqwest::StatusCode) -> CheckOutcome {
    if status.is_success() {
        CheckOutcome::Reachable
    } else if status == reqwest::StatusCode::NOT_FOUND {
        CheckOutcome::NotFound
    } else {
        CheckOutcome::Ambiguous(status.as_u16())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_status() {
        assert_eq!(
            classify_status(reqwest::StatusCode::OK),
            CheckOutcome::Reachable
        );
        assert_eq!(
            classify_status(reqwest::StatusCode::NO_CONTENT),
            CheckOutcome::Reachable
        );
        assert_eq!(
            classify_status(reqwest::StatusCode::NOT_FOUND),
            CheckOutcome::NotFound
        );
        assert_eq!(
            classify_status(reqwest::StatusCode::SERVICE_UNAVAILABLE),
            CheckOutcome::Ambiguous(503)
        );
        assert_eq!(
            classify_status(reqwest::StatusCode::MOVED_PERMANENTLY),
            CheckOutcome::Ambiguous(301)
        );
    }

    /// Local stub server so checker tests never leave the machine
    async fn spawn_stub_server() -> std::net::SocketAddr {
        use axum::{Router, http::StatusCode, routing::get};

        let app = Router::new()
            .route("/ok", get(|| async { "ok" }))
            .route("/teapot", get(|| async { StatusCode::IM_A_TEAPOT }));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        addr
    }

    #[tokio::test]
    async fn test_check_reachable() {
        let addr = spawn_stub_server().await;
        let checker = HttpChecker::new(5).unwrap();

        let outcome = checker.check(&format!("http://{}/ok", addr)).await;
        assert_eq!(outcome, CheckOutcome::Reachable);
    }

    #[tokio::test]
    async fn test_check_not_found() {
        let addr = spawn_stub_server().await;
        let checker = HttpChecker::new(5).unwrap();

        let outcome = checker.check(&format!("http://{}/missing", addr)).await;
        assert_eq!(outcome, CheckOutcome::NotFound);
    }

    #[tokio::test]
    async fn test_check_ambiguous_code() {
        let addr = spawn_stub_server().await;
        let checker = HttpChecker::new(5).unwrap();

        let outcome = checker.check(&format!("http://{}/teapot", addr)).await;
        assert_eq!(outcome, CheckOutcome::Ambiguous(418));
    }

    #[tokio::test]
    async fn test_check_unreachable() {
        let checker = HttpChecker::new(1).unwrap();

        // Nothing listens on port 9 locally; connection is refused
        let outcome = checker.check("http://127.0.0.1:9/").await;
        assert!(matches!(outcome, CheckOutcome::Unreachable(_)));
    }
}
