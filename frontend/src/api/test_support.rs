#[cfg(test)]
pub mod mock {
    use crate::api::client::{register_mock, MockResponse, TestResponder};
    use crate::api::ApiError;
    use reqwest::Method;
    use serde_json::Value;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};

    pub const GET: Method = Method::GET;
    pub const DELETE: Method = Method::DELETE;

    #[derive(Clone)]
    pub struct MockServer {
        inner: Arc<Mutex<Inner>>,
        base: String,
    }

    #[derive(Default)]
    struct Inner {
        routes: Vec<Route>,
        hits: usize,
    }

    #[derive(Clone)]
    struct Route {
        method: Method,
        path: String,
        headers: Vec<(String, String)>,
        outcome: Outcome,
    }

    #[derive(Clone)]
    enum Outcome {
        Respond(MockResponse),
        Unreachable,
    }

    impl Route {
        fn matches(&self, request: &reqwest::Request) -> bool {
            self.method == *request.method()
                && self.path == request.url().path()
                && self.headers.iter().all(|(name, value)| {
                    request
                        .headers()
                        .get(name.as_str())
                        .and_then(|v| v.to_str().ok())
                        == Some(value.as_str())
                })
        }
    }

    impl MockServer {
        pub async fn start_async() -> Self {
            Self::start()
        }

        pub fn start() -> Self {
            static NEXT_ID: AtomicUsize = AtomicUsize::new(1);
            let id = NEXT_ID.fetch_add(1, Ordering::Relaxed);
            Self {
                inner: Arc::new(Mutex::new(Inner::default())),
                base: format!("http://mock-{}", id),
            }
        }

        /// Base URL for an `ApiClient`; registers this server for its host.
        pub fn url(&self, path: &str) -> String {
            let base_url = format!("{}{}", self.base, path);
            register_mock(base_url.clone(), Arc::new(self.clone()));
            base_url
        }

        /// Number of requests that reached this server, matched or not.
        pub fn hits(&self) -> usize {
            self.inner.lock().map(|inner| inner.hits).unwrap_or(0)
        }

        pub fn mock<F>(&self, f: F)
        where
            F: FnOnce(&mut When, &mut Then),
        {
            let mut when = When::default();
            let mut then = Then::default();
            f(&mut when, &mut then);

            let method = when.method.clone().expect("mock requires method");
            let path = when.path.clone().expect("mock requires path");
            let outcome = if then.unreachable {
                Outcome::Unreachable
            } else {
                Outcome::Respond(MockResponse::json(
                    then.status.unwrap_or(200),
                    then.body.unwrap_or_else(|| serde_json::json!({})),
                ))
            };

            let mut inner = self.inner.lock().expect("mock lock");
            inner.routes.push(Route {
                method,
                path,
                headers: when.headers,
                outcome,
            });
        }
    }

    impl TestResponder for MockServer {
        fn respond(&self, request: &reqwest::Request) -> Result<MockResponse, ApiError> {
            let mut inner = self
                .inner
                .lock()
                .map_err(|_| ApiError::unknown("mock lock"))?;
            inner.hits += 1;

            let route = inner
                .routes
                .iter()
                .rev()
                .find(|route| route.matches(request))
                .cloned();

            match route.map(|route| route.outcome) {
                Some(Outcome::Respond(response)) => Ok(response),
                Some(Outcome::Unreachable) => Err(ApiError::request_failed(format!(
                    "Request failed: connection refused for {}",
                    request.url()
                ))),
                None => Err(ApiError::request_failed(format!(
                    "No mock for {} {}",
                    request.method(),
                    request.url().path()
                ))),
            }
        }
    }

    #[derive(Default)]
    pub struct When {
        method: Option<Method>,
        path: Option<String>,
        headers: Vec<(String, String)>,
    }

    impl When {
        pub fn method(&mut self, method: Method) -> &mut Self {
            self.method = Some(method);
            self
        }

        pub fn path(&mut self, path: &str) -> &mut Self {
            self.path = Some(path.to_string());
            self
        }

        pub fn header(&mut self, name: &str, value: &str) -> &mut Self {
            self.headers.push((name.to_ascii_lowercase(), value.to_string()));
            self
        }
    }

    #[derive(Default)]
    pub struct Then {
        status: Option<u16>,
        body: Option<Value>,
        unreachable: bool,
    }

    impl Then {
        pub fn status(&mut self, status: u16) -> &mut Self {
            self.status = Some(status);
            self
        }

        pub fn json_body(&mut self, body: Value) -> &mut Self {
            self.body = Some(body);
            self
        }

        /// Fails the request as if the connection could not be made.
        pub fn unreachable(&mut self) -> &mut Self {
            self.unreachable = true;
            self
        }
    }
}
