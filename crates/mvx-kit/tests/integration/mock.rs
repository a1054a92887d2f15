//! In-memory transport that records requests and replays canned responses.

use std::collections::HashMap;
use std::sync::Mutex;

use futures::future::BoxFuture;
use mvx_kit::{Transport, TransportError};
use serde_json::Value;

/// A request seen by the mock.
#[derive(Debug, Clone, PartialEq)]
pub struct Recorded {
    pub method: &'static str,
    pub path: String,
    pub query: Vec<(String, String)>,
    pub body: Option<String>,
}

#[derive(Default)]
pub struct MockTransport {
    responses: Mutex<HashMap<String, Result<Value, (u16, String)>>>,
    requests: Mutex<Vec<Recorded>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer `path` with a 200 and `body`.
    pub fn respond(self, path: &str, body: Value) -> Self {
        self.responses
            .lock()
            .unwrap()
            .insert(path.to_string(), Ok(body));
        self
    }

    /// Answer `path` with a non-2xx `status`.
    pub fn fail(self, path: &str, status: u16, body: &str) -> Self {
        self.responses
            .lock()
            .unwrap()
            .insert(path.to_string(), Err((status, body.to_string())));
        self
    }

    pub fn requests(&self) -> Vec<Recorded> {
        self.requests.lock().unwrap().clone()
    }

    fn answer(&self, recorded: Recorded) -> Result<Value, TransportError> {
        let path = recorded.path.clone();
        self.requests.lock().unwrap().push(recorded);
        match self.responses.lock().unwrap().get(&path) {
            Some(Ok(value)) => Ok(value.clone()),
            Some(Err((status, body))) => Err(TransportError::status(&path, *status, body.clone())),
            None => Err(TransportError::status(&path, 404, "no mock response")),
        }
    }
}

impl Transport for MockTransport {
    fn get<'a>(
        &'a self,
        path: &'a str,
        query: &'a [(String, String)],
    ) -> BoxFuture<'a, Result<Value, TransportError>> {
        let result = self.answer(Recorded {
            method: "GET",
            path: path.to_string(),
            query: query.to_vec(),
            body: None,
        });
        Box::pin(async move { result })
    }

    fn post<'a>(
        &'a self,
        path: &'a str,
        body: String,
    ) -> BoxFuture<'a, Result<Value, TransportError>> {
        let result = self.answer(Recorded {
            method: "POST",
            path: path.to_string(),
            query: Vec::new(),
            body: Some(body),
        });
        Box::pin(async move { result })
    }
}
