//! Shared support for the cross-crate behavior suites.

use std::future::Future;
use std::pin::Pin;
use std::sync::Mutex;

use stockpilot_core::{HttpClient, HttpError, HttpRequest, HttpResponse};

/// Scripted transport: answers requests from canned rules and records
/// every URL it sees, so suites can assert on traffic (or its absence).
#[derive(Default)]
pub struct ScriptedHttpClient {
    rules: Mutex<Vec<(String, HttpResponse)>>,
    requests: Mutex<Vec<String>>,
}

impl ScriptedHttpClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer any URL containing `fragment` with the given status/body.
    /// Rules are matched in insertion order.
    pub fn respond(self, fragment: impl Into<String>, status: u16, body: impl Into<String>) -> Self {
        self.rules.lock().expect("rules lock").push((
            fragment.into(),
            HttpResponse {
                status,
                body: body.into(),
            },
        ));
        self
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().expect("requests lock").len()
    }

    pub fn requested_urls(&self) -> Vec<String> {
        self.requests.lock().expect("requests lock").clone()
    }
}

impl HttpClient for ScriptedHttpClient {
    fn execute<'a>(
        &'a self,
        request: HttpRequest,
    ) -> Pin<Box<dyn Future<Output = Result<HttpResponse, HttpError>> + Send + 'a>> {
        self.requests
            .lock()
            .expect("requests lock")
            .push(request.url.clone());

        let response = self
            .rules
            .lock()
            .expect("rules lock")
            .iter()
            .find(|(fragment, _)| request.url.contains(fragment.as_str()))
            .map(|(_, response)| response.clone());

        Box::pin(async move {
            match response {
                Some(response) => Ok(response),
                None => Ok(HttpResponse {
                    status: 404,
                    body: String::from("{\"error\":\"not scripted\"}"),
                }),
            }
        })
    }
}
