//! Shared helpers for chain integration tests.
#![allow(dead_code)]

use arpeggio_core::{GenerateRequest, GenerateResponse, Output};
use arpeggio_error::{ArpeggioResult, BackendError, BackendErrorKind};
use arpeggio_interface::ArpeggioDriver;
use async_trait::async_trait;
use std::collections::VecDeque;
use std::path::Path;
use std::sync::Mutex;

/// Scripted driver that replays canned responses in order and records
/// every request it receives.
pub struct MockDriver {
    responses: Mutex<VecDeque<String>>,
    requests: Mutex<Vec<GenerateRequest>>,
}

impl MockDriver {
    pub fn new(responses: &[&str]) -> Self {
        Self {
            responses: Mutex::new(responses.iter().map(|r| r.to_string()).collect()),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Every request seen so far, in call order.
    pub fn requests(&self) -> Vec<GenerateRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    /// Concatenated message contents of the nth request.
    pub fn request_text(&self, index: usize) -> String {
        let requests = self.requests.lock().unwrap();
        requests[index]
            .messages
            .iter()
            .map(|m| m.content.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[async_trait]
impl ArpeggioDriver for MockDriver {
    async fn generate(&self, request: &GenerateRequest) -> ArpeggioResult<GenerateResponse> {
        self.requests.lock().unwrap().push(request.clone());
        match self.responses.lock().unwrap().pop_front() {
            Some(text) => Ok(GenerateResponse {
                outputs: vec![Output::Text(text)],
            }),
            None => Err(BackendError::new(BackendErrorKind::Api {
                status: 500,
                message: "mock driver ran out of scripted responses".to_string(),
            })
            .into()),
        }
    }

    fn provider_name(&self) -> &'static str {
        "mock"
    }

    fn model_name(&self) -> &str {
        "mock-model"
    }
}

/// Writes a template file under the store root.
pub fn write_template(root: &Path, name: &str, content: &str) {
    std::fs::write(root.join(format!("{name}.toml")), content).unwrap();
}
