use crate::llm::{ChatRequest, ChatResponse, Choice, LlmClient, Message, ToolCall, Usage};
use crate::notify::Notifier;
use anyhow::{anyhow, Result};
use std::sync::{Arc, Mutex};

/// Scripted LLM client: pops canned responses, records every request.
#[derive(Clone)]
pub struct MockLlmClient {
    responses: Arc<Mutex<Vec<ChatResponse>>>,
    requests: Arc<Mutex<Vec<ChatRequest>>>,
}

impl MockLlmClient {
    pub fn new(responses: Vec<ChatResponse>) -> Self {
        Self {
            responses: Arc::new(Mutex::new(responses)),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn requests(&self) -> Vec<ChatRequest> {
        self.requests.lock().expect("requests lock").clone()
    }

    pub fn response_with_content(content: &str) -> ChatResponse {
        ChatResponse {
            choices: vec![Choice {
                message: Message {
                    role: "assistant".to_string(),
                    content: Some(content.to_string()),
                    tool_calls: None,
                },
                finish_reason: Some("stop".to_string()),
            }],
            usage: None,
        }
    }

    pub fn response_with_content_and_usage(
        content: &str,
        prompt_tokens: u64,
        completion_tokens: u64,
    ) -> ChatResponse {
        let mut resp = Self::response_with_content(content);
        resp.usage = Some(Usage {
            prompt_tokens,
            completion_tokens,
        });
        resp
    }

    pub fn response_with_tool_calls(tool_calls: Vec<ToolCall>) -> ChatResponse {
        ChatResponse {
            choices: vec![Choice {
                message: Message {
                    role: "assistant".to_string(),
                    content: None,
                    tool_calls: Some(tool_calls),
                },
                finish_reason: Some("tool_calls".to_string()),
            }],
            usage: None,
        }
    }
}

impl LlmClient for MockLlmClient {
    fn chat(&self, request: &ChatRequest) -> Result<ChatResponse> {
        self.requests
            .lock()
            .expect("requests lock")
            .push(request.clone());
        let mut responses = self.responses.lock().expect("responses lock");
        if responses.is_empty() {
            return Ok(MockLlmClient::response_with_content(""));
        }
        Ok(responses.remove(0))
    }
}

/// LLM client whose every request fails, for turn-error tests.
pub struct FailingLlmClient;

impl LlmClient for FailingLlmClient {
    fn chat(&self, _request: &ChatRequest) -> Result<ChatResponse> {
        Err(anyhow!("endpoint unreachable"))
    }
}

/// Notifier that captures messages instead of delivering them.
#[derive(Default)]
pub struct RecordingNotifier {
    sent: Mutex<Vec<String>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sent(&self) -> Vec<String> {
        self.sent.lock().expect("sent lock").clone()
    }
}

impl Notifier for RecordingNotifier {
    fn push(&self, text: &str) {
        self.sent.lock().expect("sent lock").push(text.to_string());
    }
}
