//! The conversation loop.
//!
//! One turn = one user message. The loop sends the full message sequence to
//! the model, executes any requested tool calls, folds the results back in
//! and repeats until the model produces a natural-language answer.

use crate::llm::{ChatRequest, LlmClient, ToolCall};
use crate::persona::Persona;
use crate::tools::ToolRegistry;
use anyhow::{anyhow, Result};
use serde_json::{json, Value};

/// Cap on completion requests per turn. The model deciding to call tools
/// forever must not amplify into unbounded requests against the endpoint.
const MAX_TOOL_ROUNDS: usize = 8;

/// Per-turn accounting.
#[derive(Debug, Default, Clone)]
pub struct TurnStats {
    pub input_tokens: u64,
    pub output_tokens: u64,
    pub tool_uses: u64,
    pub requests: u64,
}

impl TurnStats {
    pub fn total_tokens(&self) -> u64 {
        self.input_tokens + self.output_tokens
    }
}

#[derive(Debug, Default)]
pub struct TurnResult {
    pub reply: String,
    pub stats: TurnStats,
}

pub struct Agent {
    client: Box<dyn LlmClient>,
    registry: ToolRegistry,
    persona: Persona,
    model: String,
}

impl Agent {
    pub fn new(
        client: Box<dyn LlmClient>,
        registry: ToolRegistry,
        persona: Persona,
        model: &str,
    ) -> Self {
        Self {
            client,
            registry,
            persona,
            model: model.to_string(),
        }
    }

    /// The chat surface: new user message plus prior history in, final
    /// answer out. History is caller-owned; tool exchanges stay inside the
    /// turn and are never persisted.
    pub fn chat(&self, message: &str, history: &[Value]) -> Result<String> {
        Ok(self.run_turn(message, history)?.reply)
    }

    pub fn run_turn(&self, message: &str, history: &[Value]) -> Result<TurnResult> {
        let mut stats = TurnStats::default();

        let mut messages = vec![json!({
            "role": "system",
            "content": self.persona.system_prompt()
        })];
        messages.extend_from_slice(history);
        messages.push(json!({
            "role": "user",
            "content": message
        }));

        let tool_schemas = self.registry.schemas();

        for _round in 0..MAX_TOOL_ROUNDS {
            let request = ChatRequest {
                model: self.model.clone(),
                messages: messages.clone(),
                tools: Some(tool_schemas.clone()),
                tool_choice: Some("auto".to_string()),
            };

            let response = self.client.chat(&request)?;
            stats.requests += 1;

            if let Some(usage) = &response.usage {
                stats.input_tokens += usage.prompt_tokens;
                stats.output_tokens += usage.completion_tokens;
            }

            let choice = response
                .choices
                .into_iter()
                .next()
                .ok_or_else(|| anyhow!("empty response from model"))?;
            let msg = choice.message;

            let tool_calls = match (choice.finish_reason.as_deref(), msg.tool_calls) {
                (Some("tool_calls"), Some(tc)) if !tc.is_empty() => tc,
                _ => {
                    // Final answer: the turn is done.
                    return Ok(TurnResult {
                        reply: msg.content.unwrap_or_default(),
                        stats,
                    });
                }
            };

            messages.push(json!({
                "role": "assistant",
                "content": msg.content,
                "tool_calls": tool_calls
            }));

            for tc in &tool_calls {
                stats.tool_uses += 1;
                let result = self.execute_tool_call(tc);
                messages.push(json!({
                    "role": "tool",
                    "tool_call_id": tc.id,
                    "content": serde_json::to_string(&result)?
                }));
            }
        }

        Err(anyhow!(
            "no final answer after {} tool-calling rounds",
            MAX_TOOL_ROUNDS
        ))
    }

    /// Execute one requested invocation. Malformed argument payloads become
    /// an in-band error result so the turn keeps going.
    fn execute_tool_call(&self, tc: &ToolCall) -> Value {
        let name = &tc.function.name;
        eprintln!("Tool called: {}", name);

        match serde_json::from_str::<Value>(&tc.function.arguments) {
            Ok(args) => self.registry.invoke(name, &args),
            Err(e) => json!({
                "error": {
                    "code": "invalid_arguments",
                    "message": format!("arguments for {} are not valid JSON: {}", name, e)
                }
            }),
        }
    }
}
