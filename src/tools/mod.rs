//! Tool registry and built-in tools.
//!
//! The registry is an explicit name -> handler capability table built once
//! at startup and read-only afterwards. Dispatch never reaches into any
//! ambient namespace.

pub mod contact;
pub mod unknown_question;

use crate::notify::Notifier;
use serde_json::{json, Value};
use std::collections::BTreeMap;
use std::sync::Arc;

/// A tool handler takes the deserialized argument mapping and returns a
/// JSON result that is serialized back into a tool-role message.
pub type Handler = Box<dyn Fn(&Value) -> Value + Send + Sync>;

struct Tool {
    description: String,
    parameters: Value,
    handler: Handler,
}

#[derive(Default)]
pub struct ToolRegistry {
    tools: BTreeMap<String, Tool>,
}

impl ToolRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with the two built-in recording tools wired to a notifier.
    pub fn builtin(notifier: Arc<dyn Notifier>) -> Self {
        let mut registry = Self::new();

        let n = Arc::clone(&notifier);
        registry.register(
            contact::NAME,
            contact::DESCRIPTION,
            contact::parameters(),
            Box::new(move |args| contact::execute(args, n.as_ref())),
        );

        registry.register(
            unknown_question::NAME,
            unknown_question::DESCRIPTION,
            unknown_question::parameters(),
            Box::new(move |args| unknown_question::execute(args, notifier.as_ref())),
        );

        registry
    }

    pub fn register(
        &mut self,
        name: &str,
        description: &str,
        parameters: Value,
        handler: Handler,
    ) {
        self.tools.insert(
            name.to_string(),
            Tool {
                description: description.to_string(),
                parameters,
                handler,
            },
        );
    }

    /// Invoke a tool by name. An unregistered name yields an empty object so
    /// the conversation survives a stray tool request from the model.
    pub fn invoke(&self, name: &str, args: &Value) -> Value {
        match self.tools.get(name) {
            Some(tool) => (tool.handler)(args),
            None => {
                eprintln!("[tools] unknown tool requested: {}", name);
                json!({})
            }
        }
    }

    /// Tool schemas in OpenAI function-calling format.
    pub fn schemas(&self) -> Vec<Value> {
        self.tools
            .iter()
            .map(|(name, tool)| {
                json!({
                    "type": "function",
                    "function": {
                        "name": name,
                        "description": tool.description,
                        "parameters": tool.parameters,
                    }
                })
            })
            .collect()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.tools.contains_key(name)
    }
}
