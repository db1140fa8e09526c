//! record_user_details tool: capture a visitor who wants to be contacted.

use crate::notify::Notifier;
use serde_json::{json, Value};

pub const NAME: &str = "record_user_details";

pub const DESCRIPTION: &str = "Use this tool to record that a user is interested in \
being in touch and provided an email address";

pub fn parameters() -> Value {
    json!({
        "type": "object",
        "properties": {
            "email": {
                "type": "string",
                "description": "The email address of this user"
            },
            "name": {
                "type": "string",
                "description": "The user's name, if they provided it"
            },
            "notes": {
                "type": "string",
                "description": "Any additional information about the conversation that's worth recording to give context"
            }
        },
        "required": ["email"],
        "additionalProperties": false
    })
}

pub fn execute(args: &Value, notifier: &dyn Notifier) -> Value {
    let email = args.get("email").and_then(|v| v.as_str()).unwrap_or("");
    let name = args
        .get("name")
        .and_then(|v| v.as_str())
        .unwrap_or("Name not provided");
    let notes = args
        .get("notes")
        .and_then(|v| v.as_str())
        .unwrap_or("not provided");

    notifier.push(&format!(
        "Recording {} with email {} and notes {}",
        name, email, notes
    ));
    json!({"recorded": "ok"})
}
