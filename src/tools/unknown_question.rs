//! record_unknown_question tool: log a question the persona could not answer.

use crate::notify::Notifier;
use serde_json::{json, Value};

pub const NAME: &str = "record_unknown_question";

pub const DESCRIPTION: &str = "Always use this tool to record any question that \
couldn't be answered as you didn't know the answer";

pub fn parameters() -> Value {
    json!({
        "type": "object",
        "properties": {
            "question": {
                "type": "string",
                "description": "The question that couldn't be answered"
            }
        },
        "required": ["question"],
        "additionalProperties": false
    })
}

pub fn execute(args: &Value, notifier: &dyn Notifier) -> Value {
    let question = args.get("question").and_then(|v| v.as_str()).unwrap_or("");
    notifier.push(&format!("Recording {}", question));
    json!({"recorded": "ok"})
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::RecordingNotifier;

    #[test]
    fn test_records_question() {
        let notifier = RecordingNotifier::new();
        let result = execute(&json!({"question": "Do you like skiing?"}), &notifier);
        assert_eq!(result, json!({"recorded": "ok"}));
        assert_eq!(notifier.sent(), vec!["Recording Do you like skiing?"]);
    }

    #[test]
    fn test_missing_question_still_acknowledges() {
        let notifier = RecordingNotifier::new();
        let result = execute(&json!({}), &notifier);
        assert_eq!(result, json!({"recorded": "ok"}));
        assert_eq!(notifier.sent().len(), 1);
    }
}
