//! mebot - a persona chat agent
//!
//! Answers questions on behalf of a represented person, grounded in their
//! summary, LinkedIn profile and resume, against any OpenAI-compatible
//! chat-completions backend. Tool calls let the model record visitor
//! contact details and unanswered questions as push notifications.

pub mod agent;
pub mod config;
pub mod documents;
pub mod llm;
pub mod notify;
pub mod persona;
pub mod prompts;
pub mod tools;

#[cfg(test)]
pub mod test_utils;
