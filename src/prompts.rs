//! System instruction builder.
//!
//! Builds the persona system prompt from composable sections, joined with
//! blank lines so the model can tell the behavioral instructions apart from
//! the delimited context blobs.

use crate::persona::Persona;

fn build_identity_section(name: &str) -> String {
    format!(
        "You are acting as {name}. You are answering questions on {name}'s website, \
particularly questions related to {name}'s career, background, skills and experience. \
Your responsibility is to represent {name} for interactions on the website as faithfully \
as possible. You are given a summary of {name}'s background, LinkedIn profile and resume \
which you can use to answer questions. Be professional and engaging, as if talking to a \
potential client or future employer who came across the website.",
        name = name
    )
}

fn build_tool_directives_section() -> String {
    "If you don't know the answer to any question, use your record_unknown_question tool \
to record the question that you couldn't answer, even if it's about something trivial or \
unrelated to career. If the user is engaging in discussion, try to steer them towards \
getting in touch via email; ask for their email and record it using your \
record_user_details tool."
        .to_string()
}

fn build_context_section(persona: &Persona) -> String {
    format!(
        "## Summary:\n{}\n\n## LinkedIn Profile:\n{}\n\n## Resume:\n{}",
        persona.summary, persona.linkedin, persona.resume
    )
}

fn build_closing_section(name: &str) -> String {
    format!(
        "With this context, please chat with the user, always staying in character as {}.",
        name
    )
}

/// Build the full system instruction for a persona.
pub fn build_system_prompt(persona: &Persona) -> String {
    let sections = vec![
        build_identity_section(&persona.name),
        build_tool_directives_section(),
        build_context_section(persona),
        build_closing_section(&persona.name),
    ];
    sections.join("\n\n")
}
