// Shared prompt fragments. Each service that needs LLM calls defines its own
// prompts.rs alongside it and appends these where the output must be machine-read.

/// Closing instruction for prompts whose answer is parsed as JSON.
pub const JSON_ONLY_INSTRUCTION: &str = "Return ONLY the JSON object, with no additional text.";
