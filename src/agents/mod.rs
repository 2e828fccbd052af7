//! Prompt-producing pipeline stages over a shared LLM client.
//!
//! Each stage is a single request/response transform: it embeds its input
//! into a fixed instructional template, sends one prompt through the
//! [`TextGenerator`](crate::llm::TextGenerator) boundary, and hands opaque
//! text to the next stage. None of them validate what the model returned;
//! correctness is deferred to sandbox execution.

pub mod dataset;
pub mod spec;
pub mod viz;
