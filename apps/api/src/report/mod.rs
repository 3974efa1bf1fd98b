// Report pipeline — narrative generation, assembly, and the HTTP orchestration
// around them. All LLM calls go through llm_client; the assembler stays pure.

pub mod assembler;
pub mod handlers;
pub mod narrative;
pub mod prompts;
