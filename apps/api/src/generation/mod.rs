// Generation engine: seeding, sampling, prompts, and the three use-case
// pipelines. All remote calls go through llm_client — no direct Groq calls here.

pub mod handlers;
pub mod lead_scoring;
pub mod marketing;
pub mod prompts;
pub mod sales;
pub mod sampler;
pub mod seed;
