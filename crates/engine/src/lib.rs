//! Frameloom engine - Transformation resolution and prompt construction.
//!
//! The computational core of the pre-production pipeline: given a scene's
//! shot list, assets, and confirmed transformation events, decide what every
//! asset looks like at any shot and turn that into generation instructions.
//! Persistence, LLM execution, and job orchestration sit behind the port
//! traits in `infrastructure::ports`.

pub mod infrastructure;
pub mod llm_context;
pub mod prompt_templates;
pub mod use_cases;
