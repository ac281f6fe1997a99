//! Forexscript Core Library
//!
//! Builds prompts for short-form forex video scripts, sends them to a
//! chat-completions backend, splits the reply into hook/body/CTA and counts
//! words against the chosen length. Scripts can then be transcreated into
//! other languages with the same structure.

pub mod client;
pub mod duration;
pub mod error;
pub mod export;
pub mod format;
pub mod parser;
pub mod pipeline;
pub mod prompt;
pub mod provider;
pub mod session;
pub mod taxonomy;
pub mod types;
pub mod words;

// Re-export commonly used items at crate root
pub use client::{ChatCompletionsClient, GenerationClient, GenerationParams};
pub use duration::{DurationLabel, DurationProfile};
pub use error::{Result, ScriptError};
pub use export::{get_export_dir, load_export, save_export, save_script};
pub use format::{export_file_name, format_script_export, format_word_counts};
pub use parser::parse_script;
pub use pipeline::{generate_script, transcreate_script};
pub use prompt::{Prompt, build_generation_prompt, build_transcreation_prompt};
pub use provider::{OPENAI, ProviderConfig, SECRETS_PATH_ENV, SecretsStore, default_secrets_path};
pub use session::Session;
pub use taxonomy::{Category, CategoryId};
pub use types::{
    GeneratedScript, InputKind, Language, ScriptRequest, ScriptSegments, TranscreatedScript,
    TranscreationRequest, WordCounts,
};
pub use words::{BudgetReport, budget, count_words, evaluate};
