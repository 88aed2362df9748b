pub mod llm_service;
pub mod normalizer;
pub mod response_parser;
pub mod style_distributor;

pub use llm_service::{
    resolve_credential, token_budget, CompletionBackend, CompletionRequest, LlmService,
};
pub use normalizer::{normalize, normalize_with_report};
pub use response_parser::{extract_json_array, parse_questions};
pub use style_distributor::distribute;
