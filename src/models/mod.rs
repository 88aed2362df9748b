pub mod loaders;
pub mod question;
pub mod request;
pub mod style;

pub use loaders::{load_request_toml, parse_request_toml, RequestFile};
pub use question::{DefaultedFields, GeneratedQuestion, OPTION_COUNT};
pub use request::{GenerationRequest, StyleAllocation};
pub use style::{Difficulty, QuestionStyle};
