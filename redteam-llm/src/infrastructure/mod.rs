//! Provider implementations, prompt templates and response parsing

pub mod prompts;
pub mod providers;
pub mod registry;
pub mod report_parser;
pub mod response_parser;

pub use providers::{AnthropicProvider, OpenAIProvider};
pub use registry::{ProviderType, create_provider};
pub use report_parser::{HeadingSectionParser, ReportParser};
pub use response_parser::ResponseParser;
