pub mod gemini;
pub mod parse;
pub mod r#trait;

pub use gemini::GeminiProvider;
pub use parse::{parse_json_reply, parse_reply_as};
pub use r#trait::{GenerativeProvider, ResponseFormat};
