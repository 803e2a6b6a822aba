//! Interactive prompts: user disambiguation and password entry.

mod errors;
pub mod prompt;

pub use errors::UIError;
