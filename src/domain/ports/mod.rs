//! Port trait definitions (Hexagonal Architecture)
//!
//! - `TypePrompt`: interactive single-choice selection used to fill in
//!   missing type annotations
//!
//! The terminal-backed implementation lives in `infrastructure::prompt`.

pub mod null_prompt;
pub mod type_prompt;

pub use null_prompt::NullTypePrompt;
pub use type_prompt::TypePrompt;
